//! Batch re-import of edited TGA frames into a cinematic container.
//!
//! Import lists name one TGA file per line using the pattern the exporter
//! produced: `<prefix>_<frame>_<chunk>.<ext>` with four-digit indices, e.g.
//! `CINE00_0346_0000.TGA`. Each file replaces the image chunk it names; a
//! file that cannot be imported is skipped with a warning and the rest of
//! the batch continues.

use std::path::{Path, PathBuf};

use log::warn;

use super::file::File;
use crate::file::{AnmError, tga};

/// One entry of an import list: a TGA path plus the frame and chunk
/// indices embedded in its file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportEntry {
	/// Path of the TGA file to import
	pub path: PathBuf,
	/// Target frame index
	pub frame: usize,
	/// Target chunk index within the frame
	pub chunk: usize,
}

impl ImportEntry {
	/// Parses the frame and chunk indices out of a file name.
	///
	/// Returns `None` when the name does not end in `_<frame>_<chunk>`
	/// before the extension. The prefix may itself contain underscores;
	/// the two indices are taken from the end.
	pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
		let path = path.as_ref();
		let stem = path.file_stem()?.to_str()?;

		let mut parts = stem.rsplitn(3, '_');
		let chunk = parts.next()?.parse().ok()?;
		let frame = parts.next()?.parse().ok()?;
		parts.next()?;

		Some(Self {
			path: path.to_path_buf(),
			frame,
			chunk,
		})
	}
}

/// Imports every entry into the container, substituting one image chunk
/// per file.
///
/// Returns the number of chunks substituted. Per-entry failures (missing
/// file, short TGA, non-image target, odd-length pixel run) are logged and
/// skipped; they never abort the batch, and the targeted chunk keeps its
/// original contents.
pub fn import_files(file: &mut File, entries: &[ImportEntry]) -> usize {
	let mut substituted = 0;

	for entry in entries {
		match import_one(file, entry) {
			Ok(()) => substituted += 1,
			Err(err) => {
				warn!("skipping {}: {err}", entry.path.display());
			}
		}
	}

	substituted
}

fn import_one(file: &mut File, entry: &ImportEntry) -> Result<(), AnmError> {
	let data = std::fs::read(&entry.path)?;
	let pixels = tga::read_pixels(&data)?;
	file.substitute_image(entry.frame, entry.chunk, pixels)
}
