//! Intra-coded image RLE codec (chunk id 2).
//!
//! ## Stream Format
//!
//! The payload is a sequence of runs, each introduced by a control byte
//! `op`:
//!
//! - `op < 0x80`: literal run of `(op + 1) * 2` output bytes. `op + 1`
//!   source bytes follow; each is written as an adjacent identical pair
//!   (horizontal pixel doubling).
//! - `op >= 0x80`: repeat run of `(257 - op) * 2` output bytes. One color
//!   byte follows and fills the whole run.
//!
//! Decoding must fill the 640x400 raster exactly; a run that would write
//! past the end is fatal, as is running out of source bytes. The raster is
//! row-reversed once after filling.
//!
//! ## Encoder
//!
//! The inverse transform, used for re-import. Runs are measured per
//! 640-byte row and never straddle rows; the original player freezes or
//! draws garbage otherwise. Every pixel must belong to an even-length
//! same-color pair, so a run of odd length is an encode-time violation
//! reported with its row and column.

use crate::file::AnmError;

use super::constants::{IMAGE_SIZE, MAX_RUN, WIDTH};
use super::raster::reverse_rows;
use super::reader::Reader;

/// Decodes an intra-coded payload into a full raster.
pub(crate) fn decode(data: &[u8]) -> Result<Vec<u8>, AnmError> {
	let mut pixels = vec![0u8; IMAGE_SIZE];
	let mut reader = Reader::new(data);
	let mut pos = 0;

	while pos < IMAGE_SIZE {
		let op = reader.read_u8()?;

		if op < 0x80 {
			let len = (op as usize + 1) * 2;
			if pos + len > IMAGE_SIZE {
				return Err(AnmError::RasterOverflow {
					position: pos,
					length: len,
				});
			}

			for pair in pixels[pos..pos + len].chunks_exact_mut(2) {
				let color = reader.read_u8()?;
				pair[0] = color;
				pair[1] = color;
			}
			pos += len;
		} else {
			let len = (257 - op as usize) * 2;
			if pos + len > IMAGE_SIZE {
				return Err(AnmError::RasterOverflow {
					position: pos,
					length: len,
				});
			}

			let color = reader.read_u8()?;
			pixels[pos..pos + len].fill(color);
			pos += len;
		}
	}

	Ok(reverse_rows(&pixels))
}

/// Encodes a raster (already in wire row order) into an intra-coded payload.
///
/// Exact structural inverse of [`decode`] restricted to even-run,
/// row-bounded inputs. The caller is responsible for reversing the rows
/// back to wire order first.
pub(crate) fn encode(pixels: &[u8]) -> Result<Vec<u8>, AnmError> {
	if pixels.len() != IMAGE_SIZE {
		return Err(AnmError::InsufficientData {
			expected: IMAGE_SIZE,
			actual: pixels.len(),
		});
	}

	let mut out = Vec::new();

	for (y, row) in pixels.chunks_exact(WIDTH).enumerate() {
		let mut x = 0;

		while x < WIDTH {
			let run = run_length(row, x);
			if run % 2 != 0 {
				return Err(AnmError::OddRun {
					x,
					y,
				});
			}

			let color = row[x];
			if run == MAX_RUN {
				out.push(0xB1);
				out.push(color);
			} else if run > 16 {
				out.push((257 - run / 2) as u8);
				out.push(color);
			} else {
				out.push((run / 2 - 1) as u8);
				out.extend(row[x..x + run].iter().step_by(2).copied());
			}

			x += run;
		}
	}

	Ok(out)
}

/// Length of the run of identical bytes starting at `x`, capped at
/// [`MAX_RUN`] and at the end of the row.
fn run_length(row: &[u8], x: usize) -> usize {
	let value = row[x];
	row[x..].iter().take(MAX_RUN).take_while(|&&b| b == value).count()
}
