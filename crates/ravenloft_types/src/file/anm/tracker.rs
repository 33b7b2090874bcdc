//! Palette and reference-frame tracking for full-frame export.

use super::chunk::{Chunk, ChunkKind};
use super::constants::{IMAGE_SIZE, PALETTE_SIZE, REFRESH_SIZE_THRESHOLD};

/// Last known palette and screen contents while walking a container.
///
/// Most frames carry only partial updates, so exporting every frame as a
/// standalone picture needs the most recent full palette and raster. The
/// tracker is an explicit accumulator threaded through a strictly ordered,
/// left-to-right fold over frames and chunks; the fold must stay
/// sequential even where chunk decoding itself is parallelized.
#[derive(Debug, Clone)]
pub struct ReferenceTracker {
	palette: [u8; PALETTE_SIZE],
	image: Vec<u8>,
}

impl ReferenceTracker {
	/// Creates a tracker with a zero palette and a black raster.
	pub fn new() -> Self {
		Self {
			palette: [0; PALETTE_SIZE],
			image: vec![0; IMAGE_SIZE],
		}
	}

	/// Folds one chunk into the tracker state.
	///
	/// Palette chunks (id 0) replace the last known palette. Image chunks
	/// replace the last known raster only when their declared size exceeds
	/// [`REFRESH_SIZE_THRESHOLD`]; smaller image chunks are trivial
	/// updates that never repainted the whole screen.
	pub fn observe(&mut self, chunk: &Chunk) {
		if chunk.kind() == ChunkKind::Palette {
			if let Some(palette) = chunk.palette_bytes() {
				let len = palette.len().min(PALETTE_SIZE);
				self.palette[..len].copy_from_slice(&palette[..len]);
			}
		}

		if chunk.declared_size() > REFRESH_SIZE_THRESHOLD {
			if let Some(pixels) = chunk.pixels() {
				self.image.copy_from_slice(pixels);
			}
		}
	}

	/// Returns the last known palette.
	pub fn palette(&self) -> &[u8] {
		&self.palette
	}

	/// Returns the last known full raster.
	pub fn image(&self) -> &[u8] {
		&self.image
	}
}

impl Default for ReferenceTracker {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::file::anm::chunk::Payload;

	#[test]
	fn test_palette_updates_on_id_0_only() {
		let mut tracker = ReferenceTracker::new();

		let palette = Chunk::new(
			ChunkKind::Palette,
			0,
			PALETTE_SIZE as i32,
			0,
			Payload::Palette(vec![0x3F; PALETTE_SIZE]),
		);
		tracker.observe(&palette);
		assert!(tracker.palette().iter().all(|&v| v == 0x3F));

		// A cleared palette also holds palette bytes but is not id 0
		let cleared =
			Chunk::new(ChunkKind::ClearPalette, 1, 0, 0, Payload::Palette(vec![0; PALETTE_SIZE]));
		tracker.observe(&cleared);
		assert!(tracker.palette().iter().all(|&v| v == 0x3F));
	}

	#[test]
	fn test_image_respects_refresh_threshold() {
		let mut tracker = ReferenceTracker::new();

		let small = Chunk::new(
			ChunkKind::IntraImage,
			2,
			0x1000,
			0,
			Payload::Image {
				data: Vec::new(),
				pixels: vec![1; IMAGE_SIZE],
			},
		);
		tracker.observe(&small);
		assert!(tracker.image().iter().all(|&v| v == 0));

		let large = Chunk::new(
			ChunkKind::IntraImage,
			2,
			0x1001,
			0,
			Payload::Image {
				data: Vec::new(),
				pixels: vec![2; IMAGE_SIZE],
			},
		);
		tracker.observe(&large);
		assert!(tracker.image().iter().all(|&v| v == 2));
	}
}
