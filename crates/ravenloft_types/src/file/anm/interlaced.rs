//! Interlaced image codec (chunk id 8).
//!
//! ## Stream Format
//!
//! The payload is exactly 0x14000 bytes: four 0x5000-byte sub-blocks. Each
//! sub-block is a sequence of 80-byte source lines. Sub-block `i` (0..4)
//! contributes every 4th destination row starting at row `51 + i`, the
//! format's fixed interlace origin; source line `l` of sub-block `i` maps
//! to destination row `51 + i + 4 * l`.
//!
//! Within a line, source byte `j` fills only the first two bytes of the
//! j-th 8-byte group of the destination row; the remaining six bytes of
//! each group are left untouched by this chunk. Sub-blocks carry more
//! lines than the raster has rows left; placement stops silently once the
//! destination is exhausted.
//!
//! The raster is row-reversed once after all four sub-blocks are placed.

use crate::file::AnmError;

use super::constants::{
	HEIGHT, IMAGE_SIZE, INTERLACED_BLOCK_SIZE, INTERLACED_DATA_SIZE, INTERLACED_LINE_BYTES,
	INTERLACED_ORIGIN_ROW, WIDTH,
};
use super::raster::reverse_rows;

/// Decodes an interlaced payload (four concatenated sub-blocks) into a
/// full raster.
pub(crate) fn decode(data: &[u8]) -> Result<Vec<u8>, AnmError> {
	if data.len() != INTERLACED_DATA_SIZE {
		return Err(AnmError::InsufficientData {
			expected: INTERLACED_DATA_SIZE,
			actual: data.len(),
		});
	}

	let mut pixels = vec![0u8; IMAGE_SIZE];

	for (offset, block) in data.chunks_exact(INTERLACED_BLOCK_SIZE).enumerate() {
		place_block(block, offset, &mut pixels);
	}

	Ok(reverse_rows(&pixels))
}

/// Places one sub-block into the destination raster.
fn place_block(src: &[u8], offset: usize, dst: &mut [u8]) {
	for (line, sline) in src.chunks_exact(INTERLACED_LINE_BYTES).enumerate() {
		let row = INTERLACED_ORIGIN_ROW + offset + line * 4;
		if row >= HEIGHT {
			return;
		}

		let dline = &mut dst[row * WIDTH..(row + 1) * WIDTH];
		for (group, &pix) in dline.chunks_exact_mut(8).zip(sline.iter()) {
			group[0] = pix;
			group[1] = pix;
		}
	}
}
