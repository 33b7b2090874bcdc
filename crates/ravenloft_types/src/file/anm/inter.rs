//! Inter-coded image RLE codec (chunk id 3).
//!
//! ## Stream Format
//!
//! Sparse updates applied over a zero-seeded raster:
//!
//! ```text
//! u16 update_count
//! per update:
//!   u16 skip_x      column cursor += skip_x * 2 (never reset)
//!   u16 line_count
//!   per line:
//!     u16 skip_y    row cursor += skip_y (reset per update)
//!     u16 count     colors to write on consecutive rows
//!     count x u8    one color per row, written as a doubled pair
//! ```
//!
//! Each color byte covers the pair of pixels at the current column of the
//! current row; the row cursor then advances past the `count` rows written.
//! Any cursor leaving the raster bounds is fatal. Unaddressed pixels stay
//! zero. The raster is row-reversed once after all updates.
//!
//! No encoder exists for this chunk kind; re-import always produces
//! intra-coded chunks.

use crate::file::AnmError;

use super::constants::{HEIGHT, IMAGE_SIZE, WIDTH};
use super::raster::reverse_rows;
use super::reader::Reader;

/// Decodes an inter-coded payload into a full raster.
pub(crate) fn decode(data: &[u8]) -> Result<Vec<u8>, AnmError> {
	let mut pixels = vec![0u8; IMAGE_SIZE];
	let mut reader = Reader::new(data);

	let update_count = reader.read_u16()?;
	let mut x = 0usize;

	for _ in 0..update_count {
		x += reader.read_u16()? as usize * 2;
		if x > WIDTH {
			return Err(AnmError::CursorOutOfRange {
				x,
				y: 0,
			});
		}

		let line_count = reader.read_u16()?;
		let mut y = 0usize;

		for _ in 0..line_count {
			y += reader.read_u16()? as usize;
			if y > HEIGHT {
				return Err(AnmError::CursorOutOfRange {
					x,
					y,
				});
			}

			let count = reader.read_u16()? as usize;
			if y + count > HEIGHT {
				return Err(AnmError::CursorOutOfRange {
					x,
					y: y + count,
				});
			}

			for row in y..y + count {
				let color = reader.read_u8()?;
				// The pair must land inside the current row
				if x + 2 > WIDTH {
					return Err(AnmError::CursorOutOfRange {
						x,
						y: row,
					});
				}
				let at = row * WIDTH + x;
				pixels[at] = color;
				pixels[at + 1] = color;
			}

			y += count;
		}
	}

	Ok(reverse_rows(&pixels))
}
