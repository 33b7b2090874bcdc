//! Indexed-color TGA interchange support.
//!
//! Cinematic frames are exported as uncompressed indexed-color TGA images
//! with a fixed layout, and re-imported from the same layout:
//!
//! ```text
//! Offset  Size    Field        Description
//! ------  ------  -----------  ----------------------------------------
//! 0x000   18      header       No ID field, color map type 1, image
//!                              type 1 (indexed), 256 map entries of 24
//!                              bits, 640x400, 8 bpp, descriptor 0
//! 0x012   768     palette      256 entries, B,G,R order; each channel
//!                              scaled from 6-bit range: v * 255 / 0x3F
//! 0x312   256000  pixels       Raw palette indices, 640x400
//! ```
//!
//! The raster keeps the display orientation produced by the decoder (TGA
//! descriptor 0 means bottom-left origin, matching the container's
//! bottom-up row storage after reversal).

use crate::file::TgaError;
use crate::file::anm::constants::{HEIGHT, IMAGE_SIZE, WIDTH};

/// Size of the TGA header in bytes
pub const HEADER_SIZE: usize = 18;

/// Byte offset of the raw pixel data (header + 256 x 3 palette bytes)
pub const PIXEL_OFFSET: usize = 0x312;

/// Builds an indexed-color TGA image from a game palette and a raster.
///
/// `palette` holds up to 768 bytes of 6-bit R,G,B triplets as stored in
/// the container; missing entries are written as black. `pixels` is a full
/// 640x400 raster of palette indices.
pub fn write_indexed(palette: &[u8], pixels: &[u8]) -> Vec<u8> {
	let mut out = Vec::with_capacity(PIXEL_OFFSET + pixels.len());

	out.push(0); // no ID field
	out.push(1); // color map present
	out.push(1); // indexed image
	out.extend_from_slice(&0u16.to_le_bytes()); // first color map entry
	out.extend_from_slice(&256u16.to_le_bytes()); // color map length
	out.push(24); // bits per color map entry
	out.extend_from_slice(&0u16.to_le_bytes()); // x origin
	out.extend_from_slice(&0u16.to_le_bytes()); // y origin
	out.extend_from_slice(&(WIDTH as u16).to_le_bytes());
	out.extend_from_slice(&(HEIGHT as u16).to_le_bytes());
	out.push(8); // bits per pixel
	out.push(0); // descriptor: bottom-left origin

	for index in 0..256 {
		let entry = |channel: usize| -> u8 {
			let value = palette.get(index * 3 + channel).copied().unwrap_or(0);
			((u32::from(value) * 255) / 0x3F) as u8
		};
		// TGA wants B,G,R; the container stores R,G,B
		out.push(entry(2));
		out.push(entry(1));
		out.push(entry(0));
	}

	out.extend_from_slice(pixels);
	out
}

/// Extracts the raw raster of an exported TGA image.
///
/// Reads exactly [`IMAGE_SIZE`] bytes at the fixed pixel offset; the
/// header and palette are not validated beyond the length check, matching
/// the fixed layout the exporter produces.
///
/// # Errors
///
/// Returns [`TgaError::InsufficientData`] when the file is shorter than
/// the fixed layout requires.
pub fn read_pixels(data: &[u8]) -> Result<Vec<u8>, TgaError> {
	let expected = PIXEL_OFFSET + IMAGE_SIZE;
	if data.len() < expected {
		return Err(TgaError::InsufficientData {
			expected,
			actual: data.len(),
		});
	}

	Ok(data[PIXEL_OFFSET..expected].to_vec())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::file::anm::constants::PALETTE_SIZE;

	#[test]
	fn test_header_layout() {
		let tga = write_indexed(&[0; PALETTE_SIZE], &[0; IMAGE_SIZE]);

		assert_eq!(tga.len(), PIXEL_OFFSET + IMAGE_SIZE);
		assert_eq!(&tga[..3], &[0, 1, 1]);
		assert_eq!(u16::from_le_bytes([tga[5], tga[6]]), 256);
		assert_eq!(tga[7], 24);
		assert_eq!(u16::from_le_bytes([tga[12], tga[13]]), WIDTH as u16);
		assert_eq!(u16::from_le_bytes([tga[14], tga[15]]), HEIGHT as u16);
		assert_eq!(tga[16], 8);
		assert_eq!(tga[17], 0);
	}

	#[test]
	fn test_palette_scaling_and_order() {
		let mut palette = vec![0u8; PALETTE_SIZE];
		// Entry 1: R = 0x3F, G = 0x20, B = 0x01
		palette[3] = 0x3F;
		palette[4] = 0x20;
		palette[5] = 0x01;

		let tga = write_indexed(&palette, &[0; IMAGE_SIZE]);
		let entry = &tga[HEADER_SIZE + 3..HEADER_SIZE + 6];

		// Written B,G,R with v * 255 / 0x3F scaling
		assert_eq!(entry[0], (0x01 * 255) / 0x3F);
		assert_eq!(entry[1], ((0x20_u32 * 255) / 0x3F) as u8);
		assert_eq!(entry[2], 255);
	}

	#[test]
	fn test_pixel_round_trip() {
		let pixels: Vec<u8> = (0..IMAGE_SIZE).map(|i| (i % 256) as u8).collect();
		let tga = write_indexed(&[0; PALETTE_SIZE], &pixels);
		assert_eq!(read_pixels(&tga).unwrap(), pixels);
	}

	#[test]
	fn test_short_file_is_rejected() {
		let err = read_pixels(&[0; 100]).unwrap_err();
		assert!(matches!(err, TgaError::InsufficientData { .. }));
	}
}
