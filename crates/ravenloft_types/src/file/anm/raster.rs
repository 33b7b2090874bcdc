//! Row-reversal transform for reconstructed rasters.

use super::constants::WIDTH;

/// Returns a copy of `pixels` with the row order reversed.
///
/// Rasters are stored bottom-up in the container, so every codec applies
/// this exactly once after reconstruction, and the importer applies it
/// again before encoding. The transform is its own inverse; columns are
/// unchanged.
pub fn reverse_rows(pixels: &[u8]) -> Vec<u8> {
	let mut reversed = vec![0u8; pixels.len()];

	for (dst, src) in reversed.chunks_exact_mut(WIDTH).zip(pixels.chunks_exact(WIDTH).rev()) {
		dst.copy_from_slice(src);
	}

	reversed
}
