//! Frame structure for the ANM cinematic container.

use super::chunk::Chunk;

/// One temporal animation unit: an ordered sequence of chunks.
///
/// Chunk order is playback order and is preserved on round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
	chunks: Vec<Chunk>,
}

impl Frame {
	pub(crate) fn new(chunks: Vec<Chunk>) -> Self {
		Self {
			chunks,
		}
	}

	/// Returns the chunks of this frame in playback order.
	pub fn chunks(&self) -> &[Chunk] {
		&self.chunks
	}

	pub(crate) fn chunks_mut(&mut self) -> &mut [Chunk] {
		&mut self.chunks
	}

	/// Returns the number of chunks in this frame.
	pub fn chunk_count(&self) -> usize {
		self.chunks.len()
	}

	/// Returns the chunk at `index`, if any.
	pub fn get_chunk(&self, index: usize) -> Option<&Chunk> {
		self.chunks.get(index)
	}
}
