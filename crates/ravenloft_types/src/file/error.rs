//! Error types for file format parsing and manipulation.

use thiserror::Error;

/// Errors that can occur when parsing or manipulating ANM files.
///
/// These are fatal: any of them aborts the decode or substitution that
/// raised it. Recoverable inconsistencies are reported as
/// [`ParseWarning`](crate::file::anm::ParseWarning)s instead.
#[derive(Debug, Error)]
pub enum AnmError {
	/// Not enough data to parse
	#[error("Insufficient data: expected {expected} bytes, got {actual} bytes")]
	InsufficientData {
		/// Expected number of bytes
		expected: usize,
		/// Actual number of bytes
		actual: usize,
	},

	/// A chunk header declared a negative payload size
	#[error("Frame {frame}, chunk {chunk}: negative declared size {size}")]
	NegativeChunkSize {
		/// Frame index of the offending chunk
		frame: usize,
		/// Chunk index within the frame
		chunk: usize,
		/// Declared size as stored in the container
		size: i32,
	},

	/// An RLE run would write past the end of the raster
	#[error("RLE run of {length} bytes at position {position} exceeds the raster")]
	RasterOverflow {
		/// Write position at the start of the run
		position: usize,
		/// Length of the run in output bytes
		length: usize,
	},

	/// A delta update moved the pixel cursor out of the raster bounds
	#[error("Update cursor out of range at column {x}, row {y}")]
	CursorOutOfRange {
		/// Column cursor value
		x: usize,
		/// Row cursor value
		y: usize,
	},

	/// A pixel run of odd length was found while encoding
	#[error(
		"Run of odd length at column {x}, row {y}: every pixel must belong to an even-length same-color pair"
	)]
	OddRun {
		/// Column of the offending run
		x: usize,
		/// Row of the offending run
		y: usize,
	},

	/// Substitution targeted a chunk that carries no decoded image
	#[error("Frame {frame}, chunk {chunk} is not an image chunk")]
	NotAnImageChunk {
		/// Frame index of the target
		frame: usize,
		/// Chunk index within the frame
		chunk: usize,
	},

	/// Substitution targeted a frame/chunk index that does not exist
	#[error("Frame {frame}, chunk {chunk} does not exist")]
	ChunkOutOfRange {
		/// Frame index of the target
		frame: usize,
		/// Chunk index within the frame
		chunk: usize,
	},

	/// Invalid TGA interchange image
	#[error(transparent)]
	TgaError(#[from] TgaError),

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}

/// Errors that can occur when reading or writing TGA interchange images.
#[derive(Debug, Error)]
pub enum TgaError {
	/// Not enough data
	#[error("Insufficient data: expected at least {expected} bytes, got {actual} bytes")]
	InsufficientData {
		/// Expected number of bytes
		expected: usize,
		/// Actual number of bytes
		actual: usize,
	},

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}
