//! ANM container structure and I/O operations.
//!
//! This module defines the main `File` struct which represents a complete
//! cinematic container: the two-word header plus every frame and chunk in
//! playback order, with image chunks decoded to full rasters and all other
//! payloads carried through byte-exact.

use std::fmt::Display;

use log::warn;

use super::chunk::{Chunk, ChunkKind, Payload};
use super::constants::{INTERLACED_DATA_SIZE, MAX_FRAME_COUNT, PALETTE_SIZE};
use super::frame::Frame;
use super::raster::reverse_rows;
use super::reader::Reader;
use super::{constants, inter, interlaced, intra};
use crate::file::AnmError;

/// A recoverable inconsistency found while parsing.
///
/// Warnings never abort the load and never shift the parse position of
/// later chunks: the declared payload is consumed in full on every warning
/// path, and the affected chunk falls back to a defined payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseWarning {
	/// The header frame count is outside [1, 1024]; no frames were parsed
	FrameCountOutOfRange {
		/// Frame count as stored in the header
		count: u16,
	},

	/// A palette chunk (id 0) declared more than 768 bytes; the payload
	/// was skipped and the chunk left empty
	OversizedPalette {
		/// Frame index of the chunk
		frame: usize,
		/// Chunk index within the frame
		chunk: usize,
		/// Declared payload size
		size: i32,
	},

	/// A clear-palette chunk (id 1) declared a non-zero size; the payload
	/// was kept as opaque bytes instead of a cleared palette
	ClearPaletteWithData {
		/// Frame index of the chunk
		frame: usize,
		/// Chunk index within the frame
		chunk: usize,
		/// Declared payload size
		size: i32,
	},

	/// An interlaced chunk (id 8) declared a size other than 0x14000; the
	/// payload was kept as opaque bytes and no raster was reconstructed
	InterlacedBadSize {
		/// Frame index of the chunk
		frame: usize,
		/// Chunk index within the frame
		chunk: usize,
		/// Declared payload size
		size: i32,
	},
}

impl Display for ParseWarning {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ParseWarning::FrameCountOutOfRange {
				count,
			} => {
				write!(f, "Frame count {count} is outside [1, {MAX_FRAME_COUNT}]")
			}
			ParseWarning::OversizedPalette {
				frame,
				chunk,
				size,
			} => {
				write!(
					f,
					"Frame {frame}, chunk {chunk}: palette size {size} exceeds {PALETTE_SIZE} bytes"
				)
			}
			ParseWarning::ClearPaletteWithData {
				frame,
				chunk,
				size,
			} => {
				write!(f, "Frame {frame}, chunk {chunk}: clear-palette chunk has size {size}")
			}
			ParseWarning::InterlacedBadSize {
				frame,
				chunk,
				size,
			} => {
				write!(
					f,
					"Frame {frame}, chunk {chunk}: interlaced chunk has size {size}, expected {INTERLACED_DATA_SIZE}"
				)
			}
		}
	}
}

/// A parsed cinematic container.
///
/// The container is write-once per load: frames and chunks are built
/// entirely during parse, decoded rasters are computed once and cached,
/// and [`File::substitute_image`] is the only mutation path afterwards.
///
/// # Examples
///
/// ```no_run
/// use ravenloft_types::file::anm::File;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let anm = File::open("CINE00.ANM")?;
/// for (index, frame) in anm.frames().iter().enumerate() {
///     println!("frame {index}: {} chunks", frame.chunk_count());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct File {
	/// Frame count as stored in the header
	frame_count: u16,

	/// Opaque format version word
	version: u16,

	/// Parsed frames in playback order
	frames: Vec<Frame>,

	/// Warnings collected during parse
	warnings: Vec<ParseWarning>,
}

impl File {
	/// Opens a cinematic container from the specified path.
	///
	/// The whole file is read into memory before parsing; the format
	/// needs no mid-decode I/O.
	///
	/// # Errors
	///
	/// Returns an error if the file cannot be read or if the container is
	/// structurally corrupt (truncated stream, negative chunk size, or an
	/// image payload that does not reconstruct a full raster).
	pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, AnmError> {
		let data = std::fs::read(path)?;
		Self::from_bytes(&data)
	}

	/// Parses a cinematic container from a byte slice.
	///
	/// A header frame count outside [1, 1024] is not fatal: a warning is
	/// recorded and the returned container has zero frames.
	pub fn from_bytes(data: &[u8]) -> Result<Self, AnmError> {
		let mut reader = Reader::new(data);

		let frame_count = reader.read_u16()?;
		let version = reader.read_u16()?;

		let mut warnings = Vec::new();

		if frame_count < 1 || frame_count > MAX_FRAME_COUNT {
			warn!("frame count {frame_count} is outside [1, {MAX_FRAME_COUNT}], nothing parsed");
			warnings.push(ParseWarning::FrameCountOutOfRange {
				count: frame_count,
			});
			return Ok(Self {
				frame_count,
				version,
				frames: Vec::new(),
				warnings,
			});
		}

		let mut frames = Vec::with_capacity(frame_count as usize);
		for frame_index in 0..frame_count as usize {
			frames.push(parse_frame(&mut reader, frame_index, &mut warnings)?);
		}

		Ok(Self {
			frame_count,
			version,
			frames,
			warnings,
		})
	}

	/// Returns the frame count as stored in the header.
	///
	/// Equals `frames().len()` for any successfully parsed container; the
	/// two differ only when the header count was rejected as out of range.
	pub fn frame_count(&self) -> u16 {
		self.frame_count
	}

	/// Returns the opaque version word.
	pub fn version(&self) -> u16 {
		self.version
	}

	/// Returns the parsed frames in playback order.
	pub fn frames(&self) -> &[Frame] {
		&self.frames
	}

	/// Returns the warnings collected during parse.
	pub fn warnings(&self) -> &[ParseWarning] {
		&self.warnings
	}

	/// Serializes the container back to its binary format.
	///
	/// Untouched chunks are written back from their original payload
	/// bytes, so a load/save cycle is byte-identical; only substituted
	/// chunks differ.
	pub fn to_bytes(&self) -> Vec<u8> {
		let mut out = Vec::new();

		out.extend_from_slice(&self.frame_count.to_le_bytes());
		out.extend_from_slice(&self.version.to_le_bytes());

		for frame in &self.frames {
			out.extend_from_slice(&(frame.chunk_count() as u16).to_le_bytes());
			for chunk in frame.chunks() {
				out.extend_from_slice(&chunk.raw_id().to_le_bytes());
				out.extend_from_slice(&chunk.declared_size().to_le_bytes());
				out.extend_from_slice(chunk.wire_payload());
			}
		}

		out
	}

	/// Saves the container to the specified path.
	///
	/// # Errors
	///
	/// Returns an error if the file cannot be written.
	pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<(), AnmError> {
		std::fs::write(path, self.to_bytes())?;
		Ok(())
	}

	/// Replaces an image chunk with a freshly intra-encoded raster.
	///
	/// `pixels` is a full 640x400 raster in display orientation, as read
	/// from an exported TGA. The rows are reversed back to wire order and
	/// intra-encoded; on success the target chunk becomes an intra-coded
	/// chunk (id 2) with the new payload and declared size.
	///
	/// # Errors
	///
	/// Returns an error when the raster has the wrong size, the target
	/// does not exist, the target is not an image chunk, or the raster
	/// contains a pixel run of odd length. The original chunk is left
	/// untouched on every failure.
	pub fn substitute_image(
		&mut self,
		frame: usize,
		chunk: usize,
		pixels: Vec<u8>,
	) -> Result<(), AnmError> {
		if pixels.len() != constants::IMAGE_SIZE {
			return Err(AnmError::InsufficientData {
				expected: constants::IMAGE_SIZE,
				actual: pixels.len(),
			});
		}

		let target = self
			.frames
			.get(frame)
			.and_then(|f| f.get_chunk(chunk))
			.ok_or(AnmError::ChunkOutOfRange {
				frame,
				chunk,
			})?;
		if !target.is_image() {
			return Err(AnmError::NotAnImageChunk {
				frame,
				chunk,
			});
		}
		let source_offset = target.source_offset();

		let encoded = intra::encode(&reverse_rows(&pixels))?;
		let declared_size = encoded.len() as i32;

		self.frames[frame].chunks_mut()[chunk] = Chunk::new(
			ChunkKind::IntraImage,
			2,
			declared_size,
			source_offset,
			Payload::Image {
				data: encoded,
				pixels,
			},
		);

		Ok(())
	}
}

impl Display for File {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			".ANM File:\n\
			- Frames: {}\n\
			- Version: {}\n\
			- Warnings: {}",
			self.frames.len(),
			self.version,
			self.warnings.len(),
		)
	}
}

fn parse_frame(
	reader: &mut Reader<'_>,
	frame_index: usize,
	warnings: &mut Vec<ParseWarning>,
) -> Result<Frame, AnmError> {
	let chunk_count = reader.read_u16()?;

	let mut chunks = Vec::with_capacity(chunk_count as usize);
	for chunk_index in 0..chunk_count as usize {
		chunks.push(parse_chunk(reader, frame_index, chunk_index, warnings)?);
	}

	Ok(Frame::new(chunks))
}

fn parse_chunk(
	reader: &mut Reader<'_>,
	frame: usize,
	chunk: usize,
	warnings: &mut Vec<ParseWarning>,
) -> Result<Chunk, AnmError> {
	let source_offset = reader.position();
	let raw_id = reader.read_u16()?;
	let declared_size = reader.read_i32()?;

	if declared_size < 0 {
		return Err(AnmError::NegativeChunkSize {
			frame,
			chunk,
			size: declared_size,
		});
	}
	let size = declared_size as usize;

	// Advance first, interpret second: the payload is always consumed in
	// full so a rejected declared size cannot shift later chunks.
	let data = reader.read_bytes(size)?;

	let kind = ChunkKind::from(raw_id);
	let payload = match kind {
		ChunkKind::Palette => {
			if size > PALETTE_SIZE {
				warn!("frame {frame}, chunk {chunk}: palette size {size} exceeds {PALETTE_SIZE}");
				warnings.push(ParseWarning::OversizedPalette {
					frame,
					chunk,
					size: declared_size,
				});
				Payload::Empty
			} else {
				Payload::Palette(data.to_vec())
			}
		}
		ChunkKind::ClearPalette => {
			if size != 0 {
				warn!("frame {frame}, chunk {chunk}: clear-palette chunk has size {size}");
				warnings.push(ParseWarning::ClearPaletteWithData {
					frame,
					chunk,
					size: declared_size,
				});
				Payload::Raw(data.to_vec())
			} else {
				Payload::Palette(vec![0; PALETTE_SIZE])
			}
		}
		ChunkKind::IntraImage => Payload::Image {
			pixels: intra::decode(data)?,
			data: data.to_vec(),
		},
		ChunkKind::InterImage => Payload::Image {
			pixels: inter::decode(data)?,
			data: data.to_vec(),
		},
		ChunkKind::Interlaced => {
			if size != INTERLACED_DATA_SIZE {
				warn!(
					"frame {frame}, chunk {chunk}: interlaced chunk has size {size}, expected {INTERLACED_DATA_SIZE}"
				);
				warnings.push(ParseWarning::InterlacedBadSize {
					frame,
					chunk,
					size: declared_size,
				});
				Payload::Raw(data.to_vec())
			} else {
				Payload::Image {
					pixels: interlaced::decode(data)?,
					data: data.to_vec(),
				}
			}
		}
		ChunkKind::RepeatAtOffset
		| ChunkKind::Command2
		| ChunkKind::Command1
		| ChunkKind::Subtitle
		| ChunkKind::Skip => Payload::Raw(data.to_vec()),
	};

	Ok(Chunk::new(kind, raw_id, declared_size, source_offset, payload))
}
