//! Chunk structures for the ANM cinematic container.

use std::fmt::Display;

/// Chunk type, decoded from the u16 id stored in the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChunkKind {
	/// Set the 768-byte palette (id 0)
	Palette,
	/// Clear the palette to all zeros (id 1)
	ClearPalette,
	/// Intra-coded image, decodable on its own (id 2)
	IntraImage,
	/// Inter-coded image, sparse updates over a zero raster (id 3)
	InterImage,
	/// Repeat frame data at an offset, semantics opaque (id 4)
	RepeatAtOffset,
	/// Command with two u16 parameters (id 5)
	Command2,
	/// Command with one u16 parameter (id 6)
	Command1,
	/// Subtitle command with two u16 parameters (id 7)
	Subtitle,
	/// Interlaced image split across four sub-blocks (id 8)
	Interlaced,
	/// Unknown id, payload skipped verbatim (id 9 and above)
	Skip,
}

impl From<u16> for ChunkKind {
	fn from(id: u16) -> Self {
		match id {
			0 => ChunkKind::Palette,
			1 => ChunkKind::ClearPalette,
			2 => ChunkKind::IntraImage,
			3 => ChunkKind::InterImage,
			4 => ChunkKind::RepeatAtOffset,
			5 => ChunkKind::Command2,
			6 => ChunkKind::Command1,
			7 => ChunkKind::Subtitle,
			8 => ChunkKind::Interlaced,
			_ => ChunkKind::Skip,
		}
	}
}

impl Display for ChunkKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let name = match self {
			ChunkKind::Palette => "READ PAL",
			ChunkKind::ClearPalette => "CLEAR PAL",
			ChunkKind::IntraImage => "UNPACK INTRA RLE",
			ChunkKind::InterImage => "UNPACK INTER RLE",
			ChunkKind::RepeatAtOffset => "REPEAT FRAME DATA AT OFFSET",
			ChunkKind::Command2 => "COMMAND WITH 2 * 16BIT PARAMETERS",
			ChunkKind::Command1 => "COMMAND WITH 1 * 16BIT PARAMETER",
			ChunkKind::Subtitle => "COMMAND WITH 2 * 16BIT PARAMETERS (SUBTITLES)",
			ChunkKind::Interlaced => "PUT INTERLACED RLE",
			ChunkKind::Skip => "SKIP CHUNK",
		};
		write!(f, "{name}")
	}
}

/// Payload of a chunk.
///
/// Exactly one shape per chunk kind, so an image chunk can never carry a
/// palette and vice versa.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
	/// Palette bytes (768 for a well-formed chunk)
	Palette(Vec<u8>),

	/// Decoded image together with its original wire payload.
	///
	/// `data` is kept byte-exact so untouched chunks round-trip without
	/// re-compression; `pixels` is the reconstructed 640x400 raster after
	/// row reversal.
	Image {
		/// Compressed payload exactly as stored in the container
		data: Vec<u8>,
		/// Fully reconstructed raster, display orientation
		pixels: Vec<u8>,
	},

	/// Opaque payload carried through verbatim
	Raw(Vec<u8>),

	/// No payload stored (also used when an oversized palette is skipped)
	Empty,
}

/// Decoded parameters of the opaque command chunks (ids 4 to 7).
///
/// The container only carries these through; the values are not
/// interpreted beyond display in diagnostic dumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandParams {
	/// Id 4: repeat count and byte offset of the data to repeat
	Repeat {
		/// Number of repetitions
		count: u16,
		/// Offset of the repeated frame data
		offset: u32,
	},
	/// Id 5: two opaque parameters
	Pair {
		/// First parameter
		first: u16,
		/// Second parameter
		second: u16,
	},
	/// Id 6: one opaque parameter
	Single {
		/// The parameter
		value: u16,
	},
	/// Id 7: subtitle line index and palette index
	Subtitle {
		/// Subtitle text line in the companion text file
		text_line: u16,
		/// Palette index used for the subtitle
		palette: u16,
	},
}

/// One typed, length-prefixed record of a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
	kind: ChunkKind,
	raw_id: u16,
	declared_size: i32,
	source_offset: usize,
	payload: Payload,
}

impl Chunk {
	/// Creates a chunk. Only the parser and the importer build chunks; a
	/// loaded container is otherwise immutable.
	pub(crate) fn new(
		kind: ChunkKind,
		raw_id: u16,
		declared_size: i32,
		source_offset: usize,
		payload: Payload,
	) -> Self {
		Self {
			kind,
			raw_id,
			declared_size,
			source_offset,
			payload,
		}
	}

	/// Returns the decoded chunk kind.
	pub fn kind(&self) -> ChunkKind {
		self.kind
	}

	/// Returns the chunk id exactly as stored in the container.
	pub fn raw_id(&self) -> u16 {
		self.raw_id
	}

	/// Returns the declared payload size as stored in the container.
	pub fn declared_size(&self) -> i32 {
		self.declared_size
	}

	/// Returns the byte offset of this chunk's header in the source file.
	///
	/// Diagnostic only; serialization never uses it.
	pub fn source_offset(&self) -> usize {
		self.source_offset
	}

	/// Returns the chunk payload.
	pub fn payload(&self) -> &Payload {
		&self.payload
	}

	/// Returns `true` when this chunk carries a decoded raster.
	pub fn is_image(&self) -> bool {
		matches!(self.payload, Payload::Image { .. })
	}

	/// Returns the decoded raster of an image chunk.
	pub fn pixels(&self) -> Option<&[u8]> {
		match &self.payload {
			Payload::Image {
				pixels, ..
			} => Some(pixels),
			_ => None,
		}
	}

	/// Returns the palette bytes of a palette chunk.
	pub fn palette_bytes(&self) -> Option<&[u8]> {
		match &self.payload {
			Payload::Palette(bytes) => Some(bytes),
			_ => None,
		}
	}

	/// Returns the opaque payload of a passthrough chunk.
	pub fn raw_bytes(&self) -> Option<&[u8]> {
		match &self.payload {
			Payload::Raw(bytes) => Some(bytes),
			_ => None,
		}
	}

	/// Returns the bytes the serializer writes for this chunk.
	///
	/// Image chunks write their original compressed payload, never bytes
	/// re-derived from the decoded raster. A cleared palette (id 1) holds
	/// 768 zero bytes in memory but has no payload on the wire.
	pub fn wire_payload(&self) -> &[u8] {
		match (&self.payload, self.kind) {
			(Payload::Palette(bytes), ChunkKind::Palette) => bytes,
			(Payload::Palette(_), _) => &[],
			(
				Payload::Image {
					data, ..
				},
				_,
			) => data,
			(Payload::Raw(bytes), _) => bytes,
			(Payload::Empty, _) => &[],
		}
	}

	/// Decodes the command parameters of chunks with ids 4 to 7.
	///
	/// Returns `None` for other kinds or when the payload is shorter than
	/// the parameters it should carry.
	pub fn command_params(&self) -> Option<CommandParams> {
		let data = self.raw_bytes()?;
		match self.kind {
			ChunkKind::RepeatAtOffset if data.len() >= 6 => Some(CommandParams::Repeat {
				count: u16::from_le_bytes([data[0], data[1]]),
				offset: u32::from_le_bytes([data[2], data[3], data[4], data[5]]),
			}),
			ChunkKind::Command2 if data.len() >= 4 => Some(CommandParams::Pair {
				first: u16::from_le_bytes([data[0], data[1]]),
				second: u16::from_le_bytes([data[2], data[3]]),
			}),
			ChunkKind::Command1 if data.len() >= 2 => Some(CommandParams::Single {
				value: u16::from_le_bytes([data[0], data[1]]),
			}),
			ChunkKind::Subtitle if data.len() >= 4 => Some(CommandParams::Subtitle {
				text_line: u16::from_le_bytes([data[0], data[1]]),
				palette: u16::from_le_bytes([data[2], data[3]]),
			}),
			_ => None,
		}
	}
}

impl Display for Chunk {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"ID: {}   Offset:   [{:08X}]    {}",
			self.raw_id, self.source_offset, self.kind
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_kind_from_id() {
		assert_eq!(ChunkKind::from(0), ChunkKind::Palette);
		assert_eq!(ChunkKind::from(8), ChunkKind::Interlaced);
		assert_eq!(ChunkKind::from(9), ChunkKind::Skip);
		assert_eq!(ChunkKind::from(0xFFFF), ChunkKind::Skip);
	}

	#[test]
	fn test_command_params() {
		let chunk = Chunk::new(
			ChunkKind::RepeatAtOffset,
			4,
			6,
			0,
			Payload::Raw(vec![0x02, 0x00, 0x10, 0x20, 0x00, 0x00]),
		);
		assert_eq!(
			chunk.command_params(),
			Some(CommandParams::Repeat {
				count: 2,
				offset: 0x2010,
			})
		);

		let chunk = Chunk::new(ChunkKind::Subtitle, 7, 4, 0, Payload::Raw(vec![5, 0, 1, 0]));
		assert_eq!(
			chunk.command_params(),
			Some(CommandParams::Subtitle {
				text_line: 5,
				palette: 1,
			})
		);

		// Too short for its parameters
		let chunk = Chunk::new(ChunkKind::Command2, 5, 2, 0, Payload::Raw(vec![1, 0]));
		assert_eq!(chunk.command_params(), None);
	}

	#[test]
	fn test_wire_payload_shapes() {
		let palette = Chunk::new(ChunkKind::Palette, 0, 768, 0, Payload::Palette(vec![7; 768]));
		assert_eq!(palette.wire_payload().len(), 768);

		let cleared =
			Chunk::new(ChunkKind::ClearPalette, 1, 0, 0, Payload::Palette(vec![0; 768]));
		assert!(cleared.wire_payload().is_empty());

		let image = Chunk::new(
			ChunkKind::IntraImage,
			2,
			3,
			0,
			Payload::Image {
				data: vec![1, 2, 3],
				pixels: vec![0; 4],
			},
		);
		assert_eq!(image.wire_payload(), &[1, 2, 3]);
		assert!(image.is_image());
	}
}
