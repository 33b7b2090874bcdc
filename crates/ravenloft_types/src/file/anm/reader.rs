//! Little-endian byte cursor shared by the container parser and the codecs.

use crate::file::AnmError;

/// Cursor over an in-memory byte slice.
///
/// Every read is bounds-checked and reports the total number of bytes the
/// stream would have needed, so truncated containers fail with a precise
/// [`AnmError::InsufficientData`].
pub(crate) struct Reader<'a> {
	data: &'a [u8],
	pos: usize,
}

impl<'a> Reader<'a> {
	pub(crate) fn new(data: &'a [u8]) -> Self {
		Self {
			data,
			pos: 0,
		}
	}

	/// Current byte offset from the start of the stream.
	pub(crate) fn position(&self) -> usize {
		self.pos
	}

	/// Reads `len` bytes and advances the cursor.
	pub(crate) fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], AnmError> {
		let end = self.pos.checked_add(len).ok_or(AnmError::InsufficientData {
			expected: usize::MAX,
			actual: self.data.len(),
		})?;
		if end > self.data.len() {
			return Err(AnmError::InsufficientData {
				expected: end,
				actual: self.data.len(),
			});
		}
		let slice = &self.data[self.pos..end];
		self.pos = end;
		Ok(slice)
	}

	pub(crate) fn read_u8(&mut self) -> Result<u8, AnmError> {
		Ok(self.read_bytes(1)?[0])
	}

	pub(crate) fn read_u16(&mut self) -> Result<u16, AnmError> {
		let bytes = self.read_bytes(2)?;
		Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
	}

	pub(crate) fn read_i32(&mut self) -> Result<i32, AnmError> {
		let bytes = self.read_bytes(4)?;
		Ok(i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
	}
}
