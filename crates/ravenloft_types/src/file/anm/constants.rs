//! Constants for the ANM cinematic container format.

/// Raster width in pixels (one byte per pixel)
pub const WIDTH: usize = 640;

/// Raster height in pixels
pub const HEIGHT: usize = 400;

/// Size of a fully reconstructed raster in bytes
pub const IMAGE_SIZE: usize = WIDTH * HEIGHT;

/// Size of a palette payload: 256 entries x 3 channels, 6-bit range
pub const PALETTE_SIZE: usize = 768;

/// Highest frame count a container may declare
pub const MAX_FRAME_COUNT: u16 = 1024;

/// Bytes occupied by a chunk header (u16 id + i32 declared size)
pub const CHUNK_HEADER_SIZE: usize = 6;

/// Required payload size of an interlaced image chunk (id 8)
pub const INTERLACED_DATA_SIZE: usize = 0x14000;

/// Size of one of the four interlaced sub-blocks
pub const INTERLACED_BLOCK_SIZE: usize = 0x5000;

/// Bytes per source line within an interlaced sub-block
pub const INTERLACED_LINE_BYTES: usize = 80;

/// Fixed vertical origin of interlaced placement
pub const INTERLACED_ORIGIN_ROW: usize = 51;

/// Declared sizes above this mark an image chunk as a full screen refresh.
///
/// Inherited from the original player: smaller image chunks are trivial
/// updates that must not replace the reference frame used for export.
pub const REFRESH_SIZE_THRESHOLD: i32 = 0x1000;

/// Longest same-color pixel run the intra encoder may emit
pub const MAX_RUN: usize = 160;
