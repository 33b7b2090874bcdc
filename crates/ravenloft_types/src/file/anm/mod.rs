//! `.ANM` cinematic container support for the `ravenloft-rs` project.
//!
//! This module provides support for loading, exporting, and re-importing the
//! chunked animation containers that store the game's indexed-color
//! cinematics. Each container holds an ordered sequence of frames; each
//! frame holds an ordered sequence of typed, length-prefixed chunks.
//!
//! # File Structure Overview
//!
//! All integers are little-endian.
//!
//! ```text
//! Offset  Size  Field         Description
//! ------  ----  ------------  ------------------------------------------
//! 0x00    2     frame_count   Number of frames, valid range [1, 1024]
//! 0x02    2     version       Opaque version word
//! 0x04    ...   frames        frame_count frame records
//! ```
//!
//! ## Frame Record
//!
//! ```text
//! Offset  Size  Field         Description
//! ------  ----  ------------  ------------------------------------------
//! +0x00   2     chunk_count   Number of chunks in this frame
//! +0x02   ...   chunks        chunk_count chunk records, playback order
//! ```
//!
//! ## Chunk Record
//!
//! ```text
//! Offset  Size  Field         Description
//! ------  ----  ------------  ------------------------------------------
//! +0x00   2     id            Chunk type, see table below
//! +0x02   4     size          Declared payload size (signed)
//! +0x06   size  payload       Type-specific payload
//! ```
//!
//! ## Chunk Types
//!
//! | id  | Meaning                        | Payload                          |
//! |-----|--------------------------------|----------------------------------|
//! | 0   | Set palette                    | 768 bytes, 256 x RGB, 6-bit      |
//! | 1   | Clear palette                  | Empty (size must be 0)           |
//! | 2   | Intra-coded image              | RLE stream, decodes standalone   |
//! | 3   | Inter-coded image              | Sparse updates over a zero raster|
//! | 4   | Repeat frame data at offset    | u16 count + u32 offset, opaque   |
//! | 5   | Command with 2 x u16 params    | Opaque passthrough               |
//! | 6   | Command with 1 x u16 param     | Opaque passthrough               |
//! | 7   | Subtitle command, 2 x u16      | Opaque passthrough               |
//! | 8   | Interlaced image               | Four 0x5000-byte sub-blocks      |
//! | 9+  | Unknown                        | Opaque passthrough               |
//!
//! Every raster is 640x400 bytes of palette indices. Pixels are stored
//! horizontally doubled (each color covers an adjacent pair of columns) and
//! rows are stored bottom-up; decoding applies a vertical flip exactly once
//! after reconstruction.
//!
//! # Stream Consistency
//!
//! Parsing always advances by exactly `6 + size` bytes per chunk, including
//! the warning paths for undersized or oversized fixed payloads. Consuming
//! the declared payload is kept separate from interpreting it so that a bad
//! declared size can never shift the parse position of later chunks.
//!
//! # Usage Examples
//!
//! ## Loading a container
//!
//! ```no_run
//! use ravenloft_types::file::anm::File;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let anm = File::open("CINE00.ANM")?;
//!
//! println!("{} frames, version {}", anm.frames().len(), anm.version());
//! for warning in anm.warnings() {
//!     println!("warning: {warning}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Exporting full frames
//!
//! ```no_run
//! use ravenloft_types::file::anm::{File, ReferenceTracker};
//! use ravenloft_types::file::tga;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let anm = File::open("CINE00.ANM")?;
//! let mut tracker = ReferenceTracker::new();
//!
//! for (index, frame) in anm.frames().iter().enumerate() {
//!     for chunk in frame.chunks() {
//!         tracker.observe(chunk);
//!     }
//!     let image = tga::write_indexed(tracker.palette(), tracker.image());
//!     std::fs::write(format!("CINE00_{index:04}.TGA"), image)?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Substituting an image chunk
//!
//! ```no_run
//! use ravenloft_types::file::anm::File;
//! use ravenloft_types::file::tga;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut anm = File::open("CINE00.ANM")?;
//!
//! let edited = std::fs::read("CINE00_0346_0000.TGA")?;
//! let pixels = tga::read_pixels(&edited)?;
//! anm.substitute_image(346, 0, pixels)?;
//!
//! anm.save("CINE00_NEW.ANM")?;
//! # Ok(())
//! # }
//! ```

pub mod constants;
pub mod import;

mod chunk;
mod file;
mod frame;
mod inter;
mod interlaced;
mod intra;
mod raster;
mod reader;
mod tracker;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use self::chunk::{Chunk, ChunkKind, CommandParams, Payload};
pub use self::file::{File, ParseWarning};
pub use self::frame::Frame;
pub use self::raster::reverse_rows;
pub use self::tracker::ReferenceTracker;
