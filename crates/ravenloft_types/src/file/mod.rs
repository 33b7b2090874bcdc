//! File type support for the `ravenloft-rs` project.

mod error;

pub mod anm;
pub mod tga;

// Re-export error types
pub use error::{AnmError, TgaError};

// Re-export main file types
pub use anm::{
	Chunk, ChunkKind, CommandParams, File as AnmFile, Frame, ParseWarning, Payload,
	ReferenceTracker,
};
