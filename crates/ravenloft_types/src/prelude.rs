//! Prelude module for `ravenloft_types`.
//!
//! This module provides a convenient way to import commonly used types, traits, and constants.
//!
//! # Examples
//!
//! ```no_run
//! use ravenloft_types::prelude::*;
//!
//! # fn main() -> Result<(), AnmError> {
//! let anm = AnmFile::open("CINE00.ANM")?;
//! for frame in anm.frames() {
//!     println!("{} chunks", frame.chunk_count());
//! }
//! # Ok(())
//! # }
//! ```

// File module types
#[doc(inline)]
pub use crate::file::{
	// ANM types
	AnmFile,

	// Errors
	AnmError,
	TgaError,

	Chunk,
	ChunkKind,
	CommandParams,
	Frame,
	ParseWarning,
	Payload,
	ReferenceTracker,
};

// ANM import helpers
#[doc(inline)]
pub use crate::file::anm::import::{ImportEntry, import_files};

// Re-export the file module for advanced usage
#[doc(inline)]
pub use crate::file;
