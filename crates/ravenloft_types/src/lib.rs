//! This crate provides core data types and file format support for the `ravenloft-rs` project.
//!
//! # File Formats
//!
//! - **ANM**: Chunked cinematic animation containers holding indexed-color frames
//! - **TGA**: Uncompressed indexed-color interchange images used for export/import
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use ravenloft_types::prelude::*;
//!
//! # fn main() -> Result<(), AnmError> {
//! let anm = AnmFile::open("CINE00.ANM")?;
//! println!("{} frames", anm.frames().len());
//! # Ok(())
//! # }
//! ```
//!
//! Or use explicit paths:
//!
//! ```no_run
//! use ravenloft_types::file::anm::File;
//!
//! # fn main() -> Result<(), ravenloft_types::file::AnmError> {
//! let anm = File::open("CINE00.ANM")?;
//! # Ok(())
//! # }
//! ```

pub mod file;

/// `use ravenloft_types::prelude::*;` to import commonly used items.
pub mod prelude;
