//! `ravenloft-rs` decodes, exports, and re-imports the chunked cinematic
//! animation containers (`.ANM`) of an old AD&D game, so that their
//! indexed-color frames can be edited as TGA images and written back.

pub use ravenloft_types::{file, prelude};
