#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Time-stamped captures and the collections that order them.
pub mod capture;

/// Error types for the recording module.
pub mod error;

/// Typed metadata blocks attached to recordings, events and binaries.
pub mod metadata;

/// Recording tree and binary assets.
pub mod recording;

/// Container writer and reader.
pub mod writer;

pub use capture::*;
pub use error::RecordingError;
pub use metadata::{Block, Property};
pub use recording::{Binary, BinaryReference, Recording};
pub use writer::{read_recording, ContainerWriter, RecordingWriter};
