#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Recording assembly and the end-to-end conversion.
pub mod assemble;

/// Point cloud and external mesh binary assets.
pub mod assets;

/// Per-camera capture collections.
pub mod collections;

/// Error types for the conversion.
pub mod error;

/// Conversion options and the vertical-axis flip.
pub mod options;

/// Per-shot pose normalization.
pub mod pose;

/// OpenSfM reconstruction schema and document loading.
pub mod schema;

/// Shot ordinal extraction from identifiers.
pub mod shot_index;

/// Per-camera subject recordings.
pub mod subject;

/// Reconstruction-wide timestamp policy.
pub mod timestamp;

pub use assemble::{assemble_recording, reconstruction_to_recording, RootMetadata};
pub use error::OpenSfmError;
pub use options::{flip_vertical, ConversionOptions};
pub use schema::{parse_reconstruction, read_reconstruction, Camera, Point, Reconstruction, Shot};
pub use timestamp::TimestampPolicy;
