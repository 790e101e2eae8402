use std::path::PathBuf;

use photorap_3d::{io::ply::PlyError, MeshError, Topology};

/// An error type for the OpenSfM conversion.
#[derive(Debug, thiserror::Error)]
pub enum OpenSfmError {
    /// Failed to read an input file.
    #[error("Failed to read {}. {source}", .path.display())]
    Io {
        /// The file being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The reconstruction document is not valid JSON for the schema.
    #[error("Malformed reconstruction json. {0}")]
    Json(#[from] serde_json::Error),

    /// The document holds more than one reconstruction.
    #[error("Reconstruction document contains {0} reconstructions, only one is supported")]
    MultipleReconstructions(usize),

    /// The document holds no reconstruction at all.
    #[error("Reconstruction document contains no reconstruction")]
    EmptyDocument,

    /// A document-level error annotated with the document path.
    #[error("Invalid reconstruction document {}. {source}", .path.display())]
    Document {
        /// The reconstruction file.
        path: PathBuf,
        /// What was wrong with it.
        source: Box<OpenSfmError>,
    },

    /// A shot identifier carries no decimal run to use as its ordinal.
    #[error("Shot {0} has no numeric index in its identifier")]
    MissingShotIndex(String),

    /// The shot ordinal does not fit into an integer.
    #[error("Shot {shot} has an out of range numeric index. {source}")]
    InvalidShotIndex {
        /// The shot identifier.
        shot: String,
        /// The parse failure.
        source: std::num::ParseIntError,
    },

    /// An external mesh has a topology the conversion does not handle.
    #[error("Unsupported topology {topology} in {}", .path.display())]
    UnsupportedTopology {
        /// The mesh file.
        path: PathBuf,
        /// Its topology.
        topology: Topology,
    },

    /// Failed to load an external mesh.
    #[error("Failed to load mesh {}. {source}", .path.display())]
    Ply {
        /// The mesh file.
        path: PathBuf,
        /// The reader error.
        source: PlyError,
    },

    /// Failed to serialize a binary asset.
    #[error("Failed to encode asset {name}. {source}")]
    Encoding {
        /// The asset name.
        name: String,
        /// The writer error.
        source: PlyError,
    },

    /// Point data did not form a valid point cloud.
    #[error("Invalid point cloud. {0}")]
    Mesh(#[from] MeshError),
}
