mod parser;
mod properties;
mod writer;

pub use parser::*;
pub use properties::*;
pub use writer::*;

/// Error types for the PLY module.
#[derive(Debug, thiserror::Error)]
pub enum PlyError {
    /// Failed to read or write the PLY file
    #[error("Failed to read or write PLY file. {0}")]
    Io(#[from] std::io::Error),

    /// Malformed PLY header
    #[error("Malformed PLY header: {0}")]
    MalformedHeader(String),

    /// Unsupported PLY storage format
    #[error("Unsupported PLY format: {0}")]
    UnsupportedFormat(String),

    /// Unsupported PLY property
    #[error("Unsupported PLY property: {0}")]
    UnsupportedProperty(String),

    /// The body ended before every declared element was read
    #[error("Unexpected end of PLY body while reading element {0}")]
    UnexpectedEof(String),

    /// A body value could not be parsed
    #[error("Invalid PLY value: {0}")]
    InvalidValue(String),

    /// Faces with an arity other than three or four, or a mix of both
    #[error("Unsupported face arity {0}")]
    UnsupportedFaceArity(usize),

    /// The decoded data does not form a valid mesh
    #[error(transparent)]
    Mesh(#[from] crate::mesh::MeshError),
}
