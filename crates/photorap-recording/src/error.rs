/// An error type for the recording module.
#[derive(Debug, thiserror::Error)]
pub enum RecordingError {
    /// Failed to write or read the container stream.
    #[error("Failed to manipulate the recording stream. {0}")]
    Io(#[from] std::io::Error),

    /// Failed to encode the recording.
    #[error("Failed to encode the recording. {0}")]
    Encode(#[from] bincode::error::EncodeError),

    /// Failed to decode the recording.
    #[error("Failed to decode the recording. {0}")]
    Decode(#[from] bincode::error::DecodeError),

    /// The stream does not start with the container magic.
    #[error("Invalid container magic. Got: {0:?}")]
    InvalidMagic([u8; 4]),

    /// The container was written with an unknown format version.
    #[error("Unsupported container version {0}")]
    UnsupportedVersion(u32),
}
