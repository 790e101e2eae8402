use std::io::Write;

use crate::error::RecordingError;
use crate::recording::Recording;

/// Leading bytes of every container stream.
pub const CONTAINER_MAGIC: [u8; 4] = *b"PRAP";

/// Current container layout version.
pub const CONTAINER_VERSION: u32 = 1;

/// A sink that serializes a whole recording.
pub trait RecordingWriter {
    /// Write the recording, returning the number of bytes written.
    fn write(&mut self, recording: &Recording) -> Result<usize, RecordingError>;
}

/// Writes recordings as `magic | version (u32 LE) | bincode payload`.
pub struct ContainerWriter<W: Write> {
    inner: W,
}

impl<W: Write> ContainerWriter<W> {
    /// Create a writer over any byte sink.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Unwrap the underlying sink.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> RecordingWriter for ContainerWriter<W> {
    fn write(&mut self, recording: &Recording) -> Result<usize, RecordingError> {
        self.inner.write_all(&CONTAINER_MAGIC)?;
        self.inner.write_all(&CONTAINER_VERSION.to_le_bytes())?;
        let payload =
            bincode::encode_into_std_write(recording, &mut self.inner, bincode::config::standard())?;
        self.inner.flush()?;

        let written = CONTAINER_MAGIC.len() + std::mem::size_of::<u32>() + payload;
        log::debug!("wrote recording '{}' ({written} bytes)", recording.id());
        Ok(written)
    }
}

/// Decode a recording previously written by [`ContainerWriter`].
pub fn read_recording(bytes: &[u8]) -> Result<Recording, RecordingError> {
    let header_len = CONTAINER_MAGIC.len() + std::mem::size_of::<u32>();
    if bytes.len() < header_len {
        return Err(RecordingError::Io(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "container header is truncated",
        )));
    }

    let mut magic = [0u8; 4];
    magic.copy_from_slice(&bytes[..4]);
    if magic != CONTAINER_MAGIC {
        return Err(RecordingError::InvalidMagic(magic));
    }

    let mut version = [0u8; 4];
    version.copy_from_slice(&bytes[4..8]);
    let version = u32::from_le_bytes(version);
    if version != CONTAINER_VERSION {
        return Err(RecordingError::UnsupportedVersion(version));
    }

    let (recording, _) =
        bincode::decode_from_slice(&bytes[header_len..], bincode::config::standard())?;
    Ok(recording)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::{Collection, EventCapture};
    use crate::metadata::Block;
    use crate::recording::Binary;

    #[test]
    fn test_write_then_read() -> Result<(), RecordingError> {
        let recording = Recording::new("opensfm", "Open SFM")
            .with_subjects(vec![Recording::new("cam", "cam").with_collections(vec![
                Collection::new(
                    "Custom Event",
                    vec![EventCapture::new(
                        4.0,
                        "shot_4.jpg",
                        Block::new().with("Scale", 1.5f32),
                    )],
                )
                .into(),
            ])])
            .with_binaries(vec![Binary::new(
                "points.ply",
                vec![0, 1, 2],
                Block::new().with("points", 0usize),
            )]);

        let mut writer = ContainerWriter::new(Vec::new());
        let written = writer.write(&recording)?;
        let bytes = writer.into_inner();
        assert_eq!(written, bytes.len());
        assert_eq!(&bytes[..4], b"PRAP");

        let decoded = read_recording(&bytes)?;
        assert_eq!(decoded, recording);
        Ok(())
    }

    #[test]
    fn test_read_rejects_bad_magic() {
        let bytes = [b'N', b'O', b'P', b'E', 1, 0, 0, 0];
        assert!(matches!(
            read_recording(&bytes),
            Err(RecordingError::InvalidMagic(_))
        ));
    }

    #[test]
    fn test_read_rejects_unknown_version() {
        let mut bytes = CONTAINER_MAGIC.to_vec();
        bytes.extend_from_slice(&99u32.to_le_bytes());
        assert!(matches!(
            read_recording(&bytes),
            Err(RecordingError::UnsupportedVersion(99))
        ));
    }
}
