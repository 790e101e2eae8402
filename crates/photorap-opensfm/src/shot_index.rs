use crate::error::OpenSfmError;

/// Extract the ordinal of a shot from the first run of decimal digits in
/// its identifier, e.g. `"frame_0042.jpg"` gives `42`.
pub fn extract_shot_index(shot_id: &str) -> Result<u64, OpenSfmError> {
    let start = shot_id
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(|| OpenSfmError::MissingShotIndex(shot_id.to_string()))?;

    let rest = &shot_id[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());

    rest[..end]
        .parse()
        .map_err(|source| OpenSfmError::InvalidShotIndex {
            shot: shot_id.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_shot_index() -> Result<(), OpenSfmError> {
        assert_eq!(extract_shot_index("frame_0042.jpg")?, 42);
        assert_eq!(extract_shot_index("7")?, 7);
        assert_eq!(extract_shot_index("img12_v3.png")?, 12);
        assert_eq!(extract_shot_index("000")?, 0);
        Ok(())
    }

    #[test]
    fn test_extract_shot_index_missing() {
        match extract_shot_index("frame") {
            Err(OpenSfmError::MissingShotIndex(shot)) => assert_eq!(shot, "frame"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_extract_shot_index_overflow() {
        assert!(matches!(
            extract_shot_index("shot_99999999999999999999999.jpg"),
            Err(OpenSfmError::InvalidShotIndex { .. })
        ));
    }
}
