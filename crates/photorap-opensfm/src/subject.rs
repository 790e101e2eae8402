use photorap_recording::{Block, Recording};

use crate::collections::CaptureCollections;
use crate::error::OpenSfmError;
use crate::pose::transform_shot;
use crate::schema::{Camera, Reconstruction};
use crate::timestamp::TimestampPolicy;

/// Intrinsics of a camera as subject metadata.
pub fn camera_metadata(camera: &Camera) -> Block {
    Block::new()
        .with("Projection Type", camera.projection_type.as_str())
        .with("Width", camera.width)
        .with("Height", camera.height)
        .with("Focal", camera.focal as f32)
        .with("K1", camera.k1 as f32)
        .with("K2", camera.k2 as f32)
}

/// Build the subject recording of one camera from the shots taken with it.
pub fn camera_to_subject(
    recon: &Reconstruction,
    camera_id: &str,
    camera: &Camera,
    policy: TimestampPolicy,
) -> Result<Recording, OpenSfmError> {
    let poses = recon
        .shots_of(camera_id)
        .map(|(shot_id, shot)| transform_shot(shot_id, shot, policy))
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!("camera {camera_id}: {} shots", poses.len());

    Ok(Recording::new(camera_id, camera_id)
        .with_collections(CaptureCollections::build(&poses).into_vec())
        .with_metadata(camera_metadata(camera)))
}

/// Build one subject recording per camera.
///
/// Cameras without shots still get a subject with empty collections.
pub fn decompose_subjects(
    recon: &Reconstruction,
    policy: TimestampPolicy,
) -> Result<Vec<Recording>, OpenSfmError> {
    recon
        .cameras
        .iter()
        .map(|(camera_id, camera)| camera_to_subject(recon, camera_id, camera, policy))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Shot;
    use photorap_recording::Property;

    fn camera() -> Camera {
        Camera {
            projection_type: "perspective".to_string(),
            width: 640,
            height: 480,
            focal: 0.9,
            k1: 0.1,
            k2: -0.2,
        }
    }

    fn shot(camera: &str) -> Shot {
        Shot {
            camera: camera.to_string(),
            rotation: [0.0; 3],
            translation: [0.0; 3],
            capture_time: 0.0,
            orientation: 1,
            scale: 1.0,
        }
    }

    #[test]
    fn test_camera_metadata() {
        let metadata = camera_metadata(&camera());
        assert_eq!(metadata.len(), 6);
        assert_eq!(
            metadata.get("Projection Type"),
            Some(&Property::String("perspective".to_string()))
        );
        assert_eq!(metadata.get("Width"), Some(&Property::Int(640)));
        assert_eq!(metadata.get("K2"), Some(&Property::Float32(-0.2)));
    }

    #[test]
    fn test_decompose_subjects() -> Result<(), OpenSfmError> {
        let mut recon = Reconstruction::default();
        recon.cameras.insert("A".to_string(), camera());
        recon.cameras.insert("B".to_string(), camera());
        recon.cameras.insert("C".to_string(), camera());
        recon.shots.insert("shot_1".to_string(), shot("A"));
        recon.shots.insert("shot_2".to_string(), shot("B"));
        recon.shots.insert("shot_3".to_string(), shot("A"));

        let subjects = decompose_subjects(&recon, TimestampPolicy::ShotIndex)?;
        assert_eq!(subjects.len(), 3);

        let counts = subjects
            .iter()
            .map(|s| (s.id(), s.collection("Position").map(|c| c.len())))
            .collect::<Vec<_>>();
        assert_eq!(
            counts,
            vec![("A", Some(2)), ("B", Some(1)), ("C", Some(0))]
        );

        let a = &subjects[0];
        assert_eq!(a.name(), "A");
        assert!(a.subjects().is_empty());
        assert!(a.binaries().is_empty());
        assert_eq!(a.collections().len(), 3);
        Ok(())
    }

    #[test]
    fn test_decompose_fails_on_bad_shot_name() {
        let mut recon = Reconstruction::default();
        recon.cameras.insert("A".to_string(), camera());
        recon.shots.insert("frame".to_string(), shot("A"));

        let res = decompose_subjects(&recon, TimestampPolicy::ShotIndex);
        assert!(matches!(res, Err(OpenSfmError::MissingShotIndex(id)) if id == "frame"));
    }
}
