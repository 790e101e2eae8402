use std::path::PathBuf;

use photorap_recording::{Binary, Block, Recording};

use crate::assets::{external_mesh_assets, point_cloud_asset};
use crate::error::OpenSfmError;
use crate::options::ConversionOptions;
use crate::schema::Reconstruction;
use crate::subject::decompose_subjects;
use crate::timestamp::TimestampPolicy;

/// Identifier of the root recording.
pub const ROOT_ID: &str = "opensfm";

/// Display name of the root recording.
pub const ROOT_NAME: &str = "Open SFM";

/// Summary stored on the root recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootMetadata {
    /// Number of cameras in the reconstruction.
    pub cameras: usize,
    /// Number of shots in the reconstruction.
    pub shots: usize,
    /// Number of sparse points in the reconstruction.
    pub points: usize,
}

impl RootMetadata {
    /// Collect the counts of a reconstruction.
    pub fn new(recon: &Reconstruction) -> Self {
        Self {
            cameras: recon.cameras.len(),
            shots: recon.shots.len(),
            points: recon.points.len(),
        }
    }

    /// The metadata block of the root recording.
    pub fn to_block(&self) -> Block {
        Block::new()
            .with("cameras", self.cameras)
            .with("shots", self.shots)
            .with("points", self.points)
    }
}

/// Compose the root recording from its parts.
pub fn assemble_recording(
    metadata: RootMetadata,
    subjects: Vec<Recording>,
    binaries: Vec<Binary>,
) -> Recording {
    Recording::new(ROOT_ID, ROOT_NAME)
        .with_metadata(metadata.to_block())
        .with_subjects(subjects)
        .with_binaries(binaries)
}

/// Convert a reconstruction and optional external meshes into a recording.
///
/// Nothing is returned unless every step succeeds.
pub fn reconstruction_to_recording(
    recon: &Reconstruction,
    options: &ConversionOptions,
    mesh_paths: &[PathBuf],
) -> Result<Recording, OpenSfmError> {
    let policy = TimestampPolicy::resolve(&recon.shots);
    match policy {
        TimestampPolicy::Recorded => log::info!("using recorded capture times"),
        TimestampPolicy::ShotIndex => {
            log::info!("no capture times recorded, inferring time from shot identifiers")
        }
    }

    let subjects = decompose_subjects(recon, policy)?;

    let mut binaries = vec![point_cloud_asset(&recon.points)?];
    binaries.extend(external_mesh_assets(mesh_paths, options.mesh_scale)?);

    Ok(assemble_recording(
        RootMetadata::new(recon),
        subjects,
        binaries,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use photorap_recording::Property;

    #[test]
    fn test_assemble_recording() {
        let metadata = RootMetadata {
            cameras: 2,
            shots: 3,
            points: 4,
        };
        let recording = assemble_recording(
            metadata,
            vec![Recording::new("A", "A"), Recording::new("B", "B")],
            vec![Binary::new("points.ply", vec![], Block::new())],
        );

        assert_eq!(recording.id(), "opensfm");
        assert_eq!(recording.name(), "Open SFM");
        assert!(recording.collections().is_empty());
        assert!(recording.references().is_empty());
        assert_eq!(recording.subjects().len(), 2);
        assert_eq!(recording.binaries().len(), 1);
        assert_eq!(recording.metadata().get("shots"), Some(&Property::Int(3)));
    }

    #[test]
    fn test_empty_reconstruction() -> Result<(), OpenSfmError> {
        let recording = reconstruction_to_recording(
            &Reconstruction::default(),
            &ConversionOptions::default(),
            &[],
        )?;
        assert!(recording.subjects().is_empty());
        assert_eq!(recording.binaries().len(), 1);
        assert_eq!(
            recording.binaries()[0].metadata().get("points"),
            Some(&Property::Int(0))
        );
        Ok(())
    }
}
