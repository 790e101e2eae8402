use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::OpenSfmError;

/// Camera intrinsics.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Camera {
    /// Projection model, e.g. `perspective` or `fisheye`.
    pub projection_type: String,
    /// Image width in pixels.
    pub width: i64,
    /// Image height in pixels.
    pub height: i64,
    /// Focal length normalized by the larger image side.
    #[serde(default)]
    pub focal: f64,
    /// First radial distortion coefficient.
    #[serde(default)]
    pub k1: f64,
    /// Second radial distortion coefficient.
    #[serde(default)]
    pub k2: f64,
}

/// One camera pose observation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Shot {
    /// Identifier of the camera the shot was taken with.
    pub camera: String,
    /// Axis-angle rotation vector.
    pub rotation: [f64; 3],
    /// Translation vector.
    pub translation: [f64; 3],
    /// Capture time; `0` means the time was never recorded.
    #[serde(default)]
    pub capture_time: f64,
    /// EXIF-style orientation index.
    #[serde(default = "default_orientation")]
    pub orientation: i64,
    /// Shot scale.
    #[serde(default = "default_scale")]
    pub scale: f64,
}

fn default_orientation() -> i64 {
    1
}

fn default_scale() -> f64 {
    1.0
}

/// A sparse reconstructed point.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Point {
    /// Position.
    pub coordinates: [f64; 3],
    /// Color with channels in `[0, 255]`.
    pub color: [f64; 3],
}

/// A single reconstruction: cameras, shots and sparse points keyed by id.
///
/// Maps are ordered so every traversal is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Reconstruction {
    /// Cameras by identifier.
    #[serde(default)]
    pub cameras: BTreeMap<String, Camera>,
    /// Shots by identifier.
    #[serde(default)]
    pub shots: BTreeMap<String, Shot>,
    /// Points by identifier.
    #[serde(default)]
    pub points: BTreeMap<String, Point>,
}

impl Reconstruction {
    /// Iterate over the shots taken with `camera_id`, in identifier order.
    pub fn shots_of<'a>(
        &'a self,
        camera_id: &'a str,
    ) -> impl Iterator<Item = (&'a String, &'a Shot)> + 'a {
        self.shots
            .iter()
            .filter(move |(_, shot)| shot.camera == camera_id)
    }
}

/// Parse a reconstruction document.
///
/// The document is a JSON array of reconstructions and must hold exactly one.
pub fn parse_reconstruction(json: &str) -> Result<Reconstruction, OpenSfmError> {
    let mut document: Vec<Reconstruction> = serde_json::from_str(json)?;
    match document.len() {
        0 => Err(OpenSfmError::EmptyDocument),
        1 => Ok(document.remove(0)),
        n => Err(OpenSfmError::MultipleReconstructions(n)),
    }
}

/// Read and parse a reconstruction document from disk.
pub fn read_reconstruction(path: impl AsRef<Path>) -> Result<Reconstruction, OpenSfmError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| OpenSfmError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let reconstruction = parse_reconstruction(&json).map_err(|e| OpenSfmError::Document {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;

    log::info!(
        "read reconstruction {}: {} cameras, {} shots, {} points",
        path.display(),
        reconstruction.cameras.len(),
        reconstruction.shots.len(),
        reconstruction.points.len()
    );
    Ok(reconstruction)
}
