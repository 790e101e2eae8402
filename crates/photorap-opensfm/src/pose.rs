use photorap_recording::Block;

use crate::error::OpenSfmError;
use crate::options::flip_vertical;
use crate::schema::Shot;
use crate::shot_index::extract_shot_index;
use crate::timestamp::TimestampPolicy;

/// Event metadata key for the shot orientation index.
pub const ORIENTATION_PROPERTY: &str = "Orientation Index";

/// Event metadata key for the shot scale.
pub const SCALE_PROPERTY: &str = "Scale";

/// A shot normalized into the recording's time, axis and angle conventions.
#[derive(Debug, Clone, PartialEq)]
pub struct ShotPose {
    /// Shot identifier, used as the event label.
    pub shot_id: String,
    /// Resolved time.
    pub time: f64,
    /// Position with the vertical axis flipped.
    pub position: [f64; 3],
    /// Per-axis rotation in whole degrees, applied in Z, X, Y order.
    pub rotation: [i64; 3],
    /// Orientation index copied from the shot.
    pub orientation: i64,
    /// Scale copied from the shot.
    pub scale: f64,
}

impl ShotPose {
    /// Metadata carried by the shot's event capture.
    pub fn event_metadata(&self) -> Block {
        Block::new()
            .with(ORIENTATION_PROPERTY, self.orientation)
            .with(SCALE_PROPERTY, self.scale as f32)
    }
}

/// Quantize one rotation-vector component to whole degrees.
///
/// Computes `round(raw * 180) % 360` with a truncating remainder, so
/// negative inputs stay negative.
pub fn quantize_degrees(raw: f64) -> i64 {
    (raw * 180.0).round() as i64 % 360
}

/// Normalize one shot.
///
/// Every shot identifier must carry an ordinal, even when capture times
/// are authoritative and the ordinal goes unused.
pub fn transform_shot(
    shot_id: &str,
    shot: &Shot,
    policy: TimestampPolicy,
) -> Result<ShotPose, OpenSfmError> {
    let shot_index = extract_shot_index(shot_id)?;

    let time = match policy {
        TimestampPolicy::Recorded => shot.capture_time,
        TimestampPolicy::ShotIndex => shot_index as f64,
    };

    Ok(ShotPose {
        shot_id: shot_id.to_string(),
        time,
        position: flip_vertical(shot.translation),
        rotation: shot.rotation.map(quantize_degrees),
        orientation: shot.orientation,
        scale: shot.scale,
    })
}
