use photorap_recording::{
    CaptureCollection, Collection, EulerCapture, EventCapture, PositionCapture,
};

use crate::pose::ShotPose;

/// Name of the position collection of every subject.
pub const POSITION_COLLECTION: &str = "Position";

/// Name of the rotation collection of every subject.
pub const ROTATION_COLLECTION: &str = "Rotation";

/// Name of the event collection of every subject.
pub const EVENT_COLLECTION: &str = "Custom Event";

/// The three time-ordered collections of one camera.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureCollections {
    /// Shot positions.
    pub position: Collection<PositionCapture>,
    /// Shot rotations.
    pub rotation: Collection<EulerCapture>,
    /// One event per shot, labelled with the shot identifier.
    pub events: Collection<EventCapture>,
}

impl CaptureCollections {
    /// Build one capture of each kind per pose.
    ///
    /// Each collection is sorted by time on its own; poses that share a
    /// time may end up in a different relative order across kinds.
    pub fn build(poses: &[ShotPose]) -> Self {
        let mut positions = Vec::with_capacity(poses.len());
        let mut rotations = Vec::with_capacity(poses.len());
        let mut events = Vec::with_capacity(poses.len());

        for pose in poses {
            let [x, y, z] = pose.position;
            positions.push(PositionCapture::new(pose.time, x, y, z));

            let [rx, ry, rz] = pose.rotation;
            rotations.push(EulerCapture::new_zxy(
                pose.time,
                rx as f64,
                ry as f64,
                rz as f64,
            ));

            events.push(EventCapture::new(
                pose.time,
                pose.shot_id.clone(),
                pose.event_metadata(),
            ));
        }

        Self {
            position: Collection::new(POSITION_COLLECTION, positions),
            rotation: Collection::new(ROTATION_COLLECTION, rotations),
            events: Collection::new(EVENT_COLLECTION, events),
        }
    }

    /// Convert into the generic collection list of a recording.
    pub fn into_vec(self) -> Vec<CaptureCollection> {
        vec![
            self.position.into(),
            self.rotation.into(),
            self.events.into(),
        ]
    }
}
