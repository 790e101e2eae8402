use std::collections::BTreeMap;

use crate::schema::Shot;

/// Where shot times come from, decided once per reconstruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampPolicy {
    /// Capture times are authoritative and used as-is, zeros included.
    Recorded,
    /// No capture time was recorded; the shot ordinal stands in for time.
    ShotIndex,
}

impl TimestampPolicy {
    /// Resolve the policy for a whole reconstruction.
    ///
    /// A single shot with a nonzero capture time makes every capture time
    /// authoritative.
    pub fn resolve(shots: &BTreeMap<String, Shot>) -> Self {
        if shots.values().any(|shot| shot.capture_time != 0.0) {
            TimestampPolicy::Recorded
        } else {
            TimestampPolicy::ShotIndex
        }
    }
}
