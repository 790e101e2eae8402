/// Negate the vertical axis, going from the reconstruction's handedness to
/// the recording's.
///
/// Shot positions and sparse points both go through this so the two always
/// line up inside one recording.
pub fn flip_vertical(p: [f64; 3]) -> [f64; 3] {
    [p[0], -p[1], p[2]]
}

/// Options for one conversion run.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionOptions {
    /// Per-axis scale applied about the origin to every external mesh.
    pub mesh_scale: [f64; 3],
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            mesh_scale: [1.0, -1.0, 1.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_vertical() {
        assert_eq!(flip_vertical([1.0, 2.0, 3.0]), [1.0, -2.0, 3.0]);
        assert_eq!(flip_vertical([0.0, -0.5, 0.0]), [0.0, 0.5, 0.0]);
    }

    #[test]
    fn test_default_mesh_scale() {
        assert_eq!(ConversionOptions::default().mesh_scale, [1.0, -1.0, 1.0]);
    }
}
