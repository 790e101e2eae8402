use std::fmt;

/// How the indices of a [`Mesh`] group vertices into primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// Every index is a standalone point.
    Point,
    /// Every two indices form a line segment.
    Line,
    /// Every three indices form a triangle.
    Triangle,
    /// Every four indices form a quad.
    Quad,
}

impl Topology {
    /// Number of indices per primitive.
    pub fn arity(&self) -> usize {
        match self {
            Topology::Point => 1,
            Topology::Line => 2,
            Topology::Triangle => 3,
            Topology::Quad => 4,
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Topology::Point => "point",
            Topology::Line => "line",
            Topology::Triangle => "triangle",
            Topology::Quad => "quad",
        };
        write!(f, "{name}")
    }
}

/// Error types for mesh construction.
#[derive(Debug, thiserror::Error)]
pub enum MeshError {
    /// An attribute does not have one entry per vertex.
    #[error("Attribute {name} has {got} entries, expected {expected}")]
    AttributeLength {
        /// Attribute name.
        name: &'static str,
        /// Number of vertices.
        expected: usize,
        /// Number of attribute entries.
        got: usize,
    },

    /// An index points past the last vertex.
    #[error("Index {index} is out of bounds for {len} vertices")]
    IndexOutOfBounds {
        /// Offending index.
        index: usize,
        /// Number of vertices.
        len: usize,
    },

    /// The index count is not a multiple of the topology arity.
    #[error("{count} indices do not form whole {topology} primitives")]
    IndexArity {
        /// Declared topology.
        topology: Topology,
        /// Number of indices.
        count: usize,
    },
}

/// An indexed set of vertices with optional per-vertex colors and normals.
///
/// Colors are stored normalized to `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    topology: Topology,
    indices: Vec<usize>,
    positions: Vec<[f64; 3]>,
    colors: Option<Vec<[f64; 3]>>,
    normals: Option<Vec<[f64; 3]>>,
}

impl Mesh {
    /// Create a mesh, validating indices and attribute lengths.
    pub fn new(
        topology: Topology,
        indices: Vec<usize>,
        positions: Vec<[f64; 3]>,
        colors: Option<Vec<[f64; 3]>>,
        normals: Option<Vec<[f64; 3]>>,
    ) -> Result<Self, MeshError> {
        let len = positions.len();
        for (name, attribute) in [("color", &colors), ("normal", &normals)] {
            if let Some(values) = attribute {
                if values.len() != len {
                    return Err(MeshError::AttributeLength {
                        name,
                        expected: len,
                        got: values.len(),
                    });
                }
            }
        }

        if indices.len() % topology.arity() != 0 {
            return Err(MeshError::IndexArity {
                topology,
                count: indices.len(),
            });
        }

        if let Some(&index) = indices.iter().find(|&&i| i >= len) {
            return Err(MeshError::IndexOutOfBounds { index, len });
        }

        Ok(Self {
            topology,
            indices,
            positions,
            colors,
            normals,
        })
    }

    /// Create a point cloud where each vertex is its own primitive.
    pub fn point_cloud(
        positions: Vec<[f64; 3]>,
        colors: Option<Vec<[f64; 3]>>,
        normals: Option<Vec<[f64; 3]>>,
    ) -> Result<Self, MeshError> {
        let indices = (0..positions.len()).collect();
        Self::new(Topology::Point, indices, positions, colors, normals)
    }

    /// The primitive topology.
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// The primitive indices.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of indices, i.e. points for a point cloud or three per triangle.
    #[inline]
    pub fn element_count(&self) -> usize {
        self.indices.len()
    }

    /// Number of primitives.
    #[inline]
    pub fn primitive_count(&self) -> usize {
        self.indices.len() / self.topology.arity()
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Vertex positions.
    pub fn positions(&self) -> &[[f64; 3]] {
        &self.positions
    }

    /// Vertex colors, if present.
    pub fn colors(&self) -> Option<&[[f64; 3]]> {
        self.colors.as_deref()
    }

    /// Vertex normals, if present.
    pub fn normals(&self) -> Option<&[[f64; 3]]> {
        self.normals.as_deref()
    }

    /// Drop the color attribute.
    pub fn without_colors(mut self) -> Self {
        self.colors = None;
        self
    }

    /// Drop the normal attribute.
    pub fn without_normals(mut self) -> Self {
        self.normals = None;
        self
    }

    /// Scale every position about `origin` by a per-axis factor.
    ///
    /// Only positions are touched; normals are carried through as-is.
    pub fn scale(mut self, origin: [f64; 3], factor: [f64; 3]) -> Self {
        for p in self.positions.iter_mut() {
            for axis in 0..3 {
                p[axis] = origin[axis] + (p[axis] - origin[axis]) * factor[axis];
            }
        }
        self
    }

    /// Reverse the winding order of every triangle.
    ///
    /// Meshes with a non-triangle topology are returned unchanged.
    pub fn flip_tri_winding(mut self) -> Self {
        if self.topology != Topology::Triangle {
            log::warn!("flip_tri_winding ignored for {} topology", self.topology);
            return self;
        }
        for tri in self.indices.chunks_exact_mut(3) {
            tri.swap(1, 2);
        }
        self
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn triangle() -> Mesh {
        Mesh::new(
            Topology::Triangle,
            vec![0, 1, 2],
            vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            None,
            Some(vec![[0.0, 0.0, 1.0]; 3]),
        )
        .unwrap()
    }

    #[test]
    fn test_point_cloud() -> Result<(), MeshError> {
        let cloud = Mesh::point_cloud(
            vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]],
            Some(vec![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]),
            None,
        )?;
        assert_eq!(cloud.topology(), Topology::Point);
        assert_eq!(cloud.indices(), &[0usize, 1]);
        assert_eq!(cloud.element_count(), 2);
        assert_eq!(cloud.vertex_count(), 2);
        assert!(cloud.normals().is_none());
        Ok(())
    }

    #[test]
    fn test_new_rejects_attribute_mismatch() {
        let res = Mesh::point_cloud(vec![[0.0; 3]; 2], Some(vec![[0.0; 3]]), None);
        assert!(matches!(
            res,
            Err(MeshError::AttributeLength {
                name: "color",
                expected: 2,
                got: 1
            })
        ));
    }

    #[test]
    fn test_new_rejects_bad_indices() {
        let res = Mesh::new(Topology::Triangle, vec![0, 1], vec![[0.0; 3]; 3], None, None);
        assert!(matches!(res, Err(MeshError::IndexArity { count: 2, .. })));

        let res = Mesh::new(Topology::Triangle, vec![0, 1, 3], vec![[0.0; 3]; 3], None, None);
        assert!(matches!(
            res,
            Err(MeshError::IndexOutOfBounds { index: 3, len: 3 })
        ));
    }

    #[test]
    fn test_scale_about_origin() {
        let mesh = triangle().scale([0.0, 0.0, 0.0], [2.0, -1.0, 1.0]);
        assert_relative_eq!(mesh.positions()[1][0], 2.0);
        assert_relative_eq!(mesh.positions()[2][1], -1.0);
        assert_eq!(mesh.normals().unwrap()[0], [0.0, 0.0, 1.0]);

        let mesh = triangle().scale([1.0, 1.0, 0.0], [2.0, 2.0, 2.0]);
        assert_relative_eq!(mesh.positions()[0][0], -1.0);
        assert_relative_eq!(mesh.positions()[0][1], -1.0);
    }

    #[test]
    fn test_flip_tri_winding() {
        let mesh = triangle().flip_tri_winding();
        assert_eq!(mesh.indices(), &[0usize, 2, 1]);
        assert_eq!(mesh.primitive_count(), 1);

        let cloud = Mesh::point_cloud(vec![[0.0; 3]; 3], None, None)
            .unwrap()
            .flip_tri_winding();
        assert_eq!(cloud.indices(), &[0usize, 1, 2]);
    }

    #[test]
    fn test_topology_display() {
        assert_eq!(Topology::Line.to_string(), "line");
        assert_eq!(Topology::Quad.arity(), 4);
    }
}
