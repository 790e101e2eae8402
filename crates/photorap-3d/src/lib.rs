#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// I/O utilities for reading and writing 3D data.
pub mod io;

/// Mesh and point cloud types.
pub mod mesh;

pub use mesh::{Mesh, MeshError, Topology};
