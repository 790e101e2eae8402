use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use photorap_3d::io::ply::{read_ply, to_ply_bytes};
use photorap_3d::{Mesh, Topology};
use photorap_recording::{Binary, Block};

use crate::error::OpenSfmError;
use crate::options::flip_vertical;
use crate::schema::Point;

/// Name of the sparse point cloud asset.
pub const POINT_CLOUD_ASSET: &str = "points.ply";

/// Asset metadata key holding the point or index count.
pub const POINT_COUNT_PROPERTY: &str = "points";

/// Build the sparse point cloud with colors normalized to `[0, 1]`.
pub fn point_cloud_mesh(points: &BTreeMap<String, Point>) -> Result<Mesh, OpenSfmError> {
    let (positions, colors): (Vec<_>, Vec<_>) = points
        .values()
        .map(|p| (flip_vertical(p.coordinates), p.color.map(|c| c / 255.0)))
        .unzip();

    Ok(Mesh::point_cloud(positions, Some(colors), None)?)
}

/// Serialize the sparse point cloud as a binary PLY asset.
pub fn point_cloud_asset(points: &BTreeMap<String, Point>) -> Result<Binary, OpenSfmError> {
    let mesh = point_cloud_mesh(points)?;
    let data = to_ply_bytes(&mesh).map_err(|source| OpenSfmError::Encoding {
        name: POINT_CLOUD_ASSET.to_string(),
        source,
    })?;

    log::info!(
        "encoded {} points into {POINT_CLOUD_ASSET} ({} bytes)",
        points.len(),
        data.len()
    );

    Ok(Binary::new(
        POINT_CLOUD_ASSET,
        data,
        Block::new().with(POINT_COUNT_PROPERTY, points.len()),
    ))
}

/// Keep the attributes the recording uses and apply the scale.
///
/// Point clouds keep positions and colors. Triangle meshes keep positions
/// and normals and have their winding flipped after scaling.
pub fn prepare_external_mesh(
    path: &Path,
    mesh: Mesh,
    scale: [f64; 3],
) -> Result<Mesh, OpenSfmError> {
    match mesh.topology() {
        Topology::Point => Ok(mesh.without_normals().scale([0.0; 3], scale)),
        Topology::Triangle => Ok(mesh
            .without_colors()
            .scale([0.0; 3], scale)
            .flip_tri_winding()),
        topology @ (Topology::Line | Topology::Quad) => Err(OpenSfmError::UnsupportedTopology {
            path: path.to_path_buf(),
            topology,
        }),
    }
}

/// Load an external PLY file and wrap it as a binary asset named after it.
pub fn external_mesh_asset(path: &Path, scale: [f64; 3]) -> Result<Binary, OpenSfmError> {
    let mesh = read_ply(path).map_err(|source| OpenSfmError::Ply {
        path: path.to_path_buf(),
        source,
    })?;
    let mesh = prepare_external_mesh(path, mesh, scale)?;

    let name = path.display().to_string();
    let data = to_ply_bytes(&mesh).map_err(|source| OpenSfmError::Encoding {
        name: name.clone(),
        source,
    })?;

    log::info!(
        "encoded {} mesh {name} with {} indices ({} bytes)",
        mesh.topology(),
        mesh.element_count(),
        data.len()
    );

    Ok(Binary::new(
        name,
        data,
        Block::new().with(POINT_COUNT_PROPERTY, mesh.element_count()),
    ))
}

/// Load every external mesh, stopping at the first failure.
pub fn external_mesh_assets(
    paths: &[PathBuf],
    scale: [f64; 3],
) -> Result<Vec<Binary>, OpenSfmError> {
    paths
        .iter()
        .map(|path| external_mesh_asset(path, scale))
        .collect()
}
