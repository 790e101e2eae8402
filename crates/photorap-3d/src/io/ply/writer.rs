use std::io::Write;

use super::PlyError;
use crate::mesh::{Mesh, Topology};

fn write_vec3<W: Write>(writer: &mut W, v: &[f64; 3]) -> std::io::Result<()> {
    for c in v {
        writer.write_all(&(*c as f32).to_le_bytes())?;
    }
    Ok(())
}

fn encode_index(index: usize) -> Result<[u8; 4], PlyError> {
    let index = i32::try_from(index).map_err(|_| PlyError::InvalidValue(index.to_string()))?;
    Ok(index.to_le_bytes())
}

/// Write a mesh as a `binary_little_endian` PLY stream.
///
/// Positions, normals and colors are written as `float`; colors keep their
/// normalized `[0, 1]` range. Triangles and quads go to a `face` element,
/// lines to an `edge` element and point clouds carry only vertices.
pub fn write_ply_binary<W: Write>(writer: &mut W, mesh: &Mesh) -> Result<(), PlyError> {
    writeln!(writer, "ply")?;
    writeln!(writer, "format binary_little_endian 1.0")?;
    writeln!(writer, "comment written by photorap")?;
    writeln!(writer, "element vertex {}", mesh.vertex_count())?;
    for axis in ["x", "y", "z"] {
        writeln!(writer, "property float {axis}")?;
    }
    if mesh.normals().is_some() {
        for axis in ["nx", "ny", "nz"] {
            writeln!(writer, "property float {axis}")?;
        }
    }
    if mesh.colors().is_some() {
        for channel in ["red", "green", "blue"] {
            writeln!(writer, "property float {channel}")?;
        }
    }
    match mesh.topology() {
        Topology::Point => {}
        Topology::Line => {
            writeln!(writer, "element edge {}", mesh.primitive_count())?;
            writeln!(writer, "property int vertex1")?;
            writeln!(writer, "property int vertex2")?;
        }
        Topology::Triangle | Topology::Quad => {
            writeln!(writer, "element face {}", mesh.primitive_count())?;
            writeln!(writer, "property list uchar int vertex_indices")?;
        }
    }
    writeln!(writer, "end_header")?;

    for i in 0..mesh.vertex_count() {
        write_vec3(writer, &mesh.positions()[i])?;
        if let Some(normals) = mesh.normals() {
            write_vec3(writer, &normals[i])?;
        }
        if let Some(colors) = mesh.colors() {
            write_vec3(writer, &colors[i])?;
        }
    }

    let arity = mesh.topology().arity();
    if mesh.topology() != Topology::Point {
        for primitive in mesh.indices().chunks_exact(arity) {
            if matches!(mesh.topology(), Topology::Triangle | Topology::Quad) {
                writer.write_all(&[arity as u8])?;
            }
            for &index in primitive {
                writer.write_all(&encode_index(index)?)?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}

/// Serialize a mesh into an in-memory binary PLY payload.
pub fn to_ply_bytes(mesh: &Mesh) -> Result<Vec<u8>, PlyError> {
    let mut buffer = Vec::new();
    write_ply_binary(&mut buffer, mesh)?;
    Ok(buffer)
}
