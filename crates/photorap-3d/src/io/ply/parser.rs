use std::io::{BufRead, Read};
use std::path::Path;

use super::{
    properties::{PlyDataType, PlyElementDefinition, PlyFormat, PlyPropertyDefinition, PlyValue},
    PlyError,
};
use crate::mesh::{Mesh, Topology};

/// Upper bound on rows reserved ahead of reading; header counts are untrusted.
const MAX_RESERVED_ROWS: usize = 1 << 16;

/// Parsed PLY header.
#[derive(Debug, PartialEq, Clone)]
pub struct PlyHeader {
    /// Storage format of the body.
    pub format: PlyFormat,
    /// Declared elements in body order.
    pub elements: Vec<PlyElementDefinition>,
}

impl PlyHeader {
    /// Look up an element by name.
    pub fn element(&self, name: &str) -> Option<&PlyElementDefinition> {
        self.elements.iter().find(|e| e.name == name)
    }
}

/// Parse the header up to and including the `end_header` line.
pub fn parse_header<R: BufRead>(reader: &mut R) -> Result<PlyHeader, PlyError> {
    let mut line = String::new();
    let mut format = None;
    let mut elements: Vec<PlyElementDefinition> = Vec::new();

    reader.read_line(&mut line)?;
    if line.trim() != "ply" {
        return Err(PlyError::MalformedHeader("missing ply magic".to_string()));
    }

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(PlyError::MalformedHeader("missing end_header".to_string()));
        }
        let parts = line.split_whitespace().collect::<Vec<_>>();

        match parts.as_slice() {
            [] | ["comment", ..] | ["obj_info", ..] => continue,
            ["end_header"] => break,
            ["format", "ascii", _] => format = Some(PlyFormat::Ascii),
            ["format", "binary_little_endian", _] => format = Some(PlyFormat::BinaryLittleEndian),
            ["format", other, ..] => return Err(PlyError::UnsupportedFormat(other.to_string())),
            ["element", name, count] => {
                let count = count.parse().map_err(|_| {
                    PlyError::MalformedHeader(format!("invalid element count: {count}"))
                })?;
                elements.push(PlyElementDefinition {
                    name: name.to_string(),
                    count,
                    properties: Vec::new(),
                });
            }
            ["property", "list", count_type, item_type, name] => {
                let element = elements.last_mut().ok_or_else(|| {
                    PlyError::MalformedHeader(format!("property {name} outside of an element"))
                })?;
                element.properties.push(PlyPropertyDefinition::List {
                    name: name.to_string(),
                    count_type: PlyDataType::parse(count_type)?,
                    item_type: PlyDataType::parse(item_type)?,
                });
            }
            ["property", data_type, name] => {
                let element = elements.last_mut().ok_or_else(|| {
                    PlyError::MalformedHeader(format!("property {name} outside of an element"))
                })?;
                element.properties.push(PlyPropertyDefinition::Scalar {
                    name: name.to_string(),
                    data_type: PlyDataType::parse(data_type)?,
                });
            }
            _ => {
                return Err(PlyError::MalformedHeader(format!(
                    "unexpected line: {}",
                    line.trim()
                )))
            }
        }
    }

    let format = format.ok_or_else(|| PlyError::MalformedHeader("missing format".to_string()))?;
    Ok(PlyHeader { format, elements })
}

// Yields body values one at a time regardless of the storage format.
trait ValueSource {
    fn next_value(&mut self, data_type: PlyDataType) -> Result<Option<f64>, PlyError>;
}

struct BinarySource<R> {
    reader: R,
}

impl<R: Read> ValueSource for BinarySource<R> {
    fn next_value(&mut self, data_type: PlyDataType) -> Result<Option<f64>, PlyError> {
        let mut buf = [0u8; 8];
        match self.reader.read_exact(&mut buf[..data_type.size()]) {
            Ok(()) => Ok(Some(data_type.decode_le(&buf))),
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

struct AsciiSource<'a> {
    tokens: std::str::SplitAsciiWhitespace<'a>,
}

impl ValueSource for AsciiSource<'_> {
    fn next_value(&mut self, _data_type: PlyDataType) -> Result<Option<f64>, PlyError> {
        self.tokens
            .next()
            .map(|token| {
                token
                    .parse::<f64>()
                    .map_err(|_| PlyError::InvalidValue(token.to_string()))
            })
            .transpose()
    }
}

fn read_element<S: ValueSource>(
    source: &mut S,
    element: &PlyElementDefinition,
) -> Result<Vec<Vec<PlyValue>>, PlyError> {
    let eof = || PlyError::UnexpectedEof(element.name.clone());
    let mut rows = Vec::with_capacity(element.count.min(MAX_RESERVED_ROWS));

    for _ in 0..element.count {
        let mut row = Vec::with_capacity(element.properties.len());
        for property in &element.properties {
            match property {
                PlyPropertyDefinition::Scalar { data_type, .. } => {
                    let value = source.next_value(*data_type)?.ok_or_else(eof)?;
                    row.push(PlyValue::Scalar(value));
                }
                PlyPropertyDefinition::List {
                    count_type,
                    item_type,
                    ..
                } => {
                    let len = source.next_value(*count_type)?.ok_or_else(eof)?;
                    let len = to_index(len)?;
                    let mut items = Vec::new();
                    for _ in 0..len {
                        items.push(source.next_value(*item_type)?.ok_or_else(eof)?);
                    }
                    row.push(PlyValue::List(items));
                }
            }
        }
        rows.push(row);
    }

    Ok(rows)
}

fn to_index(value: f64) -> Result<usize, PlyError> {
    if value < 0.0 || value.fract() != 0.0 {
        return Err(PlyError::InvalidValue(value.to_string()));
    }
    Ok(value as usize)
}

fn scalar_at(row: &[PlyValue], index: usize) -> f64 {
    match row.get(index) {
        Some(PlyValue::Scalar(v)) => *v,
        _ => 0.0,
    }
}

// Gathers three scalar properties per row, or `None` if any is missing.
fn gather_triplet(
    element: &PlyElementDefinition,
    rows: &[Vec<PlyValue>],
    names: [&str; 3],
    factor: f64,
) -> Option<Vec<[f64; 3]>> {
    let idx = [
        element.property_index(names[0])?,
        element.property_index(names[1])?,
        element.property_index(names[2])?,
    ];
    Some(
        rows.iter()
            .map(|row| idx.map(|i| scalar_at(row, i) * factor))
            .collect(),
    )
}

fn build_mesh(
    header: &PlyHeader,
    mut bodies: Vec<Vec<Vec<PlyValue>>>,
) -> Result<Mesh, PlyError> {
    let body_of = |name: &str| header.elements.iter().position(|e| e.name == name);

    let vertex_idx = body_of("vertex")
        .ok_or_else(|| PlyError::MalformedHeader("missing vertex element".to_string()))?;
    let vertex = &header.elements[vertex_idx];
    let vertices = std::mem::take(&mut bodies[vertex_idx]);

    let positions = gather_triplet(vertex, &vertices, ["x", "y", "z"], 1.0).ok_or_else(|| {
        PlyError::UnsupportedProperty("vertex element requires x, y and z".to_string())
    })?;

    // integer colors are stored 0-255
    let color_factor = match vertex.scalar_type("red") {
        Some(data_type) if data_type.is_float() => 1.0,
        _ => 1.0 / 255.0,
    };
    let colors = gather_triplet(vertex, &vertices, ["red", "green", "blue"], color_factor);
    let normals = gather_triplet(vertex, &vertices, ["nx", "ny", "nz"], 1.0);

    let mut topology = Topology::Point;
    let mut indices = Vec::new();

    if let Some(face_idx) = body_of("face").filter(|&i| header.elements[i].count > 0) {
        let face = &header.elements[face_idx];
        let list_idx = face
            .property_index("vertex_indices")
            .or_else(|| face.property_index("vertex_index"))
            .ok_or_else(|| {
                PlyError::UnsupportedProperty("face element requires vertex_indices".to_string())
            })?;

        let mut arity = None;
        for row in &bodies[face_idx] {
            let Some(PlyValue::List(items)) = row.get(list_idx) else {
                return Err(PlyError::UnsupportedProperty(
                    "vertex_indices must be a list".to_string(),
                ));
            };
            match arity {
                None if items.len() == 3 || items.len() == 4 => arity = Some(items.len()),
                Some(n) if n == items.len() => {}
                _ => return Err(PlyError::UnsupportedFaceArity(items.len())),
            }
            for item in items {
                indices.push(to_index(*item)?);
            }
        }
        topology = match arity {
            Some(4) => Topology::Quad,
            _ => Topology::Triangle,
        };
    } else if let Some(edge_idx) = body_of("edge").filter(|&i| header.elements[i].count > 0) {
        let edge = &header.elements[edge_idx];
        let (Some(a), Some(b)) = (
            edge.property_index("vertex1"),
            edge.property_index("vertex2"),
        ) else {
            return Err(PlyError::UnsupportedProperty(
                "edge element requires vertex1 and vertex2".to_string(),
            ));
        };
        for row in &bodies[edge_idx] {
            indices.push(to_index(scalar_at(row, a))?);
            indices.push(to_index(scalar_at(row, b))?);
        }
        topology = Topology::Line;
    } else {
        indices.extend(0..positions.len());
    }

    log::debug!(
        "decoded ply with {} vertices, {} indices, {} topology",
        positions.len(),
        indices.len(),
        topology
    );

    Ok(Mesh::new(topology, indices, positions, colors, normals)?)
}

/// Read a PLY mesh or point cloud from any buffered reader.
///
/// Supports `ascii` and `binary_little_endian` bodies. The topology is
/// derived from the declared elements: `face` lists of three or four
/// indices give triangles or quads, `edge` pairs give lines and a lone
/// `vertex` element gives a point cloud.
pub fn read_ply_from<R: BufRead>(mut reader: R) -> Result<Mesh, PlyError> {
    let header = parse_header(&mut reader)?;

    let bodies = match header.format {
        PlyFormat::BinaryLittleEndian => {
            let mut source = BinarySource { reader };
            header
                .elements
                .iter()
                .map(|element| read_element(&mut source, element))
                .collect::<Result<Vec<_>, _>>()?
        }
        PlyFormat::Ascii => {
            let mut text = String::new();
            reader.read_to_string(&mut text)?;
            let mut source = AsciiSource {
                tokens: text.split_ascii_whitespace(),
            };
            header
                .elements
                .iter()
                .map(|element| read_element(&mut source, element))
                .collect::<Result<Vec<_>, _>>()?
        }
    };

    build_mesh(&header, bodies)
}

/// Read a PLY file from disk.
pub fn read_ply(path: impl AsRef<Path>) -> Result<Mesh, PlyError> {
    let file = std::fs::File::open(path)?;
    read_ply_from(std::io::BufReader::new(file))
}
