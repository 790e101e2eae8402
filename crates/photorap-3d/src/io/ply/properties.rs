use super::PlyError;

/// Storage format of the PLY body.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PlyFormat {
    /// Whitespace separated text.
    Ascii,
    /// Packed little-endian binary.
    BinaryLittleEndian,
}

/// Scalar type of a PLY property.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PlyDataType {
    /// 32-bit float
    Float32,
    /// 64-bit float
    Float64,
    /// signed 8-bit integer
    Int8,
    /// unsigned 8-bit integer
    UInt8,
    /// signed 16-bit integer
    Int16,
    /// unsigned 16-bit integer
    UInt16,
    /// signed 32-bit integer
    Int32,
    /// unsigned 32-bit integer
    UInt32,
}

impl PlyDataType {
    /// Size in bytes of one binary value.
    pub fn size(&self) -> usize {
        match self {
            PlyDataType::Float32 | PlyDataType::Int32 | PlyDataType::UInt32 => 4,
            PlyDataType::Float64 => 8,
            PlyDataType::Int16 | PlyDataType::UInt16 => 2,
            PlyDataType::Int8 | PlyDataType::UInt8 => 1,
        }
    }

    /// Whether the type is a floating point type.
    pub fn is_float(&self) -> bool {
        matches!(self, PlyDataType::Float32 | PlyDataType::Float64)
    }

    /// Parse a header type name such as `float` or `uchar`.
    pub fn parse(type_str: &str) -> Result<Self, PlyError> {
        match type_str {
            "float" | "float32" => Ok(PlyDataType::Float32),
            "double" | "float64" => Ok(PlyDataType::Float64),
            "char" | "int8" => Ok(PlyDataType::Int8),
            "uchar" | "uint8" => Ok(PlyDataType::UInt8),
            "short" | "int16" => Ok(PlyDataType::Int16),
            "ushort" | "uint16" => Ok(PlyDataType::UInt16),
            "int" | "int32" => Ok(PlyDataType::Int32),
            "uint" | "uint32" => Ok(PlyDataType::UInt32),
            _ => Err(PlyError::UnsupportedProperty(type_str.to_string())),
        }
    }

    /// Decode one little-endian value from the start of `bytes`.
    ///
    /// PRECONDITION: `bytes.len() >= self.size()`.
    pub(crate) fn decode_le(&self, bytes: &[u8]) -> f64 {
        let mut buf = [0u8; 8];
        buf[..self.size()].copy_from_slice(&bytes[..self.size()]);
        match self {
            PlyDataType::Float32 => f32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]) as f64,
            PlyDataType::Float64 => f64::from_le_bytes(buf),
            PlyDataType::Int8 => buf[0] as i8 as f64,
            PlyDataType::UInt8 => buf[0] as f64,
            PlyDataType::Int16 => i16::from_le_bytes([buf[0], buf[1]]) as f64,
            PlyDataType::UInt16 => u16::from_le_bytes([buf[0], buf[1]]) as f64,
            PlyDataType::Int32 => i32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]) as f64,
            PlyDataType::UInt32 => u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]) as f64,
        }
    }
}

/// A property declared inside an element.
#[derive(Debug, PartialEq, Clone)]
pub enum PlyPropertyDefinition {
    /// A single scalar value.
    Scalar {
        /// Property name.
        name: String,
        /// Value type.
        data_type: PlyDataType,
    },
    /// A length-prefixed list of values.
    List {
        /// Property name.
        name: String,
        /// Type of the length prefix.
        count_type: PlyDataType,
        /// Type of each item.
        item_type: PlyDataType,
    },
}

impl PlyPropertyDefinition {
    /// Property name.
    pub fn name(&self) -> &str {
        match self {
            PlyPropertyDefinition::Scalar { name, .. } | PlyPropertyDefinition::List { name, .. } => {
                name
            }
        }
    }
}

/// An element declared in the header, e.g. `vertex` or `face`.
#[derive(Debug, PartialEq, Clone)]
pub struct PlyElementDefinition {
    /// Element name.
    pub name: String,
    /// Number of element instances in the body.
    pub count: usize,
    /// Declared properties in body order.
    pub properties: Vec<PlyPropertyDefinition>,
}

impl PlyElementDefinition {
    /// Position of a property in the body order.
    pub fn property_index(&self, name: &str) -> Option<usize> {
        self.properties.iter().position(|p| p.name() == name)
    }

    /// Scalar type of a property, if it exists and is a scalar.
    pub fn scalar_type(&self, name: &str) -> Option<PlyDataType> {
        self.properties.iter().find_map(|p| match p {
            PlyPropertyDefinition::Scalar { name: n, data_type } if n == name => Some(*data_type),
            _ => None,
        })
    }
}

/// One decoded element instance.
#[derive(Debug, Clone, PartialEq)]
pub enum PlyValue {
    /// A scalar value widened to f64.
    Scalar(f64),
    /// A list of values widened to f64.
    List(Vec<f64>),
}
