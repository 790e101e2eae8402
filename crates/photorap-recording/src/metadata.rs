use std::collections::BTreeMap;

/// A typed scalar value stored in a metadata [`Block`].
#[derive(Debug, Clone, PartialEq, bincode::Encode, bincode::Decode)]
pub enum Property {
    /// UTF-8 string value.
    String(String),
    /// Signed integer value.
    Int(i64),
    /// 32-bit float value.
    Float32(f32),
    /// Boolean value.
    Bool(bool),
}

impl Property {
    /// Returns the integer value, if this is an integer property.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Property::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the float value, if this is a float property.
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Property::Float32(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the string value, if this is a string property.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Property::String(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the boolean value, if this is a boolean property.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Property::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<&str> for Property {
    fn from(value: &str) -> Self {
        Property::String(value.to_string())
    }
}

impl From<String> for Property {
    fn from(value: String) -> Self {
        Property::String(value)
    }
}

impl From<i64> for Property {
    fn from(value: i64) -> Self {
        Property::Int(value)
    }
}

impl From<usize> for Property {
    fn from(value: usize) -> Self {
        Property::Int(value as i64)
    }
}

impl From<f32> for Property {
    fn from(value: f32) -> Self {
        Property::Float32(value)
    }
}

impl From<bool> for Property {
    fn from(value: bool) -> Self {
        Property::Bool(value)
    }
}

/// A named set of typed properties.
///
/// Names are kept sorted so two blocks with the same content always encode
/// to the same bytes.
#[derive(Debug, Clone, Default, PartialEq, bincode::Encode, bincode::Decode)]
pub struct Block {
    properties: BTreeMap<String, Property>,
}

impl Block {
    /// Create an empty metadata block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property, replacing any previous value under the same name.
    pub fn with(mut self, name: impl Into<String>, property: impl Into<Property>) -> Self {
        self.properties.insert(name.into(), property.into());
        self
    }

    /// Get a property by name.
    pub fn get(&self, name: &str) -> Option<&Property> {
        self.properties.get(name)
    }

    /// Number of properties in the block.
    #[inline]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Check if the block has no properties.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate over the properties in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Property)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }
}
