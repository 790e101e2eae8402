use crate::capture::CaptureCollection;
use crate::metadata::Block;

/// A named byte payload embedded in a recording.
#[derive(Debug, Clone, PartialEq, bincode::Encode, bincode::Decode)]
pub struct Binary {
    name: String,
    data: Vec<u8>,
    metadata: Block,
}

impl Binary {
    /// Create a new binary asset.
    pub fn new(name: impl Into<String>, data: Vec<u8>, metadata: Block) -> Self {
        Self {
            name: name.into(),
            data,
            metadata,
        }
    }

    /// The asset name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw payload.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The asset metadata.
    pub fn metadata(&self) -> &Block {
        &self.metadata
    }
}

/// A reference to a payload stored outside the recording.
///
/// Recordings written by this crate always carry an empty reference list.
#[derive(Debug, Clone, PartialEq, bincode::Encode, bincode::Decode)]
pub struct BinaryReference {
    name: String,
    uri: String,
    size: u64,
    metadata: Block,
}

/// A node of the recording tree.
///
/// A recording owns its capture collections, its nested subject recordings
/// and its binary assets. It is built once and not mutated afterwards.
#[derive(Debug, Clone, PartialEq, bincode::Encode, bincode::Decode)]
pub struct Recording {
    id: String,
    name: String,
    collections: Vec<CaptureCollection>,
    subjects: Vec<Recording>,
    metadata: Block,
    binaries: Vec<Binary>,
    references: Vec<BinaryReference>,
}

impl Recording {
    /// Create an empty recording with an identifier and a display name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            collections: Vec::new(),
            subjects: Vec::new(),
            metadata: Block::new(),
            binaries: Vec::new(),
            references: Vec::new(),
        }
    }

    /// Set the capture collections.
    pub fn with_collections(mut self, collections: Vec<CaptureCollection>) -> Self {
        self.collections = collections;
        self
    }

    /// Set the nested subject recordings.
    pub fn with_subjects(mut self, subjects: Vec<Recording>) -> Self {
        self.subjects = subjects;
        self
    }

    /// Set the metadata block.
    pub fn with_metadata(mut self, metadata: Block) -> Self {
        self.metadata = metadata;
        self
    }

    /// Set the embedded binary assets.
    pub fn with_binaries(mut self, binaries: Vec<Binary>) -> Self {
        self.binaries = binaries;
        self
    }

    /// The recording identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The capture collections.
    pub fn collections(&self) -> &[CaptureCollection] {
        &self.collections
    }

    /// Look up a capture collection by name.
    pub fn collection(&self, name: &str) -> Option<&CaptureCollection> {
        self.collections.iter().find(|c| c.name() == name)
    }

    /// The nested subject recordings.
    pub fn subjects(&self) -> &[Recording] {
        &self.subjects
    }

    /// Look up a nested subject by identifier.
    pub fn subject(&self, id: &str) -> Option<&Recording> {
        self.subjects.iter().find(|s| s.id() == id)
    }

    /// The metadata block.
    pub fn metadata(&self) -> &Block {
        &self.metadata
    }

    /// The embedded binary assets.
    pub fn binaries(&self) -> &[Binary] {
        &self.binaries
    }

    /// The external binary references.
    pub fn references(&self) -> &[BinaryReference] {
        &self.references
    }

    /// Total number of captures in this recording and all its subjects.
    pub fn capture_count(&self) -> usize {
        self.collections.iter().map(CaptureCollection::len).sum::<usize>()
            + self
                .subjects
                .iter()
                .map(Recording::capture_count)
                .sum::<usize>()
    }
}
