use crate::metadata::Block;

/// A single time-stamped data point.
pub trait Capture {
    /// The time the capture was taken.
    fn time(&self) -> f64;
}

/// A position observation.
#[derive(Debug, Clone, PartialEq, bincode::Encode, bincode::Decode)]
pub struct PositionCapture {
    time: f64,
    position: [f64; 3],
}

impl PositionCapture {
    /// Create a new position capture.
    pub fn new(time: f64, x: f64, y: f64, z: f64) -> Self {
        Self {
            time,
            position: [x, y, z],
        }
    }

    /// The captured position as `[x, y, z]`.
    pub fn position(&self) -> [f64; 3] {
        self.position
    }
}

impl Capture for PositionCapture {
    fn time(&self) -> f64 {
        self.time
    }
}

/// Order in which Euler angles are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, bincode::Encode, bincode::Decode)]
pub enum RotationOrder {
    /// Rotate about Z, then X, then Y.
    Zxy,
}

/// An orientation observation expressed as Euler angles in degrees.
#[derive(Debug, Clone, PartialEq, bincode::Encode, bincode::Decode)]
pub struct EulerCapture {
    time: f64,
    order: RotationOrder,
    angles: [f64; 3],
}

impl EulerCapture {
    /// Create a capture whose angles are applied in Z, X, Y order.
    ///
    /// The angles are given per axis as `x`, `y`, `z` degrees.
    pub fn new_zxy(time: f64, x: f64, y: f64, z: f64) -> Self {
        Self {
            time,
            order: RotationOrder::Zxy,
            angles: [x, y, z],
        }
    }

    /// The application order of the angles.
    pub fn order(&self) -> RotationOrder {
        self.order
    }

    /// The per-axis angles `[x, y, z]` in degrees.
    pub fn angles(&self) -> [f64; 3] {
        self.angles
    }
}

impl Capture for EulerCapture {
    fn time(&self) -> f64 {
        self.time
    }
}

/// A labelled event with its own metadata.
#[derive(Debug, Clone, PartialEq, bincode::Encode, bincode::Decode)]
pub struct EventCapture {
    time: f64,
    name: String,
    metadata: Block,
}

impl EventCapture {
    /// Create a new event capture.
    pub fn new(time: f64, name: impl Into<String>, metadata: Block) -> Self {
        Self {
            time,
            name: name.into(),
            metadata,
        }
    }

    /// The event label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The metadata attached to the event.
    pub fn metadata(&self) -> &Block {
        &self.metadata
    }
}

impl Capture for EventCapture {
    fn time(&self) -> f64 {
        self.time
    }
}

/// Stable sort of captures by ascending time.
///
/// Captures with equal time keep their relative order.
pub fn sort_by_time<C: Capture>(captures: &mut [C]) {
    captures.sort_by(|a, b| a.time().total_cmp(&b.time()));
}

/// A named sequence of captures of one kind, sorted by time.
#[derive(Debug, Clone, PartialEq, bincode::Encode, bincode::Decode)]
pub struct Collection<C> {
    name: String,
    captures: Vec<C>,
}

impl<C: Capture> Collection<C> {
    /// Create a collection, sorting the captures by time.
    pub fn new(name: impl Into<String>, mut captures: Vec<C>) -> Self {
        sort_by_time(&mut captures);
        Self {
            name: name.into(),
            captures,
        }
    }

    /// The collection name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The captures in time order.
    pub fn captures(&self) -> &[C] {
        &self.captures
    }

    /// Number of captures in the collection.
    #[inline]
    pub fn len(&self) -> usize {
        self.captures.len()
    }

    /// Check if the collection is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.captures.is_empty()
    }
}

/// A capture collection of any supported kind.
#[derive(Debug, Clone, PartialEq, bincode::Encode, bincode::Decode)]
pub enum CaptureCollection {
    /// Position captures.
    Position(Collection<PositionCapture>),
    /// Euler rotation captures.
    Euler(Collection<EulerCapture>),
    /// Event captures.
    Event(Collection<EventCapture>),
}

impl CaptureCollection {
    /// The collection name.
    pub fn name(&self) -> &str {
        match self {
            CaptureCollection::Position(c) => c.name(),
            CaptureCollection::Euler(c) => c.name(),
            CaptureCollection::Event(c) => c.name(),
        }
    }

    /// Number of captures in the collection.
    pub fn len(&self) -> usize {
        match self {
            CaptureCollection::Position(c) => c.len(),
            CaptureCollection::Euler(c) => c.len(),
            CaptureCollection::Event(c) => c.len(),
        }
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Capture times in collection order.
    pub fn times(&self) -> Vec<f64> {
        match self {
            CaptureCollection::Position(c) => c.captures().iter().map(Capture::time).collect(),
            CaptureCollection::Euler(c) => c.captures().iter().map(Capture::time).collect(),
            CaptureCollection::Event(c) => c.captures().iter().map(Capture::time).collect(),
        }
    }
}

impl From<Collection<PositionCapture>> for CaptureCollection {
    fn from(collection: Collection<PositionCapture>) -> Self {
        CaptureCollection::Position(collection)
    }
}

impl From<Collection<EulerCapture>> for CaptureCollection {
    fn from(collection: Collection<EulerCapture>) -> Self {
        CaptureCollection::Euler(collection)
    }
}

impl From<Collection<EventCapture>> for CaptureCollection {
    fn from(collection: Collection<EventCapture>) -> Self {
        CaptureCollection::Event(collection)
    }
}
