use core::fmt;

/// Errors returned by fallible pixel operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A pixel store must hold at least one pixel
    ZeroPixels,
    /// More pixels or segments requested than the fixed capacity allows
    CapacityExceeded { requested: usize, capacity: usize },
    /// Range assignment between views of different sizes
    SizeMismatch { expected: i32, actual: i32 },
    /// A partition needs at least one segment
    NoSegments,
    /// Segment at `index` has a size of zero or below
    EmptySegment { index: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroPixels => write!(f, "pixel count must be non-zero"),
            Self::CapacityExceeded {
                requested,
                capacity,
            } => write!(f, "requested {requested} entries, capacity is {capacity}"),
            Self::SizeMismatch { expected, actual } => {
                write!(f, "range size mismatch: expected {expected}, got {actual}")
            }
            Self::NoSegments => write!(f, "partition has no segments"),
            Self::EmptySegment { index } => write!(f, "segment {index} is empty"),
        }
    }
}

impl core::error::Error for Error {}
