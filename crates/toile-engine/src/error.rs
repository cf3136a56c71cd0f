use std::fmt;

/// A refused scene mutation.
///
/// Everything here leaves the shape store unchanged. Degenerate geometry and
/// out-of-range indices are deliberately *not* errors; those are silent
/// no-ops so that animation and hit testing stay numerically stable.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneError {
    /// The store already holds the maximum number of live shapes.
    CapacityExceeded { max: usize },
    /// Polygon side count outside the supported range.
    InvalidSideCount { sides: u32 },
    /// A shape-kind name the engine does not know.
    UnknownKind { name: String },
    /// A style name other than `filled` / `empty`.
    UnknownStyle { name: String },
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::CapacityExceeded { max } => {
                write!(f, "scene is full: maximum of {max} shapes reached")
            }
            SceneError::InvalidSideCount { sides } => {
                write!(f, "polygon side count {sides} outside supported range 3..=12")
            }
            SceneError::UnknownKind { name } => write!(f, "unknown shape kind `{name}`"),
            SceneError::UnknownStyle { name } => write!(f, "unknown style `{name}`"),
        }
    }
}

impl std::error::Error for SceneError {}
