use thiserror::Error;

use super::WallId;

/// Why a Geometry Service edit was rejected. The input room is never modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("room is not closed")]
    NotClosed,
    #[error("room has no walls")]
    Empty,
    #[error("vertex index {index} out of range for {len} vertices")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("wall {0} not found")]
    WallNotFound(WallId),
    #[error("a room needs at least 3 walls, it has {len}")]
    MinimumPolygon { len: usize },
    #[error("target coordinates must be finite")]
    NonFinite,
    #[error("wall {at} does not end where wall {next} starts")]
    NotChained { at: usize, next: usize },
}
