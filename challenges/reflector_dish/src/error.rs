use thiserror::Error;

use crate::Position;

/// Construction failures for dense and sparse dishes.
///
/// A dish is either valid or it fails to build; nothing after construction
/// returns one of these.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DishError {
    /// A row whose length differs from the first row.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A roller or obstacle outside the `height x width` surface.
    #[error("{position} is outside a {height}x{width} dish")]
    OutOfBounds {
        position: Position,
        height: usize,
        width: usize,
    },

    /// A cell symbol other than `.`, `O` or `#`.
    #[error("unknown symbol {symbol:?} at {position}")]
    UnknownSymbol { symbol: char, position: Position },

    /// A roller placed on an obstacle.
    #[error("roller at {0} overlaps an obstacle")]
    RollerOnObstacle(Position),

    /// Two rollers placed on the same cell.
    #[error("more than one roller at {0}")]
    DuplicateRoller(Position),
}

impl DishError {
    /// The coarse kind of failure: shape, symbol or overlap.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DishError::RaggedRow { .. } | DishError::OutOfBounds { .. } => ErrorKind::Shape,
            DishError::UnknownSymbol { .. } => ErrorKind::Symbol,
            DishError::RollerOnObstacle(_) | DishError::DuplicateRoller(_) => ErrorKind::Overlap,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Shape,
    Symbol,
    Overlap,
}
