use std::fmt;

/// Errors reported by [`Pathfinder`](crate::Pathfinder) for malformed
/// requests. An unreachable target is not an error; it yields an empty path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError<C> {
    /// A request's start or end lies outside the navigation grid.
    OutOfBounds {
        /// Position of the offending request in the batch.
        index: usize,
        coord: C,
    },
}

impl<C: fmt::Display> fmt::Display for PathError<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { index, coord } => {
                write!(f, "path request {index}: coordinate {coord} is outside the navigation grid")
            }
        }
    }
}

impl<C: fmt::Debug + fmt::Display> std::error::Error for PathError<C> {}
