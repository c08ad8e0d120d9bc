//! Layout error types.

use core::fmt;

/// Error raised before any page is built when a layout run cannot start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// Grid shape is unusable: both dimensions must be at least 1.
    InvalidGrid {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGrid { rows, cols } => write!(
                f,
                "invalid grid shape {}x{}: rows and cols must both be >= 1",
                rows, cols
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LayoutError {}
