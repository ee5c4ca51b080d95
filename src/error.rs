//! Error types for cloth construction.

use core::fmt;

/// Configuration errors detected before the first tick.
///
/// Once a [`Simulation`](crate::Simulation) exists, ticking it cannot fail.
#[derive(Debug, Clone, PartialEq)]
pub enum ClothError {
    /// Grid must have at least 2 columns and 2 rows.
    InvalidGridDimensions { cols: usize, rows: usize },
    /// Rest spacing must be positive and finite.
    InvalidSpacing,
    /// Viewport width and height must be non-zero.
    InvalidViewport { width: u32, height: u32 },
}

impl fmt::Display for ClothError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClothError::InvalidGridDimensions { cols, rows } => {
                write!(f, "grid must be at least 2x2 (got {}x{})", cols, rows)
            }
            ClothError::InvalidSpacing => write!(f, "rest spacing must be positive and finite"),
            ClothError::InvalidViewport { width, height } => {
                write!(f, "viewport must be non-empty (got {}x{})", width, height)
            }
        }
    }
}

impl core::error::Error for ClothError {}
