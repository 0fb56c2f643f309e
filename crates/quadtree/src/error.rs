//! Quadtree error types.

use thiserror::Error;

/// Errors raised when a tree is built from invalid settings.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum QuadTreeError {
    #[error("Invalid capacity: {0} (must be at least 1)")]
    InvalidCapacity(usize),

    #[error("Invalid container extent: {w}x{h}")]
    InvalidContainer { w: f64, h: f64 },
}
