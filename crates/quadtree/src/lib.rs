//! Region quadtree spatial index over 2D points.
//!
//! This crate contains:
//! - Geometry primitives (`Point`, `Bounds`, `Quadrant`)
//! - Tree configuration and errors
//! - The recursive `QuadTree` with insert, remove, range query and
//!   structural introspection

mod config;
mod error;
mod geometry;
mod shape;
mod tree;

pub use config::TreeConfig;
pub use error::QuadTreeError;
pub use geometry::{Bounds, Point, Quadrant};
pub use shape::TreeShape;
pub use tree::{QuadTree, Quadrants};
