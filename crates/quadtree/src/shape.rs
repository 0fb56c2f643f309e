//! Structural fingerprint of a tree.

use serde::Serialize;
use std::fmt;

/// Shape of a (sub)tree: point counts at the leaves, nesting at internal nodes.
///
/// Serializes as a bare integer for a leaf and as a map with the keys
/// `ne`, `nw`, `se`, `sw` for an internal node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TreeShape {
    Leaf(usize),
    Internal {
        ne: Box<TreeShape>,
        nw: Box<TreeShape>,
        se: Box<TreeShape>,
        sw: Box<TreeShape>,
    },
}

impl TreeShape {
    pub fn internal(ne: TreeShape, nw: TreeShape, se: TreeShape, sw: TreeShape) -> Self {
        TreeShape::Internal {
            ne: Box::new(ne),
            nw: Box::new(nw),
            se: Box::new(se),
            sw: Box::new(sw),
        }
    }

    /// Sum of the leaf counts.
    pub fn total(&self) -> usize {
        match self {
            TreeShape::Leaf(n) => *n,
            TreeShape::Internal { ne, nw, se, sw } => ne.total() + nw.total() + se.total() + sw.total(),
        }
    }
}

impl fmt::Display for TreeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeShape::Leaf(n) => write!(f, "{n}"),
            TreeShape::Internal { ne, nw, se, sw } => {
                write!(f, "{{ne: {ne}, nw: {nw}, se: {se}, sw: {sw}}}")
            }
        }
    }
}
