//! Tree configuration.

use crate::error::QuadTreeError;
use serde::{Deserialize, Serialize};

/// Settings shared by every node of a tree.
///
/// A tree wraps its configuration in an `Arc` and hands the same reference
/// to every child it creates, so the settings never diverge between levels.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TreeConfig {
    /// Points a leaf holds before it splits.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// Collapse four empty child leaves back into their parent after a removal.
    #[serde(default)]
    pub remove_empty_nodes: bool,
    /// Deepest level that may still split. Leaves at this depth grow past
    /// `capacity` instead, which bounds recursion on clustered points.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl TreeConfig {
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_remove_empty_nodes(mut self, remove_empty_nodes: bool) -> Self {
        self.remove_empty_nodes = remove_empty_nodes;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn validate(&self) -> Result<(), QuadTreeError> {
        if self.capacity == 0 {
            return Err(QuadTreeError::InvalidCapacity(self.capacity));
        }
        Ok(())
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            remove_empty_nodes: false,
            max_depth: default_max_depth(),
        }
    }
}

fn default_capacity() -> usize {
    4
}
fn default_max_depth() -> usize {
    24
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TreeConfig::default();
        assert_eq!(config.capacity, 4);
        assert!(!config.remove_empty_nodes);
        assert_eq!(config.max_depth, 24);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = TreeConfig::default().with_capacity(0);
        assert_eq!(config.validate(), Err(QuadTreeError::InvalidCapacity(0)));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: TreeConfig = toml::from_str("remove_empty_nodes = true").unwrap();
        assert_eq!(config.capacity, 4);
        assert!(config.remove_empty_nodes);
        assert_eq!(config.max_depth, 24);

        let config: TreeConfig = toml::from_str("capacity = 10\nmax_depth = 3").unwrap();
        assert_eq!(config.capacity, 10);
        assert!(!config.remove_empty_nodes);
        assert_eq!(config.max_depth, 3);
    }
}
