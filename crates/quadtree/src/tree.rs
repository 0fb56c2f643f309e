//! Region quadtree over points.
//!
//! Every node is itself a [`QuadTree`]: either a leaf holding up to
//! `capacity` points, or an internal node owning four child trees that split
//! its container into equal quadrants.
//!
//! When a leaf splits, each of its points is offered to all four children and
//! kept by every child whose bounds contain it. A point lying exactly on a
//! split line at that moment is therefore stored once per touching quadrant.
//! Points inserted into an already internal node go to the first containing
//! child in `ne`, `nw`, `se`, `sw` order.

use crate::config::TreeConfig;
use crate::error::QuadTreeError;
use crate::geometry::{Bounds, Point, Quadrant};
use crate::shape::TreeShape;
use std::borrow::Borrow;
use std::sync::Arc;
use tracing::{debug, trace};

#[derive(Debug, Clone, PartialEq)]
enum Node {
    Leaf(Vec<Point>),
    Internal(Box<Quadrants>),
}

/// The four children of an internal node.
#[derive(Debug, Clone, PartialEq)]
pub struct Quadrants {
    pub ne: QuadTree,
    pub nw: QuadTree,
    pub se: QuadTree,
    pub sw: QuadTree,
}

impl Quadrants {
    fn new(parent: &Bounds, config: &Arc<TreeConfig>, depth: usize) -> Self {
        let child = |q| QuadTree::node(parent.quadrant(q), Arc::clone(config), depth);
        Self {
            ne: child(Quadrant::Ne),
            nw: child(Quadrant::Nw),
            se: child(Quadrant::Se),
            sw: child(Quadrant::Sw),
        }
    }

    pub fn get(&self, quadrant: Quadrant) -> &QuadTree {
        match quadrant {
            Quadrant::Ne => &self.ne,
            Quadrant::Nw => &self.nw,
            Quadrant::Se => &self.se,
            Quadrant::Sw => &self.sw,
        }
    }

    /// Children in traversal order.
    pub fn iter(&self) -> impl Iterator<Item = &QuadTree> {
        Quadrant::ALL.into_iter().map(|q| self.get(q))
    }

    fn iter_mut(&mut self) -> impl Iterator<Item = &mut QuadTree> {
        [&mut self.ne, &mut self.nw, &mut self.se, &mut self.sw].into_iter()
    }

    fn all_empty_leaves(&self) -> bool {
        self.iter().all(|child| child.points_if_leaf().is_some_and(|p| p.is_empty()))
    }
}

/// A quadtree node. The value returned by the constructors is the root.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadTree {
    container: Bounds,
    config: Arc<TreeConfig>,
    depth: usize,
    node: Node,
}

impl QuadTree {
    /// Create an empty tree with the default configuration.
    ///
    /// The container is taken as is; use [`QuadTree::with_config`] to have
    /// it checked. A container with a negative or NaN extent contains no
    /// point, so such a tree stays empty.
    pub fn new(container: Bounds) -> Self {
        Self::node(container, Arc::new(TreeConfig::default()), 0)
    }

    /// Create an empty tree, rejecting a zero capacity or a container with
    /// a negative or non-finite extent.
    pub fn with_config(container: Bounds, config: TreeConfig) -> Result<Self, QuadTreeError> {
        config.validate()?;
        if !container.is_valid() {
            return Err(QuadTreeError::InvalidContainer { w: container.width(), h: container.height() });
        }
        Ok(Self::node(container, Arc::new(config), 0))
    }

    /// Create a tree and insert `points` in order. Points outside the
    /// container are dropped.
    pub fn with_points<I>(container: Bounds, config: TreeConfig, points: I) -> Result<Self, QuadTreeError>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut tree = Self::with_config(container, config)?;
        tree.insert_many(points);
        Ok(tree)
    }

    fn node(container: Bounds, config: Arc<TreeConfig>, depth: usize) -> Self {
        Self {
            container,
            config,
            depth,
            node: Node::Leaf(Vec::new()),
        }
    }

    #[inline]
    pub fn container(&self) -> &Bounds {
        &self.container
    }

    #[inline]
    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Level of this node; the root is 0.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self.node, Node::Leaf(_))
    }

    /// Points held directly by this node. Always empty for an internal node.
    pub fn points(&self) -> &[Point] {
        self.points_if_leaf().unwrap_or(&[])
    }

    fn points_if_leaf(&self) -> Option<&[Point]> {
        match &self.node {
            Node::Leaf(points) => Some(points.as_slice()),
            Node::Internal(_) => None,
        }
    }

    pub fn children(&self) -> Option<&Quadrants> {
        match &self.node {
            Node::Leaf(_) => None,
            Node::Internal(children) => Some(&**children),
        }
    }

    pub fn child(&self, quadrant: Quadrant) -> Option<&QuadTree> {
        self.children().map(|c| c.get(quadrant))
    }

    /// Insert a point. Returns `false` when the point lies outside the
    /// container and was dropped.
    pub fn insert(&mut self, point: Point) -> bool {
        if !self.container.contains(&point) {
            trace!(x = point.x, y = point.y, depth = self.depth, "Point outside container dropped");
            return false;
        }

        if self.is_leaf() && !self.has_room() {
            self.split();
        }

        match &mut self.node {
            Node::Leaf(points) => {
                points.push(point);
                true
            }
            Node::Internal(children) => children.iter_mut().any(|child| child.insert(point)),
        }
    }

    /// Insert every point in order.
    pub fn insert_many<I>(&mut self, points: I)
    where
        I: IntoIterator<Item = Point>,
    {
        for point in points {
            self.insert(point);
        }
    }

    fn has_room(&self) -> bool {
        self.points().len() < self.config.capacity || self.depth >= self.config.max_depth
    }

    fn split(&mut self) {
        let Node::Leaf(points) = &mut self.node else {
            return;
        };
        let points = std::mem::take(points);
        let mut children = Quadrants::new(&self.container, &self.config, self.depth + 1);

        for child in children.iter_mut() {
            for point in &points {
                child.insert(*point);
            }
        }

        trace!(depth = self.depth, points = points.len(), "Split node");
        self.node = Node::Internal(Box::new(children));
    }

    /// Remove one stored copy of `point` from every leaf whose region
    /// contains it. Returns whether anything was removed. Removing an absent
    /// point is a no-op.
    pub fn remove(&mut self, point: &Point) -> bool {
        if !self.container.contains(point) {
            return false;
        }

        match &mut self.node {
            Node::Leaf(points) => match points.iter().position(|p| p == point) {
                Some(idx) => {
                    points.remove(idx);
                    true
                }
                None => false,
            },
            Node::Internal(children) => {
                let mut removed = false;
                for child in children.iter_mut() {
                    removed |= child.remove(point);
                }
                if self.config.remove_empty_nodes && children.all_empty_leaves() {
                    trace!(depth = self.depth, "Collapsing empty children");
                    self.node = Node::Leaf(Vec::new());
                }
                removed
            }
        }
    }

    /// Remove every point in order.
    pub fn remove_many<I>(&mut self, points: I)
    where
        I: IntoIterator,
        I::Item: Borrow<Point>,
    {
        for point in points {
            self.remove(point.borrow());
        }
    }

    /// Find all stored points inside `range`.
    pub fn query(&self, range: &Bounds) -> Vec<Point> {
        let mut results = Vec::new();
        self.query_into(range, &mut results);
        results
    }

    /// Like [`QuadTree::query`], appending into a caller-owned buffer.
    pub fn query_into(&self, range: &Bounds, results: &mut Vec<Point>) {
        if !self.container.intersects(range) {
            return;
        }
        match &self.node {
            Node::Leaf(points) => results.extend(points.iter().filter(|p| range.contains(p))),
            Node::Internal(children) => {
                for child in children.iter() {
                    child.query_into(range, results);
                }
            }
        }
    }

    /// Every point stored below this node, in traversal order.
    pub fn all_points(&self) -> Vec<Point> {
        let mut results = Vec::new();
        self.collect_points(&mut results);
        results
    }

    fn collect_points(&self, results: &mut Vec<Point>) {
        match &self.node {
            Node::Leaf(points) => results.extend_from_slice(points),
            Node::Internal(children) => {
                for child in children.iter() {
                    child.collect_points(results);
                }
            }
        }
    }

    /// Drop all points and children, keeping container and configuration.
    pub fn clear(&mut self) {
        debug!(depth = self.depth, stored = self.len(), "Clearing tree");
        self.node = Node::Leaf(Vec::new());
    }

    /// Structural fingerprint: point counts per leaf.
    pub fn tree(&self) -> TreeShape {
        match &self.node {
            Node::Leaf(points) => TreeShape::Leaf(points.len()),
            Node::Internal(c) => TreeShape::internal(c.ne.tree(), c.nw.tree(), c.se.tree(), c.sw.tree()),
        }
    }

    /// Number of stored entries, counting each split-line copy.
    pub fn len(&self) -> usize {
        match &self.node {
            Node::Leaf(points) => points.len(),
            Node::Internal(children) => children.iter().map(QuadTree::len).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match &self.node {
            Node::Leaf(points) => points.is_empty(),
            Node::Internal(children) => children.iter().all(QuadTree::is_empty),
        }
    }

    /// Levels below this node; 0 for a leaf.
    pub fn height(&self) -> usize {
        match &self.node {
            Node::Leaf(_) => 0,
            Node::Internal(children) => 1 + children.iter().map(QuadTree::height).max().unwrap_or(0),
        }
    }

    /// Number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        match &self.node {
            Node::Leaf(_) => 1,
            Node::Internal(children) => 1 + children.iter().map(QuadTree::node_count).sum::<usize>(),
        }
    }
}

impl Extend<Point> for QuadTree {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        self.insert_many(iter);
    }
}
