//! Points and axis-aligned bounds.
//!
//! Bounds are closed on every side: a point lying exactly on an edge is
//! contained, and two bounds that only touch along an edge intersect.
//! The y axis grows downward, so "north" is the side with the smaller y.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A 2D coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<DVec2> for Point {
    #[inline]
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for DVec2 {
    #[inline]
    fn from(p: Point) -> Self {
        DVec2::new(p.x, p.y)
    }
}

/// One of the four quadrants of a subdivided region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    Ne,
    Nw,
    Se,
    Sw,
}

impl Quadrant {
    /// Traversal order used by every recursive operation.
    pub const ALL: [Quadrant; 4] = [Quadrant::Ne, Quadrant::Nw, Quadrant::Se, Quadrant::Sw];
}

/// Axis-aligned rectangle, stored by its edges.
///
/// Child regions share their edges with the parent exactly, so every point
/// the parent contains is contained by at least one quadrant. Serialized as
/// `x`, `y`, `w`, `h`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
#[serde(from = "Extent", into = "Extent")]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Create bounds from the top-left corner and the size.
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self::from_edges(x, y, x + w, y + h)
    }

    pub const fn from_edges(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    /// Create bounds from two opposite corners, in any order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self::from_edges(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(
            self.min_x + self.width() / 2.0,
            self.min_y + self.height() / 2.0,
        )
    }

    /// Check if a point lies inside or on the edge of the bounds.
    #[inline]
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }

    /// Check if two bounds overlap or touch.
    #[inline]
    pub fn intersects(&self, other: &Bounds) -> bool {
        !(other.min_x > self.max_x
            || other.max_x < self.min_x
            || other.min_y > self.max_y
            || other.max_y < self.min_y)
    }

    /// The sub-region for `quadrant`, split at the center.
    pub fn quadrant(&self, quadrant: Quadrant) -> Bounds {
        let mid = self.center();
        match quadrant {
            Quadrant::Ne => Bounds::from_edges(mid.x, self.min_y, self.max_x, mid.y),
            Quadrant::Nw => Bounds::from_edges(self.min_x, self.min_y, mid.x, mid.y),
            Quadrant::Se => Bounds::from_edges(mid.x, mid.y, self.max_x, self.max_y),
            Quadrant::Sw => Bounds::from_edges(self.min_x, mid.y, mid.x, self.max_y),
        }
    }

    pub(crate) fn is_valid(&self) -> bool {
        [self.min_x, self.min_y, self.max_x, self.max_y].iter().all(|v| v.is_finite())
            && self.max_x >= self.min_x
            && self.max_y >= self.min_y
    }
}

/// On-disk form of [`Bounds`].
#[derive(Deserialize, Serialize)]
struct Extent {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
}

impl From<Extent> for Bounds {
    fn from(e: Extent) -> Self {
        Bounds::new(e.x, e.y, e.w, e.h)
    }
}

impl From<Bounds> for Extent {
    fn from(b: Bounds) -> Self {
        Extent { x: b.min_x, y: b.min_y, w: b.width(), h: b.height() }
    }
}
