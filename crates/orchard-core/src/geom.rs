//! Geometry primitives: [`Point`] and the canonical bounding box [`Rect`].
//!
//! A [`Rect`] is the smallest axis-aligned rectangle that holds every
//! monotone lattice path between two points. Unlike a half-open range, both
//! of its corners are inclusive.

use std::fmt;
use std::ops::{Add, Sub};

use crate::error::GeomError;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A board position. `x` is the column (grows east), `y` is the row (grows
/// south).
///
/// Points order column-major (`x`, then `y`), which is the order a board
/// scan visits them in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Per-axis sign of the step from `self` toward `to`.
    #[inline]
    pub fn heading_to(self, to: Point) -> Point {
        Point::new((to.x - self.x).signum(), (to.y - self.y).signum())
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.x.cmp(&other.x).then(self.y.cmp(&other.y))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

/// How the two source points of a [`Rect`] relate to each other.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heading {
    /// Same row, different columns.
    Horizontal,
    /// Same column, different rows.
    Vertical,
    /// Both coordinates change with the same sign.
    Diagonal,
    /// Both coordinates change with opposite signs. The corners of the box
    /// are synthetic and never path endpoints.
    AntiDiagonal,
}

/// Canonical bounding box of two distinct points.
///
/// `left.x <= right.x` and `left.y <= right.y` always hold. Both corners are
/// part of the box.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub left: Point,
    pub right: Point,
    pub heading: Heading,
}

impl Rect {
    /// Canonical box of every monotone path between `a` and `b`.
    ///
    /// Coincident points do not describe a path and are rejected with
    /// [`GeomError::Degenerate`].
    pub fn spanning(a: Point, b: Point) -> Result<Self, GeomError> {
        let step = a.heading_to(b);
        let (left, right, heading) = match (step.x, step.y) {
            (0, 0) => return Err(GeomError::Degenerate(a)),
            (0, _) => {
                let (l, r) = if a.y < b.y { (a, b) } else { (b, a) };
                (l, r, Heading::Vertical)
            }
            (_, 0) => {
                let (l, r) = if a.x < b.x { (a, b) } else { (b, a) };
                (l, r, Heading::Horizontal)
            }
            (sx, sy) if sx == sy => {
                let (l, r) = if a.x < b.x { (a, b) } else { (b, a) };
                (l, r, Heading::Diagonal)
            }
            _ => {
                // Exchange the columns so that the corners become the
                // top-left and bottom-right of the rectangle.
                let ca = Point::new(b.x, a.y);
                let cb = Point::new(a.x, b.y);
                let (l, r) = if ca.x < cb.x { (ca, cb) } else { (cb, ca) };
                (l, r, Heading::AntiDiagonal)
            }
        };
        Ok(Self {
            left,
            right,
            heading,
        })
    }

    /// Smallest row covered by the box.
    #[inline]
    pub fn top(self) -> i32 {
        self.left.y.min(self.right.y)
    }

    /// Largest row covered by the box.
    #[inline]
    pub fn bottom(self) -> i32 {
        self.left.y.max(self.right.y)
    }

    /// Whether `p` lies inside the box, boundaries included.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.left.x && p.x <= self.right.x && p.y >= self.top() && p.y <= self.bottom()
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..={}]", self.left, self.right)
    }
}
