//! Canvas geometry: points and the distance queries used by hit testing.

use crate::{GpError, GpResult};

/// Coordinate type used for canvas positions.
pub type Real = f64;

/// A point on the 2D canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: Real,
    pub y: Real,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: Real, y: Real) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: Real, dy: Real) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn distance(self, other: Point) -> Real {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Shortest distance from `self` to the segment `a..b`.
    ///
    /// Returns `None` for a zero-length segment: a pipeline whose endpoints
    /// coincide has no body to hit.
    pub fn distance_to_segment(self, a: Point, b: Point) -> Option<Real> {
        let (dx, dy) = (b.x - a.x, b.y - a.y);
        let len_sq = dx * dx + dy * dy;
        if len_sq == 0.0 {
            return None;
        }

        let t = ((self.x - a.x) * dx + (self.y - a.y) * dy) / len_sq;
        let closest = if t < 0.0 {
            a
        } else if t > 1.0 {
            b
        } else {
            a.offset(t * dx, t * dy)
        };
        Some(self.distance(closest))
    }

    pub fn ensure_finite(self, what: &'static str) -> GpResult<Self> {
        for value in [self.x, self.y] {
            if !value.is_finite() {
                return Err(GpError::NonFinite { what, value });
            }
        }
        Ok(self)
    }
}

impl From<(Real, Real)> for Point {
    fn from((x, y): (Real, Real)) -> Self {
        Self::new(x, y)
    }
}
