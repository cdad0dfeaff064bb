//! Circle-circle intersection
//!
//! For two circles with centers `c1`, `c2` and radii `r1`, `r2`, let `d = |c2 - c1|`.
//! The radical line (through both intersection points) is perpendicular to the
//! center line and crosses it at signed distance
//! ```text
//! a = (r1² - r2² + d²) / (2d)
//! ```
//! from `c1`. The intersection points sit at height `h = √(r1² - a²)` on either
//! side of that foot point.

use crate::circle::Circle;
use crate::float_types::{Real, tolerance};
use log::debug;
use nalgebra::{Point3, Vector3};

/// Result of intersecting two circle boundaries.
///
/// `Empty` covers every degenerate pair: disjoint circles, one circle strictly
/// inside the other, and coincident centers (where the intersection is either
/// empty or the whole circle).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intersection {
    /// The boundaries do not meet, or the centers coincide.
    Empty,
    /// The circles touch at exactly one point.
    Tangent(Point3<Real>),
    /// Two crossing points. The first lies to the left of the directed center
    /// line `c1 → c2`, the second to the right.
    Two(Point3<Real>, Point3<Real>),
}

impl Intersection {
    /// Number of intersection points (0, 1 or 2).
    pub const fn len(&self) -> usize {
        match self {
            Intersection::Empty => 0,
            Intersection::Tangent(_) => 1,
            Intersection::Two(_, _) => 2,
        }
    }

    pub const fn is_empty(&self) -> bool {
        matches!(self, Intersection::Empty)
    }

    /// The points in derivation order.
    pub fn points(&self) -> Vec<Point3<Real>> {
        match *self {
            Intersection::Empty => vec![],
            Intersection::Tangent(p) => vec![p],
            Intersection::Two(p1, p2) => vec![p1, p2],
        }
    }

    /// The point left of `c1 → c2`, or the tangent point.
    pub const fn left(&self) -> Option<Point3<Real>> {
        match *self {
            Intersection::Empty => None,
            Intersection::Tangent(p) | Intersection::Two(p, _) => Some(p),
        }
    }

    /// The point right of `c1 → c2`, or the tangent point.
    pub const fn right(&self) -> Option<Point3<Real>> {
        match *self {
            Intersection::Empty => None,
            Intersection::Tangent(p) | Intersection::Two(_, p) => Some(p),
        }
    }
}

/// Intersect the boundaries of `c1` and `c2`.
///
/// `epsilon` decides when centers coincide, when the circles are treated as
/// tangent, and how far beyond `r1 + r2` / `|r1 - r2|` the center distance may
/// drift before the pair counts as disjoint. Never fails: degenerate pairs
/// return [`Intersection::Empty`].
pub fn intersect(c1: &Circle, c2: &Circle, epsilon: Real) -> Intersection {
    let (r1, r2) = (c1.radius(), c2.radius());
    let v: Vector3<Real> = c2.center() - c1.center();
    let d = v.norm();

    if d < epsilon {
        debug!("intersect: coincident centers at {}", c1.center());
        return Intersection::Empty;
    }

    if d > r1 + r2 + epsilon || d < (r1 - r2).abs() - epsilon {
        debug!("intersect: no crossing (d = {d}, r1 = {r1}, r2 = {r2})");
        return Intersection::Empty;
    }

    let a = (r1 * r1 - r2 * r2 + d * d) / (2.0 * d);
    let mut h_sq = r1 * r1 - a * a;
    // clamp fp underflow around tangency
    if h_sq.abs() < epsilon {
        h_sq = 0.0;
    }
    if h_sq < 0.0 {
        debug!("intersect: negative height² {h_sq} beyond tolerance");
        return Intersection::Empty;
    }
    let h = h_sq.sqrt();

    let p0 = c1.center() + v * (a / d);
    let perp = Vector3::new(-v.y, v.x, 0.0) / d;

    if h == 0.0 {
        return Intersection::Tangent(p0);
    }

    Intersection::Two(p0 + perp * h, p0 - perp * h)
}

/// [`intersect`] using the crate-wide [`tolerance`].
pub fn intersect_default(c1: &Circle, c2: &Circle) -> Intersection {
    intersect(c1, c2, tolerance())
}

#[cfg(all(test, feature = "f64"))]
mod test {
    use super::*;

    #[test]
    fn textbook_pair() {
        let a = Circle::from_xy(0.0, 0.0, 4.0).unwrap();
        let b = Circle::from_xy(3.0, 0.0, 5.0).unwrap();
        // a = (16 - 25 + 9) / 6 = 0, h = 4
        match intersect(&a, &b, 1e-8) {
            Intersection::Two(p1, p2) => {
                approx::assert_relative_eq!(p1, Point3::new(0.0, 4.0, 0.0), epsilon = 1e-12);
                approx::assert_relative_eq!(p2, Point3::new(0.0, -4.0, 0.0), epsilon = 1e-12);
            },
            other => panic!("expected two points, got {:?}", other),
        }
    }

    #[test]
    fn accessors() {
        let p = Point3::new(1.0, 2.0, 0.0);
        let q = Point3::new(3.0, 4.0, 0.0);
        assert_eq!(Intersection::Empty.len(), 0);
        assert!(Intersection::Empty.is_empty());
        assert_eq!(Intersection::Tangent(p).left(), Some(p));
        assert_eq!(Intersection::Tangent(p).right(), Some(p));
        assert_eq!(Intersection::Two(p, q).left(), Some(p));
        assert_eq!(Intersection::Two(p, q).right(), Some(q));
        assert_eq!(Intersection::Two(p, q).points(), vec![p, q]);
        assert_eq!(Intersection::Empty.right(), None);
    }
}
