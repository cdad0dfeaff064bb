//! `Circle` value type in the XY plane

use crate::errors::{ValidationError, check_point};
use crate::float_types::{Real, TAU, normalize_angle};
use geo::{LineString, Polygon as GeoPolygon};
use nalgebra::{Point3, Vector3};

/// A circle in the XY plane. The z coordinate of the center is always 0.
///
/// Circles are immutable once built; [`Circle::new`] rejects radii that are not
/// strictly positive and centers with NaN or infinite coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point3<Real>,
    radius: Real,
}

impl Circle {
    /// Build a circle, projecting `center` onto the XY plane.
    pub fn new(center: Point3<Real>, radius: Real) -> Result<Self, ValidationError> {
        check_point(&center)?;
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ValidationError::InvalidRadius(radius));
        }
        Ok(Self {
            center: Point3::new(center.x, center.y, 0.0),
            radius,
        })
    }

    /// Shorthand for a circle centered at `(x, y, 0)`.
    pub fn from_xy(x: Real, y: Real, radius: Real) -> Result<Self, ValidationError> {
        Self::new(Point3::new(x, y, 0.0), radius)
    }

    #[inline]
    pub const fn center(&self) -> Point3<Real> {
        self.center
    }

    #[inline]
    pub const fn radius(&self) -> Real {
        self.radius
    }

    /// Point on the boundary at `angle` radians, measured counter-clockwise from +X.
    #[inline]
    pub fn point_at(&self, angle: Real) -> Point3<Real> {
        self.center + Vector3::new(angle.cos(), angle.sin(), 0.0) * self.radius
    }

    /// Polar angle of `point` around the center, in `[0, 2π)`.
    #[inline]
    pub fn angle_of(&self, point: &Point3<Real>) -> Real {
        let v = point - self.center;
        normalize_angle(v.y.atan2(v.x))
    }

    /// Signed distance from `point` to the boundary (negative inside).
    pub fn boundary_distance(&self, point: &Point3<Real>) -> Real {
        let v = point - self.center;
        (v.x * v.x + v.y * v.y).sqrt() - self.radius
    }

    /// True when `point` lies on the boundary within `epsilon`.
    pub fn is_on_boundary(&self, point: &Point3<Real>, epsilon: Real) -> bool {
        self.boundary_distance(point).abs() <= epsilon
    }

    /// Returns a new circle moved by `(dx, dy)`.
    pub fn translate(&self, dx: Real, dy: Real) -> Self {
        Self {
            center: Point3::new(self.center.x + dx, self.center.y + dy, 0.0),
            radius: self.radius,
        }
    }

    /// Polygonal approximation of the full circle with uniform angular sampling,
    /// for collaborators that fall back to drawing bare circles.
    ///
    /// Returns an empty polygon for fewer than 3 segments.
    pub fn to_polygon(&self, segments: usize) -> GeoPolygon<Real> {
        if segments < 3 {
            return GeoPolygon::new(LineString::new(vec![]), vec![]);
        }
        let mut coords: Vec<(Real, Real)> = (0..segments)
            .map(|i| {
                let p = self.point_at(TAU * (i as Real) / (segments as Real));
                (p.x, p.y)
            })
            .collect();
        // close it
        coords.push(coords[0]);
        GeoPolygon::new(LineString::from(coords), vec![])
    }
}

impl approx::AbsDiffEq for Circle {
    type Epsilon = Real;

    fn default_epsilon() -> Self::Epsilon {
        <Real as approx::AbsDiffEq>::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        approx::AbsDiffEq::abs_diff_eq(&self.center, &other.center, epsilon)
            && approx::AbsDiffEq::abs_diff_eq(&self.radius, &other.radius, epsilon)
    }
}

impl approx::RelativeEq for Circle {
    fn default_max_relative() -> Self::Epsilon {
        <Real as approx::RelativeEq>::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        approx::RelativeEq::relative_eq(&self.center, &other.center, epsilon, max_relative)
            && approx::RelativeEq::relative_eq(&self.radius, &other.radius, epsilon, max_relative)
    }
}
