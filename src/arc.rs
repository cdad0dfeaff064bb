//! Circular arcs described by a start angle and a signed sweep.

use crate::circle::Circle;
use crate::errors::ValidationError;
use crate::float_types::{DEFAULT_ARC_SEGMENTS, Real, TAU, normalize_angle};
use geo::LineString;
use log::trace;
use nalgebra::{Point3, Vector3};

/// An arc of `circle` starting at `start_angle` (radians, in `[0, 2π)`) and
/// covering `sweep` radians. Positive sweeps run counter-clockwise, negative
/// sweeps clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcDescriptor {
    circle: Circle,
    start_angle: Real,
    sweep: Real,
    segments: usize,
}

impl ArcDescriptor {
    /// Build an arc; `start_angle` is wrapped into `[0, 2π)`.
    /// `segments` is the number of straight pieces used by [`discretize`](Self::discretize).
    /// Non-finite angles are rejected.
    pub fn new(
        circle: Circle,
        start_angle: Real,
        sweep: Real,
        segments: usize,
    ) -> Result<Self, ValidationError> {
        if segments == 0 {
            return Err(ValidationError::TooFewSegments(segments));
        }
        if let Some(bad) = [start_angle, sweep].into_iter().find(|a| !a.is_finite()) {
            return Err(ValidationError::InvalidAngle(bad));
        }
        Ok(Self {
            circle,
            start_angle: normalize_angle(start_angle),
            sweep,
            segments,
        })
    }

    /// Same arc with a different resolution.
    pub fn with_segments(self, segments: usize) -> Result<Self, ValidationError> {
        Self::new(self.circle, self.start_angle, self.sweep, segments)
    }

    #[inline]
    pub const fn circle(&self) -> &Circle {
        &self.circle
    }

    #[inline]
    pub const fn start_angle(&self) -> Real {
        self.start_angle
    }

    #[inline]
    pub const fn sweep(&self) -> Real {
        self.sweep
    }

    #[inline]
    pub const fn segments(&self) -> usize {
        self.segments
    }

    /// `start_angle + sweep`, not wrapped.
    #[inline]
    pub fn end_angle(&self) -> Real {
        self.start_angle + self.sweep
    }

    #[inline]
    pub const fn is_ccw(&self) -> bool {
        self.sweep > 0.0
    }

    /// Point at parameter `t ∈ [0, 1]` along the arc.
    pub fn point_at(&self, t: Real) -> Point3<Real> {
        self.circle.point_at(self.start_angle + self.sweep * t)
    }

    /// Point halfway along the arc.
    pub fn midpoint(&self) -> Point3<Real> {
        self.point_at(0.5)
    }

    /// Arc length `r·|sweep|`.
    pub fn length(&self) -> Real {
        self.circle.radius() * self.sweep.abs()
    }

    /// `segments + 1` points sampled at uniform angular steps from the start
    /// angle through `start_angle + sweep`.
    ///
    /// The endpoints come from `cos`/`sin` and are only approximately equal to
    /// the points the arc was built from; see [`discretize_snapped`](Self::discretize_snapped).
    pub fn discretize(&self) -> Vec<Point3<Real>> {
        let n = self.segments as Real;
        (0..=self.segments)
            .map(|i| self.point_at(i as Real / n))
            .collect()
    }

    /// [`discretize`](Self::discretize), then overwrite the first and last
    /// samples with `start` and `end` exactly.
    pub fn discretize_snapped(&self, start: Point3<Real>, end: Point3<Real>) -> Vec<Point3<Real>> {
        let mut points = self.discretize();
        if let Some(first) = points.first_mut() {
            *first = start;
        }
        if let Some(last) = points.last_mut() {
            *last = end;
        }
        points
    }

    /// The discretized arc as an open `geo::LineString` (z dropped).
    pub fn to_line_string(&self) -> LineString<Real> {
        self.discretize()
            .into_iter()
            .map(|p| (p.x, p.y))
            .collect::<Vec<_>>()
            .into()
    }
}

/// Choose which of the two arcs of `circle` between `p_start` and `p_end`
/// bulges towards `outward`.
///
/// The counter-clockwise arc from `p_start` to `p_end` is sampled at its
/// midpoint. When `(mid - center) · outward > 0` that arc is kept (positive
/// sweep); otherwise the complementary clockwise arc is returned with sweep
/// `ccw_sweep - 2π`. A dot product of exactly zero counts as "not outward",
/// so a zero `outward` vector always yields the clockwise arc.
///
/// Both points are assumed to lie on `circle`; only their polar angles are used.
/// The arc uses [`DEFAULT_ARC_SEGMENTS`]; change it with
/// [`ArcDescriptor::with_segments`].
pub fn outward_arc(
    circle: &Circle,
    p_start: &Point3<Real>,
    p_end: &Point3<Real>,
    outward: &Vector3<Real>,
) -> ArcDescriptor {
    let start = circle.angle_of(p_start);
    let end = circle.angle_of(p_end);

    let mut ccw_sweep = end - start;
    if ccw_sweep < 0.0 {
        ccw_sweep += TAU;
    }

    let mid_angle = normalize_angle(start + ccw_sweep / 2.0);
    let mid = circle.point_at(mid_angle);
    let facing = (mid - circle.center()).dot(outward);

    let sweep = if facing > 0.0 { ccw_sweep } else { ccw_sweep - TAU };
    trace!(
        "outward_arc: start {start:.6} ccw sweep {ccw_sweep:.6} facing {facing:.6} -> sweep {sweep:.6}"
    );

    ArcDescriptor {
        circle: *circle,
        start_angle: start,
        sweep,
        segments: DEFAULT_ARC_SEGMENTS,
    }
}
