//! Closed outlines assembled from arcs that meet at shared junction points.

use crate::arc::ArcDescriptor;
use crate::errors::{ValidationError, check_point};
use crate::float_types::Real;
use geo::{Area, LineString, Polygon as GeoPolygon, Winding};
use nalgebra::Point3;
use std::ops::Range;

/// An ordered sequence of points forming a path, built arc by arc.
///
/// `ranges` records which slice of `points` came from which arc. Neighbouring
/// ranges share no points; the last point of arc `i` and the first point of arc
/// `i + 1` are separate entries holding bit-identical coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    points: Vec<Point3<Real>>,
    ranges: Vec<Range<usize>>,
    closed: bool,
}

impl Outline {
    #[inline]
    pub fn points(&self) -> &[Point3<Real>] {
        &self.points
    }

    #[inline]
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    /// Number of arc segments the outline was built from.
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.ranges.len()
    }

    /// The points contributed by each arc, in order.
    pub fn segments(&self) -> impl Iterator<Item = &[Point3<Real>]> + '_ {
        self.ranges.iter().map(move |r| &self.points[r.clone()])
    }

    /// The outline as a `geo::LineString` (z dropped), closed if the outline is.
    pub fn to_line_string(&self) -> LineString<Real> {
        let mut line: LineString<Real> = self
            .points
            .iter()
            .map(|p| (p.x, p.y))
            .collect::<Vec<_>>()
            .into();
        if self.closed {
            line.close();
        }
        line
    }

    /// The outline as a `geo::Polygon` for fill rendering.
    pub fn to_polygon(&self) -> GeoPolygon<Real> {
        GeoPolygon::new(self.to_line_string(), vec![])
    }

    /// Signed enclosed area; positive for counter-clockwise outlines.
    pub fn signed_area(&self) -> Real {
        self.to_polygon().signed_area()
    }

    pub fn is_ccw(&self) -> bool {
        self.to_line_string().is_ccw()
    }
}

/// Chain `arcs` into one closed outline.
///
/// Arc `i` must run from `junctions[i]` to `junctions[(i + 1) % n]`; the builder
/// trusts the caller on that and only assembles. Each arc is discretized at its
/// own resolution, its first and last samples are replaced by the exact
/// junction values, and the segments are concatenated.
///
/// Junctions with NaN or infinite coordinates are rejected.
pub fn build_outline(
    arcs: &[ArcDescriptor],
    junctions: &[Point3<Real>],
) -> Result<Outline, ValidationError> {
    if arcs.is_empty() {
        return Err(ValidationError::TooFewArcs);
    }
    if arcs.len() != junctions.len() {
        return Err(ValidationError::JunctionMismatch {
            arcs: arcs.len(),
            junctions: junctions.len(),
        });
    }

    for junction in junctions {
        check_point(junction)?;
    }

    let n = arcs.len();
    let capacity = arcs.iter().map(|a| a.segments() + 1).sum();
    let mut points = Vec::with_capacity(capacity);
    let mut ranges = Vec::with_capacity(n);

    for (i, arc) in arcs.iter().enumerate() {
        let start = points.len();
        points.extend(arc.discretize_snapped(junctions[i], junctions[(i + 1) % n]));
        ranges.push(start..points.len());
    }

    Ok(Outline {
        points,
        ranges,
        closed: true,
    })
}
