//! Validation errors
//!
//! These report *malformed* input. Geometric degeneracy (disjoint circles,
//! coincident centers, containment) is not an error; it shows up as an empty
//! [`Intersection`](crate::intersect::Intersection) or a `None` outline.

use crate::float_types::Real;
use nalgebra::Point3;

/// All the possible validation issues we might encounter
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// (InvalidRadius) A circle radius is zero, negative, NaN or infinite
    #[error("(InvalidRadius) Radius {0} must be finite and strictly positive")]
    InvalidRadius(Real),
    /// (InvalidCoordinate) The coordinate has a NaN or infinite
    #[error("(InvalidCoordinate) The coordinate ({0}) has a NaN or infinite")]
    InvalidCoordinate(Point3<Real>),
    /// (InvalidAngle) An arc start angle or sweep is NaN or infinite
    #[error("(InvalidAngle) Angle {0} must be finite")]
    InvalidAngle(Real),
    /// (TooFewSegments) An arc cannot be discretized with zero segments
    #[error("(TooFewSegments) An arc needs at least 1 segment, got {0}")]
    TooFewSegments(usize),
    /// (TooFewCircles) A circle cycle needs at least two circles
    #[error("(TooFewCircles) A circle cycle needs at least 2 circles, got {0}")]
    TooFewCircles(usize),
    /// (TooFewArcs) An outline needs at least one arc
    #[error("(TooFewArcs) An outline needs at least one arc")]
    TooFewArcs,
    /// (JunctionMismatch) Every arc needs exactly one starting junction
    #[error("(JunctionMismatch) {arcs} arcs were given with {junctions} junction points")]
    JunctionMismatch { arcs: usize, junctions: usize },
    /// (MetadataMismatch) Metadata must be supplied per circle
    #[error("(MetadataMismatch) {circles} circles were given with {metadata} metadata entries")]
    MetadataMismatch { circles: usize, metadata: usize },
}

/// Checks that every component of `point` is finite.
pub(crate) fn check_point(point: &Point3<Real>) -> Result<(), ValidationError> {
    if point.coords.iter().all(|c| c.is_finite()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidCoordinate(*point))
    }
}
