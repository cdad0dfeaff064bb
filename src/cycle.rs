//! Rings of overlapping circles (the capsule and the triangle of circles).
//!
//! A [`CircleCycle`] holds `n ≥ 2` circles whose centers are kept in
//! counter-clockwise order. Each circle overlaps its successor `(i + 1) % n`;
//! the outer crossing point of each such pair is a junction, and the outline
//! runs along circle `i` from the junction it shares with its predecessor to
//! the one it shares with its successor, on the side facing away from the
//! centroid.
//!
//! With two circles the cycle degenerates to the capsule: the pairs `(0, 1)`
//! and `(1, 0)` contribute the two crossing points of the lens.

use crate::arc::{ArcDescriptor, outward_arc};
use crate::circle::Circle;
use crate::errors::ValidationError;
use crate::float_types::{Real, TAU, tolerance};
use crate::intersect::{Intersection, intersect};
use crate::outline::{Outline, build_outline};
use geo::{Area, LineString, Polygon as GeoPolygon};
use log::debug;
use nalgebra::{Point3, Vector3};
use std::fmt::Debug;

#[derive(Debug, Clone, PartialEq)]
pub struct CircleCycle<S: Clone + Debug + Send + Sync> {
    circles: Vec<Circle>,
    metadata: Vec<Option<S>>,
}

impl<S: Clone + Debug + Send + Sync> CircleCycle<S> {
    /// Build a cycle from `circles` and one optional metadata value per circle
    /// (a label, a color, ...).
    ///
    /// If the center polygon winds clockwise (negative signed area), circles
    /// and metadata are reversed together.
    pub fn new(circles: Vec<Circle>, metadata: Vec<Option<S>>) -> Result<Self, ValidationError> {
        if circles.len() < 2 {
            return Err(ValidationError::TooFewCircles(circles.len()));
        }
        if metadata.len() != circles.len() {
            return Err(ValidationError::MetadataMismatch {
                circles: circles.len(),
                metadata: metadata.len(),
            });
        }

        let mut cycle = Self { circles, metadata };
        if cycle.signed_area() < 0.0 {
            debug!("CircleCycle: clockwise centers, reversing {} circles", cycle.circles.len());
            cycle.circles.reverse();
            cycle.metadata.reverse();
        }
        Ok(cycle)
    }

    /// Build a cycle with no metadata.
    pub fn from_circles(circles: Vec<Circle>) -> Result<Self, ValidationError> {
        let metadata = vec![None; circles.len()];
        Self::new(circles, metadata)
    }

    #[inline]
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    #[inline]
    pub fn metadata(&self) -> &[Option<S>] {
        &self.metadata
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.circles.len()
    }

    /// Always false; a cycle holds at least two circles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    pub fn centers(&self) -> Vec<Point3<Real>> {
        self.circles.iter().map(Circle::center).collect()
    }

    /// Shoelace area of the polygon through the centers. Never negative once
    /// the cycle is built; zero for two circles or collinear centers.
    pub fn signed_area(&self) -> Real {
        let ring: LineString<Real> = self
            .circles
            .iter()
            .map(|c| (c.center().x, c.center().y))
            .collect::<Vec<_>>()
            .into();
        GeoPolygon::new(ring, vec![]).signed_area()
    }

    /// Mean of the centers.
    pub fn centroid(&self) -> Point3<Real> {
        let sum = self
            .circles
            .iter()
            .fold(Vector3::zeros(), |acc, c| acc + c.center().coords);
        Point3::from(sum / self.circles.len() as Real)
    }

    /// Unit vectors from the centroid towards each center. A center sitting on
    /// the centroid gets the zero vector.
    pub fn outward_directions(&self) -> Vec<Vector3<Real>> {
        let g = self.centroid();
        self.circles
            .iter()
            .map(|c| {
                let v = c.center() - g;
                let n = v.norm();
                if n == 0.0 { v } else { v / n }
            })
            .collect()
    }

    /// `intersect(circle[i], circle[(i + 1) % n])` for every `i`.
    pub fn pair_intersections(&self, epsilon: Real) -> Vec<Intersection> {
        let n = self.circles.len();
        (0..n)
            .map(|i| intersect(&self.circles[i], &self.circles[(i + 1) % n], epsilon))
            .collect()
    }

    /// Outer crossing point of each consecutive pair: the one right of the
    /// directed center line `i → i + 1`, which lies outside the
    /// counter-clockwise center polygon. `None` if any pair fails to cross.
    pub fn junctions(&self, epsilon: Real) -> Option<Vec<Point3<Real>>> {
        let junctions: Option<Vec<_>> = self
            .pair_intersections(epsilon)
            .iter()
            .map(Intersection::right)
            .collect();
        if junctions.is_none() {
            debug!("CircleCycle: at least one neighbouring pair does not intersect");
        }
        junctions
    }

    /// The closed outline around the whole cycle, `segments` per arc.
    ///
    /// Returns `Ok(None)` when a neighbouring pair does not intersect; the
    /// caller should fall back to drawing the bare circles.
    ///
    /// An arc whose two junctions coincide (two externally tangent circles)
    /// becomes the full circle, counter-clockwise from the tangent point, so the
    /// outline keeps its counter-clockwise winding.
    pub fn outline(&self, segments: usize, epsilon: Real) -> Result<Option<Outline>, ValidationError> {
        let Some(pair_junctions) = self.junctions(epsilon) else {
            return Ok(None);
        };
        let n = self.circles.len();
        let outward = self.outward_directions();

        // arc i starts at the junction shared with circle i - 1
        let starts: Vec<Point3<Real>> = (0..n).map(|i| pair_junctions[(i + n - 1) % n]).collect();

        let arcs = (0..n)
            .map(|i| {
                let circle = &self.circles[i];
                if starts[i] == pair_junctions[i] {
                    // tangent on both sides: go all the way round
                    ArcDescriptor::new(*circle, circle.angle_of(&starts[i]), TAU, segments)
                } else {
                    outward_arc(circle, &starts[i], &pair_junctions[i], &outward[i])
                        .with_segments(segments)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        build_outline(&arcs, &starts).map(Some)
    }

    /// [`outline`](Self::outline) using the crate-wide [`tolerance`].
    pub fn outline_default(&self, segments: usize) -> Result<Option<Outline>, ValidationError> {
        self.outline(segments, tolerance())
    }
}
