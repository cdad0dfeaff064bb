#![cfg(feature = "f64")]

use approx::assert_relative_eq;
use circle_outline::{
    float_types::Real,
    intersect::{Intersection, intersect, intersect_default},
};
use nalgebra::Point3;

mod support;

use crate::support::{capsule_circles, circle, on_circle, unit_samples};

const EPS: Real = 1e-8;

#[test]
fn capsule_crossings() {
    let (a, b) = capsule_circles();
    match intersect(&a, &b, EPS) {
        Intersection::Two(p1, p2) => {
            let s5 = (5.0 as Real).sqrt();
            assert_relative_eq!(p1, Point3::new(0.0, s5, 0.0), epsilon = 1e-12);
            assert_relative_eq!(p2, Point3::new(0.0, -s5, 0.0), epsilon = 1e-12);
        },
        other => panic!("expected two crossings, got {:?}", other),
    }
}

#[test]
fn default_tolerance_matches_explicit() {
    let (a, b) = capsule_circles();
    assert_eq!(intersect_default(&a, &b), intersect(&a, &b, EPS));
}

#[test]
fn first_point_is_left_of_center_line() {
    let a = circle(1.0, 1.0, 2.0);
    let b = circle(2.5, 3.0, 1.5);
    let Intersection::Two(p1, p2) = intersect(&a, &b, EPS) else {
        panic!("circles should cross");
    };
    let v = b.center() - a.center();
    let cross = |p: Point3<Real>| {
        let w = p - a.center();
        v.x * w.y - v.y * w.x
    };
    assert!(cross(p1) > 0.0);
    assert!(cross(p2) < 0.0);
}

#[test]
fn identical_circles_have_no_intersection() {
    let a = circle(0.5, -0.5, 2.0);
    assert_eq!(intersect(&a, &a, EPS), Intersection::Empty);
}

#[test]
fn coincident_centers_regardless_of_radii() {
    for r2 in [0.5, 1.0, 2.0, 7.5] {
        let a = circle(3.0, 4.0, 1.0);
        let b = circle(3.0, 4.0, r2);
        assert!(intersect(&a, &b, EPS).is_empty(), "r2 = {r2}");
    }
}

#[test]
fn disjoint_circles() {
    let a = circle(0.0, 0.0, 1.0);
    let b = circle(5.0, 0.0, 1.0);
    assert_eq!(intersect(&a, &b, EPS), Intersection::Empty);
    assert_eq!(intersect(&b, &a, EPS), Intersection::Empty);
}

#[test]
fn contained_circles() {
    let outer = circle(0.0, 0.0, 5.0);
    let inner = circle(1.0, 0.5, 1.0);
    assert_eq!(intersect(&outer, &inner, EPS), Intersection::Empty);
    assert_eq!(intersect(&inner, &outer, EPS), Intersection::Empty);
}

#[test]
fn external_tangency() {
    let a = circle(0.0, 0.0, 1.0);
    let b = circle(3.0, 0.0, 2.0);
    let result = intersect(&a, &b, EPS);
    assert_eq!(result.len(), 1);
    let Intersection::Tangent(p) = result else {
        panic!("expected tangency, got {:?}", result);
    };
    assert_relative_eq!(p, Point3::new(1.0, 0.0, 0.0), epsilon = 1e-12);
    assert!(on_circle(&p, &a, EPS));
    assert!(on_circle(&p, &b, EPS));
}

#[test]
fn internal_tangency() {
    let a = circle(0.0, 0.0, 3.0);
    let b = circle(1.0, 0.0, 2.0);
    let Intersection::Tangent(p) = intersect(&a, &b, EPS) else {
        panic!("expected internal tangency");
    };
    assert_relative_eq!(p, Point3::new(3.0, 0.0, 0.0), epsilon = 1e-12);
}

#[test]
fn near_tangency_within_tolerance_is_tangent() {
    let a = circle(0.0, 0.0, 1.0);
    let b = circle(2.0 + 1e-10, 0.0, 1.0);
    assert!(matches!(intersect(&a, &b, EPS), Intersection::Tangent(_)));

    let c = circle(2.0 + 1e-6, 0.0, 1.0);
    assert!(intersect(&a, &c, EPS).is_empty());
}

#[test]
fn crossings_lie_on_both_circles() {
    let samples = unit_samples(7, 6 * 400);
    let mut checked = 0;
    for s in samples.chunks(6) {
        let a = circle(s[0] * 10.0 - 5.0, s[1] * 10.0 - 5.0, 0.5 + s[2] * 4.5);
        let b = circle(s[3] * 10.0 - 5.0, s[4] * 10.0 - 5.0, 0.5 + s[5] * 4.5);
        let d = (b.center() - a.center()).norm();
        let (r1, r2) = (a.radius(), b.radius());

        // stay clear of the tangency boundaries
        if d <= (r1 - r2).abs() + 0.05 || d >= r1 + r2 - 0.05 {
            continue;
        }
        let Intersection::Two(p1, p2) = intersect(&a, &b, EPS) else {
            panic!("{:?} and {:?} should cross", a, b);
        };
        for p in [p1, p2] {
            assert!(on_circle(&p, &a, 1e-9), "{p} not on {:?}", a);
            assert!(on_circle(&p, &b, 1e-9), "{p} not on {:?}", b);
        }
        checked += 1;
    }
    assert!(checked > 50, "only {checked} crossing pairs sampled");
}

#[test]
fn separated_pairs_are_empty() {
    let samples = unit_samples(99, 6 * 400);
    for s in samples.chunks(6) {
        let a = circle(s[0] * 10.0 - 5.0, s[1] * 10.0 - 5.0, 0.5 + s[2] * 4.5);
        let b = circle(s[3] * 10.0 - 5.0, s[4] * 10.0 - 5.0, 0.5 + s[5] * 4.5);
        let d = (b.center() - a.center()).norm();
        let (r1, r2) = (a.radius(), b.radius());
        if d > r1 + r2 + 1e-6 || d < (r1 - r2).abs() - 1e-6 {
            assert!(intersect(&a, &b, EPS).is_empty());
        }
    }
}
