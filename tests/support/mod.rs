//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use circle_outline::{circle::Circle, float_types::Real};
use nalgebra::Point3;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Circle at `(x, y)`; panics on invalid input, which tests never pass.
pub fn circle(x: Real, y: Real, r: Real) -> Circle {
    Circle::from_xy(x, y, r).expect("valid test circle")
}

/// True when `p` is within `eps` of the boundary of `c`.
pub fn on_circle(p: &Point3<Real>, c: &Circle, eps: Real) -> bool {
    approx_eq((p - c.center()).norm(), c.radius(), eps)
}

/// The capsule pair: radius 3 at `(-2, 0)` and `(2, 0)`.
pub fn capsule_circles() -> (Circle, Circle) {
    (circle(-2.0, 0.0, 3.0), circle(2.0, 0.0, 3.0))
}

/// Three radius-3 circles on an equilateral triangle of side 4, base at `y = -0.8`,
/// listed counter-clockwise (left, right, top).
pub fn triangle_circles() -> Vec<Circle> {
    let h = 2.0 * (3.0 as Real).sqrt();
    vec![
        circle(-2.0, -0.8, 3.0),
        circle(2.0, -0.8, 3.0),
        circle(0.0, -0.8 + h, 3.0),
    ]
}

/// Small deterministic pseudo-random sequence in `[0, 1)` (xorshift).
pub fn unit_samples(seed: u64, count: usize) -> Vec<Real> {
    let mut state = seed.max(1);
    (0..count)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state >> 11) as Real / (1u64 << 53) as Real
        })
        .collect()
}
