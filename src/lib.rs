//! Planar geometry for shapes built from overlapping circles:
//! **circle–circle intersection**, **outward arc selection** and **closed
//! outlines** whose arcs meet at bit-identical junction points.
//!
//! Everything here is a pure function of its inputs. Geometric degeneracy
//! (disjoint circles, containment, coincident centers) is reported as an empty
//! result, never as an error; malformed input (non-positive radius, NaN
//! coordinates) is rejected with a [`ValidationError`](errors::ValidationError).
//!
//! ```
//! use circle_outline::{Circle, CircleCycle};
//!
//! let left = Circle::from_xy(-2.0, 0.0, 3.0).unwrap();
//! let right = Circle::from_xy(2.0, 0.0, 3.0).unwrap();
//! let capsule = CircleCycle::<()>::from_circles(vec![left, right]).unwrap();
//! let outline = capsule.outline(60, 1e-8).unwrap().expect("circles overlap");
//! assert!(outline.is_closed());
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod arc;
pub mod circle;
pub mod cycle;
pub mod errors;
pub mod float_types;
pub mod intersect;
pub mod outline;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use arc::{ArcDescriptor, outward_arc};
pub use circle::Circle;
pub use cycle::CircleCycle;
pub use intersect::{Intersection, intersect, intersect_default};
pub use outline::{Outline, build_outline};
