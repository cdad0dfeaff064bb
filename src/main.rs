// main.rs
//
// Builds the two reference constructions (capsule, triangle of circles) and
// prints what a renderer would receive. Set RUST_LOG=debug to see degenerate
// cases being reported.

use circle_outline::{
    Circle, CircleCycle, Intersection, Outline,
    errors::ValidationError,
    float_types::{DEFAULT_ARC_SEGMENTS, Real, tolerance},
    intersect,
};
use log::{info, warn};

fn main() -> Result<(), ValidationError> {
    env_logger::init();

    // 1) capsule: two radius-3 circles 4 apart
    let left = Circle::from_xy(-2.0, 0.0, 3.0)?;
    let right = Circle::from_xy(2.0, 0.0, 3.0)?;
    match intersect(&left, &right, tolerance()) {
        Intersection::Two(p1, p2) => info!("capsule crossings: {p1} {p2}"),
        other => warn!("capsule circles do not cross properly: {other:?}"),
    }
    let capsule = CircleCycle::<&str>::new(vec![left, right], vec![Some("A"), Some("B")])?;
    report("capsule", &capsule)?;

    // 2) triangle of circles, listed clockwise on purpose
    let h = 2.0 * (3.0 as Real).sqrt();
    let base = Circle::from_xy(0.0, 0.0, 3.0)?.translate(0.0, -0.8);
    let triangle = CircleCycle::new(
        vec![
            base.translate(0.0, h),
            base.translate(2.0, 0.0),
            base.translate(-2.0, 0.0),
        ],
        vec![Some("top"), Some("right"), Some("left")],
    )?;
    info!(
        "triangle order after winding fix: {:?} (area {:.2})",
        triangle.metadata(),
        triangle.signed_area()
    );
    report("triangle", &triangle)?;

    // 3) disjoint pair: no outline, bare circles only
    let far = CircleCycle::<&str>::from_circles(vec![left, left.translate(10.0, 0.0)])?;
    report("disjoint", &far)?;

    Ok(())
}

fn report(name: &str, cycle: &CircleCycle<&str>) -> Result<(), ValidationError> {
    println!("{name}: {} circles, centroid {}", cycle.len(), cycle.centroid());
    match cycle.outline(DEFAULT_ARC_SEGMENTS, tolerance())? {
        Some(outline) => print_outline(&outline),
        None => {
            for circle in cycle.circles() {
                let poly = circle.to_polygon(DEFAULT_ARC_SEGMENTS);
                println!(
                    "  bare circle at {} r={} ({} vertices)",
                    circle.center(),
                    circle.radius(),
                    poly.exterior().0.len()
                );
            }
        },
    }
    Ok(())
}

fn print_outline(outline: &Outline) {
    println!(
        "  outline: {} points in {} arcs, area {:.4}, ccw {}",
        outline.points().len(),
        outline.segment_count(),
        outline.signed_area(),
        outline.is_ccw()
    );
    for (i, segment) in outline.segments().enumerate() {
        if let (Some(first), Some(last)) = (segment.first(), segment.last()) {
            println!("  arc {i}: ({:.4}, {:.4}) -> ({:.4}, {:.4})", first.x, first.y, last.x, last.y);
        }
    }
}
