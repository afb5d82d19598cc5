// Boolean combination of shapes through the clipper, verified by filling
// the clipped output and probing coverage.

use polyscan::{
    fill_path, Clipper, ClippingOperation, ClippingType, CoverageMask, Ellipse, FillOptions,
    IntersectionRule, Path, Point, Polygon, Star,
};

/// Shoelace sum: positive for counterclockwise point order.
fn signed_area(points: &[Point]) -> f32 {
    let mut sum = 0.0;
    let mut prev = points[points.len() - 1];
    for &p in points {
        sum += prev.x * p.y - p.x * prev.y;
        prev = p;
    }
    sum * 0.5
}

fn fill_shapes(shapes: &[Polygon], size: usize) -> CoverageMask {
    let mut mask = CoverageMask::new(size, size);
    fill_path(&mut mask, shapes, &FillOptions::default());
    mask
}

#[test]
fn union_covers_both_inputs() {
    let mut clipper = Clipper::new();
    clipper.add_path(
        &Polygon::rectangle(10.0, 10.0, 60.0, 60.0),
        ClippingType::Subject,
    );
    clipper.add_path(
        &Polygon::rectangle(40.0, 40.0, 90.0, 90.0),
        ClippingType::Clip,
    );
    let shapes =
        clipper.generate_clipped_shapes(ClippingOperation::Union, IntersectionRule::NonZero);
    assert!(!shapes.is_empty());

    let mask = fill_shapes(&shapes, 100);
    assert_eq!(mask.coverage(20, 20), 1.0);
    assert_eq!(mask.coverage(50, 50), 1.0);
    assert_eq!(mask.coverage(80, 80), 1.0);
    assert_eq!(mask.coverage(80, 20), 0.0);
    assert_eq!(mask.coverage(5, 5), 0.0);
}

#[test]
fn intersection_keeps_only_the_overlap() {
    let mut clipper = Clipper::new();
    clipper.add_path(
        &Polygon::rectangle(10.0, 10.0, 60.0, 60.0),
        ClippingType::Subject,
    );
    clipper.add_path(
        &Polygon::rectangle(40.0, 40.0, 90.0, 90.0),
        ClippingType::Clip,
    );
    let shapes =
        clipper.generate_clipped_shapes(ClippingOperation::Intersection, IntersectionRule::NonZero);

    let mask = fill_shapes(&shapes, 100);
    assert_eq!(mask.coverage(50, 50), 1.0);
    assert_eq!(mask.coverage(20, 20), 0.0);
    assert_eq!(mask.coverage(80, 80), 0.0);
}

#[test]
fn xor_of_identical_shapes_is_empty() {
    let square = Polygon::rectangle(10.0, 10.0, 60.0, 60.0);
    let mut clipper = Clipper::new();
    clipper.add_path(&square, ClippingType::Subject);
    clipper.add_path(&square, ClippingType::Clip);
    let shapes =
        clipper.generate_clipped_shapes(ClippingOperation::Xor, IntersectionRule::NonZero);

    let mask = fill_shapes(&shapes, 100);
    assert_eq!(mask.coverage(30, 30), 0.0);
}

#[test]
fn star_minus_circle_is_deterministic() {
    let star = Star::new(100.0, 100.0, 5, 25.0, 60.0).unwrap();
    let circle = Ellipse::circle(120.0, 100.0, 40.0).unwrap();

    let run = || {
        let mut clipper = Clipper::new();
        clipper.add_path(&star, ClippingType::Subject);
        clipper.add_path(&circle, ClippingType::Clip);
        clipper.generate_clipped_shapes(ClippingOperation::Difference, IntersectionRule::NonZero)
    };
    let first = run();
    let second = run();
    assert!(!first.is_empty());
    assert_eq!(first, second);

    // The circle's center region is cut away; the first star spike points
    // toward (100, 160), lies outside the circle and survives.
    let mask = fill_shapes(&first, 200);
    assert_eq!(mask.coverage(120, 100), 0.0);
    assert_eq!(mask.coverage(100, 155), 1.0);
}

#[test]
fn star_minus_concentric_circle_fixture() {
    // Inner radius 25 lies inside the circle, outer radius 60 outside, so
    // the difference is exactly one detached tip per prong.
    let star = Star::new(100.0, 100.0, 5, 25.0, 60.0).unwrap();
    let circle = Ellipse::circle(100.0, 100.0, 40.0).unwrap();

    let mut clipper = Clipper::new();
    clipper.add_path(&star, ClippingType::Subject);
    clipper.add_path(&circle, ClippingType::Clip);
    let shapes =
        clipper.generate_clipped_shapes(ClippingOperation::Difference, IntersectionRule::NonZero);

    assert_eq!(shapes.len(), 5);
    let mut total = 0;
    for shape in &shapes {
        let n = shape.points().len();
        // A tip is the star vertex, two circle intersections and the
        // flattened arc between them.
        assert!((3..=8).contains(&n), "tip with {} points", n);
        total += n;
        // The engine hands outer boundaries back clockwise-ordered.
        assert!(signed_area(shape.points()) < 0.0);
    }
    assert!((15..=40).contains(&total), "{} points in total", total);
}

#[test]
fn empty_contours_are_skipped() {
    let mut clipper = Clipper::new();
    clipper.add_path(&Polygon::new(vec![]), ClippingType::Subject);
    clipper.add_path(
        &Polygon::rectangle(10.0, 10.0, 60.0, 60.0),
        ClippingType::Subject,
    );
    let shapes =
        clipper.generate_clipped_shapes(ClippingOperation::Union, IntersectionRule::NonZero);
    assert_eq!(
        fill_shapes(&shapes, 100).coverage(30, 30),
        1.0
    );
}

#[test]
fn open_subject_paths_pass_through_unclipped() {
    let mut polyline = Path::new();
    polyline.move_to(0.0, 50.0);
    polyline.line_to(100.0, 50.0);

    let mut clipper = Clipper::new();
    clipper.add_path(&polyline, ClippingType::Subject);
    clipper.add_path(
        &Polygon::rectangle(40.0, 40.0, 60.0, 60.0),
        ClippingType::Clip,
    );
    let shapes =
        clipper.generate_clipped_shapes(ClippingOperation::Intersection, IntersectionRule::NonZero);
    // No closed subject intersects the clip, so only the remnant survives.
    assert_eq!(shapes.len(), 1);
    assert_eq!(shapes[0].points().len(), 2);
    assert_eq!(shapes[0].points()[0].y, 50.0);
}
