use sphprim3d::bounding_volume::{Aabb, BoundingVolume};
use sphprim3d::math::{Point, Real, Rotation};
use sphprim3d::shape::{Cone, Primitive};

fn random_rotation(rng: &mut oorandom::Rand32) -> Rotation {
    Rotation::from_euler_angles(
        rng.rand_float() as Real * 6.0,
        rng.rand_float() as Real * 6.0,
        rng.rand_float() as Real * 6.0,
    )
}

fn min_distance(points: &[Point]) -> Real {
    let mut result = Real::MAX;

    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            result = result.min((a - b).norm());
        }
    }

    result
}

#[test]
fn cone_with_apex_on_top() {
    let cone = Cone::new(Point::origin(), 0.0, 1.0, 2.0, Rotation::identity());
    let dx = 0.1;

    approx::assert_relative_eq!(cone.volume(dx), 2.094, epsilon = 1.0e-3);
    assert!(cone.is_inside(&Point::new(0.0, 0.0, 1.0), 0.0));
    assert!(!cone.is_inside(&Point::new(0.0, 0.0, 2.5), 0.0));

    let mut points = Vec::new();
    let count = cone.fill(&mut points, dx, true);
    let aabb = cone.bounding_box();

    assert!(count > 0);
    assert_eq!(count, points.len());
    assert!((count as Real) <= aabb.volume() / (dx * dx * dx));
}

#[test]
fn dry_run_counts_what_the_fill_appends() {
    let cone = Cone::new(Point::new(1.0, -2.0, 0.5), 0.25, 0.75, 1.3, Rotation::identity());
    let mut points = vec![Point::new(10.0, 10.0, 10.0); 3];

    let counted = cone.fill(&mut Vec::new(), 0.05, false);
    let appended = cone.fill(&mut points, 0.05, true);

    assert_eq!(counted, appended);
    assert_eq!(cone.count_fill(0.05), counted);
    assert_eq!(points.len(), 3 + appended);
    // Existing content is preserved.
    assert!(points[..3].iter().all(|pt| *pt == Point::new(10.0, 10.0, 10.0)));
}

#[test]
fn bounding_box_encloses_both_fills() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..20 {
        let origin = Point::new(
            rng.rand_float() as Real * 4.0 - 2.0,
            rng.rand_float() as Real * 4.0 - 2.0,
            rng.rand_float() as Real * 4.0 - 2.0,
        );
        let radius_top = rng.rand_float() as Real;
        let radius_bottom = rng.rand_float() as Real;
        let height = 0.2 + rng.rand_float() as Real;
        let cone = Cone::new(
            origin,
            radius_top,
            radius_bottom,
            height,
            random_rotation(&mut rng),
        );

        let mut points = Vec::new();
        let _ = cone.fill(&mut points, 0.1, true);
        cone.fill_border(&mut points, 0.1);

        let aabb = cone.bounding_box().loosened(1.0e-4);
        assert!(points.iter().all(|pt| aabb.contains_local_point(pt)));
        assert!(aabb.contains(&Aabb::from_points(&points)));
    }
}

#[test]
fn border_particles_are_spaced_by_half_dx() {
    let dx = 0.1;
    let cones = [
        Cone::new(Point::origin(), 0.0, 1.0, 2.0, Rotation::identity()),
        Cone::new(Point::origin(), 1.0, 0.0, 2.0, Rotation::identity()),
        Cone::new(Point::origin(), 0.6, 0.6, 1.0, Rotation::identity()),
        Cone::new(Point::origin(), 0.3, 0.9, 0.7, Rotation::identity()),
        // Shallow cones, where the disks run under the lateral surface.
        Cone::new(Point::origin(), 0.0, 1.0, 0.3, Rotation::identity()),
        Cone::new(Point::origin(), 0.2, 2.0, 0.2, Rotation::identity()),
        Cone::new(Point::origin(), 1.5, 0.1, 0.15, Rotation::identity()),
    ];

    for cone in &cones {
        let mut points = Vec::new();
        cone.fill_border(&mut points, dx);

        assert!(!points.is_empty());
        assert!(
            min_distance(&points) >= dx / 2.0 - 1.0e-5,
            "{:?}: {}",
            cone,
            min_distance(&points)
        );
    }
}

#[test]
fn border_particles_lie_on_the_surface() {
    let cone = Cone::new(Point::new(0.5, 0.5, 0.5), 0.4, 1.0, 1.5, Rotation::identity());
    let mut points = Vec::new();
    cone.fill_border(&mut points, 0.1);

    assert!(points.iter().all(|pt| cone.is_inside(pt, 1.0e-4)));
    // None of them is strictly inside.
    assert!(points.iter().all(|pt| !cone.is_inside(pt, -1.0e-3)));
}

#[test]
fn volume_particles_are_strictly_inside() {
    let cone = Cone::new(Point::origin(), 0.2, 0.8, 1.0, Rotation::identity());
    let mut points = Vec::new();
    let _ = cone.fill(&mut points, 0.1, true);

    assert!(points.iter().all(|pt| cone.is_inside(pt, -1.0e-5)));
}

#[test]
fn degenerate_cone_fills_nothing() {
    let flat = Cone::new(Point::origin(), 1.0, 1.0, 0.0, Rotation::identity());
    let mut points = Vec::new();

    assert_eq!(flat.fill(&mut points, 0.1, true), 0);
    flat.fill_border(&mut points, 0.1);
    assert!(points.is_empty());
}
