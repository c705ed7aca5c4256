use approx::assert_relative_eq;
use sphprim3d::math::{Point, Real, Rotation, Vector};
use sphprim3d::na::RealField;
use sphprim3d::query::PrimitiveError;
use sphprim3d::shape::{Cone, Primitive, PrimitiveType};

#[test]
fn constructors_agree() {
    let origin = Point::new(0.5, -1.0, 2.0);
    let rot = Rotation::from_euler_angles(0.3, -1.1, 2.0);
    let (rt, rb, h) = (0.41, 0.93, 1.57);

    let canonical = Cone::new(origin, rt, rb, h, rot);
    let from_axis = Cone::from_axis(origin, rt, rb, rot * Vector::new(0.0, 0.0, h));
    let from_rims = Cone::from_rim_vectors(
        origin,
        rot * Vector::new(0.0, 0.0, h),
        rot * Vector::new(rb, 0.0, 0.0),
        rot * Vector::new(rt, 0.0, h),
    );

    for cone in [&from_axis, &from_rims] {
        assert_relative_eq!(cone.height(), h, epsilon = 1.0e-5);
        assert_relative_eq!(cone.radius_top(), rt, epsilon = 1.0e-5);
        assert_relative_eq!(cone.radius_bottom(), rb, epsilon = 1.0e-5);
        assert_relative_eq!(cone.half_aperture(), canonical.half_aperture(), epsilon = 1.0e-5);
        assert_relative_eq!(cone.axis(), canonical.axis(), epsilon = 1.0e-5);
        assert_relative_eq!(cone.volume(0.1), canonical.volume(0.1), epsilon = 1.0e-4);
    }

    // The rim vectors also fix the rotation around the axis.
    let mut expected = Vec::new();
    let mut actual = Vec::new();
    canonical.fill_border(&mut expected, 0.1);
    from_rims.fill_border(&mut actual, 0.1);

    assert_eq!(expected.len(), actual.len());
    for (a, b) in expected.iter().zip(actual.iter()) {
        assert_relative_eq!(*a, *b, epsilon = 1.0e-4);
    }
}

#[test]
fn from_axis_along_z_is_the_canonical_cone() {
    let canonical = Cone::new(Point::origin(), 0.5, 1.0, 2.0, Rotation::identity());
    let from_axis = Cone::from_axis(Point::origin(), 0.5, 1.0, Vector::new(0.0, 0.0, 2.0));

    assert_eq!(canonical.count_fill(0.1), from_axis.count_fill(0.1));
    assert_relative_eq!(*from_axis.orientation(), Rotation::identity(), epsilon = 1.0e-6);
}

#[test]
fn containment_follows_the_pose() {
    let rot = Rotation::from_axis_angle(&Vector::x_axis(), Real::frac_pi_2());
    let cone = Cone::new(Point::new(1.0, 1.0, 1.0), 0.0, 1.0, 2.0, rot);

    // The axis now points along -y.
    assert!(cone.is_inside(&Point::new(1.0, 0.0, 1.0), 0.0));
    assert!(!cone.is_inside(&Point::new(1.0, 2.0, 1.0), 0.0));
    assert!(!cone.is_inside(&Point::new(1.0, -1.5, 1.0), 0.0));
    assert!(cone.is_inside(&Point::new(1.0, -1.5, 1.0), 0.6));
}

#[test]
fn shift_moves_the_fills() {
    let mut cone = Cone::new(Point::origin(), 0.3, 0.7, 1.0, Rotation::identity());
    let offset = Vector::new(1.0, 2.0, -3.0);

    let mut before = Vec::new();
    cone.fill_border(&mut before, 0.1);
    let _ = cone.fill(&mut before, 0.1, true);

    Primitive::shift(&mut cone, &offset);

    let mut after = Vec::new();
    cone.fill_border(&mut after, 0.1);
    let _ = cone.fill(&mut after, 0.1, true);

    assert_eq!(before.len(), after.len());
    for (a, b) in before.iter().zip(after.iter()) {
        assert_relative_eq!(a + offset, *b, epsilon = 1.0e-5);
    }
}

#[test]
fn set_orientation_rotates_the_fills() {
    let mut cone = Cone::new(Point::origin(), 0.3, 0.7, 1.0, Rotation::identity());
    let rot = Rotation::from_axis_angle(&Vector::z_axis(), 0.7);

    let mut before = Vec::new();
    let _ = cone.fill(&mut before, 0.1, true);

    Primitive::set_orientation(&mut cone, rot);

    let mut after = Vec::new();
    let _ = cone.fill(&mut after, 0.1, true);

    assert_eq!(before.len(), after.len());
    for (a, b) in before.iter().zip(after.iter()) {
        assert_relative_eq!(rot * a, *b, epsilon = 1.0e-5);
    }
}

#[test]
fn fill_in_is_not_supported() {
    let cone = Cone::new(Point::origin(), 0.0, 1.0, 2.0, Rotation::identity());
    let mut points = Vec::new();

    let err = cone.fill_in(&mut points, 0.1, 3).unwrap_err();
    assert_eq!(
        err,
        PrimitiveError::NotImplemented {
            primitive: PrimitiveType::Cone,
            operation: "fill_in",
        }
    );
    assert_eq!(err.to_string(), "Cone::fill_in not implemented");
    assert!(points.is_empty());
}

#[test]
fn boxed_primitives_downcast_to_cones() {
    let primitives: Vec<Box<dyn Primitive>> = vec![
        Box::new(Cone::new(Point::origin(), 0.0, 1.0, 2.0, Rotation::identity())),
        Box::new(Cone::new(Point::origin(), 1.0, 1.0, 1.0, Rotation::identity())),
    ];

    let total: usize = primitives.iter().map(|p| p.count_fill(0.2)).sum();
    assert!(total > 0);

    for primitive in &primitives {
        assert_eq!(primitive.primitive_type(), PrimitiveType::Cone);
        assert!(primitive.as_cone().is_some());
    }
    assert!(primitives[1].as_cone().unwrap().is_cylinder());
}
