use approx::assert_relative_eq;
use sphprim3d::math::{Point, Real, Rotation, Vector};
use sphprim3d::na::RealField;
use sphprim3d::shape::{Cone, Primitive, Solidity};

#[test]
fn frustum_volume() {
    let (rt, rb, h) = (0.5, 1.5, 3.0);
    let cone = Cone::new(Point::origin(), rt, rb, h, Rotation::identity());

    let expected = Real::pi() * h * (rt * rt + rt * rb + rb * rb) / 3.0;
    assert_relative_eq!(cone.volume(0.1), expected, epsilon = 1.0e-4);
    // The spacing does not matter for a solid cone.
    assert_relative_eq!(cone.volume(0.1), cone.volume(0.5));
}

#[test]
fn cylinder_and_full_cone_volumes() {
    let cylinder = Cone::new(Point::origin(), 2.0, 2.0, 3.0, Rotation::identity());
    let full = Cone::new(Point::origin(), 0.0, 2.0, 3.0, Rotation::identity());

    assert_relative_eq!(cylinder.volume(0.1), Real::pi() * 4.0 * 3.0, epsilon = 1.0e-4);
    assert_relative_eq!(full.volume(0.1), Real::pi() * 4.0, epsilon = 1.0e-4);
    assert!(cylinder.is_cylinder());
    assert!(full.is_full_cone());
}

#[test]
fn hollow_volume_is_a_shell() {
    let (r, h, dx) = (1.0, 2.0, 0.1);
    let hollow = Cone::new(Point::origin(), r, r, h, Rotation::identity())
        .with_solidity(Solidity::Hollow);

    let inner = Real::pi() * (r - dx) * (r - dx) * (h - 2.0 * dx);
    assert_relative_eq!(
        hollow.volume(dx),
        Real::pi() * r * r * h - inner,
        epsilon = 1.0e-4
    );

    // A shell thicker than the cone is the full cone.
    let solid = Cone::new(Point::origin(), r, r, h, Rotation::identity());
    assert_relative_eq!(hollow.volume(5.0), solid.volume(5.0), epsilon = 1.0e-4);
}

#[test]
fn degenerate_cones_have_no_volume() {
    let flat = Cone::new(Point::origin(), 1.0, 1.0, 0.0, Rotation::identity());
    let needle = Cone::new(Point::origin(), 0.0, 0.0, 1.0, Rotation::identity());

    assert_eq!(flat.volume(0.1), 0.0);
    assert_eq!(needle.volume(0.1), 0.0);
    assert_eq!(Cone::default().volume(0.1), 0.0);
}

#[test]
fn full_cone_inertia() {
    let (r, h, density) = (1.0, 2.0, 3.0);
    let mut cone = Cone::new(Point::origin(), 0.0, r, h, Rotation::identity());
    let mass = cone.set_mass_from_density(0.1, density);
    cone.set_inertia(0.1);

    let transverse = mass * (3.0 * r * r / 20.0 + 3.0 * h * h / 80.0);
    assert_relative_eq!(
        cone.inertia(),
        Vector::new(transverse, transverse, 3.0 * mass * r * r / 10.0),
        max_relative = 1.0e-4
    );
    assert_relative_eq!(
        cone.center_of_mass(0.1),
        Point::new(0.0, 0.0, h / 4.0),
        epsilon = 1.0e-5
    );
}

#[test]
fn inertia_follows_the_supplied_mass() {
    let mut cone = Cone::new(Point::origin(), 0.3, 0.8, 1.2, Rotation::identity());
    cone.set_mass(1.0);
    cone.set_inertia(0.1);
    let unit = cone.inertia();

    cone.set_mass(4.0);
    // The stored inertia only changes when recomputed.
    assert_eq!(cone.inertia(), unit);

    cone.set_inertia(0.1);
    assert_relative_eq!(cone.inertia(), unit * 4.0, max_relative = 1.0e-5);
    assert_relative_eq!(cone.mass_properties(0.1).mass(), 4.0, epsilon = 1.0e-5);
}

#[test]
fn rotated_cone_center_of_mass() {
    let rot = Rotation::from_axis_angle(&Vector::y_axis(), Real::frac_pi_2());
    let cone = Cone::new(Point::new(1.0, 0.0, 0.0), 1.0, 1.0, 2.0, rot);

    assert_relative_eq!(
        cone.center_of_mass(0.1),
        Point::new(2.0, 0.0, 0.0),
        epsilon = 1.0e-5
    );
}
