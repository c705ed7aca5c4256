//! Low-level helpers placing particles on circles and disks.
//!
//! All points are generated in a local frame where the circles are
//! orthogonal to the `z` axis and centered on it.

use crate::math::{Point, Real};
use na::{ComplexField, RealField};
use num::Zero;

/// The number of particles placed on a circle of the given radius.
///
/// This is the circumference divided by `dx`, rounded to the nearest
/// integer. A circle of radius smaller than `dx / 2` collapses to a single
/// particle on the axis.
#[inline]
pub fn ring_size(radius: Real, dx: Real) -> usize {
    if radius < dx / 2.0 {
        1
    } else {
        ((Real::two_pi() * radius / dx).round() as usize).max(1)
    }
}

/// Pushes the particles of a circle of radius `radius` at height `z`.
///
/// The first particle is on the `+x` axis and the others follow
/// counterclockwise. Returns the number of pushed particles.
pub fn push_ring(radius: Real, z: Real, dx: Real, out: &mut Vec<Point>) -> usize {
    let nsubdiv = ring_size(radius, dx);

    if nsubdiv == 1 {
        out.push(Point::new(0.0, 0.0, z));
        return 1;
    }

    let dtheta = Real::two_pi() / nsubdiv as Real;
    let mut curr_theta = Real::zero();

    for _ in 0..nsubdiv {
        out.push(Point::new(
            ComplexField::cos(curr_theta) * radius,
            ComplexField::sin(curr_theta) * radius,
            z,
        ));
        curr_theta += dtheta;
    }

    nsubdiv
}

/// The radii of the concentric circles sampling a disk of radius `radius`, without its rim.
///
/// The disk is sampled by `ceil(radius / dx)` circles evenly spaced from
/// the center, the outermost one (the rim) being left out.
pub fn disk_radii(radius: Real, dx: Real) -> impl Iterator<Item = Real> {
    let nrings = (radius / dx).ceil().max(1.0) as usize;
    let dr = radius / nrings as Real;

    (0..nrings).map(move |i| i as Real * dr)
}
