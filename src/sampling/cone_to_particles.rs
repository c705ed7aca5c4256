use crate::math::{Point, Real};
use crate::query::PointQuery;
use crate::sampling::utils;
use crate::shape::Cone;
use na::Point2;

/// Relative margin, in units of `dx`, separating the volume lattice from the surface.
const INTERIOR_MARGIN: Real = 1.0e-3;

impl Cone {
    /// Appends particles sampling the lateral surface of this cone, and
    /// optionally its bottom and top disks.
    ///
    /// The lateral surface is sampled by `ceil(slant_height / dx)` steps
    /// along a meridian, with one circle per step from `z = 0` to
    /// `z = height` included. A circle of radius smaller than `dx / 2` is a
    /// single particle on the axis. A disk is only sampled if its radius is
    /// at least `dx / 2`, by concentric circles without its rim, which is
    /// already part of the lateral surface.
    ///
    /// A disk circle closer than `dx / 2` to a circle already placed is
    /// left out, and so is an axis particle closer than `dx / 2` to the
    /// previous one. No two particles are then closer than `dx / 2`, as long
    /// as the slant height is at least `dx / 2`.
    ///
    /// Nothing is appended for a degenerate cone or an invalid spacing.
    pub fn fill_border_with_caps(
        &self,
        points: &mut Vec<Point>,
        dx: Real,
        bottom: bool,
        top: bool,
    ) {
        if !crate::utils::is_valid_spacing(dx) {
            log::warn!("Cone border fill skipped: invalid particle spacing {}.", dx);
            return;
        }

        if self.is_degenerate() {
            log::debug!("Cone border fill skipped: degenerate cone {:?}.", self);
            return;
        }

        let height = self.height();
        let half_dx = dx / 2.0;
        let nsteps = (self.slant_height() / dx).ceil().max(1.0) as usize;
        // Every placed circle, as its (distance to the axis, height) in the meridian half-plane.
        let mut meridian: Vec<Point2<Real>> = Vec::new();
        let mut local = Vec::new();

        for k in 0..=nsteps {
            let z = if k == nsteps {
                height
            } else {
                k as Real * height / nsteps as Real
            };
            let radius = self.radius_at(z);
            let sample = meridian_sample(radius, z, dx);

            if sample.x == 0.0
                && meridian
                    .last()
                    .is_some_and(|prev| na::distance(prev, &sample) < half_dx)
            {
                continue;
            }

            let _ = utils::push_ring(radius, z, dx, &mut local);
            meridian.push(sample);
        }
        let nlateral = local.len();

        let caps = [
            (bottom, self.radius_bottom(), 0.0),
            (top, self.radius_top(), height),
        ];

        for (_, cap_radius, z) in caps
            .into_iter()
            .filter(|(enabled, cap_radius, _)| *enabled && *cap_radius >= half_dx)
        {
            for radius in utils::disk_radii(cap_radius, dx) {
                let sample = meridian_sample(radius, z, dx);

                if meridian
                    .iter()
                    .all(|placed| na::distance(placed, &sample) >= half_dx)
                {
                    let _ = utils::push_ring(radius, z, dx, &mut local);
                    meridian.push(sample);
                }
            }
        }

        let pos = self.position();
        points.extend(local.iter().map(|pt| pos * pt));

        log::debug!(
            "Cone border fill: {} lateral and {} cap particles (dx = {}).",
            nlateral,
            local.len() - nlateral,
            dx
        );
    }

    /// Counts the nodes of the cubic lattice of spacing `dx` lying strictly
    /// inside this cone, appending them to `points` if `fill` is `true`.
    ///
    /// The lattice is aligned with the local frame of the cone and has a node
    /// at the center of its bottom disk. Nodes closer than `dx * 1.0e-3` to
    /// the surface are excluded: the surface belongs to the border fill.
    pub fn fill_lattice(&self, points: &mut Vec<Point>, dx: Real, fill: bool) -> usize {
        if !crate::utils::is_valid_spacing(dx) {
            log::warn!("Cone volume fill skipped: invalid particle spacing {}.", dx);
            return 0;
        }

        if self.is_degenerate() {
            log::debug!("Cone volume fill skipped: degenerate cone {:?}.", self);
            return 0;
        }

        let margin = dx * INTERIOR_MARGIN;
        let nr = (self.max_radius() / dx).floor() as i64;
        let nz = (self.height() / dx).floor() as i64;
        let pos = self.position();
        let mut count = 0;

        for k in 0..=nz {
            for j in -nr..=nr {
                for i in -nr..=nr {
                    let pt = Point::new(i as Real * dx, j as Real * dx, k as Real * dx);

                    if self.contains_local_point(&pt, -margin) {
                        if fill {
                            points.push(pos * pt);
                        }
                        count += 1;
                    }
                }
            }
        }

        log::debug!(
            "Cone volume fill: {} lattice nodes inside (dx = {}, stored: {}).",
            count,
            dx,
            fill
        );

        count
    }
}

/// The trace of a circle of particles in the meridian half-plane.
///
/// Circles collapsed to a single particle lie on the axis.
fn meridian_sample(radius: Real, z: Real, dx: Real) -> Point2<Real> {
    if utils::ring_size(radius, dx) == 1 {
        Point2::new(0.0, z)
    } else {
        Point2::new(radius, z)
    }
}
