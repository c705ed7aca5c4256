/*!
sphprim
========

**sphprim** provides analytic geometric primitives used to initialize the
particles of a smoothed-particle-hydrodynamics simulation: each primitive
can seed fluid particles on a regular lattice inside its volume, seed
boundary particles on its surface, answer point-containment queries, and
hand its volume and inertia to a rigid-body engine.

```
# #[cfg(feature = "f32")] {
use sphprim3d::math::{Point, Rotation};
use sphprim3d::shape::{Cone, Primitive};

// A cone with its apex at the top.
let cone = Cone::new(Point::origin(), 0.0, 1.0, 2.0, Rotation::identity());
let mut particles = Vec::new();
let interior = cone.fill(&mut particles, 0.1, true);
cone.fill_border(&mut particles, 0.1);

assert!(interior > 0);
assert!(cone.is_inside(&Point::new(0.0, 0.0, 1.0), 0.0));
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(all(feature = "f32", feature = "f64"))]
core::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

#[cfg(feature = "rapier")]
pub extern crate rapier3d;

pub mod body;
pub mod bounding_volume;
pub mod mass_properties;
pub mod math;
pub mod query;
pub mod sampling;
pub mod shape;
pub mod utils;
