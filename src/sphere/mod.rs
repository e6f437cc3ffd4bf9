//! Low-level spherical geometry on the unit sphere
//!
//! These are the building blocks used by [`Calculator`](crate::Calculator).
//! They perform no validation; inputs are expected to come from validated
//! [`GeoPoint`](crate::GeoPoint)s.

pub mod angle;
pub mod central_angle;
pub mod distance;
pub mod slerp;
pub mod transform;

pub use central_angle::central_angle;
pub use slerp::{fractions, interpolate, point_at_fraction};
pub use transform::{CartesianPoint, to_cartesian, to_lat_long_radians};
