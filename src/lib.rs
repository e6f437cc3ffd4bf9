#![doc = include_str!("../README.md")]

pub use crate::calculator::{Calculator, DEFAULT_EPSILON, compute_points};
pub use crate::error::{Error, Result};
pub use crate::sphere::distance::{EARTH_RADIUS_KM, distance_km};
pub use crate::types::*;
pub use crate::validate::validate;

mod calculator;
mod error;
pub mod sphere;
mod types;
mod validate;
