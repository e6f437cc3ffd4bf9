//! Great-circle midpoint and intermediary point computation

use crate::error::{Error, Result};
use crate::sphere::distance::{EARTH_RADIUS_KM, distance_km};
use crate::sphere::slerp::is_degenerate;
use crate::sphere::{central_angle, interpolate, point_at_fraction, to_lat_long_radians};
use crate::types::{ComputationResult, PointPair};
use crate::validate::validate;

/// Default threshold below which `|sin(central_angle)|` counts as degenerate
///
/// The law of cosines yields angles of up to ~2e-8 rad for identical
/// inputs, so the threshold has to sit above that.
pub const DEFAULT_EPSILON: f64 = 1e-7;

/// Midpoint calculator with builder-style configuration
///
/// # Example
///
/// ```
/// use great_circle_midpoint::{Calculator, GeoPoint, PointPair};
///
/// let pair = PointPair::new(
///     GeoPoint::new(33.91714, -118.15370),
///     GeoPoint::new(51.48907, -0.29238),
/// );
///
/// let result = Calculator::new().with_radius_km(6378.137).compute(&pair, Some(5))?;
/// assert_eq!(result.intermediary_points.len(), 5);
/// # Ok::<(), great_circle_midpoint::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculator {
    epsilon: f64,
    radius_km: f64,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a calculator using the mean Earth radius and the default
    /// degeneracy threshold
    pub fn new() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            radius_km: EARTH_RADIUS_KM,
        }
    }

    /// Override the threshold used to reject identical or antipodal points
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Override the sphere radius used for the distance in the result
    pub fn with_radius_km(mut self, radius_km: f64) -> Self {
        self.radius_km = radius_km;
        self
    }

    /// Threshold for `|sin(central_angle)|` below which points are rejected
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Sphere radius used for `ComputationResult::distance_km`
    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }

    /// Compute the midpoint and `n` intermediary points between `pair.a`
    /// and `pair.b`
    ///
    /// The midpoint is always computed. Intermediary points are only
    /// computed for `n > 1`, since a single point at fraction `1/2` would
    /// just repeat the midpoint. They are spaced at fractions `i / (n + 1)`.
    ///
    /// Fails if any coordinate is out of range, or if the two points are
    /// identical or antipodal.
    pub fn compute(&self, pair: &PointPair, n: Option<u32>) -> Result<ComputationResult> {
        validate(pair)?;

        let a = pair.a.to_radians();
        let b = pair.b.to_radians();

        let central_angle = central_angle(a, b);
        tracing::debug!(central_angle = central_angle, "computed central angle");

        if is_degenerate(central_angle, self.epsilon) {
            return Err(Error::DegenerateGeometry { central_angle });
        }

        let midpoint = to_lat_long_radians(point_at_fraction(0.5, a, b, central_angle)).to_degrees();

        let intermediary_points = match n {
            Some(n) if n > 1 => {
                tracing::debug!(n = n, "computing intermediary points");
                interpolate(n, a, b, central_angle)
                    .into_iter()
                    .map(|point| to_lat_long_radians(point).to_degrees())
                    .collect()
            }
            Some(1) => {
                tracing::debug!("single intermediary point coincides with the midpoint, skipping");
                Vec::new()
            }
            _ => Vec::new(),
        };

        Ok(ComputationResult {
            midpoint,
            n,
            intermediary_points,
            central_angle,
            distance_km: distance_km(central_angle, self.radius_km),
        })
    }
}

/// Compute the midpoint and intermediary points using default settings
///
/// See [`Calculator::compute`].
pub fn compute_points(pair: &PointPair, n: Option<u32>) -> Result<ComputationResult> {
    Calculator::new().compute(pair, n)
}
