//! Spherical linear interpolation along a great-circle arc

use crate::sphere::CartesianPoint;
use crate::types::RadianPoint;

/// Check whether `sin(central_angle)` is too small to interpolate with
///
/// This is the case for identical and antipodal points, where the slerp
/// weights would divide by (almost) zero.
pub fn is_degenerate(central_angle: f64, epsilon: f64) -> bool {
    central_angle.sin().abs() < epsilon
}

/// Point at fraction `f` of the great-circle arc from `a` to `b`
///
/// `f = 0` yields `a`, `f = 1` yields `b` and `f = 0.5` the midpoint.
/// `central_angle` must be the angle between `a` and `b` as returned by
/// [`central_angle`](crate::sphere::central_angle). The result is only
/// meaningful if the angle is not [degenerate](is_degenerate); otherwise
/// its components are `NaN` or wildly inaccurate.
pub fn point_at_fraction(
    f: f64,
    a: RadianPoint,
    b: RadianPoint,
    central_angle: f64,
) -> CartesianPoint {
    let sin_angle = central_angle.sin();
    let weight_a = ((1.0 - f) * central_angle).sin() / sin_angle;
    let weight_b = (f * central_angle).sin() / sin_angle;

    let x = weight_a * a.lat.cos() * a.lon.cos() + weight_b * b.lat.cos() * b.lon.cos();
    let y = weight_a * a.lat.cos() * a.lon.sin() + weight_b * b.lat.cos() * b.lon.sin();
    let z = weight_a * a.lat.sin() + weight_b * b.lat.sin();

    CartesianPoint { x, y, z }
}

/// Evenly spaced fractions strictly between 0 and 1
///
/// Yields `i / (n + 1)` for `i = 1..=n`, so the endpoints themselves are
/// never included. For odd `n` the middle fraction is `0.5`.
pub fn fractions(n: u32) -> impl Iterator<Item = f64> {
    let step_size = 1.0 / (f64::from(n) + 1.0);
    (1..=n).map(move |i| f64::from(i) * step_size)
}

/// Compute `n` points evenly spaced along the arc from `a` to `b`
///
/// The points are ordered from `a` towards `b` and exclude both endpoints.
pub fn interpolate(
    n: u32,
    a: RadianPoint,
    b: RadianPoint,
    central_angle: f64,
) -> Vec<CartesianPoint> {
    fractions(n)
        .map(|f| {
            tracing::trace!(f = f, "interpolating");
            point_at_fraction(f, a, b, central_angle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeoPoint;
    use crate::sphere::{central_angle, to_cartesian, to_lat_long_radians};
    use std::f64::consts::PI;

    const LOS_ANGELES: GeoPoint = GeoPoint::new(33.91714, -118.15370);
    const LONDON: GeoPoint = GeoPoint::new(51.48907, -0.29238);

    fn setup() -> (RadianPoint, RadianPoint, f64) {
        let a = LOS_ANGELES.to_radians();
        let b = LONDON.to_radians();
        (a, b, central_angle(a, b))
    }

    #[test]
    fn fraction_steps() {
        let steps: Vec<_> = fractions(3).collect();
        assert_eq!(steps, [0.25, 0.5, 0.75]);

        assert_eq!(fractions(0).count(), 0);
        assert_eq!(fractions(1).collect::<Vec<_>>(), [0.5]);
        assert_eq!(fractions(5).nth(2), Some(0.5));
    }

    #[test]
    fn fractions_are_strictly_inside_unit_interval() {
        let steps: Vec<_> = fractions(100).collect();
        assert_eq!(steps.len(), 100);
        assert!(steps.iter().all(|&f| f > 0.0 && f < 1.0));
        assert!(steps.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn endpoints_are_reconstructed() {
        let (a, b, angle) = setup();

        let start = to_lat_long_radians(point_at_fraction(0.0, a, b, angle)).to_degrees();
        assert!((start.latitude - LOS_ANGELES.latitude).abs() < 1e-9);
        assert!((start.longitude - LOS_ANGELES.longitude).abs() < 1e-9);

        let end = to_lat_long_radians(point_at_fraction(1.0, a, b, angle)).to_degrees();
        assert!((end.latitude - LONDON.latitude).abs() < 1e-9);
        assert!((end.longitude - LONDON.longitude).abs() < 1e-9);
    }

    #[test]
    fn points_stay_on_unit_sphere() {
        let (a, b, angle) = setup();
        for point in interpolate(25, a, b, angle) {
            assert!((point.norm() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn points_move_monotonically_from_a_to_b() {
        let (a, b, angle) = setup();
        let start = to_cartesian(a);

        let points = interpolate(50, a, b, angle);
        assert_eq!(points.len(), 50);

        // Angular distance from `a` must grow with every step and each step
        // must cover the same arc
        let distances: Vec<_> = points
            .iter()
            .map(|p| p.dot(&start).clamp(-1.0, 1.0).acos())
            .collect();
        assert!(distances.windows(2).all(|w| w[0] < w[1]));

        let step = angle / 51.0;
        for (i, distance) in distances.iter().enumerate() {
            assert!((distance - step * (i + 1) as f64).abs() < 1e-6);
        }
    }

    #[test]
    fn interpolate_returns_exactly_n_points() {
        let (a, b, angle) = setup();
        for n in [1, 2, 5, 18, 100] {
            assert_eq!(interpolate(n, a, b, angle).len(), n as usize);
        }
        assert!(interpolate(0, a, b, angle).is_empty());
    }

    #[test]
    fn degenerate_angles() {
        assert!(is_degenerate(0.0, 1e-7));
        assert!(is_degenerate(PI, 1e-7));
        assert!(is_degenerate(2e-8, 1e-7));
        assert!(!is_degenerate(0.01, 1e-7));
        assert!(!is_degenerate(PI / 2.0, 1e-7));
    }

    #[test]
    fn degenerate_angle_yields_nan() {
        let a = LOS_ANGELES.to_radians();
        let point = point_at_fraction(0.5, a, a, 0.0);
        assert!(point.x.is_nan());
    }
}
