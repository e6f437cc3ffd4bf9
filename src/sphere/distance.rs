/// Mean Earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Arc length along a great circle
///
/// `central_angle` is in radians. The result has the unit of `radius_km`.
pub fn distance_km(central_angle: f64, radius_km: f64) -> f64 {
    central_angle * radius_km
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn half_circumference() {
        let distance = distance_km(PI, EARTH_RADIUS_KM);
        assert!((distance - 20_015.086_796_020_572).abs() < 1e-6);
    }

    #[test]
    fn zero_angle() {
        assert_eq!(distance_km(0.0, EARTH_RADIUS_KM), 0.0);
    }
}
