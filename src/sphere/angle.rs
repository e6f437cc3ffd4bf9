//! Degree/radian conversion

use std::f64::consts::PI;

/// Convert degrees to radians as `degrees * π / 180`
pub fn to_radians(degrees: f64) -> f64 {
    (degrees * PI) / 180.0
}

/// Convert radians to degrees as `radians * (180 / π)`
pub fn to_degrees(radians: f64) -> f64 {
    radians * (180.0 / PI)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn known_angles() {
        assert_eq!(to_radians(0.0), 0.0);
        assert_eq!(to_radians(180.0), PI);
        assert!((to_radians(90.0) - FRAC_PI_2).abs() < 1e-15);
        assert!((to_radians(-45.0) + FRAC_PI_4).abs() < 1e-15);

        assert_eq!(to_degrees(0.0), 0.0);
        assert!((to_degrees(PI) - 180.0).abs() < 1e-12);
        assert!((to_degrees(-FRAC_PI_2) + 90.0).abs() < 1e-12);
    }

    #[test]
    fn round_trip() {
        for degrees in [-180.0, -118.1537, -0.29238, 0.0, 33.91714, 90.0, 720.5] {
            assert!((to_degrees(to_radians(degrees)) - degrees).abs() < 1e-12);
        }
    }
}
