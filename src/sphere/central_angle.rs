use crate::types::RadianPoint;

/// Angle at the sphere's center between two points (spherical law of cosines)
///
/// The result is in radians and always within `[0, π]`. The `acos`
/// argument is clamped to `[-1, 1]` so that rounding for nearly identical
/// or nearly antipodal points cannot produce `NaN`.
pub fn central_angle(a: RadianPoint, b: RadianPoint) -> f64 {
    let lon_diff = b.lon - a.lon;

    let cos_angle = a.lat.sin() * b.lat.sin() + a.lat.cos() * b.lat.cos() * lon_diff.cos();

    cos_angle.clamp(-1.0, 1.0).acos()
}
