use crate::sphere::distance::distance_km;
use crate::types::GeoPoint;

/// Outcome of a single midpoint computation
///
/// All points are in degrees. `intermediary_points` is ordered from point
/// `a` towards point `b` and is empty unless more than one point was
/// requested.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComputationResult {
    pub midpoint: GeoPoint,
    /// Number of intermediary points as requested by the caller
    pub n: Option<u32>,
    pub intermediary_points: Vec<GeoPoint>,
    /// Angle between the two endpoints at the sphere's center, in radians
    pub central_angle: f64,
    /// Great-circle distance using the calculator's sphere radius
    pub distance_km: f64,
}

impl ComputationResult {
    /// Great-circle distance between the endpoints on a sphere of the given radius
    pub fn distance_on_sphere(&self, radius_km: f64) -> f64 {
        distance_km(self.central_angle, radius_km)
    }

    pub fn has_intermediary_points(&self) -> bool {
        !self.intermediary_points.is_empty()
    }
}
