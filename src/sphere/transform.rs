use crate::types::RadianPoint;

/// A point in Cartesian space, usually on the unit sphere
///
/// Uses the convention `x = cos(lat)·cos(lon)`, `y = cos(lat)·sin(lon)`,
/// `z = sin(lat)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartesianPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl CartesianPoint {
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn dot(&self, other: &CartesianPoint) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

/// Place a lat/lon point on the unit sphere
pub fn to_cartesian(point: RadianPoint) -> CartesianPoint {
    CartesianPoint {
        x: point.lat.cos() * point.lon.cos(),
        y: point.lat.cos() * point.lon.sin(),
        z: point.lat.sin(),
    }
}

/// Convert a Cartesian point back to lat/lon in radians
///
/// The vector does not need to be normalized. Longitude is returned in
/// `(-π, π]`.
pub fn to_lat_long_radians(point: CartesianPoint) -> RadianPoint {
    let CartesianPoint { x, y, z } = point;
    RadianPoint {
        lat: z.atan2((x.powi(2) + y.powi(2)).sqrt()),
        lon: y.atan2(x),
    }
}
