use crate::sphere::angle::{to_degrees, to_radians};

/// A geographic coordinate in degrees
///
/// Latitude is expected in `[-90, 90]` and longitude in `[-180, 180]`.
/// Points coming out of a computation always satisfy these bounds. Points
/// constructed by hand are only checked when they pass through
/// [`validate`](crate::validate).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Convert both components to radians
    pub fn to_radians(self) -> RadianPoint {
        RadianPoint {
            lat: to_radians(self.latitude),
            lon: to_radians(self.longitude),
        }
    }
}

/// A geographic coordinate in radians
///
/// Carries no range invariant of its own; it is only ever derived from a
/// validated [`GeoPoint`] or from the unit-sphere transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadianPoint {
    /// Latitude in radians
    pub lat: f64,
    /// Longitude in radians
    pub lon: f64,
}

impl RadianPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Convert both components to degrees
    pub fn to_degrees(self) -> GeoPoint {
        GeoPoint {
            latitude: to_degrees(self.lat),
            longitude: to_degrees(self.lon),
        }
    }
}

impl From<GeoPoint> for RadianPoint {
    fn from(point: GeoPoint) -> Self {
        point.to_radians()
    }
}

impl From<RadianPoint> for GeoPoint {
    fn from(point: RadianPoint) -> Self {
        point.to_degrees()
    }
}
