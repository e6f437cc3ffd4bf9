use crate::types::GeoPoint;
use std::fmt;

/// The two endpoints of a great-circle arc, `a` being the start
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointPair {
    pub a: GeoPoint,
    pub b: GeoPoint,
}

impl PointPair {
    pub const fn new(a: GeoPoint, b: GeoPoint) -> Self {
        Self { a, b }
    }

    /// Get the value of a single coordinate
    pub fn get(&self, field: CoordinateField) -> f64 {
        match field {
            CoordinateField::LatitudeA => self.a.latitude,
            CoordinateField::LongitudeA => self.a.longitude,
            CoordinateField::LatitudeB => self.b.latitude,
            CoordinateField::LongitudeB => self.b.longitude,
        }
    }
}

/// One of the four coordinates making up a [`PointPair`]
///
/// The declaration order is the order in which coordinates are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateField {
    LatitudeA,
    LongitudeA,
    LatitudeB,
    LongitudeB,
}

impl CoordinateField {
    pub const ALL: [CoordinateField; 4] = [
        CoordinateField::LatitudeA,
        CoordinateField::LongitudeA,
        CoordinateField::LatitudeB,
        CoordinateField::LongitudeB,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CoordinateField::LatitudeA => "latitude_a",
            CoordinateField::LongitudeA => "longitude_a",
            CoordinateField::LatitudeB => "latitude_b",
            CoordinateField::LongitudeB => "longitude_b",
        }
    }

    pub fn is_latitude(self) -> bool {
        matches!(self, CoordinateField::LatitudeA | CoordinateField::LatitudeB)
    }

    /// Inclusive range of valid values in degrees
    pub fn bound(self) -> Bound {
        if self.is_latitude() {
            Bound::LATITUDE
        } else {
            Bound::LONGITUDE
        }
    }
}

impl fmt::Display for CoordinateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inclusive range of valid degrees for a coordinate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bound {
    pub min: f64,
    pub max: f64,
}

impl Bound {
    pub const LATITUDE: Bound = Bound {
        min: -90.0,
        max: 90.0,
    };

    pub const LONGITUDE: Bound = Bound {
        min: -180.0,
        max: 180.0,
    };

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.min, self.max)
    }
}
