use crate::error::{Error, Result};
use crate::types::{CoordinateField, GeoPoint, PointPair};

/// Dodger Stadium, Los Angeles
pub const DEMO_START: GeoPoint = GeoPoint::new(34.074, -118.2399);

/// Fenway Park, Boston
pub const DEMO_END: GeoPoint = GeoPoint::new(42.3469, -71.097);

/// Number of intermediary points used for the demo run
pub const DEMO_POINT_COUNT: u32 = 6;

/// Coordinates as collected from a caller, any of which may be absent
///
/// This is the record an input layer (command line, form, request body)
/// fills in before handing over to the calculator. Use
/// [`resolve`](Self::resolve) to turn it into a [`PointPair`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CoordinateInput {
    pub latitude_a: Option<f64>,
    pub longitude_a: Option<f64>,
    pub latitude_b: Option<f64>,
    pub longitude_b: Option<f64>,
    pub n: Option<u32>,
}

/// A [`PointPair`] and point count ready for computation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedInput {
    pub pair: PointPair,
    pub n: Option<u32>,
    /// `true` if no coordinates were given and the demo route was used
    pub is_demo: bool,
}

impl CoordinateInput {
    fn get(&self, field: CoordinateField) -> Option<f64> {
        match field {
            CoordinateField::LatitudeA => self.latitude_a,
            CoordinateField::LongitudeA => self.longitude_a,
            CoordinateField::LatitudeB => self.latitude_b,
            CoordinateField::LongitudeB => self.longitude_b,
        }
    }

    /// Turn the collected coordinates into a point pair
    ///
    /// If none of the four coordinates is present the demo route from
    /// [`DEMO_START`] to [`DEMO_END`] with [`DEMO_POINT_COUNT`] points is
    /// returned. If only some are present, the first missing one (in
    /// [`CoordinateField::ALL`] order) is reported. Values are not range
    /// checked here.
    pub fn resolve(&self) -> Result<ResolvedInput> {
        if CoordinateField::ALL.iter().all(|&f| self.get(f).is_none()) {
            return Ok(ResolvedInput {
                pair: PointPair::new(DEMO_START, DEMO_END),
                n: Some(DEMO_POINT_COUNT),
                is_demo: true,
            });
        }

        Ok(ResolvedInput {
            pair: self.require_all()?,
            n: self.n,
            is_demo: false,
        })
    }

    /// Build a point pair, failing on the first missing coordinate
    fn require_all(&self) -> Result<PointPair> {
        let mut values = [0.0; 4];
        for (value, field) in values.iter_mut().zip(CoordinateField::ALL) {
            *value = self.get(field).ok_or(Error::MissingCoordinate { field })?;
        }
        let [latitude_a, longitude_a, latitude_b, longitude_b] = values;

        Ok(PointPair::new(
            GeoPoint::new(latitude_a, longitude_a),
            GeoPoint::new(latitude_b, longitude_b),
        ))
    }
}

/// Strict conversion: every coordinate must be present, there is no demo
/// fallback
impl TryFrom<CoordinateInput> for PointPair {
    type Error = Error;

    fn try_from(input: CoordinateInput) -> Result<Self> {
        input.require_all()
    }
}
