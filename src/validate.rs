use crate::error::{Error, Result};
use crate::types::{CoordinateField, PointPair};

/// Check that all four coordinates of a pair are within range
///
/// Coordinates are checked in [`CoordinateField::ALL`] order and the first
/// violation is returned. Latitudes must be within `[-90, 90]` and
/// longitudes within `[-180, 180]`, both inclusive. `NaN` and infinite
/// values are rejected as well.
pub fn validate(pair: &PointPair) -> Result<()> {
    for field in CoordinateField::ALL {
        let value = pair.get(field);
        if !value.is_finite() {
            return Err(Error::NonFinite { field, value });
        }

        let bound = field.bound();
        if !bound.contains(value) {
            return Err(Error::OutOfRange {
                field,
                value,
                bound,
            });
        }
    }

    Ok(())
}
