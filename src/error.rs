use crate::types::{Bound, CoordinateField};

/// Errors that abort a midpoint computation
///
/// Every error is fatal to the single computation. No partial result is
/// ever returned alongside one.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Too few latitude & longitude arguments for custom run (missing {field})")]
    MissingCoordinate { field: CoordinateField },

    #[error("Invalid {field}: {value}. It must be between {} and {}.", .bound.min, .bound.max)]
    OutOfRange {
        field: CoordinateField,
        value: f64,
        bound: Bound,
    },

    #[error("Invalid {field}: {value} is not a finite number")]
    NonFinite { field: CoordinateField, value: f64 },

    /// The two points are identical or antipodal, so the great circle
    /// through them is not unique
    #[error("Degenerate geometry: central angle {central_angle} rad has no unique great circle")]
    DegenerateGeometry { central_angle: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
