//! The error type shared by plane construction, serialization, and
//! rendering.

use std::io;

/// Everything that can go wrong while building, persisting, or
/// rendering a plane.  Evaluation itself never fails; a point that is
/// already outside the escape radius is reported through the
/// evaluator's sentinel value, not through this type.
#[derive(Debug, Fail)]
pub enum PlaneError {
    /// A coordinate region was empty on at least one axis, or an axis
    /// had too few points to derive a step size from.
    #[fail(display = "invalid bounds: {}", _0)]
    InvalidBounds(String),
    /// A value that must be numeric, or a record of such values, could
    /// not be read as one.  Covers malformed CSV/JSON documents and
    /// unrecognized color-map names.
    #[fail(display = "invalid parameter: {}", _0)]
    InvalidParameter(String),
    /// An underlying file operation failed.
    #[fail(display = "i/o error: {}", _0)]
    Io(#[fail(cause)] io::Error),
}

impl From<io::Error> for PlaneError {
    fn from(err: io::Error) -> PlaneError {
        PlaneError::Io(err)
    }
}
