//! Error types for wall analysis.
//!
//! Construction and analysis return structured errors rather than panicking
//! or producing `inf`/`NaN` results.

use thiserror::Error;

/// Error raised while building or analysing a wall.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WallError {
    /// A physical quantity is non-positive, non-finite or out of range.
    #[error("invalid parameter: {quantity} = {value}")]
    InvalidParameter { quantity: &'static str, value: f64 },

    /// A wall needs at least one layer.
    #[error("a wall needs at least one layer")]
    EmptyWall,

    /// The environment-to-environment matrix cannot be inverted for the
    /// periodic quantities (zero or non-finite off-diagonal term).
    #[error("degenerate transfer matrix: {reason}")]
    DegenerateTransferMatrix { reason: String },

    /// A computed profile does not end on its configured boundary value.
    #[error("{quantity} boundary mismatch: expected {expected}, got {actual}")]
    BoundaryConsistencyViolation {
        quantity: &'static str,
        expected: f64,
        actual: f64,
    },

    /// A wall-set file references a layer id that is not defined.
    #[error("unknown layer id: {0}")]
    UnknownLayer(String),
}

/// Result alias for wall analysis.
pub type Result<T> = std::result::Result<T, WallError>;

/// Relative tolerance for boundary self-checks.
pub const BOUNDARY_TOLERANCE: f64 = 1e-6;

/// Rejects values that are not finite and strictly positive.
pub(crate) fn ensure_positive(quantity: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(WallError::InvalidParameter { quantity, value })
    }
}

/// Rejects values that are not finite or not strictly above `min`.
pub(crate) fn ensure_above(quantity: &'static str, value: f64, min: f64) -> Result<f64> {
    if value.is_finite() && value > min {
        Ok(value)
    } else {
        Err(WallError::InvalidParameter { quantity, value })
    }
}

/// Rejects fractions outside [0, 1].
pub(crate) fn ensure_fraction(quantity: &'static str, value: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(WallError::InvalidParameter { quantity, value })
    }
}

/// Checks that `actual` matches the configured boundary value `expected`.
pub(crate) fn ensure_boundary(quantity: &'static str, expected: f64, actual: f64) -> Result<()> {
    let tol = BOUNDARY_TOLERANCE * expected.abs().max(1.0);
    if (actual - expected).abs() <= tol {
        Ok(())
    } else {
        Err(WallError::BoundaryConsistencyViolation {
            quantity,
            expected,
            actual,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_positive() {
        assert_eq!(ensure_positive("thickness", 0.1), Ok(0.1));
        assert!(ensure_positive("thickness", 0.0).is_err());
        assert!(ensure_positive("thickness", -1.0).is_err());
        assert!(ensure_positive("thickness", f64::NAN).is_err());
        assert!(ensure_positive("thickness", f64::INFINITY).is_err());
    }

    #[test]
    fn test_ensure_above() {
        assert_eq!(ensure_above("temp", -10.0, -20.0), Ok(-10.0));
        assert!(ensure_above("temp", -20.0, -20.0).is_err());
        assert!(ensure_above("temp", f64::NEG_INFINITY, -20.0).is_err());
        assert!(ensure_above("temp", f64::NAN, -20.0).is_err());
    }

    #[test]
    fn test_ensure_fraction() {
        assert!(ensure_fraction("rh", 0.0).is_ok());
        assert!(ensure_fraction("rh", 1.0).is_ok());
        assert!(ensure_fraction("rh", 1.01).is_err());
        assert!(ensure_fraction("rh", f64::NAN).is_err());
    }

    #[test]
    fn test_ensure_boundary_relative() {
        assert!(ensure_boundary("temperature", -5.0, -5.0 + 1e-9).is_ok());
        assert!(ensure_boundary("pressure", 2000.0, 2000.0 + 1e-4).is_ok());
        let err = ensure_boundary("temperature", -5.0, -4.9).unwrap_err();
        assert!(matches!(
            err,
            WallError::BoundaryConsistencyViolation {
                quantity: "temperature",
                ..
            }
        ));
    }

    #[test]
    fn test_error_messages() {
        let err = WallError::InvalidParameter {
            quantity: "density",
            value: -2.0,
        };
        assert_eq!(err.to_string(), "invalid parameter: density = -2");
        assert_eq!(
            WallError::UnknownLayer("xlam".into()).to_string(),
            "unknown layer id: xlam"
        );
    }
}
