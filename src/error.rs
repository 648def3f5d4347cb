//! Error types for the delay calculator.

use thiserror::Error;

/// Rejected input to one of the delay computations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A divisor of one of the formulas is zero.
    #[error("{name} must not be zero")]
    DivisionByZero {
        /// Name of the offending parameter
        name: &'static str,
    },

    /// A value is negative, NaN, infinite, or otherwise outside its domain.
    #[error("invalid {name}: {value}")]
    InvalidParameter {
        /// Name of the offending parameter
        name: &'static str,
        /// Value as supplied
        value: f64,
    },

    /// `significant_digits * 10^exponent` is not a finite positive speed.
    #[error("propagation speed {significant_digits}e{exponent} m/s is out of range")]
    SpeedOutOfRange {
        /// Significant digits as supplied
        significant_digits: f64,
        /// Exponent as supplied
        exponent: i32,
    },

    /// Valid inputs produce a delay too large to represent.
    #[error("{name} of {value} s is out of range")]
    DelayOutOfRange {
        /// Name of the delay component
        name: &'static str,
        /// Delay as computed
        value: f64,
    },

    /// Text is not a speed in scientific notation.
    #[error("cannot parse propagation speed {0:?}, expected something like 2.5e8")]
    ParseSpeed(String),
}

/// Result alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Accepts finite divisors strictly above zero.
pub(crate) fn ensure_divisor(name: &'static str, value: f64) -> Result<f64> {
    if value == 0.0 {
        return Err(Error::DivisionByZero { name });
    }
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidParameter { name, value });
    }

    Ok(value)
}

/// Accepts finite values strictly above zero.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::InvalidParameter { name, value });
    }

    Ok(value)
}

/// Rejects delays that overflowed to infinity.
pub(crate) fn ensure_finite_delay(name: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::DelayOutOfRange { name, value });
    }

    Ok(value)
}

/// Accepts finite values at or above zero.
pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidParameter { name, value });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn test_ensure_divisor() {
        assert_eq!(ensure_divisor("rate", 1.8), Ok(1.8));
        assert_eq!(
            ensure_divisor("rate", 0.0),
            Err(Error::DivisionByZero { name: "rate" })
        );
        assert_eq!(
            ensure_divisor("rate", -0.0),
            Err(Error::DivisionByZero { name: "rate" })
        );
        assert_eq!(
            ensure_divisor("rate", -3.0),
            Err(Error::InvalidParameter { name: "rate", value: -3.0 })
        );
        assert!(matches!(
            ensure_divisor("rate", f64::NAN),
            Err(Error::InvalidParameter { name: "rate", .. })
        ));
        assert!(ensure_divisor("rate", f64::INFINITY).is_err());
    }

    #[test_log::test]
    fn test_ensure_positive() {
        assert_eq!(ensure_positive("length", 65.0), Ok(65.0));
        assert_eq!(
            ensure_positive("length", 0.0),
            Err(Error::InvalidParameter {
                name: "length",
                value: 0.0
            })
        );
        assert!(matches!(
            ensure_positive("length", -0.0),
            Err(Error::InvalidParameter { name: "length", .. })
        ));
        assert!(ensure_positive("length", -1.0).is_err());
        assert!(ensure_positive("length", f64::INFINITY).is_err());
        assert!(ensure_positive("length", f64::NAN).is_err());
    }

    #[test_log::test]
    fn test_ensure_finite_delay() {
        assert_eq!(ensure_finite_delay("propagation delay", 0.5), Ok(0.5));
        assert_eq!(
            ensure_finite_delay("propagation delay", f64::INFINITY),
            Err(Error::DelayOutOfRange {
                name: "propagation delay",
                value: f64::INFINITY
            })
        );
    }

    #[test_log::test]
    fn test_ensure_non_negative() {
        assert_eq!(ensure_non_negative("distance", 0.0), Ok(0.0));
        assert_eq!(ensure_non_negative("distance", 712.7), Ok(712.7));
        assert!(ensure_non_negative("distance", -1.0).is_err());
        assert!(ensure_non_negative("distance", f64::NAN).is_err());
    }

    #[test_log::test]
    fn test_error_messages() {
        assert_eq!(
            Error::DivisionByZero { name: "link rate" }.to_string(),
            "link rate must not be zero"
        );
        assert_eq!(
            Error::SpeedOutOfRange {
                significant_digits: 2.5,
                exponent: 400
            }
            .to_string(),
            "propagation speed 2.5e400 m/s is out of range"
        );
    }
}
