//! Error types for solver operations.

use aq_core::AqError;
use thiserror::Error;

/// Errors that can occur while root finding, minimizing or integrating.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Root not bracketed: f({lo}) = {f_lo}, f({hi}) = {f_hi}")]
    NoBracket {
        lo: f64,
        hi: f64,
        f_lo: f64,
        f_hi: f64,
    },

    #[error(
        "{what} did not converge after {iterations} iterations (last iterate {last}, tolerance {tolerance})"
    )]
    NotConverged {
        what: &'static str,
        last: f64,
        tolerance: f64,
        iterations: usize,
    },

    #[error("Non-finite function value {value} at x = {x}")]
    NonFinite { x: f64, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },
}

pub type SolverResult<T> = Result<T, SolverError>;

impl SolverError {
    pub(crate) fn invalid(what: impl Into<String>) -> Self {
        Self::InvalidArg { what: what.into() }
    }
}

/// Reject NaN and infinite function values before they poison an iteration.
pub(crate) fn checked(x: f64, value: f64) -> SolverResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SolverError::NonFinite { x, value })
    }
}

impl From<SolverError> for AqError {
    fn from(e: SolverError) -> Self {
        match e {
            SolverError::NoBracket { .. } => AqError::InvalidArg { what: "root bracket" },
            SolverError::NotConverged { what, .. } => AqError::Invariant { what },
            SolverError::NonFinite { value, .. } => AqError::NonFinite {
                what: "solver function value",
                value,
            },
            SolverError::InvalidArg { .. } => AqError::InvalidArg {
                what: "solver argument",
            },
        }
    }
}
