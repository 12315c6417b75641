//! Error types for cell geometry.

use aq_core::AqError;
use aq_solver::SolverError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LatticeError {
    #[error("Wedge solid angles sum to {actual}, expected {expected}")]
    SolidAngleMismatch { expected: f64, actual: f64 },

    #[error("Invalid wedge {index}: {what}")]
    InvalidWedge { index: usize, what: &'static str },

    #[error("Quadrature failed: {0}")]
    Solver(#[from] SolverError),
}

pub type LatticeResult<T> = Result<T, LatticeError>;

impl From<LatticeError> for AqError {
    fn from(e: LatticeError) -> Self {
        match e {
            LatticeError::SolidAngleMismatch { .. } => AqError::Invariant {
                what: "wedge solid angles must sum to 4π",
            },
            LatticeError::InvalidWedge { what, .. } => AqError::InvalidArg { what },
            LatticeError::Solver(e) => e.into(),
        }
    }
}
