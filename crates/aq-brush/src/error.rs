//! Error types for brush models.

use aq_core::AqError;
use aq_lattice::LatticeError;
use aq_solver::SolverError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BrushError {
    #[error("Invalid brush configuration: {what}")]
    InvalidConfiguration { what: String },

    #[error("Height {height} Å is below the dry brush height {dry_height} Å")]
    BelowDryHeight { height: f64, dry_height: f64 },

    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),

    #[error("Lattice error: {0}")]
    Lattice(#[from] LatticeError),

    #[error("Configuration parse error: {0}")]
    Config(String),
}

pub type BrushResult<T> = Result<T, BrushError>;

impl BrushError {
    pub(crate) fn invalid(what: impl Into<String>) -> Self {
        Self::InvalidConfiguration { what: what.into() }
    }
}

impl From<AqError> for BrushError {
    fn from(e: AqError) -> Self {
        Self::invalid(e.to_string())
    }
}

impl From<serde_yaml::Error> for BrushError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Config(format!("YAML: {e}"))
    }
}

impl From<serde_json::Error> for BrushError {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(format!("JSON: {e}"))
    }
}

impl From<BrushError> for AqError {
    fn from(e: BrushError) -> Self {
        match e {
            BrushError::InvalidConfiguration { .. } => AqError::InvalidArg {
                what: "brush configuration",
            },
            BrushError::BelowDryHeight { .. } => AqError::InvalidArg {
                what: "height below dry brush height",
            },
            BrushError::Solver(e) => e.into(),
            BrushError::Lattice(e) => e.into(),
            BrushError::Config(_) => AqError::InvalidArg {
                what: "brush configuration text",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_dry_height_display() {
        let err = BrushError::BelowDryHeight {
            height: 40.0,
            dry_height: 59.4,
        };
        assert!(err.to_string().contains("59.4"));
        assert!(matches!(AqError::from(err), AqError::InvalidArg { .. }));
    }

    #[test]
    fn solver_errors_keep_their_kind() {
        let err: BrushError = SolverError::NotConverged {
            what: "lagrange multiplier",
            last: 0.1,
            tolerance: 1e-12,
            iterations: 100,
        }
        .into();
        assert!(matches!(
            AqError::from(err),
            AqError::Invariant { what: "lagrange multiplier" }
        ));
    }
}
