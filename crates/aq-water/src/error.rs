//! State grid errors.

use aq_core::AqError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    /// Temperature and pressure arrays of different lengths
    #[error("Shape mismatch: {temperatures} temperatures vs {pressures} pressures")]
    ShapeMismatch {
        temperatures: usize,
        pressures: usize,
    },
}

impl From<GridError> for AqError {
    fn from(err: GridError) -> Self {
        match err {
            GridError::ShapeMismatch { temperatures, pressures } => AqError::IndexOob {
                what: "state grid pressures",
                index: temperatures,
                len: pressures,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = GridError::ShapeMismatch {
            temperatures: 3,
            pressures: 2,
        };
        assert!(err.to_string().contains("3 temperatures"));
        assert!(matches!(AqError::from(err), AqError::IndexOob { len: 2, .. }));
    }
}
