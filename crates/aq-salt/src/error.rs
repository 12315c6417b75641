//! Salt model errors.

use aq_core::AqError;
use thiserror::Error;

pub type SaltResult<T> = Result<T, SaltError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SaltError {
    /// Fitted coefficient table of the wrong length.
    #[error("Invalid model configuration: {table} table has {actual} coefficients, expected {expected}")]
    InvalidConfiguration {
        table: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl SaltError {
    /// Check a positional coefficient table length.
    pub(crate) fn check_table(table: &'static str, coeffs: &[f64], expected: usize) -> SaltResult<()> {
        if coeffs.len() == expected {
            Ok(())
        } else {
            Err(Self::InvalidConfiguration {
                table,
                expected,
                actual: coeffs.len(),
            })
        }
    }
}

impl From<SaltError> for AqError {
    fn from(err: SaltError) -> Self {
        match err {
            SaltError::InvalidConfiguration {
                table,
                expected,
                actual,
            } => AqError::IndexOob {
                what: table,
                index: expected.saturating_sub(1),
                len: actual,
            },
        }
    }
}
