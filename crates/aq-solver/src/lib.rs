//! One-dimensional numerical kernels used by the property models.
//!
//! Every routine here works on scalar closures that may fail, so model errors
//! raised while evaluating an integrand or residual propagate through the
//! solve. Results carry iteration counts and a convergence flag; running out
//! of iterations is reported as [`SolverError::NotConverged`] with the last
//! iterate instead of being returned silently.

pub mod error;
pub mod minimize;
pub mod quadrature;
pub mod root;

pub use error::{SolverError, SolverResult};
pub use minimize::{
    Bracket, MinimizeConfig, MinimizeResult, bracket_minimum, brent_minimize, minimize_from_guess,
};
pub use quadrature::{QuadConfig, QuadResult, integrate, quad};
pub use root::{RootConfig, RootResult, bracket_root, brent_root, solve_from_guess};
