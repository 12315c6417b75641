//! Bracketed scalar root finding.
//!
//! [`brent_root`] is Brent's method (inverse quadratic interpolation with
//! bisection fallback) on a sign-changing interval. [`bracket_root`] grows an
//! interval outward from a guess until the function changes sign, and
//! [`solve_from_guess`] chains the two.

use crate::error::{SolverError, SolverResult, checked};
use tracing::{debug, trace};

/// Root finder configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RootConfig {
    /// Absolute tolerance on the root
    pub xtol: f64,
    /// Relative tolerance on the root
    pub rtol: f64,
    /// Maximum Brent iterations
    pub max_iterations: usize,
    /// Initial half-width of the bracket grown around a guess
    pub initial_step: f64,
    /// Growth factor applied to the bracket on each expansion
    pub growth: f64,
    /// Maximum bracket expansions
    pub max_expansions: usize,
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            xtol: 2e-12,
            rtol: 4.0 * f64::EPSILON,
            max_iterations: 100,
            initial_step: 0.1,
            growth: 1.6,
            max_expansions: 60,
        }
    }
}

/// Converged root.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootResult {
    /// Root location
    pub x: f64,
    /// Function value at the root
    pub residual: f64,
    /// Brent iterations used
    pub iterations: usize,
    /// Function evaluations, bracket search included
    pub evaluations: usize,
    /// Converged flag
    pub converged: bool,
}

/// Grow `[guess - step, guess + step]` until `f` changes sign.
///
/// The side with the smaller `|f|` is pushed outward by `growth` times the
/// current width, so a monotone function walks toward its root. Both sides
/// move when the values tie, as on a plateau. Returns the
/// bracket and the number of evaluations spent.
pub fn bracket_root<F>(mut f: F, guess: f64, config: &RootConfig) -> SolverResult<((f64, f64), usize)>
where
    F: FnMut(f64) -> SolverResult<f64>,
{
    if !guess.is_finite() {
        return Err(SolverError::invalid("bracket guess must be finite"));
    }
    if !(config.initial_step > 0.0) || !(config.growth > 1.0) {
        return Err(SolverError::invalid("bracket step must be > 0 and growth > 1"));
    }

    let mut lo = guess - config.initial_step;
    let mut hi = guess + config.initial_step;
    let mut f_lo = checked(lo, f(lo)?)?;
    let mut f_hi = checked(hi, f(hi)?)?;
    let mut evaluations = 2;

    for _ in 0..config.max_expansions {
        if f_lo.signum() != f_hi.signum() || f_lo == 0.0 || f_hi == 0.0 {
            trace!(lo, hi, evaluations, "root bracketed");
            return Ok(((lo, hi), evaluations));
        }
        let width = hi - lo;
        let grow_lo = f_lo.abs() <= f_hi.abs();
        let grow_hi = f_hi.abs() <= f_lo.abs();
        if grow_lo {
            lo -= config.growth * width;
            f_lo = checked(lo, f(lo)?)?;
            evaluations += 1;
        }
        if grow_hi {
            hi += config.growth * width;
            f_hi = checked(hi, f(hi)?)?;
            evaluations += 1;
        }
    }

    if f_lo.signum() != f_hi.signum() {
        return Ok(((lo, hi), evaluations));
    }
    Err(SolverError::NoBracket { lo, hi, f_lo, f_hi })
}

/// Brent's method on `[a, b]`; `f(a)` and `f(b)` must differ in sign.
pub fn brent_root<F>(mut f: F, a: f64, b: f64, config: &RootConfig) -> SolverResult<RootResult>
where
    F: FnMut(f64) -> SolverResult<f64>,
{
    let mut xpre = a;
    let mut xcur = b;
    let mut fpre = checked(xpre, f(xpre)?)?;
    let mut fcur = checked(xcur, f(xcur)?)?;
    let mut evaluations = 2;

    if fpre * fcur > 0.0 {
        return Err(SolverError::NoBracket {
            lo: a,
            hi: b,
            f_lo: fpre,
            f_hi: fcur,
        });
    }
    if fpre == 0.0 {
        return Ok(RootResult {
            x: xpre,
            residual: 0.0,
            iterations: 0,
            evaluations,
            converged: true,
        });
    }
    if fcur == 0.0 {
        return Ok(RootResult {
            x: xcur,
            residual: 0.0,
            iterations: 0,
            evaluations,
            converged: true,
        });
    }

    let (mut xblk, mut fblk) = (0.0, 0.0);
    let (mut spre, mut scur) = (0.0_f64, 0.0_f64);
    let mut delta = 0.0;

    for iter in 0..config.max_iterations {
        if fpre != 0.0 && fcur != 0.0 && fpre.is_sign_negative() != fcur.is_sign_negative() {
            xblk = xpre;
            fblk = fpre;
            spre = xcur - xpre;
            scur = spre;
        }
        if fblk.abs() < fcur.abs() {
            xpre = xcur;
            xcur = xblk;
            xblk = xpre;

            fpre = fcur;
            fcur = fblk;
            fblk = fpre;
        }

        delta = 0.5 * (config.xtol + config.rtol * xcur.abs());
        let sbis = 0.5 * (xblk - xcur);
        if fcur == 0.0 || sbis.abs() < delta {
            debug!(x = xcur, residual = fcur, iterations = iter, "brent root converged");
            return Ok(RootResult {
                x: xcur,
                residual: fcur,
                iterations: iter,
                evaluations,
                converged: true,
            });
        }

        if spre.abs() > delta && fcur.abs() < fpre.abs() {
            let stry = if xpre == xblk {
                // secant
                -fcur * (xcur - xpre) / (fcur - fpre)
            } else {
                // inverse quadratic interpolation
                let dpre = (fpre - fcur) / (xpre - xcur);
                let dblk = (fblk - fcur) / (xblk - xcur);
                -fcur * (fblk * dblk - fpre * dpre) / (dblk * dpre * (fblk - fpre))
            };
            if 2.0 * stry.abs() < spre.abs().min(3.0 * sbis.abs() - delta) {
                spre = scur;
                scur = stry;
            } else {
                spre = sbis;
                scur = sbis;
            }
        } else {
            spre = sbis;
            scur = sbis;
        }

        xpre = xcur;
        fpre = fcur;
        if scur.abs() > delta {
            xcur += scur;
        } else {
            xcur += if sbis > 0.0 { delta } else { -delta };
        }
        fcur = checked(xcur, f(xcur)?)?;
        evaluations += 1;
        trace!(iter, x = xcur, f = fcur, "brent root step");
    }

    Err(SolverError::NotConverged {
        what: "brent root",
        last: xcur,
        tolerance: delta,
        iterations: config.max_iterations,
    })
}

/// Bracket outward from `guess`, then polish with Brent's method.
pub fn solve_from_guess<F>(mut f: F, guess: f64, config: &RootConfig) -> SolverResult<RootResult>
where
    F: FnMut(f64) -> SolverResult<f64>,
{
    let ((lo, hi), spent) = bracket_root(&mut f, guess, config)?;
    let mut result = brent_root(&mut f, lo, hi, config)?;
    result.evaluations += spent;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn cubic_root() {
        let result = brent_root(|x| Ok(x * x * x - 2.0), 0.0, 2.0, &RootConfig::default()).unwrap();
        assert!(result.converged);
        assert_abs_diff_eq!(result.x, 2.0_f64.cbrt(), epsilon = 1e-11);
        assert!(result.iterations < 20);
    }

    #[test]
    fn endpoint_root_returns_immediately() {
        let result = brent_root(|x| Ok(x - 1.0), 1.0, 3.0, &RootConfig::default()).unwrap();
        assert_eq!(result.x, 1.0);
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn same_sign_is_rejected() {
        let err = brent_root(|x| Ok(x * x + 1.0), -1.0, 1.0, &RootConfig::default()).unwrap_err();
        assert!(matches!(err, SolverError::NoBracket { .. }));
    }

    #[test]
    fn iteration_cap_reports_last_iterate() {
        let config = RootConfig {
            max_iterations: 2,
            ..RootConfig::default()
        };
        let err = brent_root(|x| Ok(x.exp() - 10.0), -50.0, 50.0, &config).unwrap_err();
        match err {
            SolverError::NotConverged { last, iterations, .. } => {
                assert_eq!(iterations, 2);
                assert!(last.is_finite());
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn bracket_walks_toward_distant_root() {
        let ((lo, hi), evals) = bracket_root(|x| Ok(x - 25.0), 0.0, &RootConfig::default()).unwrap();
        assert!(lo <= 25.0 && 25.0 <= hi);
        assert!(evals > 2);
    }

    #[test]
    fn bracket_fails_without_sign_change() {
        let config = RootConfig {
            max_expansions: 10,
            ..RootConfig::default()
        };
        let err = bracket_root(|x| Ok(x * x + 1.0), 0.0, &config).unwrap_err();
        assert!(matches!(err, SolverError::NoBracket { .. }));
    }

    #[test]
    fn model_errors_propagate() {
        let err = solve_from_guess(
            |x| {
                if x > 0.5 {
                    Err(SolverError::invalid("outside model domain"))
                } else {
                    Ok(x)
                }
            },
            1.0,
            &RootConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SolverError::InvalidArg { .. }));
    }

    #[test]
    fn nan_residual_is_reported() {
        let err = brent_root(|x| Ok(x.ln()), -1.0, 2.0, &RootConfig::default()).unwrap_err();
        assert!(matches!(err, SolverError::NonFinite { .. }));
    }
}
