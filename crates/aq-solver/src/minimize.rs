//! Scalar minimization: golden-section downhill bracketing followed by
//! Brent's parabolic-interpolation minimizer.

use crate::error::{SolverError, SolverResult, checked};
use tracing::{debug, trace};

const GOLDEN: f64 = 1.618_034;
const CGOLD: f64 = 0.381_966_0;
const VERY_SMALL: f64 = 1e-21;

/// Minimizer configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MinimizeConfig {
    /// Relative tolerance on the abscissa
    pub tol: f64,
    /// Absolute floor added to the relative tolerance
    pub min_tol: f64,
    /// Maximum Brent iterations
    pub max_iterations: usize,
    /// Distance of the second bracketing point from the guess
    pub initial_step: f64,
    /// Maximum parabolic extrapolation, in units of the current step
    pub grow_limit: f64,
    /// Maximum bracketing iterations
    pub max_bracket_iterations: usize,
}

impl Default for MinimizeConfig {
    fn default() -> Self {
        Self {
            tol: 1.48e-8,
            min_tol: 1.0e-11,
            max_iterations: 500,
            initial_step: 0.1,
            grow_limit: 110.0,
            max_bracket_iterations: 1000,
        }
    }
}

/// Three points with `f(b) <= f(a)` and `f(b) <= f(c)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bracket {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub fa: f64,
    pub fb: f64,
    pub fc: f64,
    /// Function evaluations spent bracketing
    pub evaluations: usize,
}

/// Converged minimum.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinimizeResult {
    /// Minimizer location
    pub x: f64,
    /// Function value at the minimizer
    pub fun: f64,
    /// Brent iterations used
    pub iterations: usize,
    /// Function evaluations, bracket search included
    pub evaluations: usize,
    /// Converged flag
    pub converged: bool,
}

/// Walk downhill from `xa` through `xb` until the function turns up.
///
/// Steps grow by the golden ratio with parabolic extrapolation capped at
/// `grow_limit` times the current step.
pub fn bracket_minimum<F>(mut f: F, xa: f64, xb: f64, config: &MinimizeConfig) -> SolverResult<Bracket>
where
    F: FnMut(f64) -> SolverResult<f64>,
{
    if !xa.is_finite() || !xb.is_finite() || xa == xb {
        return Err(SolverError::invalid("bracket points must be finite and distinct"));
    }

    let mut eval = |x: f64, n: &mut usize| -> SolverResult<f64> {
        *n += 1;
        checked(x, f(x)?)
    };
    let mut n = 0;

    let (mut xa, mut xb) = (xa, xb);
    let mut fa = eval(xa, &mut n)?;
    let mut fb = eval(xb, &mut n)?;
    if fa < fb {
        std::mem::swap(&mut xa, &mut xb);
        std::mem::swap(&mut fa, &mut fb);
    }
    let mut xc = xb + GOLDEN * (xb - xa);
    let mut fc = eval(xc, &mut n)?;

    let mut iter = 0;
    while fc < fb {
        let tmp1 = (xb - xa) * (fb - fc);
        let tmp2 = (xb - xc) * (fb - fa);
        let val = tmp2 - tmp1;
        let denom = if val.abs() < VERY_SMALL {
            2.0 * VERY_SMALL
        } else {
            2.0 * val
        };
        let mut w = xb - ((xb - xc) * tmp2 - (xb - xa) * tmp1) / denom;
        let wlim = xb + config.grow_limit * (xc - xb);
        if iter > config.max_bracket_iterations {
            return Err(SolverError::NotConverged {
                what: "minimum bracket",
                last: xb,
                tolerance: (xc - xa).abs(),
                iterations: iter,
            });
        }
        iter += 1;

        let mut fw;
        if (w - xc) * (xb - w) > 0.0 {
            // parabolic minimum between b and c
            fw = eval(w, &mut n)?;
            if fw < fc {
                xa = xb;
                xb = w;
                fa = fb;
                fb = fw;
                break;
            } else if fw > fb {
                xc = w;
                fc = fw;
                break;
            }
            w = xc + GOLDEN * (xc - xb);
            fw = eval(w, &mut n)?;
        } else if (w - wlim) * (wlim - xc) >= 0.0 {
            w = wlim;
            fw = eval(w, &mut n)?;
        } else if (w - wlim) * (xc - w) > 0.0 {
            fw = eval(w, &mut n)?;
            if fw < fc {
                xb = xc;
                xc = w;
                w = xc + GOLDEN * (xc - xb);
                fb = fc;
                fc = fw;
                fw = eval(w, &mut n)?;
            }
        } else {
            w = xc + GOLDEN * (xc - xb);
            fw = eval(w, &mut n)?;
        }
        xa = xb;
        xb = xc;
        xc = w;
        fa = fb;
        fb = fc;
        fc = fw;
        trace!(iter, a = xa, b = xb, c = xc, "bracket step");
    }

    Ok(Bracket {
        a: xa,
        b: xb,
        c: xc,
        fa,
        fb,
        fc,
        evaluations: n,
    })
}

/// Brent's minimizer inside a bracket produced by [`bracket_minimum`].
pub fn brent_minimize<F>(mut f: F, bracket: &Bracket, config: &MinimizeConfig) -> SolverResult<MinimizeResult>
where
    F: FnMut(f64) -> SolverResult<f64>,
{
    let (mut a, mut b) = if bracket.a < bracket.c {
        (bracket.a, bracket.c)
    } else {
        (bracket.c, bracket.a)
    };

    let mut x = bracket.b;
    let mut w = x;
    let mut v = x;
    let mut fx = bracket.fb;
    let mut fw = fx;
    let mut fv = fx;
    let mut deltax: f64 = 0.0;
    let mut rat: f64 = 0.0;
    let mut evaluations = bracket.evaluations;
    let mut tol1 = config.tol * x.abs() + config.min_tol;

    for iter in 0..config.max_iterations {
        tol1 = config.tol * x.abs() + config.min_tol;
        let tol2 = 2.0 * tol1;
        let xmid = 0.5 * (a + b);
        if (x - xmid).abs() < tol2 - 0.5 * (b - a) {
            debug!(x, fun = fx, iterations = iter, "brent minimum converged");
            return Ok(MinimizeResult {
                x,
                fun: fx,
                iterations: iter,
                evaluations,
                converged: true,
            });
        }

        if deltax.abs() <= tol1 {
            // golden section step
            deltax = if x >= xmid { a - x } else { b - x };
            rat = CGOLD * deltax;
        } else {
            // parabolic step
            let tmp1 = (x - w) * (fx - fv);
            let mut tmp2 = (x - v) * (fx - fw);
            let mut p = (x - v) * tmp2 - (x - w) * tmp1;
            tmp2 = 2.0 * (tmp2 - tmp1);
            if tmp2 > 0.0 {
                p = -p;
            }
            tmp2 = tmp2.abs();
            let dx_temp = deltax;
            deltax = rat;
            if p > tmp2 * (a - x) && p < tmp2 * (b - x) && p.abs() < (0.5 * tmp2 * dx_temp).abs() {
                rat = p / tmp2;
                let u = x + rat;
                if (u - a) < tol2 || (b - u) < tol2 {
                    rat = if xmid - x >= 0.0 { tol1 } else { -tol1 };
                }
            } else {
                deltax = if x >= xmid { a - x } else { b - x };
                rat = CGOLD * deltax;
            }
        }

        let u = if rat.abs() < tol1 {
            if rat >= 0.0 { x + tol1 } else { x - tol1 }
        } else {
            x + rat
        };
        let fu = checked(u, f(u)?)?;
        evaluations += 1;

        if fu > fx {
            if u < x {
                a = u;
            } else {
                b = u;
            }
            if fu <= fw || w == x {
                v = w;
                w = u;
                fv = fw;
                fw = fu;
            } else if fu <= fv || v == x || v == w {
                v = u;
                fv = fu;
            }
        } else {
            if u >= x {
                a = x;
            } else {
                b = x;
            }
            v = w;
            w = x;
            x = u;
            fv = fw;
            fw = fx;
            fx = fu;
        }
        trace!(iter, x, fun = fx, "brent minimize step");
    }

    Err(SolverError::NotConverged {
        what: "brent minimize",
        last: x,
        tolerance: tol1,
        iterations: config.max_iterations,
    })
}

/// Bracket downhill from `guess` and minimize with Brent's method.
pub fn minimize_from_guess<F>(mut f: F, guess: f64, config: &MinimizeConfig) -> SolverResult<MinimizeResult>
where
    F: FnMut(f64) -> SolverResult<f64>,
{
    let bracket = bracket_minimum(&mut f, guess, guess + config.initial_step, config)?;
    brent_minimize(&mut f, &bracket, config)
}
