//! Adaptive Gauss–Kronrod quadrature.
//!
//! Globally adaptive bisection with the 7-point Gauss / 15-point Kronrod pair:
//! the subinterval with the largest error estimate is split until the summed
//! estimate meets `max(abs_tol, rel_tol * |I|)` or the subinterval budget runs
//! out.

use crate::error::{SolverError, SolverResult, checked};
use tracing::{trace, warn};

/// Kronrod abscissae, descending, the last one is the midpoint.
const XGK: [f64; 8] = [
    0.991_455_371_120_812_639_206_854_697_526_329,
    0.949_107_912_342_758_524_526_189_684_047_851,
    0.864_864_423_359_769_072_789_712_788_640_926,
    0.741_531_185_599_394_439_863_864_773_280_788,
    0.586_087_235_467_691_130_294_144_845_693_013,
    0.405_845_151_377_397_166_906_606_412_076_961,
    0.207_784_955_007_898_467_600_689_403_773_245,
    0.0,
];

const WGK: [f64; 8] = [
    0.022_935_322_010_529_224_963_732_008_058_970,
    0.063_092_092_629_978_553_290_700_663_189_204,
    0.104_790_010_322_250_183_839_876_322_541_518,
    0.140_653_259_715_525_918_745_189_590_510_238,
    0.169_004_726_639_267_902_826_583_426_598_550,
    0.190_350_578_064_785_409_913_256_402_421_014,
    0.204_432_940_075_298_892_414_161_999_234_649,
    0.209_482_141_084_727_828_012_999_174_891_714,
];

/// Gauss weights for the odd Kronrod abscissae `XGK[1], XGK[3], XGK[5], XGK[7]`.
const WG: [f64; 4] = [
    0.129_484_966_168_869_693_270_611_432_679_082,
    0.279_705_391_489_276_667_901_467_771_423_780,
    0.381_830_050_505_118_944_950_369_775_488_975,
    0.417_959_183_673_469_387_755_102_040_816_327,
];

/// Quadrature configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadConfig {
    pub abs_tol: f64,
    pub rel_tol: f64,
    /// Maximum number of subintervals
    pub limit: usize,
}

impl Default for QuadConfig {
    fn default() -> Self {
        Self {
            abs_tol: 1.49e-8,
            rel_tol: 1.49e-8,
            limit: 50,
        }
    }
}

/// Integral estimate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadResult {
    pub value: f64,
    /// Summed error estimate over all subintervals
    pub abs_error: f64,
    pub intervals: usize,
    pub evaluations: usize,
    /// Whether the tolerance was met within the subinterval budget
    pub converged: bool,
}

struct Segment {
    a: f64,
    b: f64,
    value: f64,
    error: f64,
}

fn kronrod_segment<F>(f: &mut F, a: f64, b: f64) -> SolverResult<Segment>
where
    F: FnMut(f64) -> SolverResult<f64>,
{
    let center = 0.5 * (a + b);
    let half = 0.5 * (b - a);

    let fc = checked(center, f(center)?)?;
    let mut kronrod = WGK[7] * fc;
    let mut gauss = WG[3] * fc;

    for (j, (&x, &wk)) in XGK.iter().zip(WGK.iter()).take(7).enumerate() {
        let dx = half * x;
        let f1 = checked(center - dx, f(center - dx)?)?;
        let f2 = checked(center + dx, f(center + dx)?)?;
        kronrod += wk * (f1 + f2);
        if j % 2 == 1 {
            gauss += WG[j / 2] * (f1 + f2);
        }
    }

    Ok(Segment {
        a,
        b,
        value: kronrod * half,
        error: ((kronrod - gauss) * half).abs(),
    })
}

/// Integrate `f` over `[a, b]`.
///
/// Reversed limits flip the sign; equal limits integrate to zero. Running out
/// of subintervals is not an error: the result comes back with
/// `converged == false` and its error estimate, and a warning is logged.
pub fn quad<F>(mut f: F, a: f64, b: f64, config: &QuadConfig) -> SolverResult<QuadResult>
where
    F: FnMut(f64) -> SolverResult<f64>,
{
    if !a.is_finite() || !b.is_finite() {
        return Err(SolverError::invalid("integration limits must be finite"));
    }
    if a == b {
        return Ok(QuadResult {
            value: 0.0,
            abs_error: 0.0,
            intervals: 0,
            evaluations: 0,
            converged: true,
        });
    }
    if b < a {
        let mut flipped = quad(f, b, a, config)?;
        flipped.value = -flipped.value;
        return Ok(flipped);
    }

    let limit = config.limit.max(1);
    let mut segments = vec![kronrod_segment(&mut f, a, b)?];
    let mut evaluations = 15;

    loop {
        let value: f64 = segments.iter().map(|s| s.value).sum();
        let error: f64 = segments.iter().map(|s| s.error).sum();
        let target = config.abs_tol.max(config.rel_tol * value.abs());

        if error <= target || segments.len() >= limit {
            let converged = error <= target;
            if !converged {
                warn!(a, b, value, error, target, "quadrature hit subinterval limit");
            }
            return Ok(QuadResult {
                value,
                abs_error: error,
                intervals: segments.len(),
                evaluations,
                converged,
            });
        }

        let (worst, _) = segments
            .iter()
            .enumerate()
            .fold((0, f64::NEG_INFINITY), |(bi, be), (i, s)| {
                if s.error > be { (i, s.error) } else { (bi, be) }
            });
        let seg = segments.swap_remove(worst);
        let mid = 0.5 * (seg.a + seg.b);
        if mid <= seg.a || mid >= seg.b {
            // interval cannot be split further in floating point
            segments.push(seg);
            let value: f64 = segments.iter().map(|s| s.value).sum();
            let error: f64 = segments.iter().map(|s| s.error).sum();
            warn!(a, b, value, error, "quadrature reached roundoff limit");
            return Ok(QuadResult {
                value,
                abs_error: error,
                intervals: segments.len(),
                evaluations,
                converged: false,
            });
        }
        segments.push(kronrod_segment(&mut f, seg.a, mid)?);
        segments.push(kronrod_segment(&mut f, mid, seg.b)?);
        evaluations += 30;
        trace!(intervals = segments.len(), "quadrature bisection");
    }
}

/// [`quad`] for infallible integrands, returning only the value.
pub fn integrate<F>(mut f: F, a: f64, b: f64, config: &QuadConfig) -> SolverResult<f64>
where
    F: FnMut(f64) -> f64,
{
    quad(|x| Ok(f(x)), a, b, config).map(|r| r.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn polynomial_is_exact_on_one_segment() {
        let r = quad(|x| Ok(x.powi(5) - 3.0 * x * x), 0.0, 2.0, &QuadConfig::default()).unwrap();
        assert!(r.converged);
        assert_eq!(r.intervals, 1);
        assert_abs_diff_eq!(r.value, 64.0 / 6.0 - 8.0, epsilon = 1e-12);
    }

    #[test]
    fn sine_over_half_period() {
        let v = integrate(f64::sin, 0.0, PI, &QuadConfig::default()).unwrap();
        assert_abs_diff_eq!(v, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn reversed_limits_flip_sign() {
        let v = integrate(|x| x.exp(), 1.0, 0.0, &QuadConfig::default()).unwrap();
        assert_abs_diff_eq!(v, 1.0 - 1.0_f64.exp(), epsilon = 1e-12);
    }

    #[test]
    fn sqrt_endpoint_singularity_refines() {
        let r = quad(|x| Ok(x.sqrt()), 0.0, 1.0, &QuadConfig::default()).unwrap();
        assert!(r.converged);
        assert!(r.intervals > 1);
        assert_abs_diff_eq!(r.value, 2.0 / 3.0, epsilon = 1e-8);
    }

    #[test]
    fn exhausted_budget_is_flagged() {
        let config = QuadConfig {
            limit: 2,
            abs_tol: 1e-14,
            rel_tol: 1e-14,
        };
        let r = quad(|x| Ok((50.0 * x).sin().abs()), 0.0, 10.0, &config).unwrap();
        assert!(!r.converged);
        assert_eq!(r.intervals, 2);
    }

    #[test]
    fn integrand_error_propagates() {
        let err = quad(|x| Ok(1.0 / (x - 0.5)), 0.0, 1.0, &QuadConfig::default());
        // 0.5 is the midpoint abscissa of the first segment
        assert!(matches!(err, Err(SolverError::NonFinite { .. })));
    }
}
