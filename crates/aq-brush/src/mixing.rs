//! Flory–Huggins mixing of brush segments with solvent.

use crate::error::{BrushError, BrushResult};
use aq_solver::{RootConfig, SolverResult, brent_root};
use tracing::trace;

/// Mixing free energy per Kuhn volume,
/// `f(φ) = ((1 − φ)/r) ln(1 − φ) + χ φ (1 − φ)`.
///
/// `r` is the solvent molecule volume in Kuhn volumes. For `χ r > ½` the
/// function is not convex and the brush profile jumps from the binodal
/// fraction to pure solvent at the brush edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloryHuggins {
    chi: f64,
    r: f64,
    /// Inflection point of `f'`, zero for a convex `f`
    phi_star: f64,
    /// Dense fraction coexisting with pure solvent, if any
    phi_binodal: Option<f64>,
    mu_edge: f64,
}

impl FloryHuggins {
    pub fn new(chi: f64, r: f64) -> BrushResult<Self> {
        if !chi.is_finite() {
            return Err(BrushError::invalid(format!("χ must be finite, got {chi}")));
        }
        if !(r.is_finite() && r > 0.0) {
            return Err(BrushError::invalid(format!("solvent size ratio must be positive, got {r}")));
        }

        let phi_star = if chi * r > 0.5 { 1.0 - 1.0 / (2.0 * chi * r) } else { 0.0 };
        let mut fh = Self {
            chi,
            r,
            phi_star,
            phi_binodal: None,
            mu_edge: 0.0,
        };
        if chi * r > 0.5 {
            // tangent to f through the origin, f(φ) = φ f'(φ), in s = −ln(1 − φ);
            // negative at s = rχ + 2 for any χ
            let tangent = |s: f64| Ok((-s - (-s).exp_m1()) / r + chi * (-s).exp_m1().powi(2));
            let s_lo = -(-1e-8_f64).ln_1p();
            let root = brent_root(tangent, s_lo, r * chi + 2.0, &RootConfig::default())?;
            fh.phi_binodal = Some(-(-root.x).exp_m1());
            fh.mu_edge = (root.x - 1.0) / r + chi * (2.0 * (-root.x).exp() - 1.0);
        } else {
            fh.mu_edge = fh.df(0.0);
        }
        Ok(fh)
    }

    pub fn chi(&self) -> f64 {
        self.chi
    }

    pub fn solvent_ratio(&self) -> f64 {
        self.r
    }

    pub fn binodal(&self) -> Option<f64> {
        self.phi_binodal
    }

    /// Exchange potential below which the solvent-free state `φ = 0` wins.
    pub fn edge_potential(&self) -> f64 {
        self.mu_edge
    }

    pub fn f(&self, phi: f64) -> f64 {
        (1.0 - phi) / self.r * (-phi).ln_1p() + self.chi * phi * (1.0 - phi)
    }

    pub fn df(&self, phi: f64) -> f64 {
        -((-phi).ln_1p() + 1.0) / self.r + self.chi * (1.0 - 2.0 * phi)
    }

    /// Volume fraction minimizing `f(φ) − μ φ`.
    ///
    /// Solved in `s = −ln(1 − φ)`, which keeps the dense branch resolved as
    /// `φ → 1`.
    pub fn volume_fraction(&self, mu: f64) -> SolverResult<f64> {
        if mu <= self.mu_edge {
            return Ok(0.0);
        }
        let (r, chi) = (self.r, self.chi);
        let s_lo = -(-self.phi_star).ln_1p();
        // f' ≥ (s − 1)/r − χ bounds the root from above
        let s_hi = s_lo.max(r * (mu + chi) + 1.0) + 1.0;
        let residual = |s: f64| Ok((s - 1.0) / r + chi * (2.0 * (-s).exp() - 1.0) - mu);
        let root = brent_root(residual, s_lo, s_hi, &RootConfig::default())?;
        let phi = -(-root.x).exp_m1();
        trace!(mu, phi, iterations = root.iterations, "pointwise volume fraction");

        if self.f(phi) - mu * phi > 0.0 {
            return Ok(0.0);
        }
        Ok(phi)
    }
}
