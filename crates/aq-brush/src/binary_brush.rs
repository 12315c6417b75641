//! Brush swollen by a solvent.
//!
//! Mean-field strong-stretching model in Kuhn units. A chain exerts the
//! parabolic potential `κ u²` at distance `u` from the grafting surface, and
//! the local volume fraction minimizes `f(φ) − (λ − κ u²) φ` pointwise, with
//! `λ` the Lagrange multiplier for the number of grafted chains. The brush
//! ends at the natural edge `u_e` where the exchange potential reaches the
//! solvent edge potential, or earlier when confined to a height `h`.

use crate::error::{BrushError, BrushResult};
use crate::geometry::{BrushGeometry, Dimension};
use crate::mixing::FloryHuggins;
use crate::model::{BrushModel, SolverSettings};
use crate::polymer::{PolymerProperties, ReducedChain};
use aq_solver::{
    MinimizeResult, RootResult, SolverError, SolverResult, brent_root, minimize_from_guess, quad,
    solve_from_guess,
};
use tracing::debug;

/// Brush plus solvent, two components.
#[derive(Clone, Debug)]
pub struct BinaryBrush {
    geometry: BrushGeometry,
    chain: ReducedChain,
    mixing: FloryHuggins,
    lag: f64,
    settings: SolverSettings,
}

impl BinaryBrush {
    /// `sigma` in chains/nm², `rad` in Å, `lag` the default multiplier guess.
    pub fn new(
        dim: Dimension,
        chi: f64,
        sigma: f64,
        rad: f64,
        pol: &dyn PolymerProperties,
        lag: f64,
    ) -> BrushResult<Self> {
        let geometry = BrushGeometry::new(dim, sigma, rad, pol.k_length())?;
        let chain = ReducedChain::new(pol, sigma);
        if !(chain.segments.is_finite() && chain.segments > 0.0) {
            return Err(BrushError::invalid("chain must have a positive number of Kuhn segments"));
        }
        if !lag.is_finite() {
            return Err(BrushError::invalid(format!("multiplier guess must be finite, got {lag}")));
        }
        Ok(Self {
            geometry,
            chain,
            mixing: FloryHuggins::new(chi, 1.0)?,
            lag,
            settings: SolverSettings::default(),
        })
    }

    /// Solvent molecules of `r` Kuhn volumes instead of one.
    pub fn with_solvent_ratio(mut self, r: f64) -> BrushResult<Self> {
        self.mixing = FloryHuggins::new(self.mixing.chi(), r)?;
        Ok(self)
    }

    pub fn with_settings(mut self, settings: SolverSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn lag(&self) -> f64 {
        self.lag
    }

    pub fn chain(&self) -> &ReducedChain {
        &self.chain
    }

    pub fn mixing(&self) -> &FloryHuggins {
        &self.mixing
    }

    /// Height of the same chains at `φ = 1` [Å]
    pub fn dry_height(&self) -> f64 {
        self.geometry.height_enclosing(self.chain.s_hat) * self.chain.k_length
    }

    /// Natural edge of the profile at multiplier `lag` [Å]
    pub fn natural_edge(&self, lag: f64) -> f64 {
        self.edge(lag) * self.chain.k_length
    }

    /// Volume fraction of polymer at distance `z` [Å] from the surface.
    pub fn volume_fraction(&self, lag: f64, z: f64) -> BrushResult<f64> {
        Ok(self.phi(lag, z / self.chain.k_length)?)
    }

    /// Polymer volume per grafting area below `h` [Å], in Kuhn lengths.
    ///
    /// Equals `ŝ` when the profile holds all grafted chains.
    pub fn content(&self, lag: f64, h: f64) -> BrushResult<f64> {
        Ok(self.reduced_content(lag, h / self.chain.k_length)?)
    }

    /// Height [Å] at which the cumulative profile holds all chains.
    ///
    /// When the whole profile up to the natural edge holds fewer chains the
    /// edge itself is returned.
    pub fn height(&self, lag: f64) -> BrushResult<f64> {
        let u_e = self.edge(lag);
        let s_hat = self.chain.s_hat;
        let total = self.reduced_content(lag, u_e)?;
        if total < s_hat {
            debug!(lag, total, s_hat, "profile ends before holding all chains");
            return Ok(u_e * self.chain.k_length);
        }
        let root = brent_root(
            |h| Ok(self.reduced_content(lag, h)? - s_hat),
            0.0,
            u_e,
            &self.settings.root,
        )?;
        Ok(root.x * self.chain.k_length)
    }

    /// Free energy per chain [kT] of the profile at `lag` cut at `h` [Å].
    ///
    /// `(N/ŝ) ∫ g [f(φ) + κ u² φ] du`, mixing plus stretching.
    pub fn free_energy(&self, lag: f64, h: f64) -> BrushResult<f64> {
        let kappa = self.chain.kappa;
        let value = self.profile_integral(lag, h / self.chain.k_length, |u, phi| {
            self.mixing.f(phi) + kappa * u * u * phi
        })?;
        Ok(self.chain.segments / self.chain.s_hat * value)
    }

    /// Lagrangian per chain [kT] at the stationary profile for `lag`.
    ///
    /// `(N/ŝ) ∫ g [f(φ) + (κ u² − λ) φ] du + N λ`; concave in `λ` with its
    /// maximum where the chains are conserved.
    pub fn dual_free_energy(&self, lag: f64, h: f64) -> BrushResult<f64> {
        Ok(self.reduced_dual(lag, h / self.chain.k_length)?)
    }

    /// Multiplier that confines the brush to height `h` [Å].
    ///
    /// The search brackets outward from `guess`, or from the multiplier the
    /// brush was built with.
    pub fn determine_lagrange(&self, h: f64, guess: Option<f64>) -> BrushResult<RootResult> {
        if h.is_nan() {
            return Err(BrushError::invalid("target height is NaN"));
        }
        let dry_height = self.dry_height();
        if h <= dry_height {
            return Err(BrushError::BelowDryHeight { height: h, dry_height });
        }

        let h_red = h / self.chain.k_length;
        let s_hat = self.chain.s_hat;
        let start = guess.unwrap_or(self.lag);
        let result = solve_from_guess(
            |lag| Ok(self.reduced_content(lag, h_red)? - s_hat),
            start,
            &self.settings.root,
        )?;
        debug!(
            h,
            start,
            lag = result.x,
            iterations = result.iterations,
            "multiplier for confined brush"
        );
        Ok(result)
    }

    /// Multiplier of the unconfined brush, maximizing the dual free energy.
    pub fn optimal_lambda(&self) -> BrushResult<MinimizeResult> {
        let result = minimize_from_guess(
            |lag| Ok(-self.reduced_dual(lag, f64::INFINITY)?),
            self.lag,
            &self.settings.minimize,
        )?;
        debug!(
            start = self.lag,
            lag = result.x,
            iterations = result.iterations,
            "unconfined multiplier"
        );
        Ok(result)
    }

    fn edge(&self, lag: f64) -> f64 {
        ((lag - self.mixing.edge_potential()) / self.chain.kappa).max(0.0).sqrt()
    }

    fn phi(&self, lag: f64, u: f64) -> SolverResult<f64> {
        self.mixing.volume_fraction(lag - self.chain.kappa * u * u)
    }

    /// `∫_0^{min(h, u_e)} g(u) integrand(u, φ(u)) du`, failing unless the
    /// quadrature meets its tolerance.
    fn profile_integral<F>(&self, lag: f64, h: f64, integrand: F) -> SolverResult<f64>
    where
        F: Fn(f64, f64) -> f64,
    {
        let upper = h.min(self.edge(lag));
        let result = quad(
            |u| Ok(self.geometry.measure(u) * integrand(u, self.phi(lag, u)?)),
            0.0,
            upper,
            &self.settings.quad,
        )?;
        if !result.converged {
            return Err(SolverError::NotConverged {
                what: "profile quadrature",
                last: result.value,
                tolerance: result.abs_error,
                iterations: result.intervals,
            });
        }
        Ok(result.value)
    }

    fn reduced_content(&self, lag: f64, h: f64) -> SolverResult<f64> {
        self.profile_integral(lag, h, |_, phi| phi)
    }

    fn reduced_dual(&self, lag: f64, h: f64) -> SolverResult<f64> {
        let kappa = self.chain.kappa;
        let value = self.profile_integral(lag, h, |u, phi| {
            self.mixing.f(phi) + (kappa * u * u - lag) * phi
        })?;
        let n = self.chain.segments;
        Ok(n / self.chain.s_hat * value + n * lag)
    }
}

impl BrushModel for BinaryBrush {
    fn name(&self) -> &str {
        "binary brush"
    }

    fn num_of_components(&self) -> usize {
        2
    }

    fn geometry(&self) -> &BrushGeometry {
        &self.geometry
    }

    /// Natural edge at the unconfined multiplier.
    fn equilibrium_height(&self) -> BrushResult<f64> {
        let lag = self.optimal_lambda()?.x;
        Ok(self.natural_edge(lag))
    }

    fn free_energy_per_chain(&self) -> BrushResult<f64> {
        let lag = self.optimal_lambda()?.x;
        self.free_energy(lag, f64::INFINITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polymer::Polymer;
    use aq_solver::QuadConfig;
    use approx::assert_abs_diff_eq;

    fn brush(chi: f64) -> BinaryBrush {
        let ps = Polymer::polystyrene(10_000.0).unwrap();
        BinaryBrush::new(Dimension::Spherical, chi, 1.0, 50.0, &ps, 1e-3 - chi).unwrap()
    }

    #[test]
    fn no_polymer_below_edge_potential() {
        let b = brush(0.3);
        let mu_edge = b.mixing().edge_potential();
        assert_eq!(b.natural_edge(mu_edge - 0.1), 0.0);
        assert_eq!(b.content(mu_edge - 0.1, 100.0).unwrap(), 0.0);
        assert_eq!(b.volume_fraction(mu_edge - 0.1, 0.0).unwrap(), 0.0);
    }

    #[test]
    fn profile_decreases_outward() {
        let b = brush(0.3);
        let lag = 0.2;
        let mut last = 1.0;
        for z in [0.0, 20.0, 40.0, 60.0, 80.0] {
            let phi = b.volume_fraction(lag, z).unwrap();
            assert!(phi < last);
            last = phi;
        }
    }

    #[test]
    fn dual_is_stationary_at_optimum() {
        let b = brush(0.3);
        let lag = b.optimal_lambda().unwrap().x;
        let h = f64::INFINITY;
        let d0 = b.dual_free_energy(lag, h).unwrap();
        assert!(d0 >= b.dual_free_energy(lag - 0.01, h).unwrap());
        assert!(d0 >= b.dual_free_energy(lag + 0.01, h).unwrap());
        // envelope: primal and dual coincide once chains are conserved
        assert_abs_diff_eq!(b.free_energy(lag, h).unwrap(), d0, epsilon = 1e-3);
    }

    #[test]
    fn unconverged_profile_integral_is_an_error() {
        let settings = SolverSettings {
            quad: QuadConfig {
                abs_tol: 0.0,
                rel_tol: 0.0,
                limit: 1,
            },
            ..SolverSettings::default()
        };
        let b = brush(0.3).with_settings(settings);
        let err = b.content(0.2, 80.0).unwrap_err();
        assert!(matches!(
            err,
            BrushError::Solver(SolverError::NotConverged {
                what: "profile quadrature",
                iterations: 1,
                ..
            })
        ));
        assert!(b.determine_lagrange(80.0, None).is_err());
    }

    #[test]
    fn dry_height_is_rejected() {
        let b = brush(0.3);
        let err = b.determine_lagrange(40.0, None).unwrap_err();
        assert!(matches!(err, BrushError::BelowDryHeight { height, .. } if height == 40.0));
        assert!(b.determine_lagrange(f64::NAN, None).is_err());
    }

    #[test]
    fn invalid_construction() {
        let ps = Polymer::polystyrene(10_000.0).unwrap();
        assert!(BinaryBrush::new(Dimension::Spherical, f64::INFINITY, 1.0, 50.0, &ps, 0.0).is_err());
        assert!(BinaryBrush::new(Dimension::Spherical, 0.3, 1.0, 50.0, &ps, f64::NAN).is_err());
        assert!(BinaryBrush::new(Dimension::Spherical, 0.3, 0.0, 50.0, &ps, 0.0).is_err());
    }
}
