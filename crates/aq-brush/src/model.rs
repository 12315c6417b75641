//! Common contract of the brush free-energy models.

use crate::error::BrushResult;
use crate::geometry::BrushGeometry;
use aq_solver::{MinimizeConfig, QuadConfig, RootConfig};

/// Solver settings shared by the brush models.
///
/// Profile integrals default to a tighter tolerance than plain quadrature
/// since the multiplier searches difference them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverSettings {
    pub root: RootConfig,
    pub minimize: MinimizeConfig,
    pub quad: QuadConfig,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            root: RootConfig::default(),
            minimize: MinimizeConfig::default(),
            quad: QuadConfig {
                abs_tol: 1e-11,
                rel_tol: 1e-10,
                limit: 200,
            },
        }
    }
}

/// A brush with a definite equilibrium state.
pub trait BrushModel {
    fn name(&self) -> &str;

    /// Brush alone is one component, brush plus solvent two.
    fn num_of_components(&self) -> usize;

    fn geometry(&self) -> &BrushGeometry;

    /// Equilibrium height [Å]
    fn equilibrium_height(&self) -> BrushResult<f64>;

    /// Free energy per chain at equilibrium [kT]
    fn free_energy_per_chain(&self) -> BrushResult<f64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_profile_quadrature_is_tightened() {
        let settings = SolverSettings::default();
        assert_eq!(settings.root, RootConfig::default());
        assert_eq!(settings.minimize, MinimizeConfig::default());

        let plain = QuadConfig::default();
        assert_eq!((plain.abs_tol, plain.rel_tol, plain.limit), (1.49e-8, 1.49e-8, 50));
        assert!(settings.quad.abs_tol < plain.abs_tol);
        assert!(settings.quad.rel_tol < plain.rel_tol);
        assert!(settings.quad.limit > plain.limit);
    }
}
