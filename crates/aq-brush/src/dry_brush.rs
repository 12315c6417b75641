//! Melt brush without solvent.

use crate::error::BrushResult;
use crate::geometry::{BrushGeometry, Dimension};
use crate::model::{BrushModel, SolverSettings};
use crate::polymer::{PolymerProperties, ReducedChain};
use aq_solver::integrate;

/// Brush filling space at `φ = 1`.
///
/// The height follows from volume conservation alone; the free energy is the
/// parabolic stretching energy of the chains.
#[derive(Clone, Debug)]
pub struct DryBrush {
    geometry: BrushGeometry,
    chain: ReducedChain,
    settings: SolverSettings,
}

impl DryBrush {
    pub fn new(
        dim: Dimension,
        sigma: f64,
        rad: f64,
        pol: &dyn PolymerProperties,
    ) -> BrushResult<Self> {
        let geometry = BrushGeometry::new(dim, sigma, rad, pol.k_length())?;
        Ok(Self {
            geometry,
            chain: ReducedChain::new(pol, sigma),
            settings: SolverSettings::default(),
        })
    }

    pub fn chain(&self) -> &ReducedChain {
        &self.chain
    }

    /// Height in Kuhn lengths.
    pub fn reduced_height(&self) -> f64 {
        self.geometry.height_enclosing(self.chain.s_hat)
    }

    /// Height [Å]
    pub fn height(&self) -> f64 {
        self.reduced_height() * self.chain.k_length
    }

    /// Stretching free energy per chain [kT], `(N/ŝ) ∫ g κ u² du`.
    pub fn free_energy(&self) -> BrushResult<f64> {
        let kappa = self.chain.kappa;
        let elastic = integrate(
            |u| self.geometry.measure(u) * kappa * u * u,
            0.0,
            self.reduced_height(),
            &self.settings.quad,
        )?;
        Ok(self.chain.segments / self.chain.s_hat * elastic)
    }
}

impl BrushModel for DryBrush {
    fn name(&self) -> &str {
        "dry brush"
    }

    fn num_of_components(&self) -> usize {
        1
    }

    fn geometry(&self) -> &BrushGeometry {
        &self.geometry
    }

    fn equilibrium_height(&self) -> BrushResult<f64> {
        Ok(self.height())
    }

    fn free_energy_per_chain(&self) -> BrushResult<f64> {
        self.free_energy()
    }
}
