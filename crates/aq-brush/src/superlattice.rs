//! Binary brush on nanocrystals packed in a superlattice.

use crate::binary_brush::BinaryBrush;
use crate::error::{BrushError, BrushResult};
use crate::geometry::Dimension;
use crate::model::BrushModel;
use crate::polymer::PolymerProperties;
use aq_lattice::WignerSeitzCell;
use aq_solver::{MinimizeResult, RootResult};
use tracing::debug;

/// Brush confined by the Wigner–Seitz cell of a superlattice.
///
/// With nearest-neighbour distance `d_n` the cell faces sit at `d_n / 2`
/// from the particle center. Along the face normal (`min θ`) the brush is
/// squeezed hardest, toward a cell vertex (`max θ`) it has the most room.
/// Both extremes are solved for their Lagrange multipliers, each search
/// starting from the unconfined optimum.
#[derive(Clone, Debug)]
pub struct BinaryBrushSuperLattice {
    brush: BinaryBrush,
    cell_name: String,
    d_n: f64,
    h_min: f64,
    h_max: f64,
    d_min: f64,
    d_max: f64,
    lag_opt: MinimizeResult,
    lag_max: RootResult,
    lag_min: RootResult,
}

impl BinaryBrushSuperLattice {
    /// `sigma` in chains/nm², `rad` and `d_n` in Å.
    pub fn new(
        dim: Dimension,
        chi: f64,
        sigma: f64,
        rad: f64,
        pol: &dyn PolymerProperties,
        d_n: f64,
        cell: &dyn WignerSeitzCell,
    ) -> BrushResult<Self> {
        if !(d_n.is_finite() && d_n > 0.0) {
            return Err(BrushError::invalid(format!(
                "nearest-neighbour distance must be positive, got {d_n}"
            )));
        }
        cell.validate()?;

        let lag_ini = 1e-3 - chi;
        let brush = BinaryBrush::new(dim, chi, sigma, rad, pol, lag_ini)?;

        // R̂ b, the core radius in Å
        let core = brush.geometry().hat_r * brush.chain().k_length;
        let h_of = |theta: f64| 0.5 * d_n / theta.cos() - core;
        let h_min = cell
            .min_theta()
            .into_iter()
            .map(h_of)
            .fold(f64::INFINITY, f64::min);
        let h_max = cell
            .max_theta()
            .into_iter()
            .map(h_of)
            .fold(f64::NEG_INFINITY, f64::max);
        if !(h_min.is_finite() && h_max.is_finite()) {
            return Err(BrushError::invalid("cell has no wedges"));
        }
        if h_min <= 0.0 {
            return Err(BrushError::invalid(format!(
                "cores overlap: d_n = {d_n} Å for radius {rad} Å in a {}",
                cell.name()
            )));
        }
        let d_min = 2.0 * (core + h_min);
        let d_max = 2.0 * (core + h_max);
        debug!(cell = cell.name(), h_min, h_max, d_min, d_max, "superlattice heights");

        let lag_opt = brush.optimal_lambda()?;
        let lag_max = brush.determine_lagrange(h_max, Some(lag_opt.x))?;
        let lag_min = brush.determine_lagrange(h_min, Some(lag_opt.x))?;
        debug!(
            lag_opt = lag_opt.x,
            lag_max = lag_max.x,
            lag_min = lag_min.x,
            "superlattice multipliers"
        );

        Ok(Self {
            brush,
            cell_name: cell.name().to_string(),
            d_n,
            h_min,
            h_max,
            d_min,
            d_max,
            lag_opt,
            lag_max,
            lag_min,
        })
    }

    /// Brush and solvent
    pub fn num_of_components(&self) -> usize {
        2
    }

    pub fn brush(&self) -> &BinaryBrush {
        &self.brush
    }

    pub fn cell_name(&self) -> &str {
        &self.cell_name
    }

    pub fn d_n(&self) -> f64 {
        self.d_n
    }

    /// Brush height toward the nearest face [Å]
    pub fn h_min(&self) -> f64 {
        self.h_min
    }

    /// Brush height toward the farthest vertex [Å]
    pub fn h_max(&self) -> f64 {
        self.h_max
    }

    pub fn d_min(&self) -> f64 {
        self.d_min
    }

    pub fn d_max(&self) -> f64 {
        self.d_max
    }

    /// Unconfined optimum used to seed both confined searches.
    pub fn lag_opt(&self) -> &MinimizeResult {
        &self.lag_opt
    }

    pub fn lag_max(&self) -> &RootResult {
        &self.lag_max
    }

    pub fn lag_min(&self) -> &RootResult {
        &self.lag_min
    }

    /// Free energy per chain [kT] of the brush confined to `h_max`.
    pub fn free_energy_max(&self) -> BrushResult<f64> {
        self.brush.free_energy(self.lag_max.x, self.h_max)
    }

    /// Free energy per chain [kT] of the brush confined to `h_min`.
    pub fn free_energy_min(&self) -> BrushResult<f64> {
        self.brush.free_energy(self.lag_min.x, self.h_min)
    }
}
