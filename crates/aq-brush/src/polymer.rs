//! Polymer chain properties.

use crate::error::BrushResult;
use aq_core::numeric::ensure_positive;
use aq_core::units::constants::avogadro;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Coarse-grained description of a chain in Kuhn segments.
pub trait PolymerProperties {
    fn name(&self) -> &str;

    /// Kuhn length b [Å]
    fn k_length(&self) -> f64;

    /// Volume of one Kuhn segment v [Å³]
    fn kuhn_volume(&self) -> f64;

    /// Number of Kuhn segments per chain N
    fn kuhn_segments(&self) -> f64;
}

/// Linear homopolymer built from melt data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Polymer {
    pub name: String,
    /// Kuhn length [Å]
    pub k_length: f64,
    /// Molar mass of a Kuhn segment [g/mol]
    pub kuhn_mass: f64,
    /// Melt density [g/cm³]
    pub density: f64,
    /// Chain molecular weight [g/mol]
    pub molecular_weight: f64,
}

impl Polymer {
    pub fn new(
        name: impl Into<String>,
        k_length: f64,
        kuhn_mass: f64,
        density: f64,
        molecular_weight: f64,
    ) -> BrushResult<Self> {
        ensure_positive(k_length, "Kuhn length")?;
        ensure_positive(kuhn_mass, "Kuhn segment mass")?;
        ensure_positive(density, "melt density")?;
        ensure_positive(molecular_weight, "molecular weight")?;
        Ok(Self {
            name: name.into(),
            k_length,
            kuhn_mass,
            density,
            molecular_weight,
        })
    }

    /// Atactic polystyrene (Rubinstein & Colby Table 2.1).
    pub fn polystyrene(molecular_weight: f64) -> BrushResult<Self> {
        Self::new("polystyrene", 18.0, 720.0, 1.05, molecular_weight)
    }

    /// Poly(ethylene oxide).
    pub fn peo(molecular_weight: f64) -> BrushResult<Self> {
        Self::new("poly(ethylene oxide)", 11.0, 137.0, 1.125, molecular_weight)
    }
}

impl PolymerProperties for Polymer {
    fn name(&self) -> &str {
        &self.name
    }

    fn k_length(&self) -> f64 {
        self.k_length
    }

    fn kuhn_volume(&self) -> f64 {
        // cm³ to Å³
        self.kuhn_mass / (self.density * avogadro()) * 1e24
    }

    fn kuhn_segments(&self) -> f64 {
        self.molecular_weight / self.kuhn_mass
    }
}

/// Chain quantities of a grafted layer in Kuhn units.
#[derive(Clone, Debug, PartialEq)]
pub struct ReducedChain {
    pub polymer: String,
    /// Kuhn length [Å]
    pub k_length: f64,
    /// Kuhn segments per chain N
    pub segments: f64,
    /// Dry layer thickness on a flat surface, `ŝ = σ N v / b`
    pub s_hat: f64,
    /// Stretching constant `κ = 3π² / (8 N²)`
    pub kappa: f64,
}

impl ReducedChain {
    /// `sigma` in chains/nm².
    pub fn new(pol: &dyn PolymerProperties, sigma: f64) -> Self {
        let n = pol.kuhn_segments();
        Self {
            polymer: pol.name().to_string(),
            k_length: pol.k_length(),
            segments: n,
            // chains/nm² to chains/Å²
            s_hat: sigma / 100.0 * n * pol.kuhn_volume() / pol.k_length(),
            kappa: 3.0 * PI * PI / (8.0 * n * n),
        }
    }
}
