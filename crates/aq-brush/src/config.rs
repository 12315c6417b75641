//! Serializable description of a brush superlattice.
//!
//! ```yaml
//! dimension: spherical
//! chi: 0.3
//! sigma: 1.0
//! radius: 50.0
//! nearest_neighbor: 220.0
//! polymer:
//!   kind: polystyrene
//!   molecular_weight: 10000.0
//! cell: icosahedron
//! ```

use crate::error::{BrushError, BrushResult};
use crate::geometry::Dimension;
use crate::polymer::Polymer;
use crate::superlattice::BinaryBrushSuperLattice;
use aq_lattice::{Icosahedron, WignerSeitzCell};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PolymerConfig {
    Polystyrene {
        molecular_weight: f64,
    },
    Peo {
        molecular_weight: f64,
    },
    Custom {
        name: String,
        k_length: f64,
        kuhn_mass: f64,
        density: f64,
        molecular_weight: f64,
    },
}

impl PolymerConfig {
    pub fn build(&self) -> BrushResult<Polymer> {
        match self {
            PolymerConfig::Polystyrene { molecular_weight } => Polymer::polystyrene(*molecular_weight),
            PolymerConfig::Peo { molecular_weight } => Polymer::peo(*molecular_weight),
            PolymerConfig::Custom {
                name,
                k_length,
                kuhn_mass,
                density,
                molecular_weight,
            } => Polymer::new(name.clone(), *k_length, *kuhn_mass, *density, *molecular_weight),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellConfig {
    #[default]
    Icosahedron,
}

impl CellConfig {
    pub fn build(&self) -> Box<dyn WignerSeitzCell> {
        match self {
            CellConfig::Icosahedron => Box::new(Icosahedron::new()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuperLatticeConfig {
    pub dimension: Dimension,
    /// Flory–Huggins parameter
    pub chi: f64,
    /// Grafting density [chains/nm²]
    pub sigma: f64,
    /// Core radius [Å]
    pub radius: f64,
    /// Nearest-neighbour distance [Å]
    pub nearest_neighbor: f64,
    pub polymer: PolymerConfig,
    #[serde(default)]
    pub cell: CellConfig,
}

impl SuperLatticeConfig {
    pub fn from_yaml_str(text: &str) -> BrushResult<Self> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(text: &str) -> BrushResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> BrushResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Range checks that do not need a solve.
    pub fn validate(&self) -> BrushResult<()> {
        if !self.chi.is_finite() {
            return Err(BrushError::invalid(format!("chi must be finite, got {}", self.chi)));
        }
        for (value, field) in [
            (self.sigma, "sigma"),
            (self.radius, "radius"),
            (self.nearest_neighbor, "nearest_neighbor"),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(BrushError::invalid(format!("{field} must be positive, got {value}")));
            }
        }
        if self.nearest_neighbor <= 2.0 * self.radius {
            return Err(BrushError::invalid(format!(
                "nearest_neighbor {} Å does not clear two cores of radius {} Å",
                self.nearest_neighbor, self.radius
            )));
        }
        Ok(())
    }

    pub fn build(&self) -> BrushResult<BinaryBrushSuperLattice> {
        self.validate()?;
        let polymer = self.polymer.build()?;
        let cell = self.cell.build();
        BinaryBrushSuperLattice::new(
            self.dimension,
            self.chi,
            self.sigma,
            self.radius,
            &polymer,
            self.nearest_neighbor,
            cell.as_ref(),
        )
    }
}
