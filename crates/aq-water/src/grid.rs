//! Vectorized evaluation of water properties.
//!
//! A [`StateGrid`] pairs equal-length temperature and pressure arrays and is
//! evaluated elementwise. [`tabulate`] keeps every property per state, laid
//! out like the published reference tables.

use crate::error::GridError;
use crate::model::{WaterModel, WaterProperty, WaterPropertyPack};
use crate::state::PhysicalState;
use tracing::debug;

/// Elementwise pairs of temperatures [K] and pressures [atm].
#[derive(Debug, Clone, PartialEq)]
pub struct StateGrid {
    states: Vec<PhysicalState>,
}

impl StateGrid {
    /// Pair `temperatures[i]` with `pressures[i]`.
    pub fn new(temperatures: &[f64], pressures: &[f64]) -> Result<Self, GridError> {
        if temperatures.len() != pressures.len() {
            return Err(GridError::ShapeMismatch {
                temperatures: temperatures.len(),
                pressures: pressures.len(),
            });
        }
        Ok(Self {
            states: temperatures
                .iter()
                .zip(pressures)
                .map(|(&tk, &pa)| PhysicalState::from_kelvin_atm(tk, pa))
                .collect(),
        })
    }

    /// All temperatures at a single pressure.
    pub fn isobar(temperatures: &[f64], pressure: f64) -> Self {
        Self {
            states: temperatures
                .iter()
                .map(|&tk| PhysicalState::from_kelvin_atm(tk, pressure))
                .collect(),
        }
    }

    /// All pressures at a single temperature.
    pub fn isotherm(temperature: f64, pressures: &[f64]) -> Self {
        Self {
            states: pressures
                .iter()
                .map(|&pa| PhysicalState::from_kelvin_atm(temperature, pa))
                .collect(),
        }
    }

    /// Full product of `temperatures` × `pressures`, temperature-major.
    pub fn product(temperatures: &[f64], pressures: &[f64]) -> Self {
        Self {
            states: temperatures
                .iter()
                .flat_map(|&tk| {
                    pressures
                        .iter()
                        .map(move |&pa| PhysicalState::from_kelvin_atm(tk, pa))
                })
                .collect(),
        }
    }

    pub fn states(&self) -> &[PhysicalState] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

/// Evaluate one property at every state of the grid.
pub fn evaluate<M: WaterModel + ?Sized>(model: &M, grid: &StateGrid, property: WaterProperty) -> Vec<f64> {
    grid.states.iter().map(|s| model.property(s, property)).collect()
}

/// Every property of a model over a grid, one row per state.
#[derive(Debug, Clone)]
pub struct PropertyTable {
    /// Name of the model that produced the values
    pub model: String,
    pub states: Vec<PhysicalState>,
    pub packs: Vec<WaterPropertyPack>,
}

impl PropertyTable {
    /// Column of one property.
    pub fn values(&self, property: WaterProperty) -> Vec<f64> {
        self.packs.iter().map(|p| p.get(property)).collect()
    }

    pub fn density(&self) -> Vec<f64> {
        self.values(WaterProperty::Density)
    }

    pub fn dielectric_constant(&self) -> Vec<f64> {
        self.values(WaterProperty::DielectricConstant)
    }

    pub fn compressibility(&self) -> Vec<f64> {
        self.values(WaterProperty::Compressibility)
    }

    /// Rows whose properties came out NaN or infinite
    pub fn num_non_finite(&self) -> usize {
        self.packs
            .iter()
            .filter(|p| !(p.density.is_finite() && p.dielectric_constant.is_finite()))
            .count()
    }
}

pub fn tabulate<M: WaterModel + ?Sized>(model: &M, grid: &StateGrid) -> PropertyTable {
    let packs: Vec<WaterPropertyPack> = grid.states.iter().map(|s| model.property_pack(s)).collect();
    let table = PropertyTable {
        model: model.name().to_string(),
        states: grid.states.clone(),
        packs,
    };
    debug!(
        model = %table.model,
        rows = table.packs.len(),
        non_finite = table.num_non_finite(),
        "water property table"
    );
    table
}
