//! aq-water: equation of state and dielectric properties of liquid water.
//!
//! Provides:
//! - `PhysicalState` (temperature + pressure)
//! - `WaterModel` trait with Debye–Hückel slopes as default methods
//! - Fine–Millero (1973) density, molar volume and compressibility
//! - Archer–Wang (1990) and Bradley–Pitzer (1979) dielectric constants
//! - Vectorized evaluation and property tables over state grids
//!
//! # Example
//!
//! ```
//! use aq_water::{PhysicalState, WaterModel, WaterPropertiesFineMillero};
//!
//! let water = WaterPropertiesFineMillero::archer_wang();
//! let state = PhysicalState::from_kelvin_atm(298.15, 1.0);
//! let rho = water.density(&state);
//! assert!((rho - 997.05).abs() < 0.01);
//! ```
//!
//! Inputs are never validated: a negative or NaN temperature yields NaN
//! properties, so arrays of states evaluate elementwise without failing.

pub mod dielectric;
pub mod error;
pub mod grid;
pub mod millero;
pub mod model;
pub mod state;
pub mod water;

pub use dielectric::DielectricModel;
pub use error::GridError;
pub use grid::{PropertyTable, StateGrid, evaluate, tabulate};
pub use model::{WaterModel, WaterProperty, WaterPropertyPack};
pub use state::PhysicalState;
pub use water::{MOLECULAR_WEIGHT, WaterPropertiesFineMillero};
