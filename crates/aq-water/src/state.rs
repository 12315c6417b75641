//! Physical state definitions.

use aq_core::units::convert::{atm_to_bar, kelvin_to_celsius, pascal_to_atm};
use aq_core::units::{Pressure, Temperature, atm, k};

/// Temperature and pressure of the solution.
///
/// No validation: a state built from NaN or negative values is kept as is and
/// the models return NaN for it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhysicalState {
    t: Temperature,
    p: Pressure,
}

impl PhysicalState {
    pub fn new(t: Temperature, p: Pressure) -> Self {
        Self { t, p }
    }

    /// State from a temperature in Kelvin and an absolute pressure in atm.
    pub fn from_kelvin_atm(tk: f64, pa: f64) -> Self {
        Self::new(k(tk), atm(pa))
    }

    pub fn temperature(&self) -> Temperature {
        self.t
    }

    pub fn pressure(&self) -> Pressure {
        self.p
    }

    /// Temperature [K]
    pub fn tk(&self) -> f64 {
        self.t.value
    }

    /// Temperature [°C]
    pub fn celsius(&self) -> f64 {
        kelvin_to_celsius(self.tk())
    }

    /// Absolute pressure [atm]
    pub fn atm(&self) -> f64 {
        pascal_to_atm(self.p.value)
    }

    /// Absolute pressure [bar]
    pub fn bar(&self) -> f64 {
        atm_to_bar(self.atm())
    }

    /// Pressure above one atmosphere [bar]
    pub fn applied_bar(&self) -> f64 {
        atm_to_bar(self.atm()) - atm_to_bar(1.0)
    }

    /// Absolute pressure [MPa]
    pub fn mpa(&self) -> f64 {
        self.p.value * 1e-6
    }
}
