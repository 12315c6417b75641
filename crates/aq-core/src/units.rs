// aq-core/src/units.rs

use uom::si::f64::{Pressure as UomPressure, ThermodynamicTemperature as UomTemperature};

// Canonical state types (SI, f64)
pub type Pressure = UomPressure;
pub type Temperature = UomTemperature;

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn atm(v: f64) -> Pressure {
    use uom::si::pressure::atmosphere;
    Pressure::new::<atmosphere>(v)
}

/// Scalar conversions used by the property models.
///
/// These take and return plain `f64` so that NaN and out-of-range inputs
/// propagate instead of failing.
pub mod convert {
    use super::constants::{ATM_IN_BAR, ATM_IN_PA, ZERO_CELSIUS_K};
    use physical_constants::AVOGADRO_CONSTANT;

    #[inline]
    pub fn celsius_to_kelvin(t: f64) -> f64 {
        t + ZERO_CELSIUS_K
    }

    #[inline]
    pub fn kelvin_to_celsius(t: f64) -> f64 {
        t - ZERO_CELSIUS_K
    }

    #[inline]
    pub fn atm_to_bar(p: f64) -> f64 {
        p * ATM_IN_BAR
    }

    #[inline]
    pub fn bar_to_atm(p: f64) -> f64 {
        p / ATM_IN_BAR
    }

    #[inline]
    pub fn atm_to_pascal(p: f64) -> f64 {
        p * ATM_IN_PA
    }

    #[inline]
    pub fn pascal_to_atm(p: f64) -> f64 {
        p / ATM_IN_PA
    }

    #[inline]
    pub fn m_to_angstrom(x: f64) -> f64 {
        x * 1e10
    }

    /// mol/L to molecules per Å³
    #[inline]
    pub fn mol_lit_to_mol_angstrom(c: f64) -> f64 {
        c * AVOGADRO_CONSTANT * 1e-27
    }
}

pub mod constants {
    use physical_constants::{
        AVOGADRO_CONSTANT, BOLTZMANN_CONSTANT, ELEMENTARY_CHARGE, MOLAR_GAS_CONSTANT,
        STANDARD_ATMOSPHERE, VACUUM_ELECTRIC_PERMITTIVITY,
    };
    use std::f64::consts::PI;

    pub const ZERO_CELSIUS_K: f64 = 273.15;
    pub const ATM_IN_PA: f64 = STANDARD_ATMOSPHERE;
    pub const ATM_IN_BAR: f64 = STANDARD_ATMOSPHERE * 1e-5;

    /// Ideal gas constant [J/(mol·K)]
    #[inline]
    pub fn r_gas() -> f64 {
        MOLAR_GAS_CONSTANT
    }

    /// Boltzmann constant [J/K]
    #[inline]
    pub fn k_boltzmann() -> f64 {
        BOLTZMANN_CONSTANT
    }

    /// Avogadro number [1/mol]
    #[inline]
    pub fn avogadro() -> f64 {
        AVOGADRO_CONSTANT
    }

    /// Electron charge [C]
    #[inline]
    pub fn e_charge() -> f64 {
        ELEMENTARY_CHARGE
    }

    /// Vacuum permittivity [F/m]
    #[inline]
    pub fn epsilon_0() -> f64 {
        VACUUM_ELECTRIC_PERMITTIVITY
    }

    /// 1/(4πε₀) [m/F]
    #[inline]
    pub fn one_over_4pi_epsilon0() -> f64 {
        1.0 / (4.0 * PI * VACUUM_ELECTRIC_PERMITTIVITY)
    }

    /// e²/(4πε₀) [J·m]
    #[inline]
    pub fn e_square() -> f64 {
        ELEMENTARY_CHARGE * ELEMENTARY_CHARGE * one_over_4pi_epsilon0()
    }
}
