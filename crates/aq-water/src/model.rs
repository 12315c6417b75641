//! Water property model trait.

use crate::state::PhysicalState;
use aq_core::units::constants::{avogadro, e_square, k_boltzmann, r_gas};
use aq_core::units::convert::bar_to_atm;
use std::f64::consts::PI;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Properties returned by a [`WaterModel`], for grid evaluation and tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WaterProperty {
    /// Density [kg/m³]
    Density,
    /// Molar volume [m³/mol]
    MolarVolume,
    /// Isothermal compressibility [atm⁻¹]
    Compressibility,
    /// Relative permittivity
    DielectricConstant,
    /// ∂ε/∂P [bar⁻¹]
    DielectricConstantDerP,
    /// Debye–Hückel osmotic slope [kg^½ mol^-½]
    APhi,
    /// Debye–Hückel volume slope [cm³ kg^½ mol^-3/2]
    AV,
}

impl fmt::Display for WaterProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Density => "density [kg/m3]",
            Self::MolarVolume => "molar volume [m3/mol]",
            Self::Compressibility => "compressibility [1/atm]",
            Self::DielectricConstant => "dielectric constant",
            Self::DielectricConstantDerP => "dielectric constant dP [1/bar]",
            Self::APhi => "A_phi [kg^1/2 mol^-1/2]",
            Self::AV => "A_V [cm3 kg^1/2 mol^-3/2]",
        };
        write!(f, "{label}")
    }
}

/// Every property of a single state, computed in one call.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WaterPropertyPack {
    pub state: PhysicalState,
    /// Density [kg/m³]
    pub density: f64,
    /// Molar volume [m³/mol]
    pub molar_volume: f64,
    /// Compressibility [atm⁻¹]
    pub compressibility: f64,
    pub dielectric_constant: f64,
    /// ∂ε/∂P [bar⁻¹]
    pub dielectric_constant_der_p: f64,
    pub a_phi: f64,
    pub a_v: f64,
}

impl WaterPropertyPack {
    pub fn get(&self, property: WaterProperty) -> f64 {
        match property {
            WaterProperty::Density => self.density,
            WaterProperty::MolarVolume => self.molar_volume,
            WaterProperty::Compressibility => self.compressibility,
            WaterProperty::DielectricConstant => self.dielectric_constant,
            WaterProperty::DielectricConstantDerP => self.dielectric_constant_der_p,
            WaterProperty::APhi => self.a_phi,
            WaterProperty::AV => self.a_v,
        }
    }

    /// Return a summary string of all contained properties (for debugging).
    pub fn summary(&self) -> String {
        format!(
            "Pack(T={:.2}K,P={:.3}atm,ρ={:.3}kg/m³,β={:.4e}/atm,ε={:.3},Aφ={:.5},Av={:.4})",
            self.state.tk(),
            self.state.atm(),
            self.density,
            self.compressibility,
            self.dielectric_constant,
            self.a_phi,
            self.a_v
        )
    }
}

/// Water equation of state and dielectric response.
///
/// Implementations are pure functions of the state. They never fail: inputs
/// outside the fitted range extrapolate and NaN inputs give NaN outputs.
pub trait WaterModel {
    /// Get the model name (for debugging/logging).
    fn name(&self) -> &str;

    /// Density [kg/m³]
    fn density(&self, state: &PhysicalState) -> f64;

    /// Molar volume [m³/mol]
    fn molar_volume(&self, state: &PhysicalState) -> f64;

    /// Isothermal compressibility [atm⁻¹]
    fn compressibility(&self, state: &PhysicalState) -> f64;

    /// Relative permittivity
    fn dielectric_constant(&self, state: &PhysicalState) -> f64;

    /// ∂ε/∂P at constant temperature [bar⁻¹]
    fn dielectric_constant_der_p(&self, state: &PhysicalState) -> f64;

    /// Debye–Hückel osmotic coefficient slope [kg^½ mol^-½].
    ///
    /// `A_φ = (1/3) (2π N_A ρ)^½ (e² / (4πε0 ε k T))^{3/2}`
    fn a_phi(&self, state: &PhysicalState) -> f64 {
        let rho = self.density(state);
        let eps = self.dielectric_constant(state);
        let bjerrum = e_square() / (eps * k_boltzmann() * state.tk());
        (2.0 * PI * avogadro() * rho).sqrt() * bjerrum.powf(1.5) / 3.0
    }

    /// Debye–Hückel apparent molar volume slope [cm³ kg^½ mol^-3/2].
    ///
    /// `A_V = 2 R T A_φ (3 ∂lnε/∂P - β)` with `R T` in bar·cm³/mol.
    fn a_v(&self, state: &PhysicalState) -> f64 {
        let eps = self.dielectric_constant(state);
        let deps = self.dielectric_constant_der_p(state);
        // compressibility in bar⁻¹
        let beta = bar_to_atm(self.compressibility(state));
        let rt = 10.0 * r_gas() * state.tk();
        2.0 * rt * self.a_phi(state) * (3.0 * deps / eps - beta)
    }

    /// Single property by tag.
    fn property(&self, state: &PhysicalState, property: WaterProperty) -> f64 {
        match property {
            WaterProperty::Density => self.density(state),
            WaterProperty::MolarVolume => self.molar_volume(state),
            WaterProperty::Compressibility => self.compressibility(state),
            WaterProperty::DielectricConstant => self.dielectric_constant(state),
            WaterProperty::DielectricConstantDerP => self.dielectric_constant_der_p(state),
            WaterProperty::APhi => self.a_phi(state),
            WaterProperty::AV => self.a_v(state),
        }
    }

    /// All properties of one state.
    fn property_pack(&self, state: &PhysicalState) -> WaterPropertyPack {
        WaterPropertyPack {
            state: *state,
            density: self.density(state),
            molar_volume: self.molar_volume(state),
            compressibility: self.compressibility(state),
            dielectric_constant: self.dielectric_constant(state),
            dielectric_constant_der_p: self.dielectric_constant_der_p(state),
            a_phi: self.a_phi(state),
            a_v: self.a_v(state),
        }
    }
}
