//! Fine–Millero water with a selectable dielectric correlation.

use crate::dielectric::DielectricModel;
use crate::millero;
use crate::model::WaterModel;
use crate::state::PhysicalState;
use aq_core::units::convert::atm_to_bar;

/// Molecular weight of water [g/mol]
pub const MOLECULAR_WEIGHT: f64 = 18.015_28;

/// Fine–Millero equation of state for liquid water.
///
/// Density, molar volume and compressibility come from the secant bulk
/// modulus fit. The dielectric constant is Archer–Wang unless built with
/// [`WaterPropertiesFineMillero::bradley_pitzer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaterPropertiesFineMillero {
    dielectric: DielectricModel,
}

impl WaterPropertiesFineMillero {
    pub fn new(dielectric: DielectricModel) -> Self {
        Self { dielectric }
    }

    pub fn archer_wang() -> Self {
        Self::new(DielectricModel::ArcherWang)
    }

    pub fn bradley_pitzer() -> Self {
        Self::new(DielectricModel::BradleyPitzer)
    }

    pub fn dielectric_model(&self) -> DielectricModel {
        self.dielectric
    }

    /// Specific volume [cm³/g]
    pub fn specific_volume(&self, state: &PhysicalState) -> f64 {
        millero::specific_volume(state.celsius(), state.applied_bar())
    }
}

impl WaterModel for WaterPropertiesFineMillero {
    fn name(&self) -> &str {
        match self.dielectric {
            DielectricModel::ArcherWang => "Fine-Millero / Archer-Wang",
            DielectricModel::BradleyPitzer => "Fine-Millero / Bradley-Pitzer",
        }
    }

    fn density(&self, state: &PhysicalState) -> f64 {
        1e3 / self.specific_volume(state)
    }

    fn molar_volume(&self, state: &PhysicalState) -> f64 {
        MOLECULAR_WEIGHT * self.specific_volume(state) * 1e-6
    }

    fn compressibility(&self, state: &PhysicalState) -> f64 {
        atm_to_bar(millero::compressibility(state.celsius(), state.applied_bar()))
    }

    fn dielectric_constant(&self, state: &PhysicalState) -> f64 {
        self.dielectric.dielectric_constant(state)
    }

    fn dielectric_constant_der_p(&self, state: &PhysicalState) -> f64 {
        self.dielectric.dielectric_constant_der_p(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WaterProperty;
    use approx::assert_abs_diff_eq;

    fn ambient() -> PhysicalState {
        PhysicalState::from_kelvin_atm(298.15, 1.0)
    }

    #[test]
    fn ambient_density_and_volume() {
        let w = WaterPropertiesFineMillero::archer_wang();
        assert_abs_diff_eq!(w.density(&ambient()), 997.0475, epsilon = 1e-3);
        assert_abs_diff_eq!(w.molar_volume(&ambient()), 1.806_863e-5, epsilon = 1e-10);
    }

    #[test]
    fn debye_huckel_slopes() {
        let bp = WaterPropertiesFineMillero::bradley_pitzer();
        assert_abs_diff_eq!(bp.a_phi(&ambient()), 0.391_448, epsilon = 1e-5);
        assert_abs_diff_eq!(bp.a_v(&ambient()), 1.8743, epsilon = 1e-3);

        let aw = WaterPropertiesFineMillero::archer_wang();
        assert_abs_diff_eq!(aw.a_phi(&ambient()), 0.391_469, epsilon = 1e-5);
        assert_abs_diff_eq!(aw.a_v(&ambient()), 1.8303, epsilon = 1e-3);
    }

    #[test]
    fn eos_is_shared_between_dielectric_choices() {
        let s = PhysicalState::from_kelvin_atm(320.0, 150.0);
        let aw = WaterPropertiesFineMillero::archer_wang();
        let bp = WaterPropertiesFineMillero::bradley_pitzer();
        assert_eq!(aw.density(&s), bp.density(&s));
        assert_eq!(aw.compressibility(&s), bp.compressibility(&s));
        assert_ne!(aw.name(), bp.name());
    }

    #[test]
    fn pack_matches_individual_queries() {
        let w = WaterPropertiesFineMillero::default();
        let pack = w.property_pack(&ambient());
        for prop in [
            WaterProperty::Density,
            WaterProperty::MolarVolume,
            WaterProperty::Compressibility,
            WaterProperty::DielectricConstant,
            WaterProperty::DielectricConstantDerP,
            WaterProperty::APhi,
            WaterProperty::AV,
        ] {
            assert_eq!(pack.get(prop), w.property(&ambient(), prop));
        }
        assert!(pack.summary().contains("T=298.15K"));
    }

    #[test]
    fn negative_temperature_is_not_rejected() {
        let w = WaterPropertiesFineMillero::default();
        let s = PhysicalState::from_kelvin_atm(-10.0, 1.0);
        // extrapolated or NaN, but never a panic
        let _ = w.property_pack(&s);
    }
}
