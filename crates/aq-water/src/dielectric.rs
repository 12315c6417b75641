//! Dielectric constant of water.
//!
//! Two correlations:
//! - Archer & Wang (1990): Kirkwood equation with a fitted correlation
//!   factor `g(ρ, T, p)`, solved in closed form for ε.
//! - Bradley & Pitzer (1979): `ε = ε1000 + C ln((B + P)/(B + 1000))`.

use crate::millero;
use crate::state::PhysicalState;
use aq_core::units::constants::{avogadro, epsilon_0, k_boltzmann};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Molar mass of water in kg/mol as used by the Kirkwood number density.
const WATER_KG_PER_MOL: f64 = 0.018_015_28;
/// Molecular polarizability over ε0 [m³]
const POLARIZABILITY: f64 = 18.145_839_2e-30;
/// Gas-phase dipole moment [C·m]
const DIPOLE: f64 = 6.137_577_6e-30;

/// Archer–Wang correlation-factor coefficients b1..b9.
const AW_B: [f64; 9] = [
    -4.044_525e-2,
    103.618_0,
    75.321_65,
    -23.237_78,
    -3.548_184,
    -1_246.311,
    263_307.7,
    -6.928_953e-1,
    -204.447_3,
];

/// Bradley–Pitzer coefficients U1..U9.
const BP_U: [f64; 9] = [
    3.427_9e2, -5.086_6e-3, 9.469_0e-7, -2.052_5, 3.115_9e3, -1.828_9e2, -8.032_5e3, 4.214_2e6,
    2.141_7,
];

/// Choice of dielectric correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DielectricModel {
    #[default]
    ArcherWang,
    BradleyPitzer,
}

impl DielectricModel {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ArcherWang => "Archer-Wang",
            Self::BradleyPitzer => "Bradley-Pitzer",
        }
    }

    /// Dielectric constant (dimensionless).
    pub fn dielectric_constant(&self, state: &PhysicalState) -> f64 {
        match self {
            Self::ArcherWang => archer_wang(state).0,
            Self::BradleyPitzer => bradley_pitzer(state.tk(), state.bar()).0,
        }
    }

    /// ∂ε/∂P at constant temperature [bar⁻¹].
    pub fn dielectric_constant_der_p(&self, state: &PhysicalState) -> f64 {
        match self {
            Self::ArcherWang => archer_wang(state).1,
            Self::BradleyPitzer => bradley_pitzer(state.tk(), state.bar()).1,
        }
    }
}

/// Archer–Wang ε and ∂ε/∂P [bar⁻¹].
///
/// The Kirkwood relation `(ε-1)(2ε+1)/(9ε) = n/(3ε0) (α + g μ²/(3kT))` is a
/// quadratic in ε. The pressure derivative follows from differentiating both
/// sides, with `∂ρ/∂P = ρ β` from the Fine–Millero equation of state.
fn archer_wang(state: &PhysicalState) -> (f64, f64) {
    let tk = state.tk();
    let t = state.celsius();
    let p_applied = state.applied_bar();
    let p = state.mpa();

    let rho = 1000.0 / millero::specific_volume(t, p_applied);
    let drho_dp = rho * millero::compressibility(t, p_applied);

    let [b1, b2, b3, b4, b5, b6, b7, b8, b9] = AW_B;
    let tr = tk - 215.0;
    let exp_term = (b6 / tk + b7 / (tk * tk) + b8 * p / tk + b9 * p / (tk * tk)).exp();
    let g_fit = b1 * p / tk + b2 / tk.sqrt() + b3 / tr + b4 / tr.sqrt() + b5 / tr.powf(0.25) + exp_term;
    // MPa per bar
    let dg_fit_dp = 0.1 * (b1 / tk + exp_term * (b8 / tk + b9 / (tk * tk)));

    let g = 1.0 + rho / 1000.0 * g_fit;
    let dg_dp = drho_dp / 1000.0 * g_fit + rho / 1000.0 * dg_fit_dp;

    let dipole_term = DIPOLE * DIPOLE / (3.0 * k_boltzmann() * tk);
    let density_factor = avogadro() / (WATER_KG_PER_MOL * 3.0 * epsilon_0());
    let polarization = POLARIZABILITY * epsilon_0() + g * dipole_term;

    let rhs = density_factor * rho * polarization;
    let drhs_dp = density_factor * (drho_dp * polarization + rho * dg_dp * dipole_term);

    // 2ε² - (1 + 9 rhs) ε - 1 = 0, positive root
    let a = 9.0 * rhs + 1.0;
    let eps = 0.25 * (a + (a * a + 8.0).sqrt());
    let dlhs_deps = (2.0 + 1.0 / (eps * eps)) / 9.0;

    (eps, drhs_dp / dlhs_deps)
}

/// Bradley–Pitzer ε and ∂ε/∂P [bar⁻¹], `p` absolute in bar.
fn bradley_pitzer(tk: f64, p: f64) -> (f64, f64) {
    let [u1, u2, u3, u4, u5, u6, u7, u8, u9] = BP_U;
    let eps1000 = u1 * (u2 * tk + u3 * tk * tk).exp();
    let c = u4 + u5 / (u6 + tk);
    let b = u7 + u8 / tk + u9 * tk;
    (eps1000 + c * ((b + p) / (b + 1000.0)).ln(), c / (b + p))
}
