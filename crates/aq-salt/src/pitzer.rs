//! Pitzer salt model contract and the properties derived from it.

use aq_core::units::constants::r_gas;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stoichiometry and reference values of a salt.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ActualCoefficients {
    /// `[[ν_M, ν_X], [z_M, z_X]]`
    pub stoichiometry: [[f64; 2]; 2],
    /// `[molecular weight (g/mol), reference molality m_ref, moles of water y_ref]`
    pub reference: [f64; 3],
}

impl ActualCoefficients {
    pub fn nu_m(&self) -> f64 {
        self.stoichiometry[0][0]
    }

    pub fn nu_x(&self) -> f64 {
        self.stoichiometry[0][1]
    }

    pub fn z_m(&self) -> f64 {
        self.stoichiometry[1][0]
    }

    pub fn z_x(&self) -> f64 {
        self.stoichiometry[1][1]
    }

    /// Ions per formula unit
    pub fn nu(&self) -> f64 {
        self.nu_m() + self.nu_x()
    }

    pub fn molecular_weight(&self) -> f64 {
        self.reference[0]
    }

    pub fn m_ref(&self) -> f64 {
        self.reference[1]
    }

    pub fn y_ref(&self) -> f64 {
        self.reference[2]
    }
}

/// β0, β1, β2, C0, C1, C2, D0, D1, D2.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PitzerParameters {
    pub beta0: f64,
    pub beta1: f64,
    pub beta2: f64,
    pub c0: f64,
    pub c1: f64,
    pub c2: f64,
    pub d0: f64,
    pub d1: f64,
    pub d2: f64,
}

impl PitzerParameters {
    pub fn to_array(&self) -> [f64; 9] {
        [
            self.beta0, self.beta1, self.beta2, self.c0, self.c1, self.c2, self.d0, self.d1,
            self.d2,
        ]
    }
}

/// Pressure derivatives, led by the infinite dilution molar volume.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PitzerParametersDerP {
    /// Infinite dilution molar volume V° [cm³/mol]
    pub v0: f64,
    /// ∂/∂P of each parameter [kg mol⁻¹ bar⁻¹]
    pub params: PitzerParameters,
}

impl PitzerParametersDerP {
    pub fn to_array(&self) -> [f64; 10] {
        let p = self.params.to_array();
        [self.v0, p[0], p[1], p[2], p[3], p[4], p[5], p[6], p[7], p[8]]
    }
}

/// Ionic-strength exponents α and ion-size parameter b.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IonParameters {
    pub alpha_b1: f64,
    pub alpha_b2: f64,
    pub alpha_c1: f64,
    pub alpha_c2: f64,
    pub alpha_d1: f64,
    pub alpha_d2: f64,
    pub b: f64,
}

impl IonParameters {
    pub fn to_array(&self) -> [f64; 7] {
        [
            self.alpha_b1,
            self.alpha_b2,
            self.alpha_c1,
            self.alpha_c2,
            self.alpha_d1,
            self.alpha_d2,
            self.b,
        ]
    }
}

/// `g(x) = 2 [1 - (1 + x) e^{-x}] / x²`, with `g(0) = 1`.
pub fn pitzer_g(x: f64) -> f64 {
    if x.abs() < 1e-2 {
        // closed form cancels below here; series error is x⁵/420
        return 1.0 + x * (-2.0 / 3.0 + x * (1.0 / 4.0 + x * (-1.0 / 15.0 + x / 72.0)));
    }
    2.0 * (1.0 - (1.0 + x) * (-x).exp()) / (x * x)
}

/// Query contract for a salt described by Pitzer ion-interaction parameters.
///
/// Implementors compute everything at construction for one temperature and
/// pressure. The derived properties use the single-salt Pitzer equations with
/// `C^φ = 2 |z_M z_X|^½ C0`; the C1/C2 and D terms do not enter them.
pub trait SaltPropertiesPitzer {
    fn name(&self) -> &str;

    /// Temperature [K]
    fn temperature(&self) -> f64;

    /// Pressure [atm]
    fn pressure(&self) -> f64;

    fn actual_coefficients(&self) -> ActualCoefficients;

    fn pitzer_parameters(&self) -> PitzerParameters;

    fn pitzer_parameters_der_p(&self) -> PitzerParametersDerP;

    fn pitzer_parameters_der_t(&self) -> PitzerParameters;

    fn ion_parameters(&self) -> IonParameters;

    /// Debye–Hückel osmotic slope of the solvent [kg^½ mol^-½]
    fn a_phi(&self) -> f64;

    /// Debye–Hückel volume slope of the solvent [cm³ kg^½ mol^-3/2]
    fn a_v(&self) -> f64;

    /// Infinite dilution molar volume [m³/mol]
    fn molar_volume_infinite_dilution(&self) -> f64 {
        1e-6 * self.pitzer_parameters_der_p().v0
    }

    /// Ionic strength at molality `m` [mol/kg]
    fn ionic_strength(&self, m: f64) -> f64 {
        let c = self.actual_coefficients();
        0.5 * m * (c.nu_m() * c.z_m() * c.z_m() + c.nu_x() * c.z_x() * c.z_x())
    }

    /// Osmotic coefficient φ at molality `m`.
    fn osmotic_coefficient(&self, m: f64) -> f64 {
        let c = self.actual_coefficients();
        let p = self.pitzer_parameters();
        let ion = self.ion_parameters();
        let zz = (c.z_m() * c.z_x()).abs();
        let nu_mx = c.nu_m() * c.nu_x();
        let sqrt_i = self.ionic_strength(m).sqrt();

        let f_phi = -self.a_phi() * sqrt_i / (1.0 + ion.b * sqrt_i);
        let b_phi = p.beta0
            + p.beta1 * (-ion.alpha_b1 * sqrt_i).exp()
            + p.beta2 * (-ion.alpha_b2 * sqrt_i).exp();
        let c_phi = 2.0 * zz.sqrt() * p.c0;

        1.0 + zz * f_phi
            + m * (2.0 * nu_mx / c.nu()) * b_phi
            + m * m * (2.0 * nu_mx.powf(1.5) / c.nu()) * c_phi
    }

    /// Natural log of the mean ionic activity coefficient γ±.
    fn log_gamma(&self, m: f64) -> f64 {
        let c = self.actual_coefficients();
        let p = self.pitzer_parameters();
        let ion = self.ion_parameters();
        let zz = (c.z_m() * c.z_x()).abs();
        let nu_mx = c.nu_m() * c.nu_x();
        let sqrt_i = self.ionic_strength(m).sqrt();

        let f_gamma = -self.a_phi()
            * (sqrt_i / (1.0 + ion.b * sqrt_i) + 2.0 / ion.b * (1.0 + ion.b * sqrt_i).ln());
        let x1 = ion.alpha_b1 * sqrt_i;
        let x2 = ion.alpha_b2 * sqrt_i;
        let b_gamma = 2.0 * p.beta0
            + p.beta1 * (pitzer_g(x1) + (-x1).exp())
            + p.beta2 * (pitzer_g(x2) + (-x2).exp());
        let c_gamma = 1.5 * 2.0 * zz.sqrt() * p.c0;

        zz * f_gamma
            + m * (2.0 * nu_mx / c.nu()) * b_gamma
            + m * m * (2.0 * nu_mx.powf(1.5) / c.nu()) * c_gamma
    }

    /// Mean ionic activity coefficient γ±.
    fn activity_coefficient(&self, m: f64) -> f64 {
        self.log_gamma(m).exp()
    }

    /// Apparent molar volume of the salt at molality `m` [cm³/mol].
    ///
    /// `V_φ = V° + ν|z_M z_X| (A_V / 2b) ln(1 + b√I) + 2 ν_M ν_X R T (m B^V + m² ν_M z_M C^V)`
    fn apparent_molar_volume(&self, m: f64) -> f64 {
        let c = self.actual_coefficients();
        let dp = self.pitzer_parameters_der_p();
        let ion = self.ion_parameters();
        let zz = (c.z_m() * c.z_x()).abs();
        let sqrt_i = self.ionic_strength(m).sqrt();
        // J/mol to bar·cm³/mol
        let rt = 10.0 * r_gas() * self.temperature();

        let b_v = dp.params.beta0
            + dp.params.beta1 * pitzer_g(ion.alpha_b1 * sqrt_i)
            + dp.params.beta2 * pitzer_g(ion.alpha_b2 * sqrt_i);
        let c_v = dp.params.c0;

        dp.v0
            + c.nu() * zz * self.a_v() / (2.0 * ion.b) * (1.0 + ion.b * sqrt_i).ln()
            + 2.0 * c.nu_m() * c.nu_x() * rt * (m * b_v + m * m * c.nu_m() * c.z_m() * c_v)
    }
}
