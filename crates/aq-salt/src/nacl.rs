//! NaCl following Rogers & Pitzer (1982).
//!
//! Two fitted tables: 28 volumetric coefficients giving the reference-solution
//! volume and the pressure derivatives of β0 and Cφ, and 19 Pitzer
//! coefficients giving β0, β1 and Cφ as functions of temperature about
//! 298.15 K. Indices follow the published tables.

use crate::error::{SaltError, SaltResult};
use crate::pitzer::{
    ActualCoefficients, IonParameters, PitzerParameters, PitzerParametersDerP,
    SaltPropertiesPitzer,
};
use aq_core::units::constants::r_gas;
use aq_core::units::convert::atm_to_bar;
use aq_water::{PhysicalState, WaterModel, WaterPropertiesFineMillero};
use tracing::debug;

/// Volumetric coefficients (Rogers & Pitzer Table 3).
pub const VOLUMETRIC_COEFFS: [f64; 28] = [
    1.024_912_5e3,
    2.779_667_9e-1,
    -3.020_391_9e-4,
    1.497_717_8e-6,
    -7.200_232_9e-2,
    3.145_313_0e-4,
    -5.979_599_4e-7,
    -6.659_601_0e-6,
    3.040_762_1e-8,
    5.369_951_7e-5,
    2.202_016_3e-3,
    -2.653_801_3e-7,
    8.625_555_4e-10,
    -2.682_931_0e-2,
    -1.117_348_8e-7,
    -2.624_980_2e-7,
    3.492_650_0e-10,
    -8.357_192_4e-13,
    3.066_994_0e-5,
    1.976_797_9e-11,
    -1.914_410_5e-10,
    3.138_785_7e-14,
    -9.646_194_8e-9,
    2.290_283_7e-5,
    -4.331_425_2e-4,
    -9.055_090_1e-8,
    8.692_660_0e-11,
    5.190_477_7e-4,
];

/// Pitzer parameter coefficients; entries 6, 7 and 14 are not published and are zero.
pub const PITZER_COEFFS: [f64; 19] = [
    0.0765, -777.03, -4.4706, 0.008946, -3.3158e-6, 0.2664, 0.0, 0.0, 6.1608e-5, 1.0715e-6,
    0.00127, 33.317, 0.09421, -4.655e-5, 0.0, 41587.11, -315.90, 0.8514, -8.3637e-4,
];

const T_REF: f64 = 298.15;
const M_REF: f64 = 5.550_825;
const Y_REF: f64 = 10.0;
const MOLECULAR_WEIGHT: f64 = 58.4428;

/// NaCl Pitzer model at a fixed temperature and pressure.
#[derive(Clone, Debug)]
pub struct NaClPropertiesRogersPitzer {
    state: PhysicalState,
    params: PitzerParameters,
    params_der_p: PitzerParametersDerP,
    params_der_t: PitzerParameters,
    a_phi: f64,
    a_v: f64,
    reference_volume: f64,
}

impl NaClPropertiesRogersPitzer {
    /// Build from the published tables at `tk` [K] and `pa` [atm].
    pub fn new(tk: f64, pa: f64) -> SaltResult<Self> {
        Self::with_coefficients(tk, pa, &VOLUMETRIC_COEFFS, &PITZER_COEFFS)
    }

    /// Build from caller-supplied tables, which must have 28 and 19 entries.
    pub fn with_coefficients(tk: f64, pa: f64, volumetric: &[f64], pitzer: &[f64]) -> SaltResult<Self> {
        SaltError::check_table("volumetric", volumetric, VOLUMETRIC_COEFFS.len())?;
        SaltError::check_table("pitzer", pitzer, PITZER_COEFFS.len())?;

        let state = PhysicalState::from_kelvin_atm(tk, pa);
        let water = WaterPropertiesFineMillero::bradley_pitzer();
        let a_phi = water.a_phi(&state);
        let a_v = water.a_v(&state);

        let params = pitzer_parameters(pitzer, tk);
        let params_der_t = pitzer_parameters_der_t(pitzer, tk);

        // pressure above one atmosphere in bar
        let dp = atm_to_bar(pa) - atm_to_bar(1.0);
        let cm = volumetric;
        let v_ref_solution = cm[0]
            + cm[1] * tk
            + cm[2] * tk.powi(2)
            + cm[3] * tk.powi(3)
            + dp * (cm[4] + cm[5] * tk + cm[6] * tk.powi(2))
            + dp.powi(2) * (cm[7] + cm[8] * tk);

        let beta0_der_p = cm[9] + cm[10] / (tk - 227.0) + cm[11] * tk + cm[12] * tk.powi(2)
            + cm[13] / (680.0 - tk)
            + (cm[14] + cm[15] / (tk - 227.0) + cm[16] * tk + cm[17] * tk.powi(2)
                + cm[18] / (680.0 - tk))
                * dp
            + (cm[19] + cm[20] / (tk - 227.0) + cm[21] * tk + cm[22] / (680.0 - tk)) * dp.powi(2);

        let c_q = cm[23] + cm[24] / (tk - 227.0) + cm[25] * tk + cm[26] * tk.powi(2)
            + cm[27] / (680.0 - tk);
        let c0_der_p = 0.5 * c_q;

        // bar·cm³/mol
        let rt = 10.0 * r_gas() * tk;
        let water_molar_volume = 1e6 * water.molar_volume(&state);
        let b = ION_PARAMETERS.b;

        let reference_volume = v_ref_solution / M_REF - Y_REF * water_molar_volume;
        let v0 = reference_volume
            - a_v * (1.0 + b * M_REF.sqrt()).ln() / b
            - 2.0 * rt * (M_REF * beta0_der_p + M_REF * M_REF * c0_der_p);

        debug!(tk, pa, v0, beta0 = params.beta0, "NaCl Rogers-Pitzer model built");

        Ok(Self {
            state,
            params,
            params_der_p: PitzerParametersDerP {
                v0,
                params: PitzerParameters {
                    beta0: beta0_der_p,
                    c0: c0_der_p,
                    ..PitzerParameters::default()
                },
            },
            params_der_t,
            a_phi,
            a_v,
            reference_volume,
        })
    }

    /// Apparent molar volume of the reference solution minus its water [cm³/mol].
    ///
    /// `V(m_ref) / m_ref - y_ref V_w`; the Pitzer apparent molar volume at
    /// `m_ref` reproduces it.
    pub fn reference_apparent_volume(&self) -> f64 {
        self.reference_volume
    }
}

const ION_PARAMETERS: IonParameters = IonParameters {
    alpha_b1: 2.0,
    alpha_b2: 0.0,
    alpha_c1: 0.0,
    alpha_c2: 0.0,
    alpha_d1: 0.0,
    alpha_d2: 0.0,
    b: 1.2,
};

fn pitzer_parameters(q: &[f64], tk: f64) -> PitzerParameters {
    let beta0 = q[0] + q[1] * (1.0 / tk - 1.0 / T_REF) + q[2] * (tk / T_REF).ln()
        + q[3] * (tk - T_REF)
        + q[4] * (tk * tk - T_REF * T_REF);
    let beta1 = q[5] + q[8] * (tk - T_REF) + q[9] * (tk * tk - T_REF * T_REF);
    let c_phi = q[10] + q[11] * (1.0 / tk - 1.0 / T_REF) + q[12] * (tk / T_REF).ln()
        + q[13] * (tk - T_REF);
    PitzerParameters {
        beta0,
        beta1,
        c0: 0.5 * c_phi,
        ..PitzerParameters::default()
    }
}

fn pitzer_parameters_der_t(q: &[f64], tk: f64) -> PitzerParameters {
    let beta0 = 2.0 * q[4] * tk + q[2] / tk - q[1] / (tk * tk) + q[3];
    let beta1 = 2.0 * q[9] * tk + q[8];
    let c_phi = q[12] / tk - q[11] / (tk * tk) + q[13];
    PitzerParameters {
        beta0,
        beta1,
        c0: 0.5 * c_phi,
        ..PitzerParameters::default()
    }
}

impl SaltPropertiesPitzer for NaClPropertiesRogersPitzer {
    fn name(&self) -> &str {
        "NaCl (Rogers-Pitzer)"
    }

    fn temperature(&self) -> f64 {
        self.state.tk()
    }

    fn pressure(&self) -> f64 {
        self.state.atm()
    }

    fn actual_coefficients(&self) -> ActualCoefficients {
        ActualCoefficients {
            stoichiometry: [[1.0, 1.0], [1.0, -1.0]],
            reference: [MOLECULAR_WEIGHT, M_REF, Y_REF],
        }
    }

    fn pitzer_parameters(&self) -> PitzerParameters {
        self.params
    }

    fn pitzer_parameters_der_p(&self) -> PitzerParametersDerP {
        self.params_der_p
    }

    fn pitzer_parameters_der_t(&self) -> PitzerParameters {
        self.params_der_t
    }

    fn ion_parameters(&self) -> IonParameters {
        ION_PARAMETERS
    }

    fn a_phi(&self) -> f64 {
        self.a_phi
    }

    fn a_v(&self) -> f64 {
        self.a_v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn reference_state_parameters() {
        let nacl = NaClPropertiesRogersPitzer::new(298.15, 1.0).unwrap();
        let p = nacl.pitzer_parameters();
        assert_abs_diff_eq!(p.beta0, 0.0765, epsilon = 1e-12);
        assert_abs_diff_eq!(p.beta1, 0.2664, epsilon = 1e-12);
        assert_abs_diff_eq!(p.c0, 0.000635, epsilon = 1e-12);
        assert_eq!(p.beta2, 0.0);
        assert_eq!(p.d2, 0.0);
    }

    #[test]
    fn infinite_dilution_volume() {
        let nacl = NaClPropertiesRogersPitzer::new(298.15, 1.0).unwrap();
        let v0 = nacl.pitzer_parameters_der_p().v0;
        assert_abs_diff_eq!(v0, 16.6549, epsilon = 1e-3);
        assert_abs_diff_eq!(nacl.molar_volume_infinite_dilution(), v0 * 1e-6, epsilon = 1e-15);
    }

    #[test]
    fn pressure_derivatives_at_one_atmosphere() {
        let nacl = NaClPropertiesRogersPitzer::new(298.15, 1.0).unwrap();
        let d = nacl.pitzer_parameters_der_p().params;
        assert_abs_diff_eq!(d.beta0, 1.193_949e-5, epsilon = 1e-10);
        assert_abs_diff_eq!(d.c0, -5.480_755e-7, epsilon = 1e-12);
        assert_eq!(d.beta1, 0.0);
    }

    #[test]
    fn ion_parameters_and_stoichiometry() {
        let nacl = NaClPropertiesRogersPitzer::new(300.0, 1.0).unwrap();
        assert_eq!(nacl.ion_parameters().to_array(), [2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.2]);
        let c = nacl.actual_coefficients();
        assert_eq!(c.stoichiometry, [[1.0, 1.0], [1.0, -1.0]]);
        assert_eq!(c.reference, [58.4428, 5.550825, 10.0]);
        assert_eq!(nacl.ionic_strength(2.0), 2.0);
    }

    #[test]
    fn truncated_tables_are_configuration_errors() {
        let err = NaClPropertiesRogersPitzer::with_coefficients(
            298.15,
            1.0,
            &VOLUMETRIC_COEFFS[..27],
            &PITZER_COEFFS,
        )
        .unwrap_err();
        assert_eq!(
            err,
            SaltError::InvalidConfiguration {
                table: "volumetric",
                expected: 28,
                actual: 27
            }
        );

        let err = NaClPropertiesRogersPitzer::with_coefficients(
            298.15,
            1.0,
            &VOLUMETRIC_COEFFS,
            &PITZER_COEFFS[..10],
        )
        .unwrap_err();
        assert!(matches!(err, SaltError::InvalidConfiguration { table: "pitzer", .. }));
    }

    #[test]
    fn nan_temperature_is_not_rejected() {
        let nacl = NaClPropertiesRogersPitzer::new(f64::NAN, 1.0).unwrap();
        assert!(nacl.pitzer_parameters().beta0.is_nan());
    }
}
