//! Fine–Millero (1973) equation of state for liquid water.
//!
//! Secant bulk modulus form: `V(t, P) = V0(t) (1 - P / K(t, P))` with
//! `K = B(t) + A1(t) P + A2(t) P²`, `t` in °C and `P` the pressure applied
//! above one atmosphere in bar. `V0` is Kell's one-atmosphere specific volume.
//! Valid 0-100 °C, 0-1000 bar applied.

use aq_core::polyval;

/// Kell (1975) one-atmosphere density polynomial denominator.
const KELL_DENOMINATOR: [f64; 6] = [
    0.999_839_6,
    18.224_944e-3,
    -7.922_210e-6,
    -55.448_46e-9,
    149.756_2e-12,
    -393.295_2e-15,
];
const KELL_NUMERATOR: [f64; 2] = [1.0, 18.159_725e-3];

const B_COEFFS: [f64; 5] = [19_654.320, 147.037, -2.215_54, 1.047_8e-2, -2.278_9e-5];
const A1_COEFFS: [f64; 5] = [3.289_1, -2.391_0e-3, 2.844_6e-4, -2.820_0e-6, 8.477e-9];
const A2_COEFFS: [f64; 5] = [6.245e-5, -3.913e-6, -3.499e-8, 7.942e-10, -3.299e-12];

/// Temperature-only terms of the secant bulk modulus [bar].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BulkModulusTerms {
    pub b: f64,
    pub a1: f64,
    pub a2: f64,
}

impl BulkModulusTerms {
    pub fn at(t: f64) -> Self {
        Self {
            b: polyval(&B_COEFFS, t),
            a1: polyval(&A1_COEFFS, t),
            a2: polyval(&A2_COEFFS, t),
        }
    }

    /// Secant bulk modulus `K(t, P)` [bar]
    pub fn secant(&self, p: f64) -> f64 {
        self.b + self.a1 * p + self.a2 * p * p
    }
}

/// Specific volume at one atmosphere [cm³/g]
pub fn specific_volume_1atm(t: f64) -> f64 {
    polyval(&KELL_NUMERATOR, t) / polyval(&KELL_DENOMINATOR, t)
}

/// Specific volume [cm³/g] at `t` °C and `p` bar applied.
pub fn specific_volume(t: f64, p: f64) -> f64 {
    let k = BulkModulusTerms::at(t).secant(p);
    specific_volume_1atm(t) * (1.0 - p / k)
}

/// Isothermal compressibility [bar⁻¹] at `t` °C and `p` bar applied.
///
/// `-(1/V) dV/dP` of the secant form, `(B - A2 P²) / (K (K - P))`.
pub fn compressibility(t: f64, p: f64) -> f64 {
    let terms = BulkModulusTerms::at(t);
    let k = terms.secant(p);
    (terms.b - terms.a2 * p * p) / (k * (k - p))
}
