//! NaCl Rogers–Pitzer model against literature values and internal
//! consistency relations.

use aq_salt::{NaClPropertiesRogersPitzer, SaltPropertiesPitzer};
use approx::assert_abs_diff_eq;
use proptest::prelude::*;

fn nacl(tk: f64, pa: f64) -> NaClPropertiesRogersPitzer {
    NaClPropertiesRogersPitzer::new(tk, pa).unwrap()
}

#[test]
fn osmotic_and_activity_coefficients_at_one_molal() {
    let salt = nacl(298.15, 1.0);
    // Robinson & Stokes: φ = 0.936, γ± = 0.657
    assert_abs_diff_eq!(salt.osmotic_coefficient(1.0), 0.936, epsilon = 2e-3);
    assert_abs_diff_eq!(salt.activity_coefficient(1.0), 0.657, epsilon = 3e-3);
}

#[test]
fn dilute_limit() {
    let salt = nacl(298.15, 1.0);
    assert_abs_diff_eq!(salt.osmotic_coefficient(0.0), 1.0, epsilon = 1e-15);
    assert_abs_diff_eq!(salt.log_gamma(0.0), 0.0, epsilon = 1e-15);
    // Debye–Hückel limiting law, ln γ± ≈ -3 A_φ √m
    let m: f64 = 1e-6;
    let limiting = -3.0 * salt.a_phi() * m.sqrt();
    assert_abs_diff_eq!(salt.log_gamma(m), limiting, epsilon = 5e-6);
    assert!((salt.log_gamma(m) / limiting - 1.0).abs() < 5e-3);
}

#[test]
fn apparent_volume_reproduces_reference_solution() {
    for &(tk, pa) in &[(298.15, 1.0), (323.15, 1.0), (298.15, 200.0)] {
        let salt = nacl(tk, pa);
        let m_ref = salt.actual_coefficients().m_ref();
        assert_abs_diff_eq!(
            salt.apparent_molar_volume(m_ref),
            salt.reference_apparent_volume(),
            epsilon = 1e-9
        );
    }
}

#[test]
fn apparent_volume_limits() {
    let salt = nacl(298.15, 1.0);
    let v0 = salt.pitzer_parameters_der_p().v0;
    assert_abs_diff_eq!(salt.apparent_molar_volume(0.0), v0, epsilon = 1e-12);
    assert_abs_diff_eq!(salt.apparent_molar_volume(1.0), 18.45, epsilon = 0.05);
    assert!(salt.apparent_molar_volume(1.0) > salt.apparent_molar_volume(0.1));
}

#[test]
fn infinite_dilution_volume_grows_with_pressure() {
    let low = nacl(298.15, 1.0).pitzer_parameters_der_p().v0;
    let high = nacl(298.15, 200.0).pitzer_parameters_der_p().v0;
    assert_abs_diff_eq!(low, 16.655, epsilon = 1e-3);
    assert_abs_diff_eq!(high, 17.498, epsilon = 1e-3);
}

#[test]
fn parameter_arrays_have_published_lengths() {
    let salt = nacl(298.15, 1.0);
    assert_eq!(salt.pitzer_parameters().to_array().len(), 9);
    assert_eq!(salt.pitzer_parameters_der_p().to_array().len(), 10);
    assert_eq!(salt.pitzer_parameters_der_t().to_array().len(), 9);
    assert_eq!(salt.ion_parameters().to_array().len(), 7);
}

proptest! {
    #[test]
    fn temperature_derivatives_match_finite_differences(tk in 275.0_f64..370.0) {
        let h = 1e-3;
        let up = nacl(tk + h, 1.0).pitzer_parameters().to_array();
        let down = nacl(tk - h, 1.0).pitzer_parameters().to_array();
        let analytic = nacl(tk, 1.0).pitzer_parameters_der_t().to_array();
        for i in 0..9 {
            let fd = (up[i] - down[i]) / (2.0 * h);
            prop_assert!((fd - analytic[i]).abs() < 1e-9, "index {}: {} vs {}", i, fd, analytic[i]);
        }
    }
}
