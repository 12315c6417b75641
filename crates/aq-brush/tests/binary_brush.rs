//! Binary brush against independently computed profiles for polystyrene
//! (10 kg/mol) grafted at 1 chain/nm².

use aq_brush::{BinaryBrush, BrushModel, Dimension, DryBrush, Polymer};
use approx::assert_abs_diff_eq;
use proptest::prelude::*;

fn ps() -> Polymer {
    Polymer::polystyrene(10_000.0).unwrap()
}

fn sphere(chi: f64) -> BinaryBrush {
    BinaryBrush::new(Dimension::Spherical, chi, 1.0, 50.0, &ps(), 1e-3 - chi).unwrap()
}

#[test]
fn free_spherical_brush() {
    let b = sphere(0.3);
    let opt = b.optimal_lambda().unwrap();
    assert!(opt.converged);
    assert_abs_diff_eq!(opt.x, -0.132_964, epsilon = 2e-4);
    assert_abs_diff_eq!(b.equilibrium_height().unwrap(), 97.854, epsilon = 0.02);
    assert_abs_diff_eq!(b.free_energy_per_chain().unwrap(), -4.8903, epsilon = 2e-3);
    assert_eq!(b.num_of_components(), 2);
}

#[test]
fn chains_are_conserved_at_the_optimum() {
    let b = sphere(0.3);
    let lag = b.optimal_lambda().unwrap().x;
    let content = b.content(lag, f64::INFINITY).unwrap();
    assert_abs_diff_eq!(content / b.chain().s_hat, 1.0, epsilon = 1e-3);
}

#[test]
fn solvent_quality_sets_the_height() {
    let planar = BinaryBrush::new(Dimension::Planar, 0.0, 1.0, 50.0, &ps(), 1e-3).unwrap();
    assert_abs_diff_eq!(planar.equilibrium_height().unwrap(), 209.64, epsilon = 0.05);

    let poor = sphere(0.7);
    assert!(poor.mixing().binodal().is_some());
    assert_abs_diff_eq!(poor.equilibrium_height().unwrap(), 76.29, epsilon = 0.05);

    // swollen brushes always extend past the melt
    let dry = DryBrush::new(Dimension::Spherical, 1.0, 50.0, &ps()).unwrap();
    assert!(poor.equilibrium_height().unwrap() > dry.height());
    assert_abs_diff_eq!(poor.dry_height(), dry.height(), epsilon = 1e-12);
}

#[test]
fn confined_height_round_trip() {
    let b = sphere(0.3);
    for h in [62.0, 70.0, 80.0, 95.0] {
        let result = b.determine_lagrange(h, None).unwrap();
        assert!(result.converged);
        assert_abs_diff_eq!(b.height(result.x).unwrap(), h, epsilon = 1e-5);
        assert_abs_diff_eq!(b.content(result.x, h).unwrap(), b.chain().s_hat, epsilon = 1e-8);
    }
}

#[test]
fn compression_raises_free_energy() {
    let b = sphere(0.3);
    let free = b.free_energy_per_chain().unwrap();
    let mut last = free;
    for h in [90.0, 80.0, 70.0] {
        let lag = b.determine_lagrange(h, None).unwrap().x;
        let f = b.free_energy(lag, h).unwrap();
        assert!(f > last, "F({h}) = {f} not above {last}");
        last = f;
    }
}

#[test]
fn confinement_raises_multiplier() {
    let b = sphere(0.3);
    let free = b.optimal_lambda().unwrap().x;
    let loose = b.determine_lagrange(90.0, None).unwrap().x;
    let tight = b.determine_lagrange(65.0, None).unwrap().x;
    assert!(free < loose && loose < tight);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn round_trip_for_any_confined_height(h in 61.0_f64..95.0, chi in 0.0_f64..0.3) {
        let b = sphere(chi);
        let lag = b.determine_lagrange(h, None).unwrap().x;
        prop_assert!((b.height(lag).unwrap() - h).abs() < 1e-5);
    }
}
