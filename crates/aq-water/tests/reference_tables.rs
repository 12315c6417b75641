//! Published reference values for the Fine–Millero equation of state and the
//! Archer–Wang dielectric constant.
//!
//! Millero's tables are given at applied pressure in bar; they are converted
//! to absolute atm as `applied / 1.01325 + 1`.

use aq_core::units::convert::{atm_to_bar, celsius_to_kelvin, pascal_to_atm};
use aq_water::{
    MOLECULAR_WEIGHT, StateGrid, WaterModel, WaterProperty, WaterPropertiesFineMillero, evaluate,
};

fn millero_grid(rows: &[[f64; 3]]) -> StateGrid {
    let t: Vec<f64> = rows.iter().map(|r| celsius_to_kelvin(r[0])).collect();
    let p: Vec<f64> = rows.iter().map(|r| r[1] / atm_to_bar(1.0) + 1.0).collect();
    StateGrid::new(&t, &p).unwrap()
}

#[test]
fn millero_table_iv_specific_volume() {
    // [t (°C), applied pressure (bar), specific volume (cm³/g)]
    let rows = [
        [5.0, 0.0, 1.000036],
        [30.0, 0.0, 1.004369],
        [75.0, 0.0, 1.025805],
        [30.0, 100.0, 0.999939],
        [55.0, 300.0, 1.001642],
    ];
    let water = WaterPropertiesFineMillero::archer_wang();
    let rho = evaluate(&water, &millero_grid(&rows), WaterProperty::Density);
    for (row, rho) in rows.iter().zip(rho) {
        let v = 1e3 / rho;
        assert!((v - row[2]).abs() < 1e-6, "t={} P={}: {v} vs {}", row[0], row[1], row[2]);
    }
}

#[test]
fn millero_table_iv_molar_volume() {
    let rows = [
        [5.0, 0.0, 1.000036],
        [30.0, 0.0, 1.004369],
        [75.0, 0.0, 1.025805],
        [35.0, 100.0, 1.001597],
        [55.0, 300.0, 1.001642],
    ];
    let water = WaterPropertiesFineMillero::archer_wang();
    let vm = evaluate(&water, &millero_grid(&rows), WaterProperty::MolarVolume);
    for (row, vm) in rows.iter().zip(vm) {
        let expected = row[2] / 1e6 * MOLECULAR_WEIGHT;
        assert!((vm - expected).abs() < 1e-11, "t={} P={}: {vm} vs {expected}", row[0], row[1]);
    }
}

#[test]
fn millero_table_v_compressibility() {
    // [t (°C), applied pressure (bar), compressibility (1e-6 / bar)]
    let rows = [
        [5.0, 0.0, 49.175],
        [30.0, 0.0, 44.771],
        [75.0, 0.0, 45.622],
        [35.0, 100.0, 43.305],
        [55.0, 300.0, 40.911],
    ];
    let water = WaterPropertiesFineMillero::archer_wang();
    let beta = evaluate(&water, &millero_grid(&rows), WaterProperty::Compressibility);
    for (row, beta) in rows.iter().zip(beta) {
        let expected = row[2] / 1e6 * atm_to_bar(1.0);
        assert!((beta - expected).abs() < 1e-9, "t={} P={}: {beta} vs {expected}", row[0], row[1]);
    }
}

#[test]
fn archer_wang_table_4_dielectric_constant() {
    // [T (K), p (MPa), ε]
    let rows = [
        [293.15, 0.1, 80.20],
        [318.15, 0.1, 71.50],
        [353.15, 0.1, 60.87],
        [273.15, 1.0, 87.94],
        [278.15, 60.0, 88.20],
    ];
    let t: Vec<f64> = rows.iter().map(|r| r[0]).collect();
    let p: Vec<f64> = rows.iter().map(|r| pascal_to_atm(r[1] * 1e6)).collect();
    let grid = StateGrid::new(&t, &p).unwrap();

    let water = WaterPropertiesFineMillero::archer_wang();
    let eps = evaluate(&water, &grid, WaterProperty::DielectricConstant);
    for (row, eps) in rows.iter().zip(eps) {
        assert!((eps - row[2]).abs() < 1e-2, "T={} p={}: {eps} vs {}", row[0], row[1], row[2]);
    }
}

#[test]
fn scalar_and_grid_queries_agree() {
    let water = WaterPropertiesFineMillero::archer_wang();
    let grid = StateGrid::new(&[298.15], &[1.0]).unwrap();
    let state = grid.states()[0];
    assert_eq!(
        evaluate(&water, &grid, WaterProperty::AV)[0],
        water.a_v(&state)
    );
}
