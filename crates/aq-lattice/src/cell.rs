//! Wigner–Seitz cell contract.

use crate::error::{LatticeError, LatticeResult};
use crate::wedge::Wedge;
use aq_core::numeric::{Tolerances, nearly_equal};
use aq_solver::QuadConfig;
use std::f64::consts::PI;
use tracing::debug;

/// Relative tolerance on the 4π closure of the wedge solid angles.
pub const SOLID_ANGLE_RTOL: f64 = 1e-9;

/// A Wigner–Seitz cell described by its distinct wedges.
///
/// Implementors supply the wedges; the angular extremes, solid angle and
/// volume follow from them. The per-wedge queries return one value per
/// distinct wedge, in the order of [`WignerSeitzCell::wedges`].
pub trait WignerSeitzCell {
    /// Spatial dimension of the lattice
    fn dimension(&self) -> usize;

    fn wedges(&self) -> &[Wedge];

    fn name(&self) -> &str;

    fn num_distinct_wedges(&self) -> usize {
        self.wedges().len()
    }

    /// Upper polar bound at the upper end of each wedge's azimuth range.
    fn max_theta(&self) -> Vec<f64> {
        self.wedges().iter().map(|w| w.upper(w.azimuth.1)).collect()
    }

    /// Upper polar bound at the lower end of each wedge's azimuth range.
    fn min_theta(&self) -> Vec<f64> {
        self.wedges().iter().map(|w| w.upper(w.azimuth.0)).collect()
    }

    /// Σ multiplicity × wedge solid angle.
    fn solid_angle(&self) -> LatticeResult<f64> {
        let config = QuadConfig::default();
        let mut total = 0.0;
        for w in self.wedges() {
            total += w.multiplicity as f64 * w.solid_angle(&config)?;
        }
        Ok(total)
    }

    /// Cell volume for a given inradius (same length unit cubed).
    fn volume(&self, inradius: f64) -> LatticeResult<f64> {
        let config = QuadConfig::default();
        let mut total = 0.0;
        for w in self.wedges() {
            total += w.multiplicity as f64 * w.volume(inradius, &config)?;
        }
        Ok(total)
    }

    /// Check the wedge ranges and that the wedges tile the sphere.
    fn validate(&self) -> LatticeResult<()> {
        for (index, w) in self.wedges().iter().enumerate() {
            let (a, b) = w.azimuth;
            if !(a.is_finite() && b.is_finite() && a < b) {
                return Err(LatticeError::InvalidWedge {
                    index,
                    what: "azimuth range must be finite and increasing",
                });
            }
            if w.multiplicity == 0 {
                return Err(LatticeError::InvalidWedge {
                    index,
                    what: "multiplicity must be positive",
                });
            }
        }

        let expected = 4.0 * PI;
        let actual = self.solid_angle()?;
        let tol = Tolerances {
            abs: 0.0,
            rel: SOLID_ANGLE_RTOL,
        };
        if !nearly_equal(actual, expected, tol) {
            return Err(LatticeError::SolidAngleMismatch { expected, actual });
        }
        debug!(cell = self.name(), actual, "wedges tile the sphere");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_4;

    /// Cube of half-width 1: 6 faces × 8 right triangles.
    struct Cube {
        wedges: Vec<Wedge>,
    }

    impl Cube {
        fn new(multiplicity: usize) -> Self {
            let w = Wedge::new(
                (0.0, FRAC_PI_4),
                |_| 0.0,
                |phi: f64| (1.0 / phi.cos()).atan(),
                multiplicity,
            );
            Self { wedges: vec![w] }
        }
    }

    impl WignerSeitzCell for Cube {
        fn dimension(&self) -> usize {
            3
        }

        fn wedges(&self) -> &[Wedge] {
            &self.wedges
        }

        fn name(&self) -> &str {
            "cube"
        }
    }

    #[test]
    fn cube_tiles_sphere() {
        let cube = Cube::new(48);
        assert_abs_diff_eq!(cube.solid_angle().unwrap(), 4.0 * PI, epsilon = 1e-10);
        cube.validate().unwrap();
    }

    #[test]
    fn cube_volume() {
        let cube = Cube::new(48);
        assert_abs_diff_eq!(cube.volume(1.0).unwrap(), 8.0, epsilon = 1e-9);
        assert_abs_diff_eq!(cube.volume(0.5).unwrap(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn cube_extremes() {
        let cube = Cube::new(48);
        assert_abs_diff_eq!(cube.min_theta()[0], FRAC_PI_4, epsilon = 1e-15);
        // body diagonal
        assert_abs_diff_eq!(cube.max_theta()[0], 2.0_f64.sqrt().atan(), epsilon = 1e-15);
        assert_eq!(cube.num_distinct_wedges(), 1);
    }

    #[test]
    fn wrong_multiplicity_is_reported() {
        let err = Cube::new(24).validate().unwrap_err();
        match err {
            LatticeError::SolidAngleMismatch { expected, actual } => {
                assert_abs_diff_eq!(actual, 0.5 * expected, epsilon = 1e-9);
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(matches!(
            Cube::new(0).validate(),
            Err(LatticeError::InvalidWedge { index: 0, .. })
        ));
    }
}
