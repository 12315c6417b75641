//! A single wedge of a Wigner–Seitz cell.

use aq_solver::{QuadConfig, SolverResult, integrate};
use std::fmt;
use std::sync::Arc;

/// Polar-angle boundary θ(φ) of a wedge.
pub type BoundaryFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// Region `a ≤ φ ≤ b`, `lower(φ) ≤ θ ≤ upper(φ)`, repeated `multiplicity`
/// times around the cell.
///
/// θ is measured from the normal of the face the wedge belongs to, so the
/// face itself is the plane `r cos θ = inradius`.
#[derive(Clone)]
pub struct Wedge {
    pub azimuth: (f64, f64),
    lower: BoundaryFn,
    upper: BoundaryFn,
    pub multiplicity: usize,
}

impl Wedge {
    pub fn new<L, U>(azimuth: (f64, f64), lower: L, upper: U, multiplicity: usize) -> Self
    where
        L: Fn(f64) -> f64 + Send + Sync + 'static,
        U: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self {
            azimuth,
            lower: Arc::new(lower),
            upper: Arc::new(upper),
            multiplicity,
        }
    }

    /// Lower polar bound at azimuth `phi`
    pub fn lower(&self, phi: f64) -> f64 {
        (self.lower)(phi)
    }

    /// Upper polar bound at azimuth `phi`
    pub fn upper(&self, phi: f64) -> f64 {
        (self.upper)(phi)
    }

    /// Solid angle of one copy, `∫ (cos θ_lo − cos θ_hi) dφ`.
    pub fn solid_angle(&self, config: &QuadConfig) -> SolverResult<f64> {
        let (a, b) = self.azimuth;
        integrate(|phi| self.lower(phi).cos() - self.upper(phi).cos(), a, b, config)
    }

    /// Volume of one copy bounded by the face plane at distance `inradius`.
    ///
    /// With `r(θ) = inradius / cos θ` the radial and polar integrals are
    /// closed form, leaving `inradius³/6 ∫ (sec² θ_hi − sec² θ_lo) dφ`.
    pub fn volume(&self, inradius: f64, config: &QuadConfig) -> SolverResult<f64> {
        let (a, b) = self.azimuth;
        let sec2 = |theta: f64| 1.0 / theta.cos().powi(2);
        let angular = integrate(
            |phi| sec2(self.upper(phi)) - sec2(self.lower(phi)),
            a,
            b,
            config,
        )?;
        Ok(inradius.powi(3) / 6.0 * angular)
    }
}

impl fmt::Debug for Wedge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wedge")
            .field("azimuth", &self.azimuth)
            .field("multiplicity", &self.multiplicity)
            .finish_non_exhaustive()
    }
}
