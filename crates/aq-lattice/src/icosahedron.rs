//! Icosahedral Wigner–Seitz cell.

use crate::cell::WignerSeitzCell;
use crate::wedge::Wedge;
use nalgebra::{Unit, Vector3};
use std::f64::consts::FRAC_PI_3;
use std::fmt;

/// Regular icosahedron seen from the center of one face.
///
/// Each triangular face splits into six right triangles spanning π/3 of
/// azimuth, so one distinct wedge with multiplicity 20 × 6 = 120 covers the
/// cell. ψ is the polar angle from a face center to an edge midpoint.
#[derive(Clone, Debug)]
pub struct Icosahedron {
    psi: f64,
    wedges: Vec<Wedge>,
}

impl Icosahedron {
    pub fn new() -> Self {
        let psi = ((1.0 + 5.0_f64.sqrt()) / (2.0 * 3.0_f64.sqrt())).acos();
        let tan_psi = psi.tan();
        let wedge = Wedge::new(
            (0.0, FRAC_PI_3),
            |_| 0.0,
            move |phi: f64| (tan_psi / phi.cos()).atan(),
            120,
        );
        Self {
            psi,
            wedges: vec![wedge],
        }
    }

    /// Polar angle between a face normal and an edge midpoint
    pub fn psi(&self) -> f64 {
        self.psi
    }

    /// The 12 vertices `(0, ±1, ±ϕ)` and cyclic permutations, unnormalized.
    pub fn vertices() -> Vec<Vector3<f64>> {
        let gr = golden_ratio();
        let mut out = Vec::with_capacity(12);
        for s1 in [-1.0, 1.0] {
            for s2 in [-1.0, 1.0] {
                out.push(Vector3::new(0.0, s1, s2 * gr));
                out.push(Vector3::new(s1, s2 * gr, 0.0));
                out.push(Vector3::new(s2 * gr, 0.0, s1));
            }
        }
        out
    }

    /// Unit outward normals of the 20 faces.
    ///
    /// These point at the vertices of the dual dodecahedron: `(±1, ±1, ±1)`
    /// and the cyclic permutations of `(0, ±ϕ, ±1/ϕ)`.
    pub fn face_normals() -> Vec<Unit<Vector3<f64>>> {
        let gr = golden_ratio();
        let inv = 1.0 / gr;
        let mut out = Vec::with_capacity(20);
        for sx in [-1.0, 1.0] {
            for sy in [-1.0, 1.0] {
                for sz in [-1.0, 1.0] {
                    out.push(Unit::new_normalize(Vector3::new(sx, sy, sz)));
                }
            }
        }
        for s1 in [-1.0, 1.0] {
            for s2 in [-1.0, 1.0] {
                out.push(Unit::new_normalize(Vector3::new(0.0, s1 * gr, s2 * inv)));
                out.push(Unit::new_normalize(Vector3::new(s1 * gr, s2 * inv, 0.0)));
                out.push(Unit::new_normalize(Vector3::new(s2 * inv, 0.0, s1 * gr)));
            }
        }
        out
    }
}

fn golden_ratio() -> f64 {
    0.5 * (1.0 + 5.0_f64.sqrt())
}

impl Default for Icosahedron {
    fn default() -> Self {
        Self::new()
    }
}

impl WignerSeitzCell for Icosahedron {
    fn dimension(&self) -> usize {
        3
    }

    fn wedges(&self) -> &[Wedge] {
        &self.wedges
    }

    fn name(&self) -> &str {
        "icosahedron"
    }
}

impl fmt::Display for Icosahedron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Icosahedron Wigner-Seitz cell")
    }
}
