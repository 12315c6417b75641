//! Wigner–Seitz cells described as wedges in spherical coordinates.
//!
//! A cell is cut into wedges about one face normal: each wedge spans an
//! azimuthal interval and, for every azimuth, a polar interval bounded by two
//! functions of the azimuth. Symmetry copies are carried as a multiplicity,
//! so only the distinct wedges are stored. The multiplicities and solid
//! angles must tile the full sphere.

pub mod cell;
pub mod error;
pub mod icosahedron;
pub mod wedge;

pub use cell::{SOLID_ANGLE_RTOL, WignerSeitzCell};
pub use error::{LatticeError, LatticeResult};
pub use icosahedron::Icosahedron;
pub use wedge::{BoundaryFn, Wedge};
