//! Polymer brush free energies.
//!
//! Chains grafted on a plane, cylinder or sphere are treated in the
//! strong-stretching mean-field picture, measured in Kuhn lengths:
//! - [`DryBrush`]: melt brush at `φ = 1`,
//! - [`BinaryBrush`]: brush swollen by a Flory–Huggins solvent,
//! - [`BinaryBrushSuperLattice`]: the binary brush confined by the
//!   Wigner–Seitz cell of a nanocrystal superlattice.
//!
//! # Example
//!
//! ```no_run
//! use aq_brush::{BinaryBrush, BrushModel, Dimension, Polymer};
//!
//! let ps = Polymer::polystyrene(10_000.0).unwrap();
//! let brush = BinaryBrush::new(Dimension::Spherical, 0.3, 1.0, 50.0, &ps, -0.299).unwrap();
//! let h = brush.equilibrium_height().unwrap();
//! println!("free brush height: {h:.1} Å");
//! ```

pub mod binary_brush;
pub mod config;
pub mod dry_brush;
pub mod error;
pub mod geometry;
pub mod mixing;
pub mod model;
pub mod polymer;
pub mod superlattice;

pub use binary_brush::BinaryBrush;
pub use config::{CellConfig, PolymerConfig, SuperLatticeConfig};
pub use dry_brush::DryBrush;
pub use error::{BrushError, BrushResult};
pub use geometry::{BrushGeometry, Dimension};
pub use mixing::FloryHuggins;
pub use model::{BrushModel, SolverSettings};
pub use polymer::{Polymer, PolymerProperties, ReducedChain};
pub use superlattice::BinaryBrushSuperLattice;
