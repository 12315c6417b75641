//! Grafting geometry of a brush.

use crate::error::{BrushError, BrushResult};
use aq_core::numeric::ensure_positive;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shape of the grafting surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Planar,
    Cylindrical,
    Spherical,
}

impl Dimension {
    /// Planar 1, cylindrical 2, spherical 3
    pub fn value(self) -> i32 {
        match self {
            Dimension::Planar => 1,
            Dimension::Cylindrical => 2,
            Dimension::Spherical => 3,
        }
    }
}

impl TryFrom<u32> for Dimension {
    type Error = BrushError;

    fn try_from(d: u32) -> BrushResult<Self> {
        match d {
            1 => Ok(Dimension::Planar),
            2 => Ok(Dimension::Cylindrical),
            3 => Ok(Dimension::Spherical),
            other => Err(BrushError::invalid(format!(
                "dimension must be 1, 2 or 3, got {other}"
            ))),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Planar => write!(f, "planar"),
            Dimension::Cylindrical => write!(f, "cylindrical"),
            Dimension::Spherical => write!(f, "spherical"),
        }
    }
}

/// Chains grafted on a plane, cylinder or sphere.
///
/// `hat_r` is the grafting radius in Kuhn lengths. Distances `u` passed to
/// the measure are also in Kuhn lengths, counted outward from the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrushGeometry {
    pub dimension: Dimension,
    /// Grafting density [chains/nm²]
    pub sigma: f64,
    /// Core radius [Å]
    pub radius: f64,
    pub hat_r: f64,
}

impl BrushGeometry {
    pub fn new(dimension: Dimension, sigma: f64, radius: f64, k_length: f64) -> BrushResult<Self> {
        ensure_positive(sigma, "grafting density")?;
        ensure_positive(radius, "core radius")?;
        ensure_positive(k_length, "Kuhn length")?;
        Ok(Self {
            dimension,
            sigma,
            radius,
            hat_r: radius / k_length,
        })
    }

    /// Area element relative to the grafting surface, `(1 + u/R̂)^{d−1}`.
    pub fn measure(&self, u: f64) -> f64 {
        (1.0 + u / self.hat_r).powi(self.dimension.value() - 1)
    }

    /// `∫_0^u (1 + t/R̂)^{d−1} dt`, the volume per grafting area below `u`.
    pub fn enclosed(&self, u: f64) -> f64 {
        match self.dimension {
            Dimension::Planar => u,
            _ => {
                let d = self.dimension.value();
                self.hat_r / f64::from(d) * ((1.0 + u / self.hat_r).powi(d) - 1.0)
            }
        }
    }

    /// Inverse of [`BrushGeometry::enclosed`].
    pub fn height_enclosing(&self, volume: f64) -> f64 {
        match self.dimension {
            Dimension::Planar => volume,
            _ => {
                let d = f64::from(self.dimension.value());
                self.hat_r * ((1.0 + d * volume / self.hat_r).powf(1.0 / d) - 1.0)
            }
        }
    }
}
