//! aq-salt: Pitzer ion-interaction models for aqueous electrolytes.
//!
//! The [`SaltPropertiesPitzer`] trait is the query contract every salt model
//! implements (interaction parameters, their pressure and temperature
//! derivatives, ion parameters). Osmotic and activity coefficients and the
//! apparent molar volume are derived from it as default methods.
//! [`NaClPropertiesRogersPitzer`] is the sodium chloride parameterization of
//! Rogers & Pitzer (1982).

pub mod error;
pub mod nacl;
pub mod pitzer;

pub use error::{SaltError, SaltResult};
pub use nacl::{NaClPropertiesRogersPitzer, PITZER_COEFFS, VOLUMETRIC_COEFFS};
pub use pitzer::{
    ActualCoefficients, IonParameters, PitzerParameters, PitzerParametersDerP,
    SaltPropertiesPitzer,
};
