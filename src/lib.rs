//! # Twine Flow Meters
//!
//! Differential pressure flow meter correlations and models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Flow meter [`twine_core::Model`] implementations.
//! - [`support`]: The correlations those models are built from.
//!
//! ## Correlations
//!
//! [`support::flow_meter`] covers the ISO 5167 family of meters:
//!
//! - orifice plates: Reader-Harris/Gallagher discharge coefficient for corner,
//!   D and D/2, and flange taps, expansibility, and pressure loss;
//! - nozzles: long radius and ISA 1932 discharge coefficients, expansibility;
//! - venturi nozzles and cone meters;
//! - conversions between discharge coefficients and loss coefficients.
//!
//! Inputs are [`uom`] quantities wrapped in types that check their physical
//! domain on construction (positive diameters, a throat smaller than the pipe,
//! downstream pressure not above upstream). The published validity ranges of
//! each correlation are not enforced.

pub mod models;
pub mod support;
