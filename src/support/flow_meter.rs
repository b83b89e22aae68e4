//! Differential pressure flow meter toolkit.
//!
//! A differential pressure meter narrows the pipe and infers the flow rate
//! from the pressure difference between an upstream and a downstream tap.
//! This toolkit provides the ISO 5167 correlations for orifice plates,
//! nozzles, venturi nozzles and cone meters.
//!
//! - **Geometry and conditions**: [`MeterGeometry`], [`DiameterRatio`],
//!   [`MeterPressures`], [`IsentropicExponent`], [`ReynoldsNumber`], [`Taps`]
//! - **Coefficients**: [`DischargeCoefficient`], [`Expansibility`],
//!   [`LossCoefficient`]
//! - **Flow equations**: [`functional::orifice_discharge`],
//!   [`functional::orifice_pressure_loss`],
//!   [`functional::cone_meter_pressure_loss`]
//!
//! # Example
//!
//! ```
//! use twine_flow_meters::support::flow_meter::{
//!     DischargeCoefficient, Expansibility, FlowMeterResult, IsentropicExponent,
//!     MeterGeometry, MeterPressures, functional::orifice_discharge,
//! };
//! use uom::si::{
//!     f64::{Length, MassDensity, Pressure},
//!     length::meter,
//!     mass_density::kilogram_per_cubic_meter,
//!     mass_rate::kilogram_per_second,
//!     pressure::pascal,
//! };
//!
//! fn main() -> FlowMeterResult<()> {
//!     let geometry = MeterGeometry::new(
//!         Length::new::<meter>(0.0739),
//!         Length::new::<meter>(0.0222),
//!     )?;
//!     let pressures = MeterPressures::new(
//!         Pressure::new::<pascal>(1e5),
//!         Pressure::new::<pascal>(9.9e4),
//!     )?;
//!
//!     let epsilon = Expansibility::orifice(geometry.beta(), pressures, IsentropicExponent::new(1.4)?)?;
//!     let m = orifice_discharge(
//!         &geometry,
//!         pressures,
//!         MassDensity::new::<kilogram_per_cubic_meter>(1.1646),
//!         DischargeCoefficient::new(0.5988)?,
//!         epsilon,
//!     )?;
//!
//!     assert!((m.get::<kilogram_per_second>() - 0.0112).abs() < 1e-4);
//!     Ok(())
//! }
//! ```

mod diameter_ratio;
mod discharge_coefficient;
mod error;
mod expansibility;
pub mod functional;
mod geometry;
mod loss_coefficient;
mod pressures;
mod reynolds;
mod taps;

pub use diameter_ratio::DiameterRatio;
pub use discharge_coefficient::DischargeCoefficient;
pub use error::{FlowMeterError, FlowMeterResult};
pub use expansibility::{Expansibility, IsentropicExponent};
pub use geometry::MeterGeometry;
pub use loss_coefficient::LossCoefficient;
pub use pressures::MeterPressures;
pub use reynolds::ReynoldsNumber;
pub use taps::{Taps, UnknownTapsError};
