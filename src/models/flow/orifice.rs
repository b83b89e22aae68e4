//! Orifice plate flow meter model.
//!
//! [`OrificeMeter`] is a [`twine_core::Model`] that computes the mass flow
//! rate through an ISO 5167-2 orifice plate from the tap pressures and the
//! fluid properties. The Reader-Harris/Gallagher discharge coefficient
//! depends on the Reynolds number, which depends on the mass flow rate being
//! solved for, so each call runs an iterative solve configured by
//! [`MassFlowConfig`].
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use twine_flow_meters::{
//!     models::flow::orifice::{OrificeConditions, OrificeMeter},
//!     support::flow_meter::{IsentropicExponent, MeterGeometry, MeterPressures, Taps},
//! };
//! use uom::si::{
//!     dynamic_viscosity::pascal_second,
//!     f64::{DynamicViscosity, Length, MassDensity, Pressure},
//!     length::meter,
//!     mass_density::kilogram_per_cubic_meter,
//!     mass_rate::kilogram_per_second,
//!     pressure::pascal,
//! };
//!
//! let orifice = OrificeMeter::new(
//!     MeterGeometry::new(Length::new::<meter>(0.07366), Length::new::<meter>(0.05)).unwrap(),
//!     Taps::D,
//! );
//!
//! let conditions = OrificeConditions {
//!     pressures: MeterPressures::new(
//!         Pressure::new::<pascal>(200_000.0),
//!         Pressure::new::<pascal>(183_000.0),
//!     )
//!     .unwrap(),
//!     density: MassDensity::new::<kilogram_per_cubic_meter>(999.1),
//!     viscosity: DynamicViscosity::new::<pascal_second>(0.0011),
//!     isentropic_exponent: IsentropicExponent::new(1.33).unwrap(),
//! };
//!
//! let solution = orifice.call(&conditions).unwrap();
//! assert!((solution.mass_flow.get::<kilogram_per_second>() - 7.7023).abs() < 1e-4);
//! ```

mod mass_flow;

pub use mass_flow::{MassFlowConfig, MassFlowError};

use twine_core::Model;
use uom::si::f64::{DynamicViscosity, MassDensity, MassRate};

use crate::support::flow_meter::{
    DischargeCoefficient, Expansibility, IsentropicExponent, MeterGeometry, MeterPressures,
    ReynoldsNumber, Taps,
};

/// An orifice plate installed in a pipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrificeMeter {
    /// Pipe and bore diameters.
    pub geometry: MeterGeometry,
    /// Pressure tap arrangement.
    pub taps: Taps,
    /// Configuration of the mass flow solve.
    pub config: MassFlowConfig,
}

/// Operating conditions measured at an orifice meter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrificeConditions {
    /// Upstream and downstream tap pressures.
    pub pressures: MeterPressures,
    /// Fluid density at the upstream tap.
    pub density: MassDensity,
    /// Fluid dynamic viscosity at the upstream tap.
    pub viscosity: DynamicViscosity,
    /// Isentropic exponent of the fluid, used for the expansibility factor.
    pub isentropic_exponent: IsentropicExponent,
}

/// The resolved flow through an orifice meter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrificeSolution {
    /// Mass flow rate through the meter.
    pub mass_flow: MassRate,
    /// Reader-Harris/Gallagher discharge coefficient at the solved flow.
    pub discharge_coefficient: DischargeCoefficient,
    /// Orifice expansibility factor for the tap pressures.
    pub expansibility: Expansibility,
    /// Pipe Reynolds number at the solved flow.
    pub reynolds_number: ReynoldsNumber,
    /// Iteration count performed by the solver.
    pub iters: usize,
}

impl OrificeMeter {
    /// Create an orifice meter with the default solver configuration.
    #[must_use]
    pub fn new(geometry: MeterGeometry, taps: Taps) -> Self {
        Self {
            geometry,
            taps,
            config: MassFlowConfig::default(),
        }
    }

    /// Replace the solver configuration.
    #[must_use]
    pub fn with_config(self, config: MassFlowConfig) -> Self {
        Self { config, ..self }
    }

    /// Solves for the mass flow rate under the given conditions.
    ///
    /// # Errors
    ///
    /// Returns a [`MassFlowError`] if the conditions are invalid or the solver
    /// fails to converge.
    pub fn mass_flow(
        &self,
        conditions: &OrificeConditions,
    ) -> Result<OrificeSolution, MassFlowError> {
        mass_flow::solve(&self.geometry, self.taps, conditions, self.config)
    }
}

impl Model for OrificeMeter {
    type Input = OrificeConditions;
    type Output = OrificeSolution;
    type Error = MassFlowError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.mass_flow(input)
    }
}
