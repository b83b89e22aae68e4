use uom::si::{f64::Length, length::meter};

use super::{
    DiameterRatio,
    error::{FlowMeterError, FlowMeterResult, require_positive},
};

/// Pipe and throat diameters of a differential pressure meter.
///
/// The throat is the orifice bore, the nozzle throat, or the venturi throat.
/// Construction guarantees `0 < throat < pipe`, so the derived
/// [`DiameterRatio`] is always valid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeterGeometry {
    pipe_diameter: Length,
    throat_diameter: Length,
    beta: DiameterRatio,
}

impl MeterGeometry {
    /// Create a meter geometry from the upstream pipe diameter `D` and the
    /// throat diameter `Do`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either diameter is not strictly positive or if the
    /// throat is not smaller than the pipe.
    pub fn new(pipe_diameter: Length, throat_diameter: Length) -> FlowMeterResult<Self> {
        let pipe_diameter = require_positive("pipe diameter", pipe_diameter)?;
        let throat_diameter = require_positive("throat diameter", throat_diameter)?;
        if throat_diameter >= pipe_diameter {
            return Err(FlowMeterError::invalid(format!(
                "throat diameter {throat_diameter:?} must be smaller than pipe diameter {pipe_diameter:?}"
            )));
        }

        Ok(Self {
            pipe_diameter,
            throat_diameter,
            beta: DiameterRatio::from_quantity(throat_diameter / pipe_diameter)?,
        })
    }

    /// Upstream pipe internal diameter `D`.
    #[must_use]
    pub fn pipe_diameter(&self) -> Length {
        self.pipe_diameter
    }

    /// Throat diameter `Do`.
    #[must_use]
    pub fn throat_diameter(&self) -> Length {
        self.throat_diameter
    }

    /// Diameter ratio `Do / D`.
    #[must_use]
    pub fn beta(&self) -> DiameterRatio {
        self.beta
    }

    /// Throat flow area in square meters.
    pub(crate) fn throat_area_m2(&self) -> f64 {
        let d = self.throat_diameter.get::<meter>();
        std::f64::consts::FRAC_PI_4 * d * d
    }
}
