use uom::si::{
    f64::{Pressure, Ratio},
    pressure::pascal,
    ratio::ratio,
};

use super::error::{FlowMeterError, FlowMeterResult, require_positive};

/// Static pressures sensed at the upstream and downstream taps of a meter.
///
/// Construction guarantees `P1 >= P2 > 0`, i.e. forward flow or no flow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeterPressures {
    upstream: Pressure,
    downstream: Pressure,
}

impl MeterPressures {
    /// Create tap pressures from the upstream pressure `P1` and the
    /// downstream pressure `P2`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either pressure is not strictly positive or if the
    /// downstream pressure exceeds the upstream pressure.
    pub fn new(upstream: Pressure, downstream: Pressure) -> FlowMeterResult<Self> {
        let upstream = require_positive("upstream pressure", upstream)?;
        let downstream = require_positive("downstream pressure", downstream)?;
        if downstream > upstream {
            return Err(FlowMeterError::invalid(format!(
                "downstream pressure {downstream:?} exceeds upstream pressure {upstream:?}"
            )));
        }
        Ok(Self {
            upstream,
            downstream,
        })
    }

    /// Upstream tap pressure `P1`.
    #[must_use]
    pub fn upstream(&self) -> Pressure {
        self.upstream
    }

    /// Downstream tap pressure `P2`.
    #[must_use]
    pub fn downstream(&self) -> Pressure {
        self.downstream
    }

    /// Differential pressure `P1 - P2`.
    #[must_use]
    pub fn differential(&self) -> Pressure {
        self.upstream - self.downstream
    }

    /// Pressure ratio `tau = P2 / P1`.
    #[must_use]
    pub fn ratio(&self) -> Ratio {
        self.downstream / self.upstream
    }

    pub(crate) fn tau(&self) -> f64 {
        self.ratio().get::<ratio>()
    }

    /// Differential pressure scaled by the upstream pressure, `(P1 - P2) / P1`.
    pub(crate) fn relative_drop(&self) -> f64 {
        self.differential().get::<pascal>() / self.upstream.get::<pascal>()
    }
}
