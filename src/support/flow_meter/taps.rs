use std::{fmt, str::FromStr};

use thiserror::Error;
use uom::si::{f64::Length, length::meter};

/// Pressure tap arrangement of an orifice plate.
///
/// The Reader-Harris/Gallagher equation corrects for where the differential
/// pressure is sensed. ISO 5167-2 recognizes three arrangements, and `D` taps
/// also cover `D/2` taps since both use the same spacings.
///
/// Textual arrangements parse case-sensitively from `"corner"`, `"D"`,
/// `"D/2"`, and `"flange"`:
///
/// ```
/// use twine_flow_meters::support::flow_meter::Taps;
///
/// assert_eq!("flange".parse::<Taps>().unwrap(), Taps::Flange);
/// assert_eq!("D/2".parse::<Taps>().unwrap(), Taps::D);
/// assert!("vena contracta".parse::<Taps>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Taps {
    /// Taps drilled through the plate holder at the plate faces.
    Corner,
    /// Upstream tap one diameter before the plate, downstream tap half a diameter after.
    D,
    /// Taps one inch (25.4 mm) from each face of the plate.
    Flange,
}

/// Tap spacings relative to the pipe diameter.
///
/// `upstream` is `L1`, the upstream tap distance divided by the pipe diameter.
/// `downstream` is `L2'`, the downstream tap distance from the plate face
/// divided by the pipe diameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TapSpacing {
    pub(crate) upstream: f64,
    pub(crate) downstream: f64,
}

const FLANGE_TAP_DISTANCE_METERS: f64 = 0.0254;

impl Taps {
    /// Every arrangement accepted by [`FromStr`], in display order.
    pub const PERMITTED: [&'static str; 4] = ["corner", "D", "D/2", "flange"];

    pub(crate) fn spacing(self, pipe_diameter: Length) -> TapSpacing {
        match self {
            Taps::Corner => TapSpacing {
                upstream: 0.0,
                downstream: 0.0,
            },
            Taps::D => TapSpacing {
                upstream: 1.0,
                downstream: 0.47,
            },
            Taps::Flange => {
                let relative = FLANGE_TAP_DISTANCE_METERS / pipe_diameter.get::<meter>();
                TapSpacing {
                    upstream: relative,
                    downstream: relative,
                }
            }
        }
    }
}

impl fmt::Display for Taps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Taps::Corner => "corner",
            Taps::D => "D",
            Taps::Flange => "flange",
        };
        f.write_str(name)
    }
}

impl FromStr for Taps {
    type Err = UnknownTapsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "corner" => Ok(Taps::Corner),
            "D" | "D/2" => Ok(Taps::D),
            "flange" => Ok(Taps::Flange),
            _ => Err(UnknownTapsError {
                received: s.to_owned(),
            }),
        }
    }
}

/// An unrecognized pressure tap arrangement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tap arrangement {received:?}, expected one of {:?}", Taps::PERMITTED)]
pub struct UnknownTapsError {
    /// The text that failed to parse.
    pub received: String,
}
