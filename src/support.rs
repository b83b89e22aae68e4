//! Supporting utilities used by models.
//!
//! - [`constraint`]: Type-level numeric constraints.
//! - [`flow_meter`]: Differential pressure meter correlations.

pub mod constraint;
pub mod flow_meter;
