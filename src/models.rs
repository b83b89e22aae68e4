//! Public Twine models.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules. Flow measurement
//! models live in [`flow`].
//!
//! # Model structure
//!
//! Each model's [`twine_core::Model`] implementation is a thin adapter over a
//! private solve module where the computation lives. Solver configuration is
//! part of the model value, so a configured model can be called repeatedly
//! with different operating conditions.

pub mod flow;
