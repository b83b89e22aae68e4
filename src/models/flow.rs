//! Flow measurement models.
//!
//! This module contains models for meters that infer a flow rate from a
//! measured differential pressure.

pub mod orifice;
