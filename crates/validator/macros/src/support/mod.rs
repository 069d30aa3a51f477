//! Internal support utilities for the derive.
//!
//! Attribute parsing, diagnostics and small helpers over syn types.

pub mod attrs;
pub mod diag;
pub mod utils;
