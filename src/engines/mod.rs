//! Pricing engines grouped by methodology.

pub mod analytic;
pub mod tree;
