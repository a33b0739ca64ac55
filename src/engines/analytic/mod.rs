//! Closed-form pricing formulas.

pub mod black_scholes;
pub mod digital;
