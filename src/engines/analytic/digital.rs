//! Closed-form prices for cash-or-nothing digital options.
//!
//! A digital pays a fixed cash amount when it finishes in the money, so
//! only `N(d2)` (the risk-neutral in-the-money probability) and the
//! risk-free discount enter the price. Haug, "Option Pricing Formulas",
//! Ch. 4.19.

use crate::math::{normal_cdf, normal_pdf, BsFactors};

/// `df_r * N(d2) * cash`.
pub fn call_price(cash: f64, factors: &BsFactors) -> f64 {
    factors.risk_free_discount * normal_cdf(factors.d2) * cash
}

/// `df_r * N(-d2) * cash`.
pub fn put_price(cash: f64, factors: &BsFactors) -> f64 {
    factors.risk_free_discount * normal_cdf(-factors.d2) * cash
}

/// `-df_r * N'(d2) * (d1 / vol) * cash / 100`, identical for both sides.
///
/// Negative around the money: more volatility spreads probability mass away
/// from the strike. Same per-vol-point convention as the vanilla vega.
pub fn vega(cash: f64, volatility: f64, factors: &BsFactors) -> f64 {
    -factors.risk_free_discount * normal_pdf(factors.d2) * (factors.d1 / volatility) * cash / 100.0
}
