//! Closed-form Black-Scholes prices and greeks for vanilla options.
//!
//! Formulas follow Hull (Ch. 13-19) with a continuous dividend yield.
//! All functions take the shared [`BsFactors`] so that a price and its
//! greeks computed from the same factor set stay mutually consistent.

use crate::core::OptionType;
use crate::market::BsMarket;
use crate::math::{normal_cdf, normal_pdf, BsFactors};

/// `spot * df_q * N(d1) - strike * df_r * N(d2)`.
pub fn call_price(spot: f64, strike: f64, factors: &BsFactors) -> f64 {
    spot * factors.dividend_discount * normal_cdf(factors.d1)
        - strike * factors.risk_free_discount * normal_cdf(factors.d2)
}

/// `strike * df_r * N(-d2) - spot * df_q * N(-d1)`.
pub fn put_price(spot: f64, strike: f64, factors: &BsFactors) -> f64 {
    strike * factors.risk_free_discount * normal_cdf(-factors.d2)
        - spot * factors.dividend_discount * normal_cdf(-factors.d1)
}

/// `df_q * (N(d1) - indicator)` with indicator 0 for calls and 1 for puts.
pub fn delta(option_type: OptionType, factors: &BsFactors) -> f64 {
    let indicator = match option_type {
        OptionType::Call => 0.0,
        OptionType::Put => 1.0,
    };
    factors.dividend_discount * (normal_cdf(factors.d1) - indicator)
}

/// `df_q * N'(d1) / (spot * vol * sqrt(T))`; identical for calls and puts.
pub fn gamma(spot: f64, duration: f64, market: &BsMarket, factors: &BsFactors) -> f64 {
    factors.dividend_discount * normal_pdf(factors.d1)
        / (spot * market.volatility * duration.sqrt())
}

/// `df_q * N'(d1) * spot * sqrt(T) / 100`.
///
/// The division by 100 expresses the sensitivity per one-percentage-point
/// volatility move; the regression vectors assume this convention.
pub fn vega(spot: f64, duration: f64, factors: &BsFactors) -> f64 {
    factors.dividend_discount * normal_pdf(factors.d1) * spot * duration.sqrt() / 100.0
}
