//! Thin wrappers around the `statrs` numerics used by the pricing formulas,
//! plus the shared Black-Scholes auxiliary quantities.

use std::sync::LazyLock;

use statrs::distribution::{Continuous, ContinuousCDF, Normal};
use statrs::function::factorial::binomial;

use crate::market::BsMarket;

static STD_NORMAL: LazyLock<Normal> =
    LazyLock::new(|| Normal::new(0.0, 1.0).expect("standard normal parameters are valid"));

/// Standard normal cumulative distribution function.
#[inline]
pub fn normal_cdf(x: f64) -> f64 {
    STD_NORMAL.cdf(x)
}

/// Standard normal probability density function.
#[inline]
pub fn normal_pdf(x: f64) -> f64 {
    STD_NORMAL.pdf(x)
}

/// Binomial coefficient `C(n, k)` as a float.
#[inline]
pub fn binomial_coefficient(n: u64, k: u64) -> f64 {
    binomial(n, k)
}

/// Auxiliary quantities shared by every Black-Scholes formula.
///
/// # Numerical notes
/// Not guarded against degenerate inputs: `volatility == 0` or
/// `duration == 0` makes `d1`/`d2` non-finite, which then propagates through
/// any price or greek built on the factors. Callers are responsible for
/// supplying non-degenerate market parameters.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BsFactors {
    /// `(ln(S/K) + (r - q + sigma^2/2) T) / (sigma sqrt(T))`.
    pub d1: f64,
    /// `d1 - sigma sqrt(T)`.
    pub d2: f64,
    /// `exp(-r T)`.
    pub risk_free_discount: f64,
    /// `exp(-q T)`.
    pub dividend_discount: f64,
}

impl BsFactors {
    /// Computes the factor set for a contract's static fields and a market
    /// snapshot.
    pub fn compute(spot: f64, strike: f64, duration: f64, market: &BsMarket) -> Self {
        let sig_sqrt_t = market.volatility * duration.sqrt();
        let d1 = ((spot / strike).ln()
            + (market.rate - market.dividend_yield + 0.5 * market.volatility * market.volatility)
                * duration)
            / sig_sqrt_t;
        Self {
            d1,
            d2: d1 - sig_sqrt_t,
            risk_free_discount: (-market.rate * duration).exp(),
            dividend_discount: (-market.dividend_yield * duration).exp(),
        }
    }
}
