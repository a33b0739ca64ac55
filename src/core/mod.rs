//! Core traits, common domain types, and library-wide error structures.

use std::str::FromStr;

use crate::market::{BsMarket, TreeParams};
use crate::math::BsFactors;

/// Plain-vanilla option side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum OptionType {
    /// Call option payoff profile.
    Call,
    /// Put option payoff profile.
    Put,
}

impl OptionType {
    /// Returns +1.0 for calls and -1.0 for puts.
    pub fn sign(self) -> f64 {
        match self {
            Self::Call => 1.0,
            Self::Put => -1.0,
        }
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    /// Parses a call/put flag from its text form, case-insensitively.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidInput`] for any flag outside
    /// `{call, put}`, e.g. `"straddle"`.
    fn from_str(flag: &str) -> Result<Self, Self::Err> {
        match flag.to_ascii_lowercase().as_str() {
            "call" => Ok(Self::Call),
            "put" => Ok(Self::Put),
            other => Err(PricingError::InvalidInput(format!(
                "option kind must be `call` or `put`, got `{other}`"
            ))),
        }
    }
}

/// First- and second-order Black-Scholes sensitivities.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Greeks {
    /// First derivative to spot.
    pub delta: f64,
    /// Second derivative to spot.
    pub gamma: f64,
    /// First derivative to volatility, per one-percentage-point move.
    pub vega: f64,
}

/// Common trait implemented by every priceable contract.
pub trait Instrument: std::fmt::Debug {
    /// Returns a short type identifier for diagnostics and bindings.
    fn instrument_type(&self) -> &str;
}

/// European option contract abstraction.
///
/// Concrete payoff families implement the model-specific formulas; the
/// provided methods dispatch on the call/put side and assemble greeks.
/// Every operation is a pure function of the contract's immutable fields
/// plus the market parameters supplied at call time.
pub trait EuropeanOption: Instrument {
    /// Call or put.
    fn option_type(&self) -> OptionType;
    /// Current underlying price.
    fn spot(&self) -> f64;
    /// Exercise price.
    fn strike(&self) -> f64;
    /// Time parameter in years. Black-Scholes formulas read this as total
    /// time to expiry; the binomial lattice reads it as the length of a
    /// single tree step.
    fn duration(&self) -> f64;

    /// Prices the contract on a recombining multiplicative binomial tree.
    fn binomial_price(&self, params: &TreeParams) -> Result<f64, PricingError>;
    /// Black-Scholes price of the call side.
    fn bs_call_price(&self, market: &BsMarket) -> Result<f64, PricingError>;
    /// Black-Scholes price of the put side.
    fn bs_put_price(&self, market: &BsMarket) -> Result<f64, PricingError>;
    /// Black-Scholes delta.
    fn bs_delta(&self, market: &BsMarket) -> Result<f64, PricingError>;
    /// Black-Scholes gamma.
    fn bs_gamma(&self, market: &BsMarket) -> Result<f64, PricingError>;
    /// Black-Scholes vega, per one-percentage-point volatility move.
    fn bs_vega(&self, market: &BsMarket) -> Result<f64, PricingError>;

    /// Black-Scholes price for the contract's own side.
    fn bs_price(&self, market: &BsMarket) -> Result<f64, PricingError> {
        match self.option_type() {
            OptionType::Call => self.bs_call_price(market),
            OptionType::Put => self.bs_put_price(market),
        }
    }

    /// Assembles the full greek set from the side-specific formulas.
    fn bs_greeks(&self, market: &BsMarket) -> Result<Greeks, PricingError> {
        Ok(Greeks {
            delta: self.bs_delta(market)?,
            gamma: self.bs_gamma(market)?,
            vega: self.bs_vega(market)?,
        })
    }

    /// Auxiliary `d1`/`d2` terms and discount factors shared by every
    /// Black-Scholes formula. Unguarded against zero volatility or zero
    /// duration; see [`BsFactors`].
    fn bs_factors(&self, market: &BsMarket) -> BsFactors {
        BsFactors::compute(self.spot(), self.strike(), self.duration(), market)
    }
}

/// Errors surfaced by the contract and pricing API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Input validation error.
    InvalidInput(String),
    /// Operation not defined for this payoff family.
    Unsupported(String),
}

impl std::fmt::Display for PricingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::Unsupported(msg) => write!(f, "unsupported operation: {msg}"),
        }
    }
}

impl std::error::Error for PricingError {}
