//! Plain-vanilla European option contract.
//!
//! [`VanillaOption`] stores the static trade parameters (side, spot,
//! strike, duration) and implements both pricing models: the binomial
//! lattice through [`crate::engines::tree::binomial`] and the closed forms
//! through [`crate::engines::analytic::black_scholes`]. Payoff at expiry is
//! `max(S_T - K, 0)` for a call, `max(K - S_T, 0)` for a put.

use std::str::FromStr;

use crate::core::{EuropeanOption, Instrument, OptionType, PricingError};
use crate::engines::analytic::black_scholes;
use crate::engines::tree::binomial;
use crate::market::{BsMarket, TreeParams};

/// Vanilla option contract.
///
/// Immutable once constructed; every pricing operation is a pure function
/// of these fields plus the market parameters passed at call time.
///
/// # Examples
/// ```
/// use optionlab::core::{EuropeanOption, OptionType};
/// use optionlab::instruments::VanillaOption;
/// use optionlab::market::TreeParams;
///
/// let option = VanillaOption::new(OptionType::Call, 100.0, 100.0, 1.0).unwrap();
/// let price = option.binomial_price(&TreeParams::new(1.2, 0.8, 0.0, 1)).unwrap();
/// assert!((price - 10.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VanillaOption {
    /// Call or put.
    pub option_type: OptionType,
    /// Current underlying price.
    pub spot: f64,
    /// Strike level.
    pub strike: f64,
    /// Time parameter in years; total expiry for the closed forms, length
    /// of one step for the lattice.
    pub duration: f64,
}

impl VanillaOption {
    /// Builds a contract, validating that spot, strike, and duration are
    /// positive.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidInput`] on any non-positive field.
    pub fn new(
        option_type: OptionType,
        spot: f64,
        strike: f64,
        duration: f64,
    ) -> Result<Self, PricingError> {
        let contract = Self {
            option_type,
            spot,
            strike,
            duration,
        };
        contract.validate()?;
        Ok(contract)
    }

    /// Builds a contract from a textual call/put flag.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidInput`] for flags outside
    /// `{call, put}` or non-positive numeric fields.
    pub fn with_flag(
        flag: &str,
        spot: f64,
        strike: f64,
        duration: f64,
    ) -> Result<Self, PricingError> {
        Self::new(OptionType::from_str(flag)?, spot, strike, duration)
    }

    /// Builds a call contract.
    pub fn call(spot: f64, strike: f64, duration: f64) -> Result<Self, PricingError> {
        Self::new(OptionType::Call, spot, strike, duration)
    }

    /// Builds a put contract.
    pub fn put(spot: f64, strike: f64, duration: f64) -> Result<Self, PricingError> {
        Self::new(OptionType::Put, spot, strike, duration)
    }

    /// Re-checks the construction invariants. Called defensively at the top
    /// of every pricing computation.
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.spot <= 0.0 {
            return Err(PricingError::InvalidInput(
                "vanilla spot must be > 0".to_string(),
            ));
        }
        if self.strike <= 0.0 {
            return Err(PricingError::InvalidInput(
                "vanilla strike must be > 0".to_string(),
            ));
        }
        if self.duration <= 0.0 {
            return Err(PricingError::InvalidInput(
                "vanilla duration must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Backward-induction lattice with per-node value and replicating
    /// delta. Diagnostic companion to [`EuropeanOption::binomial_price`].
    pub fn payoff_tree(&self, params: &TreeParams) -> Result<binomial::PayoffTree, PricingError> {
        self.validate()?;
        Ok(binomial::payoff_tree(
            self.option_type,
            self.spot,
            self.strike,
            self.duration,
            params,
        ))
    }

    /// Replicating portfolio of a single-step tree.
    pub fn one_step_replication(
        &self,
        params: &TreeParams,
    ) -> Result<binomial::ReplicatingPortfolio, PricingError> {
        self.validate()?;
        Ok(binomial::one_step_replication(
            self.option_type,
            self.spot,
            self.strike,
            self.duration,
            params,
        ))
    }
}

impl Instrument for VanillaOption {
    fn instrument_type(&self) -> &str {
        "VanillaOption"
    }
}

impl EuropeanOption for VanillaOption {
    fn option_type(&self) -> OptionType {
        self.option_type
    }

    fn spot(&self) -> f64 {
        self.spot
    }

    fn strike(&self) -> f64 {
        self.strike
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn binomial_price(&self, params: &TreeParams) -> Result<f64, PricingError> {
        self.validate()?;
        Ok(binomial::binomial_price(
            self.option_type,
            self.spot,
            self.strike,
            self.duration,
            params,
        ))
    }

    fn bs_call_price(&self, market: &BsMarket) -> Result<f64, PricingError> {
        self.validate()?;
        let factors = self.bs_factors(market);
        Ok(black_scholes::call_price(self.spot, self.strike, &factors))
    }

    fn bs_put_price(&self, market: &BsMarket) -> Result<f64, PricingError> {
        self.validate()?;
        let factors = self.bs_factors(market);
        Ok(black_scholes::put_price(self.spot, self.strike, &factors))
    }

    fn bs_delta(&self, market: &BsMarket) -> Result<f64, PricingError> {
        self.validate()?;
        let factors = self.bs_factors(market);
        Ok(black_scholes::delta(self.option_type, &factors))
    }

    fn bs_gamma(&self, market: &BsMarket) -> Result<f64, PricingError> {
        self.validate()?;
        let factors = self.bs_factors(market);
        Ok(black_scholes::gamma(
            self.spot,
            self.duration,
            market,
            &factors,
        ))
    }

    fn bs_vega(&self, market: &BsMarket) -> Result<f64, PricingError> {
        self.validate()?;
        let factors = self.bs_factors(market);
        Ok(black_scholes::vega(self.spot, self.duration, &factors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_fields() {
        assert!(VanillaOption::call(0.0, 100.0, 1.0).is_err());
        assert!(VanillaOption::call(100.0, -1.0, 1.0).is_err());
        assert!(VanillaOption::put(100.0, 100.0, 0.0).is_err());
    }

    #[test]
    fn flag_constructor_round_trips_sides() {
        let call = VanillaOption::with_flag("call", 100.0, 95.0, 0.5).unwrap();
        assert_eq!(call.option_type, OptionType::Call);
        let put = VanillaOption::with_flag("PUT", 100.0, 95.0, 0.5).unwrap();
        assert_eq!(put.option_type, OptionType::Put);
    }

    #[test]
    fn flag_constructor_rejects_straddle() {
        let err = VanillaOption::with_flag("straddle", 100.0, 100.0, 1.0).unwrap_err();
        assert!(matches!(err, PricingError::InvalidInput(_)));
    }
}
