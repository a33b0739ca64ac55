//! Cash-or-nothing digital option contract.
//!
//! Pays a fixed cash amount when the option finishes in the money, nothing
//! otherwise. Only the Black-Scholes price and vega are defined for this
//! payoff family: the lattice path and delta/gamma are a deliberate scope
//! boundary and fail with [`PricingError::Unsupported`] rather than
//! returning a placeholder number.

use std::str::FromStr;

use crate::core::{EuropeanOption, Instrument, OptionType, PricingError};
use crate::engines::analytic::digital;
use crate::market::{BsMarket, TreeParams};

/// Cash-or-nothing digital option contract.
///
/// # Examples
/// ```
/// use optionlab::core::{EuropeanOption, OptionType, PricingError};
/// use optionlab::instruments::CashOrNothingOption;
/// use optionlab::market::TreeParams;
///
/// let digital = CashOrNothingOption::new(OptionType::Call, 100.0, 100.0, 1.0, 10.0).unwrap();
/// let err = digital.binomial_price(&TreeParams::new(1.2, 0.8, 0.0, 1)).unwrap_err();
/// assert!(matches!(err, PricingError::Unsupported(_)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CashOrNothingOption {
    /// Call or put.
    pub option_type: OptionType,
    /// Current underlying price.
    pub spot: f64,
    /// Trigger strike.
    pub strike: f64,
    /// Time to expiry in years.
    pub duration: f64,
    /// Fixed cash amount paid when in the money at expiry.
    pub payoff: f64,
}

impl CashOrNothingOption {
    /// Builds a contract, validating that all numeric fields are positive.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidInput`] on any non-positive field.
    pub fn new(
        option_type: OptionType,
        spot: f64,
        strike: f64,
        duration: f64,
        payoff: f64,
    ) -> Result<Self, PricingError> {
        let contract = Self {
            option_type,
            spot,
            strike,
            duration,
            payoff,
        };
        contract.validate()?;
        Ok(contract)
    }

    /// Builds a contract from a textual call/put flag.
    pub fn with_flag(
        flag: &str,
        spot: f64,
        strike: f64,
        duration: f64,
        payoff: f64,
    ) -> Result<Self, PricingError> {
        Self::new(OptionType::from_str(flag)?, spot, strike, duration, payoff)
    }

    /// Re-checks the construction invariants.
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.spot <= 0.0 {
            return Err(PricingError::InvalidInput(
                "digital spot must be > 0".to_string(),
            ));
        }
        if self.strike <= 0.0 {
            return Err(PricingError::InvalidInput(
                "digital strike must be > 0".to_string(),
            ));
        }
        if self.duration <= 0.0 {
            return Err(PricingError::InvalidInput(
                "digital duration must be > 0".to_string(),
            ));
        }
        if self.payoff <= 0.0 {
            return Err(PricingError::InvalidInput(
                "digital payoff must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Instrument for CashOrNothingOption {
    fn instrument_type(&self) -> &str {
        "CashOrNothingOption"
    }
}

impl EuropeanOption for CashOrNothingOption {
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

    fn binomial_price(&self, _params: &TreeParams) -> Result<f64, PricingError> {
        Err(PricingError::Unsupported(
            "binomial pricing is not defined for cash-or-nothing digitals".to_string(),
        ))
    }

    fn bs_call_price(&self, market: &BsMarket) -> Result<f64, PricingError> {
        self.validate()?;
        let factors = self.bs_factors(market);
        Ok(digital::call_price(self.payoff, &factors))
    }

    fn bs_put_price(&self, market: &BsMarket) -> Result<f64, PricingError> {
        self.validate()?;
        let factors = self.bs_factors(market);
        Ok(digital::put_price(self.payoff, &factors))
    }

    fn bs_delta(&self, _market: &BsMarket) -> Result<f64, PricingError> {
        Err(PricingError::Unsupported(
            "delta is not defined for cash-or-nothing digitals".to_string(),
        ))
    }

    fn bs_gamma(&self, _market: &BsMarket) -> Result<f64, PricingError> {
        Err(PricingError::Unsupported(
            "gamma is not defined for cash-or-nothing digitals".to_string(),
        ))
    }

    fn bs_vega(&self, market: &BsMarket) -> Result<f64, PricingError> {
        self.validate()?;
        let factors = self.bs_factors(market);
        Ok(digital::vega(self.payoff, market.volatility, &factors))
    }
}
