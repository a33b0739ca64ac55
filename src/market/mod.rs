//! Per-call market parameter containers for the two pricing models.

/// Black-Scholes market snapshot.
///
/// Carried per pricing call rather than stored on the contract, so one
/// contract can be repriced under many market states.
///
/// # Numerical notes
/// Degenerate values (`volatility == 0`) are deliberately not rejected here;
/// they propagate as non-finite prices. See [`crate::math::BsFactors`].
///
/// # Examples
/// ```
/// use optionlab::market::BsMarket;
///
/// let market = BsMarket::new(0.20, 0.05).with_dividend_yield(0.02);
/// assert_eq!(market.dividend_yield, 0.02);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BsMarket {
    /// Annualized volatility of the underlying.
    pub volatility: f64,
    /// Continuously compounded risk-free rate.
    pub rate: f64,
    /// Continuously compounded dividend yield.
    pub dividend_yield: f64,
}

impl BsMarket {
    /// Creates a snapshot with zero dividend yield.
    pub fn new(volatility: f64, rate: f64) -> Self {
        Self {
            volatility,
            rate,
            dividend_yield: 0.0,
        }
    }

    /// Sets the continuous dividend yield.
    pub fn with_dividend_yield(mut self, dividend_yield: f64) -> Self {
        self.dividend_yield = dividend_yield;
        self
    }
}

/// Binomial lattice parameters.
///
/// The per-step growth factor is simple, `1 + rate * dt`, not exponential;
/// the regression vectors are priced under this convention. `up == down`
/// is not rejected and yields non-finite results.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TreeParams {
    /// Multiplicative up move per step.
    pub up: f64,
    /// Multiplicative down move per step.
    pub down: f64,
    /// Simple per-step risk-free rate.
    pub rate: f64,
    /// Number of tree steps.
    pub steps: usize,
}

impl TreeParams {
    /// Creates lattice parameters.
    pub fn new(up: f64, down: f64, rate: f64, steps: usize) -> Self {
        Self {
            up,
            down,
            rate,
            steps,
        }
    }
}
