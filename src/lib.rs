//! Optionlab is a reference option pricing library: theoretical prices and
//! greeks for simple European contracts under the multi-period binomial
//! tree and the Black-Scholes closed form.
//!
//! Two payoff families are supported: plain vanilla calls/puts and
//! cash-or-nothing digitals. Both implement the
//! [`core::EuropeanOption`] contract abstraction; the model-specific
//! formulas live under [`engines`].
//!
//! References: Hull, *Options, Futures, and Other Derivatives*, Ch. 13 and
//! 19 for the lattice and closed forms; Haug, *Option Pricing Formulas*,
//! Ch. 4.19 for digitals.
//!
//! Numerical considerations:
//! - Degenerate market inputs (zero volatility, zero duration, `up == down`
//!   lattice moves) are documented caller responsibility and propagate as
//!   non-finite values rather than errors.
//! - For the binomial model the contract `duration` is the length of one
//!   tree step. The regression values shipped in `tests/` assume this
//!   convention; it is intentionally not normalized to total contract
//!   life.
//!
//! # Quick Start
//! Price a call both ways:
//! ```rust
//! use optionlab::core::EuropeanOption;
//! use optionlab::instruments::VanillaOption;
//! use optionlab::market::{BsMarket, TreeParams};
//!
//! let option = VanillaOption::call(100.0, 100.0, 1.0)?;
//!
//! let tree = option.binomial_price(&TreeParams::new(1.2, 0.8, 0.0, 1))?;
//! assert!((tree - 10.0).abs() < 1e-9);
//!
//! let bs = option.bs_price(&BsMarket::new(0.20, 0.05))?;
//! assert!(bs > 10.0 && bs < 11.0);
//! # Ok::<(), optionlab::core::PricingError>(())
//! ```
//!
//! Compute greeks:
//! ```rust
//! use optionlab::core::EuropeanOption;
//! use optionlab::instruments::VanillaOption;
//! use optionlab::market::BsMarket;
//!
//! let option = VanillaOption::call(100.0, 100.0, 1.0)?;
//! let greeks = option.bs_greeks(&BsMarket::new(0.20, 0.05))?;
//! assert!(greeks.delta > 0.0 && greeks.gamma > 0.0 && greeks.vega > 0.0);
//! # Ok::<(), optionlab::core::PricingError>(())
//! ```

pub mod core;
pub mod engines;
pub mod instruments;
pub mod market;
pub mod math;

/// Common imports for ergonomic usage.
pub mod prelude {
    pub use crate::core::{EuropeanOption, Greeks, Instrument, OptionType, PricingError};
    pub use crate::engines::tree::{PayoffTree, ReplicatingPortfolio, TreeNode};
    pub use crate::instruments::{CashOrNothingOption, VanillaOption};
    pub use crate::market::{BsMarket, TreeParams};
}
