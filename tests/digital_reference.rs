//! Cash-or-nothing digital regression and error-contract tests.
//!
//! Hand-derived values: S=K=100, r=0.05, sigma=0.25, T=1, cash=10 gives
//! d1 = 0.325, d2 = 0.075, N(d2) = 0.52989, so the call is worth
//! 10 * exp(-0.05) * 0.52989 = 5.0406 and the put the complementary
//! 10 * exp(-0.05) * 0.47011 = 4.4718.

use approx::assert_relative_eq;
use optionlab::core::{EuropeanOption, OptionType, PricingError};
use optionlab::instruments::CashOrNothingOption;
use optionlab::market::{BsMarket, TreeParams};

fn ten_cash(option_type: OptionType) -> CashOrNothingOption {
    CashOrNothingOption::new(option_type, 100.0, 100.0, 1.0, 10.0).unwrap()
}

#[test]
fn at_the_money_call_and_put_prices() {
    let market = BsMarket::new(0.25, 0.05);
    let call = ten_cash(OptionType::Call);
    let put = ten_cash(OptionType::Put);
    assert_relative_eq!(call.bs_price(&market).unwrap(), 5.0406, max_relative = 1e-3);
    assert_relative_eq!(put.bs_price(&market).unwrap(), 4.4718, max_relative = 1e-3);
}

#[test]
fn call_and_put_sum_to_discounted_cash() {
    let market = BsMarket::new(0.25, 0.05);
    let call = ten_cash(OptionType::Call);
    let put = ten_cash(OptionType::Put);
    let total = call.bs_price(&market).unwrap() + put.bs_price(&market).unwrap();
    assert_relative_eq!(total, 10.0 * (-0.05f64).exp(), epsilon = 1e-9);
}

#[test]
fn at_the_money_vega_hand_value() {
    // -df_r * pdf(d2) * (d1 / vol) * cash / 100.
    let market = BsMarket::new(0.25, 0.05);
    let call = ten_cash(OptionType::Call);
    assert_relative_eq!(call.bs_vega(&market).unwrap(), -0.0492, max_relative = 1e-2);
    // Side-independent: the formula has no call/put branch.
    let put = ten_cash(OptionType::Put);
    assert_relative_eq!(
        call.bs_vega(&market).unwrap(),
        put.bs_vega(&market).unwrap(),
        epsilon = 1e-15
    );
}

#[test]
fn lattice_and_second_order_greeks_are_unsupported() {
    let market = BsMarket::new(0.25, 0.05);
    let digital = ten_cash(OptionType::Call);

    let err = digital
        .binomial_price(&TreeParams::new(1.2, 0.8, 0.0, 3))
        .unwrap_err();
    assert!(matches!(err, PricingError::Unsupported(_)));

    assert!(matches!(
        digital.bs_delta(&market),
        Err(PricingError::Unsupported(_))
    ));
    assert!(matches!(
        digital.bs_gamma(&market),
        Err(PricingError::Unsupported(_))
    ));
    // The bundle must fail too, never return a placeholder greek.
    assert!(digital.bs_greeks(&market).is_err());
}

#[test]
fn invalid_flag_and_fields_are_rejected() {
    assert!(matches!(
        CashOrNothingOption::with_flag("straddle", 100.0, 100.0, 1.0, 10.0),
        Err(PricingError::InvalidInput(_))
    ));
    assert!(matches!(
        CashOrNothingOption::new(OptionType::Call, 100.0, 100.0, -1.0, 10.0),
        Err(PricingError::InvalidInput(_))
    ));
}
