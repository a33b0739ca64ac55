//! Property tests over randomized but non-degenerate market parameters.

use optionlab::core::EuropeanOption;
use optionlab::instruments::VanillaOption;
use optionlab::market::BsMarket;
use proptest::prelude::*;

proptest! {
    #[test]
    fn put_call_parity_holds(
        spot in 50.0..150.0f64,
        strike in 50.0..150.0f64,
        duration in 0.05..2.0f64,
        volatility in 0.05..0.60f64,
        rate in 0.0..0.10f64,
        dividend_yield in 0.0..0.06f64,
    ) {
        let market = BsMarket::new(volatility, rate).with_dividend_yield(dividend_yield);
        let call = VanillaOption::call(spot, strike, duration).unwrap();
        let put = VanillaOption::put(spot, strike, duration).unwrap();
        let factors = call.bs_factors(&market);

        let lhs = call.bs_price(&market).unwrap() - put.bs_price(&market).unwrap();
        let rhs = spot * factors.dividend_discount - strike * factors.risk_free_discount;

        // 1e-6 relative against the spot scale covers the rhs-near-zero case.
        prop_assert!((lhs - rhs).abs() <= 1e-6 * spot);
    }

    #[test]
    fn gamma_symmetry_holds(
        spot in 50.0..150.0f64,
        strike in 50.0..150.0f64,
        duration in 0.05..2.0f64,
        volatility in 0.05..0.60f64,
        rate in 0.0..0.10f64,
    ) {
        let market = BsMarket::new(volatility, rate);
        let call = VanillaOption::call(spot, strike, duration).unwrap();
        let put = VanillaOption::put(spot, strike, duration).unwrap();

        let call_gamma = call.bs_gamma(&market).unwrap();
        let put_gamma = put.bs_gamma(&market).unwrap();
        prop_assert_eq!(call_gamma, put_gamma);
    }

    #[test]
    fn delta_stays_in_model_bounds(
        spot in 50.0..150.0f64,
        strike in 50.0..150.0f64,
        duration in 0.05..2.0f64,
        volatility in 0.05..0.60f64,
        rate in 0.0..0.10f64,
    ) {
        let market = BsMarket::new(volatility, rate);
        let call = VanillaOption::call(spot, strike, duration).unwrap();
        let put = VanillaOption::put(spot, strike, duration).unwrap();

        let call_delta = call.bs_delta(&market).unwrap();
        let put_delta = put.bs_delta(&market).unwrap();
        prop_assert!((0.0..=1.0).contains(&call_delta));
        prop_assert!((-1.0..=0.0).contains(&put_delta));
    }
}
