//! Serde round-trips for the public contract and result types.

use optionlab::core::{Greeks, OptionType};
use optionlab::instruments::{CashOrNothingOption, VanillaOption};
use optionlab::market::{BsMarket, TreeParams};

fn roundtrip<T>(value: &T) -> T
where
    T: serde::Serialize + serde::de::DeserializeOwned,
{
    let json = serde_json::to_string(value).expect("serialize");
    serde_json::from_str(&json).expect("deserialize")
}

#[test]
fn vanilla_option_roundtrips() {
    let option = VanillaOption::call(100.0, 95.0, 0.5).unwrap();
    assert_eq!(roundtrip(&option), option);
}

#[test]
fn digital_option_roundtrips() {
    let option = CashOrNothingOption::new(OptionType::Put, 100.0, 110.0, 1.0, 25.0).unwrap();
    assert_eq!(roundtrip(&option), option);
}

#[test]
fn market_parameters_roundtrip() {
    let market = BsMarket::new(0.2, 0.05).with_dividend_yield(0.01);
    assert_eq!(roundtrip(&market), market);

    let params = TreeParams::new(1.2, 0.8, 0.05, 3);
    assert_eq!(roundtrip(&params), params);
}

#[test]
fn greeks_roundtrip() {
    let greeks = Greeks {
        delta: 0.536,
        gamma: 0.046,
        vega: 0.115,
    };
    assert_eq!(roundtrip(&greeks), greeks);
}

#[test]
fn payoff_tree_roundtrips() {
    let option = VanillaOption::call(100.0, 100.0, 1.0).unwrap();
    let tree = option
        .payoff_tree(&TreeParams::new(1.2, 0.8, 0.0, 2))
        .unwrap();
    let back: optionlab::engines::tree::PayoffTree = roundtrip(&tree);
    assert_eq!(back, tree);
    assert_eq!(back.levels.len(), 3);
}
