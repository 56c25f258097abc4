//! Wire-format stability for the boundary types, behind the `serde` feature.

#![cfg(feature = "serde")]

use quant_engine::{ErrorKind, PricingMethod, PricingRequest};
use quant_models::instruments::{MarketState, OptionContract, OptionType};

fn request() -> PricingRequest {
    let contract = OptionContract::new(100.0, 1.0, OptionType::Call).unwrap();
    let market = MarketState::new(100.0, 0.05, 0.2).unwrap();
    PricingRequest::binomial(contract, market, 500)
}

#[test]
fn test_pricing_method_tokens() {
    assert_eq!(
        serde_json::to_string(&PricingMethod::Binomial).unwrap(),
        "\"binomial\""
    );
    assert_eq!(
        serde_json::to_string(&PricingMethod::BlackScholes).unwrap(),
        "\"bs\""
    );
}

#[test]
fn test_error_kind_tokens() {
    assert_eq!(
        serde_json::to_string(&ErrorKind::ArbitrageViolation).unwrap(),
        "\"arbitrage_violation\""
    );
    assert_eq!(
        serde_json::to_string(&ErrorKind::OutOfRange).unwrap(),
        "\"out_of_range\""
    );
}

#[test]
fn test_pricing_request_round_trip() {
    let original = request();
    let json = serde_json::to_string(&original).unwrap();
    let decoded: PricingRequest = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn test_option_type_tokens() {
    assert_eq!(serde_json::to_string(&OptionType::Call).unwrap(), "\"call\"");
    let parsed: OptionType = serde_json::from_str("\"put\"").unwrap();
    assert_eq!(parsed, OptionType::Put);
}
