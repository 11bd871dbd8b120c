use binance_futures_cli::application::models::order::{
    NewOrderRequest, OrderKind, Side, TimeInForce, normalize_symbol,
};
use binance_futures_cli::error::AppError;
use std::collections::HashMap;

fn params_of(request: &NewOrderRequest) -> HashMap<&'static str, String> {
    request.to_params().into_iter().collect()
}

#[test]
fn market_order_carries_no_price_fields() {
    let order = NewOrderRequest::market("btcusdt", Side::Buy, 0.01).unwrap();

    assert_eq!(order.symbol, "BTCUSDT");
    assert_eq!(order.kind, OrderKind::Market);

    let params = params_of(&order);
    assert_eq!(params.get("symbol").unwrap(), "BTCUSDT");
    assert_eq!(params.get("side").unwrap(), "BUY");
    assert_eq!(params.get("type").unwrap(), "MARKET");
    assert_eq!(params.get("quantity").unwrap(), "0.01");
    // The Market variant has no slot for prices; the wire query must not
    // mention them no matter what the user typed elsewhere.
    assert!(!params.contains_key("price"));
    assert!(!params.contains_key("stopPrice"));
    assert!(!params.contains_key("timeInForce"));
    assert!(params.contains_key("newClientOrderId"));
}

#[test]
fn limit_order_requires_positive_price() {
    let order = NewOrderRequest::limit("BTCUSDT", Side::Sell, 0.5, 43250.10).unwrap();
    let params = params_of(&order);
    assert_eq!(params.get("type").unwrap(), "LIMIT");
    assert_eq!(params.get("timeInForce").unwrap(), "GTC");
    assert_eq!(params.get("price").unwrap(), "43250.1");
    assert_eq!(order.time_in_force, TimeInForce::GoodTillCancelled);

    let err = NewOrderRequest::limit("BTCUSDT", Side::Sell, 0.5, 0.0).unwrap_err();
    assert!(err.to_string().contains("price must be positive"));

    let err = NewOrderRequest::limit("BTCUSDT", Side::Sell, 0.5, f64::NAN).unwrap_err();
    assert!(err.to_string().contains("price must be positive"));
}

#[test]
fn stop_limit_order_requires_both_levels() {
    let order =
        NewOrderRequest::stop_limit("ETHUSDT", Side::Buy, 1.0, 2500.0, 2510.0).unwrap();
    assert_eq!(
        order.kind,
        OrderKind::StopLimit {
            price: 2510.0,
            stop_price: 2500.0
        }
    );

    let params = params_of(&order);
    // The futures wire type for a stop-limit order is STOP.
    assert_eq!(params.get("type").unwrap(), "STOP");
    assert_eq!(params.get("price").unwrap(), "2510");
    assert_eq!(params.get("stopPrice").unwrap(), "2500");

    let err = NewOrderRequest::stop_limit("ETHUSDT", Side::Buy, 1.0, 0.0, 2510.0).unwrap_err();
    assert!(err.to_string().contains("stop price must be positive"));

    let err = NewOrderRequest::stop_limit("ETHUSDT", Side::Buy, 1.0, 2500.0, -1.0).unwrap_err();
    assert!(err.to_string().contains("price must be positive"));
}

#[test]
fn quantity_must_be_positive_for_every_type() {
    for quantity in [0.0, -1.0, f64::INFINITY, f64::NAN] {
        let err = NewOrderRequest::market("BTCUSDT", Side::Buy, quantity).unwrap_err();
        assert!(
            err.to_string().contains("quantity must be positive"),
            "unexpected error for quantity {quantity}: {err}"
        );
    }
}

#[test]
fn side_parsing_is_case_insensitive_and_strict() {
    assert_eq!("buy".parse::<Side>().unwrap(), Side::Buy);
    assert_eq!("  SELL ".parse::<Side>().unwrap(), Side::Sell);
    assert_eq!("Sell".parse::<Side>().unwrap(), Side::Sell);

    for raw in ["HOLD", "", "BUYY", "LONG"] {
        let err = raw.parse::<Side>().unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
        assert!(err.to_string().contains("side must be BUY or SELL"));
    }
}

#[test]
fn symbols_are_normalized_and_checked() {
    assert_eq!(normalize_symbol("  ethusdt ").unwrap(), "ETHUSDT");

    let err = normalize_symbol("   ").unwrap_err();
    assert!(err.to_string().contains("symbol must not be empty"));

    for raw in ["BTC USDT", "BTC-USDT", "X", "TOOLONGSYMBOLNAME12345"] {
        assert!(normalize_symbol(raw).is_err(), "{raw} should be rejected");
    }
}

#[test]
fn client_reference_can_be_overridden() {
    let order = NewOrderRequest::market("BTCUSDT", Side::Buy, 1.0)
        .unwrap()
        .with_reference("MYREF123".to_string());
    let params = params_of(&order);
    assert_eq!(params.get("newClientOrderId").unwrap(), "MYREF123");
}

#[test]
fn generated_references_differ_between_orders() {
    let a = NewOrderRequest::market("BTCUSDT", Side::Buy, 1.0).unwrap();
    let b = NewOrderRequest::market("BTCUSDT", Side::Buy, 1.0).unwrap();
    assert_ne!(a.client_order_id, b.client_order_id);
}
