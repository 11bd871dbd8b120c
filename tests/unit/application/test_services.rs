use binance_futures_cli::application::models::order::{NewOrderRequest, Side};
use binance_futures_cli::application::services::{
    AccountService, AccountServiceImpl, MarketService, MarketServiceImpl, OrderService,
    OrderServiceImpl,
};
use binance_futures_cli::config::{Config, Credentials, RestApiConfig};
use binance_futures_cli::error::AppError;
use binance_futures_cli::transport::http_client::BinanceHttpClientImpl;
use mockito::Matcher;
use std::sync::Arc;

fn test_config(base_url: &str) -> Config {
    Config {
        credentials: Credentials {
            api_key: "test-key".to_string(),
            api_secret: "test-secret".to_string(),
        },
        rest_api: RestApiConfig {
            base_url: base_url.to_string(),
            timeout: 5,
            recv_window: 5000,
        },
        rate_limit_safety_margin: 1.0,
        log_file: "test.log".to_string(),
    }
}

fn transport(base_url: &str) -> Arc<BinanceHttpClientImpl> {
    Arc::new(BinanceHttpClientImpl::new(Arc::new(test_config(base_url))).unwrap())
}

#[tokio::test]
async fn market_service_fetches_price_without_signature() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/fapi/v1/ticker/price")
        .match_query(Matcher::UrlEncoded("symbol".into(), "BTCUSDT".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"symbol": "BTCUSDT", "price": "43251.70"}"#)
        .create_async()
        .await;

    let service = MarketServiceImpl::new(transport(&server.url()));
    let ticker = service.get_price("btcusdt").await.unwrap();

    assert_eq!(ticker.symbol, "BTCUSDT");
    assert!((ticker.price - 43251.70).abs() < 1e-9);
    mock.assert_async().await;
}

#[tokio::test]
async fn order_service_signs_placement_and_parses_response() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/fapi/v1/order")
        .match_query(Matcher::AllOf(vec![
            Matcher::Regex("symbol=BTCUSDT".to_string()),
            Matcher::Regex("side=BUY".to_string()),
            Matcher::Regex("type=MARKET".to_string()),
            Matcher::Regex("quantity=0.01".to_string()),
            Matcher::Regex("recvWindow=5000".to_string()),
            Matcher::Regex("timestamp=\\d+".to_string()),
            Matcher::Regex("signature=[0-9a-f]{64}".to_string()),
        ]))
        .match_header("X-MBX-APIKEY", "test-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "orderId": 4058764490,
                "symbol": "BTCUSDT",
                "status": "NEW",
                "clientOrderId": "TESTREF",
                "price": "0",
                "avgPrice": "0.00",
                "origQty": "0.010",
                "executedQty": "0",
                "type": "MARKET",
                "side": "BUY",
                "updateTime": 1699017600123
            }"#,
        )
        .create_async()
        .await;

    let request = NewOrderRequest::market("BTCUSDT", Side::Buy, 0.01).unwrap();
    let service = OrderServiceImpl::new(transport(&server.url()));
    let response = service.place_order(&request).await.unwrap();

    assert_eq!(response.order_id, 4058764490);
    assert_eq!(response.status, "NEW");
    mock.assert_async().await;
}

#[tokio::test]
async fn order_service_surfaces_exchange_rejection_verbatim() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("DELETE", "/fapi/v1/order")
        .match_query(Matcher::Regex("orderId=999".to_string()))
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"code": -2011, "msg": "Unknown order sent."}"#)
        .create_async()
        .await;

    let service = OrderServiceImpl::new(transport(&server.url()));
    let err = service.cancel_order("BTCUSDT", 999).await.unwrap_err();

    match err {
        AppError::Exchange { code, message } => {
            assert_eq!(code, -2011);
            assert_eq!(message, "Unknown order sent.");
        }
        other => panic!("Expected Exchange error, got {other:?}"),
    }
}

#[tokio::test]
async fn account_service_fetches_snapshot() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/fapi/v2/account")
        .match_query(Matcher::Regex("signature=[0-9a-f]{64}".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "totalWalletBalance": "15000.00",
                "totalMarginBalance": "15012.50",
                "availableBalance": "14100.25",
                "totalUnrealizedProfit": "12.50",
                "positions": []
            }"#,
        )
        .create_async()
        .await;

    let service = AccountServiceImpl::new(transport(&server.url()));
    let account = service.get_account().await.unwrap();

    assert!((account.total_wallet_balance - 15000.0).abs() < 1e-9);
    assert!(account.positions.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn account_service_filters_open_orders_by_symbol() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/fapi/v1/openOrders")
        .match_query(Matcher::AllOf(vec![
            Matcher::Regex("symbol=ETHUSDT".to_string()),
            Matcher::Regex("signature=[0-9a-f]{64}".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[{
                "orderId": 7,
                "symbol": "ETHUSDT",
                "status": "NEW",
                "clientOrderId": "REF7",
                "price": "2500",
                "origQty": "1",
                "executedQty": "0",
                "type": "LIMIT",
                "side": "BUY",
                "timeInForce": "GTC"
            }]"#,
        )
        .create_async()
        .await;

    let service = AccountServiceImpl::new(transport(&server.url()));
    let orders = service.get_open_orders(Some("ethusdt")).await.unwrap();

    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].order_id, 7);
    mock.assert_async().await;
}

#[tokio::test]
async fn invalid_symbol_never_reaches_the_wire() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let service = MarketServiceImpl::new(transport(&server.url()));
    let err = service.get_price("   ").await.unwrap_err();

    assert!(err.is_validation());
    mock.assert_async().await;
}
