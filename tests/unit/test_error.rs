use binance_futures_cli::error::{AppError, AuthError};
use reqwest::StatusCode;

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("quantity must be positive".to_string());
    assert_eq!(error.to_string(), "invalid input: quantity must be positive");
}

#[test]
fn test_app_error_display_exchange() {
    let error = AppError::Exchange {
        code: -2011,
        message: "Unknown order sent.".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "exchange rejected request (-2011): Unknown order sent."
    );
}

#[test]
fn test_app_error_display_unauthorized() {
    let error = AppError::Unauthorized;
    assert_eq!(error.to_string(), "unauthorized");
}

#[test]
fn test_app_error_display_rate_limit() {
    let error = AppError::RateLimitExceeded;
    assert_eq!(error.to_string(), "rate limit exceeded");
}

#[test]
fn test_app_error_display_not_found() {
    let error = AppError::NotFound;
    assert_eq!(error.to_string(), "not found");
}

#[test]
fn test_app_error_display_unexpected() {
    let error = AppError::Unexpected(StatusCode::BAD_REQUEST);
    assert!(error.to_string().contains("400"));
}

#[test]
fn test_app_error_from_serde() {
    let json = r#"{"invalid": json}"#;
    let serde_error = serde_json::from_str::<serde_json::Value>(json).unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(_) => (),
        _ => panic!("Expected Json error"),
    }
}

#[test]
fn test_app_error_from_io() {
    let io_error = std::io::Error::other("test");
    let app_error: AppError = io_error.into();

    match app_error {
        AppError::Io(_) => (),
        _ => panic!("Expected Io error"),
    }
}

#[test]
fn test_app_error_is_validation() {
    assert!(AppError::InvalidInput("x".to_string()).is_validation());
    assert!(!AppError::NotFound.is_validation());
    assert!(
        !AppError::Exchange {
            code: -1,
            message: "x".to_string()
        }
        .is_validation()
    );
}

#[test]
fn test_auth_error_display_missing_credentials() {
    let error = AuthError::MissingCredentials("BINANCE_API_KEY");
    assert_eq!(
        error.to_string(),
        "missing credentials: BINANCE_API_KEY is not set"
    );
}

#[test]
fn test_auth_error_display_bad_credentials() {
    assert_eq!(AuthError::BadCredentials.to_string(), "bad credentials");
}

#[test]
fn test_auth_error_display_connectivity() {
    let error = AuthError::Connectivity("connection refused".to_string());
    assert_eq!(
        error.to_string(),
        "connectivity error: connection refused"
    );
}
