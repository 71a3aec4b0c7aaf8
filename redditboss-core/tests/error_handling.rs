use redditboss_core::{AnalysisApiError, ConfigError, CoreError, ErrorExt};

#[test]
fn test_error_codes() {
    let api_error = CoreError::AnalysisApi(AnalysisApiError::Http { status_code: 502 });
    assert_eq!(api_error.error_code(), "ANALYSIS_API");

    let config_error = CoreError::Config(ConfigError::ValidationFailed {
        reason: "backend_url is not a valid URL".to_string(),
    });
    assert_eq!(config_error.error_code(), "CONFIG");

    let internal_error = CoreError::Internal {
        message: "GUI error".to_string(),
    };
    assert_eq!(internal_error.error_code(), "INTERNAL");
}

#[test]
fn test_backend_detail_is_displayed_verbatim() {
    let error = CoreError::AnalysisApi(AnalysisApiError::Backend {
        detail: "Failed to fetch URL: connection refused".to_string(),
        status_code: 400,
    });
    assert_eq!(error.to_string(), "Failed to fetch URL: connection refused");
}

#[test]
fn test_http_status_message_format() {
    let error = CoreError::AnalysisApi(AnalysisApiError::Http { status_code: 503 });
    assert_eq!(error.to_string(), "HTTP error! status: 503");
}

#[test]
fn test_config_error_is_prefixed() {
    let error = CoreError::Config(ConfigError::InvalidFormat {
        details: "expected a table".to_string(),
    });
    assert_eq!(
        error.to_string(),
        "Configuration error: Invalid configuration format: expected a table"
    );
}

#[test]
fn test_logging_helpers_do_not_panic() {
    let error = CoreError::AnalysisApi(AnalysisApiError::Http { status_code: 500 });
    error.log_error();
    error.log_warn();
}
