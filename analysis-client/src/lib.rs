use std::time::Duration;

use redditboss_core::{AnalysisApiError, AnalyzeRequest, AppConfig, CoreError, Opportunity};
use reqwest::{Client, StatusCode};
use tracing::{debug, error, info};

const ANALYZE_ENDPOINT: &str = "/api/analyze-content";

/// HTTP client for the analysis backend.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    http_client: Client,
    base_url: String,
}

impl AnalysisClient {
    pub fn new(config: &AppConfig) -> Result<Self, CoreError> {
        config.validate()?;

        let http_client = Client::builder()
            .user_agent(concat!("redditboss/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http_client,
            base_url: config.backend_url.trim_end_matches('/').to_string(),
        })
    }

    /// Submits user content for analysis and returns the engagement
    /// opportunities found by the backend, in the order it sent them.
    pub async fn analyze_content(&self, text: &str) -> Result<Vec<Opportunity>, CoreError> {
        let url = format!("{}{}", self.base_url, ANALYZE_ENDPOINT);
        let request = AnalyzeRequest {
            text: text.to_string(),
        };

        info!("Submitting {} chars of content for analysis", text.len());
        let response = self
            .http_client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Analysis request failed: {}", e);
                CoreError::Network(e)
            })?;

        let status = response.status();
        // Read the body as text regardless of status; failure bodies and
        // empty bodies are decoded from the same text.
        let body = response.text().await?;
        debug!("Analysis response: {} with {} byte body", status, body.len());

        decode_response(status, &body)
    }
}

/// Decodes an analysis response from its status and raw body text.
fn decode_response(status: StatusCode, body: &str) -> Result<Vec<Opportunity>, CoreError> {
    if !status.is_success() {
        let api_error = failure_message(status, body);
        error!("Analysis backend returned {}: {}", status, api_error);
        return Err(api_error.into());
    }

    // An empty body on success is a valid "no results" response.
    if body.is_empty() {
        return Ok(Vec::new());
    }

    let opportunities: Vec<Opportunity> = serde_json::from_str(body)?;
    info!("Received {} opportunities", opportunities.len());
    Ok(opportunities)
}

/// Derives the user-facing message for a non-2xx response. Precedence: a
/// non-empty JSON `detail` field, then the serialized JSON body, then the
/// raw body text, then a generic status line when the body is empty.
fn failure_message(status: StatusCode, body: &str) -> AnalysisApiError {
    let status_code = status.as_u16();

    if body.is_empty() {
        return AnalysisApiError::Http { status_code };
    }

    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => {
            let detail = value
                .get("detail")
                .and_then(serde_json::Value::as_str)
                .filter(|detail| !detail.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| value.to_string());
            AnalysisApiError::Backend {
                detail,
                status_code,
            }
        }
        Err(_) => AnalysisApiError::Backend {
            detail: body.to_string(),
            status_code,
        },
    }
}
