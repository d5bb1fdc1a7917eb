//! Resilient JSON delivery over HTTP.
//!
//! A received HTTP response of any status is a delivered payload; only
//! transport-level failures are retried, with exponential backoff and a
//! bounded attempt budget.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use serde_json::Value;
use url::Url;

use crate::error::{GenError, GenResult};

#[derive(Clone, Debug)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            backoff: Duration::from_secs(1),
        }
    }
}

/// Normalized view of whatever the endpoint answered.
#[derive(Clone, Debug)]
pub struct DeliveryResponse {
    pub status: u16,
    pub body: String,
    pub headers: HashMap<String, String>,
}

#[derive(Clone, Debug)]
pub struct DeliveryEndpoint {
    pub url: Url,
    pub method: reqwest::Method,
    pub timeout: Duration,
}

/// Drive an attempt closure until it succeeds or the retry budget runs out.
///
/// The closure receives the 1-based attempt number. After a failed attempt
/// `n` (with `n <= max_retries`) the loop sleeps `backoff * 2^(n-1)` before
/// attempt `n + 1`; a failure at attempt `max_retries + 1` propagates as the
/// terminal error.
pub async fn send_with_retry<F, Fut>(policy: &RetryPolicy, mut attempt_op: F) -> GenResult<DeliveryResponse>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = GenResult<DeliveryResponse>>,
{
    let mut attempt = 1u32;
    loop {
        match attempt_op(attempt).await {
            Ok(response) => {
                tracing::info!(attempt, status = response.status, "delivery attempt succeeded");
                return Ok(response);
            }
            Err(err) if attempt > policy.max_retries => {
                tracing::error!(attempt, %err, "retry budget exhausted");
                return Err(err);
            }
            Err(err) => {
                tracing::warn!(attempt, %err, "delivery attempt failed");
            }
        }

        // Saturate instead of overflowing once 2^(attempt-1) leaves u32.
        let wait = policy.backoff.saturating_mul(2u32.saturating_pow(attempt - 1));
        tracing::info!(attempt, wait_ms = wait.as_millis() as u64, "backing off before retry");
        tokio::time::sleep(wait).await;
        attempt += 1;
    }
}

/// Serialize `payload` and POST (or whatever method is configured) it to the
/// endpoint, retrying transport failures per `policy`.
///
/// `extra_headers` are applied first and `Content-Type: application/json`
/// only fills the entry when the caller left it unset.
pub async fn deliver_json(
    http: &reqwest::Client,
    endpoint: &DeliveryEndpoint,
    payload: &Value,
    extra_headers: &HashMap<String, String>,
    policy: &RetryPolicy,
) -> GenResult<DeliveryResponse> {
    let mut headers = HeaderMap::new();
    for (name, value) in extra_headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| GenError::InvalidArgument(format!("invalid header name '{name}': {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| GenError::InvalidArgument(format!("invalid header value for '{name}': {e}")))?;
        headers.insert(name, value);
    }
    headers
        .entry(CONTENT_TYPE)
        .or_insert(HeaderValue::from_static("application/json"));
    let body = serde_json::to_vec(payload)?;

    let headers = &headers;
    let body = &body;
    send_with_retry(policy, |attempt| async move {
        tracing::debug!(
            method = %endpoint.method,
            url = %endpoint.url,
            attempt,
            "sending payload"
        );

        let request = http
            .request(endpoint.method.clone(), endpoint.url.clone())
            .timeout(endpoint.timeout)
            .headers(headers.clone())
            .body(body.clone());

        let response = request.send().await.map_err(|e| GenError::DeliveryTransport {
            attempts: attempt,
            message: e.to_string(),
        })?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response
            .text()
            .await
            .map_err(|e| GenError::DeliveryTransport {
                attempts: attempt,
                message: format!("reading response body: {e}"),
            })?;

        tracing::info!(status, attempt, "received HTTP response");
        Ok(DeliveryResponse { status, body, headers })
    })
    .await
}
