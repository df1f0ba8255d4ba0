//! Single-shot webhook delivery.
//!
//! One blocking POST, one fully drained response body. The HTTP status is
//! not interpreted: the raw body text is returned as-is and response-code
//! semantics stay with the receiving service.

use reqwest::blocking::Client;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use std::time::Duration;
use tracing::debug;

use crate::error::{NotifyError, NotifyResult};
use crate::types::WebhookEndpoint;

/// Bound on the whole request/response exchange.
pub const DELIVERY_TIMEOUT_SECONDS: u64 = 30;

/// POST `body` to the endpoint as `application/json` and return the full
/// response body text.
///
/// Fails with [`NotifyError::Request`] when the request cannot be
/// dispatched (DNS, connect, TLS, timeout) and [`NotifyError::ResponseRead`]
/// when the body cannot be fully read. `text()` consumes the response, so
/// the connection is released on every path.
pub fn deliver(endpoint: &WebhookEndpoint, body: Vec<u8>) -> NotifyResult<String> {
    let client = Client::builder()
        .timeout(Duration::from_secs(DELIVERY_TIMEOUT_SECONDS))
        .build()
        .map_err(NotifyError::Request)?;

    debug!(endpoint = %endpoint, bytes = body.len(), "dispatching card notification");

    let response = client
        .post(endpoint.as_str())
        .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
        .body(body)
        .send()
        .map_err(NotifyError::Request)?;

    response.text().map_err(NotifyError::ResponseRead)
}
