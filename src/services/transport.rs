use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Serialize;
use tracing::{error, info};

use crate::error::TransportError;
use crate::model::descriptor::RequestDescriptor;

#[derive(Debug, Serialize)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

pub fn build_client(timeout: Duration) -> Result<Client, TransportError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(TransportError::Client)
}

/// Executes `req` once against `endpoint`. Signing, retries and endpoint
/// resolution belong to the caller.
pub fn dispatch(
    client: &Client,
    endpoint: &str,
    req: &RequestDescriptor,
) -> Result<TransportResponse, TransportError> {
    let endpoint = endpoint.trim();
    if endpoint.is_empty() {
        return Err(TransportError::MissingEndpoint);
    }

    let url = join_url(endpoint, &req.path);
    info!("{} {} ({} bytes)", req.method, url, req.body.len());

    let resp = client
        .request(req.method.clone(), &url)
        .query(&req.query)
        .headers(req.headers.clone())
        .body(req.body.clone())
        .send()?;

    let status = resp.status();
    let text = resp.text()?;

    if !status.is_success() {
        let message = extract_error_message(status, &text);
        error!("request to {} failed: HTTP {}: {}", url, status.as_u16(), message);
        return Err(TransportError::Status {
            status: status.as_u16(),
            message,
        });
    }

    Ok(TransportResponse {
        status: status.as_u16(),
        body: text,
    })
}

fn join_url(endpoint: &str, path: &str) -> String {
    format!(
        "{}/{}",
        endpoint.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Pulls a readable message out of a JSON error body:
/// `{"__type": "...#ValidationException", "message": "..."}`.
fn extract_error_message(status: StatusCode, body_text: &str) -> String {
    if let Ok(v) = serde_json::from_str::<serde_json::Value>(body_text) {
        let kind = v
            .get("__type")
            .and_then(|t| t.as_str())
            .map(|t| t.rsplit('#').next().unwrap_or(t));
        let msg = v
            .get("message")
            .or_else(|| v.get("Message"))
            .and_then(|m| m.as_str());

        match (kind, msg) {
            (Some(k), Some(m)) => return format!("{k}: {m}"),
            (None, Some(m)) => return m.to_string(),
            (Some(k), None) => return k.to_string(),
            (None, None) => {}
        }
    }

    let trimmed = body_text.trim();
    if trimmed.is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("empty response body")
            .to_string();
    }

    // Cap raw bodies on a char boundary.
    match trimmed.char_indices().nth(400) {
        Some((cut, _)) => format!("{}...", &trimmed[..cut]),
        None => trimmed.to_string(),
    }
}
