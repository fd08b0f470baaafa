//! Backend Command Wrappers
//!
//! Frontend bindings to the HTTP API, organized by domain.

mod employee;
mod task;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::models::ErrorBody;

// Re-export all public items
pub use employee::*;
pub use task::*;

/// Failure of a backend call
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClientError {
    /// The server answered with an error body
    #[error("{message}")]
    Api { kind: String, status: u16, message: String },
    /// The request never got an answer
    #[error("Network error: {0}")]
    Network(String),
    /// The answer was not the expected JSON
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Network(err.to_string())
    }
}

/// Origin the page was served from; the API lives on the same host
fn base_url() -> String {
    web_sys::window()
        .and_then(|win| win.location().origin().ok())
        .unwrap_or_default()
}

fn url(path: &str) -> String {
    format!("{}{}", base_url(), path)
}

fn client() -> Client {
    Client::new()
}

/// Build a `ClientError` from a non-2xx answer
pub(crate) fn error_from_body(status: u16, text: &str) -> ClientError {
    match serde_json::from_str::<ErrorBody>(text) {
        Ok(body) => ClientError::Api {
            kind: body.kind,
            status: body.status,
            message: body.message,
        },
        Err(_) => ClientError::Api {
            kind: "Unknown".to_string(),
            status,
            message: if text.trim().is_empty() {
                format!("Request failed with status {}", status)
            } else {
                text.to_string()
            },
        },
    }
}

async fn check_status(resp: Response) -> Result<Response, ClientError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status().as_u16();
    let text = resp.text().await?;
    web_sys::console::error_1(&format!("[API] {} -> {}", status, text).into());
    Err(error_from_body(status, &text))
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
    let resp = check_status(resp).await?;
    resp.json::<T>()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}
