//! Narrow execution seam for all remote calls.
//!
//! Requests are described fluently with reqwest's builder and handed to one
//! of the two functions here. Non-success statuses become
//! [`SyncError::Api`] with the response body kept verbatim, so upstream
//! error payloads land in the log unchanged.

use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::{Res, error::SyncError};

/// Builds a `Basic base64(<client_id>:<client_secret>)` header value as the
/// token endpoints require it.
pub fn basic_auth(client_id: &str, client_secret: &str) -> String {
    let credentials = STANDARD.encode(format!("{}:{}", client_id, client_secret));
    format!("Basic {}", credentials)
}

/// Sends the request and returns the response body as text.
pub async fn execute(request: RequestBuilder) -> Res<String> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(SyncError::Api {
            status: status.as_u16(),
            body,
        });
    }

    Ok(body)
}

/// Sends the request and deserializes the response body as JSON.
pub async fn execute_json<T: DeserializeOwned>(request: RequestBuilder) -> Res<T> {
    let body = execute(request).await?;
    Ok(serde_json::from_str(&body)?)
}
