//! REST API Client
//!
//! Typed wrappers over the shopping-list backend, organized by resource.
//! Every operation is a single fetch round trip; any non-2xx status,
//! network failure, or body-decoding failure is normalized into
//! [`RemoteError`]. Retrying, alerting, or ignoring is the caller's call.

pub mod items;
pub mod stores;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

/// The single error kind surfaced by any failed backend call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RemoteError {
    pub message: String,
}

impl RemoteError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<String> for RemoteError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

/// Base URL of the backend, resolved at build time.
/// Defaults to the local development server when unset.
pub fn api_base_url() -> &'static str {
    option_env!("SHOPLIST_API_URL").unwrap_or("http://localhost:8000")
}

fn js_error(context: &str, err: JsValue) -> RemoteError {
    RemoteError::new(format!("{context}: {err:?}"))
}

/// Maps a finished HTTP exchange onto the client contract: non-success
/// statuses surface the status text, success bodies must decode as JSON.
fn decode_response<T: DeserializeOwned>(
    ok: bool,
    status_text: &str,
    body: &str,
) -> Result<T, RemoteError> {
    if !ok {
        return Err(RemoteError::new(format!("API error: {status_text}")));
    }
    serde_json::from_str(body).map_err(|e| RemoteError::new(format!("malformed response: {e}")))
}

/// One request/response round trip against the backend.
async fn request<T: DeserializeOwned>(
    method: &str,
    path: &str,
    body: Option<String>,
) -> Result<T, RemoteError> {
    let init = RequestInit::new();
    init.set_method(method);

    let headers = Headers::new().map_err(|e| js_error("headers", e))?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|e| js_error("headers", e))?;
    init.set_headers(&headers);

    if let Some(body) = body {
        init.set_body(&JsValue::from_str(&body));
    }

    let url = format!("{}{}", api_base_url(), path);
    let request =
        Request::new_with_str_and_init(&url, &init).map_err(|e| js_error("request", e))?;

    let window = web_sys::window().ok_or_else(|| RemoteError::new("no window"))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| js_error("network request failed", e))?
        .dyn_into()
        .map_err(|e| js_error("network request failed", e))?;

    let text = JsFuture::from(response.text().map_err(|e| js_error("response body", e))?)
        .await
        .map_err(|e| js_error("response body", e))?
        .as_string()
        .unwrap_or_default();

    decode_response(response.ok(), &response.status_text(), &text)
}

async fn get<T: DeserializeOwned>(path: &str) -> Result<T, RemoteError> {
    request("GET", path, None).await
}

async fn post<T: DeserializeOwned, B: Serialize>(path: &str, body: &B) -> Result<T, RemoteError> {
    let body = serde_json::to_string(body)
        .map_err(|e| RemoteError::new(format!("encoding request body: {e}")))?;
    request("POST", path, Some(body)).await
}

async fn patch<T: DeserializeOwned, B: Serialize>(path: &str, body: &B) -> Result<T, RemoteError> {
    let body = serde_json::to_string(body)
        .map_err(|e| RemoteError::new(format!("encoding request body: {e}")))?;
    request("PATCH", path, Some(body)).await
}

async fn delete<T: DeserializeOwned>(path: &str) -> Result<T, RemoteError> {
    request("DELETE", path, None).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DeleteConfirmation, Store};

    #[test]
    fn non_success_status_surfaces_the_status_text() {
        let result: Result<Vec<Store>, RemoteError> =
            decode_response(false, "Not Found", r#"{"detail":"Store not found"}"#);
        let err = result.unwrap_err();
        assert_eq!(err.message, "API error: Not Found");
    }

    #[test]
    fn malformed_body_is_a_remote_error() {
        let result: Result<Vec<Store>, RemoteError> = decode_response(true, "OK", "<html>oops");
        assert!(result.unwrap_err().message.starts_with("malformed response"));
    }

    #[test]
    fn empty_list_decodes() {
        let stores: Vec<Store> = decode_response(true, "OK", "[]").unwrap();
        assert!(stores.is_empty());
    }

    #[test]
    fn delete_body_decodes_to_confirmation() {
        let confirmation: DeleteConfirmation =
            decode_response(true, "OK", r#"{"message":"Store deleted successfully"}"#).unwrap();
        assert_eq!(confirmation.message, "Store deleted successfully");
    }

    #[test]
    fn base_url_falls_back_to_local_dev() {
        assert!(api_base_url().starts_with("http"));
    }
}
