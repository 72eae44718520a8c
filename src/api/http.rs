//! HTTP Transport
//!
//! JSON over reqwest (fetch on wasm32). Non-2xx responses become
//! `ApiError::Status` carrying the body's `message`, if it has one.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{ApiError, ApiResult};

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Client for the invoice/cheque REST backend
#[derive(Clone, Debug)]
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub(super) fn client(&self) -> &Client {
        &self.client
    }

    /// `{base}/{collection}` or `{base}/{collection}/{key}`, key percent-encoded
    pub(super) fn url(&self, collection: &str, key: Option<&str>) -> String {
        match key {
            Some(key) => format!(
                "{}/{}/{}",
                self.base_url,
                collection,
                utf8_percent_encode(key, SEGMENT)
            ),
            None => format!("{}/{}", self.base_url, collection),
        }
    }
}

/// Send a request and fail on a non-success status
pub(super) async fn send(request: RequestBuilder) -> ApiResult<String> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        log::warn!(target: "api", "server responded {}", status.as_u16());
        return Err(ApiError::Status {
            status: status.as_u16(),
            message: error_message(&body),
        });
    }
    Ok(body)
}

pub(super) async fn fetch_json<T: DeserializeOwned>(request: RequestBuilder) -> ApiResult<T> {
    let body = send(request).await?;
    Ok(serde_json::from_str(&body)?)
}

/// `message` field of a JSON error body; blank messages count as absent
pub(super) fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let api = HttpApi::new("http://localhost:5000/api/");
        assert_eq!(api.url("invoices", None), "http://localhost:5000/api/invoices");
    }

    #[test]
    fn test_url_encodes_key() {
        let api = HttpApi::new("http://localhost:5000/api");
        assert_eq!(
            api.url("invoices", Some("INV 001/A")),
            "http://localhost:5000/api/invoices/INV%20001%2FA"
        );
        assert_eq!(api.url("cheques", Some("65f0c1")), "http://localhost:5000/api/cheques/65f0c1");
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            error_message(r#"{"message":"Duplicate invoice number"}"#).as_deref(),
            Some("Duplicate invoice number")
        );
        assert_eq!(error_message(r#"{"message":""}"#), None);
        assert_eq!(error_message(r#"{"error":"nope"}"#), None);
        assert_eq!(error_message("<html>502</html>"), None);
    }
}
