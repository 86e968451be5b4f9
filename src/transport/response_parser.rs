//! Response decoding.

use reqwest::header::{HeaderMap, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::HttpResponse;
use crate::errors::{DiscoveryError, DiscoveryResult};

/// The outcome of a successful call.
///
/// `result` is `None` when the service answered with an empty body or a
/// body that is not JSON.
#[derive(Debug, Clone)]
pub struct DetailedResponse<T> {
    /// HTTP status code.
    pub status_code: u16,
    /// Response headers.
    pub headers: HeaderMap,
    /// Decoded body.
    pub result: Option<T>,
}

impl<T> DetailedResponse<T> {
    /// Returns the decoded body.
    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    /// Consumes the response and returns the decoded body.
    pub fn into_result(self) -> Option<T> {
        self.result
    }

    /// Returns a header value as a string.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Turns raw responses into typed results or errors.
pub struct ResponseParser;

impl ResponseParser {
    /// Decodes a response body into `T`.
    pub fn parse<T: DeserializeOwned>(response: HttpResponse) -> DiscoveryResult<DetailedResponse<T>> {
        if !response.status.is_success() {
            return Err(Self::map_error(&response));
        }

        let status_code = response.status.as_u16();
        let has_body = !response.body.iter().all(u8::is_ascii_whitespace);

        let result = if has_body && is_json_content_type(&response.headers) {
            match serde_json::from_slice::<T>(&response.body) {
                Ok(value) => Some(value),
                Err(e) => {
                    return Err(DiscoveryError::Deserialization {
                        message: e.to_string(),
                        status: status_code,
                        headers: response.headers,
                        body: response.body,
                    })
                }
            }
        } else {
            None
        };

        Ok(DetailedResponse {
            status_code,
            headers: response.headers,
            result,
        })
    }

    /// Accepts a response whose body is ignored.
    pub fn parse_empty(response: HttpResponse) -> DiscoveryResult<DetailedResponse<()>> {
        if !response.status.is_success() {
            return Err(Self::map_error(&response));
        }

        Ok(DetailedResponse {
            status_code: response.status.as_u16(),
            headers: response.headers,
            result: None,
        })
    }

    /// Maps a non-2xx response to an API error.
    pub fn map_error(response: &HttpResponse) -> DiscoveryError {
        let status = response.status.as_u16();
        let parsed: Option<Value> = serde_json::from_slice(&response.body).ok();

        let message = parsed
            .as_ref()
            .and_then(extract_error_message)
            .unwrap_or_else(|| {
                response
                    .status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            });
        let code = parsed.as_ref().and_then(|body| match body.get("code") {
            Some(Value::String(code)) => Some(code.clone()),
            Some(Value::Number(code)) => Some(code.to_string()),
            _ => None,
        });

        DiscoveryError::Api {
            status,
            message,
            code,
            headers: response.headers.clone(),
        }
    }
}

/// Looks for an error message in the shapes the service uses.
fn extract_error_message(body: &Value) -> Option<String> {
    ["error", "message", "errorMessage"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
        .or_else(|| {
            body.get("errors")
                .and_then(|errors| errors.get(0))
                .and_then(|first| first.get("message"))
                .and_then(Value::as_str)
        })
        .map(str::to_string)
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<mime::Mime>().ok())
        .map(|m| m.subtype() == mime::JSON || m.suffix() == Some(mime::JSON))
        .unwrap_or(false)
}
