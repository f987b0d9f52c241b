//! Upstream response handling.

use serde::de::DeserializeOwned;

use crate::FetchError;

/// An HTTP response from the upstream API.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16, headers: Vec<(String, String)>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// A JSON response with the given status.
    pub fn json_body(status: u16, value: &serde_json::Value) -> Self {
        Self::new(
            status,
            vec![("Content-Type".to_string(), "application/json".to_string())],
            value.to_string().into_bytes(),
        )
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Check if the response was a server error (5xx status).
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }

    /// Get the response body as text.
    pub fn text(&self) -> Result<String, FetchError> {
        String::from_utf8(self.body.clone())
            .map_err(|e| FetchError::Deserialization(format!("Invalid UTF-8: {}", e)))
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Get a header value, case-insensitively.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Convert to a Result, returning an error for non-2xx status codes.
    ///
    /// dummyjson error bodies look like `{"message": "..."}`; that message is
    /// kept when present, otherwise the raw text.
    pub fn error_for_status(self, url: &str) -> Result<Self, FetchError> {
        if self.is_success() {
            return Ok(self);
        }

        let message = serde_json::from_slice::<serde_json::Value>(&self.body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
            .or_else(|| self.text().ok().filter(|t| !t.trim().is_empty()));

        Err(FetchError::Http {
            status: self.status,
            url: url.to_string(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_response(status: u16, body: &[u8]) -> Response {
        Response::new(status, Vec::new(), body.to_vec())
    }

    #[test]
    fn test_response_is_success() {
        assert!(make_response(200, b"").is_success());
        assert!(make_response(201, b"").is_success());
        assert!(!make_response(304, b"").is_success());
        assert!(!make_response(404, b"").is_success());
    }

    #[test]
    fn test_response_is_server_error() {
        assert!(make_response(500, b"").is_server_error());
        assert!(make_response(503, b"").is_server_error());
        assert!(!make_response(499, b"").is_server_error());
    }

    #[test]
    fn test_response_json() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Data {
            total: u32,
        }

        let resp = make_response(200, br#"{"total": 194}"#);
        assert_eq!(resp.json::<Data>().unwrap(), Data { total: 194 });
        assert!(make_response(200, b"<html>").json::<Data>().is_err());
    }

    #[test]
    fn test_response_header_case_insensitive() {
        let resp = Response::json_body(200, &serde_json::json!({}));
        assert_eq!(resp.header("content-type"), Some("application/json"));
        assert_eq!(resp.header("X-Missing"), None);
    }

    #[test]
    fn test_error_for_status_keeps_upstream_message() {
        let resp = make_response(404, br#"{"message":"Product with id '999' not found"}"#);
        let err = resp.error_for_status("https://dummyjson.com/products/999").unwrap_err();
        assert_eq!(
            err,
            FetchError::Http {
                status: 404,
                url: "https://dummyjson.com/products/999".to_string(),
                message: Some("Product with id '999' not found".to_string()),
            }
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn test_error_for_status_plain_text_and_empty() {
        let err = make_response(502, b"Bad Gateway").error_for_status("u").unwrap_err();
        assert_eq!(err.status(), Some(502));
        assert!(matches!(err, FetchError::Http { message: Some(ref m), .. } if m == "Bad Gateway"));

        let err = make_response(500, b"").error_for_status("u").unwrap_err();
        assert!(matches!(err, FetchError::Http { message: None, .. }));
    }

    #[test]
    fn test_error_for_status_success_passes_through() {
        assert!(make_response(200, b"ok").error_for_status("u").is_ok());
    }
}
