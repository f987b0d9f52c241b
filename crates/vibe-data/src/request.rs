//! Outbound request builder.

use serde::Serialize;
use vibe_core::Method;

use crate::FetchError;

/// A request to the upstream API, ready to hand to a `Transport`.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestBuilder {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl RequestBuilder {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Add a header, replacing any earlier value for the same name.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        self.headers.retain(|(k, _)| !k.eq_ignore_ascii_case(&key));
        self.headers.push((key, value.into()));
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: Serialize>(self, value: &T) -> Result<Self, FetchError> {
        let body = serde_json::to_vec(value).map_err(|e| FetchError::Request(e.to_string()))?;
        let mut builder = self.header("Content-Type", "application/json");
        builder.body = Some(body);
        Ok(builder)
    }

    /// Set the Accept header.
    pub fn accept(self, content_type: impl Into<String>) -> Self {
        self.header("Accept", content_type)
    }

    /// Get a header value, case-insensitively.
    pub fn header_value(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_sets_body_and_content_type() {
        let req = RequestBuilder::new(Method::Post, "https://dummyjson.com/products/add")
            .json(&serde_json::json!({"title": "Lamp"}))
            .unwrap();
        assert_eq!(req.header_value("content-type"), Some("application/json"));
        assert_eq!(req.body.as_deref(), Some(br#"{"title":"Lamp"}"#.as_slice()));
    }

    #[test]
    fn test_header_replaces() {
        let req = RequestBuilder::new(Method::Get, "/x")
            .accept("text/html")
            .header("accept", "application/json");
        assert_eq!(req.headers.len(), 1);
        assert_eq!(req.header_value("Accept"), Some("application/json"));
    }
}
