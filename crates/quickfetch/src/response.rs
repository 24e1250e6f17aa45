//! Response types and content-type negotiated body decoding.

use std::collections::HashMap;

use bytes::Bytes;

/// A response payload decoded according to its declared content type.
///
/// The negotiation is a case-insensitive substring match on the
/// `content-type` header: `application/json` decodes as JSON, anything
/// containing `text` decodes as a UTF-8 string, and everything else (or a
/// missing content type) stays opaque bytes.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Json(serde_json::Value),
    Text(String),
    Bytes(Bytes),
}

impl Body {
    /// Decode `raw` using the declared content type.
    ///
    /// A malformed JSON body under an `application/json` content type is a
    /// hard failure; the raw serde error propagates to the caller without
    /// being rewrapped.
    pub(crate) fn decode(
        content_type: Option<&str>,
        raw: Bytes,
    ) -> Result<Self, serde_json::Error> {
        let content_type = content_type.map(str::to_ascii_lowercase).unwrap_or_default();
        if content_type.contains("application/json") {
            Ok(Self::Json(serde_json::from_slice(&raw)?))
        } else if content_type.contains("text") {
            Ok(Self::Text(String::from_utf8_lossy(&raw).into_owned()))
        } else {
            Ok(Self::Bytes(raw))
        }
    }

    /// Returns the JSON value if the body was negotiated as JSON.
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the text if the body was negotiated as text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the raw bytes if the body stayed opaque.
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Self::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Deserialize the body into a concrete type.
    pub fn json_as<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        match self {
            Self::Json(value) => serde_json::from_value(value.clone()),
            Self::Text(text) => serde_json::from_str(text),
            Self::Bytes(bytes) => serde_json::from_slice(bytes),
        }
    }
}

/// Outcome of a successful exchange, owned by the caller after return.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code (guaranteed 2xx).
    pub status: u16,

    /// Canonical reason phrase for the status.
    pub status_text: String,

    /// Response headers with lowercased names.
    pub headers: HashMap<String, String>,

    /// Decoded response payload.
    pub body: Body,
}

impl Response {
    /// Check if status is success (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get a header value (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        let name_lower = name.to_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| k.to_lowercase() == name_lower)
            .map(|(_, v)| v.as_str())
    }

    /// Get the content type header value.
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Deserialize the decoded body into a concrete type.
    pub fn json_as<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        self.body.json_as()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_json_content_type() {
        let body = Body::decode(
            Some("application/json; charset=utf-8"),
            Bytes::from_static(br#"{"name": "Alice"}"#),
        )
        .unwrap();
        assert_eq!(body, Body::Json(json!({"name": "Alice"})));
    }

    #[test]
    fn test_decode_content_type_is_case_insensitive() {
        let body = Body::decode(
            Some("Application/JSON"),
            Bytes::from_static(b"{}"),
        )
        .unwrap();
        assert_eq!(body, Body::Json(json!({})));
    }

    #[test]
    fn test_decode_text_content_type() {
        let body = Body::decode(Some("text/plain"), Bytes::from_static(b"hello")).unwrap();
        assert_eq!(body, Body::Text("hello".to_string()));
    }

    #[test]
    fn test_decode_binary_content_type() {
        let raw = Bytes::from_static(&[0x00, 0xff, 0x10]);
        let body = Body::decode(Some("application/octet-stream"), raw.clone()).unwrap();
        assert_eq!(body, Body::Bytes(raw));
    }

    #[test]
    fn test_decode_missing_content_type_stays_opaque() {
        let raw = Bytes::from_static(b"whatever");
        let body = Body::decode(None, raw.clone()).unwrap();
        assert_eq!(body, Body::Bytes(raw));
    }

    #[test]
    fn test_decode_malformed_json_fails() {
        let result = Body::decode(
            Some("application/json"),
            Bytes::from_static(b"Invalid JSON"),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_json_as_typed_decode() {
        #[derive(serde::Deserialize)]
        struct Payload {
            data: String,
        }

        let body = Body::Json(json!({"data": "test"}));
        let payload: Payload = body.json_as().unwrap();
        assert_eq!(payload.data, "test");
    }

    #[test]
    fn test_response_header_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "text/plain".to_string());
        let response = Response {
            status: 200,
            status_text: "OK".to_string(),
            headers,
            body: Body::Text("hi".to_string()),
        };

        assert_eq!(response.header("Content-Type"), Some("text/plain"));
        assert_eq!(response.header("CONTENT-TYPE"), Some("text/plain"));
        assert_eq!(response.content_type(), Some("text/plain"));
        assert!(response.is_success());
    }
}
