//! Request and Response types for kensho-core

use serde::{Deserialize, Serialize};
use std::fmt;

/// NewType pattern for Request ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(String);

impl RequestId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Free-form user text sent to a processor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    pub id: RequestId,
    pub message: String,
}

/// Processor output: printable text plus an optional structured payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    pub request_id: RequestId,
    pub message: String,
    pub metadata: Option<ResponseMetadata>,
}

/// Metadata for response details
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ResponseMetadata {
    /// Structured result, e.g. a validated agent output
    pub ext: serde_json::Value,
}

impl Request {
    /// Create a simple request with just a message
    pub fn simple(message: impl Into<String>) -> Self {
        Self {
            id: RequestId::new(),
            message: message.into(),
        }
    }
}

impl Response {
    /// Create a simple response
    pub fn simple(request_id: RequestId, message: impl Into<String>) -> Self {
        Self {
            request_id,
            message: message.into(),
            metadata: None,
        }
    }

    /// Create a response carrying a structured payload next to its text
    pub fn structured(
        request_id: RequestId,
        message: impl Into<String>,
        ext: serde_json::Value,
    ) -> Self {
        Self {
            request_id,
            message: message.into(),
            metadata: Some(ResponseMetadata { ext }),
        }
    }

    /// Structured payload, if any
    pub fn ext(&self) -> Option<&serde_json::Value> {
        self.metadata.as_ref().map(|m| &m.ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_structured_response_exposes_ext() {
        let request = Request::simple("balance?");
        let response = Response::structured(request.id.clone(), "ok", json!({"risk": 1}));

        assert_eq!(response.request_id, request.id);
        assert_eq!(response.ext(), Some(&json!({"risk": 1})));
    }

    #[test]
    fn test_simple_response_has_no_ext() {
        let response = Response::simple(RequestId::from_string("r-1"), "hi");
        assert!(response.ext().is_none());
        assert_eq!(response.request_id.as_str(), "r-1");
    }
}
