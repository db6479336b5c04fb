// src/response.rs
//! Transport-agnostic envelope for API payloads.
//!
//! [`ApiResponse`] standardizes the shape services hand to their HTTP layer:
//! a success flag, a status code, optional data, optional error details and
//! free-form metadata. Nothing here depends on a web framework; the envelope
//! is plain data that serializes the same way everywhere.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A validation failure tied to a single input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

/// Pager bookkeeping embedded under the `pagination` metadata key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub current_page: u32,
    pub page_size: u32,
    pub total_items: u32,
    pub total_pages: u32,
}

impl PageMeta {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

impl From<PageMeta> for Value {
    fn from(meta: PageMeta) -> Self {
        serde_json::json!({
            "current_page": meta.current_page,
            "page_size": meta.page_size,
            "total_items": meta.total_items,
            "total_pages": meta.total_pages,
            "has_previous": meta.has_previous(),
            "has_next": meta.has_next(),
        })
    }
}

/// Standard response envelope for API endpoints.
///
/// Build one with [`ApiResponse::success`], [`ApiResponse::error`] or
/// [`ApiResponse::validation_failure`], then chain the `with_*` builders
/// for tracing and metadata. The status code travels as its numeric value
/// on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(with = "status_code")]
    pub status: StatusCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validation_errors: Vec<FieldError>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, Value>,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Successful response with status 200.
    pub fn success(data: T) -> Self {
        Self::success_with_status(data, StatusCode::OK)
    }

    pub fn success_with_status(data: T, status: StatusCode) -> Self {
        Self {
            success: true,
            status,
            data: Some(data),
            error_message: None,
            validation_errors: Vec::new(),
            metadata: BTreeMap::new(),
            timestamp: Utc::now(),
            request_id: None,
        }
    }

    /// Failed response with status 400.
    pub fn error(message: impl Into<String>) -> Self {
        Self::error_with_status(message, StatusCode::BAD_REQUEST)
    }

    pub fn error_with_status(message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            success: false,
            status,
            data: None,
            error_message: Some(message.into()),
            validation_errors: Vec::new(),
            metadata: BTreeMap::new(),
            timestamp: Utc::now(),
            request_id: None,
        }
    }

    /// Failed response carrying per-field validation errors, status 400.
    pub fn validation_failure(errors: Vec<FieldError>) -> Self {
        let mut response = Self::error("validation failed");
        response.validation_errors = errors;
        response
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Stores pager bookkeeping under the `pagination` metadata key.
    pub fn with_page_meta(mut self, meta: PageMeta) -> Self {
        self.metadata.insert("pagination".to_owned(), meta.into());
        self
    }
}

mod status_code {
    use http::StatusCode;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(status.as_u16())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<StatusCode, D::Error> {
        let code = u16::deserialize(deserializer)?;
        StatusCode::from_u16(code).map_err(D::Error::custom)
    }
}
