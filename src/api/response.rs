//! JSON envelope shared by every user endpoint.

use serde::Serialize;
use utoipa::ToSchema;

use crate::error::ErrorCode;

/// Response body: either `data`, or `error_code` with `error_message`.
///
/// Absent fields are omitted, so an empty envelope serializes as `{}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<i32>, example = 10003)]
    pub error_code: Option<ErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error_code: None,
            error_message: None,
        }
    }

    pub fn empty() -> Self {
        Self {
            data: None,
            error_code: None,
            error_message: None,
        }
    }

    pub fn failure(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            data: None,
            error_code: Some(code),
            error_message: Some(message.into()),
        }
    }
}
