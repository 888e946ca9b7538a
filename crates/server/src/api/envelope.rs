//! Standard response envelope shared by all API handlers.
//!
//! Successful responses are wrapped as `{success, data, message,
//! status_code}`; failures as `{success: false, error, errors?,
//! status_code}` with optional field-level detail.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Standard success envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    pub message: String,
    pub status_code: u16,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
            message: "success".to_string(),
            status_code: StatusCode::OK.as_u16(),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::OK);
        (status, Json(self)).into_response()
    }
}

/// Detailed error information.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub message: String,
}

/// Standard error envelope.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub success: bool,
    pub error: ErrorDetail,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorDetail>,
    pub status_code: u16,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &str, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: ErrorDetail {
                field: None,
                code: Some(code.to_string()),
                message: message.into(),
            },
            errors: Vec::new(),
            status_code: status.as_u16(),
        }
    }

    /// 422 with the offending field named in the detail list.
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: ErrorDetail {
                field: None,
                code: None,
                message: "Validation error".to_string(),
            },
            errors: vec![ErrorDetail {
                field: Some(field.to_string()),
                code: None,
                message: message.into(),
            }],
            status_code: StatusCode::UNPROCESSABLE_ENTITY.as_u16(),
        }
    }

    /// 500 with a human-readable message and no internal detail.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_server_error",
            message,
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
