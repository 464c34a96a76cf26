/*
 * Responsibility
 * - wire 上の拒否 payload (ApiError) と IntoResponse 実装
 *   body は常に {"code":<int>,"message":"<string>"} (code → message の順)
 * - 起動時エラー (AppError): 設定不足 / bind 失敗など
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::config::ConfigError;
use crate::services::auth::RejectionReason;

/// Rejection payload. Field order is part of the contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiError {
    pub code: u16,
    pub message: &'static str,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::UNAUTHORIZED)
    }
}

impl From<RejectionReason> for ApiError {
    fn from(reason: RejectionReason) -> Self {
        Self {
            code: reason.status().as_u16(),
            message: reason.message(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

impl IntoResponse for RejectionReason {
    fn into_response(self) -> Response {
        ApiError::from(self).into_response()
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to bind listener: {0}")]
    Bind(#[source] std::io::Error),
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_code_then_message() {
        let body = serde_json::to_string(&ApiError::from(RejectionReason::MissingCredential)).unwrap();
        assert_eq!(body, r#"{"code":401,"message":"API token required"}"#);
    }

    #[test]
    fn identical_failures_serialize_identically() {
        let a = serde_json::to_vec(&ApiError::from(RejectionReason::InvalidSignature)).unwrap();
        let b = serde_json::to_vec(&ApiError::from(RejectionReason::InvalidSignature)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn response_status_follows_code() {
        let response = RejectionReason::ExtraSegments.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
