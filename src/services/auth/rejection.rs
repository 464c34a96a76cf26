/*
 * Responsibility
 * - 認証失敗理由の分類 (RejectionReason)
 * - 各理由 → wire 上の message / status の対応をここに固定する
 */
use std::{error::Error, fmt};

use axum::http::StatusCode;

/// Every way the gate can refuse a request. All of them are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionReason {
    MissingCredential,
    MalformedScheme,
    EmptyToken,
    ExtraSegments,
    MalformedToken,
    InvalidSignature,
    TokenExpired,
    TokenNotYetValid,
}

impl RejectionReason {
    /// Wire text; also the `Display` output.
    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingCredential => "API token required",
            Self::MalformedScheme => "Authorization header must start with Bearer",
            Self::EmptyToken => "Token not found",
            Self::ExtraSegments => "Authorization header must be Bearer and token",
            Self::MalformedToken => "Token is malformed",
            Self::InvalidSignature => "signature is invalid",
            Self::TokenExpired => "Token is expired",
            Self::TokenNotYetValid => "Token is not valid yet",
        }
    }

    // Authentication failures are client errors; there is no 5xx path.
    pub fn status(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Error for RejectionReason {}
