/*
 * Responsibility
 * - 抽出 (bearer) → 検証 (token) を一本の判定にまとめる
 *   Start → ExtractHeader → {Rejected | HasCandidate} → Validate → {Rejected | Authenticated}
 * - リクエスト間で状態を持たない。clone は Arc の共有のみ
 */
use std::sync::Arc;

use jsonwebtoken::Algorithm;

use super::{Claims, RejectionReason, SigningSecret, TokenValidator, bearer};
use crate::error::ApiError;

pub const DEFAULT_LEEWAY_SECONDS: u64 = 60;

/// The decision for one request. There is no third state.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Authenticated(Claims),
    Rejected(ApiError),
}

impl From<Result<Claims, RejectionReason>> for Outcome {
    fn from(result: Result<Claims, RejectionReason>) -> Self {
        match result {
            Ok(claims) => Self::Authenticated(claims),
            Err(reason) => Self::Rejected(ApiError::from(reason)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AuthGate {
    validator: Arc<TokenValidator>,
}

impl AuthGate {
    /// HS256 gate bound to one secret and one strictness mode.
    pub fn new(strict_signature: bool, secret: SigningSecret) -> Self {
        Self::with_options(
            strict_signature,
            secret,
            Algorithm::HS256,
            DEFAULT_LEEWAY_SECONDS,
        )
    }

    pub fn with_options(
        strict_signature: bool,
        secret: SigningSecret,
        algorithm: Algorithm,
        leeway_seconds: u64,
    ) -> Self {
        let validator = TokenValidator::new(&secret, algorithm, leeway_seconds, strict_signature);
        if validator.is_strict() {
            tracing::warn!(
                ?algorithm,
                "auth gate in strict signature (canary) mode: all tokens under the configured secret will be rejected"
            );
        }

        Self {
            validator: Arc::new(validator),
        }
    }

    /// Runs both stages against a raw `Authorization` header value.
    pub fn authenticate(&self, header: Option<&str>) -> Result<Claims, RejectionReason> {
        let candidate = bearer::extract(header)?;
        self.validator.validate(candidate)
    }

    pub fn evaluate(&self, header: Option<&str>) -> Outcome {
        self.authenticate(header).into()
    }
}
