//! bearer token 検証 → AuthCtx を extensions に入れる
//!
//! - `Authorization` を一度だけ読み、`AuthGate` に判定を委ねる
//! - Rejected: ApiError (401 + JSON) を返し、後続 handler は実行しない
//! - Authenticated: claims を `AuthCtx` として extensions に格納して next へ

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::AuthCtx;
use crate::error::ApiError;
use crate::services::auth::{Outcome, RejectionReason};
use crate::state::AppState;

/// `/api/v1/*` に認証を掛けるための middleware を適用する。
///
/// 例：
/// ```ignore
/// let v1 = api::v1::routes(state.clone());
/// app = app.nest("/api/v1", v1);
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.layer(middleware::from_fn_with_state(state, access_middleware))
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let outcome = match authorization(req.headers()) {
        Ok(value) => state.gate.evaluate(value),
        Err(reason) => Outcome::Rejected(ApiError::from(reason)),
    };

    match outcome {
        Outcome::Authenticated(claims) => {
            tracing::debug!(
                sub = claims.get("sub").and_then(|v| v.as_str()),
                "bearer token accepted"
            );

            // middleware → extractor への受け渡し
            req.extensions_mut().insert(AuthCtx::new(claims));
            Ok(next.run(req).await)
        }
        Outcome::Rejected(err) => {
            tracing::warn!(
                method = %req.method(),
                path = %req.uri().path(),
                reason = err.message,
                "request rejected by auth gate"
            );
            Err(err)
        }
    }
}

// Non-visible-ASCII header bytes can't be a `Bearer ` credential.
fn authorization(headers: &HeaderMap) -> Result<Option<&str>, RejectionReason> {
    headers
        .get(header::AUTHORIZATION)
        .map(|v| v.to_str().map_err(|_| RejectionReason::MalformedScheme))
        .transpose()
}
