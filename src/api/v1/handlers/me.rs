/*
 * Responsibility
 * - GET /api/v1/me
 * - gate が載せた claims をそのまま返す (gate の後段 handler の例)
 */
use axum::Json;

use crate::api::v1::extractors::AuthCtxExtractor;
use crate::services::auth::Claims;

pub async fn me(AuthCtxExtractor(ctx): AuthCtxExtractor) -> Json<Claims> {
    tracing::debug!(sub = ctx.subject(), "serving /me");
    Json(ctx.claims)
}
