/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - v1 配下の route はすべて bearer gate の後ろ
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::me::me;
use crate::middleware::auth::access;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let router = Router::new().route("/me", get(me));

    access::apply(router, state)
}
