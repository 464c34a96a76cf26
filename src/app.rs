/*
 * Responsibility
 * - tracing / panic hook の初期化
 * - Config読み込み → AuthGate 生成 → Router 組み立て
 * - Middleware の適用 (HTTP 共通層 / Bearer gate)
 * - axum::serve() で起動
 */
use std::{panic, process};

use anyhow::Result;
use axum::{Router, routing::get};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api;
use crate::api::v1::handlers::health::health;
use crate::config::Config;
use crate::error::AppError;
use crate::middleware;
use crate::middleware::http::HttpSettings;
use crate::services::auth::build_auth_gate;
use crate::state::AppState;

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,bearer_gate=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        tracing::error!(?info, "panic");

        // development: crash immediately. production: default hook, keep serving.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env().map_err(AppError::from)?;

    init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        algorithm = ?config.algorithm,
        strict_signature = config.strict_signature,
        "starting bearer gate in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = AppState::new(build_auth_gate(&config));
    let app = middleware::http::apply(build_router(state), HttpSettings::from_config(&config));

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .map_err(AppError::Bind)?;
    axum::serve(listener, app).await.map_err(AppError::Serve)?;

    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api::v1::routes(state.clone()))
        .with_state(state)
}
