/*
 * Responsibility
 * - 環境変数の読み込み (PORT, APP_ENV, AUTH_*, HTTP_* など)
 * - 設定値のバリデーション (不足・不正なら起動失敗)
 * - gate 自身は設定ソースを読まない。ここで読んだ値を構築時に渡す
 */
use std::net::SocketAddr;
use std::str::FromStr;

use jsonwebtoken::Algorithm;
use thiserror::Error;

use crate::services::auth::{
    SigningSecret, gate::DEFAULT_LEEWAY_SECONDS, token::MAX_LEEWAY_SECONDS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing configuration: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,

    pub signing_secret: SigningSecret,
    pub algorithm: Algorithm,
    // canary mode: verify against a key that is known not to match the secret
    pub strict_signature: bool,
    pub leeway_seconds: u64,

    pub request_timeout_seconds: u64,
    pub body_limit_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so tests don't touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => 3000,
        };

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = lookup("APP_ENV")
            .map(|v| AppEnv::parse(&v))
            .unwrap_or(AppEnv::Development);

        let secret = lookup("AUTH_SIGNING_SECRET")
            .ok_or(ConfigError::Missing("AUTH_SIGNING_SECRET"))?;
        if secret.is_empty() {
            return Err(ConfigError::Invalid("AUTH_SIGNING_SECRET"));
        }
        let signing_secret = SigningSecret::new(secret);

        let algorithm = match lookup("AUTH_ALGORITHM") {
            Some(raw) => parse_hmac_algorithm(raw.trim())?,
            None => Algorithm::HS256,
        };

        let strict_signature = match lookup("AUTH_STRICT_SIGNATURE") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid("AUTH_STRICT_SIGNATURE"))?,
            None => false,
        };

        let leeway_seconds = match lookup("AUTH_LEEWAY_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|v| *v <= MAX_LEEWAY_SECONDS)
                .ok_or(ConfigError::Invalid("AUTH_LEEWAY_SECONDS"))?,
            None => DEFAULT_LEEWAY_SECONDS,
        };

        let request_timeout_seconds = match lookup("HTTP_REQUEST_TIMEOUT_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|v| *v > 0)
                .ok_or(ConfigError::Invalid("HTTP_REQUEST_TIMEOUT_SECONDS"))?,
            None => 30,
        };

        let body_limit_bytes = match lookup("HTTP_BODY_LIMIT_BYTES") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::Invalid("HTTP_BODY_LIMIT_BYTES"))?,
            None => 1024 * 1024,
        };

        Ok(Self {
            addr,
            app_env,
            signing_secret,
            algorithm,
            strict_signature,
            leeway_seconds,
            request_timeout_seconds,
            body_limit_bytes,
        })
    }
}

// Only the HMAC family is meaningful for a shared secret.
fn parse_hmac_algorithm(raw: &str) -> Result<Algorithm, ConfigError> {
    match Algorithm::from_str(raw) {
        Ok(alg @ (Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512)) => Ok(alg),
        _ => Err(ConfigError::Invalid("AUTH_ALGORITHM")),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
