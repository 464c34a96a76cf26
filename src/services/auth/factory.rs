/// Factory: build `AuthGate` from application `Config`.
use jsonwebtoken::Algorithm;

use crate::config::Config;
use crate::services::auth::{AuthGate, gate::DEFAULT_LEEWAY_SECONDS};

pub fn build_auth_gate(config: &Config) -> AuthGate {
    let secret = config.signing_secret.clone();

    if config.algorithm == Algorithm::HS256 && config.leeway_seconds == DEFAULT_LEEWAY_SECONDS {
        return AuthGate::new(config.strict_signature, secret);
    }

    AuthGate::with_options(
        config.strict_signature,
        secret,
        config.algorithm,
        config.leeway_seconds,
    )
}
