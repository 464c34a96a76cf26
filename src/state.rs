/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - ex: gate: AuthGate (secret は構築時に束縛済み、読み取り専用)
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use crate::services::auth::AuthGate;

#[derive(Clone, Debug)]
pub struct AppState {
    pub gate: AuthGate,
}

impl AppState {
    pub fn new(gate: AuthGate) -> Self {
        Self { gate }
    }
}
