//! gate を通過したリクエストの claims を handler に渡す
//!
//! - `types`: `AuthCtx` (検証済み claims。中身の意味づけは handler 側)
//! - `core`: `AuthCtxExtractor` (extensions に無ければ 401 "API token required")

mod core;
mod types;

pub use core::AuthCtxExtractor;
pub use types::AuthCtx;
