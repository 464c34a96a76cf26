/*
 * Responsibility
 * - Authorization ヘッダ値 → token 候補の抽出 (`Bearer <token>` 形式の強制)
 * - 判定は順序付きの (predicate, reason) 表で行い、最初に当たったものを返す
 * - 純粋関数のみ。署名検証は token.rs の責務
 */
use super::RejectionReason;

const SCHEME_PREFIX: &str = "Bearer ";

type Check = (fn(Option<&str>) -> bool, RejectionReason);

// Order is significant: "test" must be MalformedScheme, never EmptyToken.
const CHECKS: [Check; 4] = [
    (is_missing, RejectionReason::MissingCredential),
    (lacks_bearer_scheme, RejectionReason::MalformedScheme),
    (has_empty_token, RejectionReason::EmptyToken),
    (has_extra_segments, RejectionReason::ExtraSegments),
];

/// The single token segment found after `Bearer `, not yet verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenCandidate<'a>(&'a str);

impl<'a> TokenCandidate<'a> {
    pub fn as_str(&self) -> &'a str {
        self.0
    }
}

/// Parses a raw `Authorization` header value into a token candidate.
pub fn extract(header: Option<&str>) -> Result<TokenCandidate<'_>, RejectionReason> {
    if let Some((_, reason)) = CHECKS.iter().find(|(check, _)| check(header)) {
        return Err(*reason);
    }

    remainder(header)
        .and_then(|rest| rest.split_whitespace().next())
        .map(TokenCandidate)
        .ok_or(RejectionReason::MalformedScheme)
}

fn remainder(header: Option<&str>) -> Option<&str> {
    header.and_then(|v| v.strip_prefix(SCHEME_PREFIX))
}

fn is_missing(header: Option<&str>) -> bool {
    header.is_none_or(str::is_empty)
}

fn lacks_bearer_scheme(header: Option<&str>) -> bool {
    header.is_some_and(|v| !v.starts_with(SCHEME_PREFIX))
}

fn has_empty_token(header: Option<&str>) -> bool {
    remainder(header).is_some_and(|rest| rest.trim().is_empty())
}

fn has_extra_segments(header: Option<&str>) -> bool {
    remainder(header).is_some_and(|rest| rest.split_whitespace().count() != 1)
}
