//! Offset/limit handling for list endpoints.

/// Page size used when the client does not send `limit`.
pub const DEFAULT_LIST_LIMIT: i64 = 10;

/// Upper bound on a single page.
pub const MAX_LIST_LIMIT: i64 = 100;

/// Clamp a user-provided limit into `0..=max`.
///
/// Zero is allowed and yields an empty page.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).clamp(0, max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
