//! User-facing error message rewriting
//!
//! Raw provider errors are technical and sometimes leak request detail.
//! Known failure families are mapped to fixed messages; anything
//! unrecognized is shown as-is.

/// Fixed message for API-key problems.
pub const API_KEY_MESSAGE: &str =
    "API key problem. Check GEMINI_API_KEY or the [ai.gemini] section of your config.";

/// Fixed message for rate limiting.
pub const RATE_LIMIT_MESSAGE: &str = "Rate limit reached. Wait a moment and try again.";

/// Fixed message for connectivity failures.
pub const NETWORK_MESSAGE: &str = "Network error. Check your connection and try again.";

/// Map a raw error message to what the user should see.
///
/// Matching is ordered: key problems, then rate limiting, then network.
pub fn user_facing_message(raw: &str) -> String {
    let lower = raw.to_lowercase();

    if lower.contains("api key") {
        API_KEY_MESSAGE.to_string()
    } else if raw.contains("429") || lower.contains("rate limit") || lower.contains("quota") {
        RATE_LIMIT_MESSAGE.to_string()
    } else if lower.contains("network") || lower.contains("fetch") || lower.contains("connect") {
        NETWORK_MESSAGE.to_string()
    } else {
        raw.to_string()
    }
}
