//! Helpers for peeking at replies
//!
//! Replies are opaque JSON. These helpers only pull out the fields the
//! extension conventionally sets so the caller can log them.

use serde_json::Value;

/// The `status` field of a reply, if present
pub fn status(reply: &Value) -> Option<&str> {
    reply.get("status").and_then(|s| s.as_str())
}

/// The message of a reply whose status is `"error"`
pub fn remote_error(reply: &Value) -> Option<&str> {
    if status(reply) != Some("error") {
        return None;
    }
    Some(
        reply
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or("unknown error"),
    )
}

/// Short single-line preview of a reply for log output
pub fn preview(reply: &Value, max_chars: usize) -> String {
    let text = reply.to_string();
    if text.chars().count() <= max_chars {
        return text;
    }
    let mut short: String = text.chars().take(max_chars).collect();
    short.push_str("...");
    short
}
