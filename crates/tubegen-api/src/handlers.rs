//! Request handlers.

pub mod health;
pub mod styles;
pub mod upload;
pub mod videos;

pub use health::*;
pub use styles::*;
pub use upload::*;
pub use videos::*;

use serde_json::Value;

/// Non-blank string field of a JSON request body, trimmed.
///
/// Missing fields, fields of another type and non-object bodies all read as
/// `None`.
pub(crate) fn text_field<'a>(body: &'a Value, key: &str) -> Option<&'a str> {
    body.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_field() {
        let body = json!({ "topic": "  Rust ", "blank": "   ", "number": 5 });

        assert_eq!(text_field(&body, "topic"), Some("Rust"));
        assert_eq!(text_field(&body, "blank"), None);
        assert_eq!(text_field(&body, "number"), None);
        assert_eq!(text_field(&body, "missing"), None);
        assert_eq!(text_field(&json!(["topic"]), "topic"), None);
    }
}
