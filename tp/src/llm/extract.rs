//! Structured-data extraction from generation output
//!
//! Models wrap JSON in markdown fences or chat filler more often than not.
//! These helpers strip the fences and locate the first well-formed bracketed
//! region, leaving strict parsing to serde at the call site.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"```(?:json)?\s*").expect("fence regex"));

/// Strip markdown code fences from generation output
fn strip_fences(text: &str) -> String {
    FENCE_RE.replace_all(text, "").into_owned()
}

/// Locate the first balanced region delimited by `open`/`close`.
///
/// Spans from the first `open` to its matching `close`, tracking JSON string
/// literals so braces inside strings do not count.
fn first_balanced(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in text[start..].char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            c if c == open => depth += 1,
            c if c == close => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + c.len_utf8()]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Extract the first JSON object (`{...}`) from generation output
pub fn extract_json_object(text: &str) -> Option<String> {
    debug!(text_len = text.len(), "extract_json_object: called");
    let cleaned = strip_fences(text);
    first_balanced(&cleaned, '{', '}').map(str::to_string)
}

/// Extract the first JSON array (`[...]`) from generation output
pub fn extract_json_array(text: &str) -> Option<String> {
    debug!(text_len = text.len(), "extract_json_array: called");
    let cleaned = strip_fences(text);
    first_balanced(&cleaned, '[', ']').map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_object() {
        let out = extract_json_object(r#"{"daily_plans": []}"#).unwrap();
        assert_eq!(out, r#"{"daily_plans": []}"#);
    }

    #[test]
    fn test_fenced_object() {
        let text = "Here is your itinerary:\n```json\n{\"daily_plans\": [{\"day\": 1}]}\n```\nEnjoy!";
        let out = extract_json_object(text).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["daily_plans"][0]["day"], 1);
    }

    #[test]
    fn test_nested_braces_balanced() {
        let text = r#"prefix {"a": {"b": {"c": 1}}} suffix"#;
        assert_eq!(extract_json_object(text).unwrap(), r#"{"a": {"b": {"c": 1}}}"#);
    }

    #[test]
    fn test_braces_inside_strings_ignored() {
        let text = r#"{"note": "use {curly} braces"}"#;
        assert_eq!(extract_json_object(text).unwrap(), text);
    }

    #[test]
    fn test_array_extraction() {
        let text = "```json\n[{\"name\": \"Louvre\"}]\n``` trailing";
        let out = extract_json_array(text).unwrap();
        assert_eq!(out, r#"[{"name": "Louvre"}]"#);
    }

    #[test]
    fn test_no_object_found() {
        assert!(extract_json_object("no json here").is_none());
        assert!(extract_json_array("still nothing").is_none());
    }

    #[test]
    fn test_unbalanced_returns_none() {
        assert!(extract_json_object(r#"{"truncated": "#).is_none());
    }
}
