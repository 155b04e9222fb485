//! Extraction of the JSON payload from raw model output.
//!
//! The model is asked for JSON but nothing enforces it, so replies arrive
//! as bare JSON, JSON inside a ```json fence, or JSON inside a plain
//! fence with prose around it. Only the first fenced block is considered.

use thiserror::Error;

/// How much of the offending text a [`ParseError`] carries.
const SNIPPET_CHARS: usize = 200;

/// The model output did not contain a decodable JSON object.
#[derive(Debug, Error)]
#[error("invalid JSON in model output: {source} (in {snippet:?})")]
pub struct ParseError {
    /// Leading slice of the text that failed to decode.
    pub snippet: String,
    #[source]
    pub source: serde_json::Error,
}

/// Locate and deserialize the JSON object embedded in raw model output.
///
/// Fence handling is split-on-first-marker: the payload runs from the
/// first opening marker to the next closing fence, and an unterminated
/// fence swallows the rest of the text. Already-clean JSON passes
/// through unchanged, so parsing is idempotent on its own output.
pub fn parse_analysis(raw: &str) -> Result<serde_json::Value, ParseError> {
    let payload = if let Some((_, rest)) = raw.split_once("```json") {
        rest.split("```").next().unwrap_or(rest)
    } else if let Some((_, rest)) = raw.split_once("```") {
        rest.split("```").next().unwrap_or(rest)
    } else {
        raw
    };

    let trimmed = payload.trim();
    serde_json::from_str(trimmed).map_err(|source| ParseError {
        snippet: super::prompts::truncate_utf8(trimmed, SNIPPET_CHARS).to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_json() {
        assert_eq!(parse_analysis("{\"a\":1}").unwrap(), json!({"a": 1}));
    }

    #[test]
    fn test_json_fence() {
        assert_eq!(
            parse_analysis("```json\n{\"a\":1}\n```").unwrap(),
            json!({"a": 1})
        );
    }

    #[test]
    fn test_plain_fence() {
        assert_eq!(
            parse_analysis("Claro, aquí está:\n```\n{\"a\":1}\n```\n").unwrap(),
            json!({"a": 1})
        );
    }

    #[test]
    fn test_fenced_and_bare_agree() {
        let fenced = parse_analysis("```json\n{\"a\":1}\n```").unwrap();
        let bare = parse_analysis("{\"a\":1}").unwrap();
        assert_eq!(fenced, bare);
    }

    #[test]
    fn test_idempotent_on_clean_json() {
        let first = parse_analysis("```json\n{\"total\":\"1,200.50\"}\n```").unwrap();
        let again = parse_analysis(&first.to_string()).unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn test_only_first_fence_is_considered() {
        let raw = "```json\n{\"a\":1}\n```\ntexto\n```json\n{\"b\":2}\n```";
        assert_eq!(parse_analysis(raw).unwrap(), json!({"a": 1}));
    }

    #[test]
    fn test_unterminated_fence_uses_remainder() {
        assert_eq!(parse_analysis("```json\n{\"a\":1}").unwrap(), json!({"a": 1}));
    }

    #[test]
    fn test_not_json_is_a_parse_error() {
        let err = parse_analysis("not json").unwrap_err();
        assert_eq!(err.snippet, "not json");
    }

    #[test]
    fn test_error_snippet_is_bounded() {
        let raw = "x".repeat(5000);
        let err = parse_analysis(&raw).unwrap_err();
        assert!(err.snippet.len() <= 200);
    }
}
