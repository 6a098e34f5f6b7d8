use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

use crate::model::{HoleKey, ScanExtractionResult, ScanFailure, ScanScores};

/// Body of the first ```` ```json ```` fenced block in `message`, if any.
///
/// # Panics
///
/// Will panic if the regex is invalid
#[must_use]
pub fn fenced_json_block(message: &str) -> Option<&str> {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| {
        Regex::new(r"(?s)```json\r?\n(.*?)\r?\n```")
            .expect("Invalid regex pattern - this is a programming error")
    });
    re.captures(message)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Pulls hole scores out of a scan service message.
///
/// Every value is turned into its text form so `7` and `"7"` read the same.
/// Keys are passed through untouched; the form merge drops the ones that are
/// not holes.
#[must_use]
pub fn extract_scores(message: &str) -> ScanExtractionResult {
    let Some(block) = fenced_json_block(message) else {
        return ScanFailure::NoJsonBlockFound.into();
    };
    let Ok(parsed) = serde_json::from_str::<Value>(block) else {
        return ScanFailure::JsonParseError.into();
    };
    let Value::Object(fields) = parsed else {
        return ScanFailure::InvalidShape.into();
    };

    let scores: ScanScores = fields
        .into_iter()
        .map(|(key, value)| (HoleKey::new(key), score_text(value)))
        .collect();
    ScanExtractionResult::Success { scores }
}

fn score_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(pairs: &[(&str, &str)]) -> ScanScores {
        pairs
            .iter()
            .map(|(k, v)| (HoleKey::from(*k), (*v).to_string()))
            .collect()
    }

    #[test]
    fn takes_first_block_only() {
        let message = "Here you go:\n```json\n{\"1\": 4}\n```\nand again\n```json\n{\"1\": 9}\n```";
        assert_eq!(
            extract_scores(message),
            ScanExtractionResult::Success {
                scores: scores(&[("1", "4")])
            }
        );
    }

    #[test]
    fn block_may_span_lines() {
        let message = "```json\n{\n  \"1\": \"Unk\",\n  \"2\": 5,\n  \"19\": 3\n}\n```";
        assert_eq!(
            extract_scores(message).into_result(),
            Ok(scores(&[("1", "Unk"), ("2", "5"), ("19", "3")]))
        );
    }

    #[test]
    fn non_string_scalars_use_json_text() {
        let message = "```json\n{\"1\": null, \"2\": true, \"3\": 4.5}\n```";
        assert_eq!(
            extract_scores(message).into_result(),
            Ok(scores(&[("1", "null"), ("2", "true"), ("3", "4.5")]))
        );
    }

    #[test]
    fn unterminated_or_untagged_fences_are_not_blocks() {
        assert_eq!(fenced_json_block("```json\n{\"1\": 4}"), None);
        assert_eq!(fenced_json_block("```\n{\"1\": 4}\n```"), None);
        assert_eq!(fenced_json_block(""), None);
    }

    #[test]
    fn scalar_json_is_invalid_shape() {
        assert_eq!(
            extract_scores("```json\n42\n```"),
            ScanExtractionResult::Failure {
                reason: ScanFailure::InvalidShape
            }
        );
    }
}
