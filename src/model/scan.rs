use ahash::RandomState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

use super::round::{HOLE_COUNT, parse_hole_field};

/// A key from a scanned scorecard, expected to name a hole.
///
/// Keys are not validated when extracted; `hole_number` tells the form merge
/// whether the key lines up with a real hole field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct HoleKey(String);

impl HoleKey {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hole number for keys shaped like `7` or `Hole7Score`.
    #[must_use]
    pub fn hole_number(&self) -> Option<usize> {
        let key = self.0.trim();
        key.parse::<usize>()
            .ok()
            .filter(|hole| (1..=HOLE_COUNT).contains(hole))
            .or_else(|| parse_hole_field(key))
    }

    /// True for the form's own field spelling, `HoleNScore`.
    #[must_use]
    pub fn is_field_name(&self) -> bool {
        parse_hole_field(self.0.trim()).is_some()
    }
}

impl fmt::Display for HoleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HoleKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

pub type ScanScores = HashMap<HoleKey, String, RandomState>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScanFailure {
    #[error("no fenced json block found in scan response")]
    NoJsonBlockFound,
    #[error("scan response json block did not parse")]
    JsonParseError,
    #[error("scan response json is not an object")]
    InvalidShape,
}

impl ScanFailure {
    #[must_use]
    pub fn user_message(self) -> &'static str {
        match self {
            Self::NoJsonBlockFound => "We couldn't find any scores in that scorecard scan.",
            Self::JsonParseError | Self::InvalidShape => {
                "The scorecard scan came back in an unexpected format."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanExtractionResult {
    Success { scores: ScanScores },
    Failure { reason: ScanFailure },
}

impl ScanExtractionResult {
    /// # Errors
    ///
    /// Returns the failure reason when extraction did not succeed.
    pub fn into_result(self) -> Result<ScanScores, ScanFailure> {
        match self {
            Self::Success { scores } => Ok(scores),
            Self::Failure { reason } => Err(reason),
        }
    }
}

impl From<ScanFailure> for ScanExtractionResult {
    fn from(reason: ScanFailure) -> Self {
        Self::Failure { reason }
    }
}

/// Body returned by the scan service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ScanResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
}

impl ScanResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.eq_ignore_ascii_case("success")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hole_key_accepts_plain_numbers_and_field_names() {
        assert_eq!(HoleKey::from("1").hole_number(), Some(1));
        assert_eq!(HoleKey::from(" 18 ").hole_number(), Some(18));
        assert_eq!(HoleKey::from("Hole9Score").hole_number(), Some(9));
        assert_eq!(HoleKey::from("0").hole_number(), None);
        assert_eq!(HoleKey::from("19").hole_number(), None);
        assert_eq!(HoleKey::from("player").hole_number(), None);
        assert!(HoleKey::from("Hole9Score").is_field_name());
        assert!(!HoleKey::from("9").is_field_name());
    }

    #[test]
    fn scan_response_status_check() {
        let ok: ScanResponse =
            serde_json::from_str(r#"{"status":"success","message":"hi"}"#).unwrap();
        assert!(ok.is_success());
        let err: ScanResponse = serde_json::from_str(r#"{"status":"error"}"#).unwrap();
        assert!(!err.is_success());
        assert!(err.message.is_empty());
    }
}
