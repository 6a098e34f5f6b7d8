use chrono::Local;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use thiserror::Error;
use uuid::Uuid;

use super::round::{HOLE_COUNT, hole_field_name, parse_hole_field, parse_hole_score};
use super::round_date::{CANONICAL_DATE_FORMAT, normalize_round_date};
use super::scan::{HoleKey, ScanScores};

pub const SCORE_ID_FIELD: &str = "scoreId";
pub const DATE_FIELD: &str = "Date";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("no user id configured, cannot submit scores")]
    MissingUserId,
    #[error("'{0}' is not a valid date")]
    InvalidDate(String),
    #[error("hole {hole} score '{value}' is not a whole number")]
    InvalidHoleScore { hole: usize, value: String },
}

/// State of the score entry form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreForm {
    pub score_id: String,
    pub date: String,
    pub holes: [String; HOLE_COUNT],
}

impl Default for ScoreForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreForm {
    /// Blank form dated today with a fresh score id.
    #[must_use]
    pub fn new() -> Self {
        Self::with_date(Local::now().date_naive().format(CANONICAL_DATE_FORMAT).to_string())
    }

    #[must_use]
    pub fn with_date(date: impl Into<String>) -> Self {
        Self {
            score_id: Uuid::new_v4().to_string(),
            date: date.into(),
            holes: Default::default(),
        }
    }

    /// Rebuilds a form from posted fields. Missing fields keep their defaults.
    #[allow(clippy::implicit_hasher)]
    #[must_use]
    pub fn from_fields(fields: &HashMap<String, String>) -> Self {
        let mut form = Self::new();
        for (name, value) in fields {
            form.apply_field(name, value);
        }
        form
    }

    /// Updates one named form field. Returns `false` for names the form does not have.
    pub fn apply_field(&mut self, name: &str, value: &str) -> bool {
        match name {
            SCORE_ID_FIELD if !value.trim().is_empty() => {
                self.score_id = value.trim().to_string();
                true
            }
            DATE_FIELD => {
                self.date = value.trim().to_string();
                true
            }
            _ => match parse_hole_field(name) {
                Some(hole) => {
                    self.holes[hole - 1] = value.trim().to_string();
                    true
                }
                None => false,
            },
        }
    }

    /// Copies scanned scores into the hole fields. Keys that do not name a
    /// hole are skipped. Returns how many holes were filled.
    ///
    /// When several keys name the same hole, a `HoleNScore` key beats a bare
    /// `N`, and remaining ties go to the lexically smallest key.
    pub fn merge_scan(&mut self, scores: &ScanScores) -> usize {
        let mut picked: [Option<(&HoleKey, &String)>; HOLE_COUNT] = Default::default();
        for (key, score) in scores {
            let Some(hole) = key.hole_number() else {
                continue;
            };
            let slot = &mut picked[hole - 1];
            let replace = match slot {
                Some((current, _)) => {
                    (!key.is_field_name(), key.as_str()) < (!current.is_field_name(), current.as_str())
                }
                None => true,
            };
            if replace {
                *slot = Some((key, score));
            }
        }

        let mut applied = 0;
        for (idx, pick) in picked.iter().enumerate() {
            if let Some((_, score)) = pick {
                self.holes[idx] = score.trim().to_string();
                applied += 1;
            }
        }
        applied
    }

    #[must_use]
    pub fn hole(&self, hole: usize) -> Option<&str> {
        hole.checked_sub(1)
            .and_then(|idx| self.holes.get(idx))
            .map(String::as_str)
    }

    /// Validates the form into the payload the score store accepts.
    ///
    /// # Errors
    ///
    /// Returns `FormError` when the user id is empty, the date does not parse,
    /// or any hole is not a whole number.
    pub fn to_submission(&self, user_id: &str) -> Result<ScoreSubmission, FormError> {
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(FormError::MissingUserId);
        }
        let date = normalize_round_date(&self.date)
            .ok_or_else(|| FormError::InvalidDate(self.date.clone()))?;

        let mut hole_scores = [0_i64; HOLE_COUNT];
        for (idx, raw) in self.holes.iter().enumerate() {
            hole_scores[idx] =
                parse_hole_score(raw).ok_or_else(|| FormError::InvalidHoleScore {
                    hole: idx + 1,
                    value: raw.clone(),
                })?;
        }

        Ok(ScoreSubmission {
            user_id: user_id.to_string(),
            score_id: self.score_id.clone(),
            date,
            hole_scores,
        })
    }
}

/// A validated round, ready for the score store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreSubmission {
    pub user_id: String,
    pub score_id: String,
    pub date: String,
    pub hole_scores: [i64; HOLE_COUNT],
}

impl ScoreSubmission {
    #[must_use]
    pub fn total(&self) -> i64 {
        self.hole_scores
            .iter()
            .fold(0_i64, |acc, score| acc.saturating_add(*score))
    }
}

impl Serialize for ScoreSubmission {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(3 + HOLE_COUNT))?;
        map.serialize_entry("userId", &self.user_id)?;
        map.serialize_entry(SCORE_ID_FIELD, &self.score_id)?;
        map.serialize_entry(DATE_FIELD, &self.date)?;
        for (idx, score) in self.hole_scores.iter().enumerate() {
            map.serialize_entry(&hole_field_name(idx + 1), score)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::scan::extract_scores;

    fn filled_form() -> ScoreForm {
        let mut form = ScoreForm::with_date("2/25/2025");
        for hole in 1..=HOLE_COUNT {
            form.apply_field(&hole_field_name(hole), "4");
        }
        form
    }

    #[test]
    fn apply_field_ignores_unknown_names() {
        let mut form = ScoreForm::with_date("2025-01-01");
        assert!(form.apply_field("Hole3Score", " 5 "));
        assert!(!form.apply_field("Hole3Par", "4"));
        assert!(!form.apply_field("Hole19Score", "4"));
        assert_eq!(form.hole(3), Some("5"));
    }

    #[test]
    fn merge_scan_skips_keys_that_are_not_holes() {
        let mut form = ScoreForm::with_date("2025-01-01");
        let scores: ScanScores = [
            (HoleKey::from("1"), "4".to_string()),
            (HoleKey::from("Hole2Score"), "5".to_string()),
            (HoleKey::from("19"), "3".to_string()),
            (HoleKey::from("player"), "Connor".to_string()),
        ]
        .into_iter()
        .collect();
        assert_eq!(form.merge_scan(&scores), 2);
        assert_eq!(form.hole(1), Some("4"));
        assert_eq!(form.hole(2), Some("5"));
        assert!(form.holes[2..].iter().all(String::is_empty));
    }

    #[test]
    fn merge_scan_prefers_field_name_keys_for_the_same_hole() {
        let scores = extract_scores("```json\n{\"1\": 4, \"Hole1Score\": 7, \" 2\": 5, \"2\": 6}\n```")
            .into_result()
            .unwrap();
        for _ in 0..50 {
            let mut form = ScoreForm::with_date("2025-01-01");
            assert_eq!(form.merge_scan(&scores), 2);
            assert_eq!(form.hole(1), Some("7"));
            assert_eq!(form.hole(2), Some("5"));
        }
    }

    #[test]
    fn submission_normalizes_date_and_serializes_backend_fields() {
        let submission = filled_form().to_submission("user-1").unwrap();
        assert_eq!(submission.date, "2025-02-25");
        assert_eq!(submission.total(), 72);
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["userId"], "user-1");
        assert_eq!(json["Date"], "2025-02-25");
        assert_eq!(json["Hole18Score"], 4);
    }

    #[test]
    fn submission_rejects_bad_input() {
        let mut form = filled_form();
        assert_eq!(form.to_submission("  "), Err(FormError::MissingUserId));

        form.apply_field("Hole7Score", "Unk");
        assert_eq!(
            form.to_submission("user-1"),
            Err(FormError::InvalidHoleScore {
                hole: 7,
                value: "Unk".to_string()
            })
        );

        let mut form = filled_form();
        form.apply_field("Date", "someday");
        assert_eq!(
            form.to_submission("user-1"),
            Err(FormError::InvalidDate("someday".to_string()))
        );
    }
}
