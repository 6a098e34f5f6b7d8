use serde::{Serialize, Serializer};
use std::fmt;

use crate::model::RoundRecord;
use crate::model::round::{HOLE_COUNT, parse_hole_score};

pub const NO_DATA: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoleAverage {
    pub hole_number: usize,
    /// `None` when no round recorded a positive score for this hole.
    pub average: Option<f64>,
}

impl fmt::Display for HoleAverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.average {
            Some(avg) => write!(f, "{avg:.1}"),
            None => f.write_str(NO_DATA),
        }
    }
}

impl Serialize for HoleAverage {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("HoleAverage", 3)?;
        state.serialize_field("hole", &self.hole_number)?;
        state.serialize_field("average", &self.average)?;
        state.serialize_field("display", &self.to_string())?;
        state.end()
    }
}

/// Average score per hole, hole 1 first.
///
/// Only scores that parse as integers greater than zero count; a `"0"` is a
/// placeholder, not a real score.
#[must_use]
pub fn compute_hole_averages(rounds: &[RoundRecord]) -> [HoleAverage; HOLE_COUNT] {
    let mut totals = [0_i64; HOLE_COUNT];
    let mut counts = [0_u32; HOLE_COUNT];

    for round in rounds {
        for (idx, raw) in round.hole_scores.iter().enumerate() {
            let Some(score) = raw
                .as_deref()
                .and_then(parse_hole_score)
                .filter(|score| *score > 0)
            else {
                continue;
            };
            totals[idx] = totals[idx].saturating_add(score);
            counts[idx] = counts[idx].saturating_add(1);
        }
    }

    std::array::from_fn(|idx| HoleAverage {
        hole_number: idx + 1,
        average: (counts[idx] > 0)
            .then(|| round_to_tenth(totals[idx] as f64 / f64::from(counts[idx]))),
    })
}

// half away from zero, applied to tenths
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_round_away_from_zero() {
        let rounds: Vec<RoundRecord> = ["4", "4", "4", "5"]
            .into_iter()
            .map(|s| RoundRecord::new("2024-01-01").with_score(1, s))
            .collect();
        let averages = compute_hole_averages(&rounds);
        assert_eq!(averages[0].average, Some(4.3));
        assert_eq!(averages[0].to_string(), "4.3");
    }

    #[test]
    fn thirds_render_with_one_digit() {
        let rounds: Vec<RoundRecord> = ["4", "4", "5"]
            .into_iter()
            .map(|s| RoundRecord::new("2024-01-01").with_score(2, s))
            .collect();
        let averages = compute_hole_averages(&rounds);
        assert_eq!(averages[1].to_string(), "4.3");
        assert_eq!(averages[0].to_string(), NO_DATA);
    }

    #[test]
    fn json_carries_display_text() {
        let averages = compute_hole_averages(&[RoundRecord::new("x").with_score(1, "3")]);
        let json = serde_json::to_value(averages[0]).unwrap();
        assert_eq!(json["hole"], 1);
        assert_eq!(json["display"], "3.0");
        assert!(serde_json::to_value(averages[1]).unwrap()["average"].is_null());
    }
}
