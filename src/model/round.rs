use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

pub const HOLE_COUNT: usize = 18;

/// One played round as delivered by the round data source.
///
/// Scores are kept as the raw text the backend sent. Parsing happens in the
/// aggregators, which each apply their own validity rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundRecord {
    pub date: String,
    pub hole_scores: [Option<String>; HOLE_COUNT],
}

impl RoundRecord {
    #[must_use]
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            hole_scores: Default::default(),
        }
    }

    /// Sets the score for a 1-based hole number. Holes outside 1..=18 are ignored.
    #[must_use]
    pub fn with_score(mut self, hole: usize, score: impl Into<String>) -> Self {
        if let Some(slot) = hole
            .checked_sub(1)
            .and_then(|idx| self.hole_scores.get_mut(idx))
        {
            *slot = Some(score.into());
        }
        self
    }

    #[must_use]
    pub fn score(&self, hole: usize) -> Option<&str> {
        hole.checked_sub(1)
            .and_then(|idx| self.hole_scores.get(idx))
            .and_then(Option::as_deref)
    }

    /// Builds a record from a backend JSON object (`Date`, `Hole{n}Score`).
    /// Keys that are not a known field are dropped.
    #[must_use]
    pub fn from_json_object(fields: &Map<String, Value>) -> Self {
        let mut record = Self {
            date: fields
                .get("Date")
                .and_then(value_text)
                .unwrap_or_default(),
            hole_scores: Default::default(),
        };
        for (key, value) in fields {
            if let Some(hole) = parse_hole_field(key) {
                record.hole_scores[hole - 1] = value_text(value);
            }
        }
        record
    }
}

impl<'de> Deserialize<'de> for RoundRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = Map::<String, Value>::deserialize(deserializer)?;
        Ok(Self::from_json_object(&fields))
    }
}

#[must_use]
pub fn hole_field_name(hole: usize) -> String {
    format!("Hole{hole}Score")
}

/// Maps a `Hole{n}Score` field name to its hole number.
#[must_use]
pub fn parse_hole_field(name: &str) -> Option<usize> {
    let digits = name.strip_prefix("Hole")?.strip_suffix("Score")?;
    digits
        .parse::<usize>()
        .ok()
        .filter(|hole| (1..=HOLE_COUNT).contains(hole))
}

/// Integer value of a recorded score, `None` when the text is not an integer.
#[must_use]
pub fn parse_hole_score(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(number_text(n)),
        other => Some(other.to_string()),
    }
}

// stores that keep numbers as decimals send 4 as 4.0
fn number_text(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{f:.0}"),
        _ => n.to_string(),
    }
}
