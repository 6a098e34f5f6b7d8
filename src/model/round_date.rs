use chrono::{DateTime, NaiveDate};

// `<input type="date">` sends the first form, older score entries the second
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

pub const CANONICAL_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a round date as sent by any revision of the score entry form.
#[must_use]
pub fn parse_round_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// Rewrites a round date as `YYYY-MM-DD`.
#[must_use]
pub fn normalize_round_date(raw: &str) -> Option<String> {
    parse_round_date(raw).map(|date| date.format(CANONICAL_DATE_FORMAT).to_string())
}
