use serde::Serialize;

use crate::model::round::parse_hole_score;
use crate::model::{RoundRecord, parse_round_date};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundTotal {
    pub date: String,
    pub total: i64,
}

/// Sum of every hole that parses as an integer. Zero and negative values are
/// counted here, unlike the per-hole averages. Unrecorded holes add nothing.
#[must_use]
pub fn round_total(round: &RoundRecord) -> i64 {
    round
        .hole_scores
        .iter()
        .filter_map(|raw| raw.as_deref().and_then(parse_hole_score))
        .fold(0_i64, i64::saturating_add)
}

/// Per-round totals, most recent first. Rounds with the same date keep their
/// input order; rounds whose date does not parse go last.
#[must_use]
pub fn compute_round_totals(rounds: &[RoundRecord]) -> Vec<RoundTotal> {
    let mut keyed: Vec<_> = rounds
        .iter()
        .map(|round| {
            (
                parse_round_date(&round.date),
                RoundTotal {
                    date: round.date.clone(),
                    total: round_total(round),
                },
            )
        })
        .collect();

    // None orders before every date, so it lands at the end when descending
    keyed.sort_by(|(a, _), (b, _)| b.cmp(a));

    keyed.into_iter().map(|(_, total)| total).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparseable_dates_sort_last_and_ties_are_stable() {
        let rounds = vec![
            RoundRecord::new("not a date").with_score(1, "1"),
            RoundRecord::new("2024-02-01").with_score(1, "2"),
            RoundRecord::new("2/1/2024").with_score(1, "3"),
            RoundRecord::new("2024-05-01").with_score(1, "4"),
        ];
        let totals: Vec<i64> = compute_round_totals(&rounds)
            .into_iter()
            .map(|t| t.total)
            .collect();
        assert_eq!(totals, vec![4, 2, 3, 1]);
    }

    #[test]
    fn unrecorded_holes_add_nothing() {
        let round = RoundRecord::new("2024-01-01")
            .with_score(1, "abc")
            .with_score(2, "4.5")
            .with_score(3, " 6 ");
        assert_eq!(round_total(&round), 6);
    }
}
