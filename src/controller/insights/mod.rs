pub mod hole_averages;
pub mod round_totals;

use serde::Serialize;

use crate::model::{HOLE_COUNT, RoundRecord};

pub use hole_averages::{HoleAverage, NO_DATA, compute_hole_averages};
pub use round_totals::{RoundTotal, compute_round_totals, round_total};

/// Everything the insights page shows for one set of rounds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insights {
    pub hole_averages: [HoleAverage; HOLE_COUNT],
    pub round_totals: Vec<RoundTotal>,
    pub rounds_considered: usize,
}

impl Insights {
    #[must_use]
    pub fn from_rounds(rounds: &[RoundRecord]) -> Self {
        Self {
            hole_averages: compute_hole_averages(rounds),
            round_totals: compute_round_totals(rounds),
            rounds_considered: rounds.len(),
        }
    }
}

impl Default for Insights {
    fn default() -> Self {
        Self::from_rounds(&[])
    }
}
