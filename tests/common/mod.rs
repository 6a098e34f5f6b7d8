#![allow(dead_code)]

use golf_smart::controller::backend::{BackendFixture, MemoryBackend};
use golf_smart::model::RoundRecord;

pub fn rounds_fixture() -> Vec<RoundRecord> {
    serde_json::from_str(include_str!("../test1_rounds.json")).expect("rounds fixture should parse")
}

pub fn fixture() -> BackendFixture {
    serde_json::from_str(include_str!("../test3_fixture.json")).expect("backend fixture should parse")
}

pub fn memory_backend() -> MemoryBackend {
    MemoryBackend::from_fixture(fixture())
}

pub fn round_with_scores(date: &str, scores: &[&str]) -> RoundRecord {
    scores
        .iter()
        .enumerate()
        .fold(RoundRecord::new(date), |round, (idx, score)| {
            round.with_score(idx + 1, *score)
        })
}
