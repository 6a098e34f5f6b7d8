use golf_smart::controller::insights::{Insights, NO_DATA, compute_hole_averages, compute_round_totals};
use golf_smart::model::{HOLE_COUNT, RoundRecord};

mod common;

#[test]
fn test_all_blank_rounds_have_no_averages() {
    let rounds = vec![
        RoundRecord::new("2024-01-01"),
        common::round_with_scores("2024-01-02", &["", " ", "x"]),
    ];
    let averages = compute_hole_averages(&rounds);
    assert_eq!(averages.len(), HOLE_COUNT);
    for avg in &averages {
        assert_eq!(avg.average, None);
        assert_eq!(avg.to_string(), NO_DATA);
    }
    assert!(compute_hole_averages(&[]).iter().all(|avg| avg.average.is_none()));
}

#[test]
fn test_single_round_average_is_exact() {
    let rounds = vec![RoundRecord::new("2024-01-01").with_score(1, "4")];
    let averages = compute_hole_averages(&rounds);
    assert_eq!(averages[0].hole_number, 1);
    assert_eq!(averages[0].average, Some(4.0));
    assert_eq!(averages[0].to_string(), "4.0");
}

#[test]
fn test_averages_skip_zero_and_negative_scores() {
    let rounds = vec![
        RoundRecord::new("2024-01-01").with_score(1, "0"),
        RoundRecord::new("2024-01-02").with_score(1, "5"),
        RoundRecord::new("2024-01-03").with_score(1, "-3"),
    ];
    assert_eq!(compute_hole_averages(&rounds)[0].average, Some(5.0));
}

#[test]
fn test_averages_are_ordered_by_hole() {
    let averages = compute_hole_averages(&common::rounds_fixture());
    let holes: Vec<usize> = averages.iter().map(|avg| avg.hole_number).collect();
    assert_eq!(holes, (1..=HOLE_COUNT).collect::<Vec<_>>());

    let display: Vec<String> = averages.iter().take(7).map(ToString::to_string).collect();
    assert_eq!(display, vec!["5.0", "4.5", "3.5", "-", "-", "6.5", "-"]);
}

#[test]
fn test_totals_include_zero_and_negative_scores() {
    let rounds = vec![common::round_with_scores("2024-01-01", &["0", "5", "-1"])];
    let totals = compute_round_totals(&rounds);
    assert_eq!(totals.len(), 1);
    assert_eq!(totals[0].total, 4);
    assert_eq!(totals[0].date, "2024-01-01");
}

#[test]
fn test_totals_sorted_most_recent_first() {
    let rounds = vec![
        RoundRecord::new("2024-01-01"),
        RoundRecord::new("2024-03-01"),
        RoundRecord::new("2024-02-01"),
    ];
    let dates: Vec<String> = compute_round_totals(&rounds)
        .into_iter()
        .map(|total| total.date)
        .collect();
    assert_eq!(dates, vec!["2024-03-01", "2024-02-01", "2024-01-01"]);
}

#[test]
fn test_totals_from_backend_json() {
    let totals = compute_round_totals(&common::rounds_fixture());
    let pairs: Vec<(&str, i64)> = totals
        .iter()
        .map(|total| (total.date.as_str(), total.total))
        .collect();
    assert_eq!(
        pairs,
        vec![("2024-03-01", 14), ("2/1/2024", 10), ("2024-01-01", 18)]
    );
}

#[test]
fn test_aggregation_is_repeatable() {
    let rounds = common::rounds_fixture();
    let snapshot = rounds.clone();
    assert_eq!(compute_hole_averages(&rounds), compute_hole_averages(&rounds));
    assert_eq!(compute_round_totals(&rounds), compute_round_totals(&rounds));
    assert_eq!(Insights::from_rounds(&rounds), Insights::from_rounds(&rounds));
    assert_eq!(rounds, snapshot);
}

#[test]
fn test_insights_json_shape() -> Result<(), Box<dyn std::error::Error>> {
    let insights = Insights::from_rounds(&common::rounds_fixture());
    let json = serde_json::to_value(&insights)?;
    assert_eq!(json["rounds_considered"], 3);
    assert_eq!(json["hole_averages"].as_array().map(Vec::len), Some(HOLE_COUNT));
    assert_eq!(json["hole_averages"][0]["display"], "5.0");
    assert_eq!(json["round_totals"][0]["date"], "2024-03-01");
    Ok(())
}
