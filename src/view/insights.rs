use maud::{Markup, html};

use super::layout::{Notice, render_page};
use crate::controller::insights::Insights;

pub const INSIGHTS_HEADING: &str = "Insights";

#[must_use]
pub fn render_hole_averages(insights: &Insights) -> Markup {
    html! {
        p { "Average score per hole (last " (insights.rounds_considered) " rounds)" }
        table class="hole-averages" {
            thead {
                tr {
                    @for avg in &insights.hole_averages {
                        th { "Hole " (avg.hole_number) }
                    }
                }
            }
            tbody {
                tr {
                    @for avg in &insights.hole_averages {
                        td { (avg.to_string()) }
                    }
                }
            }
        }
    }
}

#[must_use]
pub fn render_round_totals(insights: &Insights) -> Markup {
    html! {
        h3 { "Rounds" }
        @if insights.round_totals.is_empty() {
            p { "No rounds recorded yet." }
        } @else {
            table class="round-totals" {
                thead {
                    tr {
                        th { "Date" }
                        th { "Total" }
                    }
                }
                tbody {
                    @for round in &insights.round_totals {
                        tr {
                            td { (round.date) }
                            td { (round.total) }
                        }
                    }
                }
            }
        }
    }
}

#[must_use]
pub fn render_insights_page(insights: &Insights, notice: Option<&Notice>) -> Markup {
    let content = html! {
        (render_hole_averages(insights))
        (render_round_totals(insights))
    };
    render_page(INSIGHTS_HEADING, notice, &content)
}
