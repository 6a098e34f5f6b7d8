use maud::{Markup, html};

use super::layout::{Notice, render_page};
use crate::model::form::{DATE_FIELD, SCORE_ID_FIELD};
use crate::model::round::{HOLE_COUNT, hole_field_name};
use crate::model::ScoreForm;

pub const SCORE_FORM_HEADING: &str = "Enter Golf Scores";
pub const IMAGE_URL_FIELD: &str = "image_url";

// carries the current entries through a scan round-trip
fn hidden_form_state(form: &ScoreForm) -> Markup {
    html! {
        input type="hidden" name=(SCORE_ID_FIELD) value=(form.score_id);
        input type="hidden" name=(DATE_FIELD) value=(form.date);
        @for (idx, score) in form.holes.iter().enumerate() {
            input type="hidden" name=(hole_field_name(idx + 1)) value=(score);
        }
    }
}

#[must_use]
pub fn render_scan_form(form: &ScoreForm) -> Markup {
    html! {
        form class="scan" method="post" action="scan" {
            label {
                "Scorecard image URL: "
                input type="url" name=(IMAGE_URL_FIELD) required;
            }
            (hidden_form_state(form))
            button type="submit" { "Scan scorecard" }
        }
    }
}

#[must_use]
pub fn render_score_entry(form: &ScoreForm) -> Markup {
    html! {
        form class="score-entry" method="post" action="scores" {
            input type="hidden" name=(SCORE_ID_FIELD) value=(form.score_id);
            label {
                "Date: "
                input type="date" name=(DATE_FIELD) value=(form.date) required;
            }
            @for hole in 1..=HOLE_COUNT {
                div class="hole" {
                    h4 { "Hole " (hole) }
                    label {
                        "Score: "
                        input type="number" name=(hole_field_name(hole)) value=(form.hole(hole).unwrap_or_default()) required;
                    }
                }
            }
            button type="submit" { "Submit" }
        }
    }
}

#[must_use]
pub fn render_score_form_page(form: &ScoreForm, notice: Option<&Notice>) -> Markup {
    let content = html! {
        (render_scan_form(form))
        (render_score_entry(form))
    };
    render_page(SCORE_FORM_HEADING, notice, &content)
}
