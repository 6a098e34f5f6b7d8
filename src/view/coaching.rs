use maud::{Markup, html};
use serde_json::Value;

use super::layout::{Notice, render_page};
use crate::model::Course;

pub const COACHING_HEADING: &str = "AI Coaching";
pub const COURSE_FIELD: &str = "course_id";

#[must_use]
pub fn render_coaching_page(
    courses: &[Course],
    selected: Option<&str>,
    analysis: Option<&Value>,
    notice: Option<&Notice>,
) -> Markup {
    let selected = selected.or_else(|| courses.first().map(|c| c.course_id.as_str()));
    let content = html! {
        @if courses.is_empty() {
            p { "Play a round to unlock coaching." }
        } @else {
            form class="coaching" method="post" action="coaching" {
                label {
                    "Select a Course: "
                    select name=(COURSE_FIELD) {
                        @for course in courses {
                            option value=(course.course_id) selected[selected == Some(course.course_id.as_str())] {
                                (course.course_name)
                            }
                        }
                    }
                }
                button type="submit" { "Analyze My Game" }
            }
        }
        @if let Some(analysis) = analysis {
            h3 { "Coaching" }
            pre class="analysis" { (serde_json::to_string_pretty(analysis).unwrap_or_default()) }
        }
    };
    render_page(COACHING_HEADING, notice, &content)
}
