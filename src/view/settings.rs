use maud::{Markup, html};

use super::layout::{Notice, render_page};
use crate::model::Profile;

pub const SETTINGS_HEADING: &str = "Profile Settings";

fn text_field(label: &str, name: &str, value: &str) -> Markup {
    html! {
        label {
            (label) ": "
            input type="text" name=(name) value=(value);
        }
        br;
    }
}

#[must_use]
pub fn render_settings_page(profile: &Profile, notice: Option<&Notice>) -> Markup {
    let content = html! {
        form class="settings" method="post" action="settings" {
            input type="hidden" name="email" value=(profile.email);
            (text_field("Full Name", "fullName", &profile.full_name))
            (text_field("Home Course", "homeCourse", &profile.home_course))
            (text_field("Tee Box", "teeBox", &profile.tee_box))
            (text_field("Scoring Type", "scoringType", &profile.scoring_type))
            (text_field("League Preference", "leaguePreference", &profile.league_preference))
            button type="submit" { "Save Profile" }
        }
    };
    render_page(SETTINGS_HEADING, notice, &content)
}
