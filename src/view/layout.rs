use maud::{Markup, html};

pub const APP_TITLE: &str = "Golf Smart";

/// A one-line message shown above page content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

impl Notice {
    fn class(&self) -> &'static str {
        match self {
            Self::Info(_) => "notice notice-info",
            Self::Error(_) => "notice notice-error",
        }
    }

    fn text(&self) -> &str {
        match self {
            Self::Info(text) | Self::Error(text) => text,
        }
    }
}

#[must_use]
pub fn render_page(heading: &str, notice: Option<&Notice>, content: &Markup) -> Markup {
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            title { (heading) " | " (APP_TITLE) }
        }
        body {
            h2 { (heading) }
            @if let Some(notice) = notice {
                p class=(notice.class()) { (notice.text()) }
            }
            (content)
        }
    }
}
