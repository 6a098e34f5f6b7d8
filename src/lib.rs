pub mod args;
pub mod error;
pub mod model;
pub mod controller {
    pub mod backend;
    pub mod coaching;
    pub mod http_handlers;
    pub mod insights;
    pub mod scan;
}
pub mod view {
    pub mod coaching;
    pub mod insights;
    pub mod layout;
    pub mod score_form;
    pub mod settings;
}

pub use controller::insights::{compute_hole_averages, compute_round_totals};
pub use controller::scan::extract_scores;
