pub mod extract;

pub use extract::{extract_scores, fenced_json_block};
