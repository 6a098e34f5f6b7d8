pub mod course;
pub mod form;
pub mod profile;
pub mod round;
pub mod round_date;
pub mod scan;

pub use course::Course;
pub use form::{FormError, ScoreForm, ScoreSubmission};
pub use profile::{FREE_UPLOAD_LIMIT, Profile, UserTier};
pub use round::{HOLE_COUNT, RoundRecord};
pub use round_date::{normalize_round_date, parse_round_date};
pub use scan::{HoleKey, ScanExtractionResult, ScanFailure, ScanResponse, ScanScores};
