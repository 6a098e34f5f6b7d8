pub mod http;
pub mod memory;

use serde::Deserialize;
use serde_json::Value;
use std::path::PathBuf;

use crate::error::AppError;
use crate::model::{Course, Profile, RoundRecord, ScanResponse, ScoreSubmission, UserTier};

pub use http::HttpBackend;
pub use memory::{BackendFixture, MemoryBackend};

/// Remote services the pages talk to. Token handling is the implementation's
/// concern; callers only see decoded data.
#[async_trait::async_trait]
pub trait GolfBackend: Send + Sync {
    async fn fetch_rounds(&self) -> Result<Vec<RoundRecord>, AppError>;

    async fn request_scan(&self, image_url: &str) -> Result<ScanResponse, AppError>;

    async fn submit_score(&self, submission: &ScoreSubmission) -> Result<(), AppError>;

    async fn fetch_courses(&self) -> Result<Vec<Course>, AppError>;

    async fn analyze_course(&self, course: &Course) -> Result<Value, AppError>;

    /// `None` when the user has not set up a profile yet.
    async fn fetch_profile(&self) -> Result<Option<Profile>, AppError>;

    async fn save_profile(&self, profile: &Profile) -> Result<(), AppError>;

    async fn fetch_tier(&self) -> Result<UserTier, AppError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BackendEndpoints {
    pub rounds: String,
    pub scan: String,
    pub scores: String,
    pub courses: String,
    pub analyze: String,
    pub profile: String,
    pub tier: String,
}

impl BackendEndpoints {
    /// Default layout when every service hangs off one API base.
    #[must_use]
    pub fn from_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            rounds: format!("{base}/rounds"),
            scan: format!("{base}/scan"),
            scores: format!("{base}/scores"),
            courses: format!("{base}/courses"),
            analyze: format!("{base}/coaching/analyze"),
            profile: format!("{base}/profile"),
            tier: format!("{base}/tier"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendConfig {
    Http {
        endpoints: BackendEndpoints,
        bearer_token: Option<String>,
    },
    Fixture(PathBuf),
}

/// # Errors
///
/// Returns an error if the fixture file cannot be read or decoded, or the
/// HTTP client cannot be built.
pub fn backend_from_config(config: &BackendConfig) -> Result<Box<dyn GolfBackend>, AppError> {
    match config {
        BackendConfig::Http {
            endpoints,
            bearer_token,
        } => Ok(Box::new(HttpBackend::new(
            endpoints.clone(),
            bearer_token.clone(),
        )?)),
        BackendConfig::Fixture(path) => {
            let text = std::fs::read_to_string(path)?;
            let fixture = serde_json::from_str::<BackendFixture>(&text)?;
            Ok(Box::new(MemoryBackend::from_fixture(fixture)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_from_base_trim_trailing_slash() {
        let endpoints = BackendEndpoints::from_base("https://api.example.test/DEV/");
        assert_eq!(endpoints.rounds, "https://api.example.test/DEV/rounds");
        assert_eq!(endpoints.analyze, "https://api.example.test/DEV/coaching/analyze");
        assert_eq!(endpoints.tier, "https://api.example.test/DEV/tier");
    }
}
