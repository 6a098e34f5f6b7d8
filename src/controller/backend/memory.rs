use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::{Mutex, MutexGuard};

use super::GolfBackend;
use crate::error::AppError;
use crate::model::{Course, Profile, RoundRecord, ScanResponse, ScoreSubmission, UserTier};

/// Offline data for running the pages without the remote services.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BackendFixture {
    #[serde(default)]
    pub rounds: Vec<RoundRecord>,
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub scan_message: String,
    #[serde(default)]
    pub profile: Option<Profile>,
    #[serde(default)]
    pub tier: UserTier,
}

/// In-process backend serving fixture data. Submitted scores are kept and
/// show up in later `fetch_rounds` calls; each scan counts as an upload.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    rounds: Mutex<Vec<RoundRecord>>,
    courses: Vec<Course>,
    scan_message: String,
    submissions: Mutex<Vec<ScoreSubmission>>,
    profile: Mutex<Option<Profile>>,
    tier: Mutex<UserTier>,
}

fn locked<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, AppError> {
    mutex.lock().map_err(|e| AppError::Other(e.to_string()))
}

impl MemoryBackend {
    #[must_use]
    pub fn from_fixture(fixture: BackendFixture) -> Self {
        Self {
            rounds: Mutex::new(fixture.rounds),
            courses: fixture.courses,
            scan_message: fixture.scan_message,
            submissions: Mutex::new(Vec::new()),
            profile: Mutex::new(fixture.profile),
            tier: Mutex::new(fixture.tier),
        }
    }

    /// # Errors
    ///
    /// Returns an error if the submissions lock is poisoned.
    pub fn submissions(&self) -> Result<Vec<ScoreSubmission>, AppError> {
        Ok(locked(&self.submissions)?.clone())
    }
}

fn submission_as_round(submission: &ScoreSubmission) -> RoundRecord {
    submission
        .hole_scores
        .iter()
        .enumerate()
        .fold(RoundRecord::new(submission.date.clone()), |round, (idx, score)| {
            round.with_score(idx + 1, score.to_string())
        })
}

#[async_trait::async_trait]
impl GolfBackend for MemoryBackend {
    async fn fetch_rounds(&self) -> Result<Vec<RoundRecord>, AppError> {
        Ok(locked(&self.rounds)?.clone())
    }

    async fn request_scan(&self, image_url: &str) -> Result<ScanResponse, AppError> {
        if image_url.trim().is_empty() {
            return Ok(ScanResponse {
                status: "error".to_string(),
                message: "Error occurred".to_string(),
            });
        }
        locked(&self.tier)?.upload_count += 1;
        Ok(ScanResponse {
            status: "success".to_string(),
            message: self.scan_message.clone(),
        })
    }

    async fn submit_score(&self, submission: &ScoreSubmission) -> Result<(), AppError> {
        locked(&self.submissions)?.push(submission.clone());
        locked(&self.rounds)?.push(submission_as_round(submission));
        Ok(())
    }

    async fn fetch_courses(&self) -> Result<Vec<Course>, AppError> {
        Ok(self.courses.clone())
    }

    async fn analyze_course(&self, course: &Course) -> Result<Value, AppError> {
        let rounds = self.fetch_rounds().await?;
        Ok(json!({
            "courseID": course.course_id,
            "courseName": course.course_name,
            "roundsConsidered": rounds.len(),
            "tips": ["Focus on the holes with your highest average."],
        }))
    }

    async fn fetch_profile(&self) -> Result<Option<Profile>, AppError> {
        Ok(locked(&self.profile)?.clone())
    }

    async fn save_profile(&self, profile: &Profile) -> Result<(), AppError> {
        *locked(&self.profile)? = Some(profile.clone());
        Ok(())
    }

    async fn fetch_tier(&self) -> Result<UserTier, AppError> {
        Ok(locked(&self.tier)?.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ScoreForm;
    use crate::model::round::hole_field_name;

    #[tokio::test]
    async fn submitted_scores_are_recorded_as_rounds() {
        let backend = MemoryBackend::default();
        let mut form = ScoreForm::with_date("2025-02-25");
        for hole in 1..=18 {
            form.apply_field(&hole_field_name(hole), "5");
        }
        let submission = form.to_submission("user-1").unwrap();
        backend.submit_score(&submission).await.unwrap();

        let submissions = backend.submissions().unwrap();
        assert_eq!(submissions, vec![submission]);
        let rounds = backend.fetch_rounds().await.unwrap();
        assert_eq!(rounds.len(), 1);
        assert_eq!(rounds[0].score(18), Some("5"));
    }

    #[tokio::test]
    async fn scans_count_against_the_upload_tier() {
        let backend = MemoryBackend::default();
        assert_eq!(backend.fetch_tier().await.unwrap().upload_count, 0);

        backend.request_scan("https://img.example.test/a.jpg").await.unwrap();
        let failed = backend.request_scan(" ").await.unwrap();
        assert!(!failed.is_success());
        assert_eq!(backend.fetch_tier().await.unwrap().upload_count, 1);
        assert_eq!(backend.fetch_profile().await.unwrap(), None);
    }
}
