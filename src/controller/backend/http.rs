use reqwest::{Client, RequestBuilder};
use serde_json::{Value, json};
use std::time::Duration;

use super::{BackendEndpoints, GolfBackend};
use crate::error::AppError;
use crate::model::{Course, Profile, RoundRecord, ScanResponse, ScoreSubmission, UserTier};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct HttpBackend {
    client: Client,
    endpoints: BackendEndpoints,
    bearer_token: Option<String>,
}

impl HttpBackend {
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(endpoints: BackendEndpoints, bearer_token: Option<String>) -> Result<Self, AppError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            endpoints,
            bearer_token,
        })
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.bearer_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[async_trait::async_trait]
impl GolfBackend for HttpBackend {
    async fn fetch_rounds(&self) -> Result<Vec<RoundRecord>, AppError> {
        let resp = self
            .authorized(self.client.get(&self.endpoints.rounds))
            .send()
            .await?
            .error_for_status()?;
        let body: Value = resp.json().await?;
        Ok(rounds_from_body(body))
    }

    async fn request_scan(&self, image_url: &str) -> Result<ScanResponse, AppError> {
        let resp = self
            .authorized(self.client.post(&self.endpoints.scan))
            .json(&json!({ "imageUrl": image_url }))
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.json::<ScanResponse>().await?)
    }

    async fn submit_score(&self, submission: &ScoreSubmission) -> Result<(), AppError> {
        self.authorized(self.client.post(&self.endpoints.scores))
            .json(submission)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn fetch_courses(&self) -> Result<Vec<Course>, AppError> {
        let resp = self
            .authorized(self.client.get(&self.endpoints.courses))
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.json::<Vec<Course>>().await?)
    }

    async fn analyze_course(&self, course: &Course) -> Result<Value, AppError> {
        let resp = self
            .authorized(self.client.post(&self.endpoints.analyze))
            .json(course)
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.json::<Value>().await?)
    }

    async fn fetch_profile(&self) -> Result<Option<Profile>, AppError> {
        let resp = self
            .authorized(self.client.get(&self.endpoints.profile))
            .send()
            .await?
            .error_for_status()?;
        let body: Value = resp.json().await?;
        profile_from_body(body)
    }

    async fn save_profile(&self, profile: &Profile) -> Result<(), AppError> {
        self.authorized(self.client.post(&self.endpoints.profile))
            .json(profile)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn fetch_tier(&self) -> Result<UserTier, AppError> {
        let resp = self
            .authorized(self.client.get(&self.endpoints.tier))
            .send()
            .await?
            .error_for_status()?;
        let body: Value = resp.json().await?;
        tier_from_body(body)
    }
}

/// The user record inside a user-table response. The record may be wrapped in
/// a `body` string holding JSON and may come as a one-element array.
fn user_record(body: Value) -> Result<Option<Value>, AppError> {
    let body = match body {
        Value::Object(mut map) => match map.remove("body") {
            Some(Value::String(inner)) => serde_json::from_str(&inner)?,
            Some(inner) => inner,
            None => Value::Object(map),
        },
        other => other,
    };
    Ok(match body {
        Value::Array(items) => items.into_iter().next(),
        Value::Object(map) => Some(Value::Object(map)),
        _ => None,
    })
}

/// # Errors
///
/// Returns an error if a wrapped body is not valid JSON.
pub fn profile_from_body(body: Value) -> Result<Option<Profile>, AppError> {
    let Some(record) = user_record(body)? else {
        return Ok(None);
    };
    let profile: Profile = serde_json::from_value(record)?;
    Ok(profile.is_set_up().then_some(profile))
}

/// # Errors
///
/// Returns an error if the response carries no user record.
pub fn tier_from_body(body: Value) -> Result<UserTier, AppError> {
    let record = user_record(body)?
        .ok_or_else(|| AppError::Parse("user record missing from tier response".to_string()))?;
    Ok(serde_json::from_value(record)?)
}

/// Rounds from the data source body. Anything but an array means no rounds,
/// and array entries that are not objects are skipped.
#[must_use]
pub fn rounds_from_body(body: Value) -> Vec<RoundRecord> {
    let Value::Array(items) = body else {
        tracing::warn!("round data source returned a non-array body");
        return Vec::new();
    };
    items
        .iter()
        .filter_map(Value::as_object)
        .map(RoundRecord::from_json_object)
        .collect()
}
