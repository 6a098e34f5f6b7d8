use serde::{Deserialize, Serialize};

pub const FREE_TIER: &str = "free";
pub const FREE_UPLOAD_LIMIT: u64 = 3;

/// The user's profile as stored by the profile service.
///
/// Field names double as the settings form's input names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub email: String,
    pub full_name: String,
    pub home_course: String,
    pub tee_box: String,
    pub scoring_type: String,
    pub league_preference: String,
}

impl Profile {
    /// A profile counts as set up once it has an email or a name.
    #[must_use]
    pub fn is_set_up(&self) -> bool {
        !self.email.trim().is_empty() || !self.full_name.trim().is_empty()
    }

    #[must_use]
    pub fn trimmed(self) -> Self {
        Self {
            email: self.email.trim().to_string(),
            full_name: self.full_name.trim().to_string(),
            home_course: self.home_course.trim().to_string(),
            tee_box: self.tee_box.trim().to_string(),
            scoring_type: self.scoring_type.trim().to_string(),
            league_preference: self.league_preference.trim().to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTier {
    tier: Option<String>,
    upload_count: Option<u64>,
}

/// Subscription level and how many scorecards the user has uploaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawTier", rename_all = "camelCase")]
pub struct UserTier {
    pub tier: String,
    pub upload_count: u64,
}

impl Default for UserTier {
    fn default() -> Self {
        Self {
            tier: FREE_TIER.to_string(),
            upload_count: 0,
        }
    }
}

impl From<RawTier> for UserTier {
    fn from(raw: RawTier) -> Self {
        Self {
            tier: raw
                .tier
                .filter(|tier| !tier.trim().is_empty())
                .unwrap_or_else(|| FREE_TIER.to_string()),
            upload_count: raw.upload_count.unwrap_or_default(),
        }
    }
}

impl UserTier {
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.tier.eq_ignore_ascii_case(FREE_TIER)
    }

    #[must_use]
    pub fn is_upload_limit_reached(&self) -> bool {
        self.is_free() && self.upload_count >= FREE_UPLOAD_LIMIT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_uses_backend_field_names() {
        let profile: Profile = serde_json::from_str(
            r#"{"email":"a@b.test","fullName":"Connor","homeCourse":"Bandon","extra":1}"#,
        )
        .unwrap();
        assert!(profile.is_set_up());
        assert_eq!(profile.home_course, "Bandon");
        assert!(profile.tee_box.is_empty());

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["fullName"], "Connor");
        assert_eq!(json["leaguePreference"], "");
        assert!(!Profile::default().is_set_up());
    }

    #[test]
    fn tier_defaults_to_free_and_limits_uploads() {
        let tier: UserTier = serde_json::from_str(r#"{"tier":null}"#).unwrap();
        assert_eq!(tier, UserTier::default());
        assert!(!tier.is_upload_limit_reached());

        let tier: UserTier = serde_json::from_str(r#"{"tier":"free","uploadCount":3}"#).unwrap();
        assert!(tier.is_upload_limit_reached());

        let tier: UserTier = serde_json::from_str(r#"{"tier":"pro","uploadCount":40}"#).unwrap();
        assert!(!tier.is_free());
        assert!(!tier.is_upload_limit_reached());
    }
}
