pub mod types;
pub mod validation;

use std::fs;

use crate::controller::backend::{BackendConfig, BackendEndpoints};
use crate::error::AppError;

pub use types::{AppConfig, Cli, DEFAULT_BIND, DEFAULT_LOG_FILTER, FileConfig};

/// Load config from CLI and optional TOML file.
///
/// # Errors
/// Returns an error if the config file is unreadable or invalid, or if neither
/// a fixture nor a full set of backend endpoints is configured.
pub fn load_config(cli: Cli) -> Result<AppConfig, AppError> {
    let file_config = match cli.config_toml.as_ref() {
        Some(path) => {
            let contents = fs::read_to_string(path).map_err(|e| {
                AppError::Config(format!("read config toml {}: {e}", path.display()))
            })?;
            toml::from_str::<FileConfig>(&contents)?
        }
        None => FileConfig::default(),
    };

    let backend = match cli.fixture_json.or(file_config.fixture_json) {
        Some(path) => BackendConfig::Fixture(path),
        None => {
            let base = cli.api_base.or(file_config.api_base);
            let defaults = base.as_deref().map(BackendEndpoints::from_base);
            let pick = |cli_value: Option<String>,
                        file_value: Option<String>,
                        default: Option<&String>,
                        flag: &str|
             -> Result<String, AppError> {
                cli_value
                    .or(file_value)
                    .or_else(|| default.cloned())
                    .ok_or_else(|| {
                        AppError::Config(format!("missing --{flag} (or --api-base / --fixture-json)"))
                    })
            };
            let endpoints = BackendEndpoints {
                rounds: pick(
                    cli.rounds_url,
                    file_config.endpoints.rounds,
                    defaults.as_ref().map(|d| &d.rounds),
                    "rounds-url",
                )?,
                scan: pick(
                    cli.scan_url,
                    file_config.endpoints.scan,
                    defaults.as_ref().map(|d| &d.scan),
                    "scan-url",
                )?,
                scores: pick(
                    cli.scores_url,
                    file_config.endpoints.scores,
                    defaults.as_ref().map(|d| &d.scores),
                    "scores-url",
                )?,
                courses: pick(
                    cli.courses_url,
                    file_config.endpoints.courses,
                    defaults.as_ref().map(|d| &d.courses),
                    "courses-url",
                )?,
                analyze: pick(
                    cli.analyze_url,
                    file_config.endpoints.analyze,
                    defaults.as_ref().map(|d| &d.analyze),
                    "analyze-url",
                )?,
                profile: pick(
                    cli.profile_url,
                    file_config.endpoints.profile,
                    defaults.as_ref().map(|d| &d.profile),
                    "profile-url",
                )?,
                tier: pick(
                    cli.tier_url,
                    file_config.endpoints.tier,
                    defaults.as_ref().map(|d| &d.tier),
                    "tier-url",
                )?,
            };
            BackendConfig::Http {
                endpoints,
                bearer_token: cli
                    .bearer_token
                    .or(file_config.bearer_token)
                    .filter(|token| !token.trim().is_empty()),
            }
        }
    };

    Ok(AppConfig {
        bind: cli
            .bind
            .or(file_config.bind)
            .unwrap_or_else(|| DEFAULT_BIND.to_string()),
        backend,
        user_id: cli
            .user_id
            .or(file_config.user_id)
            .filter(|id| !id.trim().is_empty()),
        log_filter: cli
            .log_filter
            .or(file_config.log_filter)
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
    })
}
