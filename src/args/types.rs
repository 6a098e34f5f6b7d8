use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;

use crate::controller::backend::{BackendConfig, BackendEndpoints};

pub const DEFAULT_BIND: &str = "0.0.0.0:8081";
pub const DEFAULT_LOG_FILTER: &str = "golf_smart=info,actix_web=info";

#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Golf score entry, scorecard scans and insights", long_about = None)]
pub struct Cli {
    /// Optional TOML file; command line values win over it.
    #[arg(long, value_name = "CONFIG_TOML", value_parser = crate::args::validation::check_readable_file)]
    pub config_toml: Option<PathBuf>,
    /// Address the web server listens on.
    #[arg(long, value_name = "ADDR")]
    pub bind: Option<String>,
    /// Base URL of the backend API; individual endpoints default to paths under it.
    #[arg(long, value_name = "URL", value_parser = crate::args::validation::check_http_url)]
    pub api_base: Option<String>,
    #[arg(long, value_name = "URL", value_parser = crate::args::validation::check_http_url)]
    pub rounds_url: Option<String>,
    #[arg(long, value_name = "URL", value_parser = crate::args::validation::check_http_url)]
    pub scan_url: Option<String>,
    #[arg(long, value_name = "URL", value_parser = crate::args::validation::check_http_url)]
    pub scores_url: Option<String>,
    #[arg(long, value_name = "URL", value_parser = crate::args::validation::check_http_url)]
    pub courses_url: Option<String>,
    #[arg(long, value_name = "URL", value_parser = crate::args::validation::check_http_url)]
    pub analyze_url: Option<String>,
    #[arg(long, value_name = "URL", value_parser = crate::args::validation::check_http_url)]
    pub profile_url: Option<String>,
    #[arg(long, value_name = "URL", value_parser = crate::args::validation::check_http_url)]
    pub tier_url: Option<String>,
    /// Already-issued id token sent as `Authorization: Bearer`.
    #[arg(long, value_name = "TOKEN", env = "GOLF_SMART_BEARER_TOKEN", hide_env_values = true)]
    pub bearer_token: Option<String>,
    /// User id stamped on submitted rounds.
    #[arg(long, value_name = "USER_ID", env = "GOLF_SMART_USER_ID")]
    pub user_id: Option<String>,
    /// Serve rounds, courses, scans and the profile from a local JSON fixture instead of the API.
    #[arg(long, value_name = "FIXTURE_JSON", value_parser = crate::args::validation::check_readable_file)]
    pub fixture_json: Option<PathBuf>,
    /// tracing filter, used when RUST_LOG is unset.
    #[arg(long, value_name = "FILTER")]
    pub log_filter: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FileEndpoints {
    pub rounds: Option<String>,
    pub scan: Option<String>,
    pub scores: Option<String>,
    pub courses: Option<String>,
    pub analyze: Option<String>,
    pub profile: Option<String>,
    pub tier: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub bind: Option<String>,
    pub api_base: Option<String>,
    #[serde(default)]
    pub endpoints: FileEndpoints,
    pub bearer_token: Option<String>,
    pub user_id: Option<String>,
    pub fixture_json: Option<PathBuf>,
    pub log_filter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind: String,
    pub backend: BackendConfig,
    pub user_id: Option<String>,
    pub log_filter: String,
}

impl AppConfig {
    #[must_use]
    pub fn endpoints(&self) -> Option<&BackendEndpoints> {
        match &self.backend {
            BackendConfig::Http { endpoints, .. } => Some(endpoints),
            BackendConfig::Fixture(_) => None,
        }
    }
}
