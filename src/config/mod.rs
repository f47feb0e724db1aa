pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "swapi-planets")]
#[command(about = "Fetch a Star Wars planet and print its normalized record")]
pub struct CliConfig {
    #[arg(long, default_value = "https://swapi.dev/api/planets/1")]
    pub url: String,

    #[arg(long, help = "Request timeout in seconds (no timeout when omitted)")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, default_value = toml_config::DEFAULT_USER_AGENT)]
    pub user_agent: String,

    #[arg(long, help = "Load source settings from a TOML file instead of flags")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Pretty-print the JSON output")]
    pub pretty: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines on stderr")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.url
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("url", &self.url)?;
        if let Some(timeout) = self.timeout_seconds {
            validate_range("timeout_seconds", timeout, 1, 300)?;
        }
        validate_non_empty_string("user_agent", &self.user_agent)
    }
}
