//! Clap argument types and config overrides.

use clap::Parser;

use userfetch::config::Config;
use userfetch::output::{OutputFormat, PageRequest};

/// Fetch one page of users from the randomuser.me API.
#[derive(Parser, Debug)]
#[command(name = userfetch::constants::APP_NAME, version = userfetch::constants::VERSION)]
pub struct Cli {
    /// Page to fetch (1-based, 20 users per page).
    #[arg(long, short, default_value_t = 1)]
    pub page: u32,

    /// Comma-separated field selector forwarded as `inc`.
    /// Example: --inc name,email,picture
    #[arg(long = "inc", value_name = "FIELDS")]
    pub include_fields: Option<String>,

    /// Fetch only name, email and thumbnail for each user.
    #[arg(long, default_value_t = false, conflicts_with = "include_fields")]
    pub summary: bool,

    /// Override the API endpoint.
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds (default: none).
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Output format.
    #[arg(long, default_value = "terminal")]
    pub format: OutputFormat,
}

impl Cli {
    /// Apply flags on top of the loaded config (CLI has highest priority).
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(ref url) = self.base_url {
            config.api.base_url = url.clone();
        }
        if let Some(secs) = self.timeout {
            config.api.timeout_secs = Some(secs);
        }
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest {
            page: self.page,
            include_fields: self.include_fields.clone(),
            summary: self.summary,
        }
    }
}
