//! App-wide constants.
//!
//! Centralises the tool name, endpoint, config paths and environment
//! variable names so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "userfetch";

/// Crate version, baked in at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `User-Agent` header sent with every request.
pub const USER_AGENT: &str = concat!("userfetch/", env!("CARGO_PKG_VERSION"));

/// Upstream user collection endpoint.
pub const USERS_API_URL: &str = "https://randomuser.me/api/";

/// Records requested per page. Not configurable.
pub const PAGE_SIZE: u32 = 20;

/// Field selector covering everything a [`crate::models::UserSummary`] needs.
pub const SUMMARY_FIELDS: &str = "name,email,picture";

/// Local config filename (looked up in the working directory).
pub const CONFIG_FILENAME: &str = ".userfetch.toml";

/// Directory name under `~/.config/` for the global config.
pub const CONFIG_DIR: &str = "userfetch";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_BASE_URL: &str = "USERFETCH_BASE_URL";
pub const ENV_INCLUDE: &str = "USERFETCH_INCLUDE";
pub const ENV_TIMEOUT: &str = "USERFETCH_TIMEOUT";
