//! userfetch — paginated user-record client (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod config;
pub mod constants;
pub mod env;
pub mod fetcher;
pub mod models;
pub mod output;

pub use fetcher::{FetchError, UserFetcher, UserSource, fetch_users};
pub use models::{UserRecord, UserSummary};
