//! Output renderers: terminal and JSON.

pub mod json;
pub mod terminal;

use clap::ValueEnum;
use serde::Serialize;

use crate::fetcher::{FetchError, UserSource};
use crate::models::UserView;

/// Trait for rendering a page of users to an output format.
pub trait OutputRenderer {
    /// Render users to a string.
    fn render<U: UserView + Serialize>(&self, users: &[U]) -> String;
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl OutputFormat {
    /// Render users using the renderer for this format.
    pub fn render<U: UserView + Serialize>(&self, users: &[U]) -> String {
        match self {
            OutputFormat::Terminal => terminal::TerminalRenderer.render(users),
            OutputFormat::Json => json::JsonRenderer.render(users),
        }
    }
}

/// What to fetch for one rendered listing.
#[derive(Debug, Clone, Default)]
pub struct PageRequest {
    pub page: u32,
    pub include_fields: Option<String>,
    /// Fetch the summary projection instead of full records.
    pub summary: bool,
}

/// Fetch one page from `source` and render it.
pub async fn render_page(
    source: &dyn UserSource,
    request: &PageRequest,
    format: OutputFormat,
) -> Result<String, FetchError> {
    if request.summary {
        let users = source.summaries(request.page).await?;
        Ok(format.render(&users))
    } else {
        let users = source
            .page(request.page, request.include_fields.as_deref())
            .await?;
        Ok(format.render(&users))
    }
}
