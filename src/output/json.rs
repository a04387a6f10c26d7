//! JSON output renderer.
//!
//! Outputs the page as a pretty-printed array, in upstream order.

use serde::Serialize;

use crate::models::UserView;
use crate::output::OutputRenderer;

/// JSON output renderer.
pub struct JsonRenderer;

impl OutputRenderer for JsonRenderer {
    fn render<U: UserView + Serialize>(&self, users: &[U]) -> String {
        let mut output = serde_json::to_string_pretty(users).unwrap_or_else(|_| "[]".to_string());
        output.push('\n');
        output
    }
}
