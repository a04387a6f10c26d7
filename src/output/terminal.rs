//! Terminal renderer: one styled line per user, then a count.

use colored::Colorize;
use serde::Serialize;

use crate::models::UserView;
use crate::output::OutputRenderer;

/// Terminal output renderer with colored, flowing text.
pub struct TerminalRenderer;

impl OutputRenderer for TerminalRenderer {
    fn render<U: UserView + Serialize>(&self, users: &[U]) -> String {
        if users.is_empty() {
            return format!("{}", "  No users returned.\n".yellow());
        }

        let mut output = String::new();
        for (index, user) in users.iter().enumerate() {
            let name = user
                .display_name()
                .unwrap_or_else(|| "(no name)".to_string());
            output.push_str(&format!(
                " {:>3}  {}",
                (index + 1).to_string().dimmed(),
                name.bold()
            ));
            if let Some(email) = user.email() {
                output.push_str(&format!("  {}", email.cyan()));
            }
            output.push('\n');
            if let Some(thumbnail) = user.thumbnail() {
                output.push_str(&format!("       {} {}\n", "→".dimmed(), thumbnail.dimmed()));
            }
        }

        output.push_str(&format!("{}\n", "───────────────────────────────────".dimmed()));
        output.push_str(&format!(
            " {} {}\n",
            users.len().to_string().bold(),
            if users.len() == 1 { "user" } else { "users" }
        ));
        output
    }
}
