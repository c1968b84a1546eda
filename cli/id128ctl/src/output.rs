//! Output formatting for CLI commands.

use colored::Colorize;
use serde::Serialize;

use plfm_id128::Id128;

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Table,
    /// JSON format.
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Self {
        match s {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Table,
        }
    }
}

/// Both text forms of an id, plus where it came from.
#[derive(Debug, Serialize)]
pub struct IdView {
    pub plain: String,
    pub uuid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl IdView {
    pub fn new(id: &Id128) -> Self {
        Self {
            plain: id.to_plain().to_string(),
            uuid: id.to_uuid().to_string(),
            path: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// Render a single item as pretty JSON.
pub fn render_json<T: Serialize>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string())
}

/// Print a single item as pretty JSON.
pub fn print_json<T: Serialize>(data: &T) {
    println!("{}", render_json(data));
}

/// Print an id view in the specified format.
pub fn print_id(view: &IdView, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(view),
        OutputFormat::Table => {
            if let Some(path) = &view.path {
                println!("{} {}", "path:".dimmed(), path);
            }
            println!("{} {}", "plain:".dimmed(), view.plain);
            println!("{} {}", "uuid:".dimmed(), view.uuid);
        }
    }
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "Success:".green().bold(), message);
}
