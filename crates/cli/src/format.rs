//! Output → human/json/raw string formatting.
//!
//! Three modes:
//! - **Human** (default): typed, e.g. `"hello-world"`, `(version) 2.0.0-beta1`, `(nil)`
//! - **JSON** (`--json`): `serde_json::to_string_pretty`
//! - **Raw** (`--raw`): Bare values, no quotes, no type prefixes

use portalkit_core::Version;
use serde::Serialize;

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
    Raw,
}

/// Result of a command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Output {
    Normalized {
        id: String,
    },
    Version {
        version: Option<Version>,
    },
    AutoGenerated {
        id: String,
        generated: bool,
    },
}

/// Format a successful output.
pub fn format_output(output: &Output, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => format_json(output),
        OutputMode::Raw => format_raw(output),
        OutputMode::Human => format_human(output),
    }
}

/// Format an error.
pub fn format_error(err: &dyn std::fmt::Display, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&serde_json::json!({
            "error": err.to_string()
        }))
        .unwrap_or_else(|_| format!("{{\"error\": \"{}\"}}", err)),
        OutputMode::Raw => err.to_string(),
        OutputMode::Human => format!("(error) {}", err),
    }
}

fn format_json(output: &Output) -> String {
    serde_json::to_string_pretty(output).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}

fn format_human(output: &Output) -> String {
    match output {
        Output::Normalized { id } => format!("\"{}\"", id),
        Output::Version { version: Some(v) } => format!("(version) {}", v),
        Output::Version { version: None } => "(nil)".to_string(),
        Output::AutoGenerated { generated, .. } => format!("(boolean) {}", generated),
    }
}

fn format_raw(output: &Output) -> String {
    match output {
        Output::Normalized { id } => id.clone(),
        Output::Version { version: Some(v) } => v.to_string(),
        Output::Version { version: None } => String::new(),
        Output::AutoGenerated { generated, .. } => generated.to_string(),
    }
}
