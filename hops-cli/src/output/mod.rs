//! Output formatting for the hops CLI
//!
//! Every command result can be rendered as a human-readable table or as JSON
//! for machine consumption. Colors follow `colored`'s TTY detection unless
//! overridden from config.

use clap::ValueEnum;
use serde::Serialize;
use std::str::FromStr;

mod json;
mod table;

pub use self::json::JsonOutput;
pub use self::table::TableOutput;

/// Output format for CLI results
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format (default)
    #[default]
    Table,
    /// JSON format for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: '{}'", s)),
        }
    }
}

/// Configuration for output rendering
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// The output format to use
    pub format: OutputFormat,
    /// Compact mode (single-line JSON, borderless tables)
    pub compact: bool,
}

impl OutputConfig {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            compact: false,
        }
    }

    /// Builder: enable compact mode
    pub fn compact(mut self) -> Self {
        self.compact = true;
        self
    }
}

/// Trait for types that can be formatted as output
pub trait Outputter: Serialize + Sized {
    /// Render as table format
    fn to_table(&self, config: &OutputConfig) -> String;

    /// Render as JSON format
    fn to_json(&self, config: &OutputConfig) -> String {
        JsonOutput::format(self, config)
    }

    /// Render using the format specified in config
    fn render(&self, config: &OutputConfig) -> String {
        match config.format {
            OutputFormat::Table => self.to_table(config),
            OutputFormat::Json => self.to_json(config),
        }
    }
}

/// Result wrapper for formatted output with automatic format selection
pub struct Output<T> {
    data: T,
    config: OutputConfig,
}

impl<T: Outputter> Output<T> {
    pub fn new(data: T, format: OutputFormat) -> Self {
        Self {
            data,
            config: OutputConfig::new(format),
        }
    }

    /// Create a new output wrapper with full config
    pub fn with_config(data: T, config: OutputConfig) -> Self {
        Self { data, config }
    }

    /// Render the output to stdout
    pub fn render(&self) -> anyhow::Result<()> {
        println!("{}", self.render_to_string());
        Ok(())
    }

    /// Get the rendered string without printing
    pub fn render_to_string(&self) -> String {
        self.data.render(&self.config)
    }
}

/// Simple trait for types whose table form ignores render settings
pub trait TableDisplay: Serialize {
    fn to_table(&self) -> String;
}

impl<T: TableDisplay + Serialize> Outputter for T {
    fn to_table(&self, _config: &OutputConfig) -> String {
        TableDisplay::to_table(self)
    }
}

// ============================================================================
// Built-in message types
// ============================================================================

/// Simple error message
#[derive(Debug, Serialize)]
pub struct ErrorMessage {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: Some(details.into()),
        }
    }
}

impl TableDisplay for ErrorMessage {
    fn to_table(&self) -> String {
        use colored::Colorize;
        let mut output = format!("{} {}", "ERROR:".red().bold(), self.message);
        if let Some(details) = &self.details {
            output.push_str(&format!("\n{}", details.dimmed()));
        }
        output
    }
}
