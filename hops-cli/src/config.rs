//! Configuration loading from `.hopsrc.toml`.
//!
//! Configuration is optional - hops falls back to defaults when no file
//! exists. Command-line flags always override values from the file.
//!
//! # Example Configuration
//!
//! ```toml
//! [data]
//! edges = "wikipedia_links/links.txt"
//! labels = "wikipedia_links/pages.txt"
//!
//! [query]
//! mode = "path"
//! lowercase_input = true
//! on_unknown_label = "reprompt"
//! strict = false
//!
//! [output]
//! format = "json"
//! color = false
//! ```

use crate::output::OutputFormat;
use clap::ValueEnum;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE: &str = ".hopsrc.toml";

/// Edge file used when neither flag nor config names one.
pub const DEFAULT_EDGES: &str = "links.txt";

/// Label file used when neither flag nor config names one.
pub const DEFAULT_LABELS: &str = "nicknames.txt";

/// Root configuration structure loaded from `.hopsrc.toml`.
#[derive(Debug, Deserialize, Default)]
pub struct HopsConfig {
    /// Input file locations.
    #[serde(default)]
    pub data: DataConfig,

    /// Query behaviour.
    #[serde(default)]
    pub query: QueryConfig,

    /// Output formatting preferences.
    #[serde(default)]
    pub output: OutputSettings,
}

/// Input file locations, relative to the working directory.
#[derive(Debug, Deserialize, Default)]
pub struct DataConfig {
    #[serde(default)]
    pub edges: Option<PathBuf>,

    #[serde(default)]
    pub labels: Option<PathBuf>,
}

/// What the interactive shell answers with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum QueryMode {
    /// Hop count only
    #[default]
    Steps,
    /// Shortest path and its hop count
    Path,
}

/// What the shell does when a typed label is unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownLabelPolicy {
    /// Report the problem and ask again.
    #[default]
    Reprompt,
    /// Report the problem and exit with a failure code.
    Exit,
}

/// Query behaviour settings.
#[derive(Debug, Deserialize)]
pub struct QueryConfig {
    /// Default shell mode.
    #[serde(default)]
    pub mode: QueryMode,

    /// Lower-case typed labels before lookup.
    ///
    /// Default: `true`
    #[serde(default = "default_lowercase_input")]
    pub lowercase_input: bool,

    /// Shell reaction to unknown labels.
    #[serde(default)]
    pub on_unknown_label: UnknownLabelPolicy,

    /// Refuse to start when edge data references unlabelled nodes.
    #[serde(default)]
    pub strict: bool,
}

fn default_lowercase_input() -> bool {
    true
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            mode: QueryMode::default(),
            lowercase_input: true,
            on_unknown_label: UnknownLabelPolicy::default(),
            strict: false,
        }
    }
}

/// Output formatting preferences.
#[derive(Debug, Deserialize, Default)]
pub struct OutputSettings {
    /// Default output format: `table` or `json`.
    #[serde(default)]
    pub format: Option<String>,

    /// Whether to use colored output. Unset means auto-detect.
    #[serde(default)]
    pub color: Option<bool>,
}

impl HopsConfig {
    /// Load configuration from `.hopsrc.toml` in the given directory.
    ///
    /// A missing file yields defaults. Read or parse failures are logged as
    /// warnings and also yield defaults.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_FILE);
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse {}: {}", CONFIG_FILE, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read {}: {}", CONFIG_FILE, e);
                }
            }
        }
        Self::default()
    }

    /// Edge file path, with the built-in default.
    pub fn edges_path(&self) -> PathBuf {
        self.data
            .edges
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_EDGES))
    }

    /// Label file path, with the built-in default.
    pub fn labels_path(&self) -> PathBuf {
        self.data
            .labels
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LABELS))
    }

    pub fn default_mode(&self) -> QueryMode {
        self.query.mode
    }

    pub fn lowercase_input(&self) -> bool {
        self.query.lowercase_input
    }

    pub fn unknown_label_policy(&self) -> UnknownLabelPolicy {
        self.query.on_unknown_label
    }

    pub fn strict(&self) -> bool {
        self.query.strict
    }

    /// Get the default output format, if configured.
    pub fn default_format(&self) -> Option<&str> {
        self.output.format.as_deref()
    }

    /// Configured output format; an unknown name logs a warning and falls
    /// back to the default.
    pub fn output_format(&self) -> OutputFormat {
        match self.default_format() {
            Some(name) => name.parse().unwrap_or_else(|e| {
                tracing::warn!("Ignoring [output] format in {}: {}", CONFIG_FILE, e);
                OutputFormat::default()
            }),
            None => OutputFormat::default(),
        }
    }

    /// Returns the configured value, or `None` to use auto-detection.
    pub fn use_color(&self) -> Option<bool> {
        self.output.color
    }
}
