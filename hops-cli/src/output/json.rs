//! JSON output formatting for machine-readable output.

use super::OutputConfig;
use serde::Serialize;

/// JSON output formatter
pub struct JsonOutput;

impl JsonOutput {
    /// Format data as JSON string
    ///
    /// Uses pretty-printing by default. When `config.compact` is true,
    /// outputs minified JSON on a single line.
    pub fn format<T: Serialize + ?Sized>(data: &T, config: &OutputConfig) -> String {
        if config.compact {
            serde_json::to_string(data).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
        } else {
            serde_json::to_string_pretty(data)
                .unwrap_or_else(|e| format!("{{\n  \"error\": \"{}\"\n}}", e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use hops_core::HopDistance;

    #[test]
    fn test_format_pretty() {
        let config = OutputConfig::new(OutputFormat::Json);
        let output = JsonOutput::format(&HopDistance::Hops(4), &config);

        assert!(output.contains("\"outcome\": \"hops\""));
        assert!(output.contains('\n'));
    }

    #[test]
    fn test_format_compact() {
        let config = OutputConfig::new(OutputFormat::Json).compact();
        let output = JsonOutput::format(&HopDistance::Unreachable, &config);

        assert_eq!(output, r#"{"outcome":"unreachable"}"#);
    }
}
