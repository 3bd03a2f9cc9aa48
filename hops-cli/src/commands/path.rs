//! Path command - one shortest path between two labelled nodes

use super::DataSource;
use crate::output::{Output, OutputFormat, TableDisplay};
use anyhow::Result;
use colored::Colorize;
use hops_core::PathAnswer;

impl TableDisplay for PathAnswer {
    fn to_table(&self) -> String {
        match &self.path {
            Some(labels) => {
                let arrow = format!(" {} ", "->".dimmed());
                format!(
                    "steps taken: {}\npath: {}",
                    self.hops.to_string().bold(),
                    labels.join(&arrow)
                )
            }
            None => format!(
                "{} no path between '{}' and '{}'",
                "NO PATH".yellow().bold(),
                self.from.label,
                self.to.label
            ),
        }
    }
}

/// Run the path command
pub fn run(
    source: &DataSource,
    from: &str,
    to: &str,
    format: OutputFormat,
) -> Result<()> {
    let dataset = source.load()?;
    let answer = dataset.path(from.trim(), to.trim())?;
    Output::new(answer, format).render()
}
