//! Steps command - hop count between two labelled nodes
//!
//! `hops steps alice bob` prints how many links separate the two, or says
//! why no count exists (dead end or unreachable).

use super::DataSource;
use crate::output::{Output, OutputFormat, TableDisplay};
use anyhow::Result;
use colored::Colorize;
use hops_core::{HopDistance, StepsAnswer};

impl TableDisplay for StepsAnswer {
    fn to_table(&self) -> String {
        match self.distance {
            HopDistance::Hops(n) => format!(
                "{} {} {}\nsteps = {}",
                self.from.label.cyan(),
                "->".dimmed(),
                self.to.label.cyan(),
                n.to_string().bold()
            ),
            HopDistance::DeadEnd => format!(
                "{} '{}' does not link to anybody (0 reachable nodes)",
                "DEAD END".yellow().bold(),
                self.from.label
            ),
            HopDistance::Unreachable => format!(
                "{} It is impossible to reach '{}' from '{}' by following the links",
                "UNREACHABLE".yellow().bold(),
                self.to.label,
                self.from.label
            ),
        }
    }
}

/// Run the steps command
pub fn run(
    source: &DataSource,
    from: &str,
    to: &str,
    format: OutputFormat,
) -> Result<()> {
    let dataset = source.load()?;
    let answer = dataset.steps(from.trim(), to.trim())?;
    Output::new(answer, format).render()
}
