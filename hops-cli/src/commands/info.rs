//! Info command - size and health of the loaded dataset

use super::DataSource;
use crate::output::{Output, OutputConfig, OutputFormat, Outputter, TableOutput};
use anyhow::Result;
use hops_core::DatasetSummary;
use serde::Serialize;

/// Dataset summary together with where it was loaded from.
#[derive(Debug, Serialize)]
pub struct InfoReport {
    pub edges_file: String,
    pub labels_file: String,
    #[serde(flatten)]
    pub summary: DatasetSummary,
}

impl Outputter for InfoReport {
    fn to_table(&self, config: &OutputConfig) -> String {
        let pairs = [
            ("Edges file", self.edges_file.clone()),
            ("Labels file", self.labels_file.clone()),
            ("Nodes", self.summary.node_count.to_string()),
            ("Edges", self.summary.edge_count.to_string()),
            ("Labels", self.summary.label_count.to_string()),
            ("Dead ends", self.summary.dead_end_count.to_string()),
            ("Unlabelled", self.summary.unlabeled_count.to_string()),
        ];
        TableOutput::format_key_value(&pairs, config)
    }
}

/// Run the info command
pub fn run(source: &DataSource, format: OutputFormat) -> Result<()> {
    let dataset = source.load()?;
    let report = InfoReport {
        edges_file: source.edges.display().to_string(),
        labels_file: source.labels.display().to_string(),
        summary: dataset.summary(),
    };
    Output::new(report, format).render()
}
