//! Command implementations for the hops CLI
//!
//! Each command module provides a `run` function that executes the command
//! logic against a dataset described by [`DataSource`].

pub mod info;
pub mod path;
pub mod shell;
pub mod steps;

use anyhow::{Context, Result};
use hops_core::{Dataset, IntegrityPolicy, LabelCase};
use std::path::PathBuf;

/// Where the dataset comes from and how it is checked and matched.
#[derive(Debug, Clone)]
pub struct DataSource {
    pub edges: PathBuf,
    pub labels: PathBuf,
    pub integrity: IntegrityPolicy,
    pub case: LabelCase,
}

impl DataSource {
    /// Load both files. Any failure here is fatal for the process.
    pub fn load(&self) -> Result<Dataset> {
        Dataset::load(&self.edges, &self.labels, self.integrity, self.case).with_context(|| {
            format!(
                "Failed to load dataset from {} and {}",
                self.edges.display(),
                self.labels.display()
            )
        })
    }
}
