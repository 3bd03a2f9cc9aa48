//! Plain-text loaders for edge and label files.
//!
//! Both formats are one record per line with whitespace-separated tokens:
//!
//! ```text
//! # edges            # labels
//! 1 2                1 alice
//! 2 3                2 bob
//! ```
//!
//! Only the first two tokens of a line are used. Blank lines are skipped.

use crate::error::{HopsError, Result};
use std::path::Path;

/// Parse an edge list: `source target` per line.
pub fn parse_edges(text: &str, source_name: &str) -> Result<Vec<(String, String)>> {
    parse_pairs(text, source_name)
}

/// Parse a label list: `node label` per line.
pub fn parse_labels(text: &str, source_name: &str) -> Result<Vec<(String, String)>> {
    parse_pairs(text, source_name)
}

/// Read and parse an edge file.
pub fn read_edge_file(path: &Path) -> Result<Vec<(String, String)>> {
    let text = read_text(path)?;
    let edges = parse_edges(&text, &path.display().to_string())?;
    tracing::debug!(path = %path.display(), edges = edges.len(), "loaded edge file");
    Ok(edges)
}

/// Read and parse a label file.
pub fn read_label_file(path: &Path) -> Result<Vec<(String, String)>> {
    let text = read_text(path)?;
    let labels = parse_labels(&text, &path.display().to_string())?;
    tracing::debug!(path = %path.display(), labels = labels.len(), "loaded label file");
    Ok(labels)
}

fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| HopsError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn parse_pairs(text: &str, source_name: &str) -> Result<Vec<(String, String)>> {
    let mut pairs = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let mut tokens = line.split_whitespace();
        let first = match tokens.next() {
            Some(token) => token,
            None => continue,
        };
        let second = tokens.next().ok_or_else(|| HopsError::Parse {
            source_name: source_name.to_string(),
            line: i + 1,
            content: line.trim().to_string(),
        })?;
        pairs.push((first.to_string(), second.to_string()));
    }

    Ok(pairs)
}
