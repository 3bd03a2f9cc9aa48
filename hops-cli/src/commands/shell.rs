//! Shell command - interactive query loop
//!
//! Prompts for a source label, then a target label, prints the answer and
//! starts over until input ends. Unknown labels either re-prompt or stop the
//! session with a failure, depending on [`UnknownLabelPolicy`]. Case matching
//! is decided by the dataset's label index; input is only trimmed here.

use super::DataSource;
use crate::config::{QueryMode, UnknownLabelPolicy};
use crate::output::{ErrorMessage, Output, OutputConfig, OutputFormat, Outputter};
use anyhow::Result;
use hops_core::{Dataset, HopsError};
use std::io::{self, BufRead, Write};

/// Behaviour of one shell session.
#[derive(Debug, Clone, Copy)]
pub struct ShellOptions {
    pub mode: QueryMode,
    pub on_unknown: UnknownLabelPolicy,
    pub format: OutputFormat,
}

/// Run the interactive shell on stdin/stdout
pub fn run(source: &DataSource, options: &ShellOptions) -> Result<()> {
    let dataset = source.load()?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    let answered = run_loop(&dataset, options, stdin.lock(), stdout.lock())?;
    tracing::info!(answered, "shell input ended");
    Ok(())
}

/// Drive the prompt loop over arbitrary reader/writer pairs.
///
/// Returns the number of queries answered once input is exhausted.
pub fn run_loop<R: BufRead, W: Write>(
    dataset: &Dataset,
    options: &ShellOptions,
    mut input: R,
    mut out: W,
) -> Result<usize> {
    let mut answered = 0;

    loop {
        let from = match prompt(&mut input, &mut out, "from >")? {
            Some(label) => label,
            None => return Ok(answered),
        };
        // Resolve eagerly so a bad source label is reported before asking
        // for the target.
        if let Err(e) = dataset.labels().resolve(&from) {
            report_query_error(&mut out, e, options)?;
            continue;
        }

        let to = match prompt(&mut input, &mut out, "to >")? {
            Some(label) => label,
            None => return Ok(answered),
        };

        let rendered = match options.mode {
            QueryMode::Steps => dataset
                .steps(&from, &to)
                .map(|answer| render(answer, options.format)),
            QueryMode::Path => dataset
                .path(&from, &to)
                .map(|answer| render(answer, options.format)),
        };

        match rendered {
            Ok(text) => {
                writeln!(out, "{}", text)?;
                answered += 1;
            }
            Err(e) if e.is_query_error() => report_query_error(&mut out, e, options)?,
            Err(e) => return Err(e.into()),
        }
    }
}

/// Ask one question; blank answers ask again, end of input yields `None`.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    question: &str,
) -> Result<Option<String>> {
    loop {
        writeln!(out, "{}", question)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let label = line.trim();
        if !label.is_empty() {
            return Ok(Some(label.to_string()));
        }
    }
}

/// Print a recoverable query error, or fail the session when the label
/// policy says an unknown label is fatal. A fatal error is left for the
/// caller to report.
fn report_query_error<W: Write>(
    out: &mut W,
    error: HopsError,
    options: &ShellOptions,
) -> Result<()> {
    let fatal = matches!(options.on_unknown, UnknownLabelPolicy::Exit)
        && matches!(error, HopsError::LabelNotFound { .. });
    if fatal {
        return Err(error.into());
    }

    tracing::debug!(%error, "query rejected, prompting again");
    let message = ErrorMessage::with_details(
        error.to_string(),
        "Try again, or end input (Ctrl-D) to quit",
    );
    writeln!(out, "{}", render(message, options.format))?;
    Ok(())
}

/// JSON answers stay on one line so each query yields one record.
fn render<T: Outputter>(data: T, format: OutputFormat) -> String {
    let config = match format {
        OutputFormat::Json => OutputConfig::new(format).compact(),
        OutputFormat::Table => OutputConfig::new(format),
    };
    Output::with_config(data, config).render_to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hops_core::{GraphStore, IntegrityPolicy, LabelCase, LabelIndex};
    use std::io::Cursor;

    fn create_test_dataset() -> Dataset {
        let graph = GraphStore::from_edges(vec![("1", "2"), ("2", "3"), ("1", "3"), ("4", "1")]);
        let labels = LabelIndex::from_entries(vec![
            ("1", "alice"),
            ("2", "bob"),
            ("3", "carol"),
            ("4", "dave"),
        ])
        .unwrap();
        Dataset::new(graph, labels, IntegrityPolicy::Strict).unwrap()
    }

    fn options(mode: QueryMode, on_unknown: UnknownLabelPolicy) -> ShellOptions {
        ShellOptions {
            mode,
            on_unknown,
            format: OutputFormat::Table,
        }
    }

    fn drive(input: &str, opts: &ShellOptions) -> (Result<usize>, String) {
        drive_on(&create_test_dataset(), input, opts)
    }

    fn drive_on(dataset: &Dataset, input: &str, opts: &ShellOptions) -> (Result<usize>, String) {
        colored::control::set_override(false);
        let mut out = Vec::new();
        let result = run_loop(dataset, opts, Cursor::new(input.as_bytes()), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_steps_session() {
        let opts = options(QueryMode::Steps, UnknownLabelPolicy::Reprompt);
        let (result, out) = drive("Alice\nBOB\ndave\ncarol\n", &opts);

        assert_eq!(result.unwrap(), 2);
        assert!(out.starts_with("from >\nto >\n"));
        assert!(out.contains("alice -> bob\nsteps = 1"));
        assert!(out.contains("dave -> carol\nsteps = 2"));
    }

    #[test]
    fn test_dead_end_and_unreachable_are_answers() {
        let opts = options(QueryMode::Steps, UnknownLabelPolicy::Exit);
        let (result, out) = drive("carol\nalice\nbob\ndave\n", &opts);

        assert_eq!(result.unwrap(), 2);
        assert!(out.contains("DEAD END 'carol'"));
        assert!(out.contains("impossible to reach 'dave' from 'bob'"));
    }

    #[test]
    fn test_unknown_label_reprompts() {
        let opts = options(QueryMode::Steps, UnknownLabelPolicy::Reprompt);
        let (result, out) = drive("mallory\nalice\nzed\nalice\ncarol\n", &opts);

        assert_eq!(result.unwrap(), 1);
        assert!(out.contains("ERROR: Name does not exist: 'mallory'"));
        assert!(out.contains("ERROR: Name does not exist: 'zed'"));
        assert!(out.contains("alice -> carol\nsteps = 1"));
    }

    #[test]
    fn test_unknown_label_exits() {
        let opts = options(QueryMode::Steps, UnknownLabelPolicy::Exit);
        let (result, out) = drive("alice\nmallory\nalice\nbob\n", &opts);

        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "Name does not exist: 'mallory'");
        // Reported once, by the caller; nothing after the failure is answered.
        assert!(!out.contains("mallory"));
        assert!(!out.contains("steps ="));
    }

    #[test]
    fn test_path_session() {
        let opts = options(QueryMode::Path, UnknownLabelPolicy::Reprompt);
        let (result, out) = drive("dave\ncarol\ncarol\ndave\n", &opts);

        assert_eq!(result.unwrap(), 2);
        assert!(out.contains("steps taken: 2\npath: dave -> alice -> carol"));
        assert!(out.contains("NO PATH no path between 'carol' and 'dave'"));
    }

    #[test]
    fn test_blank_lines_ask_again() {
        let opts = options(QueryMode::Steps, UnknownLabelPolicy::Exit);
        let (result, out) = drive("\n   \nalice\n\nbob\n", &opts);

        assert_eq!(result.unwrap(), 1);
        assert_eq!(out.matches("from >").count(), 4);
        assert_eq!(out.matches("to >").count(), 2);
    }

    #[test]
    fn test_eof_mid_query() {
        let opts = options(QueryMode::Steps, UnknownLabelPolicy::Reprompt);
        let (result, out) = drive("alice\n", &opts);

        assert_eq!(result.unwrap(), 0);
        assert!(out.ends_with("to >\n"));
    }

    #[test]
    fn test_case_sensitive_lookup() {
        let graph = GraphStore::from_edges(vec![("1", "2")]);
        let labels =
            LabelIndex::from_entries_with_case(vec![("1", "alice"), ("2", "bob")], LabelCase::Exact)
                .unwrap();
        let dataset = Dataset::new(graph, labels, IntegrityPolicy::Strict).unwrap();
        let opts = options(QueryMode::Steps, UnknownLabelPolicy::Reprompt);
        let (result, out) = drive_on(&dataset, "Alice\n", &opts);

        assert_eq!(result.unwrap(), 0);
        assert!(out.contains("Name does not exist: 'Alice'"));
    }

    #[test]
    fn test_json_lines() {
        let mut opts = options(QueryMode::Steps, UnknownLabelPolicy::Reprompt);
        opts.format = OutputFormat::Json;
        let (result, out) = drive("alice\ncarol\n", &opts);

        assert_eq!(result.unwrap(), 1);
        let record = out
            .lines()
            .find(|line| line.starts_with('{'))
            .expect("json record");
        let json: serde_json::Value = serde_json::from_str(record).unwrap();
        assert_eq!(json["distance"]["hops"], 1);
    }

    #[test]
    fn test_mixed_case_label_matches_any_input_case() {
        let graph = GraphStore::from_edges(vec![("1", "2")]);
        let labels = LabelIndex::from_entries(vec![("1", "Alice"), ("2", "bob")]).unwrap();
        let dataset = Dataset::new(graph, labels, IntegrityPolicy::Strict).unwrap();
        let opts = options(QueryMode::Steps, UnknownLabelPolicy::Exit);
        let (result, out) = drive_on(&dataset, "alice\nbob\nALICE\nBOB\n", &opts);

        assert_eq!(result.unwrap(), 2);
        assert_eq!(out.matches("Alice -> bob\nsteps = 1").count(), 2);
    }

    #[test]
    fn test_path_through_unlabeled_node_is_not_an_unknown_label() {
        let graph = GraphStore::from_edges(vec![("1", "9"), ("9", "2")]);
        let labels = LabelIndex::from_entries(vec![("1", "alice"), ("2", "bob")]).unwrap();
        let dataset = Dataset::new(graph, labels, IntegrityPolicy::Warn).unwrap();
        let opts = options(QueryMode::Path, UnknownLabelPolicy::Exit);
        let (result, out) = drive_on(&dataset, "alice\nbob\n", &opts);

        assert_eq!(result.unwrap(), 1);
        assert!(out.contains("steps taken: 2\npath: alice -> 9 -> bob"));
    }
}
