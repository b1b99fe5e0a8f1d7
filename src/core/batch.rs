//! Manifest-driven batch runner.
//!
//! Reads a UTF-8 manifest with one whitespace-separated path pair per
//! line, scores each pair with a single reused [`Comparator`], and
//! appends one verdict line per pair to the output file. Malformed
//! lines and per-pair failures are reported and skipped; they never
//! abort the rest of the batch.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::cli::{AppContext, BatchArgs};
use crate::core::compare::{Comparator, Verdict};
use crate::infra::config::load_config;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BatchError {
    /// Manifest line did not split into exactly two path tokens.
    #[error("no files found to compare (manifest line {line})")]
    MalformedLine { line: usize },
}

/// Split one manifest line into its (source, edited) pair.
fn parse_line(raw: &str, line: usize) -> Result<(PathBuf, PathBuf), BatchError> {
    let mut fields = raw.split_whitespace();
    match (fields.next(), fields.next(), fields.next()) {
        (Some(source), Some(edited), None) => Ok((source.into(), edited.into())),
        _ => Err(BatchError::MalformedLine { line }),
    }
}

/// Append one verdict line to the output sink.
pub fn append_result(path: &Path, verdict: Verdict) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open output file {}", path.display()))?;

    writeln!(file, "{verdict}")
        .with_context(|| format!("Failed to append to {}", path.display()))?;
    Ok(())
}

/// Entry point for `simc batch`.
pub fn run(args: BatchArgs, ctx: &AppContext) -> Result<()> {
    let config = load_config().unwrap_or_default();
    let skip = args.skip_docs || config.skip_docs_and_comments;
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(config.batch.output_file));

    let manifest = fs::read_to_string(&args.manifest)
        .with_context(|| format!("Failed to read manifest {}", args.manifest.display()))?;

    // One instance for the whole batch: run() clears its buffers on
    // entry and exit, so reuse is safe.
    let mut comparator = Comparator::new(skip);
    let mut compared = 0usize;
    let mut skipped = 0usize;

    for (idx, raw) in manifest.lines().enumerate() {
        let line_no = idx + 1;
        if raw.trim().is_empty() {
            continue;
        }

        // Malformed lines are reported and skipped; the batch goes on.
        let (source, edited) = match parse_line(raw, line_no) {
            Ok(pair) => pair,
            Err(err) => {
                eprintln!("{err}");
                skipped += 1;
                continue;
            }
        };

        match comparator.run(&source, &edited) {
            Ok(verdict) => {
                if ctx.dry_run {
                    println!("{verdict}");
                } else {
                    append_result(&output, verdict)?;
                }
                compared += 1;
            }
            Err(err) => {
                eprintln!("manifest line {line_no}: {err:#}");
                skipped += 1;
            }
        }
    }

    if !ctx.quiet {
        println!(
            "{} Compared {compared} pair(s), skipped {skipped}, results in {}",
            "✓".green(),
            output.display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_tokens_parse_into_a_pair() {
        let (source, edited) = parse_line("a.py  b.py", 1).expect("pair");
        assert_eq!(source, PathBuf::from("a.py"));
        assert_eq!(edited, PathBuf::from("b.py"));
    }

    #[test]
    fn wrong_arity_is_a_malformed_line() {
        assert_eq!(
            parse_line("only_one.py", 3),
            Err(BatchError::MalformedLine { line: 3 })
        );
        assert_eq!(
            parse_line("a.py b.py c.py", 7),
            Err(BatchError::MalformedLine { line: 7 })
        );
    }

    #[test]
    fn malformed_line_message_matches_the_driver_diagnostic() {
        let err = parse_line("a.py b.py c.py", 2).unwrap_err();
        assert_eq!(
            err.to_string(),
            "no files found to compare (manifest line 2)"
        );
    }
}
