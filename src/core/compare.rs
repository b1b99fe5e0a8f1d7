//! Frequency-weighted scorer and per-pair orchestrator.
//!
//! A [`Comparator`] owns the two content buffers, runs both files through
//! categorization, compares the per-category frequency tables with
//! edit-distance weighting, and folds everything into a single verdict.
//! Buffers are cleared at the start and end of every run, so one instance
//! can be reused safely across a batch.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use tracing::debug;

use crate::cli::{AppContext, CompareArgs};
use crate::core::batch::append_result;
use crate::core::categorize::{Categorizer, Category, ContentBuffer};
use crate::core::distance::edit_distance;
use crate::core::frequency::frequency_table;
use crate::infra::config::load_config;

/// Outcome of one comparison.
///
/// `Identical` means the two content buffers were structurally equal and
/// scoring was skipped; it prints as the literal `1`. A computed score
/// always prints with exactly three decimals, even when it lands on 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict {
    Identical,
    Score(f64),
}

impl Verdict {
    /// Numeric value of the verdict.
    pub fn value(self) -> f64 {
        match self {
            Verdict::Identical => 1.0,
            Verdict::Score(v) => v,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Identical => f.write_str("1"),
            Verdict::Score(v) => write!(f, "{v:.3}"),
        }
    }
}

/// Scores one pair of files at a time. Single-threaded by design; distinct
/// instances are fully independent.
pub struct Comparator {
    categorizer: Categorizer,
    source: ContentBuffer,
    edited: ContentBuffer,
    result: Option<Verdict>,
}

impl Comparator {
    pub fn new(skip_docs_and_comments: bool) -> Self {
        Self {
            categorizer: Categorizer::new(skip_docs_and_comments),
            source: ContentBuffer::default(),
            edited: ContentBuffer::default(),
            result: None,
        }
    }

    /// Last verdict computed by this instance, if any.
    pub fn last_result(&self) -> Option<Verdict> {
        self.result
    }

    /// Compare two files and return the similarity verdict.
    ///
    /// Buffers are reset up front as well as cleared on exit, so an
    /// earlier run interrupted by an I/O error cannot leak state into
    /// this one.
    pub fn run(&mut self, source: &Path, edited: &Path) -> Result<Verdict> {
        self.reset();
        self.categorizer
            .categorize_file(source, &mut self.source)
            .with_context(|| format!("categorize {}", source.display()))?;
        self.categorizer
            .categorize_file(edited, &mut self.edited)
            .with_context(|| format!("categorize {}", edited.display()))?;
        Ok(self.score())
    }

    /// Compare two already-read source texts. Same pipeline as [`run`]
    /// without the file I/O.
    ///
    /// [`run`]: Comparator::run
    pub fn run_sources(&mut self, source: &str, edited: &str) -> Result<Verdict> {
        self.reset();
        self.categorizer
            .categorize_source(source, &mut self.source)?;
        self.categorizer
            .categorize_source(edited, &mut self.edited)?;
        Ok(self.score())
    }

    fn reset(&mut self) {
        self.source.clear();
        self.edited.clear();
        self.result = None;
    }

    /// Score the populated buffers and clear them unconditionally,
    /// equality short-circuit included.
    fn score(&mut self) -> Verdict {
        let verdict = if self.source == self.edited {
            Verdict::Identical
        } else {
            let source_text_length = self.source.text_length();
            let mut summary = 0.0;

            for category in Category::ALL {
                let source_stat = frequency_table(self.source.bucket(category));
                let edited_stat = frequency_table(self.edited.bucket(category));
                let score = category_score(&source_stat, &edited_stat, source_text_length);
                debug!(category = category.as_str(), score, "category score");
                summary += score;
            }

            Verdict::Score(round3((1.0 - summary).abs()))
        };

        self.source.clear();
        self.edited.clear();
        self.result = Some(verdict);
        verdict
    }
}

/// One category's contribution to the summary difference.
///
/// `relative_coefficient` weighs the category by how much of the source
/// text it covers; `difference_degree` accumulates near-miss pairs whose
/// edit distance is positive yet below a fifth of the source value's
/// length. Identical pairs and pairs edited beyond that threshold
/// contribute nothing. An empty category or a zero-length source text
/// contributes zero rather than erroring.
fn category_score(
    source_stat: &[(String, usize)],
    edited_stat: &[(String, usize)],
    source_text_length: usize,
) -> f64 {
    if source_text_length == 0 || source_stat.is_empty() {
        return 0.0;
    }

    let category_length: usize = source_stat
        .iter()
        .map(|(value, _)| value.chars().count())
        .sum();
    let relative_coefficient = category_length as f64 / source_text_length as f64;

    let mut difference_degree = 0.0;
    for (source_value, source_freq) in source_stat {
        let source_len = source_value.chars().count();
        for (edited_value, edited_freq) in edited_stat {
            let distance = edit_distance(source_value, edited_value);
            if distance > 0 && (distance as f64) < source_len as f64 / 5.0 {
                difference_degree += (distance as f64 * *edited_freq as f64)
                    / (source_len as f64 * *source_freq as f64);
            }
        }
    }

    relative_coefficient * difference_degree
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Entry point for `simc compare`.
pub fn run(args: CompareArgs, ctx: &AppContext) -> Result<()> {
    let config = load_config().unwrap_or_default();
    let skip = args.skip_docs || config.skip_docs_and_comments;

    let mut comparator = Comparator::new(skip);
    let verdict = comparator.run(&args.source, &args.edited)?;

    if args.json {
        let payload = serde_json::json!({
            "source": args.source,
            "edited": args.edited,
            "skip_docs_and_comments": skip,
            "result": verdict.to_string(),
            "score": verdict.value(),
        });
        println!("{payload}");
    } else {
        println!("{verdict}");
    }

    if let Some(output) = &args.output {
        if ctx.dry_run {
            if !ctx.quiet {
                println!("DRY RUN: would append {verdict} to {}", output.display());
            }
        } else {
            append_result(output, verdict)?;
            if !ctx.quiet {
                println!("{} Appended result to {}", "✓".green(), output.display());
            }
        }
    }

    Ok(())
}
