//! Lexical token categorization into the six content buckets.
//!
//! Consumes the single-pass token stream from the Python lexer and sorts
//! each token's processed text into exactly one bucket. Four buckets hold
//! one entry per qualifying token; NUMBERS and SHORT_WORDS are per-file
//! accumulator strings appended once after the whole stream is consumed.

use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;
use tracing::warn;

use crate::core::normalize::normalize;
use crate::infra::io::read_source;
use crate::parsers::python_lexer::{PythonLexer, TokenKind};

/// Triple-double-quoted literals are documentation strings.
static DOCSTRING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""""[\s\S]*?""""#).expect("docstring regex"));

/// The six semantic buckets. Fixed, closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Strings,
    Docstrings,
    Numbers,
    Comments,
    Words,
    ShortWords,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Strings,
        Category::Docstrings,
        Category::Numbers,
        Category::Comments,
        Category::Words,
        Category::ShortWords,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Strings => "STRINGS",
            Category::Docstrings => "DOCSTRINGS",
            Category::Numbers => "NUMBERS",
            Category::Comments => "COMMENTS",
            Category::Words => "WORDS",
            Category::ShortWords => "SHORT_WORDS",
        }
    }

    fn index(self) -> usize {
        match self {
            Category::Strings => 0,
            Category::Docstrings => 1,
            Category::Numbers => 2,
            Category::Comments => 3,
            Category::Words => 4,
            Category::ShortWords => 5,
        }
    }
}

/// Per-file content buckets, one ordered sequence per category.
///
/// All six buckets always exist (possibly empty). Structural equality of
/// two buffers (same sequences, same order) is what the scorer uses for
/// its exact-match short-circuit.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContentBuffer {
    buckets: [Vec<String>; 6],
}

impl ContentBuffer {
    pub fn bucket(&self, category: Category) -> &[String] {
        &self.buckets[category.index()]
    }

    fn push(&mut self, category: Category, value: String) {
        self.buckets[category.index()].push(value);
    }

    /// Empty every bucket, returning the buffer to its initial state.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
    }

    /// Total character count across every string in every bucket,
    /// including the NUMBERS/SHORT_WORDS accumulator entries.
    pub fn text_length(&self) -> usize {
        self.buckets
            .iter()
            .flatten()
            .map(|s| s.chars().count())
            .sum()
    }
}

/// Sorts lexical tokens into a [`ContentBuffer`].
pub struct Categorizer {
    lexer: PythonLexer,
    skip_docs_and_comments: bool,
}

impl Categorizer {
    pub fn new(skip_docs_and_comments: bool) -> Self {
        Self {
            lexer: PythonLexer::new(),
            skip_docs_and_comments,
        }
    }

    /// Read and categorize one file into `buf`.
    pub fn categorize_file(&self, path: &Path, buf: &mut ContentBuffer) -> Result<()> {
        let source = read_source(path)?;
        let text = source
            .text()
            .with_context(|| format!("{} is not valid UTF-8", path.display()))?;
        self.categorize_source(text, buf)
    }

    /// Categorize already-read source text into `buf`.
    ///
    /// Consumes the token stream exactly once. If the lexer stopped on
    /// malformed input, the tokens seen so far are kept, the NUMBERS and
    /// SHORT_WORDS accumulators are discarded, and a diagnostic is
    /// logged; the caller sees success with partial buffers.
    pub fn categorize_source(&self, content: &str, buf: &mut ContentBuffer) -> Result<()> {
        let mut stream = self.lexer.tokens(content)?;
        let mut numbers = String::new();
        let mut short_words = String::new();

        for token in &mut stream {
            match token.kind {
                TokenKind::Identifier => {
                    buf.push(Category::Words, normalize(&token.text));
                }

                TokenKind::Comment => {
                    if self.skip_docs_and_comments {
                        continue;
                    }
                    let folded = normalize(&token.text);
                    let body = folded.trim_start_matches('#');
                    if body.chars().count() <= 2 {
                        short_words.push_str(body);
                    } else {
                        buf.push(Category::Comments, alphabetic_filter(body));
                    }
                }

                TokenKind::Str => {
                    if DOCSTRING.is_match(&token.text) {
                        if self.skip_docs_and_comments {
                            continue;
                        }
                        let folded = normalize(&token.text);
                        buf.push(Category::Docstrings, alphabetic_filter(&folded));
                        continue;
                    }
                    let folded = normalize(&token.text);
                    let filtered = alphabetic_filter(strip_quote_layer(&folded));
                    if filtered.chars().count() <= 1 {
                        short_words.push_str(&filtered);
                    } else {
                        buf.push(Category::Strings, filtered);
                    }
                }

                TokenKind::Number => {
                    numbers.push_str(&token.text);
                }
            }
        }

        if let Some(reason) = stream.truncated() {
            // Partial buffers are kept; the accumulators never land.
            warn!(reason, "tokenization stopped early, keeping partial buffers");
            return Ok(());
        }

        buf.push(Category::Numbers, numbers);
        buf.push(Category::ShortWords, short_words);
        Ok(())
    }
}

/// Keep only ASCII lowercase and Cyrillic lowercase (U+0430..U+044F);
/// digits, punctuation, and other scripts are dropped.
fn alphabetic_filter(s: &str) -> String {
    s.chars()
        .filter(|c| matches!(c, 'a'..='z' | 'а'..='я'))
        .collect()
}

/// Strip exactly one layer of matching surrounding quotes,
/// double first, then single.
fn strip_quote_layer(s: &str) -> &str {
    for quote in ['"', '\''] {
        if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
            return &s[1..s.len() - 1];
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categorize(src: &str, skip: bool) -> ContentBuffer {
        let mut buf = ContentBuffer::default();
        Categorizer::new(skip)
            .categorize_source(src, &mut buf)
            .expect("categorize");
        buf
    }

    #[test]
    fn tokens_partition_into_exactly_one_bucket() {
        let src = "total = 41  # running sum\nlabel = \"needle\"\n";
        let buf = categorize(src, false);

        assert_eq!(buf.bucket(Category::Words), ["total", "label"]);
        assert_eq!(buf.bucket(Category::Comments), ["runningsum"]);
        assert_eq!(buf.bucket(Category::Strings), ["needle"]);
        assert_eq!(buf.bucket(Category::Numbers), ["41"]);
        assert_eq!(buf.bucket(Category::ShortWords), [""]);
        assert!(buf.bucket(Category::Docstrings).is_empty());
    }

    #[test]
    fn numbers_concatenate_into_one_accumulator_entry() {
        let buf = categorize("a = 1\nb = 2.5\nc = 300\n", false);
        assert_eq!(buf.bucket(Category::Numbers), ["12.5300"]);
    }

    #[test]
    fn short_comments_and_strings_feed_the_short_words_accumulator() {
        // "# ok" strips to "ok" (len 2); "a" filters to len 1
        let buf = categorize("# ok\nx = \"a\"\n", false);
        assert_eq!(buf.bucket(Category::ShortWords), ["oka"]);
        assert!(buf.bucket(Category::Comments).is_empty());
        assert!(buf.bucket(Category::Strings).is_empty());
    }

    #[test]
    fn docstrings_are_filtered_and_bucketed_separately() {
        let src = "def f():\n    \"\"\"Adds Two Numbers\"\"\"\n    return 1\n";
        let buf = categorize(src, false);
        assert_eq!(buf.bucket(Category::Docstrings), ["addstwonumbers"]);
        assert!(buf.bucket(Category::Strings).is_empty());
    }

    #[test]
    fn skip_flag_drops_comments_and_docstrings_entirely() {
        let src = "def f():\n    \"\"\"Doc\"\"\"\n    return 1  # short\n";
        let buf = categorize(src, true);
        assert!(buf.bucket(Category::Docstrings).is_empty());
        assert!(buf.bucket(Category::Comments).is_empty());
        // Short comment must not leak into the accumulator either
        assert_eq!(buf.bucket(Category::ShortWords), [""]);
    }

    #[test]
    fn cyrillic_comment_text_survives_the_filter() {
        let buf = categorize("# Привет мир 123\n", false);
        assert_eq!(buf.bucket(Category::Comments), ["приветмир"]);
    }

    #[test]
    fn malformed_input_keeps_partial_buffers_without_accumulators() {
        let mut buf = ContentBuffer::default();
        Categorizer::new(false)
            .categorize_source("x = \"unterminated\n", &mut buf)
            .expect("recoverable");
        // Accumulator entries are only appended after a clean pass
        assert!(buf.bucket(Category::Numbers).is_empty());
        assert!(buf.bucket(Category::ShortWords).is_empty());
    }

    #[test]
    fn text_length_counts_characters_across_all_buckets() {
        let buf = categorize("calculate = 1\n", false);
        // "calculate" (9) + "1" (1) + "" (0)
        assert_eq!(buf.text_length(), 10);
    }

    #[test]
    fn clear_returns_the_buffer_to_its_initial_state() {
        let mut buf = categorize("x = 1\n", false);
        buf.clear();
        assert_eq!(buf, ContentBuffer::default());
    }
}
