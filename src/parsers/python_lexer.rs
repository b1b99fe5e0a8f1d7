//! Filepath: src/parsers/python_lexer.rs
//! ------------------------------------------------------------------
//! Python lexical token stream built on Tree-sitter 0.25.x.
//! Goals:
//!   - Surface only the four kinds the categorizer consumes
//!     (identifiers/keywords, strings, numbers, comments).
//!   - Keep string literals whole: the "string" node is emitted as
//!     a single token, never split into quote/content pieces.
//!   - Preserve source order via a pre-order cursor walk.
//!   - Stop at the first ERROR/MISSING node and hand the partial
//!     token list back with a description of where lexing stopped.
//! ------------------------------------------------------------------

use anyhow::{Context, Result, anyhow};
use tree_sitter::{Language, Parser, TreeCursor};

/// Semantic kinds the categorizer cares about. Operators, punctuation,
/// and layout nodes never become tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Identifiers and keywords (`def`, `return`, `True`, ...)
    Identifier,
    /// Whole string literal, quotes and prefixes included
    Str,
    /// Integer or float literal, raw text
    Number,
    /// Comment including its leading `#`
    Comment,
}

/// One lexical token in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexToken {
    pub kind: TokenKind,
    pub text: String,
}

/// Finite, single-pass token sequence for one file.
///
/// Consumed exactly once by the categorizer. When lexing stopped early
/// on malformed input, [`TokenStream::truncated`] carries a description
/// and the stream holds only the tokens seen before the break.
pub struct TokenStream {
    tokens: std::vec::IntoIter<LexToken>,
    truncated: Option<String>,
}

impl TokenStream {
    /// Why lexing stopped early, if it did.
    pub fn truncated(&self) -> Option<&str> {
        self.truncated.as_deref()
    }
}

impl Iterator for TokenStream {
    type Item = LexToken;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokens.next()
    }
}

/// Lexes Python source into the four semantic token kinds.
pub struct PythonLexer {
    /// Python language handle for Tree-sitter.
    language: Language,
}

impl PythonLexer {
    pub fn new() -> Self {
        Self {
            language: tree_sitter_python::LANGUAGE.into(),
        }
    }

    /// Tokenize `content` into a single-pass stream.
    ///
    /// Parses the whole file up front (Tree-sitter is not incremental
    /// here), then walks the concrete tree in pre-order collecting the
    /// semantic leaves. Malformed input does not fail the call: the
    /// walk stops at the first ERROR node and the stream reports the
    /// truncation instead.
    pub fn tokens(&self, content: &str) -> Result<TokenStream> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .context("set Python language")?;

        let tree = parser
            .parse(content, None)
            .ok_or_else(|| anyhow!("Failed to parse Python source"))?;

        let bytes = content.as_bytes();
        let mut tokens = Vec::with_capacity(64);
        let mut cursor = tree.walk();
        let truncated = walk_tokens(&mut cursor, bytes, &mut tokens);

        Ok(TokenStream {
            tokens: tokens.into_iter(),
            truncated,
        })
    }
}

impl Default for PythonLexer {
    fn default() -> Self {
        Self::new()
    }
}

fn truncation_at(node: &tree_sitter::Node<'_>) -> String {
    let pos = node.start_position();
    format!(
        "syntax error at line {}, column {}",
        pos.row + 1,
        pos.column + 1
    )
}

/// Pre-order walk collecting semantic tokens. Returns a truncation
/// description when an ERROR/MISSING node cut the walk short.
fn walk_tokens(
    cursor: &mut TreeCursor<'_>,
    bytes: &[u8],
    out: &mut Vec<LexToken>,
) -> Option<String> {
    loop {
        let node = cursor.node();

        // Malformed input: keep what we have, report where we stopped.
        if node.is_error() || node.is_missing() {
            return Some(truncation_at(&node));
        }

        let mut descend = true;
        let kind = match node.kind() {
            "identifier" => Some(TokenKind::Identifier),
            // True/False/None lex as names, matching keyword treatment
            "true" | "false" | "none" => Some(TokenKind::Identifier),
            "integer" | "float" => Some(TokenKind::Number),
            "comment" => Some(TokenKind::Comment),
            // Emit the whole literal; do not split into quote pieces.
            // An unterminated literal (missing closing quote) counts as
            // malformed input, not as a token.
            "string" => {
                if node.has_error() {
                    return Some(truncation_at(&node));
                }
                descend = false;
                Some(TokenKind::Str)
            }
            other => {
                // Anonymous all-alphabetic leaves are keywords
                if !node.is_named()
                    && node.child_count() == 0
                    && !other.is_empty()
                    && other.chars().all(|c| c.is_ascii_alphabetic())
                {
                    Some(TokenKind::Identifier)
                } else {
                    None
                }
            }
        };

        if let Some(kind) = kind
            && let Ok(text) = node.utf8_text(bytes)
        {
            out.push(LexToken {
                kind,
                text: text.to_string(),
            });
        }

        // Pre-order: children first (unless suppressed), then siblings,
        // then climb back toward the root.
        if descend && cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return None;
            }
        }
    }
}
