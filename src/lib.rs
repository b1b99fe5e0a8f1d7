//! **simcheck** - Lightweight CLI for scoring similarity between Python source files
//!
//! Tokenizes each file into six semantic categories, reduces them to frequency
//! tables, and folds frequency-weighted Levenshtein comparisons into a single
//! normalized score. Designed for near-duplicate and plagiarism screening.

/// Command-line interface with clap integration
pub mod cli;

/// Shell completion generation
pub mod completion;

/// Core comparison pipeline - tokenize, count, measure, score
pub mod core {
    /// Whitespace/case/NFKC text folding applied to every token
    pub mod normalize;
    pub use normalize::normalize;

    /// Lexical token categorization into the six content buckets
    pub mod categorize;
    pub use categorize::{Categorizer, Category, ContentBuffer};

    /// Descending-count frequency tables with stable tie-breaks
    pub mod frequency;
    pub use frequency::frequency_table;

    /// Levenshtein edit distance over characters
    pub mod distance;
    pub use distance::edit_distance;

    /// Frequency-weighted scorer and per-pair orchestrator
    pub mod compare;
    pub use compare::{Comparator, Verdict, run as compare_run};

    /// Manifest-driven batch runner with append-only output sink
    pub mod batch;
    pub use batch::run as batch_run;
}

/// Language processing - lexical token streams built on tree-sitter
pub mod parsers {
    /// Python lexer yielding identifier/string/number/comment tokens
    pub mod python_lexer;
    pub use python_lexer::{LexToken, PythonLexer, TokenKind, TokenStream};
}

/// Infrastructure - configuration and I/O
pub mod infra {
    /// Configuration management with TOML support
    pub mod config;
    pub use config::{Config, init as config_init, load_config};

    /// Memory-mapped file I/O for large files (>1MB threshold)
    pub mod io;
    pub use io::{SourceText, read_source};
}

// Strategic re-exports for clean CLI interface
pub use cli::{AppContext, Cli, Commands};
pub use core::{batch_run, compare_run};
pub use infra::{Config, load_config};
pub use parsers::PythonLexer;

// Core types for external consumers
pub use core::categorize::{Category, ContentBuffer};
pub use core::compare::{Comparator, Verdict};
