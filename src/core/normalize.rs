//! Token text folding applied before any bucket or distance work.
//!
//! Every token's text passes through the same pipeline: trim the edges,
//! drop interior whitespace, lowercase, then NFKC-fold so compatibility
//! variants (ligatures, fullwidth forms) collapse to one spelling.

use unicode_normalization::UnicodeNormalization;

/// Fold token text into its canonical comparison form.
///
/// Steps, in order: trim leading/trailing whitespace; remove every interior
/// space, tab, newline, and carriage return; lowercase; NFKC normalization.
/// Total over any input, no error conditions.
pub fn normalize(text: &str) -> String {
    let compact: String = text
        .trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '\t' | '\n' | '\r'))
        .collect();

    compact.to_lowercase().nfkc().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn strips_edges_and_interior_whitespace() {
        assert_eq!(normalize("  foo bar\tbaz\r\n"), "foobarbaz");
    }

    #[test]
    fn lowercases_including_cyrillic() {
        assert_eq!(normalize("CalcSum"), "calcsum");
        assert_eq!(normalize("ПрИвЕт"), "привет");
    }

    #[test]
    fn folds_compatibility_forms() {
        // Ligature fi and fullwidth A collapse under NFKC
        assert_eq!(normalize("ﬁle"), "file");
        assert_eq!(normalize("Ａ"), "a");
    }

    #[test]
    fn empty_and_whitespace_only() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \t\r\n "), "");
    }

    proptest! {
        // ASCII inputs: NFKC is the identity, so folding twice is folding once
        #[test]
        fn idempotent_over_ascii(s in "[ -~\\t\\r\\n]{0,64}") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn idempotent_over_fixed_unicode_samples() {
        for s in ["Съешь ещё", "ﬁﬂ ŒUVRE", "naïve café", "ＣＯＤＥ ｗｉｄｅ"] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }
}
