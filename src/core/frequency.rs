//! Frequency tables over category buckets.
//!
//! A bucket reduces to (value, count) pairs ordered by descending count.
//! Ties keep the order of first occurrence in the bucket, which makes
//! intermediate inspection output reproducible; the scoring sum itself is
//! commutative over pairs and does not depend on the order.

use indexmap::IndexMap;

/// Reduce a bucket to its descending-count frequency table.
///
/// Counting is O(n) over an insertion-ordered map; the final stable sort
/// preserves first-occurrence order among equal counts.
pub fn frequency_table(bucket: &[String]) -> Vec<(String, usize)> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for value in bucket {
        *counts.entry(value.as_str()).or_insert(0) += 1;
    }

    let mut pairs: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect();

    // Stable sort: equal counts stay in first-occurrence order
    pairs.sort_by(|a, b| b.1.cmp(&a.1));
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn counts_descend() {
        let table = frequency_table(&bucket(&["a", "b", "a", "c", "a", "b"]));
        assert_eq!(
            table,
            vec![
                ("a".to_string(), 3),
                ("b".to_string(), 2),
                ("c".to_string(), 1)
            ]
        );
    }

    #[test]
    fn ties_keep_first_occurrence_order() {
        let table = frequency_table(&bucket(&["zeta", "alpha", "zeta", "alpha", "mid"]));
        assert_eq!(
            table,
            vec![
                ("zeta".to_string(), 2),
                ("alpha".to_string(), 2),
                ("mid".to_string(), 1)
            ]
        );
    }

    #[test]
    fn empty_bucket_yields_empty_table() {
        assert!(frequency_table(&[]).is_empty());
    }

    #[test]
    fn singleton_accumulator_degenerates_to_one_entry() {
        // NUMBERS/SHORT_WORDS buckets always hold exactly one string
        let table = frequency_table(&bucket(&[""]));
        assert_eq!(table, vec![(String::new(), 1)]);
    }
}
