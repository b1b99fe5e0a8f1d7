//! Levenshtein edit distance over characters.
//!
//! Classic dynamic-programming formulation with unit costs for insertion,
//! deletion, and substitution. The scorer calls this for every
//! (source value, edited value) pair inside a category, so inputs are
//! short token strings rather than whole files.

/// Minimum number of single-character edits transforming `a` into `b`.
///
/// Builds the full (|a|+1) x (|b|+1) table: row 0 and column 0 hold their
/// index values, and each cell takes the minimum of delete, insert, and
/// substitute moves. Total for any two strings, including empty ones.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let rows = a_chars.len() + 1;
    let cols = b_chars.len() + 1;

    // Seed the border with index values, zero elsewhere
    let mut table = vec![vec![0usize; cols]; rows];
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..cols {
        table[0][j] = j;
    }

    for i in 1..rows {
        for j in 1..cols {
            let substitute = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            table[i][j] = (table[i - 1][j] + 1)
                .min(table[i][j - 1] + 1)
                .min(table[i - 1][j - 1] + substitute);
        }
    }

    table[rows - 1][cols - 1]
}
