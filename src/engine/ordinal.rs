//! Ordinal rendering for rank indices.

/// English ordinal for a zero-based rank index: 0 → "1st", 1 → "2nd".
///
/// Pure function of the index; ranks are displayed 1-based everywhere.
pub fn ordinal_string(rank_index: usize) -> String {
    let n = rank_index + 1;
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}
