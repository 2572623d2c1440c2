//! Ranking of per-user counts within one habit.

use crate::models::UserCount;

use super::ordinal_string;

/// Rank user counts from highest to lowest.
///
/// The sort is stable and applies no secondary key: users with equal counts
/// keep the order in which the upstream data supplied them, so which of two
/// tied users "leads" depends on input order.
pub fn rank_user_counts(user_counts: &[UserCount]) -> Vec<UserCount> {
    let mut ranked = user_counts.to_vec();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

/// Zero-based rank of a user within a ranked list, if they have a count.
pub fn rank_of(ranked: &[UserCount], user_id: &str) -> Option<usize> {
    ranked.iter().position(|entry| entry.user.id == user_id)
}

/// Display string for one user's position within a habit ranking.
///
/// Renders `"{name} {count}"`. The current user renders as `You` and the
/// string gains their 1-based ordinal rank as a suffix with no separator,
/// e.g. five logs at rank index 2 → `"You 53rd"`.
pub fn ranking_string(
    entry: &UserCount,
    current_user_id: &str,
    current_user_rank: Option<usize>,
) -> String {
    if entry.user.id == current_user_id {
        let ordinal = current_user_rank.map(ordinal_string).unwrap_or_default();
        format!("You {}{}", entry.count, ordinal)
    } else {
        format!("{} {}", entry.user.name, entry.count)
    }
}
