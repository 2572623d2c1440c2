//! Followed-user feed derivation: social comparison messages.

use std::collections::BTreeSet;

use crate::models::{CombinedStatistics, User, UserCount};

use super::{ordinal_string, rank_of, rank_user_counts, RefreshConfig};

/// Shown when the followed user has logged nothing (or has no visible
/// ranking data this cycle).
const NO_ACTIVITY_MESSAGE: &str = "This user doesn't seem to have done much yet. \
Check in to see if they need any help getting started.";

/// One followed-user card: the user plus a comparison message relative to the
/// current user.
#[derive(Debug, Clone, PartialEq)]
pub struct FollowedUserItem {
    pub user: User,
    pub message: String,
}

/// Derive one item per followed user, sorted by display name ascending.
pub fn followed_user_items(
    stats: &CombinedStatistics,
    config: &RefreshConfig,
) -> Vec<FollowedUserItem> {
    let my_logged = stats.logged_habit_names(&config.current_user.id);
    let favorite_logged: BTreeSet<String> = config
        .favorite_habits
        .iter()
        .map(|habit| habit.name.clone())
        .filter(|name| my_logged.contains(name))
        .collect();

    let mut followed = config.followed_users.clone();
    followed.sort_by(User::cmp_by_name);

    followed
        .into_iter()
        .map(|user| {
            let message = comparison_message(stats, config, &user, &my_logged, &favorite_logged);
            FollowedUserItem { user, message }
        })
        .collect()
}

/// Pick the habit of interest and compose the message.
///
/// Habit priority: smallest name from common-and-favorited, then from common,
/// then from the followed user's own logged set; with no logged habits at all
/// the no-activity message applies. Every branch is total: a chosen habit
/// missing from the per-habit groupings degrades to the no-activity message
/// instead of failing.
fn comparison_message(
    stats: &CombinedStatistics,
    config: &RefreshConfig,
    followed: &User,
    my_logged: &BTreeSet<String>,
    favorite_logged: &BTreeSet<String>,
) -> String {
    let their_logged = stats.logged_habit_names(&followed.id);
    let common: BTreeSet<String> = their_logged.intersection(my_logged).cloned().collect();

    // BTreeSet iteration is ascending, so `next()` is the smallest name.
    let common_pick = favorite_logged
        .intersection(&common)
        .next()
        .or_else(|| common.iter().next());

    if let Some(habit_name) = common_pick {
        let ranked = ranked_counts_for(stats, habit_name);
        let mine = rank_of(&ranked, &config.current_user.id);
        let theirs = rank_of(&ranked, &followed.id);
        match (mine, theirs) {
            (Some(mine), Some(theirs)) if mine < theirs => format!(
                "Currently #{}, behind you (#{}) in {}.\nSend them a friendly reminder!",
                ordinal_string(theirs),
                ordinal_string(mine),
                habit_name
            ),
            (Some(mine), Some(theirs)) if mine > theirs => format!(
                "Currently #{}, ahead of you (#{}) in {}.\nYou might catch up with a little extra effort!",
                ordinal_string(theirs),
                ordinal_string(mine),
                habit_name
            ),
            (Some(_), Some(theirs)) => format!(
                "You're tied at #{} in {}! Now's your chance to pull ahead.",
                ordinal_string(theirs),
                habit_name
            ),
            _ => NO_ACTIVITY_MESSAGE.to_string(),
        }
    } else if let Some(habit_name) = their_logged.iter().next() {
        let ranked = ranked_counts_for(stats, habit_name);
        match rank_of(&ranked, &followed.id) {
            Some(theirs) => format!(
                "Currently #{}, in {}.\nMaybe you should give this habit a look.",
                ordinal_string(theirs),
                habit_name
            ),
            None => NO_ACTIVITY_MESSAGE.to_string(),
        }
    } else {
        NO_ACTIVITY_MESSAGE.to_string()
    }
}

fn ranked_counts_for(stats: &CombinedStatistics, habit_name: &str) -> Vec<UserCount> {
    stats
        .habit_statistics_for(habit_name)
        .map(|statistic| rank_user_counts(&statistic.user_counts))
        .unwrap_or_default()
}
