//! Statistics aggregation and ranking.
//!
//! Pure derivation of the two home-feed item lists from a statistics
//! snapshot and a per-cycle configuration. Nothing here performs I/O or
//! holds state, so derivation may run on any thread without synchronization.

mod feed;
mod leaderboard;
mod ordinal;
mod ranking;

pub use feed::{followed_user_items, FollowedUserItem};
pub use leaderboard::{leaderboard_items, LeaderboardItem};
pub use ordinal::ordinal_string;
pub use ranking::{rank_of, rank_user_counts, ranking_string};

use crate::models::{CombinedStatistics, Habit, User};

/// Immutable configuration snapshot taken at the start of a refresh cycle.
///
/// Passed explicitly so the derivation stays a pure function of its inputs;
/// see [`crate::settings::Settings::snapshot`].
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshConfig {
    pub current_user: User,
    pub favorite_habits: Vec<Habit>,
    pub followed_users: Vec<User>,
}

/// The two ordered item lists the engine exposes to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeItems {
    pub leaderboard: Vec<LeaderboardItem>,
    pub followed_users: Vec<FollowedUserItem>,
}

/// Derive both home-feed lists from one snapshot.
pub fn derive_home_items(stats: &CombinedStatistics, config: &RefreshConfig) -> HomeItems {
    HomeItems {
        leaderboard: leaderboard_items(stats, config),
        followed_users: followed_user_items(stats, config),
    }
}
