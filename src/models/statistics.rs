//! Statistics models: per-user and per-habit count groupings.
//!
//! Counts pair an entity with how often it was logged. The entity is the
//! identity of the pair; the count is payload. Set and containment logic must
//! key on [`HabitCount::identity`] / [`UserCount::identity`] rather than the
//! derived structural equality, which also compares counts and exists for the
//! reconciler's payload-change detection.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Habit, User};

/// How many times one user logged one habit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitCount {
    pub habit: Habit,
    pub count: u32,
}

impl HabitCount {
    /// Identity key: the habit name. Two counts for the same habit are the
    /// same entity regardless of their counts.
    pub fn identity(&self) -> &str {
        &self.habit.name
    }
}

/// How many times one habit was logged by one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserCount {
    pub user: User,
    pub count: u32,
}

impl UserCount {
    /// Identity key: the user id.
    pub fn identity(&self) -> &str {
        &self.user.id
    }
}

/// One user's full per-habit counts. Order of entries carries no meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatistics {
    pub user: User,
    pub habit_counts: Vec<HabitCount>,
}

/// One habit's per-user counts; the grouping the ranking operates on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitStatistics {
    pub habit: Habit,
    pub user_counts: Vec<UserCount>,
}

/// Aggregate statistics snapshot returned by the backend.
///
/// The default value is the empty snapshot used when a fetch fails: every
/// derivation over it is total, so a failed cycle renders "no data yet"
/// states instead of stale ones. A habit may appear in one grouping and not
/// the other; lookups treat the missing side as zero entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedStatistics {
    pub user_statistics: Vec<UserStatistics>,
    pub habit_statistics: Vec<HabitStatistics>,
}

impl CombinedStatistics {
    /// Per-user counts for one habit, or `None` if the habit has no grouping
    /// this cycle.
    pub fn habit_statistics_for(&self, habit_name: &str) -> Option<&HabitStatistics> {
        self.habit_statistics
            .iter()
            .find(|s| s.habit.name == habit_name)
    }

    /// Names of the habits a user has logged at least once, in ascending
    /// order.
    pub fn logged_habit_names(&self, user_id: &str) -> BTreeSet<String> {
        self.user_statistics
            .iter()
            .find(|s| s.user.id == user_id)
            .map(|s| {
                s.habit_counts
                    .iter()
                    .filter(|c| c.count > 0)
                    .map(|c| c.habit.name.clone())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// A single habit-logging event, the write-side payload for the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedHabit {
    pub user_id: String,
    pub habit_name: String,
    pub timestamp: DateTime<Utc>,
}
