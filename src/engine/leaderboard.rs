//! Leaderboard item derivation.

use crate::models::CombinedStatistics;

use super::{rank_of, rank_user_counts, ranking_string, RefreshConfig};

/// One leaderboard card: the top-ranked user for a favorited habit plus a
/// secondary comparison point.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardItem {
    pub habit_name: String,
    /// Top-ranked user's rendered string, or "Nobody Yet!" with no entries.
    pub leading: String,
    /// The current user's own string when they rank below first, otherwise
    /// the second-place string. Absent with fewer than two entries.
    pub secondary: Option<String>,
}

/// Derive one item per favorited habit that has statistics this cycle,
/// sorted by habit name ascending.
pub fn leaderboard_items(
    stats: &CombinedStatistics,
    config: &RefreshConfig,
) -> Vec<LeaderboardItem> {
    let me = config.current_user.id.as_str();

    let mut favorited: Vec<_> = stats
        .habit_statistics
        .iter()
        .filter(|statistic| {
            config
                .favorite_habits
                .iter()
                .any(|habit| habit.name == statistic.habit.name)
        })
        .collect();
    favorited.sort_by(|a, b| a.habit.cmp_by_name(&b.habit));

    favorited
        .into_iter()
        .map(|statistic| {
            let ranked = rank_user_counts(&statistic.user_counts);
            let my_rank = rank_of(&ranked, me);
            let render = |entry| ranking_string(entry, me, my_rank);

            let (leading, secondary) = match ranked.as_slice() {
                [] => ("Nobody Yet!".to_string(), None),
                [only] => (render(only), None),
                [first, second, ..] => {
                    let secondary = match my_rank {
                        // Below first place: show the current user's own
                        // position rather than the runner-up's.
                        Some(mine) if mine != 0 => render(&ranked[mine]),
                        _ => render(second),
                    };
                    (render(first), Some(secondary))
                }
            };

            LeaderboardItem {
                habit_name: statistic.habit.name.clone(),
                leading,
                secondary,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Color, Habit, HabitStatistics, User, UserCount};

    fn habit(name: &str) -> Habit {
        Habit {
            name: name.to_string(),
            category: Category {
                name: "General".to_string(),
                color: Color {
                    hue: 0.0,
                    saturation: 0.0,
                    brightness: 0.0,
                },
            },
            info: String::new(),
        }
    }

    fn user(id: &str, name: &str) -> User {
        User {
            id: id.to_string(),
            name: name.to_string(),
            color: None,
            bio: None,
        }
    }

    fn count(id: &str, name: &str, count: u32) -> UserCount {
        UserCount {
            user: user(id, name),
            count,
        }
    }

    fn stats_for(habit_name: &str, counts: Vec<UserCount>) -> CombinedStatistics {
        CombinedStatistics {
            user_statistics: vec![],
            habit_statistics: vec![HabitStatistics {
                habit: habit(habit_name),
                user_counts: counts,
            }],
        }
    }

    fn config_for(current: User, favorites: &[&str]) -> RefreshConfig {
        RefreshConfig {
            current_user: current,
            favorite_habits: favorites.iter().map(|n| habit(n)).collect(),
            followed_users: vec![],
        }
    }

    #[test]
    fn test_empty_ranking_shows_nobody_yet() {
        let stats = stats_for("Running", vec![]);
        let config = config_for(user("u1", "Ana"), &["Running"]);
        let items = leaderboard_items(&stats, &config);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].leading, "Nobody Yet!");
        assert_eq!(items[0].secondary, None);
    }

    #[test]
    fn test_single_entry_has_no_secondary() {
        let stats = stats_for("Running", vec![count("u2", "Ben", 4)]);
        let config = config_for(user("u1", "Ana"), &["Running"]);
        let items = leaderboard_items(&stats, &config);
        assert_eq!(items[0].leading, "Ben 4");
        assert_eq!(items[0].secondary, None);
    }

    #[test]
    fn test_current_user_leading_shows_runner_up() {
        let stats = stats_for(
            "Running",
            vec![count("u1", "Ana", 9), count("u2", "Ben", 4)],
        );
        let config = config_for(user("u1", "Ana"), &["Running"]);
        let items = leaderboard_items(&stats, &config);
        assert_eq!(items[0].leading, "You 91st");
        assert_eq!(items[0].secondary.as_deref(), Some("Ben 4"));
    }

    #[test]
    fn test_current_user_trailing_shows_own_position() {
        let stats = stats_for(
            "Running",
            vec![
                count("u2", "Ben", 9),
                count("u3", "Cal", 7),
                count("u1", "Ana", 4),
            ],
        );
        let config = config_for(user("u1", "Ana"), &["Running"]);
        let items = leaderboard_items(&stats, &config);
        assert_eq!(items[0].leading, "Ben 9");
        assert_eq!(items[0].secondary.as_deref(), Some("You 43rd"));
    }

    #[test]
    fn test_absent_current_user_shows_second_place() {
        let stats = stats_for(
            "Running",
            vec![count("u2", "Ben", 9), count("u3", "Cal", 7)],
        );
        let config = config_for(user("u1", "Ana"), &["Running"]);
        let items = leaderboard_items(&stats, &config);
        assert_eq!(items[0].leading, "Ben 9");
        assert_eq!(items[0].secondary.as_deref(), Some("Cal 7"));
    }

    #[test]
    fn test_only_favorited_habits_appear_sorted_by_name() {
        let stats = CombinedStatistics {
            user_statistics: vec![],
            habit_statistics: vec![
                HabitStatistics {
                    habit: habit("Swimming"),
                    user_counts: vec![],
                },
                HabitStatistics {
                    habit: habit("Reading"),
                    user_counts: vec![],
                },
                HabitStatistics {
                    habit: habit("Running"),
                    user_counts: vec![],
                },
            ],
        };
        let config = config_for(user("u1", "Ana"), &["Swimming", "Reading"]);
        let items = leaderboard_items(&stats, &config);
        let names: Vec<&str> = items.iter().map(|i| i.habit_name.as_str()).collect();
        assert_eq!(names, vec!["Reading", "Swimming"]);
    }

    #[test]
    fn test_favorite_without_statistics_is_skipped() {
        let stats = stats_for("Running", vec![]);
        let config = config_for(user("u1", "Ana"), &["Reading"]);
        assert!(leaderboard_items(&stats, &config).is_empty());
    }
}
