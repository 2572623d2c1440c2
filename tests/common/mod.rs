//! Shared fixtures for integration tests.

use habitboard::models::{
    Category, Color, CombinedStatistics, Habit, HabitCount, HabitStatistics, User, UserCount,
    UserStatistics,
};

pub fn habit(name: &str) -> Habit {
    Habit {
        name: name.to_string(),
        category: Category {
            name: "General".to_string(),
            color: Color {
                hue: 0.5,
                saturation: 0.5,
                brightness: 0.5,
            },
        },
        info: String::new(),
    }
}

pub fn user(id: &str, name: &str) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        color: None,
        bio: None,
    }
}

/// Build a combined snapshot from per-user (habit, count) entries, deriving
/// the per-habit groupings from the same data.
pub fn combined_stats(entries: &[(&User, &[(&str, u32)])]) -> CombinedStatistics {
    let user_statistics: Vec<UserStatistics> = entries
        .iter()
        .map(|(u, counts)| UserStatistics {
            user: (*u).clone(),
            habit_counts: counts
                .iter()
                .map(|(name, count)| HabitCount {
                    habit: habit(name),
                    count: *count,
                })
                .collect(),
        })
        .collect();

    let mut habit_names: Vec<&str> = entries
        .iter()
        .flat_map(|(_, counts)| counts.iter().map(|(name, _)| *name))
        .collect();
    habit_names.sort_unstable();
    habit_names.dedup();

    let habit_statistics: Vec<HabitStatistics> = habit_names
        .into_iter()
        .map(|name| HabitStatistics {
            habit: habit(name),
            user_counts: entries
                .iter()
                .filter_map(|(u, counts)| {
                    counts
                        .iter()
                        .find(|(n, _)| *n == name)
                        .map(|(_, count)| UserCount {
                            user: (*u).clone(),
                            count: *count,
                        })
                })
                .collect(),
        })
        .collect();

    CombinedStatistics {
        user_statistics,
        habit_statistics,
    }
}
