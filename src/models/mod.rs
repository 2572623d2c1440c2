//! Domain models for the Habits service.
//!
//! All models are immutable value snapshots deserialized from the backend;
//! each refresh cycle replaces them wholesale.

mod habit;
mod statistics;
mod user;

pub use habit::{Category, Color, Habit};
pub use statistics::{
    CombinedStatistics, HabitCount, HabitStatistics, LoggedHabit, UserCount, UserStatistics,
};
pub use user::User;
