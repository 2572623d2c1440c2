//! Prelude module for convenient imports.
//!
//! Re-exports the most frequently used types:
//!
//! ```ignore
//! use habitboard::prelude::*;
//! ```

// API client
pub use crate::api::{ApiError, HabitServiceClient, StatisticsProvider};

// Engine
pub use crate::engine::{
    derive_home_items, ordinal_string, FollowedUserItem, HomeItems, LeaderboardItem, RefreshConfig,
};

// Models
pub use crate::models::{
    Category, Color, CombinedStatistics, Habit, HabitCount, HabitStatistics, LoggedHabit, User,
    UserCount, UserStatistics,
};

// Reconciliation
pub use crate::reconcile::{ArrangementDiff, Identify, Reconciler};

// Refresh pipeline
pub use crate::refresh::{HomeFeed, HomeUpdate};

// Settings
pub use crate::settings::Settings;

// View model
pub use crate::view_state::{HomeArrangement, HomeItem, HomeItemKey, HomeSection};
