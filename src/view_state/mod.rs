//! Presentation-boundary view model for the home feed.
//!
//! The engine emits two flat item lists; this module folds them into the
//! tagged section/item shape the reconciler and the presentation layer work
//! with. Rendering itself lives outside the crate.

use std::collections::{HashMap, HashSet};

use crate::engine::HomeItems;
use crate::models::User;
use crate::reconcile::Identify;

/// Sections of the home feed, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeSection {
    Leaderboard,
    FollowedUsers,
}

/// A single home-feed cell.
///
/// Identity lives in the habit name or the user id; everything else is
/// payload and triggers an in-place refresh when it changes.
#[derive(Debug, Clone, PartialEq)]
pub enum HomeItem {
    LeaderboardHabit {
        name: String,
        leading: String,
        secondary: Option<String>,
    },
    FollowedUser {
        user: User,
        message: String,
    },
}

/// Identity key for a [`HomeItem`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HomeItemKey {
    Habit(String),
    User(String),
}

impl Identify for HomeItem {
    type Key = HomeItemKey;

    fn identity(&self) -> HomeItemKey {
        match self {
            HomeItem::LeaderboardHabit { name, .. } => HomeItemKey::Habit(name.clone()),
            HomeItem::FollowedUser { user, .. } => HomeItemKey::User(user.id.clone()),
        }
    }
}

/// Section order plus items per section for one refresh cycle.
#[derive(Debug, Clone)]
pub struct HomeArrangement {
    pub section_order: Vec<HomeSection>,
    pub items_by_section: HashMap<HomeSection, Vec<HomeItem>>,
    /// Sections kept visible even with no items. Empty by default: an empty
    /// leaderboard or follow list simply disappears.
    pub retained_if_empty: HashSet<HomeSection>,
}

impl From<HomeItems> for HomeArrangement {
    fn from(items: HomeItems) -> Self {
        let leaderboard: Vec<HomeItem> = items
            .leaderboard
            .into_iter()
            .map(|item| HomeItem::LeaderboardHabit {
                name: item.habit_name,
                leading: item.leading,
                secondary: item.secondary,
            })
            .collect();
        let followed: Vec<HomeItem> = items
            .followed_users
            .into_iter()
            .map(|item| HomeItem::FollowedUser {
                user: item.user,
                message: item.message,
            })
            .collect();

        let mut items_by_section = HashMap::new();
        items_by_section.insert(HomeSection::Leaderboard, leaderboard);
        items_by_section.insert(HomeSection::FollowedUsers, followed);

        Self {
            section_order: vec![HomeSection::Leaderboard, HomeSection::FollowedUsers],
            items_by_section,
            retained_if_empty: HashSet::new(),
        }
    }
}
