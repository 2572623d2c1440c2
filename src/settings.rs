//! Favorites, follows, and current-user configuration.
//!
//! Process-wide configuration state lives here; the engine never reads it
//! directly. Each refresh cycle takes an immutable [`RefreshConfig`] produced
//! by [`Settings::snapshot`], keeping the derivation pure and independently
//! testable.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::{eyre::eyre, eyre::WrapErr, Result};
use serde::{Deserialize, Serialize};

use crate::engine::RefreshConfig;
use crate::models::{Habit, User};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub current_user: User,
    pub favorite_habits: Vec<Habit>,
    pub followed_user_ids: HashSet<String>,
}

impl Settings {
    pub fn new(current_user: User) -> Self {
        Self {
            current_user,
            favorite_habits: Vec::new(),
            followed_user_ids: HashSet::new(),
        }
    }

    pub fn is_favorite(&self, habit_name: &str) -> bool {
        self.favorite_habits.iter().any(|h| h.name == habit_name)
    }

    /// Add the habit to favorites, or remove it if already present.
    pub fn toggle_favorite(&mut self, habit: &Habit) {
        if let Some(pos) = self
            .favorite_habits
            .iter()
            .position(|h| h.name == habit.name)
        {
            self.favorite_habits.remove(pos);
        } else {
            self.favorite_habits.push(habit.clone());
        }
    }

    pub fn follows(&self, user_id: &str) -> bool {
        self.followed_user_ids.contains(user_id)
    }

    /// Follow the user, or unfollow if already followed.
    pub fn toggle_followed(&mut self, user_id: &str) {
        if !self.followed_user_ids.remove(user_id) {
            self.followed_user_ids.insert(user_id.to_string());
        }
    }

    /// Take the immutable configuration snapshot for one refresh cycle.
    ///
    /// Followed ids are resolved against the user catalog and sorted by
    /// display name; ids with no catalog entry this cycle are skipped.
    pub fn snapshot(&self, users_by_id: &HashMap<String, User>) -> RefreshConfig {
        let mut followed_users: Vec<User> = users_by_id
            .values()
            .filter(|user| self.followed_user_ids.contains(&user.id))
            .cloned()
            .collect();
        followed_users.sort_by(User::cmp_by_name);

        RefreshConfig {
            current_user: self.current_user.clone(),
            favorite_habits: self.favorite_habits.clone(),
            followed_users,
        }
    }

    /// Default on-disk location for the settings file.
    pub fn default_path() -> Result<PathBuf> {
        let base = dirs::data_dir().ok_or_else(|| eyre!("No data directory available"))?;
        Ok(base.join("habitboard").join("settings.json"))
    }

    /// Load settings from a JSON file; `Ok(None)` when the file is absent.
    pub fn load(path: &Path) -> Result<Option<Settings>> {
        if !path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(path)
            .wrap_err(format!("Failed to read settings from {:?}", path))?;
        let settings = serde_json::from_str(&json).wrap_err("Failed to deserialize settings")?;
        Ok(Some(settings))
    }

    /// Save settings as pretty JSON, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .wrap_err(format!("Failed to create settings directory {:?}", parent))?;
        }
        let json = serde_json::to_string_pretty(self).wrap_err("Failed to serialize settings")?;
        fs::write(path, json).wrap_err(format!("Failed to write settings to {:?}", path))?;
        Ok(())
    }
}
