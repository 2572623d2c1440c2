//! Habit catalog models.

use serde::{Deserialize, Serialize};

/// Color in hue/saturation/brightness form.
///
/// The backend abbreviates the component keys on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    #[serde(rename = "h")]
    pub hue: f64,
    #[serde(rename = "s")]
    pub saturation: f64,
    #[serde(rename = "b")]
    pub brightness: f64,
}

/// Name-bearing grouping key for habits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub color: Color,
}

/// A named trackable activity with a category and free-text info.
///
/// A habit is identified by its name (unique, case-sensitive). Equality is
/// structural; identity-based set membership and ordering go through the name
/// (see [`Habit::cmp_by_name`]) so that category or info edits never change
/// which habit a value refers to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    pub name: String,
    pub category: Category,
    pub info: String,
}

impl Habit {
    /// Ordering by name, the habit's identity.
    pub fn cmp_by_name(&self, other: &Habit) -> std::cmp::Ordering {
        self.name.cmp(&other.name)
    }
}
