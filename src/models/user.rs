//! User model.

use serde::{Deserialize, Serialize};

use super::Color;

/// A participant in the habit-tracking service.
///
/// Identified by the opaque `id`; the display name drives ordering in every
/// user-facing list (see [`User::cmp_by_name`]). Equality is structural;
/// identity-based lookups key on `id` explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: Option<Color>,
    #[serde(default)]
    pub bio: Option<String>,
}

impl User {
    /// Ordering by display name.
    pub fn cmp_by_name(&self, other: &User) -> std::cmp::Ordering {
        self.name.cmp(&other.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserializes_without_optional_fields() {
        let user: User = serde_json::from_str(r#"{"id": "u1", "name": "Ana"}"#).unwrap();
        assert_eq!(user.id, "u1");
        assert!(user.color.is_none());
        assert!(user.bio.is_none());
    }

    #[test]
    fn test_cmp_by_name_ignores_id() {
        let a = User {
            id: "z9".to_string(),
            name: "Ana".to_string(),
            color: None,
            bio: None,
        };
        let b = User {
            id: "a1".to_string(),
            name: "Ben".to_string(),
            color: None,
            bio: None,
        };
        assert_eq!(a.cmp_by_name(&b), std::cmp::Ordering::Less);
    }
}
