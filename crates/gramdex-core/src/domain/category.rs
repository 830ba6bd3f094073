//! Category domain type.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::profile::Profile;
use super::{ValidationError, require_non_blank};

/// A named group of profiles.
///
/// A category owns its profiles exclusively: no profile is shared across
/// categories, and deleting a category discards its profiles. The
/// `profiles` order is insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Opaque unique identifier, assigned at creation and immutable.
    pub id: String,
    /// Human-readable category name.
    pub name: String,
    /// Owned profiles, in insertion order.
    pub profiles: Vec<Profile>,
}

impl Category {
    /// Build a new category with a fresh id.
    ///
    /// `name` is trimmed and must not be blank. The provided profiles are
    /// copied, not aliased. Nothing is persisted here; durability is the
    /// caller's responsibility via the document store.
    pub fn new(name: &str, profiles: &[Profile]) -> Result<Self, ValidationError> {
        let name = require_non_blank(name, "category name")?;
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name,
            profiles: profiles.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(username: &str) -> Profile {
        Profile::new(username, username, None).unwrap()
    }

    #[test]
    fn test_new_trims_name() {
        let category = Category::new("  Travel  ", &[]).unwrap();
        assert_eq!(category.name, "Travel");
        assert!(category.profiles.is_empty());
    }

    #[test]
    fn test_new_rejects_blank_name() {
        assert_eq!(
            Category::new(" \t ", &[]),
            Err(ValidationError::Blank("category name"))
        );
    }

    #[test]
    fn test_new_copies_profiles() {
        let profiles = vec![profile("jdoe"), profile("asmith")];
        let category = Category::new("Friends", &profiles).unwrap();

        assert_eq!(category.profiles, profiles);
        // A copy, not an alias: mutating the source leaves the category alone.
        let mut source = profiles;
        source.clear();
        assert_eq!(category.profiles.len(), 2);
    }

    #[test]
    fn test_new_assigns_unique_ids() {
        let a = Category::new("Travel", &[]).unwrap();
        let b = Category::new("Travel", &[]).unwrap();
        assert_ne!(a.id, b.id);
    }
}
