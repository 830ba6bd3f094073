//! Library service - repository operations over the category document.
//!
//! Every operation starts from a fresh read of the persisted document;
//! mutating operations rewrite the whole document in one store call.
//! There is no optimistic concurrency control: overlapping mutations
//! race last-write-wins at the store, and callers needing atomicity
//! across steps must serialize their calls themselves.

use std::sync::Arc;

use crate::domain::{Category, Profile, ValidationError};
use crate::ports::{DocumentStore, QueryContext, StoreError};

/// Store-backed CRUD operations over categories and their profiles.
pub struct Library {
    store: Arc<dyn DocumentStore>,
}

impl Library {
    /// Create a new library over a document store.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Current document.
    pub async fn categories(&self) -> Vec<Category> {
        self.store.read_document().await
    }

    /// Replace the persisted document with `categories`.
    ///
    /// This is the durability step for categories built with
    /// [`Category::new`], which does not persist by itself.
    pub async fn save_categories(&self, categories: &[Category]) -> Result<(), StoreError> {
        self.store.write_document(categories).await
    }

    /// Build a category without persisting it.
    pub fn create_category(name: &str, profiles: &[Profile]) -> Result<Category, ValidationError> {
        Category::new(name, profiles)
    }

    /// Build a profile without persisting it.
    pub fn create_profile(
        name: &str,
        username: &str,
        image_data_url: Option<&str>,
    ) -> Result<Profile, ValidationError> {
        Profile::new(name, username, image_data_url)
    }

    /// Find a category by id with a linear scan.
    ///
    /// `None` on blank or unknown ids.
    pub async fn find_category_by_id(&self, id: &str) -> Option<Category> {
        let id = id.trim();
        if id.is_empty() {
            return None;
        }
        self.store
            .read_document()
            .await
            .into_iter()
            .find(|category| category.id == id)
    }

    /// Append `profile` to the category with `category_id` and persist.
    ///
    /// `Ok(false)` without touching the store when the category does not
    /// exist.
    pub async fn add_profile_to_category(
        &self,
        category_id: &str,
        profile: Profile,
    ) -> Result<bool, StoreError> {
        let mut categories = self.store.read_document().await;
        let Some(category) = categories
            .iter_mut()
            .find(|category| category.id == category_id)
        else {
            tracing::debug!("add_profile_to_category: unknown category {category_id}");
            return Ok(false);
        };

        category.profiles.push(profile);
        self.store.write_document(&categories).await?;
        Ok(true)
    }

    /// Remove one profile from a category and persist.
    ///
    /// `Ok(false)` without a write when either id is unknown.
    pub async fn remove_profile_from_category(
        &self,
        category_id: &str,
        profile_id: &str,
    ) -> Result<bool, StoreError> {
        let mut categories = self.store.read_document().await;
        let Some(category) = categories
            .iter_mut()
            .find(|category| category.id == category_id)
        else {
            return Ok(false);
        };

        let before = category.profiles.len();
        category.profiles.retain(|profile| profile.id != profile_id);
        if category.profiles.len() == before {
            return Ok(false);
        }

        self.store.write_document(&categories).await?;
        Ok(true)
    }

    /// Delete a category and, by ownership, all profiles it holds.
    ///
    /// `Ok(false)` without a write when the id is unknown.
    pub async fn delete_category(&self, category_id: &str) -> Result<bool, StoreError> {
        let mut categories = self.store.read_document().await;
        let before = categories.len();
        categories.retain(|category| category.id != category_id);
        if categories.len() == before {
            return Ok(false);
        }

        self.store.write_document(&categories).await?;
        Ok(true)
    }

    /// Resolve the category selected by the surrounding query context.
    ///
    /// `None` when no `category` parameter is present or it matches
    /// nothing; always resolved against a fresh read.
    pub async fn current_category(&self, ctx: &dyn QueryContext) -> Option<Category> {
        let id = ctx.category_param()?;
        self.find_category_by_id(&id).await
    }
}
