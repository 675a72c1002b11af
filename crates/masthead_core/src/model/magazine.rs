//! Magazine domain model.
//!
//! # Responsibility
//! - Hold a magazine's name, category, and ordered article association list.
//!
//! # Invariants
//! - `name` is always 2..=16 characters; `category` is never empty.
//! - Setters re-validate and leave state untouched on rejection.
//! - `article_ids` is mutated only by the owning catalog's relink routine.

use crate::model::article::ArticleId;
use crate::model::validation::{validate_category, validate_magazine_name, ValidationError};
use serde::Serialize;
use uuid::Uuid;

/// Stable identifier for a magazine.
pub type MagazineId = Uuid;

/// A publication known to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Magazine {
    id: MagazineId,
    name: String,
    category: String,
    article_ids: Vec<ArticleId>,
}

impl Magazine {
    /// Creates a magazine with a generated stable ID and empty association
    /// list. Rejects out-of-range names and empty categories.
    pub(crate) fn new(
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let category = category.into();
        validate_magazine_name(&name)?;
        validate_category(&category)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            category,
            article_ids: Vec::new(),
        })
    }

    pub fn id(&self) -> MagazineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Articles currently published by this magazine, association order.
    pub fn article_ids(&self) -> &[ArticleId] {
        &self.article_ids
    }

    /// Renames the magazine, re-validating the new name first.
    pub(crate) fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        validate_magazine_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Changes the category, re-validating the new value first.
    pub(crate) fn set_category(
        &mut self,
        category: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let category = category.into();
        validate_category(&category)?;
        self.category = category;
        Ok(())
    }

    /// Appends an article to the association list.
    pub(crate) fn link_article(&mut self, article_id: ArticleId) {
        self.article_ids.push(article_id);
    }

    /// Removes an article from the association list. No-op if absent.
    pub(crate) fn unlink_article(&mut self, article_id: ArticleId) {
        self.article_ids.retain(|id| *id != article_id);
    }
}
