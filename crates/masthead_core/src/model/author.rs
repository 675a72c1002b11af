//! Author domain model.
//!
//! # Responsibility
//! - Hold an author's immutable name and ordered article association list.
//!
//! # Invariants
//! - `name` never changes after construction.
//! - `article_ids` is mutated only by the owning catalog's relink routine.

use crate::model::article::ArticleId;
use crate::model::validation::{validate_author_name, ValidationError};
use serde::Serialize;
use uuid::Uuid;

/// Stable identifier for an author.
pub type AuthorId = Uuid;

/// A writer known to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    id: AuthorId,
    name: String,
    article_ids: Vec<ArticleId>,
}

impl Author {
    /// Creates an author with a generated stable ID and empty association
    /// list. Rejects an empty name.
    pub(crate) fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_author_name(&name)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            article_ids: Vec::new(),
        })
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Articles currently attributed to this author, insertion order.
    pub fn article_ids(&self) -> &[ArticleId] {
        &self.article_ids
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_empty_name() {
        assert_eq!(Author::new("").unwrap_err(), ValidationError::EmptyAuthorName);
    }

    #[test]
    fn new_starts_with_no_articles() {
        let author = Author::new("Carmen Mola").unwrap();
        assert_eq!(author.name(), "Carmen Mola");
        assert!(author.article_ids().is_empty());
        assert!(!author.id().is_nil());
    }

    #[test]
    fn unlink_is_noop_when_absent() {
        let mut author = Author::new("Jo March").unwrap();
        let stray = Uuid::new_v4();
        author.unlink_article(stray);
        assert!(author.article_ids().is_empty());
    }
}
