//! Article domain model: the join entity between authors and magazines.
//!
//! # Responsibility
//! - Hold an article's immutable title and its current author/magazine
//!   references.
//!
//! # Invariants
//! - `title` never changes after construction and is always 5..=50 chars.
//! - `author_id`/`magazine_id` are rewritten only by the owning catalog's
//!   relink routine, which keeps both association lists consistent.

use crate::model::author::AuthorId;
use crate::model::magazine::MagazineId;
use crate::model::validation::{validate_title, ValidationError};
use serde::Serialize;
use uuid::Uuid;

/// Stable identifier for an article.
pub type ArticleId = Uuid;

/// A single published piece linking exactly one author to exactly one
/// magazine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    id: ArticleId,
    title: String,
    author_id: AuthorId,
    magazine_id: MagazineId,
}

impl Article {
    /// Creates an article with a generated stable ID. Rejects out-of-range
    /// titles. Whether the referenced author/magazine exist is the catalog's
    /// check, not this constructor's.
    pub(crate) fn new(
        author_id: AuthorId,
        magazine_id: MagazineId,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        validate_title(&title)?;
        Ok(Self {
            id: Uuid::new_v4(),
            title,
            author_id,
            magazine_id,
        })
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author_id(&self) -> AuthorId {
        self.author_id
    }

    pub fn magazine_id(&self) -> MagazineId {
        self.magazine_id
    }

    pub(crate) fn set_author_id(&mut self, author_id: AuthorId) {
        self.author_id = author_id;
    }

    pub(crate) fn set_magazine_id(&mut self, magazine_id: MagazineId) {
        self.magazine_id = magazine_id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_validates_title_length() {
        let author_id = Uuid::new_v4();
        let magazine_id = Uuid::new_v4();

        let article = Article::new(author_id, magazine_id, "Hello World").unwrap();
        assert_eq!(article.title(), "Hello World");
        assert_eq!(article.author_id(), author_id);
        assert_eq!(article.magazine_id(), magazine_id);

        assert_eq!(
            Article::new(author_id, magazine_id, "Hi").unwrap_err(),
            ValidationError::TitleLength { length: 2 }
        );
    }
}
