//! Publishing use-case service.
//!
//! # Responsibility
//! - Provide stable entry points over an owned catalog.
//! - Log every mutation as a metadata-only event (IDs, never free text).
//!
//! # Invariants
//! - Service APIs never bypass catalog validation or the relink routine.
//! - A rejected operation is logged with status=error and returned unchanged.

use crate::catalog::Catalog;
use crate::model::article::ArticleId;
use crate::model::author::AuthorId;
use crate::model::magazine::MagazineId;
use crate::model::validation::ValidationError;
use log::{info, warn};

/// Use-case wrapper around an owned [`Catalog`].
#[derive(Debug, Default)]
pub struct PublishingService {
    catalog: Catalog,
}

impl PublishingService {
    /// Creates a service over an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service over an existing catalog, e.g. one pre-seeded by
    /// the caller.
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Read access to the underlying catalog and all its queries.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Registers a new author.
    pub fn register_author(
        &mut self,
        name: impl Into<String>,
    ) -> Result<AuthorId, ValidationError> {
        match self.catalog.add_author(name) {
            Ok(id) => {
                info!("event=author_registered module=service status=ok author_id={id}");
                Ok(id)
            }
            Err(err) => {
                warn!("event=author_registered module=service status=error reason={err}");
                Err(err)
            }
        }
    }

    /// Registers a new magazine.
    pub fn register_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<MagazineId, ValidationError> {
        match self.catalog.add_magazine(name, category) {
            Ok(id) => {
                info!("event=magazine_registered module=service status=ok magazine_id={id}");
                Ok(id)
            }
            Err(err) => {
                warn!("event=magazine_registered module=service status=error reason={err}");
                Err(err)
            }
        }
    }

    /// Publishes a new article by an author in a magazine.
    pub fn publish_article(
        &mut self,
        author_id: AuthorId,
        magazine_id: MagazineId,
        title: impl Into<String>,
    ) -> Result<ArticleId, ValidationError> {
        match self.catalog.add_article(author_id, magazine_id, title) {
            Ok(id) => {
                info!(
                    "event=article_published module=service status=ok \
                     article_id={id} author_id={author_id} magazine_id={magazine_id}"
                );
                Ok(id)
            }
            Err(err) => {
                warn!(
                    "event=article_published module=service status=error \
                     author_id={author_id} magazine_id={magazine_id} reason={err}"
                );
                Err(err)
            }
        }
    }

    /// Moves an article to a new author.
    pub fn reassign_author(
        &mut self,
        article_id: ArticleId,
        new_author_id: AuthorId,
    ) -> Result<(), ValidationError> {
        match self.catalog.reassign_author(article_id, new_author_id) {
            Ok(()) => {
                info!(
                    "event=author_reassigned module=service status=ok \
                     article_id={article_id} author_id={new_author_id}"
                );
                Ok(())
            }
            Err(err) => {
                warn!(
                    "event=author_reassigned module=service status=error \
                     article_id={article_id} reason={err}"
                );
                Err(err)
            }
        }
    }

    /// Moves an article to a new magazine.
    pub fn reassign_magazine(
        &mut self,
        article_id: ArticleId,
        new_magazine_id: MagazineId,
    ) -> Result<(), ValidationError> {
        match self.catalog.reassign_magazine(article_id, new_magazine_id) {
            Ok(()) => {
                info!(
                    "event=magazine_reassigned module=service status=ok \
                     article_id={article_id} magazine_id={new_magazine_id}"
                );
                Ok(())
            }
            Err(err) => {
                warn!(
                    "event=magazine_reassigned module=service status=error \
                     article_id={article_id} reason={err}"
                );
                Err(err)
            }
        }
    }

    /// Renames a magazine with re-validation.
    pub fn rename_magazine(
        &mut self,
        magazine_id: MagazineId,
        name: impl Into<String>,
    ) -> Result<(), ValidationError> {
        match self.catalog.rename_magazine(magazine_id, name) {
            Ok(()) => {
                info!("event=magazine_renamed module=service status=ok magazine_id={magazine_id}");
                Ok(())
            }
            Err(err) => {
                warn!(
                    "event=magazine_renamed module=service status=error \
                     magazine_id={magazine_id} reason={err}"
                );
                Err(err)
            }
        }
    }

    /// Changes a magazine's category with re-validation.
    pub fn recategorize_magazine(
        &mut self,
        magazine_id: MagazineId,
        category: impl Into<String>,
    ) -> Result<(), ValidationError> {
        match self.catalog.recategorize_magazine(magazine_id, category) {
            Ok(()) => {
                info!(
                    "event=magazine_recategorized module=service status=ok \
                     magazine_id={magazine_id}"
                );
                Ok(())
            }
            Err(err) => {
                warn!(
                    "event=magazine_recategorized module=service status=error \
                     magazine_id={magazine_id} reason={err}"
                );
                Err(err)
            }
        }
    }
}
