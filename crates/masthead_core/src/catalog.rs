//! In-memory catalog owning the author/magazine/article graph.
//!
//! # Responsibility
//! - Own every entity and the two registries (all magazines, all articles)
//!   in insertion order.
//! - Centralize the relink routine used by both article construction and
//!   author/magazine reassignment.
//! - Answer the derived queries (contributors, topic areas, top publisher).
//!
//! # Invariants
//! - An article's ID appears exactly once in its current author's list and
//!   exactly once in its current magazine's list.
//! - Mutating operations validate everything up front; a rejected operation
//!   changes no state.
//! - Entities are never removed; the registries grow for the catalog's
//!   lifetime.

use crate::model::article::{Article, ArticleId};
use crate::model::author::{Author, AuthorId};
use crate::model::magazine::{Magazine, MagazineId};
use crate::model::validation::ValidationError;
use serde::Serialize;

/// Process-scoped owner of the whole object graph.
///
/// The catalog replaces the original's class-level global registries with an
/// explicit state object, so lifecycle and test isolation stay in the
/// caller's hands.
#[derive(Debug, Default, Serialize)]
pub struct Catalog {
    authors: Vec<Author>,
    magazines: Vec<Magazine>,
    articles: Vec<Article>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Construction and mutation
    // ------------------------------------------------------------------

    /// Registers a new author. Rejects an empty name.
    pub fn add_author(&mut self, name: impl Into<String>) -> Result<AuthorId, ValidationError> {
        let author = Author::new(name)?;
        let id = author.id();
        self.authors.push(author);
        Ok(id)
    }

    /// Registers a new magazine. Rejects out-of-range names and empty
    /// categories.
    pub fn add_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<MagazineId, ValidationError> {
        let magazine = Magazine::new(name, category)?;
        let id = magazine.id();
        self.magazines.push(magazine);
        Ok(id)
    }

    /// Creates an article linking `author_id` to `magazine_id` and registers
    /// it on both sides and in the article registry.
    ///
    /// All checks run before any state changes: an invalid title or unknown
    /// reference leaves the catalog untouched.
    pub fn add_article(
        &mut self,
        author_id: AuthorId,
        magazine_id: MagazineId,
        title: impl Into<String>,
    ) -> Result<ArticleId, ValidationError> {
        let author_idx = self.require_author(author_id)?;
        let magazine_idx = self.require_magazine(magazine_id)?;
        let article = Article::new(author_id, magazine_id, title)?;
        let article_id = article.id();

        self.articles.push(article);
        let article_idx = self.articles.len() - 1;
        self.rebind_author(article_idx, author_idx);
        self.rebind_magazine(article_idx, magazine_idx);
        Ok(article_id)
    }

    /// Moves an article to a new author: removed from the old author's list,
    /// appended to the new one's.
    ///
    /// Reassigning to the current author moves the article to the end of
    /// that author's list, matching remove-then-append semantics.
    pub fn reassign_author(
        &mut self,
        article_id: ArticleId,
        new_author_id: AuthorId,
    ) -> Result<(), ValidationError> {
        let author_idx = self.require_author(new_author_id)?;
        let article_idx = self.require_article(article_id)?;
        self.rebind_author(article_idx, author_idx);
        Ok(())
    }

    /// Moves an article to a new magazine; symmetric to `reassign_author`.
    pub fn reassign_magazine(
        &mut self,
        article_id: ArticleId,
        new_magazine_id: MagazineId,
    ) -> Result<(), ValidationError> {
        let magazine_idx = self.require_magazine(new_magazine_id)?;
        let article_idx = self.require_article(article_id)?;
        self.rebind_magazine(article_idx, magazine_idx);
        Ok(())
    }

    /// Renames a magazine, re-validating the new name.
    pub fn rename_magazine(
        &mut self,
        magazine_id: MagazineId,
        name: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let idx = self.require_magazine(magazine_id)?;
        self.magazines[idx].set_name(name)
    }

    /// Changes a magazine's category, re-validating the new value.
    pub fn recategorize_magazine(
        &mut self,
        magazine_id: MagazineId,
        category: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let idx = self.require_magazine(magazine_id)?;
        self.magazines[idx].set_category(category)
    }

    // ------------------------------------------------------------------
    // Entity access
    // ------------------------------------------------------------------

    pub fn author(&self, id: AuthorId) -> Option<&Author> {
        self.authors.iter().find(|author| author.id() == id)
    }

    pub fn magazine(&self, id: MagazineId) -> Option<&Magazine> {
        self.magazines.iter().find(|magazine| magazine.id() == id)
    }

    pub fn article(&self, id: ArticleId) -> Option<&Article> {
        self.articles.iter().find(|article| article.id() == id)
    }

    /// Every author ever registered, insertion order.
    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    /// The magazine registry: every magazine ever registered, insertion
    /// order.
    pub fn magazines(&self) -> &[Magazine] {
        &self.magazines
    }

    /// The article registry: every article ever created, insertion order.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    // ------------------------------------------------------------------
    // Derived queries
    // ------------------------------------------------------------------

    /// Articles written by the author, association order.
    pub fn author_articles(&self, id: AuthorId) -> Result<Vec<&Article>, ValidationError> {
        let idx = self.require_author(id)?;
        Ok(self.resolve_articles(self.authors[idx].article_ids()))
    }

    /// Magazines the author has written for, de-duplicated in first-seen
    /// order. `None` when the author has no articles.
    pub fn author_magazines(&self, id: AuthorId) -> Result<Option<Vec<&Magazine>>, ValidationError> {
        let idx = self.require_author(id)?;
        let mut seen: Vec<MagazineId> = Vec::new();
        for article in self.resolve_articles(self.authors[idx].article_ids()) {
            if !seen.contains(&article.magazine_id()) {
                seen.push(article.magazine_id());
            }
        }
        Ok(self.wrap_absent(
            seen.iter()
                .filter_map(|magazine_id| self.magazine(*magazine_id))
                .collect(),
        ))
    }

    /// Categories of magazines the author has written for, de-duplicated in
    /// first-seen order. `None` when the author has no articles.
    pub fn author_topic_areas(&self, id: AuthorId) -> Result<Option<Vec<String>>, ValidationError> {
        let magazines = self.author_magazines(id)?;
        Ok(magazines.map(|magazines| {
            let mut areas: Vec<String> = Vec::new();
            for magazine in magazines {
                if !areas.iter().any(|area| area == magazine.category()) {
                    areas.push(magazine.category().to_string());
                }
            }
            areas
        }))
    }

    /// Articles published by the magazine, association order.
    pub fn magazine_articles(&self, id: MagazineId) -> Result<Vec<&Article>, ValidationError> {
        let idx = self.require_magazine(id)?;
        Ok(self.resolve_articles(self.magazines[idx].article_ids()))
    }

    /// Authors who have written for the magazine, de-duplicated in
    /// first-seen order. `None` when the magazine has no articles.
    pub fn magazine_contributors(
        &self,
        id: MagazineId,
    ) -> Result<Option<Vec<&Author>>, ValidationError> {
        let idx = self.require_magazine(id)?;
        let mut seen: Vec<AuthorId> = Vec::new();
        for article in self.resolve_articles(self.magazines[idx].article_ids()) {
            if !seen.contains(&article.author_id()) {
                seen.push(article.author_id());
            }
        }
        Ok(self.wrap_absent(
            seen.iter()
                .filter_map(|author_id| self.author(*author_id))
                .collect(),
        ))
    }

    /// Titles of the magazine's articles, association order. `None` when the
    /// magazine has no articles.
    pub fn magazine_article_titles(
        &self,
        id: MagazineId,
    ) -> Result<Option<Vec<&str>>, ValidationError> {
        let idx = self.require_magazine(id)?;
        Ok(self.wrap_absent(
            self.resolve_articles(self.magazines[idx].article_ids())
                .into_iter()
                .map(Article::title)
                .collect(),
        ))
    }

    /// Authors with strictly more than two articles in this magazine,
    /// first-seen order. `None` when the magazine has no articles or no
    /// author qualifies.
    pub fn contributing_authors(
        &self,
        id: MagazineId,
    ) -> Result<Option<Vec<&Author>>, ValidationError> {
        let idx = self.require_magazine(id)?;
        let mut counts: Vec<(AuthorId, usize)> = Vec::new();
        for article in self.resolve_articles(self.magazines[idx].article_ids()) {
            match counts
                .iter_mut()
                .find(|(author_id, _)| *author_id == article.author_id())
            {
                Some((_, count)) => *count += 1,
                None => counts.push((article.author_id(), 1)),
            }
        }
        Ok(self.wrap_absent(
            counts
                .iter()
                .filter(|(_, count)| *count > 2)
                .filter_map(|(author_id, _)| self.author(*author_id))
                .collect(),
        ))
    }

    /// The magazine with the most articles across the whole registry.
    /// `None` on an empty registry; on a tie the earliest-registered
    /// maximum wins.
    pub fn top_publisher(&self) -> Option<&Magazine> {
        self.magazines.iter().reduce(|best, candidate| {
            if candidate.article_ids().len() > best.article_ids().len() {
                candidate
            } else {
                best
            }
        })
    }

    // ------------------------------------------------------------------
    // Relink routine and lookup helpers
    // ------------------------------------------------------------------

    /// Rewires an article's author side: unlink from the current author
    /// (no-op when not yet linked, as during construction), link to the new
    /// one, rewrite the reference. Both indices are pre-validated by the
    /// caller.
    fn rebind_author(&mut self, article_idx: usize, new_author_idx: usize) {
        let article_id = self.articles[article_idx].id();
        let old_author_id = self.articles[article_idx].author_id();
        if let Some(old_idx) = self.author_index(old_author_id) {
            self.authors[old_idx].unlink_article(article_id);
        }
        let new_author_id = self.authors[new_author_idx].id();
        self.authors[new_author_idx].link_article(article_id);
        self.articles[article_idx].set_author_id(new_author_id);
    }

    /// Magazine-side twin of `rebind_author`.
    fn rebind_magazine(&mut self, article_idx: usize, new_magazine_idx: usize) {
        let article_id = self.articles[article_idx].id();
        let old_magazine_id = self.articles[article_idx].magazine_id();
        if let Some(old_idx) = self.magazine_index(old_magazine_id) {
            self.magazines[old_idx].unlink_article(article_id);
        }
        let new_magazine_id = self.magazines[new_magazine_idx].id();
        self.magazines[new_magazine_idx].link_article(article_id);
        self.articles[article_idx].set_magazine_id(new_magazine_id);
    }

    fn author_index(&self, id: AuthorId) -> Option<usize> {
        self.authors.iter().position(|author| author.id() == id)
    }

    fn magazine_index(&self, id: MagazineId) -> Option<usize> {
        self.magazines.iter().position(|magazine| magazine.id() == id)
    }

    fn article_index(&self, id: ArticleId) -> Option<usize> {
        self.articles.iter().position(|article| article.id() == id)
    }

    fn require_author(&self, id: AuthorId) -> Result<usize, ValidationError> {
        self.author_index(id)
            .ok_or(ValidationError::UnknownAuthor(id))
    }

    fn require_magazine(&self, id: MagazineId) -> Result<usize, ValidationError> {
        self.magazine_index(id)
            .ok_or(ValidationError::UnknownMagazine(id))
    }

    fn require_article(&self, id: ArticleId) -> Result<usize, ValidationError> {
        self.article_index(id)
            .ok_or(ValidationError::UnknownArticle(id))
    }

    fn resolve_articles(&self, ids: &[ArticleId]) -> Vec<&Article> {
        ids.iter().filter_map(|id| self.article(*id)).collect()
    }

    /// Maps an empty query result to the absent value, keeping "no
    /// qualifying items" distinct from an empty list.
    fn wrap_absent<T>(&self, items: Vec<T>) -> Option<Vec<T>> {
        if items.is_empty() {
            None
        } else {
            Some(items)
        }
    }
}
