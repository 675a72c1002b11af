//! Core domain logic for Masthead, an in-memory author/magazine/article
//! catalog.
//!
//! This crate is the single source of truth for the relationship invariant:
//! every article is linked to exactly one author and exactly one magazine,
//! and both association lists always agree with the article's references.

pub mod catalog;
pub mod logging;
pub mod model;
pub mod service;

pub use catalog::Catalog;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::article::{Article, ArticleId};
pub use model::author::{Author, AuthorId};
pub use model::magazine::{Magazine, MagazineId};
pub use model::validation::{
    ValidationError, MAGAZINE_NAME_MAX, MAGAZINE_NAME_MIN, TITLE_MAX, TITLE_MIN,
};
pub use service::publishing::PublishingService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
