//! Field constraints shared by all catalog entities.
//!
//! # Responsibility
//! - Define the single `ValidationError` kind raised by every constructor
//!   and mutating setter.
//! - Keep length bounds in one place so model and tests agree.
//!
//! # Invariants
//! - A failed check never leaves a partially mutated entity behind; callers
//!   check before writing any state.

use crate::model::article::ArticleId;
use crate::model::author::AuthorId;
use crate::model::magazine::MagazineId;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum magazine name length in characters.
pub const MAGAZINE_NAME_MIN: usize = 2;
/// Maximum magazine name length in characters.
pub const MAGAZINE_NAME_MAX: usize = 16;
/// Minimum article title length in characters.
pub const TITLE_MIN: usize = 5;
/// Maximum article title length in characters.
pub const TITLE_MAX: usize = 50;

/// Rejected construction or mutation input.
///
/// Unknown-ID variants are the Rust analogue of the original dynamic
/// "must be an Author/Magazine instance" checks: a reference that does not
/// resolve inside the owning catalog is invalid input, not a distinct
/// error family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyAuthorName,
    MagazineNameLength { length: usize },
    EmptyCategory,
    TitleLength { length: usize },
    UnknownAuthor(AuthorId),
    UnknownMagazine(MagazineId),
    UnknownArticle(ArticleId),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAuthorName => write!(f, "author name must not be empty"),
            Self::MagazineNameLength { length } => write!(
                f,
                "magazine name must be between {MAGAZINE_NAME_MIN} and {MAGAZINE_NAME_MAX} characters, got {length}"
            ),
            Self::EmptyCategory => write!(f, "magazine category must not be empty"),
            Self::TitleLength { length } => write!(
                f,
                "article title must be between {TITLE_MIN} and {TITLE_MAX} characters, got {length}"
            ),
            Self::UnknownAuthor(id) => write!(f, "author not found in catalog: {id}"),
            Self::UnknownMagazine(id) => write!(f, "magazine not found in catalog: {id}"),
            Self::UnknownArticle(id) => write!(f, "article not found in catalog: {id}"),
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn validate_author_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyAuthorName);
    }
    Ok(())
}

pub(crate) fn validate_magazine_name(name: &str) -> Result<(), ValidationError> {
    let length = name.chars().count();
    if !(MAGAZINE_NAME_MIN..=MAGAZINE_NAME_MAX).contains(&length) {
        return Err(ValidationError::MagazineNameLength { length });
    }
    Ok(())
}

pub(crate) fn validate_category(category: &str) -> Result<(), ValidationError> {
    if category.is_empty() {
        return Err(ValidationError::EmptyCategory);
    }
    Ok(())
}

pub(crate) fn validate_title(title: &str) -> Result<(), ValidationError> {
    let length = title.chars().count();
    if !(TITLE_MIN..=TITLE_MAX).contains(&length) {
        return Err(ValidationError::TitleLength { length });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magazine_name_bounds_are_inclusive() {
        assert!(validate_magazine_name("AB").is_ok());
        assert!(validate_magazine_name("A".repeat(16).as_str()).is_ok());
        assert_eq!(
            validate_magazine_name("A"),
            Err(ValidationError::MagazineNameLength { length: 1 })
        );
        assert_eq!(
            validate_magazine_name("A".repeat(17).as_str()),
            Err(ValidationError::MagazineNameLength { length: 17 })
        );
    }

    #[test]
    fn title_bounds_are_inclusive() {
        assert!(validate_title("Hello").is_ok());
        assert!(validate_title("H".repeat(50).as_str()).is_ok());
        assert_eq!(
            validate_title("Hi"),
            Err(ValidationError::TitleLength { length: 2 })
        );
        assert_eq!(
            validate_title("H".repeat(51).as_str()),
            Err(ValidationError::TitleLength { length: 51 })
        );
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        // Two characters, six bytes.
        assert!(validate_magazine_name("日本").is_ok());
    }
}
