use masthead_core::{Catalog, ValidationError};

#[test]
fn magazine_name_boundaries() {
    let mut catalog = Catalog::new();

    assert!(catalog.add_magazine("AB", "Tech").is_ok());
    assert_eq!(
        catalog.add_magazine("A", "Tech").unwrap_err(),
        ValidationError::MagazineNameLength { length: 1 }
    );
    assert!(catalog.add_magazine("Sixteen chars ok", "Tech").is_ok());
    assert_eq!(
        catalog.add_magazine("Seventeen chars!!", "Tech").unwrap_err(),
        ValidationError::MagazineNameLength { length: 17 }
    );
}

#[test]
fn title_boundaries() {
    let mut catalog = Catalog::new();
    let author = catalog.add_author("Jo March").unwrap();
    let magazine = catalog.add_magazine("Wired Minds", "Tech").unwrap();

    assert_eq!(
        catalog.add_article(author, magazine, "Hi").unwrap_err(),
        ValidationError::TitleLength { length: 2 }
    );
    assert!(catalog.add_article(author, magazine, "Hello World").is_ok());
    assert!(catalog
        .add_article(author, magazine, "x".repeat(50))
        .is_ok());
    assert_eq!(
        catalog
            .add_article(author, magazine, "x".repeat(51))
            .unwrap_err(),
        ValidationError::TitleLength { length: 51 }
    );
}

#[test]
fn empty_author_name_and_category_are_rejected() {
    let mut catalog = Catalog::new();

    assert_eq!(
        catalog.add_author("").unwrap_err(),
        ValidationError::EmptyAuthorName
    );
    assert_eq!(
        catalog.add_magazine("Wired Minds", "").unwrap_err(),
        ValidationError::EmptyCategory
    );
}

#[test]
fn rejected_construction_registers_nothing() {
    let mut catalog = Catalog::new();
    let author = catalog.add_author("Jo March").unwrap();
    let magazine = catalog.add_magazine("Wired Minds", "Tech").unwrap();

    assert!(catalog.add_article(author, magazine, "Hi").is_err());
    assert!(catalog.add_magazine("A", "Tech").is_err());

    assert!(catalog.articles().is_empty());
    assert_eq!(catalog.magazines().len(), 1);
    assert!(catalog.author_articles(author).unwrap().is_empty());
    assert!(catalog.magazine_articles(magazine).unwrap().is_empty());
}

#[test]
fn add_article_rejects_unknown_references() {
    let mut catalog = Catalog::new();
    let author = catalog.add_author("Jo March").unwrap();
    let magazine = catalog.add_magazine("Wired Minds", "Tech").unwrap();
    let ghost = uuid::Uuid::new_v4();

    assert_eq!(
        catalog.add_article(ghost, magazine, "Hello World").unwrap_err(),
        ValidationError::UnknownAuthor(ghost)
    );
    assert_eq!(
        catalog.add_article(author, ghost, "Hello World").unwrap_err(),
        ValidationError::UnknownMagazine(ghost)
    );
    assert!(catalog.articles().is_empty());
}

#[test]
fn validation_errors_render_human_readable_messages() {
    let message = ValidationError::MagazineNameLength { length: 1 }.to_string();
    assert!(message.contains("between 2 and 16"));

    let message = ValidationError::TitleLength { length: 51 }.to_string();
    assert!(message.contains("between 5 and 50"));
}
