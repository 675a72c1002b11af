use masthead_core::Catalog;

#[test]
fn snapshot_uses_expected_wire_fields() {
    let mut catalog = Catalog::new();
    let author = catalog.add_author("Ada Vance").unwrap();
    let magazine = catalog.add_magazine("Wired Minds", "Tech").unwrap();
    let article = catalog
        .add_article(author, magazine, "Machines that dream")
        .unwrap();

    let json = serde_json::to_value(&catalog).unwrap();

    assert_eq!(json["authors"][0]["id"], author.to_string());
    assert_eq!(json["authors"][0]["name"], "Ada Vance");
    assert_eq!(json["authors"][0]["article_ids"][0], article.to_string());

    assert_eq!(json["magazines"][0]["id"], magazine.to_string());
    assert_eq!(json["magazines"][0]["name"], "Wired Minds");
    assert_eq!(json["magazines"][0]["category"], "Tech");
    assert_eq!(json["magazines"][0]["article_ids"][0], article.to_string());

    assert_eq!(json["articles"][0]["id"], article.to_string());
    assert_eq!(json["articles"][0]["title"], "Machines that dream");
    assert_eq!(json["articles"][0]["author_id"], author.to_string());
    assert_eq!(json["articles"][0]["magazine_id"], magazine.to_string());
}

#[test]
fn snapshot_of_empty_catalog_has_empty_registries() {
    let catalog = Catalog::new();
    let json = serde_json::to_value(&catalog).unwrap();

    assert_eq!(json["authors"].as_array().unwrap().len(), 0);
    assert_eq!(json["magazines"].as_array().unwrap().len(), 0);
    assert_eq!(json["articles"].as_array().unwrap().len(), 0);
}
