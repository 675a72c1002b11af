//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `masthead_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use masthead_core::Catalog;

fn main() {
    println!("masthead_core ping={}", masthead_core::ping());
    println!("masthead_core version={}", masthead_core::core_version());

    // Tiny fixed graph so the binary also exercises the catalog path.
    let mut catalog = Catalog::new();
    let author = catalog.add_author("Smoke Author").expect("valid author");
    let magazine = catalog
        .add_magazine("Smoke Weekly", "Diagnostics")
        .expect("valid magazine");
    catalog
        .add_article(author, magazine, "Smoke test article")
        .expect("valid article");

    let top = catalog.top_publisher().expect("registry is non-empty");
    println!(
        "masthead_core top_publisher={} articles={}",
        top.name(),
        top.article_ids().len()
    );
}
