// Indexing integration tests
//
// Ordinal assignment, posting-list invariants, batch tolerance and
// artifact persistence.

use crate::common::fixtures::{chapter, DocSite};
use crate::common::{index_site, index_site_with_config};
use docdex::core::config::Config;
use docdex::core::persist;
use std::fs;

#[test]
fn test_ordinals_are_unique_and_increasing() {
    let site = DocSite::with_pages(&[
        ("guide/ch03.html", &chapter("Three", "gamma")),
        ("guide/ch01.html", &chapter("One", "alpha")),
        ("guide/ch02.html", &chapter("Two", "beta")),
    ]);

    let run = index_site(&site);

    assert_eq!(run.documents.len(), 3);
    for (i, record) in run.documents.iter().enumerate() {
        assert_eq!(record.ordinal, i as u32);
    }
    // sorted path order drives intake
    assert!(run.documents[0].path.ends_with("guide/ch01.html"));
    assert!(run.documents[1].path.ends_with("guide/ch02.html"));
    assert!(run.documents[2].path.ends_with("guide/ch03.html"));
}

#[test]
fn test_posting_lists_are_strictly_increasing() {
    let pages: Vec<(String, String)> = (0..12)
        .map(|i| {
            (
                format!("ch{i:02}.html"),
                chapter(
                    &format!("Chapter {i}"),
                    &format!("shared marker{i} text"),
                ),
            )
        })
        .collect();
    let site = DocSite::new();
    for (name, markup) in &pages {
        site.add_page(name, markup);
    }

    let run = index_site(&site);

    for (term, postings) in run.index.iter() {
        assert!(
            postings.windows(2).all(|w| w[0] < w[1]),
            "postings for '{term}' not strictly increasing: {postings:?}"
        );
    }
    // "shared" appears in every document exactly once
    let shared: Vec<u32> = (0..12).collect();
    assert_eq!(run.index.postings("share"), Some(&shared[..]));
}

#[test]
fn test_two_document_end_to_end() {
    let site = DocSite::with_pages(&[
        ("0.html", &chapter("Zero", "alpha")),
        ("1.html", &chapter("One", "alpha beta")),
    ]);

    let run = index_site(&site);

    assert_eq!(run.index.postings("alpha"), Some(&[0u32, 1][..]));
    assert_eq!(run.index.postings("beta"), Some(&[1u32][..]));
}

#[test]
fn test_unreadable_document_fails_soft() {
    let site = DocSite::new();
    site.add_bytes("garbled.html", &[0xFF, 0xFE, 0x00]);
    site.add_page("fine.html", &chapter("Fine", "alpha"));

    let run = index_site(&site);

    // both documents are recorded, the run completes
    assert_eq!(run.documents.len(), 2);
    assert!(run.index.postings("alpha").is_some());
}

#[test]
fn test_stats_reflect_run() {
    let site = DocSite::with_pages(&[
        ("a.html", &chapter("A", "alpha")),
        ("b.html", &chapter("B", "beta")),
    ]);

    let run = index_site(&site);

    assert_eq!(run.stats.documents_indexed, 2);
    assert_eq!(run.stats.documents_failed, 0);
    assert_eq!(run.stats.distinct_terms, run.index.term_count());
}

#[test]
fn test_exclude_patterns_limit_intake() {
    let site = DocSite::with_pages(&[
        ("current/ch01.html", &chapter("Current", "alpha")),
        ("archive/old.html", &chapter("Old", "obsolete")),
    ]);

    let mut config = Config::default();
    config.indexing.exclude_patterns = vec!["**/archive/**".to_string()];

    let run = index_site_with_config(&site, config);

    assert_eq!(run.documents.len(), 1);
    assert!(run.index.postings("obsolet").is_none());
}

#[test]
fn test_artifact_round_trip() {
    let site = DocSite::with_pages(&[
        ("a.html", &chapter("Alpha Page", "alpha")),
        ("b.html", &chapter("Beta Page", "alpha beta")),
    ]);

    let run = index_site(&site);

    let out_dir = tempfile::TempDir::new().unwrap();
    let artifact_path = out_dir.path().join("search_index.json");
    persist::write_artifact(&artifact_path, &run, "en").unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&artifact_path).unwrap()).unwrap();

    assert_eq!(value["language"], "en");
    assert_eq!(value["document_count"], 2);
    assert_eq!(value["documents"][0]["ordinal"], 0);
    assert_eq!(value["documents"][0]["title"], "Alpha Page");
    assert_eq!(value["terms"]["alpha"], serde_json::json!([0, 1]));
    assert_eq!(value["terms"]["beta"], serde_json::json!([1]));
}

#[test]
fn test_custom_stopword_configuration() {
    let site = DocSite::with_pages(&[("a.html", &chapter("A", "widget kumquat widget"))]);

    let mut config = Config::default();
    config.cleanup.stopwords = vec!["kumquat".to_string()];

    let run = index_site_with_config(&site, config);

    assert!(run.index.postings("kumquat").is_none());
    assert_eq!(run.index.postings("widget"), Some(&[0u32][..]));
}

#[test]
fn test_symbol_entity_configuration() {
    let site = DocSite::with_pages(&[("a.html", &chapter("A", "alpha &bolt; omega"))]);

    let mut config = Config::default();
    config
        .extraction
        .symbol_entities
        .insert("bolt".to_string(), 0x26A1);

    let run = index_site_with_config(&site, config);

    // U+26A1 is punctuation-class adjacent but not in the blanked
    // ranges; it survives as its own token
    assert!(run.index.postings("\u{26A1}").is_some());
    assert!(run.index.postings("alpha").is_some());
}
