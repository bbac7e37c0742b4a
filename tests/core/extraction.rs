// Extraction integration tests
//
// Encoding resolution, content-region scoping, exclusion classes and
// metadata capture, exercised through the full pipeline.

use crate::common::fixtures::{chapter, DocSite};
use crate::common::{index_site, index_site_with_config};
use docdex::core::config::Config;

#[test]
fn test_chapter_body_is_indexed() {
    let site = DocSite::new();
    site.add_page("ch01.html", &chapter("Installation", "Unpack the tarball"));

    let run = index_site(&site);

    assert!(run.index.postings("unpack").is_some());
    assert!(run.index.postings("tarbal").is_some()); // stemmed
}

#[test]
fn test_navigation_is_not_indexed() {
    let site = DocSite::new();
    site.add_page("ch01.html", &chapter("Chapter", "real content"));

    let run = index_site(&site);

    // navheader/navfooter link text never reaches the index
    assert!(run.index.postings("prev").is_none());
    assert!(run.index.postings("next").is_none());
    assert!(run.index.postings("home").is_none());
}

#[test]
fn test_no_search_indexing_class_is_excluded() {
    let site = DocSite::new();
    site.add_page(
        "ch01.html",
        &chapter(
            "Chapter",
            "alpha <span class=\"no_search_indexing\">hushhush</span> omega",
        ),
    );

    let run = index_site(&site);

    assert!(run.index.postings("alpha").is_some());
    assert!(run.index.postings("hushhush").is_none());
    assert!(run.index.postings("omega").is_some());
}

#[test]
fn test_text_outside_content_division_is_ignored() {
    let site = DocSite::new();
    site.add_page(
        "page.html",
        "<html><body><p>intro</p>\
         <div id=\"content\"><div>kernel</div></div>\
         <p>outro</p></body></html>",
    );

    let run = index_site(&site);

    assert!(run.index.postings("kernel").is_some());
    assert!(run.index.postings("intro").is_none());
    assert!(run.index.postings("outro").is_none());
}

#[test]
fn test_title_is_captured_raw_and_indexed_normalized() {
    let site = DocSite::new();
    site.add_page(
        "page.html",
        "<html><head><title>Hello <b>World</b></title></head><body></body></html>",
    );

    let run = index_site(&site);

    assert_eq!(run.documents[0].title.as_deref(), Some("Hello World"));
    // title text flows into the buffer and is normalized like any text
    assert!(run.index.postings("hello").is_some());
    assert!(run.index.postings("world").is_some());
}

#[test]
fn test_meta_description_becomes_snippet() {
    let site = DocSite::new();
    site.add_page(
        "page.html",
        "<html><head>\
         <meta name=\"description\" content=\"Covers\nadvanced topics\"/>\
         </head><body><div id=\"content\">x</div></body></html>",
    );

    let run = index_site(&site);

    assert_eq!(
        run.documents[0].short_desc.as_deref(),
        Some("Covers advanced topics")
    );
    // description text is also indexable
    assert!(run.index.postings("advanc").is_some());
}

#[test]
fn test_xml_declaration_encoding_wins_over_meta() {
    // ISO-8859-1 bytes with a conflicting utf-8 meta charset; the
    // 0xE9 byte only decodes to é under the XML declaration
    let mut doc = Vec::new();
    doc.extend_from_slice(
        b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\
          <html><head>\
          <meta http-equiv=\"Content-Type\" content=\"text/html; charset=utf-8\"/>\
          </head><body><div id=\"content\">caf",
    );
    doc.push(0xE9);
    doc.extend_from_slice(b"</div></body></html>");

    let site = DocSite::new();
    site.add_bytes("latin.html", &doc);

    let run = index_site(&site);
    assert!(run.index.postings("caf\u{e9}").is_some());
}

#[test]
fn test_forced_encoding_skips_detection() {
    // Document claims UTF-8 but the run forces ISO-8859-1
    let mut doc = Vec::new();
    doc.extend_from_slice(
        b"<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
          <html><body><div id=\"content\">d",
    );
    doc.push(0xE9);
    doc.extend_from_slice(b"tail</div></body></html>");

    let site = DocSite::new();
    site.add_bytes("forced.html", &doc);

    let mut config = Config::default();
    config.extraction.file_encoding = Some("ISO-8859-1".to_string());

    let run = index_site_with_config(&site, config);
    assert!(run.index.postings("d\u{e9}tail").is_some());
}

#[test]
fn test_entities_are_decoded() {
    let site = DocSite::new();
    site.add_page(
        "page.html",
        &chapter("E", "caf&#233; caf&#xE9; &ldquo;quoted&rdquo; &unknown; x"),
    );

    let run = index_site(&site);

    assert!(run.index.postings("caf\u{e9}").is_some());
    // "quoted" stemmed
    assert!(run.index.postings("quot").is_some());
    // the unknown entity stays verbatim; punctuation blanking then
    // reduces it to its bare name
    assert!(run.index.postings("unknown").is_some());
}

#[test]
fn test_stopwords_respect_word_boundaries() {
    let site = DocSite::new();
    site.add_page("page.html", &chapter("S", "bandana and category"));

    let run = index_site(&site);

    assert!(run.index.postings("bandana").is_some());
    assert!(run.index.postings("categori").is_some()); // stemmed
    assert!(run.index.postings("and").is_none());
}

#[test]
fn test_script_bodies_never_indexed() {
    let site = DocSite::new();
    site.add_page(
        "page.html",
        &chapter("S", "alpha <script>var secretword = 1;</script> omega"),
    );

    let run = index_site(&site);

    assert!(run.index.postings("secretword").is_none());
    assert!(run.index.postings("alpha").is_some());
    assert!(run.index.postings("omega").is_some());
}

#[test]
fn test_cjk_language_uses_bigrams() {
    let site = DocSite::new();
    site.add_page("page.html", &chapter("J", "日本語の文書"));

    let mut config = Config::default();
    config.indexing.language = "ja".to_string();

    let run = index_site_with_config(&site, config);

    assert!(run.index.postings("日本").is_some());
    assert!(run.index.postings("本語").is_some());
}

#[test]
fn test_malformed_markup_degrades_gracefully() {
    let site = DocSite::new();
    site.add_page(
        "broken.html",
        "<html><body><div id=\"content\">good text<div class=\"unclosed",
    );
    site.add_page("fine.html", &chapter("F", "healthy page"));

    let run = index_site(&site);

    // Both documents get records; the healthy one is indexed
    assert_eq!(run.documents.len(), 2);
    assert!(run.index.postings("healthi").is_some());
}
