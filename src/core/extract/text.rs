//! Tag-aware text and metadata extraction.
//!
//! Drives a [`TagScanner`] over decoded markup in one forward pass
//! and produces a linear text buffer plus document metadata (title,
//! short description). No DOM is built; the extraction state is a
//! handful of flags and a div-nesting counter.
//!
//! The indexable span of a document is its content region: the
//! subtree opened by the element carrying `id="content"`, closed when
//! the div nesting opened inside that region returns to zero.
//! Navigation bars and elements opted out of indexing via the
//! `no_search_indexing` class are skipped wholesale.

use crate::core::extract::scanner::{StartTag, TagEvent, TagScanner};

/// Class tokens whose elements are excluded from indexing
const SKIP_CLASSES: [&str; 3] = ["navfooter", "navheader", "no_search_indexing"];

/// Result of extracting one document
#[derive(Debug, Default)]
pub struct ExtractedDoc {
    /// Linear indexable text, word-separated at element boundaries
    pub text: String,

    /// Raw title (nested tags stripped, whitespace collapsed).
    /// Duplicate `<title>` elements overwrite: last write wins.
    pub title: Option<String>,

    /// Whitespace-collapsed `<meta name="description">` content
    pub short_desc: Option<String>,
}

/// Extract indexable text and metadata from decoded markup.
///
/// Malformed markup degrades gracefully: unmatched constructs are
/// treated as plain text or no-ops, and text after the last
/// recognized tag is always flushed.
pub fn extract(markup: &str) -> ExtractedDoc {
    let mut doc = ExtractedDoc {
        text: String::with_capacity(markup.len().max(32)),
        ..Default::default()
    };

    let mut scanner = TagScanner::new(markup);
    let mut txt_start = 0usize;
    let mut title_start: Option<usize> = None;
    let mut in_title = false;
    let mut in_script = false;
    let mut content = false;
    let mut div_level = 0i32;

    while let Some(event) = scanner.next() {
        // Text between the previous tag and this one
        if (content || in_title) && !in_script {
            let tag_start = event.start();
            if tag_start > txt_start {
                doc.text.push_str(&markup[txt_start..tag_start]);
            }
        }
        txt_start = event.end();

        match event {
            TagEvent::Start(tag) => {
                if tag.name == "meta" {
                    handle_meta(&tag, &mut doc);
                }

                // Self-closing elements never open a region or state
                if !tag.self_closing {
                    if has_skip_class(&tag) {
                        txt_start = skip_subtree(&mut scanner, &tag.name, markup.len());
                    } else {
                        match tag.name.as_str() {
                            "title" => {
                                in_title = true;
                                title_start = Some(tag.end);
                            }
                            "script" => in_script = true,
                            _ => {}
                        }
                        if tag.attr("id") == Some("content") {
                            content = true;
                        }
                        if content && tag.name == "div" {
                            div_level += 1;
                        }
                    }
                }

                // Word separation across element boundaries
                doc.text.push(' ');
            }
            TagEvent::End(tag) => match tag.name.as_str() {
                "title" => {
                    if let Some(start) = title_start.take() {
                        if start < tag.start {
                            let raw = strip_tags(&markup[start..tag.start]);
                            doc.title = Some(collapse_blanks(&raw));
                        }
                    }
                    in_title = false;
                }
                "script" => in_script = false,
                "div" if content => {
                    div_level -= 1;
                    if div_level == 0 {
                        content = false;
                    }
                }
                _ => {}
            },
            TagEvent::Opaque { .. } => {}
        }
    }

    // Trailing text after the last recognized tag
    if txt_start < markup.len() {
        doc.text.push_str(&markup[txt_start..]);
    }

    doc
}

/// Keywords and description meta tags feed the text buffer regardless
/// of content-region state; description also becomes the
/// search-result snippet.
fn handle_meta(tag: &StartTag, doc: &mut ExtractedDoc) {
    let name = tag.attr("name");
    if !matches!(name, Some("keywords") | Some("description")) {
        return;
    }
    let content = tag.attr("content");
    if let Some(value) = content {
        if !value.is_empty() {
            doc.text.push(' ');
            doc.text.push_str(value);
            doc.text.push(' ');
        }
    }
    if name == Some("description") {
        if let Some(value) = content {
            doc.short_desc = Some(collapse_blanks(&value.replace('\n', " ")));
        }
    }
}

/// `class` is a space-delimited token set
fn has_skip_class(tag: &StartTag) -> bool {
    tag.attr("class").is_some_and(|class| {
        class
            .split_ascii_whitespace()
            .any(|token| SKIP_CLASSES.contains(&token))
    })
}

/// Consume a skipped element's whole subtree, balancing nested
/// elements of the same name. Returns the offset where text resumes;
/// an unclosed subtree consumes the rest of the document.
fn skip_subtree(scanner: &mut TagScanner, name: &str, markup_len: usize) -> usize {
    let mut depth = 1;
    for event in scanner.by_ref() {
        match &event {
            TagEvent::Start(tag) if tag.name == name && !tag.self_closing => depth += 1,
            TagEvent::End(tag) if tag.name == name => {
                depth -= 1;
                if depth == 0 {
                    return event.end();
                }
            }
            _ => {}
        }
    }
    tracing::debug!("Unclosed skipped element <{}>; dropping remainder", name);
    markup_len
}

/// Minimal tag stripping for title capture: repeatedly remove spans
/// delimited by `<` and the next `>`. A dangling `<` with no close is
/// kept verbatim.
fn strip_tags(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut rest = markup;
    while let Some(lt) = rest.find('<') {
        out.push_str(&rest[..lt]);
        match rest[lt..].find('>') {
            Some(gt) => rest = &rest[lt + gt + 1..],
            None => {
                out.push_str(&rest[lt..]);
                return out;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Trim and collapse internal whitespace runs to single spaces
fn collapse_blanks(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
