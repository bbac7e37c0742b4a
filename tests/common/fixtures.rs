// Test fixtures: synthetic documentation trees

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A generated documentation site rooted in a temp directory
pub struct DocSite {
    pub dir: TempDir,
}

impl DocSite {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Create a site from (file name, markup) pairs
    pub fn with_pages(pages: &[(&str, &str)]) -> Self {
        let site = Self::new();
        for (name, markup) in pages {
            site.add_page(name, markup);
        }
        site
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a page, creating parent directories as needed
    pub fn add_page(&self, name: &str, markup: &str) {
        self.add_bytes(name, markup.as_bytes());
    }

    /// Write raw bytes (for encoding tests)
    pub fn add_bytes(&self, name: &str, bytes: &[u8]) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, bytes).unwrap();
    }
}

/// A typical chapter page the publishing pipeline emits: title,
/// navigation header/footer, and a content division.
pub fn chapter(title: &str, body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<html>
<head>
<title>{title}</title>
<meta http-equiv="Content-Type" content="text/html; charset=utf-8"/>
</head>
<body>
<div class="navheader"><a href="prev.html">Prev</a> | <a href="next.html">Next</a></div>
<div id="content">
<div class="section">{body}</div>
</div>
<div class="navfooter"><a href="index.html">Home</a></div>
</body>
</html>
"#
    )
}
