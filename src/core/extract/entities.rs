//! Character reference decoding.
//!
//! Rewrites `&#NNN;` / `&#xHH;` numeric references and `&name;`
//! symbolic references in extracted text. One left-to-right pass;
//! replaced text is never re-scanned. Anything that does not resolve
//! to a positive code point is left verbatim; a malformed entity is
//! not an error.

use std::collections::BTreeMap;

/// Built-in symbolic entities. Configuration entries extend or
/// override these.
const DEFAULT_SYMBOLS: &[(&str, u32)] = &[
    ("amp", 38),
    ("lt", 60),
    ("gt", 62),
    ("quot", 34),
    ("apos", 39),
    ("nbsp", 160),
    ("iexcl", 161),
    ("cent", 162),
    ("pound", 163),
    ("yen", 165),
    ("sect", 167),
    ("copy", 169),
    ("laquo", 171),
    ("reg", 174),
    ("deg", 176),
    ("plusmn", 177),
    ("micro", 181),
    ("para", 182),
    ("middot", 183),
    ("raquo", 187),
    ("frac14", 188),
    ("frac12", 189),
    ("iquest", 191),
    ("Auml", 196),
    ("Ouml", 214),
    ("times", 215),
    ("Uuml", 220),
    ("szlig", 223),
    ("agrave", 224),
    ("auml", 228),
    ("ccedil", 231),
    ("egrave", 232),
    ("eacute", 233),
    ("ntilde", 241),
    ("ouml", 246),
    ("divide", 247),
    ("uuml", 252),
    ("ndash", 8211),
    ("mdash", 8212),
    ("lsquo", 8216),
    ("rsquo", 8217),
    ("ldquo", 8220),
    ("rdquo", 8221),
    ("bull", 8226),
    ("hellip", 8230),
    ("euro", 8364),
    ("trade", 8482),
    ("rarr", 8594),
];

/// Symbolic entity name → code point table
#[derive(Debug, Clone)]
pub struct EntityTable {
    symbols: BTreeMap<String, u32>,
}

impl Default for EntityTable {
    fn default() -> Self {
        Self::with_overrides(&BTreeMap::new())
    }
}

impl EntityTable {
    /// Built-in table extended by configuration-supplied mappings
    pub fn with_overrides(overrides: &BTreeMap<String, u32>) -> Self {
        let mut symbols: BTreeMap<String, u32> = DEFAULT_SYMBOLS
            .iter()
            .map(|&(name, code)| (name.to_string(), code))
            .collect();
        for (name, &code) in overrides {
            symbols.insert(name.clone(), code);
        }
        Self { symbols }
    }

    fn lookup(&self, name: &str) -> Option<u32> {
        self.symbols.get(name).copied()
    }
}

/// Decode character references in `text`.
///
/// The span between an `&` and the next `;` is a candidate entity;
/// whitespace inside the span disqualifies it. Scanning resumes
/// immediately after each replacement, so the output of one
/// substitution is never treated as input. An `&` with no following
/// `;` ends the scan with the remainder copied through.
pub fn decode_entities(text: &str, table: &EntityTable) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    loop {
        let Some(amp) = rest.find('&') else {
            out.push_str(rest);
            return out;
        };
        out.push_str(&rest[..amp]);
        let candidate = &rest[amp..];

        let Some(semi) = candidate.find(';') else {
            // No terminator anywhere ahead: no more entities exist
            out.push_str(candidate);
            return out;
        };

        let name = &candidate[1..semi];
        match resolve(name, table) {
            Some(ch) => {
                out.push(ch);
                rest = &candidate[semi + 1..];
            }
            None => {
                // Invalid entity: emit the '&' and search on
                out.push('&');
                rest = &candidate[1..];
            }
        }
    }
}

/// Resolve an entity name to its character, or `None` to leave it
/// verbatim
fn resolve(name: &str, table: &EntityTable) -> Option<char> {
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        return None;
    }
    let code = if let Some(hex) = name.strip_prefix("#x") {
        u32::from_str_radix(hex, 16).ok()?
    } else if let Some(dec) = name.strip_prefix('#') {
        dec.parse::<u32>().ok()?
    } else {
        table.lookup(name)?
    };
    if code == 0 {
        return None;
    }
    char::from_u32(code)
}
