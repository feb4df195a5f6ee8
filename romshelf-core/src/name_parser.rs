//! Title and tag extraction for listing file names.
//!
//! Listing entries follow the usual dump naming convention, with metadata in
//! parenthesized groups after the title:
//! ```text
//! Game Name (USA, Europe) (En,Fr,De) (Rev 1).zip
//! ```
//!
//! Groups do not nest. A `)` always closes the nearest `(`, and an empty
//! `()` is not a tag.

/// Display title and tags derived from a file name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedInfo {
    /// File name without the `.zip` extension and every tag group, trimmed.
    pub title: String,
    /// Inner text of each parenthesized group, left to right.
    pub tags: Vec<String>,
}

impl ParsedInfo {
    /// The leading tags shown on a compact card.
    pub fn summary_tags(&self, limit: usize) -> &[String] {
        &self.tags[..self.tags.len().min(limit)]
    }
}

/// Parse a listing file name into its title and tags.
///
/// # Examples
///
/// ```
/// use romshelf_core::name_parser::parse;
///
/// let parsed = parse("Gran Turismo 4 (USA) (Rev 1).zip");
/// assert_eq!(parsed.title, "Gran Turismo 4");
/// assert_eq!(parsed.tags, vec!["USA", "Rev 1"]);
///
/// let parsed = parse("(USA).zip");
/// assert_eq!(parsed.title, "");
/// assert_eq!(parsed.tags, vec!["USA"]);
/// ```
pub fn parse(file_name: &str) -> ParsedInfo {
    let tags = tag_groups(file_name)
        .into_iter()
        .map(|(open, close)| file_name[open + 1..close].to_string())
        .collect();

    let stem = strip_zip_extension(file_name);
    let mut title = String::with_capacity(stem.len());
    let mut cursor = 0;
    for (open, close) in tag_groups(stem) {
        title.push_str(&stem[cursor..open]);
        cursor = close + 1;
    }
    title.push_str(&stem[cursor..]);

    ParsedInfo {
        title: title.trim().to_string(),
        tags,
    }
}

/// Remove a trailing `.zip`, ignoring case.
fn strip_zip_extension(name: &str) -> &str {
    let split = name.len().saturating_sub(4);
    match name.get(split..) {
        Some(ext) if ext.eq_ignore_ascii_case(".zip") => &name[..split],
        _ => name,
    }
}

/// Byte offsets of the `(` and `)` of every non-empty group, left to right.
fn tag_groups(name: &str) -> Vec<(usize, usize)> {
    let mut groups = Vec::new();
    let mut from = 0;

    while let Some(offset) = name[from..].find('(') {
        let open = from + offset;
        // No closing paren anywhere after this one means no later group can close either.
        let Some(len) = name[open + 1..].find(')') else {
            break;
        };
        if len == 0 {
            from = open + 1;
            continue;
        }
        let close = open + 1 + len;
        groups.push((open, close));
        from = close + 1;
    }

    groups
}

#[cfg(test)]
#[path = "tests/name_parser_tests.rs"]
mod tests;
