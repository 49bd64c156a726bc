//! Single-line classifiers shared by the block scanner and its sub-parsers.

use once_cell::sync::Lazy;
use regex::Regex;

static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#{1,6})\s+(.*)$").unwrap());

static LIST_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*)([-*+]|[0-9]+\.)\s+(.*)$").unwrap());

static IMAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^!\[([^\]]*)\]\((\S+?)(?:\s+"([^"]*)")?\)$"#).unwrap());

/// A line that starts a list item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMarker<'a> {
    /// Leading whitespace, in characters
    pub indent: usize,
    /// `-`, `*`, `+`, or digits followed by `.`
    pub marker: &'a str,
    pub content: &'a str,
}

impl ListMarker<'_> {
    pub fn is_ordered(&self) -> bool {
        self.marker.ends_with('.')
    }

    /// The number of an ordered marker, saturating on overflow.
    pub fn number(&self) -> Option<u64> {
        let digits = self.marker.strip_suffix('.')?;
        Some(digits.parse().unwrap_or(u64::MAX))
    }
}

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Three or more of the same `-`, `*` or `_`, nothing else.
pub fn is_rule(line: &str) -> bool {
    let trimmed = line.trim();
    let Some(first) = trimmed.chars().next() else {
        return false;
    };
    matches!(first, '-' | '*' | '_') && trimmed.len() >= 3 && trimmed.chars().all(|c| c == first)
}

/// `# Title` style heading: depth and trimmed text.
pub fn heading(line: &str) -> Option<(u8, &str)> {
    let caps = HEADING.captures(line)?;
    let depth = caps.get(1)?.as_str().len() as u8;
    let text = caps.get(2).map_or("", |m| m.as_str().trim());
    Some((depth, text))
}

pub fn is_fence(line: &str) -> bool {
    line.trim().starts_with("```")
}

/// Language tag after an opening fence, if any.
pub fn fence_language(line: &str) -> Option<&str> {
    let tag = line.trim().strip_prefix("```")?.trim();
    if tag.is_empty() { None } else { Some(tag) }
}

pub fn is_quote(line: &str) -> bool {
    line.trim().starts_with('>')
}

/// Strip one `>` and at most one following whitespace character (a space
/// or a tab).
pub fn strip_quote(line: &str) -> &str {
    let line = line.trim_start();
    let Some(rest) = line.strip_prefix('>') else {
        return line;
    };
    match rest.chars().next() {
        Some(c) if c.is_whitespace() => &rest[c.len_utf8()..],
        _ => rest,
    }
}

pub fn list_marker(line: &str) -> Option<ListMarker<'_>> {
    let caps = LIST_ITEM.captures(line)?;
    Some(ListMarker {
        indent: caps.get(1).map_or(0, |m| m.as_str().chars().count()),
        marker: caps.get(2)?.as_str(),
        content: caps.get(3).map_or("", |m| m.as_str()),
    })
}

/// Table separator row such as `|---|:---:|`.
pub fn is_separator(line: &str) -> bool {
    !line.is_empty()
        && line.contains('-')
        && line
            .chars()
            .all(|c| matches!(c, '|' | '-' | ':') || c.is_whitespace())
}

/// A pipe line followed by a separator row.
pub fn is_table_start(lines: &[&str]) -> bool {
    match lines {
        [header, separator, ..] => header.contains('|') && is_separator(separator),
        _ => false,
    }
}

/// `![alt](href "title")` standing alone on a line.
pub fn image(line: &str) -> Option<(&str, Option<&str>, Option<&str>)> {
    let caps = IMAGE.captures(line.trim())?;
    let alt = caps.get(1).map(|m| m.as_str()).filter(|a| !a.is_empty());
    let href = caps.get(2)?.as_str();
    let title = caps.get(3).map(|m| m.as_str());
    Some((href, alt, title))
}

/// Whether a line would open another block and so ends a paragraph.
///
/// Any line containing a pipe counts, valid table or not.
pub fn looks_like_block_start(line: &str) -> bool {
    heading(line).is_some()
        || is_rule(line)
        || is_fence(line)
        || is_quote(line)
        || list_marker(line).is_some()
        || line.contains('|')
}
