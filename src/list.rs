use crate::block::{List, ListItem};
use crate::lines::{is_blank, list_marker};

const TASK_MARKERS: &[(&str, bool)] = &[("[ ]", false), ("[x]", true), ("[X]", true)];

/// Parse a list starting at `lines[0]`, which must be a list-marker line.
///
/// The first line fixes the base indentation and whether the list is
/// ordered. Items deeper than the base are folded into the list without
/// appearing in the output; the list ends at a shallower marker or at a
/// non-blank line that is neither a marker nor an indented continuation.
pub fn parse_list(lines: &[&str]) -> Option<(List, usize)> {
    let first = list_marker(lines.first()?)?;
    let base = first.indent;
    let ordered = first.is_ordered();
    let start = match first.number() {
        Some(n) if ordered => n.max(1),
        _ => 1,
    };

    let mut items = Vec::new();
    let mut consumed = 0;

    for line in lines {
        match list_marker(line) {
            Some(marker) if marker.indent < base => break,
            // Nested list: not modeled
            Some(marker) if marker.indent > base => {}
            Some(marker) => items.push(list_item(marker.content)),
            None if is_blank(line) => {}
            None if !items.is_empty() && is_continuation(line, base) => {}
            None => break,
        }
        consumed += 1;
    }

    tracing::trace!(items = items.len(), consumed, ordered, "parsed list");
    Some((
        List {
            ordered,
            start,
            items,
        },
        consumed,
    ))
}

/// Indented at least two spaces past the list's own markers.
fn is_continuation(line: &str, base: usize) -> bool {
    line.chars().take_while(|&c| c == ' ').count() >= base + 2
}

fn list_item(content: &str) -> ListItem {
    for &(marker, checked) in TASK_MARKERS {
        if let Some(rest) = content.strip_prefix(marker) {
            return ListItem {
                text: rest.trim().to_string(),
                checked: Some(checked),
            };
        }
    }
    ListItem {
        text: content.to_string(),
        checked: None,
    }
}
