//! Inline formatting: emphasis, code, strikethrough and links.
//!
//! Each delimiter form is an independent matcher anchored at the scan
//! position. [`INLINE_RULES`] lists them in priority order; the first rule
//! that matches consumes its whole span, so nested markup is not supported.

use crate::block::TextSegment;

/// A successful match at the scan position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capture<'a> {
    /// Bytes consumed, delimiters included
    pub len: usize,
    pub text: &'a str,
    pub url: Option<&'a str>,
}

/// Attributes a rule applies to its captured text
#[derive(Debug, Clone, Copy, Default)]
struct Style {
    bold: bool,
    italic: bool,
    code: bool,
    strikethrough: bool,
}

pub struct InlineRule {
    pub name: &'static str,
    matcher: fn(&str) -> Option<Capture<'_>>,
    style: Style,
}

impl InlineRule {
    /// Match this rule at the start of `rest` and build its segment.
    pub fn try_match(&self, rest: &str) -> Option<(usize, TextSegment)> {
        let capture = (self.matcher)(rest)?;
        let segment = TextSegment {
            text: capture.text.to_string(),
            bold: self.style.bold,
            italic: self.style.italic,
            code: self.style.code,
            strikethrough: self.style.strikethrough,
            link: capture.url.map(str::to_string),
        };
        Some((capture.len, segment))
    }
}

const PLAIN: Style = Style {
    bold: false,
    italic: false,
    code: false,
    strikethrough: false,
};

/// Inline rules in priority order.
pub static INLINE_RULES: &[InlineRule] = &[
    InlineRule {
        name: "bold_italic",
        matcher: bold_italic,
        style: Style {
            bold: true,
            italic: true,
            ..PLAIN
        },
    },
    InlineRule {
        name: "bold",
        matcher: bold,
        style: Style { bold: true, ..PLAIN },
    },
    InlineRule {
        name: "italic",
        matcher: italic,
        style: Style {
            italic: true,
            ..PLAIN
        },
    },
    InlineRule {
        name: "strikethrough",
        matcher: strikethrough,
        style: Style {
            strikethrough: true,
            ..PLAIN
        },
    },
    InlineRule {
        name: "code",
        matcher: code,
        style: Style { code: true, ..PLAIN },
    },
    InlineRule {
        name: "link",
        matcher: link,
        style: PLAIN,
    },
];

/// Split `text` into formatted segments, left to right.
///
/// Always returns at least one segment; empty input gives one empty segment.
pub fn extract_segments(text: &str) -> Vec<TextSegment> {
    let mut segments = Vec::new();
    let mut plain = String::new();
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];
        if let Some((len, segment)) = INLINE_RULES.iter().find_map(|rule| rule.try_match(rest)) {
            if !plain.is_empty() {
                segments.push(TextSegment::plain(std::mem::take(&mut plain)));
            }
            segments.push(segment);
            pos += len;
            continue;
        }

        let Some(ch) = rest.chars().next() else {
            break;
        };
        plain.push(ch);
        pos += ch.len_utf8();
    }

    if !plain.is_empty() || segments.is_empty() {
        segments.push(TextSegment::plain(plain));
    }
    segments
}

/// `open`, at least one character, then the first `close` on the same line.
fn enclosed<'a>(rest: &'a str, open: &str, close: &str) -> Option<(usize, &'a str)> {
    let body = rest.strip_prefix(open)?;
    let first = body.chars().next().filter(|&c| c != '\n')?;
    let line_end = body.find('\n').unwrap_or(body.len());
    let search_from = first.len_utf8();
    let close_at = body[search_from..line_end].find(close)? + search_from;
    Some((open.len() + close_at + close.len(), &body[..close_at]))
}

/// `delim`, one or more characters other than `delim`, then `delim`.
fn single(rest: &str, delim: char) -> Option<(usize, &str)> {
    let body = rest.strip_prefix(delim)?;
    let close_at = body.find(delim)?;
    if close_at == 0 {
        return None;
    }
    Some((close_at + 2 * delim.len_utf8(), &body[..close_at]))
}

fn capture((len, text): (usize, &str)) -> Capture<'_> {
    Capture {
        len,
        text,
        url: None,
    }
}

fn bold_italic(rest: &str) -> Option<Capture<'_>> {
    enclosed(rest, "***", "***").map(capture)
}

fn bold(rest: &str) -> Option<Capture<'_>> {
    enclosed(rest, "**", "**")
        .or_else(|| enclosed(rest, "__", "__"))
        .map(capture)
}

fn italic(rest: &str) -> Option<Capture<'_>> {
    single(rest, '*').or_else(|| single(rest, '_')).map(capture)
}

fn strikethrough(rest: &str) -> Option<Capture<'_>> {
    enclosed(rest, "~~", "~~").map(capture)
}

fn code(rest: &str) -> Option<Capture<'_>> {
    single(rest, '`').map(capture)
}

/// `[text](url)`, both parts non-empty.
fn link(rest: &str) -> Option<Capture<'_>> {
    let body = rest.strip_prefix('[')?;
    let text_end = body.find(']')?;
    if text_end == 0 {
        return None;
    }
    let target = body[text_end + 1..].strip_prefix('(')?;
    let url_end = target.find(')')?;
    if url_end == 0 {
        return None;
    }
    Some(Capture {
        len: 1 + text_end + 2 + url_end + 1,
        text: &body[..text_end],
        url: Some(&target[..url_end]),
    })
}
