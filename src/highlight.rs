//! Single-pass lexical classification of source code lines.
//!
//! The highlighter is language-agnostic: it recognizes line and block
//! comments, quoted strings, numbers and identifiers, and classifies
//! identifiers against a keyword set supplied through [`HighlightConfig`].

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::config::HighlightConfig;

static DEFAULT_HIGHLIGHTER: Lazy<Highlighter> =
    Lazy::new(|| Highlighter::new(&HighlightConfig::default()));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightKind {
    Keyword,
    String,
    Comment,
    Number,
    Function,
    Plain,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightedSegment {
    pub text: String,
    pub kind: HighlightKind,
}

impl HighlightedSegment {
    fn new(text: &str, kind: HighlightKind) -> Self {
        Self {
            text: text.to_string(),
            kind,
        }
    }
}

/// Classifies code lines with a fixed keyword set.
#[derive(Debug, Clone)]
pub struct Highlighter {
    keywords: HashSet<String>,
}

impl Default for Highlighter {
    fn default() -> Self {
        DEFAULT_HIGHLIGHTER.clone()
    }
}

impl Highlighter {
    pub fn new(config: &HighlightConfig) -> Self {
        Self {
            keywords: config.keywords.iter().cloned().collect(),
        }
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    /// Classify one line. Concatenating the segment texts gives back `code`.
    pub fn highlight_line(&self, code: &str) -> Vec<HighlightedSegment> {
        let mut segments = Vec::new();
        let mut plain = String::new();
        let mut prev: Option<char> = None;
        let mut pos = 0;

        while pos < code.len() {
            let rest = &code[pos..];
            let Some(ch) = rest.chars().next() else {
                break;
            };

            let Some((len, kind)) = self.classify(rest, ch, prev) else {
                plain.push(ch);
                prev = Some(ch);
                pos += ch.len_utf8();
                continue;
            };

            if !plain.is_empty() {
                segments.push(HighlightedSegment {
                    text: std::mem::take(&mut plain),
                    kind: HighlightKind::Plain,
                });
            }
            let token = &rest[..len];
            segments.push(HighlightedSegment::new(token, kind));
            prev = token.chars().last();
            pos += len;
        }

        if !plain.is_empty() {
            segments.push(HighlightedSegment {
                text: plain,
                kind: HighlightKind::Plain,
            });
        }
        segments
    }

    /// Classify every line of a code block.
    pub fn highlight_code(&self, code: &str) -> Vec<Vec<HighlightedSegment>> {
        code.split('\n').map(|line| self.highlight_line(line)).collect()
    }

    /// Length and kind of the token starting at `rest`, if any rule applies.
    fn classify(&self, rest: &str, ch: char, prev: Option<char>) -> Option<(usize, HighlightKind)> {
        if rest.starts_with("//") || ch == '#' {
            return Some((rest.len(), HighlightKind::Comment));
        }
        if let Some(body) = rest.strip_prefix("/*") {
            let len = body.find("*/").map_or(rest.len(), |end| end + 4);
            return Some((len, HighlightKind::Comment));
        }
        if matches!(ch, '"' | '\'' | '`') {
            return Some((string_len(rest, ch as u8), HighlightKind::String));
        }
        if ch.is_ascii_digit() && prev.is_none_or(starts_number) {
            let len = rest
                .bytes()
                .take_while(|b| b.is_ascii_hexdigit() || matches!(b, b'.' | b'x' | b'X'))
                .count();
            return Some((len, HighlightKind::Number));
        }
        if ch.is_ascii_alphabetic() || ch == '_' || ch == '$' {
            let len = rest
                .bytes()
                .take_while(|&b| b.is_ascii_alphanumeric() || b == b'_' || b == b'$')
                .count();
            let word = &rest[..len];
            let kind = if self.is_keyword(word) {
                HighlightKind::Keyword
            } else if rest[len..].trim_start().starts_with('(') {
                HighlightKind::Function
            } else {
                HighlightKind::Plain
            };
            return Some((len, kind));
        }
        None
    }
}

/// Characters after which a digit begins a number literal.
fn starts_number(c: char) -> bool {
    c.is_whitespace() || matches!(c, '(' | '[' | '{' | ',' | ';' | ':' | '=')
}

/// Quoted string including both quotes; runs to the end when unterminated.
fn string_len(rest: &str, quote: u8) -> usize {
    let bytes = rest.as_bytes();
    let mut j = 1;
    while j < bytes.len() && bytes[j] != quote {
        if bytes[j] == b'\\' {
            j += 1;
        }
        j += 1;
    }
    (j + 1).min(bytes.len())
}

/// Classify one line with the built-in keyword set.
pub fn highlight_line(code: &str) -> Vec<HighlightedSegment> {
    DEFAULT_HIGHLIGHTER.highlight_line(code)
}
