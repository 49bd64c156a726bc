//! Property tests: the scanner, formatter and highlighter are total, and
//! their outputs keep the text they were given.

use proptest::prelude::*;

/// Markdown-heavy alphabet so every block rule gets exercised.
const MARKDOWN_ALPHABET: &str = "[-*_#>|`~\\[\\]()!: a-z0-9.\n]{0,200}";

fn visible(segments: &[mdview::TextSegment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}

proptest! {
    #[test]
    fn parse_is_total_and_deterministic(doc in MARKDOWN_ALPHABET) {
        let first = mdview::parse(&doc);
        let second = mdview::parse(&doc);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn parse_handles_arbitrary_unicode(doc in "(\\PC|\n){0,120}") {
        let _ = mdview::parse(&doc);
    }

    #[test]
    fn headings_stay_in_range(doc in MARKDOWN_ALPHABET) {
        for block in mdview::parse(&doc) {
            if let mdview::Block::Heading { depth, .. } = block {
                prop_assert!((1..=6).contains(&depth));
            }
        }
    }

    #[test]
    fn table_align_matches_header(doc in MARKDOWN_ALPHABET) {
        for block in mdview::parse(&doc) {
            if let mdview::Block::Table(table) = block {
                prop_assert_eq!(table.align.len(), table.header.len());
            }
        }
    }

    #[test]
    fn segments_never_empty(text in "(\\PC|\n){0,120}") {
        prop_assert!(!mdview::extract_segments(&text).is_empty());
    }

    #[test]
    fn undelimited_text_is_one_plain_segment(text in "[a-zA-Z0-9 ,.;!?]{1,80}") {
        let segments = mdview::extract_segments(&text);
        prop_assert_eq!(segments, vec![mdview::TextSegment::plain(text)]);
    }

    #[test]
    fn delimiters_are_stripped(
        before in "[a-z ]{0,10}",
        inner in "[a-z]{1,10}",
        after in "[a-z ]{0,10}",
        (open, close) in prop::sample::select(vec![
            ("***", "***"),
            ("**", "**"),
            ("__", "__"),
            ("*", "*"),
            ("_", "_"),
            ("~~", "~~"),
            ("`", "`"),
            ("[", "](https://example.com)"),
        ]),
    ) {
        let text = format!("{before}{open}{inner}{close}{after}");
        let segments = mdview::extract_segments(&text);
        prop_assert_eq!(visible(&segments), format!("{before}{inner}{after}"));
        prop_assert!(segments.iter().any(|s| !s.is_plain() && s.text == inner));
    }

    #[test]
    fn highlight_covers_the_line(line in "[^\n]{0,120}") {
        let segments = mdview::highlight_line(&line);
        let joined: String = segments.iter().map(|s| s.text.as_str()).collect();
        prop_assert_eq!(joined, line);
        prop_assert!(segments.iter().all(|s| !s.text.is_empty()));
    }
}
