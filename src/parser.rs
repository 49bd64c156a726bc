use crate::block::{Block, Paragraph};
use crate::cursor::LineCursor;
use crate::lines::{
    fence_language, heading, image, is_blank, is_fence, is_quote, is_rule, list_marker,
    looks_like_block_start, strip_quote,
};
use crate::list::parse_list;
use crate::table::parse_table;

/// Parse markdown text into a list of blocks.
///
/// Never fails: malformed constructs fall through to looser block kinds,
/// ending with a plain paragraph.
pub fn parse(markdown: &str) -> Vec<Block> {
    let mut cursor = LineCursor::new(markdown);
    let mut blocks = Vec::new();

    while let Some(line) = cursor.peek() {
        let start = cursor.position();
        if let Some(block) = scan_block(&mut cursor, line) {
            tracing::trace!(kind = block.kind(), line = start + 1, "scanned block");
            blocks.push(block);
        }
    }

    tracing::debug!(blocks = blocks.len(), lines = cursor.position(), "parsed markdown");
    blocks
}

/// Classify the line under the cursor and consume its block.
///
/// Every branch advances the cursor by at least one line.
fn scan_block<'a>(cursor: &mut LineCursor<'a>, line: &'a str) -> Option<Block> {
    if is_blank(line) {
        cursor.advance(1);
        return None;
    }

    if is_rule(line) {
        cursor.advance(1);
        return Some(Block::Rule);
    }

    if let Some((depth, text)) = heading(line) {
        cursor.advance(1);
        return Some(Block::Heading {
            depth,
            text: text.to_string(),
        });
    }

    if is_fence(line) {
        return Some(code_block(cursor, line));
    }

    if line.contains('|') {
        if let Some((table, consumed)) = parse_table(cursor.remaining()) {
            cursor.advance(consumed);
            return Some(Block::Table(table));
        }
        tracing::debug!(line = cursor.position() + 1, "pipe line without separator row");
    }

    if list_marker(line).is_some() {
        if let Some((list, consumed)) = parse_list(cursor.remaining()) {
            cursor.advance(consumed);
            return Some(Block::List(list));
        }
    }

    if is_quote(line) {
        return Some(blockquote(cursor));
    }

    if let Some((href, alt, title)) = image(line) {
        cursor.advance(1);
        return Some(Block::Image {
            href: href.to_string(),
            alt: alt.map(str::to_string),
            title: title.map(str::to_string),
        });
    }

    Some(paragraph(cursor, line))
}

/// Fenced code. An unterminated fence runs to the end of the document.
fn code_block(cursor: &mut LineCursor<'_>, opening: &str) -> Block {
    let language = fence_language(opening).map(str::to_string);
    let remaining = cursor.remaining();
    let body: Vec<&str> = remaining[1..]
        .iter()
        .take_while(|line| !is_fence(line))
        .copied()
        .collect();

    let closed = body.len() + 1 < remaining.len();
    if !closed {
        tracing::debug!(
            line = cursor.position() + 1,
            "unterminated code fence, consuming to end of document"
        );
    }

    cursor.advance(1 + body.len() + usize::from(closed));
    Block::CodeBlock {
        language,
        text: body.join("\n"),
    }
}

/// Quoted lines plus lazy continuation lines, up to the first blank line.
fn blockquote(cursor: &mut LineCursor<'_>) -> Block {
    let mut lines = Vec::new();
    while let Some(line) = cursor.peek() {
        let continues = is_quote(line) || (!lines.is_empty() && !is_blank(line));
        if !continues {
            break;
        }
        lines.push(strip_quote(line));
        cursor.advance(1);
    }

    let text = lines.join("\n");
    Block::Blockquote {
        text: text.clone(),
        inner: Paragraph { text },
    }
}

fn paragraph(cursor: &mut LineCursor<'_>, first: &str) -> Block {
    let mut parts = vec![first.trim()];
    cursor.advance(1);

    while let Some(line) = cursor.peek() {
        if is_blank(line) || looks_like_block_start(line) {
            break;
        }
        parts.push(line.trim());
        cursor.advance(1);
    }

    Block::Paragraph(Paragraph {
        text: parts.join(" "),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{Alignment, List, ListItem};

    fn para(text: &str) -> Block {
        Block::Paragraph(Paragraph { text: text.into() })
    }

    #[test]
    fn empty_document() {
        assert!(parse("").is_empty());
        assert!(parse("\n\n   \n").is_empty());
    }

    #[test]
    fn heading() {
        assert_eq!(
            parse("# Title"),
            [Block::Heading {
                depth: 1,
                text: "Title".into()
            }]
        );
    }

    #[test]
    fn heading_without_space_is_text() {
        assert_eq!(parse("#hashtag"), [para("#hashtag")]);
    }

    #[test]
    fn paragraph_lines_are_joined() {
        assert_eq!(
            parse("first line\n  second line\nthird\n\nnext"),
            [para("first line second line third"), para("next")]
        );
    }

    #[test]
    fn paragraph_ends_at_block_start() {
        assert_eq!(
            parse("text\n# Heading"),
            [
                para("text"),
                Block::Heading {
                    depth: 1,
                    text: "Heading".into()
                }
            ]
        );
    }

    #[test]
    fn pipe_line_ends_paragraph_even_without_table() {
        assert_eq!(
            parse("prose\na | b\nmore"),
            [para("prose"), para("a | b more")]
        );
    }

    #[test]
    fn rules() {
        assert_eq!(parse("---\n***\n___"), [Block::Rule, Block::Rule, Block::Rule]);
    }

    #[test]
    fn fenced_code() {
        assert_eq!(
            parse("```rust\nlet x = 1;\n\nx\n```\nafter"),
            [
                Block::CodeBlock {
                    language: Some("rust".into()),
                    text: "let x = 1;\n\nx".into()
                },
                para("after")
            ]
        );
    }

    #[test]
    fn unterminated_fence_runs_to_end() {
        assert_eq!(
            parse("```py\nprint(1)\n# not a heading\n\n- nor a list"),
            [Block::CodeBlock {
                language: Some("py".into()),
                text: "print(1)\n# not a heading\n\n- nor a list".into()
            }]
        );
    }

    #[test]
    fn empty_fence() {
        assert_eq!(
            parse("```\n```"),
            [Block::CodeBlock {
                language: None,
                text: String::new()
            }]
        );
    }

    #[test]
    fn table() {
        let blocks = parse("a|b\n---|---:\n1|2\ntext");
        let Block::Table(table) = &blocks[0] else {
            panic!("expected table, got {:?}", blocks[0]);
        };
        assert_eq!(table.align, [Alignment::Unspecified, Alignment::Right]);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(blocks[1], para("text"));
    }

    #[test]
    fn table_without_separator_is_paragraph() {
        assert_eq!(parse("a | b\nc | d"), [para("a | b"), para("c | d")]);
    }

    #[test]
    fn task_list() {
        assert_eq!(
            parse("- [ ] task\n- [x] done"),
            [Block::List(List {
                ordered: false,
                start: 1,
                items: vec![
                    ListItem {
                        text: "task".into(),
                        checked: Some(false)
                    },
                    ListItem {
                        text: "done".into(),
                        checked: Some(true)
                    },
                ],
            })]
        );
    }

    #[test]
    fn list_then_paragraph() {
        let blocks = parse("1. one\n2. two\n\nafter");
        assert!(matches!(&blocks[0], Block::List(l) if l.ordered && l.items.len() == 2));
        assert_eq!(blocks[1], para("after"));
    }

    #[test]
    fn blockquote_with_lazy_continuation() {
        assert_eq!(
            parse("> quoted\n>more\nlazy line\n\nafter"),
            [
                Block::Blockquote {
                    text: "quoted\nmore\nlazy line".into(),
                    inner: Paragraph {
                        text: "quoted\nmore\nlazy line".into()
                    }
                },
                para("after")
            ]
        );
    }

    #[test]
    fn standalone_image() {
        assert_eq!(
            parse("![Diagram](img/d.png \"Overview\")"),
            [Block::Image {
                href: "img/d.png".into(),
                alt: Some("Diagram".into()),
                title: Some("Overview".into())
            }]
        );
    }

    #[test]
    fn inline_image_stays_in_paragraph() {
        assert_eq!(parse("see ![x](y.png)"), [para("see ![x](y.png)")]);
    }

    #[test]
    fn spaced_stars_are_a_list_item() {
        let blocks = parse("* * *");
        let Block::List(list) = &blocks[0] else {
            panic!("expected list, got {:?}", blocks[0]);
        };
        assert_eq!(list.items[0].text, "* *");
        assert_eq!(parse("***"), [Block::Rule]);
    }

    #[test]
    fn parse_is_repeatable() {
        let doc = "# A\n\ntext **b**\n\n| x |\n|---|\n| 1 |\n\n> q\n\n- [x] t\n";
        assert_eq!(parse(doc), parse(doc));
    }
}
