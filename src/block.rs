use serde::{Deserialize, Serialize};

use crate::config::ListConfig;
use crate::inline::extract_segments;

/// A run of inline text sharing one formatting combination.
///
/// Concatenating `text` over a full segment sequence yields the visible
/// content with delimiter syntax removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSegment {
    pub text: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub code: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub strikethrough: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl TextSegment {
    /// A segment without any formatting.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn is_plain(&self) -> bool {
        !(self.bold || self.italic || self.code || self.strikethrough || self.link.is_some())
    }
}

/// Paragraph text, joined from its source lines with single spaces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub text: String,
}

/// Column justification taken from a table's separator row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Unspecified,
    Left,
    Center,
    Right,
}

/// A table cell. Holds raw text; inline formatting is applied on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub text: String,
}

impl Cell {
    pub fn segments(&self) -> Vec<TextSegment> {
        extract_segments(&self.text)
    }
}

/// A pipe table.
///
/// `align` has one entry per header column. Body rows are kept exactly as
/// written and may be wider or narrower than the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub header: Vec<Cell>,
    pub rows: Vec<Vec<Cell>>,
    pub align: Vec<Alignment>,
}

impl Table {
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Alignment of `column`, `Unspecified` when out of range.
    pub fn alignment(&self, column: usize) -> Alignment {
        self.align.get(column).copied().unwrap_or_default()
    }
}

/// A single list item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub text: String,
    /// For task lists: None = not a task, Some(false) = unchecked, Some(true) = checked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
}

impl ListItem {
    pub fn is_task(&self) -> bool {
        self.checked.is_some()
    }

    pub fn segments(&self) -> Vec<TextSegment> {
        extract_segments(&self.text)
    }
}

/// A list (ordered or unordered). Only one level is modeled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub ordered: bool,
    pub start: u64,
    pub items: Vec<ListItem>,
}

impl List {
    /// Display marker for the item at `index`: `"3."` style numbering for
    /// ordered lists, the first configured bullet glyph otherwise.
    pub fn marker(&self, index: usize, config: &ListConfig) -> String {
        if self.ordered {
            let number = self.start.saturating_add(index as u64);
            format!("{number}.")
        } else {
            config.bullet().to_string()
        }
    }
}

/// Inline segments for all displayable text of a block, shaped like the
/// block itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BlockSegments {
    Text(Vec<TextSegment>),
    Items(Vec<Vec<TextSegment>>),
    Table {
        header: Vec<Vec<TextSegment>>,
        rows: Vec<Vec<Vec<TextSegment>>>,
    },
}

/// Block-level elements scanned from Markdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Heading {
        depth: u8,
        text: String,
    },
    Paragraph(Paragraph),
    Blockquote {
        text: String,
        inner: Paragraph,
    },
    CodeBlock {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<String>,
        text: String,
    },
    Table(Table),
    List(List),
    Rule,
    Image {
        href: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alt: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
}

impl Block {
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "heading",
            Block::Paragraph(_) => "paragraph",
            Block::Blockquote { .. } => "blockquote",
            Block::CodeBlock { .. } => "code_block",
            Block::Table(_) => "table",
            Block::List(_) => "list",
            Block::Rule => "rule",
            Block::Image { .. } => "image",
        }
    }

    /// The primary text of the block: heading, paragraph, quote and code
    /// text, or an image's alt text.
    pub fn text(&self) -> Option<&str> {
        match self {
            Block::Heading { text, .. }
            | Block::Paragraph(Paragraph { text })
            | Block::Blockquote { text, .. } => Some(text.as_str()),
            Block::CodeBlock { text, .. } => Some(text.as_str()),
            Block::Image { alt, .. } => alt.as_deref(),
            Block::Table(_) | Block::List(_) | Block::Rule => None,
        }
    }

    /// Inline segments for headings, paragraphs and blockquotes.
    ///
    /// Code blocks are verbatim and go through the highlighter instead.
    pub fn segments(&self) -> Option<Vec<TextSegment>> {
        match self {
            Block::Heading { text, .. }
            | Block::Paragraph(Paragraph { text })
            | Block::Blockquote { text, .. } => Some(extract_segments(text)),
            _ => None,
        }
    }

    /// Like [`Block::segments`], but also covers list items and table
    /// cells. Code blocks, rules and images carry no inline markup.
    pub fn inline_segments(&self) -> Option<BlockSegments> {
        match self {
            Block::List(list) => Some(BlockSegments::Items(
                list.items.iter().map(ListItem::segments).collect(),
            )),
            Block::Table(table) => Some(BlockSegments::Table {
                header: table.header.iter().map(Cell::segments).collect(),
                rows: table
                    .rows
                    .iter()
                    .map(|row| row.iter().map(Cell::segments).collect())
                    .collect(),
            }),
            other => other.segments().map(BlockSegments::Text),
        }
    }
}
