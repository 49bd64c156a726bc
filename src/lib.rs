mod block;
mod config;
mod cursor;
mod error;
mod highlight;
mod inline;
mod lines;
pub mod list;
mod parser;
pub mod table;

pub use block::{
    Alignment, Block, BlockSegments, Cell, List, ListItem, Paragraph, Table, TextSegment,
};
pub use config::{Config, HighlightConfig, ListConfig};
pub use cursor::LineCursor;
pub use error::{Error, Result};
pub use highlight::{HighlightKind, HighlightedSegment, Highlighter};
pub use inline::{Capture, INLINE_RULES, InlineRule};

/// Parse markdown text into a vector of blocks.
pub fn parse(markdown: &str) -> Vec<Block> {
    parser::parse(markdown)
}

/// Split text into inline formatted segments.
pub fn extract_segments(text: &str) -> Vec<TextSegment> {
    inline::extract_segments(text)
}

/// Classify one line of source code with the built-in keyword set.
pub fn highlight_line(code: &str) -> Vec<HighlightedSegment> {
    highlight::highlight_line(code)
}
