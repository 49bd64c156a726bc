use mdview::{Block, TextSegment};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let md = if args.len() > 1 {
        match std::fs::read_to_string(&args[1]) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading {}: {}", args[1], e);
                std::process::exit(1);
            }
        }
    } else {
        "# Overview\n\nSome **intro** text.\n\n## Details\n\n- [x] one\n- [ ] two\n\n| a | b |\n|---|---|\n| 1 | 2 |\n\n```sh\nmake\n```"
            .to_string()
    };

    let blocks = mdview::parse(&md);

    for (i, block) in blocks.iter().enumerate() {
        if let Block::Heading { depth, .. } = block {
            let section = summarize_section(&blocks, i, *depth);
            let text = visible_text(&block.segments().unwrap_or_default());
            let indent = "  ".repeat(usize::from(*depth - 1));
            println!(
                "{}H{} {:30} -> {} lines",
                indent,
                depth,
                text.chars().take(30).collect::<String>(),
                section.lines
            );
            if section.tasks > 0 {
                println!("{indent}   tasks: {}/{} done", section.done, section.tasks);
            }
            if section.widest_table > 0 {
                println!("{indent}   widest table: {} columns", section.widest_table);
            }
        }
    }
}

#[derive(Default)]
struct Section {
    lines: usize,
    tasks: usize,
    done: usize,
    widest_table: usize,
}

fn summarize_section(blocks: &[Block], start: usize, start_depth: u8) -> Section {
    let mut section = Section::default();
    for block in blocks.iter().skip(start + 1) {
        match block {
            Block::Heading { depth, .. } if *depth <= start_depth => break,
            Block::Paragraph(p) => {
                let char_count = visible_text(&mdview::extract_segments(&p.text)).chars().count();
                section.lines += (char_count / 80).max(1);
            }
            Block::Blockquote { .. } | Block::CodeBlock { .. } => {
                section.lines += block.text().map_or(0, |text| text.lines().count());
            }
            Block::List(list) => {
                section.lines += list.items.len();
                section.tasks += list.items.iter().filter(|item| item.is_task()).count();
                section.done += list.items.iter().filter(|item| item.checked == Some(true)).count();
            }
            Block::Table(table) => {
                section.lines += 1 + table.rows.len();
                section.widest_table = section.widest_table.max(table.column_count());
            }
            Block::Rule | Block::Image { .. } => section.lines += 1,
            Block::Heading { .. } => section.lines += 2,
        }
    }
    section
}

fn visible_text(segments: &[TextSegment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}
