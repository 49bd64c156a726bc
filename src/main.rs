use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use mdview::{Block, BlockSegments, Config, Error, HighlightedSegment, Highlighter};

#[derive(Parser)]
#[command(name = "mdview")]
#[command(about = "Scan Markdown into block tokens, or classify source code for highlighting")]
struct Cli {
    /// Input file (Markdown, or source code with --highlight)
    input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, default_value = "mdview.toml")]
    config: PathBuf,

    /// Treat the input as source code and emit highlighted segments per line
    #[arg(long)]
    highlight: bool,

    /// Include inline segments for every text-bearing block
    #[arg(long, conflicts_with = "highlight")]
    segments: bool,

    /// Log parser decisions to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct AnnotatedBlock<'a> {
    block: &'a Block,
    #[serde(skip_serializing_if = "Option::is_none")]
    segments: Option<BlockSegments>,
}

fn annotate(blocks: &[Block]) -> Vec<AnnotatedBlock<'_>> {
    blocks
        .iter()
        .map(|block| AnnotatedBlock {
            block,
            segments: block.inline_segments(),
        })
        .collect()
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> mdview::Result<()> {
    let config = Config::load_or_default(&cli.config);

    let input = fs::read_to_string(&cli.input).map_err(|source| Error::Io {
        path: cli.input.clone(),
        source,
    })?;

    let json = if cli.highlight {
        let highlighter = Highlighter::new(&config.highlight);
        let lines: Vec<Vec<HighlightedSegment>> = highlighter.highlight_code(&input);
        serde_json::to_string_pretty(&lines)?
    } else {
        let blocks = mdview::parse(&input);
        tracing::info!(blocks = blocks.len(), input = %cli.input.display(), "parsed");
        if cli.segments {
            serde_json::to_string_pretty(&annotate(&blocks))?
        } else {
            serde_json::to_string_pretty(&blocks)?
        }
    };

    match &cli.output {
        Some(output) => write_output(output, &json),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

fn write_output(path: &Path, json: &str) -> mdview::Result<()> {
    fs::write(path, json).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    eprintln!("Created {}", path.display());
    Ok(())
}
