//! Command-line front end
//!
//! Wires configuration, logging and palettes to either a one-shot
//! comparison or the interactive form.

pub mod interactive;

use std::io::{self, IsTerminal, Write};
use std::num::NonZeroUsize;
use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;

use crate::config::{Args, Command, Config, OutputFormat};
use crate::palette::{Palette, PaletteRegistry};
use crate::render::layout::{DEFAULT_WIDTH, terminal_width};
use crate::render::{DiffChunk, DiffSummary, html, render_diff, terminal, text};
use crate::sequence::sanitize;
use crate::validation::validate_pair;

/// Entry point for the `seqdiff` binary
pub async fn run() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);
    let config = Config::from_args(args)?;

    let registry = load_palettes(&config).await?;
    let palette = registry.active_palette();

    match &config.command {
        Command::Compare {
            seq1,
            seq2,
            file1,
            file2,
            format,
            raw,
        } => {
            let first = read_input(seq1.as_deref(), file1.as_deref(), 1).await?;
            let second = read_input(seq2.as_deref(), file2.as_deref(), 2).await?;
            let request = CompareRequest {
                first: &first,
                second: &second,
                raw: *raw,
                format: resolve_format(*format, io::stdout().is_terminal()),
                chunk_size: effective_chunk_size(&config),
            };
            let stdout = io::stdout();
            compare(&request, palette, &mut stdout.lock())
        }
        Command::Interactive => interactive::run(&config, palette.clone()).await,
    }
}

fn init_logging(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Build the palette registry and activate the configured palette
pub async fn load_palettes(config: &Config) -> Result<PaletteRegistry> {
    let mut registry = PaletteRegistry::new();
    for (dir, source) in config.palette_dirs() {
        registry.load_directory(dir, source).await?;
    }

    if let Some(name) = config.get_effective_palette() {
        if !registry.set_active_palette(name) {
            log::warn!(
                "Palette '{}' not found (available: {}), using '{}'",
                name,
                registry.list_palettes().join(", "),
                registry.active_palette().name
            );
        }
    }

    Ok(registry)
}

/// Display width from config, terminal, or default
pub fn effective_width(config: &Config) -> u16 {
    config
        .width
        .or_else(terminal_width)
        .unwrap_or(DEFAULT_WIDTH)
}

fn effective_chunk_size(config: &Config) -> NonZeroUsize {
    config
        .chunk_size
        .unwrap_or_else(|| config.layout.chunk_size(effective_width(config)))
}

/// Requested output format, or ANSI on a terminal and plain text elsewhere
fn resolve_format(requested: Option<OutputFormat>, is_terminal: bool) -> OutputFormat {
    match requested {
        Some(format) => format,
        None if is_terminal => OutputFormat::Ansi,
        None => OutputFormat::Plain,
    }
}

/// Read one sequence from the command line or a file
///
/// A missing sequence reads as empty and is reported by validation.
async fn read_input(inline: Option<&str>, file: Option<&Path>, number: usize) -> Result<String> {
    match (inline, file) {
        (Some(_), Some(_)) => bail!("Sequence {} given both inline and as a file", number),
        (Some(text), None) => Ok(text.to_string()),
        (None, Some(path)) => {
            let content = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read sequence file: {}", path.display()))?;
            Ok(sequence_from_file(&content))
        }
        (None, None) => Ok(String::new()),
    }
}

/// Residue text of a sequence file: FASTA headers and comments dropped,
/// lines joined, whitespace removed
pub fn sequence_from_file(content: &str) -> String {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('>') && !line.starts_with(';'))
        .flat_map(|line| line.chars().filter(|c| !c.is_whitespace()))
        .collect()
}

/// One `compare` invocation
#[derive(Debug, Clone)]
pub struct CompareRequest<'a> {
    pub first: &'a str,
    pub second: &'a str,
    /// Skip sanitization
    pub raw: bool,
    pub format: OutputFormat,
    pub chunk_size: NonZeroUsize,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    chunks: &'a [DiffChunk],
    summary: DiffSummary,
}

/// Sanitize (unless raw), validate, render and write the diff to `out`
pub fn compare<W: Write>(
    request: &CompareRequest<'_>,
    palette: &Palette,
    out: &mut W,
) -> Result<()> {
    let (first, second) = if request.raw {
        (request.first.to_string(), request.second.to_string())
    } else {
        (sanitize(request.first), sanitize(request.second))
    };

    let pair = validate_pair(&first, &second)?;
    let chunks = render_diff(&pair, request.chunk_size, palette);
    let summary = DiffSummary::from_chunks(&chunks);

    match request.format {
        OutputFormat::Ansi => {
            terminal::write_chunks(out, &chunks)?;
            writeln!(out, "\n{}", format_summary(&summary))?;
        }
        OutputFormat::Plain => {
            write!(out, "{}", text::to_plain(&chunks))?;
            writeln!(out, "\n{}", format_summary(&summary))?;
        }
        OutputFormat::Html => write!(out, "{}", html::to_html(&chunks))?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &JsonReport { chunks: &chunks, summary })
                .context("Failed to write JSON report")?;
            writeln!(out)?;
        }
    }

    out.flush().context("Failed to flush output")
}

pub fn format_summary(summary: &DiffSummary) -> String {
    format!(
        "{} positions, {} differ, {:.1}% identical",
        summary.length, summary.mismatches, summary.identity
    )
}
