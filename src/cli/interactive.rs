//! Interactive Form
//!
//! A line-driven rendition of the compare form. Each stdin line is one
//! event; the copy acknowledgment hides itself when its deadline passes.

use std::io::{self, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};

use super::{effective_width, format_summary};
use crate::config::Config;
use crate::palette::Palette;
use crate::render::{DiffSummary, terminal};
use crate::session::{
    Clipboard, CompareForm, CopyNotifier, CopyOutcome, Field, Osc52Clipboard, Selection,
};

const HELP: &str = "\
Commands:
  1 <text>          set sequence 1
  2 <text>          set sequence 2
  compare           validate and show the diff
  clear             reset both sequences
  width <columns>   change the display width
  select <a> <b>    copy diff text between character offsets (- = outside)
  show              print the diff area text with offsets
  help              show this message
  quit              leave";

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    Input(Field, String),
    Compare,
    Clear,
    Width(u16),
    Select(Selection),
    Show,
    Help,
    Quit,
}

fn parse_offset(token: &str) -> Result<Option<usize>, String> {
    if token == "-" {
        return Ok(None);
    }
    token
        .parse()
        .map(Some)
        .map_err(|_| format!("Invalid offset '{}'", token))
}

/// Parse one line of interactive input
pub fn parse_command(line: &str) -> Result<FormCommand, String> {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head.to_ascii_lowercase().as_str() {
        "1" => Ok(FormCommand::Input(Field::First, rest.to_string())),
        "2" => Ok(FormCommand::Input(Field::Second, rest.to_string())),
        "compare" | "c" => Ok(FormCommand::Compare),
        "clear" => Ok(FormCommand::Clear),
        "width" => rest
            .parse()
            .map(FormCommand::Width)
            .map_err(|_| format!("Invalid width '{}'", rest)),
        "select" => {
            let mut parts = rest.split_whitespace();
            match (parts.next(), parts.next(), parts.next()) {
                (Some(a), Some(b), None) => Ok(FormCommand::Select(Selection::new(
                    parse_offset(a)?,
                    parse_offset(b)?,
                ))),
                _ => Err("Usage: select <start> <end>".to_string()),
            }
        }
        "show" => Ok(FormCommand::Show),
        "help" | "?" => Ok(FormCommand::Help),
        "quit" | "exit" | "q" => Ok(FormCommand::Quit),
        "" => Err(String::new()),
        other => Err(format!("Unknown command '{}', try 'help'", other)),
    }
}

/// Apply one command to the form, writing feedback to `out`
///
/// Returns false when the session should end.
pub fn apply<W: Write, C: Clipboard>(
    form: &mut CompareForm,
    notifier: &mut CopyNotifier<C>,
    command: FormCommand,
    out: &mut W,
) -> Result<bool> {
    match command {
        FormCommand::Input(field, raw) => {
            let value = form.input(field, &raw).to_string();
            writeln!(out, "{}: {}", form.label(field), value)?;
        }
        FormCommand::Compare => match form.compare() {
            Ok(chunks) => {
                terminal::write_chunks(out, chunks)?;
                writeln!(out, "\n{}", format_summary(&DiffSummary::from_chunks(chunks)))?;
            }
            Err(e) => writeln!(out, "{}", e)?,
        },
        FormCommand::Clear => {
            form.clear();
            writeln!(out, "Cleared.")?;
        }
        FormCommand::Width(width) => {
            form.set_width(width);
            writeln!(out, "Chunk size is now {}.", form.chunk_size())?;
            if let Some(chunks) = form.diff() {
                terminal::write_chunks(out, chunks)?;
            }
        }
        FormCommand::Select(selection) => {
            let area = form.diff_text();
            match notifier.on_selection(&area, selection, Instant::now()) {
                CopyOutcome::Copied(text) => {
                    writeln!(out, "Copied {} character(s).", text.chars().count())?
                }
                CopyOutcome::Ignored => log::debug!("selection ignored"),
                CopyOutcome::Failed => {}
            }
        }
        FormCommand::Show => {
            let area = form.diff_text();
            if area.is_empty() {
                writeln!(out, "No diff shown.")?;
            }
            let mut offset = 0;
            for line in area.split_inclusive('\n') {
                write!(out, "{:>6} {}", offset, line)?;
                offset += line.chars().count();
            }
        }
        FormCommand::Help => writeln!(out, "{}", HELP)?,
        FormCommand::Quit => return Ok(false),
    }

    out.flush()?;
    Ok(true)
}

fn prompt<W: Write, C: Clipboard>(notifier: &CopyNotifier<C>, out: &mut W) -> io::Result<()> {
    if notifier.is_ack_visible(Instant::now()) {
        write!(out, "[copied] > ")?;
    } else {
        write!(out, "> ")?;
    }
    out.flush()
}

/// Run the interactive form until EOF or `quit`
pub async fn run(config: &Config, palette: Palette) -> Result<()> {
    let mut form = CompareForm::new(palette, config.layout, effective_width(config))
        .with_chunk_size(config.chunk_size);
    let mut notifier = CopyNotifier::new(Osc52Clipboard::new(io::stdout()));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut out = io::stdout();

    writeln!(out, "{}", HELP)?;
    prompt(&notifier, &mut out)?;

    loop {
        let deadline = notifier.ack_deadline();
        let sleep_target = tokio::time::Instant::from_std(deadline.unwrap_or_else(Instant::now));

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read from stdin")? else {
                    break;
                };
                match parse_command(&line) {
                    Ok(command) => {
                        if !apply(&mut form, &mut notifier, command, &mut out)? {
                            break;
                        }
                    }
                    Err(message) if message.is_empty() => {}
                    Err(message) => writeln!(out, "{}", message)?,
                }
                prompt(&notifier, &mut out)?;
            }
            _ = tokio::time::sleep_until(sleep_target), if deadline.is_some() => {
                if notifier.expire(Instant::now()) {
                    writeln!(out)?;
                    prompt(&notifier, &mut out)?;
                }
            }
        }
    }

    writeln!(out)?;
    Ok(())
}
