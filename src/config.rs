//! Configuration management for seqdiff.
//!
//! Handles:
//! - Command-line argument parsing
//! - Project config file (`.seqdiff.toml`)
//! - Palette directory configuration

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;

use crate::palette::PaletteSource;
use crate::render::Layout;

/// File name looked up in the working directory when `--config` is absent
pub const PROJECT_CONFIG_FILE: &str = ".seqdiff.toml";

/// Command-line arguments for seqdiff
#[derive(Debug, Parser)]
#[command(name = "seqdiff")]
#[command(about = "Positional diff of two equal-length protein sequences")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Palette to color residues with
    #[arg(long, global = true, help = "Palette name (e.g. 'default')")]
    pub palette: Option<String>,

    /// Extra directory to search for palette files
    #[arg(long, global = true, help = "Directory containing *.palette.toml files")]
    pub palette_dir: Option<PathBuf>,

    /// Project config file
    #[arg(long, global = true, help = "Config file (default: ./.seqdiff.toml if present)")]
    pub config: Option<PathBuf>,

    /// Display width in columns
    #[arg(long, global = true, help = "Display width used to pick the chunk size")]
    pub width: Option<u16>,

    /// Fixed chunk size, ignoring width
    #[arg(long, global = true, help = "Residues per chunk, overriding the layout")]
    pub chunk_size: Option<NonZeroUsize>,

    /// Log level
    #[arg(
        long,
        global = true,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// What to run
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Compare two sequences once and print the diff
    Compare {
        /// Sequence 1 (omit when using --file1)
        seq1: Option<String>,
        /// Sequence 2 (omit when using --file2)
        seq2: Option<String>,
        /// Read sequence 1 from a file (FASTA headers are skipped)
        #[arg(long)]
        file1: Option<PathBuf>,
        /// Read sequence 2 from a file (FASTA headers are skipped)
        #[arg(long)]
        file2: Option<PathBuf>,
        /// Output format (default: ansi on a terminal, plain otherwise)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// Validate the input as given, without sanitizing it first
        #[arg(long)]
        raw: bool,
    },
    /// Line-driven compare form on the terminal
    Interactive,
}

/// Output format of `compare`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Ansi,
    Plain,
    Html,
    Json,
}

/// Contents of a project config file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    pub palette: Option<String>,
    #[serde(default)]
    pub layout: Layout,
}

impl ProjectConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub command: Command,
    /// Palette explicitly set via command line
    pub cli_palette: Option<String>,
    /// Palette from the project config
    pub project_palette: Option<String>,
    /// Palette directory given on the command line
    pub palette_dir: Option<PathBuf>,
    /// Per-user palette directory
    pub user_palette_dir: Option<PathBuf>,
    pub layout: Layout,
    pub width: Option<u16>,
    pub chunk_size: Option<NonZeroUsize>,
    pub log_level: String,
    pub project_config_path: Option<PathBuf>,
}

impl Config {
    /// Create configuration from parsed arguments, resolving the project
    /// config relative to the working directory
    pub fn from_args(args: Args) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to determine working directory")?;
        Self::from_args_in(args, &cwd)
    }

    /// Create configuration from explicit arguments, resolving the project
    /// config relative to `cwd` (useful for testing)
    pub fn from_args_in(args: Args, cwd: &Path) -> Result<Self> {
        let project_config_path = match args.config {
            Some(path) => Some(path),
            None => Some(cwd.join(PROJECT_CONFIG_FILE)).filter(|p| p.is_file()),
        };

        let project = match &project_config_path {
            Some(path) => {
                log::debug!("Using project config {}", path.display());
                ProjectConfig::load(path)?
            }
            None => ProjectConfig::default(),
        };

        let user_palette_dir = dirs::config_dir().map(|dir| dir.join("seqdiff").join("palettes"));

        Ok(Config {
            command: args.command.unwrap_or(Command::Interactive),
            cli_palette: args.palette,
            project_palette: project.palette,
            palette_dir: args.palette_dir,
            user_palette_dir,
            layout: project.layout,
            width: args.width,
            chunk_size: args.chunk_size,
            log_level: args.log_level,
            project_config_path,
        })
    }

    /// Palette directories paired with their priority, lowest first
    pub fn palette_dirs(&self) -> Vec<(&Path, PaletteSource)> {
        let user = self
            .user_palette_dir
            .as_deref()
            .map(|dir| (dir, PaletteSource::UserGlobal));
        let cli = self
            .palette_dir
            .as_deref()
            .map(|dir| (dir, PaletteSource::Explicit));
        user.into_iter().chain(cli).collect()
    }

    pub fn has_project_config(&self) -> bool {
        self.project_config_path.is_some()
    }

    /// Palette to activate: CLI, then project config, else none (built-in)
    pub fn get_effective_palette(&self) -> Option<&str> {
        self.cli_palette
            .as_deref()
            .or(self.project_palette.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::from_args_in(parse(&["seqdiff"]), dir.path()).unwrap();
        assert_eq!(config.command, Command::Interactive);
        assert!(!config.has_project_config());
        assert_eq!(config.layout, Layout::default());
        assert_eq!(config.log_level, "warn");
        assert!(config.get_effective_palette().is_none());
    }

    #[test]
    fn test_compare_args() {
        let args = parse(&["seqdiff", "compare", "ARN", "ARD", "--format", "json", "--chunk-size", "20"]);
        assert_eq!(args.chunk_size, NonZeroUsize::new(20));
        match args.command {
            Some(Command::Compare { seq1, seq2, format, raw, .. }) => {
                assert_eq!(seq1.as_deref(), Some("ARN"));
                assert_eq!(seq2.as_deref(), Some("ARD"));
                assert_eq!(format, Some(OutputFormat::Json));
                assert!(!raw);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_format_unset_by_default() {
        match parse(&["seqdiff", "compare", "ARN", "ARD"]).command {
            Some(Command::Compare { format, .. }) => assert_eq!(format, None),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_log_level_known_before_project_config_loads() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(PROJECT_CONFIG_FILE), "colour = 1\n").unwrap();

        let args = parse(&["seqdiff", "--log-level", "debug"]);
        assert_eq!(args.log_level, "debug");
        assert!(Config::from_args_in(args, dir.path()).is_err());
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        assert!(Args::try_parse_from(["seqdiff", "--chunk-size", "0"]).is_err());
    }

    #[test]
    fn test_cli_palette_dir_has_top_priority() {
        let dir = tempfile::tempdir().unwrap();
        let args = parse(&["seqdiff", "--palette-dir", "/tmp/palettes"]);
        let config = Config::from_args_in(args, dir.path()).unwrap();
        let dirs = config.palette_dirs();
        let (last, source) = dirs.last().unwrap();
        assert_eq!(*last, Path::new("/tmp/palettes"));
        assert_eq!(*source, PaletteSource::Explicit);
    }
}
