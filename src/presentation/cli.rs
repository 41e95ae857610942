//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - A single command: the image directory is the only positional argument
//! - When the image directory is omitted the binary asks for it

use std::path::PathBuf;

use clap::Parser;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Webpify - convert PNG assets to WebP and update every reference to them
#[derive(Parser, Debug)]
#[command(name = "webpify")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'webpify' without arguments to be asked for the image directory.")]
pub struct Cli {
    /// Directory holding the images to convert (e.g. ./public/images)
    pub image_root: Option<String>,

    /// Directory searched for code files [default: current directory]
    #[arg(long, value_name = "DIR")]
    pub project_root: Option<PathBuf>,

    /// Preview conversions and reference updates without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Print the migration report as JSON
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
