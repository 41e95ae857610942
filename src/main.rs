//! Webpify CLI - convert PNG assets to WebP and update their references
//!
//! Usage: webpify [IMAGE_ROOT] [OPTIONS]

mod commands;
mod ui;

use clap::Parser;
use env_logger::Env;
use webpify::presentation::Cli;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = commands::migrate::cmd_migrate(&cli) {
        ui::error::print_error(&err, cli.json);
        std::process::exit(1);
    }
}

/// `warn` by default, one level more per `-v`; `RUST_LOG` wins.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();
}
