//! # TextLite
//!
//! A small plain-text editor built in Rust.
//!
//! ## Quick Start
//!
//! ```bash
//! # Run the editor
//! cargo run
//!
//! # Open a file on startup
//! cargo run -- notes.txt
//!
//! # Use a specific config file
//! cargo run -- --config ./textlite.toml
//! ```

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use textlite_core::Config;
use textlite_ui::{run, Flags};

/// TextLite - a small plain-text editor
#[derive(Parser, Debug)]
#[command(name = "textlite")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File to open
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    tracing::info!("Starting TextLite v{}", env!("CARGO_PKG_VERSION"));

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };

    let flags = Flags {
        file: args.file,
        config,
    };

    run(flags).map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        let args = Args::parse_from(["textlite"]);
        assert!(args.file.is_none());
        assert!(args.config.is_none());
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_args_with_file_and_config() {
        let args = Args::parse_from(["textlite", "-vv", "--config", "my.toml", "notes.txt"]);
        assert_eq!(args.file, Some(PathBuf::from("notes.txt")));
        assert_eq!(args.config, Some(PathBuf::from("my.toml")));
        assert_eq!(args.verbose, 2);
    }
}
