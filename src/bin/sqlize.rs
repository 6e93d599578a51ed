//! sqlize: Load a collection of scraped posts into a SQLite table
//!
//! Usage:
//!   # Load ../data/raw/rust/*.json (+ .txt bodies) into table `rust`
//!   sqlize reddit.db rust
//!
//!   # Different data root, lexically ordered columns, no status line
//!   sqlize reddit.db rust --data-root ./raw --key-order sorted --quiet
//!
//!   # Print a JSON summary of what was loaded
//!   sqlize reddit.db rust --summary

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{Context, Result};
use clap::Parser;
use sqlize::{sqlize_with_config, KeyOrder, SqlizeConfig};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "sqlize")]
#[command(about = "Load scraped JSON + text post pairs into a SQLite table", long_about = None)]
struct Args {
    /// SQLite database file (created if missing)
    #[arg(value_name = "DB")]
    db: PathBuf,

    /// Collection to load; also the name of the table that gets recreated
    #[arg(value_name = "COLLECTION")]
    collection: String,

    /// Directory holding one sub-directory per collection
    #[arg(long, default_value = "../data/raw")]
    data_root: PathBuf,

    /// How to order the discovered columns
    #[arg(long, value_enum, default_value_t = KeyOrder::Discovery)]
    key_order: KeyOrder,

    /// Don't print the progress line
    #[arg(long, short = 'q')]
    quiet: bool,

    /// Print a JSON summary (table, columns, rows) when done
    #[arg(long)]
    summary: bool,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = SqlizeConfig {
        data_root: args.data_root,
        key_order: args.key_order,
        progress: !args.quiet,
    };

    let summary = sqlize_with_config(&args.db, &args.collection, &config)
        .with_context(|| format!("Failed to load collection {}", args.collection))?;

    if args.summary {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}
