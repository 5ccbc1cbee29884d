//! CLI entry point for treeprint

use std::path::Path;
use std::process;

use clap::Parser;
use treeprint::{StreamingFormatter, StreamingOutput, StreamingWalker, TreeError, WalkerConfig};

/// Root of every traversal.
const ROOT: &str = ".";

#[derive(Parser, Debug)]
#[command(name = "treeprint")]
#[command(about = "Print the current directory as an indented tree")]
#[command(version)]
struct Args {}

fn main() {
    let _args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    if let Err(e) = run(Path::new(ROOT)) {
        eprintln!("treeprint: {}", e);
        process::exit(1);
    }
}

fn run(root: &Path) -> Result<(), TreeError> {
    let walker = StreamingWalker::new(WalkerConfig::default());
    let mut formatter = StreamingFormatter::stdout();

    let result = walker.walk_streaming(root, &mut formatter);
    // Lines printed before a failure are kept
    let flushed = formatter.finish();

    result?;
    flushed?;
    Ok(())
}
