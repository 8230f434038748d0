use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use bomstrip::core::types::FixMode;
use bomstrip::exit_codes;
use bomstrip::io::config::resolve_config;
use bomstrip::logging;
use bomstrip::scan::scan_root;

#[derive(Parser)]
#[command(
    name = "bomstrip",
    version,
    about = "Remove leading UTF-8 byte-order marks from text files"
)]
struct Cli {
    /// Directory to scan (defaults to the current directory).
    root: Option<PathBuf>,

    /// Report files with a BOM without rewriting them.
    #[arg(long)]
    check: bool,

    /// Config file (defaults to `.bomstrip.toml` in the scan root, if present).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Scan only these extensions (repeatable), replacing the configured list.
    #[arg(long = "ext", value_name = "EXT")]
    extensions: Vec<String>,

    /// Also skip directories with this name (repeatable).
    #[arg(long = "exclude", value_name = "NAME")]
    excluded_dirs: Vec<String>,
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir().context("read current directory")?,
    };

    let config = resolve_config(&root, cli.config.as_deref())?
        .with_extensions(&cli.extensions)
        .with_excluded_dirs(&cli.excluded_dirs);
    config.validate()?;

    let mode = if cli.check {
        FixMode::Check
    } else {
        FixMode::Fix
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = scan_root(&root, &config, mode, &mut out)?;
    out.flush().context("flush stdout")?;

    if mode == FixMode::Check && summary.found > 0 {
        return Ok(exit_codes::FOUND);
    }
    Ok(exit_codes::OK)
}
