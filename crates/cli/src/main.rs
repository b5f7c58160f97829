// FILE: crates/cli/src/main.rs

use anyhow::{bail, Context, Result};
use clap::{Arg, Command};
use picturebook_config::{Config, ConfigManager, StartMode};
use picturebook_tui::TuiApp;
use std::path::{Path, PathBuf};

mod discover;

fn build_cli() -> Command {
    Command::new("picturebook")
        .version("0.1.0")
        .about("Page-by-page picture-book reader with synchronized narration")
        .arg(
            Arg::new("book")
                .value_name("BOOK_DIR")
                .help("Directory holding the book's image and audio folders")
                .default_value("."),
        )
        .arg(
            Arg::new("pages")
                .short('p')
                .long("pages")
                .value_name("N")
                .help("Page count (otherwise taken from config or inferred from the image directory)")
                .value_parser(clap::value_parser!(u32)),
        )
        .arg(
            Arg::new("mode")
                .short('m')
                .long("mode")
                .value_name("MODE")
                .help("Skip the start screen and begin in this mode")
                .value_parser(["ask", "auto", "manual"]),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .help("Config file path (defaults to the user config directory)"),
        )
        .arg(
            Arg::new("no-narration")
                .long("no-narration")
                .help("Run without an audio device; narration attempts behave as rejected")
                .action(clap::ArgAction::SetTrue),
        )
}

/// Resolves the effective config: defaults < file < CLI flags
fn resolve_config(matches: &clap::ArgMatches) -> Result<Config> {
    let manager = match matches.get_one::<String>("config") {
        Some(path) => ConfigManager::with_file(PathBuf::from(path))
            .context("Failed to open the given config file")?,
        None => ConfigManager::new().context("Failed to locate the user config directory")?,
    };

    let mut config = manager
        .load_with_env_overrides()
        .context("Failed to load configuration")?;

    if let Some(pages) = matches.get_one::<u32>("pages") {
        config.book.total_pages = Some(*pages);
    }
    if let Some(mode) = matches.get_one::<String>("mode") {
        config.app.start_mode = match mode.as_str() {
            "auto" => StartMode::Auto,
            "manual" => StartMode::Manual,
            _ => StartMode::Ask,
        };
    }
    if matches.get_flag("no-narration") {
        config.app.no_narration = true;
    }

    if let Err(errors) = config.validate() {
        let details: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        bail!("Invalid configuration: {}", details.join("; "));
    }

    Ok(config)
}

/// Page count: CLI/config when given, otherwise inferred from disk
fn resolve_page_count(book_root: &Path, config: &Config) -> Result<u32> {
    match config.book.total_pages {
        Some(pages) => Ok(pages),
        None => discover::count_pages(book_root, &config.book)
            .context("Could not determine the page count"),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = build_cli().get_matches();

    let book_root = matches
        .get_one::<String>("book")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    if !book_root.is_dir() {
        bail!("Book directory not found: {}", book_root.display());
    }

    let config = resolve_config(&matches)?;
    let total_pages = resolve_page_count(&book_root, &config)?;

    log::info!(
        "Opening book at {} ({} pages, start mode {})",
        book_root.display(),
        total_pages,
        config.app.start_mode
    );

    let mut app = TuiApp::new(&config, &book_root, total_pages)
        .context("Failed to initialize the terminal UI")?;
    app.run().context("Reader session failed")?;

    Ok(())
}
