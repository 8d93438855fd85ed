//! Standalone terminal binary for pipdice.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Mutex;

use clap::Parser;
use pipdice_core::FileStore;

#[derive(Parser)]
#[command(name = "pipdice", about = "Animated dice roller with roll history", version)]
struct Args {
    /// File holding persisted history and theme
    #[arg(long, default_value = "pipdice.json")]
    store: PathBuf,

    /// RNG seed for reproducible rolls (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Write diagnostics to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Some(path) = &args.log_file
        && let Err(e) = init_logging(path)
    {
        eprintln!("error: {e}");
        process::exit(1);
    }

    let store = FileStore::open(&args.store);
    tracing::info!(
        store = %store.path().display(),
        seeded = args.seed.is_some(),
        "starting pipdice"
    );
    let app = pipdice_tui::app::TuiApp::new(store, args.seed);

    if let Err(e) = pipdice_tui::terminal::run(app) {
        tracing::error!(error = %e, "terminal session failed");
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Send tracing output to `path`; the terminal belongs to the UI.
fn init_logging(path: &Path) -> Result<(), String> {
    let file = File::create(path).map_err(|e| format!("cannot open log file: {e}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("pipdice_core=debug")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
