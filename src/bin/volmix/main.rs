//! volmix - terminal per-application volume mixer
//!
//! Run with: cargo run
//!
//! Keys: up/down (k/j) select, left/right (h/l) change volume, r reloads
//! the stream list, q quits. Set RUST_LOG to write a log to the system temp
//! directory.

use std::fs::OpenOptions;
use std::sync::Mutex;

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use tracing_subscriber::EnvFilter;
use volmix::runtime::Volmix;

const LOG_FILE: &str = "volmix.log";

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    init_tracing()?;

    Volmix::new().run()
}

/// Log to a file, never to the terminal the mixer draws on
fn init_tracing() -> EyreResult<()> {
    let Ok(filter) = EnvFilter::try_from_default_env() else {
        return Ok(());
    };

    let path = std::env::temp_dir().join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}
