//! Log file setup.
//!
//! The terminal is owned by the TUI, so logs go to a file under the
//! platform data directory. `RUST_LOG` overrides the CLI-provided filter.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Location of the log file (`<data dir>/pixgrid/pixgrid.log`).
pub fn log_path() -> PathBuf {
    let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data_dir.join("pixgrid").join("pixgrid.log")
}

/// Install the global tracing subscriber writing to the log file.
pub fn init(default_filter: &str) -> io::Result<()> {
    let path = log_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
