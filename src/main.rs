use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use pixgrid::api::HttpImageClient;
use pixgrid::config::Config;
use pixgrid::fetch::{CompletionSink, Debouncer, FetchCoordinator};
use pixgrid::logging;
use pixgrid::store::gallery::GalleryState;
use pixgrid::store::{AppState, SnapshotStore, Store};
use pixgrid::ui::app::App;
use pixgrid::ui::events::{AppEvent, EventHandler};

#[derive(Debug, Parser)]
#[command(name = "pixgrid", version, about = "Terminal image-search browser")]
struct Cli {
    /// Path to the config file (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Category to search on startup, overriding the saved snapshot.
    #[arg(long)]
    category: Option<String>,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    log_level: String,
}

const TICK_RATE: Duration = Duration::from_millis(250);

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level).context("failed to initialise logging")?;

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let snapshots = SnapshotStore::new(SnapshotStore::default_path());
    let fresh = || GalleryState {
        category: config.gallery.default_category.clone(),
        ..GalleryState::default()
    };
    let gallery = match snapshots.load() {
        Ok(Some(state)) => {
            info!(path = %snapshots.path().display(), "rehydrated gallery snapshot");
            state
        }
        Ok(None) => fresh(),
        Err(err) => {
            warn!(error = %err, "snapshot unreadable, starting fresh");
            fresh()
        }
    };
    let store = Store::new(AppState { gallery }, Some(snapshots));

    let client = Arc::new(HttpImageClient::new(&config.api)?);
    let events = EventHandler::new(TICK_RATE);
    let fetch_tx = events.sender();
    let sink: CompletionSink = Arc::new(move |completion| {
        let _ = fetch_tx.send(AppEvent::Fetch(completion));
    });
    let coordinator =
        FetchCoordinator::new(client, store.clone(), runtime.handle().clone(), sink);
    let debouncer = Debouncer::new(
        runtime.handle().clone(),
        Duration::from_millis(config.gallery.debounce_ms),
    );

    let mut app = App::new(
        store,
        coordinator,
        debouncer,
        events.sender(),
        config.gallery.page_size,
    );
    if let Some(category) = cli.category {
        app.override_category(category);
    }

    pixgrid::ui::runtime::run(app, events, TICK_RATE).context("UI loop failed")?;
    Ok(())
}
