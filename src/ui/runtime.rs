use crate::catalog::ProductClient;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::query::SortSpec;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::view::ImageResolver;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);
const TICK_RATE: Duration = Duration::from_millis(250);

/// Search and sort applied as soon as the catalog arrives.
#[derive(Debug, Clone, Default)]
pub struct Presets {
    pub search: Option<String>,
    pub sort: Option<SortSpec>,
}

impl Presets {
    pub fn apply(&self, app: &mut App) {
        if let Some(spec) = self.sort {
            app.sort_by(spec.field, spec.order);
        }
        if let Some(term) = &self.search {
            app.apply_search(term);
        }
    }
}

pub fn run(config: &Config, presets: Presets) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;
    let client = ProductClient::new(&config.source)?;
    let events = EventHandler::new(POLL_INTERVAL)?;

    let loaded_tx = events.sender();
    runtime.spawn(async move {
        let result = client.fetch_products().await;
        if loaded_tx.send(AppEvent::Loaded(result)).is_err() {
            tracing::trace!("Catalog arrived after the UI closed");
        }
    });

    let (mut terminal, guard) = setup_terminal()?;
    let images = ImageResolver::new(config.images.blocklist.clone());
    let mut app = App::new(&config.view, images);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Resize) => {}
            Ok(AppEvent::Loaded(result)) => {
                app.on_loaded(result);
                if app.is_loaded() {
                    presets.apply(&mut app);
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    // The fetch cannot be cancelled; don't wait for it.
    runtime.shutdown_background();
    Ok(())
}
