mod app;
mod catalog;
mod config;
mod export;
mod filter;
mod i18n;
mod logging;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::*;
use crate::filter::FilterStore;
use anyhow::{Context, Result};
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedSender};

const TICK_RATE: Duration = Duration::from_millis(250);

#[tokio::main]
async fn main() -> Result<()> {
    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        previous_hook(info);
    }));

    let cfg = config::load_config()?;
    if let Some(path) = logging::init(&cfg.logging)? {
        tracing::info!(log = %path.display(), "tripfilter starting");
    }

    let mut terminal = setup_terminal().context("Failed to set up terminal")?;
    let outcome = run_app(&mut terminal, cfg).await;
    restore_terminal()?;

    if let Err(e) = outcome {
        tracing::error!(error = %e, "tripfilter exited with an error");
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Forward terminal input to the event loop until either side goes away.
fn spawn_input_reader(tx: UnboundedSender<AppEvent>) {
    tokio::spawn(async move {
        let mut events = EventStream::new();
        while let Some(Ok(event)) = events.next().await {
            if tx.send(AppEvent::Terminal(event)).is_err() {
                return;
            }
        }
    });
}

fn spawn_ticker(tx: UnboundedSender<AppEvent>) {
    tokio::spawn(async move {
        let mut ticks = tokio::time::interval(TICK_RATE);
        loop {
            ticks.tick().await;
            if tx.send(AppEvent::Tick).is_err() {
                return;
            }
        }
    });
}

fn export_committed(state: &mut AppState) {
    let path = state.config.export.resolved_path();
    let filters = state.store.get_filters();
    match export::export_filters(&path, &filters) {
        Ok(()) => {
            let text = format!("{} {}", state.tr.t("Exported to"), path.display());
            state.set_status(text, StatusKind::Info);
        }
        Err(e) => {
            tracing::error!(error = %e, "export failed");
            state.set_status(format!("{:#}", e), StatusKind::Error);
        }
    }
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    // Commits happen inside key handling; the listener re-enters the loop as an event.
    let store = FilterStore::new();
    let changes_tx = event_tx.clone();
    let changes = store.subscribe(move |filters| {
        let _ = changes_tx.send(AppEvent::FiltersChanged {
            entries: filters.len(),
            options: filters.total_options(),
        });
    });

    let provider = catalog::provider_from_config(&cfg.catalog);
    let mut state = AppState::new(cfg, store);

    spawn_input_reader(event_tx.clone());
    spawn_ticker(event_tx.clone());
    catalog::spawn_fetch(provider, event_tx);

    terminal.draw(|f| ui::render(f, &state))?;

    while let Some(event) = event_rx.recv().await {
        for action in handler::handle_event(&mut state, event) {
            match action {
                Action::ExportFilters => export_committed(&mut state),
                Action::Quit => state.should_quit = true,
            }
        }
        if state.should_quit {
            break;
        }
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    changes.unsubscribe();
    Ok(())
}
