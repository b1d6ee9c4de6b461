//! folio-tui - A personal portfolio page for the terminal
//!
//! This is the main entry point for the folio-tui application.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod cli;
mod component;
mod components;
mod config;
mod controller;
mod logging;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::cli::Cli;
use crate::component::Component;
use crate::config::Config;
use crate::controller::ViewStateController;
use crate::services::{
    load_portfolio, sample_portfolio, DeliveryRunner, JsonFileStore, MemoryStore, Preferences,
    SystemClipboard,
};
use crate::tui::Tui;
use anyhow::Result;
use clap::Parser;
use crossterm::event::Event;
use std::path::{Path, PathBuf};
use std::time::Duration;

const PREFERENCES_FILE: &str = "preferences.json";

fn main() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = cli.data_dir.clone().or_else(Config::config_dir);

    if let Some(dir) = &data_dir {
        let log_path = logging::init(dir, cli.log_level())?;
        tracing::info!(
            "Starting folio-tui v{}, logging to {}",
            env!("CARGO_PKG_VERSION"),
            log_path.display()
        );
    }

    let config = load_config(data_dir.as_deref());
    let controller = build_controller(&cli, &config, data_dir.as_deref())?;

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(config.tick_rate_ms));
    tui.enter()?;

    // Create app state
    let mut app = App::new(controller, Box::new(SystemClipboard));
    app.init()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    app.shutdown();
    tui.exit()?;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!("Exiting after error: {:#}", err);
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    Ok(())
}

/// Config from the data directory, writing the defaults on first run
fn load_config(data_dir: Option<&Path>) -> Config {
    let Some(dir) = data_dir else {
        return Config::default();
    };
    match Config::load_from(dir) {
        Some(config) => config,
        None => {
            let config = Config::default();
            if let Err(e) = config.save_to(dir) {
                tracing::warn!("Could not write default config: {:#}", e);
            }
            config
        }
    }
}

/// Content, preference store and delivery runner wired into the controller.
/// The persisted theme is applied before the first frame.
fn build_controller(
    cli: &Cli,
    config: &Config,
    data_dir: Option<&Path>,
) -> Result<ViewStateController<Preferences>> {
    let content_path = cli
        .content
        .clone()
        .or_else(|| config.content_path.as_ref().map(PathBuf::from));
    let portfolio = match content_path {
        Some(path) => load_portfolio(&path)?,
        None => sample_portfolio()?,
    };

    let store = match data_dir {
        Some(dir) => Preferences::File(JsonFileStore::open(dir.join(PREFERENCES_FILE))),
        None => {
            tracing::warn!("No data directory; preferences will not persist");
            Preferences::Memory(MemoryStore::new())
        }
    };

    let delivery = DeliveryRunner::simulated(Duration::from_millis(config.send_delay_ms));
    let mut controller = ViewStateController::new(portfolio, store, delivery);
    controller.load_persisted_theme();
    Ok(controller)
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    let size = tui.size()?;
    app.update(Action::Resize(size.width, size.height))?;

    while !app.should_quit {
        // Draw the UI
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                tracing::error!("Draw error: {}", e);
            }
        })?;

        // Poll for events
        if let Some(event) = tui.next_event()? {
            // Convert event to action
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Mouse(mouse) => app.handle_mouse_event(mouse)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            // Process the action
            if let Some(action) = action {
                // Action might produce a follow-up action
                let mut current_action = Some(action);
                while let Some(a) = current_action {
                    tracing::trace!("Action {}", a);
                    current_action = app.update(a)?;
                }
            }
        } else {
            // No event - send a tick for time-based updates
            app.update(Action::Tick)?;
        }
    }

    Ok(())
}
