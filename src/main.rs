//! agent-shell - A terminal shell for an AI coding agent
//!
//! This is the main entry point. It sets up logging, mounts the shell and
//! runs the event loop. It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::{App, AppContext};
use crate::component::Component;
use crate::config::DataDir;
use crate::model::Route;
use crate::services::LocalServices;
use crate::tui::Tui;
use anyhow::{Context, Result};
use crossterm::event::Event;
use std::fs::File;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let data_dir = DataDir::from_env()?;
    data_dir.ensure()?;
    init_logging(&data_dir)?;

    // Optional first argument: the route to open, e.g. `/login`
    let route = std::env::args()
        .nth(1)
        .map(|path| Route::from_path(&path))
        .unwrap_or_default();
    tracing::info!(route = route.path(), data_dir = %data_dir.root().display(), "starting");

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(250));
    tui.enter()?;

    // Mount the shell; the startup sequence runs here
    let context = AppContext::new(LocalServices::new(data_dir));
    let mut app = App::new(context, route);
    app.init()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    if let Err(err) = result {
        tracing::error!("{:#}", err);
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    tracing::info!("exiting");
    Ok(())
}

/// Logs go to a file: stdout belongs to the terminal UI
fn init_logging(data_dir: &DataDir) -> Result<()> {
    let log_path = data_dir.log_path();
    let log_file = File::create(&log_path)
        .with_context(|| format!("Could not create log file {}", log_path.display()))?;

    let filter = EnvFilter::try_from_env("AGENT_SHELL_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(log_file)
        .with_ansi(false)
        .init();
    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                tracing::error!("draw error: {:#}", e);
            }
        })?;

        if let Some(event) = tui.next_event()? {
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Mouse(mouse) => app.handle_mouse_event(mouse)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            // An action may produce a follow-up action
            let mut current_action = action;
            while let Some(a) = current_action {
                current_action = app.update(a)?;
            }
        } else {
            app.update(Action::Tick)?;
        }
    }

    Ok(())
}
