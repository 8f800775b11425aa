// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Wrapefy.
//!
//! A terminal editor for a fake year-in-review music card, with PNG export.
//!
//! The user fills in their top artists, top songs, minutes listened, top
//! genre and a photo, watches a live preview of the card and saves it as an
//! image.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle and UI rendering.
//! * A **Background Worker** decodes photos, renders and writes the PNG and
//!   opens links via asynchronous task processing.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and the background worker is handled via `std::sync::mpsc`
//! channels.
//!
//! The `export` subcommand skips the terminal entirely and renders a card
//! described on the command line.

mod card;
mod cli;
mod commander;
mod components;
mod config;
mod events;
mod export;
mod model;
mod render;
mod tasks;
mod theme;
mod util;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    path::PathBuf,
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::{
    cli::{Cli, Commands, ExportArgs},
    commander::Commander,
    components::CardForm,
    config::AppConfig,
    events::{AppEvent, process_events},
    export::{Compositor, FontSet},
    model::WrappedCard,
    tasks::AppTask,
    theme::Theme,
};

const TICK_RATE: Duration = Duration::from_millis(250);

/// A message for the status bar.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct StatusMessage {
    pub(crate) text: String,
    pub(crate) is_error: bool,
}

impl StatusMessage {
    pub(crate) fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub(crate) fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Application state.
pub(crate) struct App {
    pub config: AppConfig,

    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub task_tx: Sender<AppTask>,

    pub card: WrappedCard,
    pub form: CardForm,

    pub commander: Commander,

    pub status: Option<StatusMessage>,
    pub export_in_flight: bool,

    /// The photo most recently sent to the task worker, results for any
    /// other path are stale.
    pub pending_photo: Option<PathBuf>,
}

impl App {
    /// Create a new instance of application state, with a default card.
    pub fn new(config: AppConfig, task_tx: Sender<AppTask>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let card = WrappedCard::new();
        let form = CardForm::from_card(&card);

        Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            task_tx,
            card,
            form,
            commander: Commander::new(),
            status: None,
            export_in_flight: false,
            pending_photo: None,
        }
    }
}

/// The entry point of the application.
///
/// Parses the command line, sets up logging and either runs the interactive
/// editor or renders a card directly, returning an error if any part of the
/// execution fails.
fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Export(args)) => {
            setup_logging(cli.debug, LogTarget::Stderr);
            let mut config = config::load_config();
            cli.apply_to(&mut config);
            run_export(config, args)
        }
        Some(Commands::Edit(_)) | None => {
            let _guard = setup_logging(cli.debug, LogTarget::File);
            let mut config = config::load_config();
            cli.apply_to(&mut config);
            run_editor(config, cli.edit_args().photo)
        }
    }
}

enum LogTarget {
    /// The editor owns the terminal, so logs go to a file in the temp dir.
    File,
    Stderr,
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins when it is set, otherwise this crate logs at info, or
/// debug with `--debug`. The returned guard must be held for as long as logs
/// are being written to a file.
fn setup_logging(debug: bool, target: LogTarget) -> Option<WorkerGuard> {
    let level = if debug { "wrapefy=debug" } else { "wrapefy=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match target {
        LogTarget::File => {
            let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
            let log_filename = format!("wrapefy_{timestamp}.log");

            let file_appender = tracing_appender::rolling::never(std::env::temp_dir(), log_filename);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(non_blocking)
                        .with_ansi(false)
                        .with_target(true)
                        .with_line_number(true),
                )
                .with(filter)
                .init();

            Some(guard)
        }
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(io::stderr).with_target(false))
                .with(filter)
                .init();

            None
        }
    }
}

/// Renders the card described by `args` without starting the editor.
fn run_export(mut config: AppConfig, args: &ExportArgs) -> Result<()> {
    if let Some(scale) = args.scale {
        config.export_scale = scale;
    }

    let card = args.to_card().context("Invalid card")?;
    let path = args.output_path(&config);

    let compositor = Compositor::new(FontSet::load(&config), config.scale());
    if !compositor.has_text() {
        tracing::warn!("No usable font found, the card will have no text. Set font_path in the configuration.");
    }

    let report = export::export_card(&compositor, &card, &path).context("Export failed")?;

    println!(
        "Saved {}x{} card to {}",
        report.width,
        report.height,
        report.path.display()
    );

    Ok(())
}

fn run_editor(config: AppConfig, photo: Option<PathBuf>) -> Result<()> {
    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(config, task_tx);

    if let Some(photo) = photo {
        app.event_tx
            .send(AppEvent::PhotoRequested(photo.to_string_lossy().into_owned()))
            .context("Failed to queue start-up photo")?;
    }

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app, task_rx);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        if let Err(e) = util::term::set_terminal_bg(&hex) {
            tracing::debug!("Could not set terminal background: {e}");
        }
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is best-effort and does not return a result, as it is
/// typically called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg().ok();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A task worker to process asynchronous [`AppTask`]s.
/// * An input thread to poll for system keyboard events.
/// * A tick thread to trigger periodic UI refreshes.
///
/// After spawning the workers, it hands control to [`process_events`] to
/// manage the UI and state updates.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    task_rx: Receiver<AppTask>,
) -> Result<()> {
    // Spawn a background worker to process application tasks asynchronously.
    let task_event_tx = app.event_tx.clone();
    tasks::spawn_task_worker(&app.config, task_rx, task_event_tx);

    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event::Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if tx_keys.send(AppEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(event::Event::Resize(..)) => {
                    tx_keys.send(AppEvent::Tick).ok();
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::error!("Failed to read terminal event: {e}");
                    break;
                }
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(TICK_RATE);
        }
    });

    tracing::info!("Editor started");

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
