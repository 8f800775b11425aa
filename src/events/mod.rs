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

//! Application logic, event handling, and command dispatching.
//!
//! This module acts as the central hub for the "Controller" logic of the
//! application. Key presses, commands and results from the task worker all
//! arrive here as [`AppEvent`]s on a single channel and are applied to the
//! [`App`] state one at a time, on the UI thread.

mod handlers;
use handlers::*;

use std::{io::Stdout, path::PathBuf};

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{App, components::FormAction, export::ExportReport, model::Photo, render::draw};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    ExportRequested,
    ExportFinished(ExportReport),
    ExportFailed(String),

    PhotoRequested(String),
    PhotoLoaded(Photo),
    PhotoFailed(PathBuf, String),
    ClearPhoto,

    OpenShareLink,
    LinkOpened(String),

    ResetCard,

    Tick,

    ExitApplication,

    Error(String),
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        dispatch_event(app, event)?;

        terminal.draw(|f| draw(f, app))?;
    }
    Ok(())
}

/// Applies a single event to the application state.
pub(crate) fn dispatch_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::ExportRequested => handle_export_requested(app)?,
        AppEvent::ExportFinished(report) => handle_export_finished(app, report),
        AppEvent::ExportFailed(message) => handle_export_failed(app, message),
        AppEvent::PhotoRequested(path) => handle_photo_requested(app, path)?,
        AppEvent::PhotoLoaded(photo) => handle_photo_loaded(app, photo),
        AppEvent::PhotoFailed(path, message) => handle_photo_failed(app, path, message),
        AppEvent::ClearPhoto => handle_clear_photo(app),
        AppEvent::OpenShareLink => handle_open_share_link(app)?,
        AppEvent::LinkOpened(url) => handle_link_opened(app, url),
        AppEvent::ResetCard => handle_reset_card(app),
        AppEvent::Error(message) => handle_error(app, message),
        AppEvent::Tick | AppEvent::ExitApplication => {}
    }

    Ok(())
}

/// Maps keyboard input to application actions.
///
/// Keys are offered, in order, to:
///
/// * **Application Control**: `Ctrl-C` quits and `Ctrl-S` exports whatever
///   else is going on.
/// * **Commander**: the `:` command line, while it is open or to open it.
/// * **Form**: field navigation and editing.
/// * **Global Keys**: single letter shortcuts the form had no use for.
///
/// # Errors
///
/// Returns an error if an event or task cannot be sent.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => {
                app.event_tx.send(AppEvent::ExitApplication)?;
                return Ok(());
            }
            KeyCode::Char('s') => {
                app.event_tx.send(AppEvent::ExportRequested)?;
                return Ok(());
            }
            _ => {}
        }
    }

    let event = Event::Key(key);

    // While a field is being edited ':' is just text
    if app.commander.active() || !app.form.is_editing() {
        if app.commander.handle_event(&event, &app.event_tx) {
            return Ok(());
        }
    }

    match app.form.process_event(&event, &mut app.card) {
        FormAction::Ignored => process_global_key_event(app, key)?,
        FormAction::Handled | FormAction::CardChanged => {}
        FormAction::SubmitPhoto(path) => app.event_tx.send(AppEvent::PhotoRequested(path))?,
        FormAction::ClearPhoto => app.event_tx.send(AppEvent::ClearPhoto)?,
    }

    Ok(())
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,
        KeyCode::Char('e') | KeyCode::Char('w') => app.event_tx.send(AppEvent::ExportRequested)?,
        KeyCode::Char('o') => app.event_tx.send(AppEvent::OpenShareLink)?,
        KeyCode::Esc => app.status = None,
        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::mpsc::{self, Receiver};

    use crate::{config::AppConfig, tasks::AppTask};

    fn app() -> (App, Receiver<AppTask>) {
        let (task_tx, task_rx) = mpsc::channel();
        (App::new(AppConfig::default(), task_tx), task_rx)
    }

    fn press(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Result<()> {
        process_key_event(app, KeyEvent::new(code, modifiers))
    }

    /// Dispatches everything queued on the event channel, as the main loop
    /// would, returning `true` if the application was asked to quit.
    fn drain(app: &mut App) -> Result<bool> {
        while let Ok(event) = app.event_rx.try_recv() {
            if matches!(event, AppEvent::ExitApplication) {
                return Ok(true);
            }
            dispatch_event(app, event)?;
        }
        Ok(false)
    }

    #[test]
    fn test_q_quits_in_normal_mode_only() -> Result<()> {
        let (mut app, _task_rx) = app();

        press(&mut app, KeyCode::Char('j'), KeyModifiers::NONE)?;
        press(&mut app, KeyCode::Char('i'), KeyModifiers::NONE)?;
        press(&mut app, KeyCode::Char('q'), KeyModifiers::NONE)?;
        assert!(!drain(&mut app)?);
        assert_eq!(app.card.artists[0], "q");

        press(&mut app, KeyCode::Esc, KeyModifiers::NONE)?;
        press(&mut app, KeyCode::Char('q'), KeyModifiers::NONE)?;
        assert!(drain(&mut app)?);
        Ok(())
    }

    #[test]
    fn test_ctrl_s_exports_while_editing() -> Result<()> {
        let (mut app, task_rx) = app();

        press(&mut app, KeyCode::Char('i'), KeyModifiers::NONE)?;
        press(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL)?;
        drain(&mut app)?;

        assert!(matches!(task_rx.try_recv(), Ok(AppTask::ExportCard(_))));
        assert!(app.form.is_editing());
        Ok(())
    }

    #[test]
    fn test_colon_is_text_while_editing() -> Result<()> {
        let (mut app, _task_rx) = app();

        press(&mut app, KeyCode::Char('G'), KeyModifiers::NONE)?;
        press(&mut app, KeyCode::Char('i'), KeyModifiers::NONE)?;
        press(&mut app, KeyCode::Char(':'), KeyModifiers::NONE)?;

        assert!(!app.commander.active());
        assert_eq!(app.card.genre, "Talk:");
        Ok(())
    }

    #[test]
    fn test_command_line_export() -> Result<()> {
        let (mut app, task_rx) = app();

        for ch in [':', 'w'] {
            press(&mut app, KeyCode::Char(ch), KeyModifiers::NONE)?;
        }
        press(&mut app, KeyCode::Enter, KeyModifiers::NONE)?;
        drain(&mut app)?;

        assert!(matches!(task_rx.try_recv(), Ok(AppTask::ExportCard(_))));
        Ok(())
    }

    #[test]
    fn test_submitted_photo_path_is_loaded() -> Result<()> {
        let (mut app, task_rx) = app();

        press(&mut app, KeyCode::Enter, KeyModifiers::NONE)?;
        for ch in "/tmp/me.png".chars() {
            press(&mut app, KeyCode::Char(ch), KeyModifiers::NONE)?;
        }
        press(&mut app, KeyCode::Enter, KeyModifiers::NONE)?;
        drain(&mut app)?;

        match task_rx.try_recv() {
            Ok(AppTask::LoadPhoto(path)) => assert_eq!(path, std::path::PathBuf::from("/tmp/me.png")),
            other => panic!("unexpected task {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn test_unknown_command_sets_error_status() -> Result<()> {
        let (mut app, _task_rx) = app();

        for ch in ":dance".chars() {
            press(&mut app, KeyCode::Char(ch), KeyModifiers::NONE)?;
        }
        press(&mut app, KeyCode::Enter, KeyModifiers::NONE)?;
        drain(&mut app)?;

        let status = app.status.as_ref().expect("status");
        assert!(status.is_error);
        assert_eq!(status.text, "Unknown command: dance");
        Ok(())
    }
}
