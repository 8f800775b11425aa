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

//! Command-line input logic and state management.
//!
//! This module implements the `:` command line, handling a text input
//! component and dispatching the corresponding application event when a
//! command is submitted.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::events::AppEvent;

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Offers a terminal event to the command line.
    ///
    /// Returns `true` if the event was consumed, either because the command
    /// line is open or because the event opened it.
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> bool {
        let Event::Key(key_event) = event else {
            return false;
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return true;
            }
            return false;
        }

        match key_event.code {
            KeyCode::Esc => {
                self.input.reset();
                self.active = false;
            }

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                self.input.reset();
                self.active = false;

                if !buffer.is_empty() {
                    if let Err(e) = self.run_command(&buffer, event_tx) {
                        tracing::warn!("Failed to dispatch command '{buffer}': {e}");
                    }
                }
            }

            _ => {
                // Delegate all other keys to the managed input component.
                self.input.handle_event(event);
            }
        }

        true
    }

    fn run_command(&self, buffer: &str, event_tx: &Sender<AppEvent>) -> Result<()> {
        tracing::debug!("Running command '{buffer}'");
        event_tx.send(command_event(buffer))?;
        Ok(())
    }
}

/// Maps a command line to the event it triggers.
fn command_event(buffer: &str) -> AppEvent {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    match parts.as_slice() {
        ["q"] | ["quit"] => AppEvent::ExitApplication,

        ["w"] | ["export"] => AppEvent::ExportRequested,

        ["photo"] => AppEvent::Error("Usage: photo <path>".to_string()),
        ["photo", ..] => {
            // Paths may contain spaces, take everything after the command
            let path = buffer.trim_start()["photo".len()..].trim();
            AppEvent::PhotoRequested(path.to_string())
        }
        ["nophoto"] => AppEvent::ClearPhoto,

        ["open"] => AppEvent::OpenShareLink,

        ["reset"] => AppEvent::ResetCard,

        [] => AppEvent::Tick,

        [cmd, ..] => AppEvent::Error(format!("Unknown command: {cmd}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_command_events() {
        assert!(matches!(command_event("q"), AppEvent::ExitApplication));
        assert!(matches!(command_event("w"), AppEvent::ExportRequested));
        assert!(matches!(command_event("export"), AppEvent::ExportRequested));
        assert!(matches!(command_event("nophoto"), AppEvent::ClearPhoto));
        assert!(matches!(command_event("open"), AppEvent::OpenShareLink));
        assert!(matches!(command_event("reset"), AppEvent::ResetCard));
    }

    #[test]
    fn test_photo_path_keeps_spaces() {
        match command_event("photo ~/Pictures/summer trip.jpg") {
            AppEvent::PhotoRequested(path) => assert_eq!(path, "~/Pictures/summer trip.jpg"),
            other => panic!("unexpected event {other:?}"),
        }

        assert!(matches!(command_event("photo"), AppEvent::Error(_)));
    }

    #[test]
    fn test_unknown_command() {
        match command_event("dance now") {
            AppEvent::Error(message) => assert_eq!(message, "Unknown command: dance"),
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn test_typed_command_is_dispatched() {
        let (tx, rx) = mpsc::channel();
        let mut commander = Commander::new();

        assert!(!commander.handle_event(&key(KeyCode::Char('w')), &tx));
        assert!(commander.handle_event(&key(KeyCode::Char(':')), &tx));
        assert!(commander.active());

        commander.handle_event(&key(KeyCode::Char('w')), &tx);
        assert_eq!(commander.input.value(), "w");

        commander.handle_event(&key(KeyCode::Enter), &tx);
        assert!(!commander.active());
        assert_eq!(commander.input.value(), "");
        assert!(matches!(rx.try_recv(), Ok(AppEvent::ExportRequested)));
    }

    #[test]
    fn test_escape_cancels() {
        let (tx, rx) = mpsc::channel();
        let mut commander = Commander::new();

        commander.handle_event(&key(KeyCode::Char(':')), &tx);
        commander.handle_event(&key(KeyCode::Char('q')), &tx);
        commander.handle_event(&key(KeyCode::Esc), &tx);

        assert!(!commander.active());
        assert!(rx.try_recv().is_err());
    }
}
