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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every event to provide a reactive user interface. The preview is rebuilt
//! from a fresh [`CardView`] each time, so it always reflects the card as it
//! is right now.

mod commander;
mod preview;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
};

use crate::{
    App,
    card::CardView,
    render::{commander::draw_commander, preview::draw_preview, status::draw_status},
    theme::Theme,
};

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Renders the user interface to the terminal frame.
///
/// It handles:
///
/// * **Layout**: The form on the left, the card preview on the right, with
///   the status bar and command line beneath.
/// * **State Mapping**: Projecting the card into a [`CardView`] for the
///   preview.
/// * **Styling**: Applying colors defined in the application theme.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();
    let theme = app.theme;

    f.render_widget(Block::default().style(Style::default().bg(theme.background_colour)), area);

    // Outer layout: main, status, command line
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    // Main layout: form, preview
    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(outer[0]);

    app.form.draw(f, main[0], &theme);

    let view = CardView::from_card(&app.card);
    draw_preview(f, main[1], &view, &theme);

    draw_status(f, outer[1], app);

    draw_commander(f, outer[2], app);
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::mpsc;

    use ratatui::{Terminal, backend::TestBackend};

    use crate::config::AppConfig;

    #[test]
    fn test_draws_form_and_preview() {
        let (task_tx, _task_rx) = mpsc::channel();
        let mut app = App::new(AppConfig::default(), task_tx);
        app.card.set_artist(0, "Boards of Canada");

        let mut terminal = Terminal::new(TestBackend::new(120, 40)).expect("terminal");
        terminal.draw(|f| draw(f, &mut app)).expect("draw");

        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();

        assert!(screen.contains("Create your own card"));
        assert!(screen.contains("Boards of Canada"));
        assert!(screen.contains("Wrapefy"));
    }
}
