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

//! Render the status bar: the current mode, the latest message and a reminder
//! of the keys that matter in that mode.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{App, components::FormMode};

const NORMAL_HINTS: &str = "j/k move  i edit  x clear  e export  o open  : command  q quit";
const EDITING_HINTS: &str = "Esc done  Tab next  Ctrl-S export";

pub(super) fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let (mode, hints) = match app.form.mode() {
        FormMode::Normal => (" NORMAL ", NORMAL_HINTS),
        FormMode::Editing => (" EDIT ", EDITING_HINTS),
    };

    let mut spans = vec![
        Span::styled(
            mode,
            Style::default().fg(Color::Black).bg(theme.accent_colour).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ];

    if let Some(status) = &app.status {
        let colour = if status.is_error { theme.error_colour } else { theme.text_colour };
        spans.push(Span::styled(status.text.clone(), Style::default().fg(colour)));
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(hints.len() as u16 + 1)])
        .split(area);

    f.render_widget(Paragraph::new(Line::from(spans)), columns[0]);
    f.render_widget(
        Paragraph::new(Span::styled(hints, Style::default().fg(theme.muted_colour)))
            .alignment(Alignment::Right),
        columns[1],
    );
}
