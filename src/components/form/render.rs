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

//! UI rendering logic for the card form.
//!
//! Fields are drawn as label and value rows grouped under section headings.
//! Empty fields show their placeholder hint, the focused row is highlighted
//! and the view scrolls to keep it visible on short terminals.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    components::form::{CardForm, FormField},
    render::Render,
    theme::Theme,
};

const LABEL_WIDTH: u16 = 9;

impl Render for CardForm {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let title = if self.is_editing() { " Create your own card [edit] " } else { " Create your own card " };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_colour))
            .title(title)
            .title_style(Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD))
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        f.render_widget(block, area);

        if inner.width <= LABEL_WIDTH + 1 || inner.height == 0 {
            return;
        }

        let value_width = (inner.width - LABEL_WIDTH - 1) as usize;

        let mut lines: Vec<Line> = Vec::new();
        let mut focus_line = 0;

        for i in 0..self.fields.len() {
            if let Some(heading) = section_heading(self.fields[i]) {
                if !lines.is_empty() {
                    lines.push(Line::default());
                }
                lines.push(Line::from(Span::styled(
                    heading,
                    Style::default().fg(theme.muted_colour).add_modifier(Modifier::BOLD),
                )));
            }

            if i == self.focus {
                focus_line = lines.len();
            }
            lines.push(self.field_line(i, value_width, theme));
        }

        let height = inner.height as usize;
        let scroll = focus_line.saturating_sub(height - 1);

        f.render_widget(Paragraph::new(lines).scroll((scroll as u16, 0)), inner);

        if self.is_editing() {
            let input = &self.inputs[self.focus];
            let offset = input.visual_cursor().saturating_sub(input.visual_scroll(value_width));
            let cursor_x = inner.x + LABEL_WIDTH + 1 + offset as u16;
            let cursor_y = inner.y + (focus_line - scroll) as u16;
            f.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), cursor_y));
        }
    }
}

impl CardForm {
    fn field_line(&self, index: usize, value_width: usize, theme: &Theme) -> Line<'static> {
        let field = self.fields[index];
        let input = &self.inputs[index];
        let focused = index == self.focus;

        let label_style = if focused {
            Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.muted_colour)
        };

        let value = if input.value().is_empty() {
            let hint = field.placeholder().unwrap_or_default();
            Span::styled(
                hint.chars().take(value_width).collect::<String>(),
                Style::default().fg(theme.placeholder_fg).add_modifier(Modifier::ITALIC),
            )
        } else {
            // Follow the cursor in the row being edited, otherwise show the start
            let skip = if focused && self.is_editing() { input.visual_scroll(value_width) } else { 0 };
            let visible: String = input.value().chars().skip(skip).take(value_width).collect();
            Span::styled(visible, Style::default().fg(theme.text_colour))
        };

        let bg = if focused { theme.field_focus_bg } else { theme.field_bg };

        Line::from(vec![
            Span::styled(format!("{:<width$}", field.label(), width = LABEL_WIDTH as usize), label_style),
            Span::raw(" "),
            value,
        ])
        .style(Style::default().bg(bg))
    }
}

fn section_heading(field: FormField) -> Option<&'static str> {
    match field {
        FormField::Photo => Some("PHOTO"),
        FormField::Artist(0) => Some("TOP ARTISTS"),
        FormField::Song(0) => Some("TOP SONGS"),
        FormField::Minutes => Some("STATS"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ratatui::{Terminal, backend::TestBackend};

    use crate::model::WrappedCard;

    fn rendered(form: &mut CardForm, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
        terminal
            .draw(|f| form.draw(f, f.area(), &Theme::default()))
            .expect("draw");

        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_draws_labels_and_placeholders() {
        let mut form = CardForm::from_card(&WrappedCard::new());

        let screen = rendered(&mut form, 60, 30);

        assert!(screen.contains("TOP ARTISTS"));
        assert!(screen.contains("Artist 1"));
        assert!(screen.contains("Charlie Kirk"));
        assert!(screen.contains("10,055,666"));
        assert!(screen.contains("Talk"));
    }

    #[test]
    fn test_scrolls_to_focus() {
        let mut form = CardForm::from_card(&WrappedCard::new());
        form.focus_last();

        let screen = rendered(&mut form, 60, 8);

        assert!(screen.contains("Genre"));
        assert!(!screen.contains("PHOTO"));
    }
}
