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

//! Input handling for the card form.
//!
//! In normal mode keys move the focus between fields. In editing mode keys
//! are delegated to the focused `tui-input` and any change to its value is
//! written through to the card.

use crossterm::event::{Event, KeyCode, KeyEvent};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{
    components::form::{CardForm, FormAction, FormField, FormMode, apply_to_card},
    model::WrappedCard,
};

impl CardForm {
    pub(crate) fn process_event(&mut self, event: &Event, card: &mut WrappedCard) -> FormAction {
        let Event::Key(key) = event else {
            return FormAction::Ignored;
        };

        match self.mode {
            FormMode::Normal => self.process_normal_key(key, card),
            FormMode::Editing => self.process_editing_key(event, key, card),
        }
    }

    fn process_normal_key(&mut self, key: &KeyEvent, card: &mut WrappedCard) -> FormAction {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => self.focus_next(),
            KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => self.focus_previous(),
            KeyCode::Char('g') | KeyCode::Home => self.focus_first(),
            KeyCode::Char('G') | KeyCode::End => self.focus_last(),

            KeyCode::Char('i') | KeyCode::Enter => self.mode = FormMode::Editing,

            KeyCode::Char('x') | KeyCode::Delete => return self.clear_focused(card),

            _ => return FormAction::Ignored,
        }

        FormAction::Handled
    }

    fn process_editing_key(
        &mut self,
        event: &Event,
        key: &KeyEvent,
        card: &mut WrappedCard,
    ) -> FormAction {
        match key.code {
            KeyCode::Esc => {
                self.mode = FormMode::Normal;
                FormAction::Handled
            }

            KeyCode::Enter => {
                self.mode = FormMode::Normal;
                match self.focused_field() {
                    FormField::Photo => {
                        FormAction::SubmitPhoto(self.inputs[self.focus].value().trim().to_string())
                    }
                    _ => FormAction::Handled,
                }
            }

            KeyCode::Tab | KeyCode::Down => {
                self.focus_next();
                FormAction::Handled
            }

            KeyCode::BackTab | KeyCode::Up => {
                self.focus_previous();
                FormAction::Handled
            }

            _ => self.edit_focused(event, card),
        }
    }

    fn edit_focused(&mut self, event: &Event, card: &mut WrappedCard) -> FormAction {
        let field = self.focused_field();
        let input = &mut self.inputs[self.focus];

        let before = input.value().to_string();
        input.handle_event(event);
        if input.value() == before {
            return FormAction::Handled;
        }

        if field == FormField::Photo {
            // Only loaded on submit
            return FormAction::Handled;
        }

        if let Some(shown) = apply_to_card(card, field, input.value()) {
            // Keep the cursor the same distance from the end of the text
            let from_end = input.value().chars().count().saturating_sub(input.cursor());
            let cursor = shown.chars().count().saturating_sub(from_end);
            *input = Input::new(shown).with_cursor(cursor);
        }

        FormAction::CardChanged
    }

    /// Empties the focused field. Minutes can not be empty so they drop to 0.
    fn clear_focused(&mut self, card: &mut WrappedCard) -> FormAction {
        let field = self.focused_field();
        if field == FormField::Photo {
            self.inputs[self.focus].reset();
            return FormAction::ClearPhoto;
        }

        let shown = apply_to_card(card, field, "").unwrap_or_default();
        self.inputs[self.focus] = Input::new(shown);
        FormAction::CardChanged
    }
}
