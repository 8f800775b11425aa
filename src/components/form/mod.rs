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

//! The card editing form.
//!
//! This module holds the text inputs for every editable field of the card
//! and the focus and mode state used to move between them. The form owns
//! only the text being edited, every change is written through to the
//! [`WrappedCard`] using its update operations, so the card remains the single
//! source of truth for the preview.

mod event;
mod render;

use tui_input::Input;

use crate::{
    model::{ARTIST_PLACEHOLDERS, SLOT_COUNT, SONG_PLACEHOLDERS, WrappedCard},
    util::format::format_grouped,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormField {
    Photo,
    Artist(usize),
    Song(usize),
    Minutes,
    Genre,
}

impl FormField {
    pub(crate) const COUNT: usize = 3 + 2 * SLOT_COUNT;

    /// Every field in display order.
    pub(crate) fn all() -> [FormField; Self::COUNT] {
        std::array::from_fn(|i| match i {
            0 => FormField::Photo,
            i if i <= SLOT_COUNT => FormField::Artist(i - 1),
            i if i <= 2 * SLOT_COUNT => FormField::Song(i - 1 - SLOT_COUNT),
            i if i == 2 * SLOT_COUNT + 1 => FormField::Minutes,
            _ => FormField::Genre,
        })
    }

    pub(crate) fn label(&self) -> String {
        match self {
            FormField::Photo => "Photo".to_string(),
            FormField::Artist(i) => format!("Artist {}", i + 1),
            FormField::Song(i) => format!("Song {}", i + 1),
            FormField::Minutes => "Minutes".to_string(),
            FormField::Genre => "Genre".to_string(),
        }
    }

    /// Hint text shown while the field is empty.
    pub(crate) fn placeholder(&self) -> Option<&'static str> {
        match self {
            FormField::Photo => Some("path to an image, Enter to load"),
            FormField::Artist(i) => ARTIST_PLACEHOLDERS.get(*i).copied(),
            FormField::Song(i) => SONG_PLACEHOLDERS.get(*i).copied(),
            FormField::Minutes | FormField::Genre => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormMode {
    Normal,
    Editing,
}

/// Outcome of passing a key event to the form.
#[derive(Debug, PartialEq)]
pub(crate) enum FormAction {
    /// The form did not use the event.
    Ignored,
    /// Focus or mode changed, the card did not.
    Handled,
    CardChanged,
    SubmitPhoto(String),
    ClearPhoto,
}

pub(crate) struct CardForm {
    fields: [FormField; FormField::COUNT],
    inputs: [Input; FormField::COUNT],
    focus: usize,
    mode: FormMode,
}

impl CardForm {
    /// Creates a form whose inputs mirror `card`.
    pub(crate) fn from_card(card: &WrappedCard) -> Self {
        let fields = FormField::all();
        let inputs = std::array::from_fn(|i| Input::new(field_text(card, fields[i])));

        Self {
            fields,
            inputs,
            focus: 0,
            mode: FormMode::Normal,
        }
    }

    /// Reloads every input from `card`, keeping focus and mode.
    pub(crate) fn sync_from_card(&mut self, card: &WrappedCard) {
        for (input, field) in self.inputs.iter_mut().zip(self.fields) {
            *input = Input::new(field_text(card, field));
        }
    }

    pub(crate) fn mode(&self) -> FormMode {
        self.mode
    }

    pub(crate) fn is_editing(&self) -> bool {
        self.mode == FormMode::Editing
    }

    /// True while `field` has the focus and is being typed into.
    pub(crate) fn is_editing_field(&self, field: FormField) -> bool {
        self.is_editing() && self.focused_field() == field
    }

    pub(crate) fn focused_field(&self) -> FormField {
        self.fields[self.focus]
    }

    pub(crate) fn value(&self, field: FormField) -> &str {
        self.position(field)
            .map(|i| self.inputs[i].value())
            .unwrap_or_default()
    }

    pub(crate) fn set_photo_text(&mut self, text: impl Into<String>) {
        if let Some(i) = self.position(FormField::Photo) {
            self.inputs[i] = Input::new(text.into());
        }
    }

    fn position(&self, field: FormField) -> Option<usize> {
        self.fields.iter().position(|f| *f == field)
    }

    fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
    }

    fn focus_previous(&mut self) {
        self.focus = self.focus.checked_sub(1).unwrap_or(self.fields.len() - 1);
    }

    fn focus_first(&mut self) {
        self.focus = 0;
    }

    fn focus_last(&mut self) {
        self.focus = self.fields.len() - 1;
    }
}

/// The text a field shows for the current card.
fn field_text(card: &WrappedCard, field: FormField) -> String {
    match field {
        FormField::Photo => card
            .photo
            .as_ref()
            .map(|p| p.path().to_string_lossy().into_owned())
            .unwrap_or_default(),
        FormField::Artist(i) => card.artists.get(i).cloned().unwrap_or_default(),
        FormField::Song(i) => card.songs.get(i).cloned().unwrap_or_default(),
        FormField::Minutes => format_grouped(card.minutes),
        FormField::Genre => card.genre.clone(),
    }
}

/// Writes an edited field value through to the card.
///
/// Returns the text the field should show afterwards when it differs from
/// what was typed, which happens for minutes as the stored number is shown
/// in its grouped form.
pub(crate) fn apply_to_card(card: &mut WrappedCard, field: FormField, value: &str) -> Option<String> {
    match field {
        FormField::Photo => None,
        FormField::Artist(i) => {
            card.set_artist(i, value);
            None
        }
        FormField::Song(i) => {
            card.set_song(i, value);
            None
        }
        FormField::Minutes => {
            let minutes = card.set_minutes_from_text(value);
            let formatted = format_grouped(minutes);
            (formatted != value).then_some(formatted)
        }
        FormField::Genre => {
            card.set_genre(value);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order() {
        let fields = FormField::all();

        assert_eq!(fields.len(), 13);
        assert_eq!(fields[0], FormField::Photo);
        assert_eq!(fields[1], FormField::Artist(0));
        assert_eq!(fields[5], FormField::Artist(4));
        assert_eq!(fields[6], FormField::Song(0));
        assert_eq!(fields[10], FormField::Song(4));
        assert_eq!(fields[11], FormField::Minutes);
        assert_eq!(fields[12], FormField::Genre);
    }

    #[test]
    fn test_labels_and_placeholders() {
        assert_eq!(FormField::Artist(2).label(), "Artist 3");
        assert_eq!(FormField::Artist(2).placeholder(), Some("Nonna Delirio"));
        assert_eq!(FormField::Song(0).placeholder(), Some("We Are Charlie Kirk"));
        assert_eq!(FormField::Genre.placeholder(), None);
    }

    #[test]
    fn test_form_mirrors_card() {
        let mut card = WrappedCard::new();
        card.set_artist(0, "Kraftwerk");
        let form = CardForm::from_card(&card);

        assert_eq!(form.value(FormField::Artist(0)), "Kraftwerk");
        assert_eq!(form.value(FormField::Artist(1)), "");
        assert_eq!(form.value(FormField::Minutes), "10,055,666");
        assert_eq!(form.value(FormField::Genre), "Talk");
        assert_eq!(form.value(FormField::Photo), "");
        assert_eq!(form.mode(), FormMode::Normal);
    }

    #[test]
    fn test_is_editing_field() {
        let mut form = CardForm::from_card(&WrappedCard::new());
        assert!(!form.is_editing_field(FormField::Photo));

        form.mode = FormMode::Editing;
        assert!(form.is_editing_field(FormField::Photo));
        assert!(!form.is_editing_field(FormField::Genre));
    }

    #[test]
    fn test_apply_minutes_reformats() {
        let mut card = WrappedCard::new();

        let shown = apply_to_card(&mut card, FormField::Minutes, "1,234abc");

        assert_eq!(card.minutes, 1234);
        assert_eq!(shown.as_deref(), Some("1,234"));
        assert_eq!(apply_to_card(&mut card, FormField::Minutes, "1,234"), None);
    }

    #[test]
    fn test_apply_text_fields() {
        let mut card = WrappedCard::new();

        assert_eq!(apply_to_card(&mut card, FormField::Song(2), "Windowlicker"), None);
        assert_eq!(apply_to_card(&mut card, FormField::Genre, "IDM"), None);

        assert_eq!(card.songs[2], "Windowlicker");
        assert_eq!(card.genre, "IDM");
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = CardForm::from_card(&WrappedCard::new());

        form.focus_previous();
        assert_eq!(form.focused_field(), FormField::Genre);

        form.focus_next();
        assert_eq!(form.focused_field(), FormField::Photo);

        form.focus_last();
        form.focus_first();
        assert_eq!(form.focused_field(), FormField::Photo);
    }

    #[test]
    fn test_sync_from_card() {
        let mut card = WrappedCard::new();
        let mut form = CardForm::from_card(&card);

        card.set_genre("Polka");
        card.set_minutes_from_text("12");
        form.sync_from_card(&card);

        assert_eq!(form.value(FormField::Genre), "Polka");
        assert_eq!(form.value(FormField::Minutes), "12");
    }
}
