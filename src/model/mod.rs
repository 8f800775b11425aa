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

//! Card state and the field-level update operations.
//!
//! This module defines the [`WrappedCard`], the single piece of mutable state
//! in the application. Every edit made in the form, or passed on the command
//! line, goes through one of the update operations defined here.

pub(crate) mod photo;

pub(crate) use photo::Photo;

/// Number of ranked slots for both artists and songs.
pub(crate) const SLOT_COUNT: usize = 5;

pub(crate) const DEFAULT_MINUTES: u64 = 10_055_666;
pub(crate) const DEFAULT_GENRE: &str = "Talk";

pub(crate) const ARTIST_PLACEHOLDERS: [&str; SLOT_COUNT] = [
    "Charlie Kirk",
    "DJ Patapim",
    "Nonna Delirio",
    "Italian Brainrot FM",
    "Lil Tralalero",
];

pub(crate) const SONG_PLACEHOLDERS: [&str; SLOT_COUNT] = [
    "We Are Charlie Kirk",
    "Brr Brr Patapim Funk",
    "Tralalero Tralala",
    "Pasta e Techno",
    "Mamma Mia (Nightcore)",
];

/// The editable contents of a card.
///
/// Empty artist and song slots are legitimate, the preview substitutes the
/// placeholder for the slot at render time rather than storing it here.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WrappedCard {
    pub(crate) artists: [String; SLOT_COUNT],
    pub(crate) songs: [String; SLOT_COUNT],
    pub(crate) minutes: u64,
    pub(crate) genre: String,
    pub(crate) photo: Option<Photo>,
}

impl Default for WrappedCard {
    fn default() -> Self {
        Self {
            artists: Default::default(),
            songs: Default::default(),
            minutes: DEFAULT_MINUTES,
            genre: DEFAULT_GENRE.to_string(),
            photo: None,
        }
    }
}

impl WrappedCard {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Replaces the artist at `index`.
    ///
    /// Returns `false`, leaving the card untouched, if the index is outside
    /// the fixed slot range.
    pub(crate) fn set_artist(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.artists.get_mut(index) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Replaces the song at `index`, see [`WrappedCard::set_artist`].
    pub(crate) fn set_song(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.songs.get_mut(index) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Sets minutes listened from raw user text, returning the stored value.
    ///
    /// See [`parse_minutes`] for the coercion rules.
    pub(crate) fn set_minutes_from_text(&mut self, raw: &str) -> u64 {
        self.minutes = parse_minutes(raw);
        self.minutes
    }

    pub(crate) fn set_genre(&mut self, value: impl Into<String>) {
        self.genre = value.into();
    }

    pub(crate) fn set_photo(&mut self, photo: Photo) {
        self.photo = Some(photo);
    }

    pub(crate) fn clear_photo(&mut self) {
        self.photo = None;
    }
}

/// Coerces free text into a minutes count.
///
/// Every non-digit character is discarded and the remaining digits are read
/// as a base-10 integer. Text with no digits at all, or digits that do not
/// fit in a `u64`, yields zero.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(parse_minutes("1,234abc"), 1234);
/// assert_eq!(parse_minutes("none"), 0);
/// ```
pub(crate) fn parse_minutes(raw: &str) -> u64 {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let card = WrappedCard::new();

        assert!(card.artists.iter().all(String::is_empty));
        assert!(card.songs.iter().all(String::is_empty));
        assert_eq!(card.minutes, 10_055_666);
        assert_eq!(card.genre, "Talk");
        assert!(card.photo.is_none());
    }

    #[test]
    fn test_parse_minutes_strips_non_digits() {
        assert_eq!(parse_minutes("1,234abc"), 1234);
        assert_eq!(parse_minutes("10,055,666"), 10_055_666);
        assert_eq!(parse_minutes(" 4 2 "), 42);
        assert_eq!(parse_minutes("-17"), 17);
        assert_eq!(parse_minutes("007"), 7);
    }

    #[test]
    fn test_parse_minutes_without_digits_is_zero() {
        assert_eq!(parse_minutes(""), 0);
        assert_eq!(parse_minutes("lots"), 0);
        assert_eq!(parse_minutes(",,,"), 0);
        // Non-ASCII digits are not treated as digits
        assert_eq!(parse_minutes("١٢٣"), 0);
    }

    #[test]
    fn test_parse_minutes_overflow_is_zero() {
        assert_eq!(parse_minutes("99999999999999999999999"), 0);
    }

    #[test]
    fn test_set_minutes_from_text() {
        let mut card = WrappedCard::new();

        assert_eq!(card.set_minutes_from_text("1,234abc"), 1234);
        assert_eq!(card.minutes, 1234);

        card.set_minutes_from_text("");
        assert_eq!(card.minutes, 0);
    }

    #[test]
    fn test_set_slots() {
        let mut card = WrappedCard::new();

        assert!(card.set_artist(0, "Nina Simone"));
        assert!(card.set_song(4, "Sinnerman"));
        assert_eq!(card.artists[0], "Nina Simone");
        assert_eq!(card.songs[4], "Sinnerman");

        assert!(card.set_artist(0, ""));
        assert_eq!(card.artists[0], "");
    }

    #[test]
    fn test_set_slot_out_of_range_is_ignored() {
        let mut card = WrappedCard::new();

        assert!(!card.set_artist(SLOT_COUNT, "Nobody"));
        assert!(!card.set_song(99, "Nothing"));
        assert_eq!(card, WrappedCard::new());
    }

    #[test]
    fn test_set_genre() {
        let mut card = WrappedCard::new();
        card.set_genre("Hyperpop");
        assert_eq!(card.genre, "Hyperpop");
    }
}
