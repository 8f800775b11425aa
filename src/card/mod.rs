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

//! The resolved contents of a card, as shown to the user.
//!
//! [`CardView`] is a pure projection of a [`WrappedCard`]: empty slots are
//! replaced with their placeholders, minutes are grouped and the photo is
//! either present or replaced by an upload prompt. Both the terminal preview
//! and the PNG compositor draw from a `CardView`, so they can never disagree
//! about what the card says.

use crate::{
    model::{ARTIST_PLACEHOLDERS, Photo, SLOT_COUNT, SONG_PLACEHOLDERS, WrappedCard},
    util::format::format_grouped,
};

pub(crate) const YEAR_LABEL: &str = "2025";
pub(crate) const PHOTO_PROMPT: &str = "Upload a photo on the left to show it here.";

pub(crate) const TOP_ARTISTS_LABEL: &str = "Top Artists";
pub(crate) const TOP_SONGS_LABEL: &str = "Top Songs";
pub(crate) const MINUTES_LABEL: &str = "Minutes Listened";
pub(crate) const GENRE_LABEL: &str = "Top Genre";

pub(crate) const BRAND_NAME: &str = "Wrapefy";
pub(crate) const BRAND_URL: &str = "WRAPEFY.COM";

/// What appears in the photo panel.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PhotoSlot<'a> {
    Photo(&'a Photo),
    Prompt(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CardView<'a> {
    pub(crate) artists: [&'a str; SLOT_COUNT],
    pub(crate) songs: [&'a str; SLOT_COUNT],
    pub(crate) minutes: String,
    pub(crate) genre: &'a str,
    pub(crate) photo: PhotoSlot<'a>,
}

impl<'a> CardView<'a> {
    pub(crate) fn from_card(card: &'a WrappedCard) -> Self {
        Self {
            artists: resolve_slots(&card.artists, &ARTIST_PLACEHOLDERS),
            songs: resolve_slots(&card.songs, &SONG_PLACEHOLDERS),
            minutes: format_grouped(card.minutes),
            genre: &card.genre,
            photo: match &card.photo {
                Some(photo) => PhotoSlot::Photo(photo),
                None => PhotoSlot::Prompt(PHOTO_PROMPT),
            },
        }
    }

    /// Ranked artists as `(rank, label)` pairs, rank starting at 1.
    pub(crate) fn ranked_artists(&self) -> impl Iterator<Item = (usize, &'a str)> + '_ {
        self.artists.iter().enumerate().map(|(i, label)| (i + 1, *label))
    }

    pub(crate) fn ranked_songs(&self) -> impl Iterator<Item = (usize, &'a str)> + '_ {
        self.songs.iter().enumerate().map(|(i, label)| (i + 1, *label))
    }
}

// Only a truly empty slot takes the placeholder, whitespace is user content.
fn resolve_slots<'a>(
    values: &'a [String; SLOT_COUNT],
    placeholders: &'static [&'static str; SLOT_COUNT],
) -> [&'a str; SLOT_COUNT] {
    std::array::from_fn(|i| {
        if values[i].is_empty() {
            placeholders[i]
        } else {
            values[i].as_str()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use image::{DynamicImage, RgbImage};

    #[test]
    fn test_default_card_shows_placeholders() {
        let card = WrappedCard::new();
        let view = CardView::from_card(&card);

        assert_eq!(view.artists, ARTIST_PLACEHOLDERS);
        assert_eq!(view.songs, SONG_PLACEHOLDERS);
        assert_eq!(view.minutes, "10,055,666");
        assert_eq!(view.genre, "Talk");
        assert_eq!(view.photo, PhotoSlot::Prompt(PHOTO_PROMPT));
    }

    #[test]
    fn test_empty_slots_fall_back_per_index() {
        let mut card = WrappedCard::new();
        card.set_artist(1, "Björk");
        card.set_song(3, "Hyperballad");

        let view = CardView::from_card(&card);

        assert_eq!(view.artists[0], "Charlie Kirk");
        assert_eq!(view.artists[1], "Björk");
        assert_eq!(view.artists[2], "Nonna Delirio");
        assert_eq!(view.songs[3], "Hyperballad");
        assert_eq!(view.songs[4], "Mamma Mia (Nightcore)");
    }

    #[test]
    fn test_whitespace_is_not_empty() {
        let mut card = WrappedCard::new();
        card.set_artist(0, " ");

        assert_eq!(CardView::from_card(&card).artists[0], " ");
    }

    #[test]
    fn test_genre_is_shown_verbatim() {
        let mut card = WrappedCard::new();
        card.set_genre("");

        assert_eq!(CardView::from_card(&card).genre, "");
    }

    #[test]
    fn test_minutes_are_grouped() {
        let mut card = WrappedCard::new();
        card.set_minutes_from_text("1,234abc");

        assert_eq!(CardView::from_card(&card).minutes, "1,234");
    }

    #[test]
    fn test_photo_replaces_prompt() {
        let mut card = WrappedCard::new();
        let photo = Photo::from_image("me.png", DynamicImage::ImageRgb8(RgbImage::new(2, 2)));
        card.set_photo(photo.clone());

        let view = CardView::from_card(&card);

        assert_eq!(view.photo, PhotoSlot::Photo(&photo));
    }

    #[test]
    fn test_ranked_lists_start_at_one() {
        let card = WrappedCard::new();
        let view = CardView::from_card(&card);

        let ranks: Vec<usize> = view.ranked_artists().map(|(rank, _)| rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5]);

        let (rank, label) = view.ranked_songs().last().unwrap();
        assert_eq!((rank, label), (5, "Mamma Mia (Nightcore)"));
    }
}
