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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the editor's color palette, including the colors used
//! to approximate the exported card in the terminal preview, and converts
//! colors to the hexadecimal form expected by terminal escape sequences.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) muted_colour: Color,
    pub(crate) text_colour: Color,
    pub(crate) error_colour: Color,

    pub(crate) field_bg: Color,
    pub(crate) field_focus_bg: Color,
    pub(crate) placeholder_fg: Color,
    pub(crate) commander_colour: Color,

    pub(crate) card_bg: Color,
    pub(crate) card_ink: Color,
    pub(crate) card_light_text: Color,
    pub(crate) card_band: Color,
    pub(crate) card_panel: Color,
    pub(crate) card_brand: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(10, 10, 10),
            accent_colour: Color::Rgb(16, 185, 129),
            border_colour: Color::Rgb(64, 64, 64),
            muted_colour: Color::Rgb(163, 163, 163),
            text_colour: Color::Rgb(245, 245, 245),
            error_colour: Color::Rgb(248, 113, 113),

            field_bg: Color::Rgb(38, 38, 38),
            field_focus_bg: Color::Rgb(23, 56, 45),
            placeholder_fg: Color::Rgb(115, 115, 115),
            commander_colour: Color::Rgb(250, 250, 250),

            card_bg: Color::Rgb(244, 241, 234),
            card_ink: Color::Rgb(17, 17, 17),
            card_light_text: Color::Rgb(248, 248, 248),
            card_band: Color::Rgb(107, 91, 255),
            card_panel: Color::Rgb(127, 99, 255),
            card_brand: Color::Rgb(50, 226, 107),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// Returns `None` for colors that are not [`Color::Rgb`], as those have
    /// no fixed value.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex() {
        assert_eq!(Theme::to_hex(Color::Rgb(244, 241, 234)).as_deref(), Some("#f4f1ea"));
        assert_eq!(Theme::to_hex(Color::Reset), None);
    }
}
