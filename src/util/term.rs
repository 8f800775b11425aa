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

//! Terminal environment utilities.
//!
//! Sets and restores the terminal emulator's background colour with OSC
//! escape sequences, so the editor's dark backdrop reaches the edges of the
//! window. Terminals that do not understand the sequences ignore them.

use std::io::{self, Write};

/// Sets the terminal background color (OSC 11).
///
/// # Arguments
///
/// * `hex_color` - The color as a CSS-style string, e.g. `"#0a0a0a"`.
pub(crate) fn set_terminal_bg(hex_color: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "\x1b]11;{}\x07", hex_color)?;
    stdout.flush()
}

/// Resets the terminal background to the user's own setting (OSC 111).
pub(crate) fn reset_terminal_bg() -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "\x1b]111\x07")?;
    stdout.flush()
}
