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

/// Formats a count with `,` separating each group of thousands.
///
/// This is how minutes listened are shown on the card and in the form.
///
/// # Arguments
///
/// * `value` - The count to format.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_grouped(10055666), "10,055,666");
/// assert_eq!(format_grouped(999), "999");
/// ```
pub(crate) fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Shortens `text` to at most `max_chars` characters, ending with an
/// ellipsis when anything was cut.
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    if max_chars == 0 {
        return String::new();
    }

    let mut truncated: String = text.chars().take(max_chars - 1).collect();
    truncated.push('…');
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(12), "12");
        assert_eq!(format_grouped(999), "999");
        assert_eq!(format_grouped(1000), "1,000");
        assert_eq!(format_grouped(1234), "1,234");
        assert_eq!(format_grouped(100_000), "100,000");
        assert_eq!(format_grouped(10_055_666), "10,055,666");
        assert_eq!(format_grouped(u64::MAX), "18,446,744,073,709,551,615");
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("Talk", 10), "Talk");
        assert_eq!(truncate_chars("Talk", 4), "Talk");
        assert_eq!(truncate_chars("Italian Brainrot FM", 8), "Italian…");
        assert_eq!(truncate_chars("Mamma", 1), "…");
        assert_eq!(truncate_chars("Mamma", 0), "");
    }
}
