// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The eight-line penguin shown to the left of the facts.

/// Number of banner rows; also the maximum number of info lines shown.
pub const BANNER_LINES: usize = 8;

/// Escape sequence that turns on bold yellow.
pub(crate) const YELLOW: &str = "\x1b[1;33m";
/// Escape sequence that resets attributes.
pub(crate) const RESET: &str = "\x1b[1;0m";

/// Logo with yellow beak and feet.
static LOGO_COLOR: [&str; BANNER_LINES] = [
    "                      ",
    "         .-.          ",
    "        (.. |         ",
    "       \x1b[1;33m <> \x1b[1;0m |         ",
    "       / --- \\        ",
    "      ( |   | |       ",
    "    \x1b[1;33m|\\\x1b[1;0m\\_)___/\\)\x1b[1;33m/\\ \x1b[1;0m    ",
    "   \x1b[1;33m<__)\x1b[1;0m------\x1b[1;33m(__/\x1b[1;0m     ",
];

/// The same logo without escape sequences. Visible columns match
/// [`LOGO_COLOR`] row for row.
static LOGO_PLAIN: [&str; BANNER_LINES] = [
    "                      ",
    "         .-.          ",
    "        (.. |         ",
    "        <>  |         ",
    "       / --- \\        ",
    "      ( |   | |       ",
    "    |\\\\_)___/\\)/\\     ",
    "   <__)------(__/     ",
];

/// Returns the banner rows, coloured or plain.
pub fn banner(color: bool) -> &'static [&'static str; BANNER_LINES] {
    if color {
        &LOGO_COLOR
    } else {
        &LOGO_PLAIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_ansi(s: &str) -> String {
        s.replace(YELLOW, "").replace(RESET, "")
    }

    #[test]
    fn test_plain_matches_color() {
        for (plain, color) in LOGO_PLAIN.iter().zip(LOGO_COLOR.iter()) {
            assert_eq!(*plain, strip_ansi(color));
        }
    }

    #[test]
    fn test_rows_are_equal_width() {
        for row in LOGO_PLAIN {
            assert_eq!(row.chars().count(), 22, "row {row:?}");
        }
    }

    #[test]
    fn test_plain_has_no_escapes() {
        assert!(banner(false).iter().all(|row| !row.contains('\x1b')));
        assert!(banner(true).iter().any(|row| row.contains('\x1b')));
    }
}
