/*
 *   Copyright (c) 2023-2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

use crossterm::style::{Attribute, Color, ContentStyle};

/// Drawn in front of the highlighted entry, in [`StyleSheet::cursor_style`].
pub const CURSOR_MARKER: &str = "> ";
/// Drawn in front of every other entry, so all entries line up.
pub const NO_CURSOR_MARKER: &str = "  ";
/// Checkbox menus: the entry is checked.
pub const CHECKED_GLYPH: &str = "◉ ";
/// Checkbox menus: the entry is not checked.
pub const UNCHECKED_GLYPH: &str = "◯ ";

/// Colors used by the menus and by [`crate::prompt_text()`].
///
/// There are 2 built-in styles: [`StyleSheet::default()`] and
/// [`StyleSheet::monochrome()`]. To create your own, just fill in the fields:
///
/// ```
/// use climenu::StyleSheet;
/// use crossterm::style::{Color, ContentStyle};
///
/// let my_style = StyleSheet {
///     cursor_style: ContentStyle {
///         foreground_color: Some(Color::Magenta),
///         ..ContentStyle::default()
///     },
///     ..StyleSheet::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleSheet {
    /// The `> ` marker in front of the highlighted entry.
    pub cursor_style: ContentStyle,
    /// The prompt line of a menu, and the message of a text prompt.
    pub prompt_style: ContentStyle,
    /// The default value shown by a text prompt.
    pub default_value_style: ContentStyle,
}

impl Default for StyleSheet {
    fn default() -> Self {
        StyleSheet {
            cursor_style: ContentStyle {
                foreground_color: Some(Color::Cyan),
                ..ContentStyle::default()
            },
            prompt_style: ContentStyle {
                foreground_color: Some(Color::Green),
                attributes: Attribute::Bold.into(),
                ..ContentStyle::default()
            },
            default_value_style: ContentStyle {
                foreground_color: Some(Color::Yellow),
                ..ContentStyle::default()
            },
        }
    }
}

impl StyleSheet {
    /// No colors or attributes at all. Useful when the output is not a color terminal,
    /// and in tests, where the output is compared byte for byte.
    #[must_use]
    pub fn monochrome() -> Self {
        StyleSheet {
            cursor_style: ContentStyle::default(),
            prompt_style: ContentStyle::default(),
            default_value_style: ContentStyle::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monochrome_adds_no_escape_sequences() {
        let style = StyleSheet::monochrome();
        let text = style.cursor_style.apply(CURSOR_MARKER).to_string();
        assert_eq!(text, CURSOR_MARKER);
    }

    #[test]
    fn test_default_style_is_colored() {
        let style = StyleSheet::default();
        let text = style.cursor_style.apply(CURSOR_MARKER).to_string();
        assert!(text.contains('\x1b'));
        assert_eq!(
            strip_ansi_escapes::strip_str(&text),
            CURSOR_MARKER.to_string()
        );
    }

    #[test]
    fn test_glyphs_have_the_same_width() {
        assert_eq!(CURSOR_MARKER.chars().count(), NO_CURSOR_MARKER.chars().count());
        assert_eq!(CHECKED_GLYPH.chars().count(), UNCHECKED_GLYPH.chars().count());
    }
}
