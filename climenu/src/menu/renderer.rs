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

//! Draw a [`Menu`] on any [`Write`] output device.
//!
//! The first frame is drawn below whatever is already on screen:
//!
//! ```text
//! Welcome               <- heading (skipped when empty)
//! Choose an action:     <- prompt
//! > 1: Create entry     <- entries, the last one has no trailing newline
//!   2: Edit entry
//! ```
//!
//! After that, the terminal cursor sits at the end of the last entry. Every later frame
//! moves it up to the first entry and overwrites the entry lines. Every entry line starts
//! with `\r` and all the markers and glyphs have the same width, so no clearing is
//! needed and the screen never scrolls.

use std::{io::Write,
          ops::{Deref, DerefMut}};

use crossterm::{cursor::{Hide, MoveUp, Show},
                style::{Print, PrintStyledContent}};

use crate::{CHECKED_GLYPH, CURSOR_MARKER, Menu, MenuMode, NO_CURSOR_MARKER,
            UNCHECKED_GLYPH, execute_commands, queue_commands};

/// Draw the first frame (heading, prompt, and all entries), then hide the cursor.
///
/// # Errors
///
/// Returns an error if the output device can't be written to.
pub fn render_initial(menu: &Menu, output: &mut impl Write) -> miette::Result<()> {
    if !menu.heading.is_empty() {
        queue_commands!(output, Print(&menu.heading), Print("\n"));
    }
    queue_commands!(
        output,
        PrintStyledContent(menu.style.prompt_style.apply(format!("{}:", menu.prompt))),
        Print("\n"),
    );
    queue_entries(menu, output, false)?;
    execute_commands!(output, Hide);
    Ok(())
}

/// Draw the entry lines. When `reposition` is `true` the terminal cursor is first moved
/// up to the line of the first entry, so the previous frame is overwritten.
///
/// # Errors
///
/// Returns an error if the output device can't be written to.
pub fn render_entries(
    menu: &Menu,
    output: &mut impl Write,
    reposition: bool,
) -> miette::Result<()> {
    queue_entries(menu, output, reposition)?;
    execute_commands!(output);
    Ok(())
}

fn queue_entries(
    menu: &Menu,
    output: &mut impl Write,
    reposition: bool,
) -> miette::Result<()> {
    let lines_above = menu.len().saturating_sub(1);
    // `MoveUp(0)` still moves up by one line on most terminals.
    if reposition && lines_above > 0 {
        let lines_above = u16::try_from(lines_above).unwrap_or(u16::MAX);
        queue_commands!(output, MoveUp(lines_above));
    }

    for (index, entry) in menu.entries().iter().enumerate() {
        queue_commands!(output, Print("\r"));
        if index == menu.cursor_index() {
            queue_commands!(
                output,
                PrintStyledContent(menu.style.cursor_style.apply(CURSOR_MARKER))
            );
        } else {
            queue_commands!(output, Print(NO_CURSOR_MARKER));
        }
        queue_commands!(
            output,
            Print(entry_prefix(menu, index)),
            Print(" "),
            Print(&entry.text),
        );
        if index < lines_above {
            queue_commands!(output, Print("\n"));
        }
    }

    Ok(())
}

/// `"N: "` (1 based) for a single choice menu, or a checkbox glyph for a checkbox menu.
pub fn entry_prefix(menu: &Menu, index: usize) -> String {
    match menu.mode() {
        MenuMode::Single => format!("{}: ", index + 1),
        MenuMode::Multi(checked) => {
            if checked.is_checked(index) {
                CHECKED_GLYPH.to_string()
            } else {
                UNCHECKED_GLYPH.to_string()
            }
        }
    }
}

/// Shows the terminal cursor again when dropped, no matter how the interaction ended.
/// Derefs to the wrapped output device.
#[derive(Debug)]
pub struct ShowCursorOnDrop<'a, W: Write> {
    output: &'a mut W,
}

impl<'a, W: Write> ShowCursorOnDrop<'a, W> {
    pub fn new(output: &'a mut W) -> Self { ShowCursorOnDrop { output } }
}

impl<W: Write> Deref for ShowCursorOnDrop<'_, W> {
    type Target = W;

    fn deref(&self) -> &Self::Target { self.output }
}

impl<W: Write> DerefMut for ShowCursorOnDrop<'_, W> {
    fn deref_mut(&mut self) -> &mut Self::Target { self.output }
}

impl<W: Write> Drop for ShowCursorOnDrop<'_, W> {
    fn drop(&mut self) {
        let result = crossterm::QueueableCommand::queue(&mut *self.output, Show)
            .and_then(Write::flush);
        if let Err(error) = result {
            // % is Display, ? is Debug.
            tracing::error!(message = "could not show the cursor", error = %error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MenuKind, StyleSheet, TestStringWriter};
    use pretty_assertions::assert_eq;

    fn create_menu() -> Menu {
        let mut menu = Menu::new("Welcome", "Choose an action", MenuKind::Single)
            .with_style(StyleSheet::monochrome());
        menu.add_entry("Create entry", "create");
        menu.add_entry("Edit entry", "edit");
        menu
    }

    #[test]
    fn test_render_initial_single_choice() {
        let menu = create_menu();
        let mut writer = TestStringWriter::new();
        render_initial(&menu, &mut writer).unwrap();
        assert_eq!(
            writer.get_buffer(),
            "Welcome\nChoose an action:\n\r> 1:  Create entry\n\r  2:  Edit entry\x1b[?25l"
        );
    }

    #[test]
    fn test_render_initial_skips_empty_heading() {
        let mut menu = Menu::new("", "Pick", MenuKind::Single)
            .with_style(StyleSheet::monochrome());
        menu.add_entry("Only", "only");
        let mut writer = TestStringWriter::new();
        render_initial(&menu, &mut writer).unwrap();
        assert_eq!(writer.get_buffer(), "Pick:\n\r> 1:  Only\x1b[?25l");
    }

    #[test]
    fn test_render_entries_repositions_to_first_entry() {
        let mut menu = create_menu();
        menu.move_cursor(1);
        let mut writer = TestStringWriter::new();
        render_entries(&menu, &mut writer, true).unwrap();
        assert_eq!(
            writer.get_buffer(),
            "\x1b[1A\r  1:  Create entry\n\r> 2:  Edit entry"
        );
    }

    #[test]
    fn test_render_entries_single_entry_does_not_move_up() {
        let mut menu = Menu::new("", "Pick", MenuKind::Single)
            .with_style(StyleSheet::monochrome());
        menu.add_entry("Only", "only");
        let mut writer = TestStringWriter::new();
        render_entries(&menu, &mut writer, true).unwrap();
        assert_eq!(writer.get_buffer(), "\r> 1:  Only");
    }

    #[test]
    fn test_render_checkbox_glyphs() {
        let mut menu = Menu::new("", "Select options", MenuKind::Multi)
            .with_style(StyleSheet::monochrome());
        menu.add_entry("Apples", "apples");
        menu.add_entry("Oranges", "oranges");
        menu.add_entry("Bananas", "bananas");
        menu.toggle_checked(1);
        let mut writer = TestStringWriter::new();
        render_entries(&menu, &mut writer, true).unwrap();
        assert_eq!(
            writer.get_buffer(),
            "\x1b[2A\r> ◯  Apples\n\r  ◉  Oranges\n\r  ◯  Bananas"
        );
    }

    #[test]
    fn test_colored_cursor_marker() {
        let menu = create_menu().with_style(StyleSheet::default());
        let mut writer = TestStringWriter::new();
        render_entries(&menu, &mut writer, false).unwrap();
        let raw = writer.get_buffer();
        assert!(raw.contains("\x1b[38;5;14m") || raw.contains("\x1b[36m"));
        // Every entry line still starts with a carriage return.
        assert!(raw.starts_with('\r'));
        assert!(raw.contains("\n\r  2:  Edit entry"));
        // Stripping the escapes also drops `\r`, leaving only the visible text.
        assert_eq!(
            strip_ansi_escapes::strip_str(raw),
            "> 1:  Create entry\n  2:  Edit entry"
        );
    }

    #[test]
    fn test_show_cursor_on_drop() {
        let mut writer = TestStringWriter::new();
        {
            let mut guard = ShowCursorOnDrop::new(&mut writer);
            guard.write_all(b"x").unwrap();
        }
        assert_eq!(writer.get_buffer(), "x\x1b[?25h");
    }
}
