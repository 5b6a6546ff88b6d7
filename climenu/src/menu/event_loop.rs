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

use std::io::Write;

use crossterm::style::Print;

use crate::{ANSI_ESC, ASCII_CR, ASCII_CTRL_C, ASCII_SPACE, DecodedKey, KeyPressReader,
            Menu, MenuError, MenuKind, NavKey, Outcome, Selection, ShowCursorOnDrop,
            execute_commands, render_entries, render_initial};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventLoopResult {
    Continue,
    ContinueAndRerender,
    ExitWithResult(Selection),
    RerenderAndExitWithResult(Selection),
    ExitWithoutResult,
}

/// Draw the menu, then feed keypresses from `key_press_reader` through
/// [`keypress_handler()`] until the user confirms or cancels.
///
/// No matter how the loop ends, the terminal cursor is shown again and a newline is
/// printed, so that whatever the caller prints next starts on a fresh line below the
/// menu.
///
/// # Errors
///
/// - [`MenuError::EmptyMenu`] if the menu has no entries. Nothing is drawn in this case.
/// - [`MenuError::TerminalOutput`] if `output` can't be written to.
///
/// A key that can't be read is not an error; it cancels the menu.
pub fn enter_event_loop<W: Write>(
    menu: &mut Menu,
    output: &mut W,
    key_press_reader: &mut impl KeyPressReader,
) -> miette::Result<Outcome<Selection>> {
    if menu.is_empty() {
        return Err(MenuError::EmptyMenu.into());
    }

    let mut output = ShowCursorOnDrop::new(output);

    // First render before blocking the main thread for user input.
    render_initial(menu, &mut *output)?;

    let return_this = loop {
        let key = key_press_reader.read_key_press();
        let event_loop_result = keypress_handler(menu, key);

        // % is Display, ? is Debug.
        tracing::debug!(
            message = "enter_event_loop()",
            key = ?key,
            cursor_index = %menu.cursor_index(),
            event_loop_result = ?event_loop_result
        );

        match event_loop_result {
            EventLoopResult::Continue => {}
            EventLoopResult::ContinueAndRerender => {
                render_entries(menu, &mut *output, true)?;
            }
            EventLoopResult::RerenderAndExitWithResult(it) => {
                render_entries(menu, &mut *output, true)?;
                break Outcome::Chosen(it);
            }
            EventLoopResult::ExitWithResult(it) => break Outcome::Chosen(it),
            EventLoopResult::ExitWithoutResult => break Outcome::Cancelled,
        }
    };

    execute_commands!(&mut *output, Print("\n"));

    Ok(return_this)
}

/// The transition function of the interaction loop. The first matching row wins:
///
/// | Key                        | Effect                                 | Result        |
/// |:---------------------------|:---------------------------------------|:--------------|
/// | read error                 |                                        | cancel        |
/// | `Ctrl+C` or `Esc`          |                                        | cancel        |
/// | `Enter`                    |                                        | confirm       |
/// | `Space` (checkbox menu)    | toggle the entry under the cursor      | redraw        |
/// | `1`..=`9` (entry exists)   | move the cursor to that entry          | redraw, pick  |
/// | `Down`                     | cursor to next entry (wraps)           | redraw        |
/// | `Up`                       | cursor to previous entry (wraps)       | redraw        |
/// | anything else              |                                        | ignore        |
///
/// Confirming yields the identifier under the cursor for a single choice menu, and the
/// identifiers of all checked entries for a checkbox menu. A digit picks the entry in
/// both kinds of menus, since the key is an explicit choice.
pub fn keypress_handler(menu: &mut Menu, key: DecodedKey) -> EventLoopResult {
    match key {
        DecodedKey::ReadError | DecodedKey::Char(ASCII_CTRL_C | ANSI_ESC) => {
            EventLoopResult::ExitWithoutResult
        }

        // Enter.
        DecodedKey::Char(ASCII_CR) => EventLoopResult::ExitWithResult(current_selection(menu)),

        // Space.
        DecodedKey::Char(ASCII_SPACE) => match menu.kind() {
            MenuKind::Multi => {
                let toggled = menu.toggle_checked(menu.cursor_index());
                tracing::debug!(message = "Space", toggled = ?toggled);
                EventLoopResult::ContinueAndRerender
            }
            MenuKind::Single => EventLoopResult::Continue,
        },

        // Shortcut digits.
        DecodedKey::Char(digit @ b'1'..=b'9') => {
            if menu.set_cursor(usize::from(digit - b'1')) {
                EventLoopResult::RerenderAndExitWithResult(current_selection(menu))
            } else {
                EventLoopResult::Continue
            }
        }

        DecodedKey::NavKey(NavKey::Down) => {
            menu.move_cursor(1);
            EventLoopResult::ContinueAndRerender
        }

        DecodedKey::NavKey(NavKey::Up) => {
            menu.move_cursor(-1);
            EventLoopResult::ContinueAndRerender
        }

        DecodedKey::NavKey(NavKey::Left | NavKey::Right) | DecodedKey::Char(_) => {
            EventLoopResult::Continue
        }
    }
}

fn current_selection(menu: &Menu) -> Selection {
    match menu.kind() {
        MenuKind::Single => {
            Selection::Single(menu.current_identifier().unwrap_or_default().to_string())
        }
        MenuKind::Multi => Selection::Multi(menu.checked_identifiers()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{StyleSheet, TestStringWriter, TestVecKeyPressReader};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn create_menu(kind: MenuKind) -> Menu {
        let mut menu =
            Menu::new("", "Pick", kind).with_style(StyleSheet::monochrome());
        menu.add_entry("Create entry", "create");
        menu.add_entry("Edit entry", "edit");
        menu.add_entry("Delete entry", "delete");
        menu
    }

    #[test_case(DecodedKey::ReadError ; "read error")]
    #[test_case(DecodedKey::Char(ASCII_CTRL_C) ; "ctrl c")]
    #[test_case(DecodedKey::Char(ANSI_ESC) ; "escape")]
    fn test_cancel_keys(key: DecodedKey) {
        for kind in [MenuKind::Single, MenuKind::Multi] {
            let mut menu = create_menu(kind);
            assert_eq!(
                keypress_handler(&mut menu, key),
                EventLoopResult::ExitWithoutResult
            );
        }
    }

    #[test]
    fn test_enter_single() {
        let mut menu = create_menu(MenuKind::Single);
        menu.move_cursor(1);
        assert_eq!(
            keypress_handler(&mut menu, DecodedKey::Char(ASCII_CR)),
            EventLoopResult::ExitWithResult(Selection::Single("edit".into()))
        );
    }

    #[test]
    fn test_enter_multi_with_nothing_checked() {
        let mut menu = create_menu(MenuKind::Multi);
        assert_eq!(
            keypress_handler(&mut menu, DecodedKey::Char(ASCII_CR)),
            EventLoopResult::ExitWithResult(Selection::Multi(Default::default()))
        );
    }

    #[test]
    fn test_space_toggles_only_in_multi() {
        let mut menu = create_menu(MenuKind::Multi);
        assert_eq!(
            keypress_handler(&mut menu, DecodedKey::Char(ASCII_SPACE)),
            EventLoopResult::ContinueAndRerender
        );
        assert!(menu.is_checked(0));

        let mut menu = create_menu(MenuKind::Single);
        assert_eq!(
            keypress_handler(&mut menu, DecodedKey::Char(ASCII_SPACE)),
            EventLoopResult::Continue
        );
        assert!(!menu.is_checked(0));
    }

    #[test]
    fn test_digit_picks_entry() {
        let mut menu = create_menu(MenuKind::Single);
        assert_eq!(
            keypress_handler(&mut menu, DecodedKey::Char(b'3')),
            EventLoopResult::RerenderAndExitWithResult(Selection::Single("delete".into()))
        );
        assert_eq!(menu.cursor_index(), 2);
    }

    #[test]
    fn test_digit_in_multi_confirms_checked_set() {
        let mut menu = create_menu(MenuKind::Multi);
        menu.toggle_checked(0);
        let result = keypress_handler(&mut menu, DecodedKey::Char(b'2'));
        let EventLoopResult::RerenderAndExitWithResult(Selection::Multi(ids)) = result
        else {
            panic!("unexpected result: {result:?}");
        };
        assert_eq!(ids.as_slice(), &["create"]);
        assert_eq!(menu.cursor_index(), 1);
    }

    #[test_case(b'0' ; "zero")]
    #[test_case(b'4' ; "past the last entry")]
    #[test_case(b'9' ; "nine")]
    fn test_digit_out_of_range_is_ignored(digit: u8) {
        let mut menu = create_menu(MenuKind::Single);
        assert_eq!(
            keypress_handler(&mut menu, DecodedKey::Char(digit)),
            EventLoopResult::Continue
        );
        assert_eq!(menu.cursor_index(), 0);
    }

    #[test_case(DecodedKey::NavKey(NavKey::Left) ; "left")]
    #[test_case(DecodedKey::NavKey(NavKey::Right) ; "right")]
    #[test_case(DecodedKey::Char(b'q') ; "letter")]
    fn test_other_keys_are_ignored(key: DecodedKey) {
        let mut menu = create_menu(MenuKind::Single);
        assert_eq!(keypress_handler(&mut menu, key), EventLoopResult::Continue);
        assert_eq!(menu.cursor_index(), 0);
    }

    #[test]
    fn test_up_from_first_entry_wraps_to_last() {
        let mut menu = create_menu(MenuKind::Single);
        assert_eq!(
            keypress_handler(&mut menu, DecodedKey::NavKey(NavKey::Up)),
            EventLoopResult::ContinueAndRerender
        );
        assert_eq!(menu.cursor_index(), 2);
    }

    #[test]
    fn test_event_loop_empty_menu_draws_nothing() {
        let mut menu = Menu::new("", "Pick", MenuKind::Single);
        let mut writer = TestStringWriter::new();
        let mut reader = TestVecKeyPressReader::new(vec![]);
        let report = enter_event_loop(&mut menu, &mut writer, &mut reader).unwrap_err();
        assert!(matches!(
            report.downcast_ref::<MenuError>(),
            Some(MenuError::EmptyMenu)
        ));
        assert_eq!(writer.get_buffer(), "");
    }

    #[test]
    fn test_event_loop_redraws_and_restores_cursor() {
        let mut menu = create_menu(MenuKind::Single);
        let mut writer = TestStringWriter::new();
        let mut reader = TestVecKeyPressReader::new(vec![
            DecodedKey::NavKey(NavKey::Down),
            DecodedKey::Char(ASCII_CR),
        ]);
        let outcome = enter_event_loop(&mut menu, &mut writer, &mut reader).unwrap();
        assert_eq!(outcome, Outcome::Chosen(Selection::Single("edit".into())));
        assert_eq!(
            writer.get_buffer(),
            "Pick:\n\
             \r> 1:  Create entry\n\r  2:  Edit entry\n\r  3:  Delete entry\x1b[?25l\
             \x1b[2A\r  1:  Create entry\n\r> 2:  Edit entry\n\r  3:  Delete entry\
             \n\x1b[?25h"
        );
    }
}
