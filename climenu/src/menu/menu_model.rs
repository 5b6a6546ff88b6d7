// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The data behind a menu: its entries, where the cursor is, and (for checkbox menus)
//! which entries are checked. Nothing in here touches the terminal.

use std::{io::{self, Write},
          rc::Rc};

use smallvec::SmallVec;

use crate::StyleSheet;

/// Identifiers of the checked entries of a checkbox menu, in entry order.
pub type Identifiers = SmallVec<[String; 8]>;

/// Indentation added per nesting level by [`Menu::dump()`].
pub const DUMP_INDENT: &str = "  ";

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub enum MenuKind {
    /// Choose exactly one entry.
    #[default]
    Single,
    /// Check any number of entries, then confirm.
    Multi,
}

/// Per entry checked flags. Only checkbox menus carry these, so a single choice menu
/// can't end up with checked entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckedSet {
    flags: Vec<bool>,
}

impl CheckedSet {
    pub fn is_checked(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(false)
    }

    pub fn count(&self) -> usize { self.flags.iter().filter(|it| **it).count() }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuMode {
    Single,
    Multi(CheckedSet),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuEntry {
    /// Displayed to the user.
    pub text: String,
    /// Returned to the caller. Not required to be unique.
    pub id: String,
    sub_menu: Option<Rc<Menu>>,
}

impl MenuEntry {
    pub fn new(text: impl Into<String>, id: impl Into<String>) -> Self {
        MenuEntry {
            text: text.into(),
            id: id.into(),
            sub_menu: None,
        }
    }

    /// Attach a menu that belongs to this entry. It is only used by [`Menu::dump()`];
    /// choosing the entry does not open it.
    pub fn set_sub_menu(&mut self, sub_menu: Rc<Menu>) -> &mut Self {
        self.sub_menu = Some(sub_menu);
        self
    }

    pub fn sub_menu(&self) -> Option<&Rc<Menu>> { self.sub_menu.as_ref() }
}

/// An ordered list of entries plus a cursor.
///
/// - The cursor starts at the first entry and always stays in `0..len()` once there is
///   at least one entry. Moving past either end wraps around.
/// - Entries are only ever appended, so indices are stable.
#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    /// Printed on its own line above the prompt, unless it is empty.
    pub heading: String,
    /// Printed (followed by `:`) right above the entries.
    pub prompt: String,
    pub style: StyleSheet,
    entries: Vec<MenuEntry>,
    cursor_index: usize,
    mode: MenuMode,
}

impl Menu {
    pub fn new(heading: impl Into<String>, prompt: impl Into<String>, kind: MenuKind) -> Self {
        Menu {
            heading: heading.into(),
            prompt: prompt.into(),
            style: StyleSheet::default(),
            entries: Vec::new(),
            cursor_index: 0,
            mode: match kind {
                MenuKind::Single => MenuMode::Single,
                MenuKind::Multi => MenuMode::Multi(CheckedSet::default()),
            },
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: StyleSheet) -> Self {
        self.style = style;
        self
    }

    /// Append an entry. New entries of a checkbox menu start unchecked.
    pub fn add_entry(
        &mut self,
        text: impl Into<String>,
        id: impl Into<String>,
    ) -> &mut MenuEntry {
        if let MenuMode::Multi(checked) = &mut self.mode {
            checked.flags.push(false);
        }
        self.entries.push(MenuEntry::new(text, id));
        let last_index = self.entries.len() - 1;
        &mut self.entries[last_index]
    }

    pub fn entries(&self) -> &[MenuEntry] { &self.entries }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn cursor_index(&self) -> usize { self.cursor_index }

    pub fn mode(&self) -> &MenuMode { &self.mode }

    pub fn kind(&self) -> MenuKind {
        match self.mode {
            MenuMode::Single => MenuKind::Single,
            MenuMode::Multi(_) => MenuKind::Multi,
        }
    }

    /// Always `false` for a single choice menu.
    pub fn is_checked(&self, index: usize) -> bool {
        match &self.mode {
            MenuMode::Single => false,
            MenuMode::Multi(checked) => checked.is_checked(index),
        }
    }

    /// Flip the checked flag of the entry at `index`, and return its new value. Returns
    /// `None` (and changes nothing) for a single choice menu or an index out of range.
    pub fn toggle_checked(&mut self, index: usize) -> Option<bool> {
        match &mut self.mode {
            MenuMode::Single => None,
            MenuMode::Multi(checked) => {
                let flag = checked.flags.get_mut(index)?;
                *flag = !*flag;
                Some(*flag)
            }
        }
    }

    /// Move the cursor by `delta` entries, wrapping around at both ends. Does nothing
    /// when there are no entries.
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn move_cursor(&mut self, delta: isize) {
        if self.entries.is_empty() {
            return;
        }
        let len = self.entries.len() as isize;
        self.cursor_index = (self.cursor_index as isize + delta).rem_euclid(len) as usize;
    }

    /// Put the cursor on the entry at `index`. Returns `false` (and leaves the cursor
    /// where it is) if there is no such entry.
    pub fn set_cursor(&mut self, index: usize) -> bool {
        if index >= self.entries.len() {
            return false;
        }
        self.cursor_index = index;
        true
    }

    /// Identifier of the entry under the cursor.
    pub fn current_identifier(&self) -> Option<&str> {
        self.entries
            .get(self.cursor_index)
            .map(|entry| entry.id.as_str())
    }

    /// Identifiers of the checked entries in entry order. Empty for a single choice
    /// menu.
    pub fn checked_identifiers(&self) -> Identifiers {
        self.entries
            .iter()
            .enumerate()
            .filter(|(index, _)| self.is_checked(*index))
            .map(|(_, entry)| entry.id.clone())
            .collect()
    }

    /// Write a plain text outline of this menu and its sub menus, eg:
    ///
    /// ```text
    /// Menu: Choose an action
    ///       1: Create entry
    ///       2: Edit entry
    ///   Menu: Pick a field
    ///         1: Title
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn dump(&self, writer: &mut impl Write) -> io::Result<()> {
        self.dump_indent(writer, 0)
    }

    fn dump_indent(&self, writer: &mut impl Write, depth: usize) -> io::Result<()> {
        let indent = DUMP_INDENT.repeat(depth);
        writeln!(writer, "{indent}Menu: {}", self.prompt)?;
        for (index, entry) in self.entries.iter().enumerate() {
            writeln!(writer, "{indent}      {}: {}", index + 1, entry.text)?;
            if let Some(sub_menu) = &entry.sub_menu {
                sub_menu.dump_indent(writer, depth + 1)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn menu_with(kind: MenuKind, len: usize) -> Menu {
        let mut menu = Menu::new("", "Pick", kind);
        for index in 0..len {
            menu.add_entry(format!("Entry {index}"), format!("id{index}"));
        }
        menu
    }

    #[test]
    fn test_new_menu_is_empty_with_cursor_at_zero() {
        let menu = Menu::new("Heading", "Pick", MenuKind::Single);
        assert!(menu.is_empty());
        assert_eq!(menu.cursor_index(), 0);
        assert_eq!(menu.current_identifier(), None);
    }

    #[test]
    fn test_add_entry_keeps_order_and_allows_duplicate_ids() {
        let mut menu = Menu::new("", "Pick", MenuKind::Single);
        menu.add_entry("A", "same");
        menu.add_entry("B", "same");
        let texts: Vec<_> = menu.entries().iter().map(|it| it.text.as_str()).collect();
        assert_eq!(texts, vec!["A", "B"]);
        assert_eq!(menu.entries()[1].id, "same");
    }

    #[test_case(1 ; "one entry")]
    #[test_case(2 ; "two entries")]
    #[test_case(3 ; "three entries")]
    #[test_case(9 ; "nine entries")]
    fn test_move_cursor_wraps_in_both_directions(len: usize) {
        let mut menu = menu_with(MenuKind::Single, len);
        for start in 0..len {
            assert!(menu.set_cursor(start));
            menu.move_cursor(1);
            assert_eq!(menu.cursor_index(), (start + 1) % len);

            assert!(menu.set_cursor(start));
            menu.move_cursor(-1);
            assert_eq!(menu.cursor_index(), (start + len - 1) % len);
        }
    }

    #[test_case(1, 1 ; "one entry down")]
    #[test_case(1, -1 ; "one entry up")]
    #[test_case(2, 1 ; "two entries down")]
    #[test_case(2, -1 ; "two entries up")]
    #[test_case(5, 1 ; "five entries down")]
    #[test_case(5, -1 ; "five entries up")]
    #[test_case(9, 1 ; "nine entries down")]
    #[test_case(9, -1 ; "nine entries up")]
    fn test_move_cursor_len_times_is_identity(len: usize, delta: isize) {
        let mut menu = menu_with(MenuKind::Single, len);
        for start in 0..len {
            assert!(menu.set_cursor(start));
            for _ in 0..len {
                menu.move_cursor(delta);
            }
            assert_eq!(menu.cursor_index(), start);
        }
    }

    #[test]
    fn test_move_cursor_on_empty_menu_does_nothing() {
        let mut menu = menu_with(MenuKind::Single, 0);
        menu.move_cursor(-1);
        assert_eq!(menu.cursor_index(), 0);
    }

    #[test]
    fn test_set_cursor_out_of_range_is_rejected() {
        let mut menu = menu_with(MenuKind::Single, 2);
        menu.set_cursor(1);
        assert!(!menu.set_cursor(2));
        assert_eq!(menu.cursor_index(), 1);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut menu = menu_with(MenuKind::Multi, 3);
        assert_eq!(menu.toggle_checked(1), Some(true));
        assert!(menu.is_checked(1));
        assert_eq!(menu.toggle_checked(1), Some(false));
        assert!(!menu.is_checked(1));
        assert!(menu.checked_identifiers().is_empty());
    }

    #[test]
    fn test_toggle_is_ignored_by_single_choice_menu() {
        let mut menu = menu_with(MenuKind::Single, 3);
        assert_eq!(menu.toggle_checked(0), None);
        assert!(!menu.is_checked(0));
    }

    #[test]
    fn test_toggle_out_of_range() {
        let mut menu = menu_with(MenuKind::Multi, 1);
        assert_eq!(menu.toggle_checked(5), None);
    }

    #[test]
    fn test_checked_identifiers_follow_entry_order() {
        let mut menu = menu_with(MenuKind::Multi, 4);
        menu.toggle_checked(3);
        menu.toggle_checked(0);
        menu.toggle_checked(2);
        assert_eq!(menu.checked_identifiers().as_slice(), &["id0", "id2", "id3"]);
        let MenuMode::Multi(checked) = menu.mode() else {
            panic!("expected a checkbox menu");
        };
        assert_eq!(checked.count(), 3);
    }

    #[test]
    fn test_dump_includes_sub_menus() {
        let mut fields = Menu::new("", "Pick a field", MenuKind::Single);
        fields.add_entry("Title", "title");

        let mut menu = Menu::new("Welcome", "Choose an action", MenuKind::Single);
        menu.add_entry("Create entry", "create");
        menu.add_entry("Edit entry", "edit")
            .set_sub_menu(Rc::new(fields));

        let mut buffer = Vec::new();
        menu.dump(&mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Menu: Choose an action\n      1: Create entry\n      2: Edit entry\n  Menu: Pick a field\n        1: Title\n"
        );
        assert!(menu.entries()[1].sub_menu().is_some());
        assert!(menu.entries()[0].sub_menu().is_none());
    }
}
