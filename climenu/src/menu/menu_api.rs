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

use std::io::{self, Write};

use crate::{Identifiers, KeyPressReader, Menu, MenuEntry, MenuKind, StyleSheet,
            TtyKeyPressReader, enter_event_loop};

/// How an interaction ended. Cancelling is an expected outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Chosen(T),
    Cancelled,
}

impl<T> Outcome<T> {
    pub fn is_cancelled(&self) -> bool { matches!(self, Outcome::Cancelled) }

    pub fn chosen(self) -> Option<T> {
        match self {
            Outcome::Chosen(it) => Some(it),
            Outcome::Cancelled => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Chosen(it) => Outcome::Chosen(f(it)),
            Outcome::Cancelled => Outcome::Cancelled,
        }
    }
}

/// What the user confirmed. The variant always matches the [`MenuKind`] of the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The identifier of the chosen entry.
    Single(String),
    /// The identifiers of the checked entries, in entry order. May be empty.
    Multi(Identifiers),
}

impl Selection {
    pub fn into_identifiers(self) -> Identifiers {
        match self {
            Selection::Single(id) => Identifiers::from_iter([id]),
            Selection::Multi(ids) => ids,
        }
    }
}

impl Menu {
    /// Draw the menu on stdout and read keys from the terminal until the user confirms
    /// or cancels.
    ///
    /// # Errors
    ///
    /// See [`enter_event_loop()`].
    pub fn run(&mut self) -> miette::Result<Outcome<Selection>> {
        let stdout = io::stdout();
        let mut output = stdout.lock();
        self.run_with(&mut output, &mut TtyKeyPressReader)
    }

    /// Same as [`Menu::run()`], with the output device and the source of keys supplied
    /// by the caller.
    ///
    /// # Errors
    ///
    /// See [`enter_event_loop()`].
    pub fn run_with(
        &mut self,
        output: &mut impl Write,
        key_press_reader: &mut impl KeyPressReader,
    ) -> miette::Result<Outcome<Selection>> {
        enter_event_loop(self, output, key_press_reader)
    }
}

/// A menu where exactly one entry is chosen. Running it returns the identifier of that
/// entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonMenu {
    menu: Menu,
}

impl ButtonMenu {
    pub fn new(heading: impl Into<String>, prompt: impl Into<String>) -> Self {
        ButtonMenu {
            menu: Menu::new(heading, prompt, MenuKind::Single),
        }
    }

    #[must_use]
    pub fn with_style(self, style: StyleSheet) -> Self {
        ButtonMenu {
            menu: self.menu.with_style(style),
        }
    }

    pub fn add_entry(
        &mut self,
        text: impl Into<String>,
        id: impl Into<String>,
    ) -> &mut MenuEntry {
        self.menu.add_entry(text, id)
    }

    pub fn menu(&self) -> &Menu { &self.menu }

    /// # Errors
    ///
    /// See [`enter_event_loop()`].
    pub fn run(&mut self) -> miette::Result<Outcome<String>> {
        Ok(self.menu.run()?.map(into_single_identifier))
    }

    /// # Errors
    ///
    /// See [`enter_event_loop()`].
    pub fn run_with(
        &mut self,
        output: &mut impl Write,
        key_press_reader: &mut impl KeyPressReader,
    ) -> miette::Result<Outcome<String>> {
        Ok(self
            .menu
            .run_with(output, key_press_reader)?
            .map(into_single_identifier))
    }
}

fn into_single_identifier(selection: Selection) -> String {
    match selection {
        Selection::Single(id) => id,
        Selection::Multi(ids) => ids.into_iter().next().unwrap_or_default(),
    }
}

/// A menu where any number of entries are checked with `Space` and then confirmed with
/// `Enter`. Running it returns the identifiers of the checked entries.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckboxMenu {
    menu: Menu,
}

impl CheckboxMenu {
    pub fn new(heading: impl Into<String>, prompt: impl Into<String>) -> Self {
        CheckboxMenu {
            menu: Menu::new(heading, prompt, MenuKind::Multi),
        }
    }

    #[must_use]
    pub fn with_style(self, style: StyleSheet) -> Self {
        CheckboxMenu {
            menu: self.menu.with_style(style),
        }
    }

    pub fn add_entry(
        &mut self,
        text: impl Into<String>,
        id: impl Into<String>,
    ) -> &mut MenuEntry {
        self.menu.add_entry(text, id)
    }

    pub fn menu(&self) -> &Menu { &self.menu }

    /// # Errors
    ///
    /// See [`enter_event_loop()`].
    pub fn run(&mut self) -> miette::Result<Outcome<Identifiers>> {
        Ok(self.menu.run()?.map(Selection::into_identifiers))
    }

    /// # Errors
    ///
    /// See [`enter_event_loop()`].
    pub fn run_with(
        &mut self,
        output: &mut impl Write,
        key_press_reader: &mut impl KeyPressReader,
    ) -> miette::Result<Outcome<Identifiers>> {
        Ok(self
            .menu
            .run_with(output, key_press_reader)?
            .map(Selection::into_identifiers))
    }
}
