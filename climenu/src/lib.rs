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

//! # climenu
//!
//! `climenu` allows you to add simple interactivity to your CLI app. It is not a full
//! TUI. It prints a block of one-line entries below the current cursor position, lets
//! the user move a marker with the arrow keys, and returns the identifier(s) of what was
//! chosen. The block is redrawn in place, so the screen never scrolls while the user is
//! choosing.
//!
//! There are two kinds of menus:
//!
//! 1. [`ButtonMenu`]: pick exactly one entry. `Enter` picks the highlighted entry, and
//!    the digits `1` to `9` pick an entry directly.
//! 2. [`CheckboxMenu`]: toggle any number of entries with `Space`, then confirm with
//!    `Enter`. The result is the identifiers of the checked entries, in the order they
//!    were added.
//!
//! `Esc` and `Ctrl+C` cancel either kind of menu. Cancellation is a normal outcome
//! ([`Outcome::Cancelled`]), not an error.
//!
//! There's also [`prompt_text()`] which asks for a line of text and falls back to a
//! default value when the user just presses `Enter`.
//!
//! # How to use it as a library?
//!
//! ```no_run
//! use climenu::{ButtonMenu, CheckboxMenu, Outcome, prompt_text};
//!
//! fn main() -> miette::Result<()> {
//!     let mut menu = ButtonMenu::new("Welcome", "Choose an action");
//!     menu.add_entry("Create entry", "create");
//!     menu.add_entry("Edit entry", "edit");
//!
//!     let Outcome::Chosen(action) = menu.run()? else {
//!         return Ok(());
//!     };
//!     println!("action > {action}");
//!
//!     let mut checkbox = CheckboxMenu::new("Let's try some checkboxes", "Select options");
//!     checkbox.add_entry("Apples", "apples");
//!     checkbox.add_entry("Oranges", "oranges");
//!
//!     if let Outcome::Chosen(selection) = checkbox.run()? {
//!         println!("selected > {selection:?}");
//!     }
//!
//!     let response = prompt_text("Say something interesting", "hi")?;
//!     println!("text > {response:?}");
//!
//!     Ok(())
//! }
//! ```
//!
//! # How does it work?
//!
//! Each keypress is read from the controlling terminal (`/dev/tty` on Unix) while the
//! terminal is in raw mode. Raw mode is held only for the duration of a single read, and
//! is released by a guard ([`RawModeGuard`]) so the terminal is always returned to
//! cooked mode. See [`TtyKeyPressReader`] and [`decode_key_bytes()`].
//!
//! The decoded keys drive the state machine in [`enter_event_loop()`], which uses the
//! [`keypress_handler()`] transition function and the renderer functions
//! ([`render_initial()`], [`render_entries()`]) to draw the menu.
//!
//! # References
//!
//! ANSI escape codes:
//!
//! - [ANSI Escape Codes Notes](https://notes.burke.libbey.me/ansi-escape-codes/)
//! - [ANSI Escape Code - Wikipedia](https://en.wikipedia.org/wiki/ANSI_escape_code)
//! - [ASCII Table](https://www.asciitable.com/)

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]
#![warn(rust_2018_idioms)]

// Attach sources.
pub mod error;
pub mod keypress;
pub mod log_support;
pub mod menu;
pub mod prompt_text;
pub mod terminal_raw_mode;
pub mod test_fixtures;

// Re-export.
pub use error::*;
pub use keypress::*;
pub use log_support::*;
pub use menu::*;
pub use prompt_text::*;
pub use terminal_raw_mode::*;
pub use test_fixtures::*;
