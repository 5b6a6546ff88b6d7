// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors that can escape the public API. Note that a failure to *read* a key never
//! shows up here: the interaction loop turns it into [`crate::Outcome::Cancelled`].

use miette::Diagnostic;

#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum MenuError {
    /// `run()` was called on a menu with no entries.
    #[error("📭 Can't run a menu that has no entries")]
    #[diagnostic(
        code(climenu::menu::empty),
        help("Call `add_entry()` at least once before calling `run()`")
    )]
    EmptyMenu,

    #[error("🖨️ Could not write to the terminal")]
    #[diagnostic(code(climenu::terminal::output))]
    TerminalOutput(#[source] std::io::Error),

    #[error("⌨️ Could not read from the terminal")]
    #[diagnostic(code(climenu::terminal::input))]
    TerminalInput(#[source] std::io::Error),

    #[error("🔒 Could not change the terminal mode: {0}")]
    #[diagnostic(
        code(climenu::terminal::raw_mode),
        help("Raw mode needs an interactive terminal; is stdin redirected without a tty?")
    )]
    RawMode(String),

    #[error("📑 Could not create log file: '{path}'")]
    #[diagnostic(code(climenu::log::file))]
    LogFile { path: String },
}
