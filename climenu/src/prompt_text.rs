// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Ask for one line of text, with a default value.
//!
//! The question is printed like this (the default is left out when it is empty), and
//! the answer is typed on the same line:
//!
//! ```text
//! Say something interesting [hi]: _
//! ```
//!
//! Input is read in cooked mode, so the terminal's own line editing works.

use std::io::{self, BufRead, Write};

use crossterm::style::{Print, PrintStyledContent};

use crate::{MenuError, StyleSheet, execute_commands, queue_commands};

/// Prompt on stdout and read the answer from stdin, using [`StyleSheet::default()`].
///
/// Returns `default` if the user just presses `Enter`, or if stdin is at end of file.
///
/// # Errors
///
/// Returns an error if stdout can't be written to, or stdin can't be read.
pub fn prompt_text(message: &str, default: &str) -> miette::Result<String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    prompt_text_with(
        &mut stdin.lock(),
        &mut stdout.lock(),
        StyleSheet::default(),
        message,
        default,
    )
}

/// Same as [`prompt_text()`], with the devices and the style supplied by the caller.
///
/// # Errors
///
/// Returns an error if `output` can't be written to, or `input` can't be read.
pub fn prompt_text_with(
    input: &mut impl BufRead,
    output: &mut impl Write,
    style: StyleSheet,
    message: &str,
    default: &str,
) -> miette::Result<String> {
    queue_commands!(output, PrintStyledContent(style.prompt_style.apply(message)));
    if !default.is_empty() {
        queue_commands!(
            output,
            PrintStyledContent(style.prompt_style.apply(" [")),
            PrintStyledContent(style.default_value_style.apply(default)),
            PrintStyledContent(style.prompt_style.apply("]")),
        );
    }
    execute_commands!(
        output,
        PrintStyledContent(style.prompt_style.apply(":")),
        Print(" ")
    );

    let mut line = String::new();
    let bytes_read = input
        .read_line(&mut line)
        .map_err(MenuError::TerminalInput)?;

    let answer = strip_line_ending(&line);

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "prompt_text()",
        bytes_read = %bytes_read,
        answer = ?answer
    );

    if answer.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(answer.to_string())
    }
}

/// Remove one trailing `\n` or `\r\n`. Other whitespace is part of the answer.
fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
