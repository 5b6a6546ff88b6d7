// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Windows implementation of raw mode using Crossterm.
//!
//! On Windows, we delegate to Crossterm's raw mode implementation which handles the
//! Windows Console API (`SetConsoleMode()`) correctly.

use crate::MenuError;

pub type Device = std::io::Stdin;

/// Crossterm keeps the original console mode itself.
#[derive(Debug)]
pub struct SavedMode;

/// # Errors
///
/// Never fails; the signature matches the Unix implementation.
#[allow(clippy::unnecessary_wraps)]
pub fn open_device() -> miette::Result<Device> { Ok(std::io::stdin()) }

/// # Errors
///
/// Returns an error if the console mode cannot be changed.
pub fn enable_raw_mode(_device: &Device) -> miette::Result<SavedMode> {
    crossterm::terminal::enable_raw_mode()
        .map_err(|e| MenuError::RawMode(e.to_string()))?;
    Ok(SavedMode)
}

/// # Errors
///
/// Returns an error if the console mode cannot be restored.
pub fn disable_raw_mode(_device: &Device, _saved: &SavedMode) -> miette::Result<()> {
    crossterm::terminal::disable_raw_mode()
        .map_err(|e| MenuError::RawMode(e.to_string()))?;
    Ok(())
}
