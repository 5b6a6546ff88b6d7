// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Unix/Linux/macOS implementation of raw mode using rustix's safe termios API.

use crate::MenuError;
use rustix::termios::{self, OptionalActions, Termios};
use std::fs::File;

/// The controlling terminal. Opened for every key read, so that raw mode applies to the
/// terminal even when stdin is redirected (e.g., `echo "data" | your_app`).
pub type Device = File;

/// Terminal settings captured right before switching to raw mode.
#[derive(Debug)]
pub struct SavedMode {
    original: Termios,
}

/// # Errors
///
/// Returns an error if `/dev/tty` can't be opened, eg: when there is no controlling
/// terminal (daemons, some CI runners).
pub fn open_device() -> miette::Result<Device> {
    let file = File::options()
        .read(true)
        .write(true)
        .open("/dev/tty")
        .map_err(MenuError::TerminalInput)?;
    Ok(file)
}

/// Uses rustix's built-in `make_raw()` which implements `cfmakeraw` behavior:
/// - Disabling canonical mode (ICANON)
/// - Disabling signal generation (ISIG)
/// - Disabling echo (ECHO, ECHONL)
/// - Setting VMIN=1, VTIME=0 for immediate byte-by-byte reading
///
/// # Errors
///
/// Returns an error if the terminal attributes can't be retrieved or set.
pub fn enable_raw_mode(device: &Device) -> miette::Result<SavedMode> {
    let mut termios = termios::tcgetattr(device).map_err(|e| {
        MenuError::RawMode(format!("failed to retrieve terminal attributes: {e}"))
    })?;

    // rustix's Termios doesn't implement Copy, so we need to clone.
    let original = termios.clone();

    termios.make_raw();

    termios::tcsetattr(device, OptionalActions::Now, &termios).map_err(|e| {
        MenuError::RawMode(format!("failed to set terminal attributes: {e}"))
    })?;

    Ok(SavedMode { original })
}

/// # Errors
///
/// Returns an error if the terminal attributes can't be set.
pub fn disable_raw_mode(device: &Device, saved: &SavedMode) -> miette::Result<()> {
    termios::tcsetattr(device, OptionalActions::Now, &saved.original).map_err(|e| {
        MenuError::RawMode(format!("failed to restore terminal attributes: {e}"))
    })?;
    Ok(())
}
