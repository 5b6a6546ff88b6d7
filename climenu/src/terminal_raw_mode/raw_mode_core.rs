// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Platform-agnostic terminal device handle and the `RawModeGuard` RAII wrapper.

use std::io::{self, Read};

#[cfg(unix)]
use super::raw_mode_unix as platform;
#[cfg(windows)]
use super::raw_mode_windows as platform;

/// The device that keypresses are read from: `/dev/tty` on Unix, and stdin on Windows.
#[derive(Debug)]
pub struct TerminalDevice {
    inner: platform::Device,
}

impl TerminalDevice {
    /// # Errors
    ///
    /// Returns an error if the process has no controlling terminal.
    pub fn open() -> miette::Result<Self> {
        Ok(Self {
            inner: platform::open_device()?,
        })
    }
}

impl Read for TerminalDevice {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> { self.inner.read(buf) }
}

/// RAII guard that puts the terminal in raw mode when created and restores the original
/// settings when dropped. It owns the [`TerminalDevice`], so the device can only be read
/// while raw mode is active, and it is closed right after the settings are restored.
///
/// Raw mode is not reentrant: creating two guards for the same terminal at the same
/// time leaves the terminal raw when the first one is dropped last.
#[derive(Debug)]
pub struct RawModeGuard {
    device: TerminalDevice,
    saved: platform::SavedMode,
}

impl RawModeGuard {
    /// Enable raw mode on the given device.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal attributes can't be read or changed. In this
    /// case the terminal is left untouched.
    pub fn new(device: TerminalDevice) -> miette::Result<Self> {
        let saved = platform::enable_raw_mode(&device.inner)?;
        tracing::trace!(message = "raw mode enabled");
        Ok(RawModeGuard { device, saved })
    }

    pub fn device(&mut self) -> &mut TerminalDevice { &mut self.device }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        match platform::disable_raw_mode(&self.device.inner, &self.saved) {
            Ok(()) => tracing::trace!(message = "raw mode disabled"),
            // % is Display, ? is Debug.
            Err(report) => tracing::error!(
                message = "could not restore cooked mode",
                error = ?report
            ),
        }
    }
}
