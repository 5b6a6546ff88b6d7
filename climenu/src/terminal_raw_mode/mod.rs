// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Terminal raw mode, scoped to a single key read.
//!
//! **Cooked Mode** (default):
//! - Input is line-buffered (waits for Enter key)
//! - Special characters are interpreted (Ctrl+C sends SIGINT, etc.)
//! - Echoing is enabled (typed characters appear on screen)
//!
//! **Raw Mode**:
//! - No line buffering - bytes available immediately
//! - No special character processing - `Ctrl+C` arrives as byte `3`
//! - No echo - typed characters don't automatically appear
//!
//! The menu only needs raw mode while it waits for a key. Everything else (printing the
//! menu, printing the result, [`crate::prompt_text()`]) happens in cooked mode. So raw
//! mode is acquired by creating a [`RawModeGuard`] and released when it is dropped:
//!
//! ```no_run
//! use climenu::{RawModeGuard, TerminalDevice};
//! use std::io::Read as _;
//!
//! fn read_one_byte() -> miette::Result<u8> {
//!     let mut guard = RawModeGuard::new(TerminalDevice::open()?)?;
//!     let mut buffer = [0_u8; 1];
//!     guard.device().read_exact(&mut buffer).map_err(climenu::MenuError::TerminalInput)?;
//!     Ok(buffer[0])
//! } // Raw mode is disabled here, even if the read failed.
//! ```
//!
//! ## Platform Support
//!
//! - **Unix/Linux/macOS**: Uses rustix's safe termios API on `/dev/tty`
//! - **Windows**: Delegates to crossterm, reading from stdin

// Private modules (hide internal structure).
mod raw_mode_core;

#[cfg(unix)]
mod raw_mode_unix;

#[cfg(windows)]
mod raw_mode_windows;

// Re-export the public API (flat, ergonomic surface).
pub use raw_mode_core::*;
