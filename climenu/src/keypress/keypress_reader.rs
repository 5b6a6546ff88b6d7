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

use std::io::{self, Read};

use crate::{ANSI_CSI_BRACKET, ANSI_ESC, DecodedKey, KeySequence, MAX_KEY_SEQUENCE_LEN,
            MenuError, RawModeGuard, TerminalDevice, decode_key_bytes};

pub trait KeyPressReader {
    /// Block until one logical keypress is available. Failures are reported as
    /// [`DecodedKey::ReadError`] rather than as an error, since the interaction loop
    /// treats them exactly like a cancellation.
    fn read_key_press(&mut self) -> DecodedKey;
}

/// Reads keypresses from the controlling terminal. Every call opens the terminal, enables
/// raw mode, reads one key, and restores cooked mode before returning.
#[derive(Debug, Default)]
pub struct TtyKeyPressReader;

impl KeyPressReader for TtyKeyPressReader {
    fn read_key_press(&mut self) -> DecodedKey {
        match try_read_key_press() {
            Ok(key) => {
                // % is Display, ? is Debug.
                tracing::debug!(message = "read_key_press", key = ?key);
                key
            }
            Err(report) => {
                tracing::debug!(message = "read_key_press failed", error = ?report);
                DecodedKey::ReadError
            }
        }
    }
}

fn try_read_key_press() -> miette::Result<DecodedKey> {
    let mut guard = RawModeGuard::new(TerminalDevice::open()?)?;
    let bytes = read_key_sequence(guard.device()).map_err(MenuError::TerminalInput)?;
    Ok(decode_key_bytes(&bytes))
}

/// Read the bytes of one keypress.
///
/// The first `read()` returns whatever the terminal has sent so far, up to
/// [`MAX_KEY_SEQUENCE_LEN`] bytes. Terminals send an arrow key as one write, so it
/// normally arrives whole, while a bare `Esc` arrives as a single byte. This way a lone
/// `Esc` is never stuck waiting for a continuation that isn't coming.
///
/// If the read stops right after `ESC [` (the sequence got split, eg: over SSH), the
/// final byte is certain to follow, so one more `read()` is made for it.
///
/// # Errors
///
/// Returns an error if a `read()` fails, or if the device reports end of file before any
/// byte arrives.
pub fn read_key_sequence(device: &mut impl Read) -> io::Result<KeySequence> {
    let mut buffer = [0_u8; MAX_KEY_SEQUENCE_LEN];

    let mut count = device.read(&mut buffer)?;
    if count == 0 {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof));
    }

    if buffer[..count] == [ANSI_ESC, ANSI_CSI_BRACKET] {
        count += device.read(&mut buffer[count..])?;
    }

    Ok(KeySequence::from_slice(&buffer[..count]))
}
