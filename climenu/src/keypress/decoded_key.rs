// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Decode the raw bytes of one keypress.
//!
//! Terminals send navigation keys on the same byte stream as printable characters, so an
//! arrow key arrives as a 3 byte `CSI` sequence:
//! - Up: `ESC[A`
//! - Down: `ESC[B`
//! - Right: `ESC[C`
//! - Left: `ESC[D`
//!
//! Everything else the menu cares about is a single byte (`Enter`, `Space`, digits,
//! `Ctrl+C`, and a bare `Esc`).
//!
//! | Bytes                     | Decoded as                 |
//! |:--------------------------|:---------------------------|
//! | (none)                    | [`DecodedKey::ReadError`]  |
//! | `ESC [ A/B/C/D`           | [`DecodedKey::NavKey`]     |
//! | `ESC [ other`             | `Char(ESC)`, rest dropped  |
//! | `ESC` or `ESC other`      | `Char(ESC)`, rest dropped  |
//! | `byte ..`                 | `Char(byte)`, rest dropped |

use smallvec::SmallVec;

/// ESC byte (27 in decimal, 0x1B in hex)
pub const ANSI_ESC: u8 = 0x1B;

/// CSI bracket byte: `[` (91 in decimal, 0x5B in hex)
pub const ANSI_CSI_BRACKET: u8 = 0x5B;

/// CSI A: Up arrow key final byte
pub const ARROW_UP_FINAL: u8 = b'A';

/// CSI B: Down arrow key final byte
pub const ARROW_DOWN_FINAL: u8 = b'B';

/// CSI C: Right arrow key final byte
pub const ARROW_RIGHT_FINAL: u8 = b'C';

/// CSI D: Left arrow key final byte
pub const ARROW_LEFT_FINAL: u8 = b'D';

/// `Ctrl+C` in raw mode (ISIG is off, so no SIGINT is generated).
pub const ASCII_CTRL_C: u8 = 3;

/// `Enter` in raw mode (ICRNL is off, so it is not translated to `\n`).
pub const ASCII_CR: u8 = 13;

pub const ASCII_SPACE: u8 = b' ';

/// Longest sequence the decoder understands: `ESC [ final_byte`.
pub const MAX_KEY_SEQUENCE_LEN: usize = 3;

/// The bytes of one keypress, as returned by one or two `read()` calls.
pub type KeySequence = SmallVec<[u8; MAX_KEY_SEQUENCE_LEN]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    Up,
    Down,
    Left,
    Right,
}

/// One logical keypress. It is consumed immediately by the interaction loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodedKey {
    /// A single byte, eg: `b'1'`, `b' '`, [`ASCII_CR`], [`ASCII_CTRL_C`], [`ANSI_ESC`].
    Char(u8),
    /// An arrow key.
    NavKey(NavKey),
    /// The terminal could not be read (or put in raw mode).
    ReadError,
}

/// Decode the bytes of one keypress. This never fails; anything that isn't understood
/// degrades to a [`DecodedKey::Char`] of its leading byte.
#[must_use]
pub fn decode_key_bytes(bytes: &[u8]) -> DecodedKey {
    match bytes {
        [] => DecodedKey::ReadError,
        [ANSI_ESC, ANSI_CSI_BRACKET, final_byte, ..] => match *final_byte {
            ARROW_UP_FINAL => DecodedKey::NavKey(NavKey::Up),
            ARROW_DOWN_FINAL => DecodedKey::NavKey(NavKey::Down),
            ARROW_RIGHT_FINAL => DecodedKey::NavKey(NavKey::Right),
            ARROW_LEFT_FINAL => DecodedKey::NavKey(NavKey::Left),
            _ => DecodedKey::Char(ANSI_ESC),
        },
        [first_byte, ..] => DecodedKey::Char(*first_byte),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(b"\x1b[A", DecodedKey::NavKey(NavKey::Up) ; "arrow up")]
    #[test_case(b"\x1b[B", DecodedKey::NavKey(NavKey::Down) ; "arrow down")]
    #[test_case(b"\x1b[C", DecodedKey::NavKey(NavKey::Right) ; "arrow right")]
    #[test_case(b"\x1b[D", DecodedKey::NavKey(NavKey::Left) ; "arrow left")]
    #[test_case(b"\r", DecodedKey::Char(ASCII_CR) ; "enter")]
    #[test_case(b" ", DecodedKey::Char(ASCII_SPACE) ; "space")]
    #[test_case(b"\x03", DecodedKey::Char(ASCII_CTRL_C) ; "ctrl c")]
    #[test_case(b"7", DecodedKey::Char(b'7') ; "digit")]
    #[test_case(b"q", DecodedKey::Char(b'q') ; "printable")]
    fn test_decode_known_keys(bytes: &[u8], expected: DecodedKey) {
        assert_eq!(decode_key_bytes(bytes), expected);
    }

    #[test_case(b"\x1b" ; "bare escape")]
    #[test_case(b"\x1bx" ; "escape then non bracket")]
    #[test_case(b"\x1b[" ; "escape bracket without final byte")]
    #[test_case(b"\x1b[Z" ; "escape bracket unknown final byte")]
    #[test_case(b"\x1bOA" ; "ss3 arrow is not recognized")]
    fn test_decode_degrades_to_escape(bytes: &[u8]) {
        assert_eq!(decode_key_bytes(bytes), DecodedKey::Char(ANSI_ESC));
    }

    #[test]
    fn test_decode_empty_is_read_error() {
        assert_eq!(decode_key_bytes(&[]), DecodedKey::ReadError);
    }

    #[test]
    fn test_decode_keeps_leading_byte_of_multi_byte_read() {
        // Pasted text or a multi byte UTF-8 char: only the first byte is kept.
        assert_eq!(decode_key_bytes(b"12"), DecodedKey::Char(b'1'));
        assert_eq!(decode_key_bytes("é".as_bytes()), DecodedKey::Char(0xC3));
    }
}
