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

//! Stand-ins for the terminal, so that menus can be driven from tests (or scripts)
//! without a tty.

use std::io::{Result, Write};

use crate::{DecodedKey, KeyPressReader};

/// Collects everything written to it as a `String`. Bytes that are not valid UTF-8 are
/// replaced with `U+FFFD`, and are still reported as written.
#[derive(Debug)]
pub struct TestStringWriter {
    buffer: String,
}

impl Default for TestStringWriter {
    fn default() -> Self { Self::new() }
}

impl TestStringWriter {
    pub fn new() -> Self {
        TestStringWriter {
            buffer: String::new(),
        }
    }

    pub fn get_buffer(&self) -> &str { &self.buffer }
}

impl Write for TestStringWriter {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.buffer.push_str(&String::from_utf8_lossy(buf));
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<()> { Ok(()) }
}

/// Plays back a fixed list of keys, one per call. Once the list is used up every call
/// returns [`DecodedKey::ReadError`], the same as a terminal that went away, so a test
/// that forgets to confirm can't hang.
#[derive(Debug, Default)]
pub struct TestVecKeyPressReader {
    pub key_press_vec: Vec<DecodedKey>,
    pub index: usize,
}

impl TestVecKeyPressReader {
    pub fn new(key_press_vec: Vec<DecodedKey>) -> Self {
        TestVecKeyPressReader {
            key_press_vec,
            index: 0,
        }
    }

    /// Keys not yet played back.
    pub fn remaining(&self) -> &[DecodedKey] {
        self.key_press_vec.get(self.index..).unwrap_or_default()
    }
}

impl KeyPressReader for TestVecKeyPressReader {
    fn read_key_press(&mut self) -> DecodedKey {
        let Some(key) = self.key_press_vec.get(self.index).copied() else {
            return DecodedKey::ReadError;
        };
        self.index += 1;
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reader_plays_back_then_reports_read_error() {
        let mut reader =
            TestVecKeyPressReader::new(vec![DecodedKey::Char(b'a'), DecodedKey::Char(b'b')]);
        assert_eq!(reader.read_key_press(), DecodedKey::Char(b'a'));
        assert_eq!(reader.remaining(), &[DecodedKey::Char(b'b')]);
        assert_eq!(reader.read_key_press(), DecodedKey::Char(b'b'));
        assert_eq!(reader.read_key_press(), DecodedKey::ReadError);
        assert_eq!(reader.read_key_press(), DecodedKey::ReadError);
        assert!(reader.remaining().is_empty());
    }

    #[test]
    fn test_writer_accepts_invalid_utf8() {
        let mut writer = TestStringWriter::new();
        writer.write_all(b"ok \xff!").unwrap();
        assert_eq!(writer.get_buffer(), "ok \u{FFFD}!");
    }

    #[test]
    fn test_writer_collects_text() {
        let mut writer = TestStringWriter::new();
        write!(writer, "hello {}", 42).unwrap();
        assert_eq!(writer.get_buffer(), "hello 42");
    }
}
