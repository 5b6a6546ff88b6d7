// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod decoded_key;
pub mod keypress_reader;

// Re-export.
pub use decoded_key::*;
pub use keypress_reader::*;
