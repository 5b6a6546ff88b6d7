/*
 *   Copyright (c) 2024-2025 R3BL LLC
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

use std::path::{Path, PathBuf};

use tracing_appender::rolling::{RollingFileAppender, Rotation};

use crate::MenuError;

/// Create (or open for appending) the log file at `path_str`. The file is never rotated.
///
/// Note that if you wrap this up in a non blocking writer, as shown below, it doesn't
/// work, since the worker guard would have to be kept alive:
///
/// ```ignore
/// tracing_appender::non_blocking(try_create("foo.log")?);
/// ```
///
/// # Errors
///
/// Returns [`MenuError::LogFile`] if the path has no file name, or the file can't be
/// created.
pub fn try_create(path_str: &str) -> miette::Result<RollingFileAppender> {
    let path = PathBuf::from(path_str);
    let log_file_error = || MenuError::LogFile {
        path: path_str.to_string(),
    };

    let file_name = path.file_name().ok_or_else(log_file_error)?;

    // A bare file name has an empty parent, which means the current directory.
    let parent = match path.parent() {
        Some(it) if !it.as_os_str().is_empty() => it,
        _ => Path::new("."),
    };

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(parent)
        .map_err(|error| {
            // % is Display, ? is Debug.
            tracing::error!(message = "could not create log file", error = %error);
            log_file_error().into()
        })
}
