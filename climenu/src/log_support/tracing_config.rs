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

use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, registry::LookupSpan};

use super::{DynLayer, rolling_file_appender_impl};

/// Configure where the logs go and how verbose they are. Pass this to
/// [`crate::try_initialize_logging_global()`].
///
/// Fields:
/// - `writer_config`: [`WriterConfig`] to choose where to write the logs.
/// - `level_filter`: [`LevelFilter`] to use. [`LevelFilter::OFF`] disables logging
///   regardless of `writer_config`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// Where log lines are written. The `String` is the path of the log file, eg:
/// `/tmp/climenu.log` or `climenu.log`. The file is created if needed and appended to;
/// it is never rotated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Stderr,
    File(String /* log file path */),
    StderrAndFile(String /* log file path */),
}

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer.
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
    };
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            writer_config: WriterConfig::None,
            level_filter: LevelFilter::OFF,
        }
    }
}

impl TracingConfig {
    pub fn new_file(path: impl Into<String>) -> Self {
        Self {
            writer_config: WriterConfig::File(path.into()),
            level_filter: LevelFilter::DEBUG,
        }
    }

    pub fn new_stderr() -> Self {
        Self {
            writer_config: WriterConfig::Stderr,
            level_filter: LevelFilter::DEBUG,
        }
    }

    pub fn new_stderr_and_file(path: impl Into<String>) -> Self {
        Self {
            writer_config: WriterConfig::StderrAndFile(path.into()),
            level_filter: LevelFilter::DEBUG,
        }
    }

    /// `true` if nothing would ever be logged with this configuration.
    pub fn is_disabled(&self) -> bool {
        self.level_filter == LevelFilter::OFF || self.writer_config == WriterConfig::None
    }
}

impl WriterConfig {
    /// This erases the concrete type of the writer, and returns a boxed layer. This is
    /// useful for composition of layers. There's more info in the docs
    /// [here](https://docs.rs/tracing-subscriber/latest/tracing_subscriber/layer/index.html#runtime-configuration-with-layers).
    pub fn create_stderr_layer<S>(&self, level_filter: LevelFilter) -> Option<Box<DynLayer<S>>>
    where
        S: tracing_core::Subscriber,
        for<'a> S: LookupSpan<'a>,
    {
        match self {
            WriterConfig::Stderr | WriterConfig::StderrAndFile(_) => Some(Box::new(
                create_fmt!()
                    .with_ansi(true)
                    .with_writer(std::io::stderr)
                    .with_filter(level_filter),
            )),
            WriterConfig::None | WriterConfig::File(_) => None,
        }
    }

    /// Same as [`WriterConfig::create_stderr_layer()`], for the log file. The file is
    /// created right away.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be created.
    pub fn try_create_file_layer<S>(
        &self,
        level_filter: LevelFilter,
    ) -> miette::Result<Option<Box<DynLayer<S>>>>
    where
        S: tracing_core::Subscriber,
        for<'a> S: LookupSpan<'a>,
    {
        Ok(match self {
            WriterConfig::File(path) | WriterConfig::StderrAndFile(path) => {
                let file = rolling_file_appender_impl::try_create(path)?;
                Some(Box::new(
                    create_fmt!()
                        .with_ansi(false)
                        .with_writer(file)
                        .with_filter(level_filter),
                ))
            }
            WriterConfig::None | WriterConfig::Stderr => None,
        })
    }
}
