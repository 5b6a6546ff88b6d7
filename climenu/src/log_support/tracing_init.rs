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

use miette::IntoDiagnostic;
use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

use super::TracingConfig;

pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Initialize the global tracing subscriber with the provided [`TracingConfig`]. If the
/// configuration is disabled (see [`TracingConfig::is_disabled()`]) this does nothing.
///
/// # Errors
///
/// Returns an error if the log file can't be created, or if a global subscriber has
/// already been set.
pub fn try_initialize_logging_global(tracing_config: TracingConfig) -> miette::Result<()> {
    let Some(layers) = try_create_layers(&tracing_config)? else {
        return Ok(());
    };
    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .into_diagnostic()
}

/// Returns the layers, or `None` if logging is disabled. This does not initialize the
/// tracing system. Don't forget to do this manually, by calling `init` on the returned
/// layers.
///
/// For example, once you have the layers, you can run the following:
/// `try_create_layers(..)?.map(|layers| tracing_subscriber::registry().with(layers).init());`
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_layers(
    tracing_config: &TracingConfig,
) -> miette::Result<Option<Vec<Box<DynLayer<tracing_subscriber::Registry>>>>> {
    if tracing_config.is_disabled() {
        return Ok(None);
    }

    let level_filter = tracing_config.level_filter;
    let writer_config = &tracing_config.writer_config;

    let mut return_it: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    // Set the level filter from the tracing configuration. This is needed if you add more
    // layers which don't have a level filter.
    return_it.push(Box::new(level_filter));

    if let Some(layer) = writer_config.create_stderr_layer(level_filter) {
        return_it.push(layer);
    }

    if let Some(layer) = writer_config.try_create_file_layer(level_filter)? {
        return_it.push(layer);
    }

    Ok(Some(return_it))
}
