// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Optional logging with [`tracing`]. The library itself only emits events; nothing is
//! written anywhere until an application calls [`try_initialize_logging_global()`].
//!
//! Logs never go to stdout, since that is where the menus are drawn.
//!
//! ```no_run
//! use climenu::{TracingConfig, try_initialize_logging_global};
//!
//! try_initialize_logging_global(TracingConfig::new_file("climenu.log"))?;
//! tracing::debug!(message = "logging is on");
//! # Ok::<(), miette::Report>(())
//! ```

// Attach sources.
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use tracing_config::*;
pub use tracing_init::*;
