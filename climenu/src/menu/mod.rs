// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod crossterm_macros;
pub mod event_loop;
pub mod menu_api;
pub mod menu_model;
pub mod renderer;
pub mod style;

// Re-export.
pub use event_loop::*;
pub use menu_api::*;
pub use menu_model::*;
pub use renderer::*;
pub use style::*;
