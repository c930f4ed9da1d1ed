//! Design-token theming
//!
//! This module provides access to pagecraft-theme: token flattening into CSS
//! custom properties, the apply/remove engine, light and dark presets and the
//! [`ThemeProvider`] with persistence and scoped sub-themes.

// Re-export all pagecraft-theme functionality
pub use pagecraft_theme::*;
