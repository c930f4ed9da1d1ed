//! Landing page template registry
//!
//! This module provides access to pagecraft-templates.

// Re-export all pagecraft-templates functionality
pub use pagecraft_templates::*;
