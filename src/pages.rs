//! Configuration-driven page building
//!
//! This module provides access to pagecraft-pages: page configuration,
//! validation, icon and handler resolution, section dispatch and the
//! [`PageBuilder`] that ties them together.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use pagecraft::core::MemoryDocument;
//! use pagecraft::pages::{PageBuilder, PageConfig};
//!
//! let config = Arc::new(
//! 	PageConfig::from_json(r#"{"sections": [{"type": "cta", "data": {"title": "Ready?"}}]}"#).unwrap(),
//! );
//! let builder = PageBuilder::new(Arc::new(MemoryDocument::new()));
//!
//! assert!(builder.build_html(&config).contains("Ready?"));
//! ```

// Re-export all pagecraft-pages functionality
pub use pagecraft_pages::*;
