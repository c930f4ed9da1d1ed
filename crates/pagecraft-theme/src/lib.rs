//! # pagecraft theme
//!
//! Design tokens for landing pages, turned into CSS custom properties.
//!
//! ## Pipeline
//!
//! 1. [`ThemeTokens`] holds six ordered token groups plus metadata
//! 2. [`flatten`] maps every leaf to a property such as
//!    `--color-primary-500` or `--font-size-lg`
//! 3. [`ThemeEngine`] writes the properties and the `data-theme` attribute to
//!    a [`DocumentSink`](pagecraft_core::DocumentSink) node
//! 4. [`ThemeProvider`] owns the active theme, persists explicit choices
//!    through a [`PreferenceStore`](pagecraft_core::PreferenceStore) and
//!    hands out scoped sub-themes
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use pagecraft_core::{MemoryDocument, MemoryStore, NodeTarget};
//! use pagecraft_theme::{ThemeProvider, presets};
//!
//! let document = Arc::new(MemoryDocument::new());
//! let provider = ThemeProvider::builder(document.clone())
//! 	.store(Arc::new(MemoryStore::new()))
//! 	.system_prefers_dark(true)
//! 	.build()
//! 	.unwrap();
//!
//! assert_eq!(provider.theme_name(), presets::DARK);
//! assert!(document.property(&NodeTarget::Root, "--color-primary-500").is_some());
//! ```

#![warn(missing_docs)]

pub mod engine;
pub mod error;
pub mod flatten;
pub mod presets;
pub mod provider;
pub mod tokens;

pub use engine::{ENGINE_PREFIXES, THEME_ATTRIBUTE, ThemeEngine, is_engine_property};
pub use error::{ThemeError, ThemeResult};
pub use flatten::{StyleMap, flatten, flatten_checked};
pub use provider::{ColorSchemePreference, ThemeProvider, ThemeProviderBuilder};
pub use tokens::{ThemeMetadata, ThemeTokens, TokenGroup, TokenNode, TokenValue, group};
