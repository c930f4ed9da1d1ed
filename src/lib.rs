//! # pagecraft
//!
//! A configuration-driven landing page builder with design-token theming.
//!
//! A JSON page configuration is validated into structured errors, each
//! section is resolved (icons, handlers) and dispatched to a renderer, and
//! the resulting [`Page`](core::Page) tree renders to HTML. Document side
//! effects such as the title, meta tags and CSS custom properties go through
//! an injected [`DocumentSink`](core::DocumentSink).
//!
//! ## Feature Flags
//!
//! - `minimal` - Page building only
//! - `full` (default) - Everything below
//! - `pages` - Validation, resolution, section dispatch and the page builder
//! - `theme` - Theme tokens, engine, presets and provider
//! - `templates` - Template registry
//!
//! ## Quick Example
//!
//! ```rust
//! use std::sync::Arc;
//! use pagecraft::prelude::*;
//!
//! let document = Arc::new(MemoryDocument::new());
//! let theme = ThemeProvider::builder(document.clone()).build().unwrap();
//! let builder = PageBuilder::new(document.clone());
//!
//! let config = Arc::new(
//! 	PageConfig::from_json(
//! 		r#"{
//! 			"sections": [{"type": "hero", "data": {"title": "Welcome", "subtitle": "Start here"}}],
//! 			"meta": {"title": "Home"}
//! 		}"#,
//! 	)
//! 	.unwrap(),
//! );
//!
//! let html = builder.build_html(&config);
//! assert!(html.contains("Welcome"));
//! assert_eq!(document.title().as_deref(), Some("Home"));
//! assert!(theme.variable("--spacing-md").is_some());
//! ```

pub use pagecraft_conf as conf;
pub use pagecraft_core as core;

#[cfg(feature = "pages")]
pub mod pages;
#[cfg(feature = "templates")]
pub mod templates;
#[cfg(feature = "theme")]
pub mod theme;

pub use pagecraft_conf::Settings;
pub use pagecraft_core::{
	DocumentSink, Handler, HandlerRegistry, MemoryDocument, MemoryStore, Page, PreferenceStore,
};

#[cfg(feature = "pages")]
pub use pagecraft_pages::{
	PageBuilder, PageConfig, SectionDescriptor, ValidationResult, validate_page_config,
};

#[cfg(feature = "theme")]
pub use pagecraft_theme::{ThemeProvider, ThemeTokens};

#[cfg(feature = "templates")]
pub use pagecraft_templates::{TemplateConfig, TemplateRegistry};

/// Commonly used types.
pub mod prelude {
	pub use pagecraft_conf::Settings;
	pub use pagecraft_core::{
		DocumentSink, EventPayload, Handler, HandlerRegistry, IntoPage, MemoryDocument, MemoryStore,
		NodeTarget, Page, PageElement, PreferenceStore,
	};

	#[cfg(feature = "pages")]
	pub use pagecraft_pages::{
		IconSet, PageBuilder, PageConfig, SectionDescriptor, SectionType, ValidationCode,
		ValidationError, ValidationResult, get_required_handlers, validate_page_config,
	};

	#[cfg(feature = "theme")]
	pub use pagecraft_theme::{ColorSchemePreference, ThemeProvider, ThemeTokens, presets};

	#[cfg(feature = "templates")]
	pub use pagecraft_templates::{TemplateConfig, TemplateRegistry};
}
