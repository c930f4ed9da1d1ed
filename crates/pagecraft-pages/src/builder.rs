//! Page assembly.
//!
//! [`PageBuilder`] is the top-level entry point: it validates a
//! [`PageConfig`], applies document-level side effects (brand colours, title,
//! meta tags) through a [`DocumentSink`] and renders every section the
//! dispatcher produces.
//!
//! ## Validation policy
//!
//! Validation is memoized on the identity of the `Arc<PageConfig>`: building
//! the same `Arc` again reuses the previous result and does not re-fire the
//! error callback. In strict mode an invalid configuration replaces the whole
//! page with an error listing and no side effects are applied.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use pagecraft_core::MemoryDocument;
//! use pagecraft_pages::{PageBuilder, PageConfig};
//!
//! let document = Arc::new(MemoryDocument::new());
//! let builder = PageBuilder::new(document.clone());
//! let config = Arc::new(PageConfig::from_json(r#"{
//!     "sections": [{"type": "hero", "data": {"title": "Hello", "subtitle": "World"}}],
//!     "meta": {"title": "Home"}
//! }"#).unwrap());
//!
//! let html = builder.build_html(&config);
//! assert!(html.contains("<h1 class=\"hero-title\">Hello</h1>"));
//! assert_eq!(document.title().as_deref(), Some("Home"));
//! ```

use std::fmt;
use std::sync::Arc;

use pagecraft_conf::PageSettings;
use pagecraft_core::{DocumentSink, Head, IntoPage, MetaTag, NodeTarget, Page, PageElement};
use parking_lot::Mutex;

use crate::config::{PageConfig, PageMeta};
use crate::dispatcher::{RenderContext, render_section};
use crate::resolver::{IconResolver, IconSet};
use crate::validation::{ValidationError, ValidationResult, validate_page_config};

/// Callback receiving the errors of an invalid configuration.
pub type ValidationCallback = Arc<dyn Fn(&[ValidationError]) + Send + Sync>;

/// Builds pages from configurations.
pub struct PageBuilder {
	sink: Arc<dyn DocumentSink>,
	strict_validation: bool,
	on_validation_error: Option<ValidationCallback>,
	icons: IconResolver,
	last_validation: Mutex<Option<(Arc<PageConfig>, ValidationResult)>>,
}

impl fmt::Debug for PageBuilder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PageBuilder")
			.field("strict_validation", &self.strict_validation)
			.field("has_validation_callback", &self.on_validation_error.is_some())
			.field("icons", &self.icons.set().len())
			.finish()
	}
}

impl PageBuilder {
	/// Creates a non-strict builder writing to `sink`, using the built-in icons.
	pub fn new(sink: Arc<dyn DocumentSink>) -> Self {
		Self {
			sink,
			strict_validation: false,
			on_validation_error: None,
			icons: IconResolver::default(),
			last_validation: Mutex::new(None),
		}
	}

	/// Creates a builder configured from the `[pages]` settings table.
	pub fn from_settings(settings: &PageSettings, sink: Arc<dyn DocumentSink>) -> Self {
		Self::new(sink).strict_validation(settings.strict_validation)
	}

	/// Replaces the page with an error listing when validation fails.
	pub fn strict_validation(mut self, strict: bool) -> Self {
		self.strict_validation = strict;
		self
	}

	/// Registers a callback for invalid configurations in non-strict mode.
	pub fn on_validation_error<F>(mut self, callback: F) -> Self
	where
		F: Fn(&[ValidationError]) + Send + Sync + 'static,
	{
		self.on_validation_error = Some(Arc::new(callback));
		self
	}

	/// Replaces the icon set.
	pub fn icons(mut self, icons: IconSet) -> Self {
		self.icons = IconResolver::new(icons);
		self
	}

	/// Whether strict validation is enabled.
	pub fn is_strict(&self) -> bool {
		self.strict_validation
	}

	/// Validates `config`, reusing the previous result for the same `Arc`.
	///
	/// The error callback fires only when a new, invalid configuration is
	/// seen in non-strict mode.
	pub fn validate(&self, config: &Arc<PageConfig>) -> ValidationResult {
		let mut last = self.last_validation.lock();
		if let Some((cached, result)) = last.as_ref() {
			if Arc::ptr_eq(cached, config) {
				return result.clone();
			}
		}

		let result = validate_page_config(config);
		*last = Some((Arc::clone(config), result.clone()));
		drop(last);

		if !result.valid {
			tracing::warn!(
				errors = result.errors.len(),
				strict = self.strict_validation,
				"page configuration failed validation"
			);
			if !self.strict_validation {
				if let Some(callback) = &self.on_validation_error {
					callback(&result.errors);
				}
			}
		}
		result
	}

	/// Builds the page.
	pub fn build(&self, config: &Arc<PageConfig>) -> Page {
		let validation = self.validate(config);
		if !validation.valid && self.strict_validation {
			return error_listing(&validation.errors);
		}

		self.apply_document_effects(config);

		let ctx = RenderContext::new(&config.handlers, &self.icons);
		let sections: Vec<Page> = config
			.section_list()
			.iter()
			.filter_map(|descriptor| render_section(descriptor, &ctx))
			.collect();
		tracing::debug!(
			rendered = sections.len(),
			declared = config.section_list().len(),
			"page built"
		);

		let page = PageElement::new("main")
			.attr("class", "page")
			.attr_opt("id", config.id.clone())
			.children(sections)
			.into_page();
		match config.meta.as_ref().map(head_for) {
			Some(head) if !head.is_empty() => page.with_head(head),
			_ => page,
		}
	}

	/// Builds the page and renders its body to HTML.
	pub fn build_html(&self, config: &Arc<PageConfig>) -> String {
		self.build(config).render_to_string()
	}

	fn apply_document_effects(&self, config: &PageConfig) {
		if let Some(theme) = &config.theme {
			let colors = &theme.colors;
			for (property, value) in [
				("--primary", &colors.primary),
				("--secondary", &colors.secondary),
				("--accent", &colors.accent),
			] {
				if let Some(value) = value {
					self.sink.set_property(&NodeTarget::Root, property, value);
				}
			}
		}

		if let Some(meta) = &config.meta {
			if let Some(title) = &meta.title {
				self.sink.set_title(title);
			}
			if let Some(description) = &meta.description {
				self.sink.upsert_meta("description", description);
			}
			if !meta.keywords.is_empty() {
				self.sink.upsert_meta("keywords", &meta.keywords.join(", "));
			}
		}
	}
}

fn head_for(meta: &PageMeta) -> Head {
	let mut head = Head::new();
	if let Some(title) = &meta.title {
		head = head.title(title.clone());
	}
	if let Some(description) = &meta.description {
		head = head.meta(MetaTag::new("description", description.clone()));
	}
	if !meta.keywords.is_empty() {
		head = head.meta(MetaTag::new("keywords", meta.keywords.join(", ")));
	}
	head
}

fn error_listing(errors: &[ValidationError]) -> Page {
	PageElement::new("div")
		.attr("class", "page-errors")
		.attr("role", "alert")
		.child(PageElement::new("h1").child("Page configuration errors"))
		.child(
			PageElement::new("ul").children(errors.iter().map(|error| {
				PageElement::new("li")
					.attr("data-code", error.code.as_str())
					.child(format!("{}: {}", error.path, error.message))
			})),
		)
		.into_page()
}
