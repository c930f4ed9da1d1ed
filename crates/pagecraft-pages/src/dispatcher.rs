//! Section dispatch.
//!
//! [`render_section`] decodes one descriptor, resolves its icon and handler
//! names through a [`RenderContext`], renders the matching presentational
//! component and wraps it in a `<section>` carrying the descriptor's id,
//! classes and inline style. A descriptor that cannot be rendered is logged
//! and yields `None`; it never aborts the rest of the page.

use pagecraft_core::{Handler, HandlerRegistry, IntoPage, Page, PageElement};

use crate::config::{SectionDescriptor, SectionType};
use crate::resolver::{IconRef, IconResolver, resolve_handler};
use crate::sections::{self, Section};

/// Lookup tables shared by every section of one render pass.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
	handlers: &'a HandlerRegistry,
	icons: &'a IconResolver,
}

impl<'a> RenderContext<'a> {
	/// Creates a context over a handler registry and an icon resolver.
	pub fn new(handlers: &'a HandlerRegistry, icons: &'a IconResolver) -> Self {
		Self { handlers, icons }
	}

	/// The handler registry.
	pub fn handlers(&self) -> &'a HandlerRegistry {
		self.handlers
	}

	/// The icon resolver.
	pub fn icons(&self) -> &'a IconResolver {
		self.icons
	}

	/// Resolves an optional handler name.
	pub fn handler(&self, name: Option<&str>) -> Option<Handler> {
		resolve_handler(name, self.handlers)
	}

	/// Resolves an icon name.
	pub fn icon(&self, name: &str) -> Option<IconRef> {
		self.icons.resolve(name)
	}
}

/// Renders one section, or `None` if it is skipped.
pub fn render_section(descriptor: &SectionDescriptor, ctx: &RenderContext<'_>) -> Option<Page> {
	let section = match Section::from_descriptor(descriptor) {
		Ok(section) => section,
		Err(err) => {
			tracing::warn!(
				section_type = descriptor.section_type.as_deref().unwrap_or_default(),
				section_id = descriptor.id.as_deref().unwrap_or_default(),
				error = %err,
				"skipping section"
			);
			return None;
		}
	};

	let body = match &section {
		Section::Hero(data) => sections::hero::render(data, ctx),
		Section::Features(data) => sections::features::render(data, ctx),
		Section::Testimonials(data) => sections::testimonials::render(data),
		Section::Cta(data) => sections::cta::render(data, ctx),
		Section::Pricing(data) => sections::pricing::render(data, ctx),
		Section::Contact(data) => sections::contact::render(data, ctx)?,
	};

	Some(wrap(descriptor, section.section_type(), body).into_page())
}

fn wrap(descriptor: &SectionDescriptor, section_type: SectionType, body: PageElement) -> PageElement {
	let mut class = format!("section section-{section_type}");
	if let Some(extra) = descriptor
		.class_name
		.as_deref()
		.map(str::trim)
		.filter(|c| !c.is_empty())
	{
		class.push(' ');
		class.push_str(extra);
	}

	let style = descriptor
		.style
		.as_ref()
		.filter(|style| !style.is_empty())
		.map(|style| {
			style
				.iter()
				.map(|(property, value)| format!("{property}: {value}"))
				.collect::<Vec<_>>()
				.join("; ")
		});

	PageElement::new("section")
		.attr("data-section", section_type.as_str())
		.attr_opt("id", descriptor.id.clone())
		.attr("class", class)
		.attr_opt("style", style)
		.child(body)
}
