//! Page types for section rendering.
//!
//! The [`Page`] enum is the render tree produced by the section dispatcher and
//! the page builder. It can represent DOM elements, text nodes, fragments or
//! nothing at all, and renders itself to HTML for server-side hosts.
//!
//! ## Example
//!
//! ```rust
//! use pagecraft_core::{IntoPage, Page, PageElement};
//!
//! let view: Page = PageElement::new("section")
//!     .attr("class", "hero")
//!     .child(PageElement::new("h1").child("Welcome"))
//!     .into_page();
//!
//! assert_eq!(view.render_to_string(), "<section class=\"hero\"><h1>Welcome</h1></section>");
//! ```

pub mod event;
pub mod head;
mod util;

pub use event::{EventType, UnknownEventType};
pub use head::{Head, MetaTag};
pub use util::{BOOLEAN_ATTRS, html_escape, is_boolean_attr_truthy};

use std::borrow::Cow;

use crate::callback::{EventPayload, Handler};
use util::is_void_tag;

/// A unified representation of renderable content.
#[derive(Debug)]
pub enum Page {
	/// A DOM element.
	Element(PageElement),
	/// A text node.
	Text(Cow<'static, str>),
	/// A fragment containing multiple pages (no wrapper element).
	Fragment(Vec<Page>),
	/// Renders nothing.
	Empty,
	/// A page with an associated head section, collected by SSR hosts.
	WithHead {
		/// The head section for this page.
		head: Head,
		/// The actual content.
		view: Box<Page>,
	},
}

/// A DOM element in the render tree.
pub struct PageElement {
	tag: Cow<'static, str>,
	attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
	children: Vec<Page>,
	is_void: bool,
	event_handlers: Vec<(EventType, Handler)>,
}

impl std::fmt::Debug for PageElement {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("PageElement")
			.field("tag", &self.tag)
			.field("attrs", &self.attrs)
			.field("children", &self.children)
			.field("is_void", &self.is_void)
			.field("event_handlers_count", &self.event_handlers.len())
			.finish()
	}
}

impl PageElement {
	/// Creates a new element.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		let is_void = is_void_tag(&tag);
		Self {
			tag,
			attrs: Vec::new(),
			children: Vec::new(),
			is_void,
			event_handlers: Vec::new(),
		}
	}

	/// Adds an attribute.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Adds an attribute only when `value` is `Some`.
	pub fn attr_opt(
		self,
		name: impl Into<Cow<'static, str>>,
		value: Option<impl Into<Cow<'static, str>>>,
	) -> Self {
		match value {
			Some(value) => self.attr(name, value),
			None => self,
		}
	}

	/// Adds a boolean attribute when `value` is true.
	pub fn bool_attr(self, name: impl Into<Cow<'static, str>>, value: bool) -> Self {
		if value {
			let name = name.into();
			self.attr(name.clone(), name)
		} else {
			self
		}
	}

	/// Adds a child.
	pub fn child(mut self, child: impl IntoPage) -> Self {
		self.children.push(child.into_page());
		self
	}

	/// Adds multiple children.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoPage>) -> Self {
		self.children
			.extend(children.into_iter().map(|c| c.into_page()));
		self
	}

	/// Attaches an event handler.
	pub fn on(mut self, event_type: EventType, handler: Handler) -> Self {
		self.event_handlers.push((event_type, handler));
		self
	}

	/// Attaches an event handler when one is available.
	pub fn on_opt(self, event_type: EventType, handler: Option<Handler>) -> Self {
		match handler {
			Some(handler) => self.on(event_type, handler),
			None => self,
		}
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the attributes.
	pub fn attrs(&self) -> &[(Cow<'static, str>, Cow<'static, str>)] {
		&self.attrs
	}

	/// Returns the first value of an attribute.
	pub fn get_attr(&self, name: &str) -> Option<&str> {
		self.attrs
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v.as_ref())
	}

	/// Returns the child pages.
	pub fn child_views(&self) -> &[Page] {
		&self.children
	}

	/// Returns whether this is a void element.
	pub fn is_void(&self) -> bool {
		self.is_void
	}

	/// Returns the event handlers.
	pub fn event_handlers(&self) -> &[(EventType, Handler)] {
		&self.event_handlers
	}

	/// Returns `true` if a handler is attached for `event_type`.
	pub fn has_handler(&self, event_type: EventType) -> bool {
		self.event_handlers.iter().any(|(t, _)| *t == event_type)
	}

	/// Invokes every handler attached for the payload's event type.
	///
	/// Returns the number of handlers called; zero means the element is inert
	/// for that event.
	pub fn dispatch(&self, payload: &EventPayload) -> usize {
		let mut called = 0;
		for (event_type, handler) in &self.event_handlers {
			if *event_type == payload.event_type {
				handler.call(payload);
				called += 1;
			}
		}
		called
	}

	/// Concatenated text content of all descendant text nodes.
	pub fn text_content(&self) -> String {
		let mut out = String::new();
		for child in &self.children {
			child.collect_text(&mut out);
		}
		out
	}
}

impl Page {
	/// Creates an element.
	pub fn element(tag: impl Into<Cow<'static, str>>) -> PageElement {
		PageElement::new(tag)
	}

	/// Creates a text node.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Creates a fragment.
	pub fn fragment(children: impl IntoIterator<Item = impl IntoPage>) -> Self {
		Self::Fragment(children.into_iter().map(|c| c.into_page()).collect())
	}

	/// Creates an empty page.
	pub fn empty() -> Self {
		Self::Empty
	}

	/// Attaches a head section to this page.
	pub fn with_head(self, head: Head) -> Self {
		Page::WithHead {
			head,
			view: Box::new(self),
		}
	}

	/// Finds the topmost head section in the tree.
	pub fn find_topmost_head(&self) -> Option<&Head> {
		match self {
			Page::WithHead { head, .. } => Some(head),
			Page::Fragment(children) => children.iter().find_map(|v| v.find_topmost_head()),
			_ => None,
		}
	}

	/// Depth-first search for the first element matching `predicate`.
	pub fn find(&self, predicate: &dyn Fn(&PageElement) -> bool) -> Option<&PageElement> {
		match self {
			Page::Element(el) => {
				if predicate(el) {
					return Some(el);
				}
				el.children.iter().find_map(|c| c.find(predicate))
			}
			Page::Fragment(children) => children.iter().find_map(|c| c.find(predicate)),
			Page::WithHead { view, .. } => view.find(predicate),
			Page::Text(_) | Page::Empty => None,
		}
	}

	/// Collects every element matching `predicate`, in document order.
	pub fn find_all(&self, predicate: &dyn Fn(&PageElement) -> bool) -> Vec<&PageElement> {
		let mut found = Vec::new();
		self.collect_matching(predicate, &mut found);
		found
	}

	fn collect_matching<'a>(
		&'a self,
		predicate: &dyn Fn(&PageElement) -> bool,
		found: &mut Vec<&'a PageElement>,
	) {
		match self {
			Page::Element(el) => {
				if predicate(el) {
					found.push(el);
				}
				for child in &el.children {
					child.collect_matching(predicate, found);
				}
			}
			Page::Fragment(children) => {
				for child in children {
					child.collect_matching(predicate, found);
				}
			}
			Page::WithHead { view, .. } => view.collect_matching(predicate, found),
			Page::Text(_) | Page::Empty => {}
		}
	}

	/// Finds the first element whose attribute `name` equals `value`.
	pub fn find_by_attr(&self, name: &str, value: &str) -> Option<&PageElement> {
		self.find(&|el| el.get_attr(name) == Some(value))
	}

	/// Concatenated text content of the whole tree.
	pub fn text_content(&self) -> String {
		let mut out = String::new();
		self.collect_text(&mut out);
		out
	}

	fn collect_text(&self, out: &mut String) {
		match self {
			Page::Element(el) => {
				for child in &el.children {
					child.collect_text(out);
				}
			}
			Page::Text(text) => out.push_str(text),
			Page::Fragment(children) => {
				for child in children {
					child.collect_text(out);
				}
			}
			Page::WithHead { view, .. } => view.collect_text(out),
			Page::Empty => {}
		}
	}

	/// Renders the page to an HTML string.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_to_string_inner(&mut output);
		output
	}

	fn render_to_string_inner(&self, output: &mut String) {
		match self {
			Page::Element(el) => {
				output.push('<');
				output.push_str(el.tag_name());

				for (name, value) in el.attrs() {
					let name_str: &str = name.as_ref();
					if BOOLEAN_ATTRS.contains(&name_str) && !is_boolean_attr_truthy(value) {
						continue;
					}

					output.push(' ');
					output.push_str(name);
					output.push_str("=\"");
					output.push_str(&html_escape(value));
					output.push('"');
				}

				if el.is_void() {
					output.push_str(" />");
				} else {
					output.push('>');
					for child in el.child_views() {
						child.render_to_string_inner(output);
					}
					output.push_str("</");
					output.push_str(el.tag_name());
					output.push('>');
				}
			}
			Page::Text(text) => {
				output.push_str(&html_escape(text));
			}
			Page::Fragment(children) => {
				for child in children {
					child.render_to_string_inner(output);
				}
			}
			Page::Empty => {}
			Page::WithHead { view, .. } => {
				// The head is extracted separately; only the body is rendered here.
				view.render_to_string_inner(output);
			}
		}
	}
}

/// Trait for types that can be converted into a [`Page`].
pub trait IntoPage {
	/// Converts self into a Page.
	fn into_page(self) -> Page;
}

impl IntoPage for Page {
	fn into_page(self) -> Page {
		self
	}
}

impl IntoPage for PageElement {
	fn into_page(self) -> Page {
		Page::Element(self)
	}
}

impl IntoPage for String {
	fn into_page(self) -> Page {
		Page::Text(Cow::Owned(self))
	}
}

impl IntoPage for &String {
	fn into_page(self) -> Page {
		Page::Text(Cow::Owned(self.clone()))
	}
}

impl IntoPage for &'static str {
	fn into_page(self) -> Page {
		Page::Text(Cow::Borrowed(self))
	}
}

impl<T: IntoPage> IntoPage for Option<T> {
	fn into_page(self) -> Page {
		match self {
			Some(v) => v.into_page(),
			None => Page::Empty,
		}
	}
}

impl<T: IntoPage> IntoPage for Vec<T> {
	fn into_page(self) -> Page {
		Page::Fragment(self.into_iter().map(|v| v.into_page()).collect())
	}
}

impl IntoPage for () {
	fn into_page(self) -> Page {
		Page::Empty
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::sync::Arc;
	use std::sync::atomic::{AtomicUsize, Ordering};

	#[rstest]
	fn test_render_simple_element() {
		let view = PageElement::new("div").into_page();
		assert_eq!(view.render_to_string(), "<div></div>");
	}

	#[rstest]
	fn test_render_void_element() {
		let view = PageElement::new("img").attr("src", "/a.png").into_page();
		assert_eq!(view.render_to_string(), "<img src=\"/a.png\" />");
	}

	#[rstest]
	fn test_render_nested_with_escaping() {
		let view = PageElement::new("p")
			.child("Tom & Jerry ")
			.child(PageElement::new("strong").child("<b>"))
			.into_page();
		assert_eq!(
			view.render_to_string(),
			"<p>Tom &amp; Jerry <strong>&lt;b&gt;</strong></p>"
		);
	}

	#[rstest]
	fn test_falsy_boolean_attr_skipped() {
		let view = PageElement::new("button")
			.attr("disabled", "false")
			.bool_attr("hidden", true)
			.into_page();
		assert_eq!(view.render_to_string(), "<button hidden=\"hidden\"></button>");
	}

	#[rstest]
	fn test_attr_opt() {
		let el = PageElement::new("a")
			.attr_opt("href", Some("/x"))
			.attr_opt("title", None::<String>);
		assert_eq!(el.get_attr("href"), Some("/x"));
		assert_eq!(el.get_attr("title"), None);
	}

	#[rstest]
	fn test_fragment_and_empty() {
		let view = Page::fragment(vec![Page::text("A"), Page::empty(), Page::text("B")]);
		assert_eq!(view.render_to_string(), "AB");
	}

	#[rstest]
	fn test_with_head_renders_body_only() {
		let view = Page::text("body").with_head(Head::new().title("T"));
		assert_eq!(view.render_to_string(), "body");
		assert_eq!(
			view.find_topmost_head().and_then(|h| h.title.as_deref()),
			Some("T")
		);
	}

	#[rstest]
	fn test_find_by_attr_and_find_all() {
		let view = PageElement::new("main")
			.child(PageElement::new("section").attr("data-section", "hero"))
			.child(PageElement::new("section").attr("data-section", "cta"))
			.into_page();

		assert!(view.find_by_attr("data-section", "cta").is_some());
		assert!(view.find_by_attr("data-section", "pricing").is_none());
		assert_eq!(view.find_all(&|el| el.tag_name() == "section").len(), 2);
	}

	#[rstest]
	fn test_dispatch_calls_matching_handlers_only() {
		let clicks = Arc::new(AtomicUsize::new(0));
		let handler = Handler::new({
			let clicks = Arc::clone(&clicks);
			move |_: &EventPayload| {
				clicks.fetch_add(1, Ordering::SeqCst);
			}
		});
		let button = PageElement::new("button").on(EventType::Click, handler);

		assert_eq!(button.dispatch(&EventPayload::click()), 1);
		assert_eq!(button.dispatch(&EventPayload::new(EventType::Submit)), 0);
		assert_eq!(clicks.load(Ordering::SeqCst), 1);
		assert!(button.has_handler(EventType::Click));
		assert!(!PageElement::new("button").on_opt(EventType::Click, None).has_handler(EventType::Click));
	}

	#[rstest]
	fn test_text_content() {
		let view = PageElement::new("div")
			.child("Hello, ")
			.child(PageElement::new("em").child("world"))
			.into_page();
		assert_eq!(view.text_content(), "Hello, world");
	}
}
