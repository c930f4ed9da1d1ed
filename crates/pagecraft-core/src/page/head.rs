//! Head section types.
//!
//! A [`Head`] collects the document title and named meta tags a page wants in
//! its `<head>`. Hosts that render on the server serialize it with
//! [`Head::to_html`]; browser hosts apply the same values through a
//! [`DocumentSink`](crate::DocumentSink).

use std::borrow::Cow;

use super::util::html_escape;

/// A `<meta name=".." content="..">` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
	/// The `name` attribute.
	pub name: Cow<'static, str>,
	/// The `content` attribute.
	pub content: Cow<'static, str>,
}

impl MetaTag {
	/// Creates a named meta tag.
	pub fn new(name: impl Into<Cow<'static, str>>, content: impl Into<Cow<'static, str>>) -> Self {
		Self {
			name: name.into(),
			content: content.into(),
		}
	}

	/// Renders the tag to HTML.
	pub fn to_html(&self) -> String {
		format!(
			"<meta name=\"{}\" content=\"{}\" />",
			html_escape(&self.name),
			html_escape(&self.content)
		)
	}
}

/// Document head contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Head {
	/// Document title.
	pub title: Option<Cow<'static, str>>,
	/// Named meta tags, at most one per name.
	pub meta_tags: Vec<MetaTag>,
}

impl Head {
	/// Creates an empty head.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the title.
	pub fn title(mut self, title: impl Into<Cow<'static, str>>) -> Self {
		self.title = Some(title.into());
		self
	}

	/// Adds a meta tag, replacing the content of an existing tag with the same name.
	pub fn meta(mut self, tag: MetaTag) -> Self {
		self.upsert_meta(tag);
		self
	}

	/// Inserts or updates a meta tag in place.
	pub fn upsert_meta(&mut self, tag: MetaTag) {
		match self.meta_tags.iter_mut().find(|m| m.name == tag.name) {
			Some(existing) => existing.content = tag.content,
			None => self.meta_tags.push(tag),
		}
	}

	/// Looks up a meta tag's content by name.
	pub fn meta_content(&self, name: &str) -> Option<&str> {
		self.meta_tags
			.iter()
			.find(|m| m.name == name)
			.map(|m| m.content.as_ref())
	}

	/// Returns `true` when neither a title nor any meta tag is set.
	pub fn is_empty(&self) -> bool {
		self.title.is_none() && self.meta_tags.is_empty()
	}

	/// Renders the head contents (without the surrounding `<head>` tag).
	pub fn to_html(&self) -> String {
		let mut html = String::new();
		if let Some(title) = &self.title {
			html.push_str("<title>");
			html.push_str(&html_escape(title));
			html.push_str("</title>");
		}
		for tag in &self.meta_tags {
			html.push_str(&tag.to_html());
		}
		html
	}
}
