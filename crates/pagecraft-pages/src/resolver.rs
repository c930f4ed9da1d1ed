//! Icon and handler resolution.
//!
//! Section data refers to icons and callbacks by name. The functions here turn
//! those names into concrete values. A miss is never an error at this layer:
//! callers decide how to degrade.

use std::borrow::Cow;
use std::sync::Arc;

use indexmap::IndexMap;
use pagecraft_core::{Handler, HandlerRegistry, PageElement};

/// A renderable icon: its canonical name and SVG path data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRef {
	name: Cow<'static, str>,
	path: Cow<'static, str>,
}

impl IconRef {
	/// Creates an icon from its name and the `d` attribute of its path.
	pub fn new(name: impl Into<Cow<'static, str>>, path: impl Into<Cow<'static, str>>) -> Self {
		Self {
			name: name.into(),
			path: path.into(),
		}
	}

	/// Canonical (PascalCase) icon name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// SVG path data.
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Renders the icon as an inline 24x24 stroke SVG.
	pub fn to_element(&self) -> PageElement {
		PageElement::new("svg")
			.attr("class", "icon")
			.attr("data-icon", self.name.clone())
			.attr("xmlns", "http://www.w3.org/2000/svg")
			.attr("viewBox", "0 0 24 24")
			.attr("fill", "none")
			.attr("stroke", "currentColor")
			.attr("stroke-width", "2")
			.attr("aria-hidden", "true")
			.child(PageElement::new("path").attr("d", self.path.clone()))
	}
}

const BUILTIN_ICONS: &[(&str, &str)] = &[
	("ArrowRight", "M5 12h14M12 5l7 7-7 7"),
	("Award", "M12 15a7 7 0 1 0 0-14 7 7 0 0 0 0 14zM8.21 13.89 7 23l5-3 5 3-1.21-9.12"),
	("Briefcase", "M20 7H4a2 2 0 0 0-2 2v10a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V9a2 2 0 0 0-2-2zM16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"),
	("Calendar", "M19 4H5a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6a2 2 0 0 0-2-2zM16 2v4M8 2v4M3 10h18"),
	("Check", "M20 6 9 17l-5-5"),
	("CheckCircle", "M22 11.08V12a10 10 0 1 1-5.93-9.14M22 4 12 14.01l-3-3"),
	("Clock", "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20zM12 6v6l4 2"),
	("Globe", "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20zM2 12h20M12 2a15.3 15.3 0 0 1 0 20 15.3 15.3 0 0 1 0-20"),
	("Heart", "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7z"),
	("Home", "M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2zM9 22V12h6v10"),
	("Lock", "M19 11H5a2 2 0 0 0-2 2v7a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-7a2 2 0 0 0-2-2zM7 11V7a5 5 0 0 1 10 0v4"),
	("Mail", "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2zM22 6l-10 7L2 6"),
	("MapPin", "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0zM12 13a3 3 0 1 0 0-6 3 3 0 0 0 0 6z"),
	("MessageCircle", "M7.9 20A9 9 0 1 0 4 16.1L2 22z"),
	("Phone", "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6A19.79 19.79 0 0 1 2.12 4.18 2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z"),
	("Scale", "M16 16l3-8 3 8c-.87.65-1.92 1-3 1s-2.13-.35-3-1zM2 16l3-8 3 8c-.87.65-1.92 1-3 1s-2.13-.35-3-1zM7 21h10M12 3v18M3 7h18"),
	("Shield", "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"),
	("ShieldCheck", "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10zM9 12l2 2 4-4"),
	("Smile", "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20zM8 14s1.5 2 4 2 4-2 4-2M9 9h.01M15 9h.01"),
	("Sparkles", "M12 3l1.9 5.8L20 10.7l-6.1 1.9L12 18.5l-1.9-5.9L4 10.7l6.1-1.9z"),
	("Star", "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01z"),
	("Stethoscope", "M4.8 2.3A.3.3 0 1 0 5 2H4a2 2 0 0 0-2 2v5a6 6 0 0 0 6 6 6 6 0 0 0 6-6V4a2 2 0 0 0-2-2h-1a.2.2 0 1 0 .3.3M8 15v1a6 6 0 0 0 6 6 6 6 0 0 0 6-6v-4M20 10a2 2 0 1 0 0 4 2 2 0 0 0 0-4z"),
	("TrendingUp", "M23 6l-9.5 9.5-5-5L1 18M17 6h6v6"),
	("User", "M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2M12 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z"),
	("Users", "M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8zM23 21v-2a4 4 0 0 0-3-3.87M16 3.13a4 4 0 0 1 0 7.75"),
	("Zap", "M13 2 3 14h9l-1 8 10-12h-9l1-8z"),
];

/// Name-indexed icon collection.
#[derive(Debug, Clone, Default)]
pub struct IconSet {
	icons: IndexMap<Cow<'static, str>, IconRef>,
}

impl IconSet {
	/// Creates an empty set.
	pub fn new() -> Self {
		Self::default()
	}

	/// The built-in marketing icon set.
	pub fn builtin() -> Self {
		BUILTIN_ICONS
			.iter()
			.map(|(name, path)| IconRef::new(*name, *path))
			.collect()
	}

	/// Adds an icon, replacing any icon with the same name.
	pub fn insert(&mut self, icon: IconRef) {
		self.icons.insert(icon.name.clone(), icon);
	}

	/// Adds an icon (builder form).
	pub fn with(mut self, icon: IconRef) -> Self {
		self.insert(icon);
		self
	}

	/// Exact-name lookup.
	pub fn get(&self, name: &str) -> Option<&IconRef> {
		self.icons.get(name)
	}

	/// Icon names in insertion order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.icons.keys().map(|k| k.as_ref())
	}

	/// Number of icons.
	pub fn len(&self) -> usize {
		self.icons.len()
	}

	/// Returns `true` if the set has no icons.
	pub fn is_empty(&self) -> bool {
		self.icons.is_empty()
	}
}

impl FromIterator<IconRef> for IconSet {
	fn from_iter<I: IntoIterator<Item = IconRef>>(iter: I) -> Self {
		let mut set = Self::new();
		for icon in iter {
			set.insert(icon);
		}
		set
	}
}

/// Resolves an icon name against `set`.
///
/// Candidates are tried in order: the name as given, the name with its first
/// letter capitalised, then the PascalCase form with `-`, `_` and whitespace
/// separators removed. A miss is logged and yields `None`.
pub fn resolve_icon(set: &IconSet, name: &str) -> Option<IconRef> {
	let trimmed = name.trim();
	if trimmed.is_empty() {
		tracing::warn!("empty icon name");
		return None;
	}

	let candidates = [
		Cow::Borrowed(trimmed),
		Cow::Owned(capitalize_first(trimmed)),
		Cow::Owned(pascal_case(trimmed)),
	];
	if let Some(icon) = candidates.iter().find_map(|c| set.get(c)) {
		return Some(icon.clone());
	}

	tracing::warn!(icon = %name, "icon not found in icon set");
	None
}

/// Looks up a named handler. Absence is not an error.
pub fn resolve_handler(name: Option<&str>, handlers: &HandlerRegistry) -> Option<Handler> {
	name.and_then(|name| handlers.get(name)).cloned()
}

fn capitalize_first(s: &str) -> String {
	let mut chars = s.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

fn pascal_case(s: &str) -> String {
	let mut out = String::with_capacity(s.len());
	let mut upper_next = true;
	for c in s.chars() {
		if c == '-' || c == '_' || c.is_whitespace() {
			upper_next = true;
		} else if upper_next {
			out.extend(c.to_uppercase());
			upper_next = false;
		} else {
			out.push(c);
		}
	}
	out
}

/// Shared icon lookup used by the dispatcher.
#[derive(Debug, Clone)]
pub struct IconResolver {
	set: Arc<IconSet>,
}

impl IconResolver {
	/// Wraps an icon set.
	pub fn new(set: IconSet) -> Self {
		Self { set: Arc::new(set) }
	}

	/// Resolves `name` with [`resolve_icon`].
	pub fn resolve(&self, name: &str) -> Option<IconRef> {
		resolve_icon(&self.set, name)
	}

	/// The underlying set.
	pub fn set(&self) -> &IconSet {
		&self.set
	}
}

impl Default for IconResolver {
	fn default() -> Self {
		Self::new(IconSet::builtin())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pagecraft_core::{EventPayload, IntoPage};
	use rstest::rstest;

	#[rstest]
	#[case("CheckCircle", "CheckCircle")]
	#[case("star", "Star")]
	#[case("check-circle", "CheckCircle")]
	#[case("check_circle", "CheckCircle")]
	#[case("map pin", "MapPin")]
	#[case("shieldCheck", "ShieldCheck")]
	#[case("  zap  ", "Zap")]
	fn test_resolve_icon_variants(#[case] input: &str, #[case] expected: &str) {
		let set = IconSet::builtin();
		let icon = resolve_icon(&set, input).unwrap();
		assert_eq!(icon.name(), expected);
	}

	#[rstest]
	#[case("nonexistent-icon")]
	#[case("")]
	#[case("   ")]
	#[case("--")]
	fn test_resolve_icon_miss(#[case] input: &str) {
		assert!(resolve_icon(&IconSet::builtin(), input).is_none());
	}

	#[rstest]
	fn test_exact_match_wins() {
		let set = IconSet::new()
			.with(IconRef::new("star", "M0 0"))
			.with(IconRef::new("Star", "M1 1"));

		assert_eq!(resolve_icon(&set, "star").unwrap().path(), "M0 0");
	}

	#[rstest]
	fn test_icon_element() {
		let icon = IconSet::builtin().get("Check").cloned().unwrap();
		let html = icon.to_element().into_page().render_to_string();

		assert!(html.starts_with("<svg class=\"icon\" data-icon=\"Check\""));
		assert!(html.contains("<path d=\"M20 6 9 17l-5-5\"></path>"));
	}

	#[rstest]
	fn test_resolve_handler() {
		let handlers = HandlerRegistry::new().with("book", |_: &EventPayload| {});

		assert!(resolve_handler(Some("book"), &handlers).is_some());
		assert!(resolve_handler(Some("call"), &handlers).is_none());
		assert!(resolve_handler(None, &handlers).is_none());
	}

	#[rstest]
	fn test_builtin_names_are_pascal_case() {
		let set = IconSet::builtin();
		assert_eq!(set.len(), BUILTIN_ICONS.len());
		for name in set.names() {
			assert_eq!(pascal_case(name), name);
		}
	}
}
