//! Applying and removing flattened themes on document nodes.

use std::fmt;
use std::sync::Arc;

use pagecraft_conf::{ApplyPolicy, ThemeSettings};
use pagecraft_core::{DocumentSink, NodeTarget};

use crate::flatten::{StyleMap, flatten};
use crate::tokens::ThemeTokens;

/// Attribute carrying the active theme's name.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Property stems owned by the engine. A property `--<stem>` or
/// `--<stem>-...` is removed by [`ThemeEngine::remove`].
pub const ENGINE_PREFIXES: &[&str] = &[
	"color",
	"font",
	"line-height",
	"letter-spacing",
	"spacing",
	"radius",
	"shadow",
	"duration",
	"easing",
];

/// Returns `true` if `name` is a custom property the engine writes.
pub fn is_engine_property(name: &str) -> bool {
	let Some(rest) = name.strip_prefix("--") else {
		return false;
	};
	ENGINE_PREFIXES.iter().any(|stem| {
		rest.strip_prefix(stem)
			.is_some_and(|tail| tail.is_empty() || tail.starts_with('-'))
	})
}

/// Writes style maps to a [`DocumentSink`].
#[derive(Clone)]
pub struct ThemeEngine {
	sink: Arc<dyn DocumentSink>,
	policy: ApplyPolicy,
}

impl fmt::Debug for ThemeEngine {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ThemeEngine")
			.field("policy", &self.policy)
			.finish_non_exhaustive()
	}
}

impl ThemeEngine {
	/// Creates an engine with the [`ApplyPolicy::Merge`] policy.
	pub fn new(sink: Arc<dyn DocumentSink>) -> Self {
		Self {
			sink,
			policy: ApplyPolicy::default(),
		}
	}

	/// Creates an engine using the policy from the `[theme]` settings table.
	pub fn from_settings(settings: &ThemeSettings, sink: Arc<dyn DocumentSink>) -> Self {
		Self::new(sink).with_policy(settings.apply_policy)
	}

	/// Sets the apply policy.
	pub fn with_policy(mut self, policy: ApplyPolicy) -> Self {
		self.policy = policy;
		self
	}

	/// The apply policy.
	pub fn policy(&self) -> ApplyPolicy {
		self.policy
	}

	/// The sink written to.
	pub fn sink(&self) -> &Arc<dyn DocumentSink> {
		&self.sink
	}

	/// Writes every property of `styles` to `target`, then sets
	/// `data-theme` to `theme_name`.
	///
	/// Under [`ApplyPolicy::Replace`] engine-owned properties are removed
	/// first; under [`ApplyPolicy::Merge`] properties the new map does not
	/// define keep their previous values.
	pub fn apply(&self, styles: &StyleMap, theme_name: &str, target: &NodeTarget) {
		if self.policy == ApplyPolicy::Replace {
			self.remove(target);
		}
		for (name, value) in styles.iter() {
			self.sink.set_property(target, name, value);
		}
		self.sink.set_attribute(target, THEME_ATTRIBUTE, theme_name);
		tracing::debug!(
			theme = theme_name,
			properties = styles.len(),
			target = ?target,
			policy = ?self.policy,
			"theme applied"
		);
	}

	/// Flattens and applies `tokens`, returning the applied map.
	pub fn apply_tokens(&self, tokens: &ThemeTokens, target: &NodeTarget) -> StyleMap {
		let styles = flatten(tokens);
		self.apply(&styles, tokens.name(), target);
		styles
	}

	/// Removes every engine-owned property and the `data-theme` attribute
	/// from `target`. Other properties are left untouched.
	pub fn remove(&self, target: &NodeTarget) {
		let owned: Vec<String> = self
			.sink
			.property_names(target)
			.into_iter()
			.filter(|name| is_engine_property(name))
			.collect();
		for name in &owned {
			self.sink.remove_property(target, name);
		}
		self.sink.remove_attribute(target, THEME_ATTRIBUTE);
		tracing::debug!(removed = owned.len(), target = ?target, "theme removed");
	}
}
