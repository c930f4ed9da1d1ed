//! Token flattening.
//!
//! Each token group maps to a fixed CSS custom-property prefix:
//!
//! | token path                 | property prefix     |
//! |----------------------------|---------------------|
//! | `colors`                   | `--color-`          |
//! | `typography.fontFamily`    | `--font-family-`    |
//! | `typography.fontSize`      | `--font-size-`      |
//! | `typography.fontWeight`    | `--font-weight-`    |
//! | `typography.lineHeight`    | `--line-height-`    |
//! | `typography.letterSpacing` | `--letter-spacing-` |
//! | `spacing`                  | `--spacing-`        |
//! | `borderRadius`             | `--radius-`         |
//! | `shadows`                  | `--shadow-`         |
//! | `animations.duration`      | `--duration-`       |
//! | `animations.easing`        | `--easing-`         |
//!
//! Below the prefix, keys are joined with `-` as written. Output order follows
//! the source's insertion order, group by group.

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::error::{ThemeError, ThemeResult};
use crate::tokens::{ThemeTokens, TokenGroup, TokenNode};

const TYPOGRAPHY_PREFIXES: &[(&str, &str)] = &[
	("fontFamily", "font-family"),
	("fontSize", "font-size"),
	("fontWeight", "font-weight"),
	("lineHeight", "line-height"),
	("letterSpacing", "letter-spacing"),
];

const ANIMATION_PREFIXES: &[(&str, &str)] = &[("duration", "duration"), ("easing", "easing")];

/// Ordered map of CSS custom property name (`--...`) to value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap {
	properties: IndexMap<String, String>,
}

impl StyleMap {
	/// Creates an empty map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Value of a property.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.properties.get(name).map(String::as_str)
	}

	/// Returns `true` if the property is present.
	pub fn contains(&self, name: &str) -> bool {
		self.properties.contains_key(name)
	}

	/// Iterates `(name, value)` pairs in order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.properties
			.iter()
			.map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Property names in order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.properties.keys().map(String::as_str)
	}

	/// Number of properties.
	pub fn len(&self) -> usize {
		self.properties.len()
	}

	/// Returns `true` if there are no properties.
	pub fn is_empty(&self) -> bool {
		self.properties.is_empty()
	}

	/// Renders `name: value;` declarations, one per line.
	pub fn to_css_declarations(&self) -> String {
		self.iter()
			.map(|(name, value)| format!("{name}: {value};"))
			.collect::<Vec<_>>()
			.join("\n")
	}

	/// Renders a complete rule for `selector`.
	pub fn to_css_rule(&self, selector: &str) -> String {
		let body: String = self
			.iter()
			.map(|(name, value)| format!("  {name}: {value};\n"))
			.collect();
		format!("{selector} {{\n{body}}}")
	}
}

impl<'a> IntoIterator for &'a StyleMap {
	type Item = (&'a String, &'a String);
	type IntoIter = indexmap::map::Iter<'a, String, String>;

	fn into_iter(self) -> Self::IntoIter {
		self.properties.iter()
	}
}

/// Flattens a theme into custom properties.
///
/// Never fails. Entries that [`ThemeTokens::validate`] would reject are
/// handled leniently: unknown typography or animation keys are skipped and a
/// colliding name keeps the later value.
pub fn flatten(tokens: &ThemeTokens) -> StyleMap {
	let mut flattener = Flattener::new(false);
	flattener.flatten(tokens);
	for issue in &flattener.issues {
		tracing::debug!(theme = %tokens.name(), issue = %issue, "lenient flatten");
	}
	flattener.finish()
}

/// Flattens a theme, failing on the first empty key, unknown group or name
/// collision.
pub fn flatten_checked(tokens: &ThemeTokens) -> ThemeResult<StyleMap> {
	let mut flattener = Flattener::new(true);
	flattener.flatten(tokens);
	match flattener.issues.into_iter().next() {
		Some(issue) => Err(issue),
		None => Ok(StyleMap {
			properties: flattener.map.into_iter().map(|(k, (v, _))| (k, v)).collect(),
		}),
	}
}

struct Flattener {
	strict: bool,
	/// property -> (value, source path)
	map: IndexMap<String, (String, String)>,
	issues: Vec<ThemeError>,
}

impl Flattener {
	fn new(strict: bool) -> Self {
		Self {
			strict,
			map: IndexMap::new(),
			issues: Vec::new(),
		}
	}

	fn flatten(&mut self, tokens: &ThemeTokens) {
		self.walk("color", "colors", &tokens.colors);
		self.walk_mapped("typography", TYPOGRAPHY_PREFIXES, &tokens.typography);
		self.walk("spacing", "spacing", &tokens.spacing);
		self.walk("radius", "borderRadius", &tokens.border_radius);
		self.walk("shadow", "shadows", &tokens.shadows);
		self.walk_mapped("animations", ANIMATION_PREFIXES, &tokens.animations);
	}

	fn walk_mapped(&mut self, group_name: &'static str, prefixes: &[(&str, &str)], group: &TokenGroup) {
		for (key, node) in group {
			let path = format!("{group_name}.{key}");
			match prefixes.iter().find(|(k, _)| k == key) {
				Some((_, prefix)) => self.node(prefix, &path, node),
				None => self.issues.push(ThemeError::UnknownGroup {
					group: group_name,
					key: key.clone(),
				}),
			}
		}
	}

	fn walk(&mut self, prefix: &str, path: &str, group: &TokenGroup) {
		for (key, node) in group {
			if key.is_empty() {
				self.issues.push(ThemeError::EmptyKey {
					path: path.to_string(),
				});
				continue;
			}
			self.node(&format!("{prefix}-{key}"), &format!("{path}.{key}"), node);
		}
	}

	fn node(&mut self, name: &str, path: &str, node: &TokenNode) {
		match node {
			TokenNode::Group(group) => self.walk(name, path, group),
			TokenNode::Value(value) => self.emit(format!("--{name}"), value.to_string(), path),
		}
	}

	fn emit(&mut self, property: String, value: String, path: &str) {
		match self.map.entry(property) {
			Entry::Vacant(entry) => {
				entry.insert((value, path.to_string()));
			}
			Entry::Occupied(mut entry) => {
				self.issues.push(ThemeError::Collision {
					property: entry.key().clone(),
					path: path.to_string(),
					existing: entry.get().1.clone(),
				});
				if !self.strict {
					*entry.get_mut() = (value, path.to_string());
				}
			}
		}
	}

	fn finish(self) -> StyleMap {
		StyleMap {
			properties: self.map.into_iter().map(|(k, (v, _))| (k, v)).collect(),
		}
	}
}
