//! Template registry.
//!
//! Templates are registered once at start-up and looked up read-only
//! afterwards. Category, industry and tag listings are derived from the
//! registered templates on every call rather than maintained as indices.

use std::path::Path;

use indexmap::{IndexMap, IndexSet};
use pagecraft_conf::Settings;
use serde::Deserialize;

use crate::config::TemplateConfig;
use crate::error::{TemplateError, TemplateResult};

#[derive(Deserialize)]
#[serde(untagged)]
enum TemplateDocument {
	Many(Vec<TemplateConfig>),
	One(Box<TemplateConfig>),
}

/// In-memory map from template id to [`TemplateConfig`].
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
	templates: IndexMap<String, TemplateConfig>,
}

impl TemplateRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a registry holding every template file listed under
	/// `[templates] paths`.
	pub fn from_settings(settings: &Settings) -> TemplateResult<Self> {
		let mut registry = Self::new();
		for path in settings.template_paths() {
			registry.load_file(&path)?;
		}
		Ok(registry)
	}

	/// Adds a template.
	///
	/// Fails if the id is empty or already registered; the registry is left
	/// unchanged in both cases.
	pub fn register(&mut self, template: TemplateConfig) -> TemplateResult<()> {
		if template.id.trim().is_empty() {
			return Err(TemplateError::EmptyId);
		}
		if self.templates.contains_key(&template.id) {
			return Err(TemplateError::AlreadyRegistered { id: template.id });
		}
		tracing::debug!(id = %template.id, category = %template.category, "template registered");
		self.templates.insert(template.id.clone(), template);
		Ok(())
	}

	/// Registers the template or array of templates in `json`.
	///
	/// Returns the number of templates added. Templates before a failing
	/// one stay registered.
	pub fn load_json(&mut self, json: &str) -> TemplateResult<usize> {
		let templates = match serde_json::from_str(json)? {
			TemplateDocument::Many(templates) => templates,
			TemplateDocument::One(template) => vec![*template],
		};
		let count = templates.len();
		for template in templates {
			self.register(template)?;
		}
		Ok(count)
	}

	/// Reads `path` and registers its templates.
	pub fn load_file(&mut self, path: impl AsRef<Path>) -> TemplateResult<usize> {
		let path = path.as_ref();
		let json = std::fs::read_to_string(path).map_err(|source| TemplateError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		let count = self.load_json(&json)?;
		tracing::debug!(path = %path.display(), count, "template file loaded");
		Ok(count)
	}

	/// Looks up a template by id.
	pub fn get(&self, id: &str) -> Option<&TemplateConfig> {
		self.templates.get(id)
	}

	/// Returns `true` if `id` is registered.
	pub fn contains(&self, id: &str) -> bool {
		self.templates.contains_key(id)
	}

	/// Number of registered templates.
	pub fn len(&self) -> usize {
		self.templates.len()
	}

	/// Returns `true` if nothing is registered.
	pub fn is_empty(&self) -> bool {
		self.templates.is_empty()
	}

	/// All templates in registration order.
	pub fn all(&self) -> impl Iterator<Item = &TemplateConfig> {
		self.templates.values()
	}

	/// Templates in `category` (exact match).
	pub fn by_category(&self, category: &str) -> Vec<&TemplateConfig> {
		self.all().filter(|t| t.category == category).collect()
	}

	/// Templates for `industry` (exact match).
	pub fn by_industry(&self, industry: &str) -> Vec<&TemplateConfig> {
		self.all()
			.filter(|t| t.industry.as_deref() == Some(industry))
			.collect()
	}

	/// Templates carrying `tag`, ignoring case.
	pub fn by_tag(&self, tag: &str) -> Vec<&TemplateConfig> {
		let tag = tag.to_lowercase();
		self.all()
			.filter(|t| t.tags.iter().any(|candidate| candidate.to_lowercase() == tag))
			.collect()
	}

	/// Templates whose name, description, category, industry or tags
	/// contain `query`, ignoring case. A blank query matches everything.
	pub fn search(&self, query: &str) -> Vec<&TemplateConfig> {
		let needle = query.trim().to_lowercase();
		self.all().filter(|t| t.matches(&needle)).collect()
	}

	/// Distinct categories in first-seen order.
	pub fn categories(&self) -> Vec<&str> {
		self.all()
			.map(|t| t.category.as_str())
			.collect::<IndexSet<_>>()
			.into_iter()
			.collect()
	}

	/// Distinct industries in first-seen order.
	pub fn industries(&self) -> Vec<&str> {
		self.all()
			.filter_map(|t| t.industry.as_deref())
			.collect::<IndexSet<_>>()
			.into_iter()
			.collect()
	}

	/// Distinct tags in first-seen order, compared exactly.
	pub fn tags(&self) -> Vec<&str> {
		self.all()
			.flat_map(|t| t.tags.iter().map(String::as_str))
			.collect::<IndexSet<_>>()
			.into_iter()
			.collect()
	}
}

impl FromIterator<TemplateConfig> for TemplateRegistry {
	/// Builds a registry, keeping the first template for each duplicate id.
	fn from_iter<I: IntoIterator<Item = TemplateConfig>>(iter: I) -> Self {
		let mut registry = Self::new();
		for template in iter {
			if let Err(err) = registry.register(template) {
				tracing::warn!(error = %err, "skipping template");
			}
		}
		registry
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};

	#[fixture]
	fn registry() -> TemplateRegistry {
		[
			TemplateConfig::new("lawyer", "Law Firm", "professional")
				.with_industry("legal")
				.with_tags(["Attorney", "consultation"]),
			TemplateConfig::new("dentist", "Bright Smile", "health")
				.with_industry("dental")
				.with_description("Family dentistry with online booking")
				.with_tags(["booking", "family"]),
			TemplateConfig::new("accountant", "Ledger & Co", "professional")
				.with_industry("finance")
				.with_tags(["consultation", "tax"]),
		]
		.into_iter()
		.collect()
	}

	#[rstest]
	fn test_register_duplicate(mut registry: TemplateRegistry) {
		let err = registry
			.register(TemplateConfig::new("lawyer", "Other", "other"))
			.unwrap_err();

		assert!(matches!(err, TemplateError::AlreadyRegistered { ref id } if id == "lawyer"));
		assert_eq!(registry.get("lawyer").unwrap().name, "Law Firm");
		assert_eq!(registry.len(), 3);
	}

	#[rstest]
	#[case("")]
	#[case("   ")]
	fn test_register_empty_id(#[case] id: &str) {
		let mut registry = TemplateRegistry::new();
		let err = registry.register(TemplateConfig::new(id, "x", "y")).unwrap_err();
		assert!(matches!(err, TemplateError::EmptyId));
		assert!(registry.is_empty());
	}

	#[rstest]
	fn test_all_in_registration_order(registry: TemplateRegistry) {
		let ids: Vec<&str> = registry.all().map(|t| t.id.as_str()).collect();
		assert_eq!(ids, vec!["lawyer", "dentist", "accountant"]);
	}

	#[rstest]
	#[case("professional", &["lawyer", "accountant"])]
	#[case("health", &["dentist"])]
	#[case("Professional", &[])]
	fn test_by_category(registry: TemplateRegistry, #[case] category: &str, #[case] expected: &[&str]) {
		let ids: Vec<&str> = registry.by_category(category).iter().map(|t| t.id.as_str()).collect();
		assert_eq!(ids, expected);
	}

	#[rstest]
	fn test_by_industry(registry: TemplateRegistry) {
		assert_eq!(registry.by_industry("dental")[0].id, "dentist");
		assert!(registry.by_industry("retail").is_empty());
	}

	#[rstest]
	#[case("attorney", &["lawyer"])]
	#[case("CONSULTATION", &["lawyer", "accountant"])]
	#[case("consult", &[])]
	fn test_by_tag(registry: TemplateRegistry, #[case] tag: &str, #[case] expected: &[&str]) {
		let ids: Vec<&str> = registry.by_tag(tag).iter().map(|t| t.id.as_str()).collect();
		assert_eq!(ids, expected);
	}

	#[rstest]
	#[case("family", &["dentist"])]
	#[case("FIN", &["accountant"])]
	#[case("consult", &["lawyer", "accountant"])]
	#[case("  ", &["lawyer", "dentist", "accountant"])]
	#[case("bakery", &[])]
	fn test_search(registry: TemplateRegistry, #[case] query: &str, #[case] expected: &[&str]) {
		let ids: Vec<&str> = registry.search(query).iter().map(|t| t.id.as_str()).collect();
		assert_eq!(ids, expected);
	}

	#[rstest]
	fn test_derived_listings(registry: TemplateRegistry) {
		assert_eq!(registry.categories(), vec!["professional", "health"]);
		assert_eq!(registry.industries(), vec!["legal", "dental", "finance"]);
		assert_eq!(
			registry.tags(),
			vec!["Attorney", "consultation", "booking", "family", "tax"]
		);
	}

	#[rstest]
	fn test_load_json_single_and_array() {
		let mut registry = TemplateRegistry::new();

		let one = registry
			.load_json(r#"{"id": "vet", "name": "Paws", "category": "health"}"#)
			.unwrap();
		let many = registry
			.load_json(
				r#"[
					{"id": "gym", "name": "Iron", "category": "fitness"},
					{"id": "yoga", "name": "Flow", "category": "fitness"}
				]"#,
			)
			.unwrap();

		assert_eq!((one, many), (1, 2));
		assert_eq!(registry.categories(), vec!["health", "fitness"]);
	}

	#[rstest]
	#[case("not json")]
	#[case(r#"{"id": "x"}"#)]
	#[case("42")]
	fn test_load_json_rejects_malformed(#[case] json: &str) {
		let mut registry = TemplateRegistry::new();
		assert!(matches!(registry.load_json(json), Err(TemplateError::Parse(_))));
		assert!(registry.is_empty());
	}

	#[rstest]
	fn test_load_json_keeps_templates_before_duplicate() {
		let mut registry = TemplateRegistry::new();
		let err = registry
			.load_json(
				r#"[
					{"id": "a", "name": "A", "category": "c"},
					{"id": "a", "name": "A2", "category": "c"}
				]"#,
			)
			.unwrap_err();

		assert!(matches!(err, TemplateError::AlreadyRegistered { .. }));
		assert!(registry.contains("a"));
		assert_eq!(registry.len(), 1);
	}
}
