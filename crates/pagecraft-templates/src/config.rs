//! Template configuration model.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Whether and where a template section appears.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SectionToggleConfig {
	/// Section is rendered.
	pub enabled: bool,
	/// Position among enabled sections; unordered sections come last.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub order: Option<u32>,
	/// Renderer variant, e.g. `split` for a hero.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub variant: Option<String>,
}

impl Default for SectionToggleConfig {
	fn default() -> Self {
		Self {
			enabled: true,
			order: None,
			variant: None,
		}
	}
}

/// Search engine metadata for pages built from a template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoConfig {
	/// Page title.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	/// Meta description.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	/// Meta keywords.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub keywords: Vec<String>,
}

/// A static landing page template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateConfig {
	/// Registry key.
	pub id: String,
	/// Display name.
	pub name: String,
	/// Category, e.g. `professional`.
	pub category: String,
	/// Free-form content variables (business name, phone, ...).
	#[serde(default)]
	pub variables: IndexMap<String, Value>,
	/// Section toggles keyed by section name, in declaration order.
	#[serde(default)]
	pub sections: IndexMap<String, SectionToggleConfig>,
	/// SEO defaults.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub seo: Option<SeoConfig>,
	/// Search tags.
	#[serde(default)]
	pub tags: Vec<String>,
	/// Industry, e.g. `legal`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub industry: Option<String>,
	/// Short description.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
}

impl TemplateConfig {
	/// Creates a template with no variables, sections or tags.
	pub fn new(id: impl Into<String>, name: impl Into<String>, category: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			category: category.into(),
			variables: IndexMap::new(),
			sections: IndexMap::new(),
			seo: None,
			tags: Vec::new(),
			industry: None,
			description: None,
		}
	}

	/// Sets the industry.
	pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
		self.industry = Some(industry.into());
		self
	}

	/// Sets the description.
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	/// Appends tags.
	pub fn with_tags<I, S>(mut self, tags: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.tags.extend(tags.into_iter().map(Into::into));
		self
	}

	/// Adds or replaces a section toggle.
	pub fn with_section(mut self, name: impl Into<String>, toggle: SectionToggleConfig) -> Self {
		self.sections.insert(name.into(), toggle);
		self
	}

	/// Sets a content variable.
	pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.variables.insert(name.into(), value.into());
		self
	}

	/// A content variable as a string, if it is one.
	pub fn variable_str(&self, name: &str) -> Option<&str> {
		self.variables.get(name).and_then(Value::as_str)
	}

	/// Names of enabled sections, by `order` and then declaration order.
	pub fn enabled_sections(&self) -> Vec<&str> {
		let mut enabled: Vec<(usize, &str, Option<u32>)> = self
			.sections
			.iter()
			.enumerate()
			.filter(|(_, (_, toggle))| toggle.enabled)
			.map(|(index, (name, toggle))| (index, name.as_str(), toggle.order))
			.collect();
		enabled.sort_by_key(|&(index, _, order)| (order.is_none(), order, index));
		enabled.into_iter().map(|(_, name, _)| name).collect()
	}

	/// Case-insensitive substring match over name, description, category,
	/// industry and tags. `needle` must already be lowercase.
	pub(crate) fn matches(&self, needle: &str) -> bool {
		let hit = |text: &str| text.to_lowercase().contains(needle);
		hit(&self.name)
			|| hit(&self.category)
			|| self.description.as_deref().is_some_and(hit)
			|| self.industry.as_deref().is_some_and(hit)
			|| self.tags.iter().any(|tag| hit(tag))
	}
}
