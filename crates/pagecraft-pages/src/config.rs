//! Page configuration model.
//!
//! A [`PageConfig`] is the JSON wire contract of the builder: an ordered list
//! of [`SectionDescriptor`]s plus optional page metadata and brand colours.
//! Deserialization is deliberately lenient. A `sections` value that is not a
//! list, a section entry that is not an object, or a missing `type`/`data`
//! all deserialize successfully so that [`validate_page_config`] can report
//! them as structured errors instead of failing the whole parse.
//!
//! [`validate_page_config`]: crate::validation::validate_page_config

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use pagecraft_core::HandlerRegistry;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The closed set of section kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
	/// Large heading block with calls to action.
	Hero,
	/// Grid of icon + title + description items.
	Features,
	/// Customer quotes.
	Testimonials,
	/// Call-to-action banner.
	Cta,
	/// Pricing plan cards.
	Pricing,
	/// Contact form.
	Contact,
}

impl SectionType {
	/// All section types, in declaration order.
	pub const ALL: [SectionType; 6] = [
		Self::Hero,
		Self::Features,
		Self::Testimonials,
		Self::Cta,
		Self::Pricing,
		Self::Contact,
	];

	/// The `type` string used in configurations.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Hero => "hero",
			Self::Features => "features",
			Self::Testimonials => "testimonials",
			Self::Cta => "cta",
			Self::Pricing => "pricing",
			Self::Contact => "contact",
		}
	}
}

impl fmt::Display for SectionType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for SectionType {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|t| t.as_str() == s)
			.ok_or_else(|| s.to_string())
	}
}

/// One entry of a page's section list.
///
/// The descriptor keeps `data` as raw JSON; its type-dependent shape is only
/// interpreted by validation and by the dispatcher.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct SectionDescriptor {
	/// The `type` string, if present.
	#[serde(rename = "type", skip_serializing_if = "Option::is_none")]
	pub section_type: Option<String>,
	/// Optional element id.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	/// Type-dependent payload.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub data: Option<Value>,
	/// Extra CSS class names for the section wrapper.
	#[serde(rename = "className", skip_serializing_if = "Option::is_none")]
	pub class_name: Option<String>,
	/// Inline style declarations for the section wrapper.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub style: Option<IndexMap<String, String>>,
}

impl SectionDescriptor {
	/// Creates a descriptor with a type and data payload.
	pub fn new(section_type: SectionType, data: Value) -> Self {
		Self {
			section_type: Some(section_type.as_str().to_string()),
			data: Some(data),
			..Self::default()
		}
	}

	/// Sets the element id.
	pub fn with_id(mut self, id: impl Into<String>) -> Self {
		self.id = Some(id.into());
		self
	}

	/// Sets the extra class names.
	pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
		self.class_name = Some(class_name.into());
		self
	}

	/// Adds an inline style declaration.
	pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
		self.style
			.get_or_insert_with(IndexMap::new)
			.insert(property.into(), value.into());
		self
	}

	/// Parses the `type` string into the closed [`SectionType`] set.
	pub fn parsed_type(&self) -> Option<SectionType> {
		self.section_type.as_deref().and_then(|t| t.parse().ok())
	}

	/// The data payload when it is a JSON object.
	pub fn data_object(&self) -> Option<&serde_json::Map<String, Value>> {
		self.data.as_ref().and_then(Value::as_object)
	}
}

impl From<Value> for SectionDescriptor {
	fn from(value: Value) -> Self {
		let Value::Object(mut map) = value else {
			return Self::default();
		};
		let string_field = |v: Option<Value>| match v {
			Some(Value::String(s)) => Some(s),
			_ => None,
		};
		let style = match map.remove("style") {
			Some(Value::Object(entries)) => Some(
				entries
					.into_iter()
					.filter_map(|(k, v)| match v {
						Value::String(s) => Some((k, s)),
						Value::Number(n) => Some((k, n.to_string())),
						_ => None,
					})
					.collect(),
			),
			_ => None,
		};
		Self {
			section_type: string_field(map.remove("type")),
			id: string_field(map.remove("id")),
			data: map.remove("data").filter(|v| !v.is_null()),
			class_name: string_field(map.remove("className")),
			style,
		}
	}
}

/// Page-level metadata applied to the document head.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMeta {
	/// Document title.
	pub title: Option<String>,
	/// `<meta name="description">` content.
	pub description: Option<String>,
	/// Joined with `", "` into `<meta name="keywords">`.
	pub keywords: Vec<String>,
}

/// Brand colour overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeColors {
	/// Primary brand colour.
	pub primary: Option<String>,
	/// Secondary brand colour.
	pub secondary: Option<String>,
	/// Accent colour.
	pub accent: Option<String>,
}

/// Page-level theme overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageTheme {
	/// Colour overrides.
	pub colors: ThemeColors,
}

/// A complete page configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageConfig {
	/// Optional page id, used as the `id` of the page wrapper.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	/// Ordered section list. `None` when absent or not a list.
	#[serde(default, deserialize_with = "deserialize_sections")]
	pub sections: Option<Vec<SectionDescriptor>>,
	/// Named callbacks referenced from section data. Never serialized.
	#[serde(skip)]
	pub handlers: HandlerRegistry,
	/// Head metadata.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub meta: Option<PageMeta>,
	/// Brand colour overrides.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub theme: Option<PageTheme>,
}

fn deserialize_sections<'de, D>(deserializer: D) -> Result<Option<Vec<SectionDescriptor>>, D::Error>
where
	D: Deserializer<'de>,
{
	let value = Value::deserialize(deserializer)?;
	Ok(match value {
		Value::Array(items) => Some(items.into_iter().map(SectionDescriptor::from).collect()),
		_ => None,
	})
}

impl PageConfig {
	/// Creates a configuration from a section list.
	pub fn new(sections: Vec<SectionDescriptor>) -> Self {
		Self {
			sections: Some(sections),
			..Self::default()
		}
	}

	/// Parses a configuration from JSON.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}

	/// Serializes the configuration (without handlers) to JSON.
	pub fn to_json(&self) -> Result<String, serde_json::Error> {
		serde_json::to_string(self)
	}

	/// Sets the handler registry.
	pub fn with_handlers(mut self, handlers: HandlerRegistry) -> Self {
		self.handlers = handlers;
		self
	}

	/// Sets the head metadata.
	pub fn with_meta(mut self, meta: PageMeta) -> Self {
		self.meta = Some(meta);
		self
	}

	/// Sets the brand colours.
	pub fn with_colors(mut self, colors: ThemeColors) -> Self {
		self.theme = Some(PageTheme { colors });
		self
	}

	/// Sets the page id.
	pub fn with_id(mut self, id: impl Into<String>) -> Self {
		self.id = Some(id.into());
		self
	}

	/// The section list, empty when absent.
	pub fn section_list(&self) -> &[SectionDescriptor] {
		self.sections.as_deref().unwrap_or_default()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case("hero", Some(SectionType::Hero))]
	#[case("pricing", Some(SectionType::Pricing))]
	#[case("Hero", None)]
	#[case("gallery", None)]
	fn test_section_type_parse(#[case] input: &str, #[case] expected: Option<SectionType>) {
		assert_eq!(input.parse::<SectionType>().ok(), expected);
	}

	#[rstest]
	fn test_parse_full_config() {
		let config = PageConfig::from_json(
			r##"{
				"id": "home",
				"sections": [
					{"type": "hero", "id": "top", "className": "dark", "style": {"padding": "4rem"},
					 "data": {"title": "T", "subtitle": "S"}}
				],
				"meta": {"title": "Home", "keywords": ["a", "b"]},
				"theme": {"colors": {"primary": "#123456"}}
			}"##,
		)
		.unwrap();

		let section = &config.section_list()[0];
		assert_eq!(config.id.as_deref(), Some("home"));
		assert_eq!(section.parsed_type(), Some(SectionType::Hero));
		assert_eq!(section.id.as_deref(), Some("top"));
		assert_eq!(section.class_name.as_deref(), Some("dark"));
		assert_eq!(
			section.style.as_ref().and_then(|s| s.get("padding")).map(String::as_str),
			Some("4rem")
		);
		assert_eq!(config.meta.unwrap().keywords, vec!["a", "b"]);
		assert_eq!(
			config.theme.unwrap().colors.primary.as_deref(),
			Some("#123456")
		);
	}

	#[rstest]
	#[case(json!({}))]
	#[case(json!({"sections": "hero"}))]
	#[case(json!({"sections": {"type": "hero"}}))]
	#[case(json!({"sections": null}))]
	fn test_non_list_sections_become_none(#[case] value: Value) {
		let config: PageConfig = serde_json::from_value(value).unwrap();
		assert!(config.sections.is_none());
	}

	#[rstest]
	fn test_lenient_section_entries() {
		let config: PageConfig = serde_json::from_value(json!({
			"sections": [42, {"type": 7, "data": null}, {"type": "cta"}]
		}))
		.unwrap();

		let sections = config.section_list();
		assert_eq!(sections.len(), 3);
		assert_eq!(sections[0], SectionDescriptor::default());
		assert!(sections[1].section_type.is_none());
		assert!(sections[1].data.is_none());
		assert_eq!(sections[2].parsed_type(), Some(SectionType::Cta));
		assert!(sections[2].data.is_none());
	}

	#[rstest]
	fn test_json_round_trip_skips_handlers() {
		let config = PageConfig::new(vec![
			SectionDescriptor::new(SectionType::Contact, json!({"title": "Hi", "onSubmit": "send"}))
				.with_id("contact"),
		])
		.with_handlers(HandlerRegistry::new().with("send", |_: &pagecraft_core::EventPayload| {}));

		let json = config.to_json().unwrap();
		assert!(!json.contains("handlers"));

		let parsed = PageConfig::from_json(&json).unwrap();
		assert_eq!(parsed.section_list(), config.section_list());
		assert!(parsed.handlers.is_empty());
	}
}
