//! Page configuration validation.
//!
//! [`validate_page_config`] checks a [`PageConfig`] against the per-type field
//! rules and collects every violation into a [`ValidationResult`]. It never
//! fails: malformed input is reported, not raised.
//!
//! ## Rules
//!
//! | type           | required fields                                     |
//! |----------------|-----------------------------------------------------|
//! | `hero`         | `title`, `subtitle`                                 |
//! | `features`     | `title`, non-empty `features`                       |
//! | `testimonials` | `title`, non-empty `testimonials`                   |
//! | `cta`          | `title`, `description`, `primaryCta`                |
//! | `pricing`      | `title`, non-empty `plans`                          |
//! | `contact`      | `title`, `onSubmit`                                 |
//!
//! Text fields must be non-blank strings. List fields fail with
//! `EMPTY_<FIELD>` whether they are missing or empty.

use std::fmt;

use indexmap::IndexSet;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::{PageConfig, SectionDescriptor, SectionType};

/// Keys whose string values name a handler in the page's registry.
pub const HANDLER_KEYS: &[&str] = &["onClick", "onSubmit", "onCtaClick"];

/// Machine-readable validation error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationCode {
	/// `sections` is absent or not a list.
	MissingSections,
	/// `sections` is an empty list.
	EmptySections,
	/// A section has no `type`.
	MissingType,
	/// A section's `type` is not one of the known section types.
	UnknownType,
	/// A section has no `data` object.
	MissingData,
	/// `data.title` is missing or blank.
	MissingTitle,
	/// `data.subtitle` is missing or blank.
	MissingSubtitle,
	/// `data.description` is missing or blank.
	MissingDescription,
	/// `data.primaryCta` is missing.
	MissingPrimaryCta,
	/// `data.onSubmit` is missing or blank.
	MissingOnSubmit,
	/// `data.features` is missing or empty.
	EmptyFeatures,
	/// `data.testimonials` is missing or empty.
	EmptyTestimonials,
	/// `data.plans` is missing or empty.
	EmptyPlans,
}

impl ValidationCode {
	/// The wire form of the code, e.g. `EMPTY_PLANS`.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::MissingSections => "MISSING_SECTIONS",
			Self::EmptySections => "EMPTY_SECTIONS",
			Self::MissingType => "MISSING_TYPE",
			Self::UnknownType => "UNKNOWN_TYPE",
			Self::MissingData => "MISSING_DATA",
			Self::MissingTitle => "MISSING_TITLE",
			Self::MissingSubtitle => "MISSING_SUBTITLE",
			Self::MissingDescription => "MISSING_DESCRIPTION",
			Self::MissingPrimaryCta => "MISSING_PRIMARY_CTA",
			Self::MissingOnSubmit => "MISSING_ON_SUBMIT",
			Self::EmptyFeatures => "EMPTY_FEATURES",
			Self::EmptyTestimonials => "EMPTY_TESTIMONIALS",
			Self::EmptyPlans => "EMPTY_PLANS",
		}
	}
}

impl fmt::Display for ValidationCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
	/// Dotted path to the offending value, e.g. `sections[1].data.plans`.
	pub path: String,
	/// Human readable description.
	pub message: String,
	/// Error code.
	pub code: ValidationCode,
}

impl ValidationError {
	fn new(path: impl Into<String>, message: impl Into<String>, code: ValidationCode) -> Self {
		Self {
			path: path.into(),
			message: message.into(),
			code,
		}
	}
}

impl fmt::Display for ValidationError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {} [{}]", self.path, self.message, self.code)
	}
}

/// Outcome of [`validate_page_config`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
	/// `true` iff `errors` is empty.
	pub valid: bool,
	/// Every violation, in section order.
	pub errors: Vec<ValidationError>,
}

impl ValidationResult {
	fn from_errors(errors: Vec<ValidationError>) -> Self {
		Self {
			valid: errors.is_empty(),
			errors,
		}
	}

	/// Returns `true` if some error carries `code`.
	pub fn has_code(&self, code: ValidationCode) -> bool {
		self.errors.iter().any(|e| e.code == code)
	}

	/// Returns the codes of all errors, in order.
	pub fn codes(&self) -> Vec<ValidationCode> {
		self.errors.iter().map(|e| e.code).collect()
	}
}

/// Validates a page configuration.
///
/// A missing or empty section list yields a single error. Otherwise every
/// section is checked and errors are accumulated in section order.
pub fn validate_page_config(config: &PageConfig) -> ValidationResult {
	let Some(sections) = config.sections.as_ref() else {
		return ValidationResult::from_errors(vec![ValidationError::new(
			"sections",
			"Page configuration must contain a list of sections",
			ValidationCode::MissingSections,
		)]);
	};
	if sections.is_empty() {
		return ValidationResult::from_errors(vec![ValidationError::new(
			"sections",
			"Page configuration must contain at least one section",
			ValidationCode::EmptySections,
		)]);
	}

	let errors = sections
		.iter()
		.enumerate()
		.flat_map(|(index, section)| validate_section(index, section))
		.collect();
	ValidationResult::from_errors(errors)
}

/// Runs [`validate_page_config`] and [`missing_handlers`] together.
///
/// Unregistered handlers do not make a configuration invalid; the sections
/// that reference them degrade at render time instead.
pub fn validate_with_handlers(config: &PageConfig) -> (ValidationResult, Vec<String>) {
	(validate_page_config(config), missing_handlers(config))
}

/// Handler names referenced by section data but absent from the registry.
pub fn missing_handlers(config: &PageConfig) -> Vec<String> {
	get_required_handlers(config)
		.into_iter()
		.filter(|name| !config.handlers.contains(name))
		.collect()
}

/// Collects every handler name referenced anywhere in section data.
///
/// Nested objects and arrays are searched; names are unique and ordered by
/// first occurrence.
pub fn get_required_handlers(config: &PageConfig) -> Vec<String> {
	let mut names = IndexSet::new();
	for section in config.section_list() {
		if let Some(data) = &section.data {
			collect_handler_names(data, &mut names);
		}
	}
	names.into_iter().collect()
}

fn collect_handler_names(value: &Value, names: &mut IndexSet<String>) {
	match value {
		Value::Object(map) => {
			for (key, value) in map {
				match value {
					Value::String(name) if HANDLER_KEYS.contains(&key.as_str()) => {
						if !name.trim().is_empty() {
							names.insert(name.clone());
						}
					}
					_ => collect_handler_names(value, names),
				}
			}
		}
		Value::Array(items) => {
			for item in items {
				collect_handler_names(item, names);
			}
		}
		_ => {}
	}
}

enum Rule {
	Text(&'static str, ValidationCode),
	Present(&'static str, ValidationCode),
	NonEmptyList(&'static str, ValidationCode),
}

fn rules_for(section_type: SectionType) -> &'static [Rule] {
	use ValidationCode::*;

	match section_type {
		SectionType::Hero => &[
			Rule::Text("title", MissingTitle),
			Rule::Text("subtitle", MissingSubtitle),
		],
		SectionType::Features => &[
			Rule::Text("title", MissingTitle),
			Rule::NonEmptyList("features", EmptyFeatures),
		],
		SectionType::Testimonials => &[
			Rule::Text("title", MissingTitle),
			Rule::NonEmptyList("testimonials", EmptyTestimonials),
		],
		SectionType::Cta => &[
			Rule::Text("title", MissingTitle),
			Rule::Text("description", MissingDescription),
			Rule::Present("primaryCta", MissingPrimaryCta),
		],
		SectionType::Pricing => &[
			Rule::Text("title", MissingTitle),
			Rule::NonEmptyList("plans", EmptyPlans),
		],
		SectionType::Contact => &[
			Rule::Text("title", MissingTitle),
			Rule::Text("onSubmit", MissingOnSubmit),
		],
	}
}

fn section_label(index: usize, section: &SectionDescriptor) -> String {
	match &section.id {
		Some(id) => format!("Section \"{id}\" (index {index})"),
		None => format!("Section {index}"),
	}
}

fn validate_section(index: usize, section: &SectionDescriptor) -> Vec<ValidationError> {
	let label = section_label(index, section);

	let Some(type_name) = section.section_type.as_deref() else {
		return vec![ValidationError::new(
			format!("sections[{index}].type"),
			format!("{label}: type is required"),
			ValidationCode::MissingType,
		)];
	};

	let Some(data) = section.data_object() else {
		return vec![ValidationError::new(
			format!("sections[{index}].data"),
			format!("{label}: data is required"),
			ValidationCode::MissingData,
		)];
	};

	let Ok(section_type) = type_name.parse::<SectionType>() else {
		return vec![ValidationError::new(
			format!("sections[{index}].type"),
			format!("{label}: unknown section type '{type_name}'"),
			ValidationCode::UnknownType,
		)];
	};

	rules_for(section_type)
		.iter()
		.filter_map(|rule| check_rule(rule, data, index, &label))
		.collect()
}

fn check_rule(
	rule: &Rule,
	data: &Map<String, Value>,
	index: usize,
	label: &str,
) -> Option<ValidationError> {
	let (field, code, ok, requirement) = match rule {
		Rule::Text(field, code) => (field, code, is_non_blank(data.get(*field)), "is required"),
		Rule::Present(field, code) => (
			field,
			code,
			data.get(*field).is_some_and(|v| !v.is_null()),
			"is required",
		),
		Rule::NonEmptyList(field, code) => (
			field,
			code,
			data.get(*field)
				.and_then(Value::as_array)
				.is_some_and(|items| !items.is_empty()),
			"must contain at least one entry",
		),
	};
	(!ok).then(|| {
		ValidationError::new(
			format!("sections[{index}].data.{field}"),
			format!("{label}: {field} {requirement}"),
			*code,
		)
	})
}

fn is_non_blank(value: Option<&Value>) -> bool {
	matches!(value, Some(Value::String(s)) if !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
	use super::*;
	use pagecraft_core::{EventPayload, HandlerRegistry};
	use proptest::prelude::*;
	use rstest::rstest;
	use serde_json::json;

	fn page(sections: Value) -> PageConfig {
		serde_json::from_value(json!({ "sections": sections })).unwrap()
	}

	#[rstest]
	fn test_missing_sections() {
		let result = validate_page_config(&PageConfig::default());

		assert!(!result.valid);
		assert_eq!(result.errors.len(), 1);
		assert_eq!(result.errors[0].code, ValidationCode::MissingSections);
		assert_eq!(result.errors[0].path, "sections");
	}

	#[rstest]
	fn test_empty_section_list() {
		let result = validate_page_config(&page(json!([])));

		assert!(!result.valid);
		assert_eq!(result.codes(), vec![ValidationCode::EmptySections]);
		assert_eq!(result.errors[0].path, "sections");
	}

	#[rstest]
	fn test_hero_and_empty_pricing() {
		let config = page(json!([
			{"type": "hero", "data": {"title": "T", "subtitle": "S"}},
			{"type": "pricing", "data": {"title": "P", "plans": []}}
		]));

		let result = validate_page_config(&config);

		assert!(!result.valid);
		assert_eq!(result.errors.len(), 1);
		assert_eq!(result.errors[0].code, ValidationCode::EmptyPlans);
		assert_eq!(result.errors[0].path, "sections[1].data.plans");
	}

	#[rstest]
	#[case(json!({"type": "hero", "data": {"subtitle": "S"}}), ValidationCode::MissingTitle, "sections[0].data.title")]
	#[case(json!({"type": "hero", "data": {"title": "T", "subtitle": "  "}}), ValidationCode::MissingSubtitle, "sections[0].data.subtitle")]
	#[case(json!({"type": "features", "data": {"title": "F"}}), ValidationCode::EmptyFeatures, "sections[0].data.features")]
	#[case(json!({"type": "testimonials", "data": {"title": "T", "testimonials": []}}), ValidationCode::EmptyTestimonials, "sections[0].data.testimonials")]
	#[case(json!({"type": "cta", "data": {"title": "C", "description": "D"}}), ValidationCode::MissingPrimaryCta, "sections[0].data.primaryCta")]
	#[case(json!({"type": "cta", "data": {"title": "C", "primaryCta": {"text": "Go"}}}), ValidationCode::MissingDescription, "sections[0].data.description")]
	#[case(json!({"type": "contact", "data": {"title": "C"}}), ValidationCode::MissingOnSubmit, "sections[0].data.onSubmit")]
	#[case(json!({"type": "hero"}), ValidationCode::MissingData, "sections[0].data")]
	#[case(json!({"type": "hero", "data": "nope"}), ValidationCode::MissingData, "sections[0].data")]
	#[case(json!({"type": "carousel", "data": {}}), ValidationCode::UnknownType, "sections[0].type")]
	fn test_single_rule_violation(
		#[case] section: Value,
		#[case] code: ValidationCode,
		#[case] path: &str,
	) {
		let result = validate_page_config(&page(json!([section])));

		assert_eq!(result.errors.len(), 1, "{:?}", result.errors);
		assert_eq!(result.errors[0].code, code);
		assert_eq!(result.errors[0].path, path);
	}

	#[rstest]
	fn test_missing_type_skips_remaining_checks() {
		let result = validate_page_config(&page(json!([{}, 42])));
		assert_eq!(
			result.codes(),
			vec![ValidationCode::MissingType, ValidationCode::MissingType]
		);
		assert_eq!(result.errors[1].path, "sections[1].type");
	}

	#[rstest]
	fn test_errors_accumulate_in_section_order() {
		let config = page(json!([
			{"type": "hero", "data": {}},
			{"type": "contact", "id": "reach-us", "data": {"title": "C"}}
		]));

		let result = validate_page_config(&config);

		assert_eq!(
			result.codes(),
			vec![
				ValidationCode::MissingTitle,
				ValidationCode::MissingSubtitle,
				ValidationCode::MissingOnSubmit,
			]
		);
		assert_eq!(result.errors[0].message, "Section 0: title is required");
		assert_eq!(
			result.errors[2].message,
			"Section \"reach-us\" (index 1): onSubmit is required"
		);
	}

	#[rstest]
	fn test_validation_is_deterministic() {
		let config = page(json!([
			{"type": "features", "data": {"features": []}},
			{"type": "pricing"}
		]));
		assert_eq!(validate_page_config(&config), validate_page_config(&config));
	}

	#[rstest]
	fn test_code_serializes_screaming_snake() {
		let result = validate_page_config(&page(json!([{"type": "cta", "data": {"title": "T", "description": "D"}}])));
		let json = serde_json::to_value(&result).unwrap();

		assert_eq!(json["valid"], json!(false));
		assert_eq!(json["errors"][0]["code"], json!("MISSING_PRIMARY_CTA"));
	}

	#[rstest]
	fn test_required_handlers_nested_and_deduplicated() {
		let config = page(json!([
			{"type": "hero", "data": {
				"title": "T", "subtitle": "S",
				"primaryCta": {"text": "Book", "onClick": "book"},
				"secondaryCta": {"text": "Call", "onClick": "call"}
			}},
			{"type": "pricing", "data": {"title": "P", "plans": [
				{"name": "A", "onCtaClick": "book"},
				{"name": "B", "onCtaClick": "upgrade"}
			]}},
			{"type": "contact", "data": {"title": "C", "onSubmit": "send"}}
		]));

		assert_eq!(
			get_required_handlers(&config),
			vec!["book", "call", "upgrade", "send"]
		);
	}

	#[rstest]
	fn test_missing_handlers() {
		let config = page(json!([
			{"type": "contact", "data": {"title": "C", "onSubmit": "send"}},
			{"type": "cta", "data": {"title": "T", "description": "D", "primaryCta": {"text": "Go", "onClick": "go"}}}
		]))
		.with_handlers(HandlerRegistry::new().with("send", |_: &EventPayload| {}));

		assert_eq!(missing_handlers(&config), vec!["go"]);
		let (result, missing) = validate_with_handlers(&config);
		assert!(result.valid);
		assert_eq!(missing, vec!["go"]);
	}

	fn arb_section() -> impl Strategy<Value = Value> {
		let text = prop_oneof![Just(Value::Null), Just(json!("")), Just(json!("text"))];
		let list = prop_oneof![Just(Value::Null), Just(json!([])), Just(json!([{"name": "x"}]))];
		let kind = prop_oneof![
			Just(json!("hero")),
			Just(json!("features")),
			Just(json!("testimonials")),
			Just(json!("cta")),
			Just(json!("pricing")),
			Just(json!("contact")),
			Just(json!("gallery")),
			Just(Value::Null),
		];
		(kind, text.clone(), text, list).prop_map(|(kind, title, other, list)| {
			json!({"type": kind, "data": {
				"title": title, "subtitle": other, "description": other,
				"primaryCta": other, "onSubmit": other,
				"features": list, "testimonials": list, "plans": list
			}})
		})
	}

	proptest! {
		#[test]
		fn prop_valid_iff_no_errors(sections in prop::collection::vec(arb_section(), 1..6)) {
			let result = validate_page_config(&page(Value::Array(sections)));
			prop_assert_eq!(result.valid, result.errors.is_empty());
		}

		#[test]
		fn prop_paths_point_at_existing_sections(sections in prop::collection::vec(arb_section(), 1..6)) {
			let count = sections.len();
			let result = validate_page_config(&page(Value::Array(sections)));
			for error in &result.errors {
				let index: usize = error.path
					.strip_prefix("sections[")
					.and_then(|rest| rest.split(']').next())
					.and_then(|n| n.parse().ok())
					.unwrap();
				prop_assert!(index < count);
			}
		}
	}
}
