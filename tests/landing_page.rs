//! Landing page end-to-end tests
//!
//! Wires settings, a template, the theme provider and the page builder
//! through the facade crate against one shared in-memory document.
//!
//! Test Categories:
//! - Settings-driven assembly: 3 tests

use std::fs;
use std::sync::Arc;

use pagecraft::prelude::*;
use rstest::*;
use serde_json::json;

const SETTINGS: &str = r#"
[pages]
strict_validation = true

[theme]
apply_policy = "replace"
default_scheme = "light"

[templates]
paths = ["templates.json"]
"#;

const TEMPLATES: &str = r#"[{
	"id": "dentist",
	"name": "Bright Smile",
	"category": "health",
	"industry": "dental",
	"variables": {"businessName": "Bright Smile Dental", "tagline": "Gentle care for the whole family"},
	"sections": {"hero": {"order": 1}, "contact": {"order": 2}, "pricing": {"enabled": false}},
	"seo": {"title": "Bright Smile Dental", "description": "Family dentist", "keywords": ["dentist", "family"]}
}, {
	"id": "bakery",
	"name": "Corner Bakery",
	"category": "food",
	"description": "Fresh bread every morning",
	"sections": {"hero": {"order": 1}}
}]"#;

fn page_from_template(template: &TemplateConfig) -> PageConfig {
	let name = template.variable_str("businessName").unwrap_or(&template.name);
	let tagline = template
		.variable_str("tagline")
		.or(template.description.as_deref())
		.unwrap_or_default();
	let sections: Vec<serde_json::Value> = template
		.enabled_sections()
		.into_iter()
		.map(|section| match section {
			"hero" => json!({"type": "hero", "data": {
				"title": name,
				"subtitle": tagline,
			}}),
			"contact" => json!({"type": "contact", "id": "contact", "data": {
				"title": "Book a visit",
				"onSubmit": "bookVisit",
			}}),
			other => json!({"type": other, "data": {}}),
		})
		.collect();
	let seo = template.seo.clone().unwrap_or_default();
	let config = json!({
		"id": template.id,
		"sections": sections,
		"meta": {"title": seo.title, "description": seo.description, "keywords": seo.keywords},
	});
	PageConfig::from_json(&config.to_string()).unwrap()
}

#[fixture]
fn workspace() -> (tempfile::TempDir, Settings) {
	let dir = tempfile::tempdir().unwrap();
	fs::write(dir.path().join("templates.json"), TEMPLATES).unwrap();
	let path = dir.path().join("pagecraft.toml");
	fs::write(&path, SETTINGS).unwrap();
	let settings = Settings::from_file(&path).unwrap();
	(dir, settings)
}

// ============================================================================
// Settings-driven assembly
// ============================================================================

/// Tests that a template loaded from settings renders as a themed page
#[rstest]
fn test_template_to_themed_page(workspace: (tempfile::TempDir, Settings)) {
	// Arrange
	let (_dir, settings) = workspace;
	let document = Arc::new(MemoryDocument::new());
	let registry = TemplateRegistry::from_settings(&settings).unwrap();
	let theme = ThemeProvider::builder(document.clone())
		.store(Arc::new(MemoryStore::new()))
		.settings(settings.theme.clone())
		.system_prefers_dark(true)
		.build()
		.unwrap();
	let handlers = HandlerRegistry::new().with("bookVisit", |_: &EventPayload| {});
	let config = Arc::new(page_from_template(registry.get("dentist").unwrap()).with_handlers(handlers));
	let builder = PageBuilder::from_settings(&settings.pages, document.clone());

	// Act
	let html = builder.build_html(&config);

	// Assert
	assert!(!theme.is_dark());
	assert!(html.contains("Bright Smile Dental"));
	assert!(html.contains("Gentle care for the whole family"));
	assert!(html.find("data-section=\"hero\"").unwrap() < html.find("data-section=\"contact\"").unwrap());
	assert!(!html.contains("page-errors"));
	assert_eq!(document.title().as_deref(), Some("Bright Smile Dental"));
	assert_eq!(document.meta("keywords").as_deref(), Some("dentist, family"));
}

/// Tests that strict settings replace an invalid page with the error listing
/// and leave the document untouched
#[rstest]
fn test_strict_settings_block_invalid_page(workspace: (tempfile::TempDir, Settings)) {
	// Arrange
	let (_dir, settings) = workspace;
	let document = Arc::new(MemoryDocument::new());
	let builder = PageBuilder::from_settings(&settings.pages, document.clone());
	let config = Arc::new(
		PageConfig::from_json(r#"{"sections": [{"type": "features", "data": {"title": "Services"}}], "meta": {"title": "Draft"}}"#)
			.unwrap(),
	);

	// Act
	let html = builder.build_html(&config);

	// Assert
	assert!(html.contains("page-errors"));
	assert!(html.contains("EMPTY_FEATURES"));
	assert!(document.title().is_none());
	assert_eq!(
		validate_page_config(&config).codes(),
		vec![ValidationCode::EmptyFeatures]
	);
}

/// Tests that a template without a tagline variable still renders its hero
/// under strict validation
#[rstest]
fn test_template_without_tagline(workspace: (tempfile::TempDir, Settings)) {
	// Arrange
	let (_dir, settings) = workspace;
	let document = Arc::new(MemoryDocument::new());
	let registry = TemplateRegistry::from_settings(&settings).unwrap();
	let config = Arc::new(page_from_template(registry.get("bakery").unwrap()));
	let builder = PageBuilder::from_settings(&settings.pages, document.clone());

	// Act
	let html = builder.build_html(&config);

	// Assert
	assert!(validate_page_config(&config).valid);
	assert_eq!(html.matches("<section").count(), 1);
	assert!(html.contains("Fresh bread every morning"));
}
