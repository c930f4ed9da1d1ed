//! Typed section data and presentational renderers.
//!
//! Each submodule owns one section type: its `#[serde(default)]` data struct
//! and a `render` function that turns resolved data into a [`PageElement`].
//! [`Section`] is the closed union the dispatcher matches on.
//!
//! Data fields decode leniently: `null`, a wrong JSON type or an out of
//! range number falls back to the field default. Only a payload that is not
//! a JSON object fails to decode, and validation already rejects those.

pub mod contact;
pub mod cta;
pub mod features;
pub mod hero;
mod lenient;
pub mod pricing;
pub mod testimonials;

use pagecraft_core::{EventType, PageElement};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::{SectionDescriptor, SectionType};
use crate::dispatcher::RenderContext;
use crate::error::{SectionError, SectionResult};

pub use contact::{ContactData, ContactField};
pub use cta::CtaData;
pub use features::{FeatureItem, FeaturesData};
pub use hero::{HeroData, HeroVariant};
pub use pricing::{Price, PricingData, PricingPlan};
pub use testimonials::{Testimonial, TestimonialsData};

/// A section with its data decoded into the type-specific shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Section {
	/// Hero banner.
	Hero(HeroData),
	/// Feature grid.
	Features(FeaturesData),
	/// Customer testimonials.
	Testimonials(TestimonialsData),
	/// Call-to-action banner.
	Cta(CtaData),
	/// Pricing plans.
	Pricing(PricingData),
	/// Contact form.
	Contact(ContactData),
}

impl Section {
	/// Decodes a descriptor.
	pub fn from_descriptor(descriptor: &SectionDescriptor) -> SectionResult<Self> {
		let type_name = descriptor
			.section_type
			.as_deref()
			.ok_or(SectionError::MissingType)?;
		let section_type: SectionType = type_name.parse().map_err(SectionError::UnknownType)?;
		let data = descriptor
			.data
			.clone()
			.ok_or(SectionError::MissingData { section_type })?;

		Ok(match section_type {
			SectionType::Hero => Self::Hero(decode(section_type, data)?),
			SectionType::Features => Self::Features(decode(section_type, data)?),
			SectionType::Testimonials => Self::Testimonials(decode(section_type, data)?),
			SectionType::Cta => Self::Cta(decode(section_type, data)?),
			SectionType::Pricing => Self::Pricing(decode(section_type, data)?),
			SectionType::Contact => Self::Contact(decode(section_type, data)?),
		})
	}

	/// The section's type tag.
	pub fn section_type(&self) -> SectionType {
		match self {
			Self::Hero(_) => SectionType::Hero,
			Self::Features(_) => SectionType::Features,
			Self::Testimonials(_) => SectionType::Testimonials,
			Self::Cta(_) => SectionType::Cta,
			Self::Pricing(_) => SectionType::Pricing,
			Self::Contact(_) => SectionType::Contact,
		}
	}
}

fn decode<T: DeserializeOwned>(section_type: SectionType, data: Value) -> SectionResult<T> {
	serde_json::from_value(data).map_err(|source| SectionError::InvalidData {
		section_type,
		source,
	})
}

/// A call-to-action button.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CtaButton {
	/// Button label.
	#[serde(deserialize_with = "lenient::text")]
	pub text: String,
	/// Link target, used when no handler resolves.
	#[serde(deserialize_with = "lenient::opt_text")]
	pub href: Option<String>,
	/// Handler name.
	#[serde(deserialize_with = "lenient::opt_text")]
	pub on_click: Option<String>,
	/// Style variant, e.g. `primary` or `outline`.
	#[serde(deserialize_with = "lenient::opt_text")]
	pub variant: Option<String>,
}

impl CtaButton {
	/// Renders the button.
	///
	/// A resolved handler gives a clickable `<button>`. Without one, an `href`
	/// gives a plain link and anything else an inert button.
	pub(crate) fn render(&self, ctx: &RenderContext<'_>, default_variant: &str) -> PageElement {
		let variant = self.variant.as_deref().unwrap_or(default_variant);
		let class = format!("btn btn-{variant}");
		let handler = ctx.handler(self.on_click.as_deref());

		let element = match (handler, &self.href) {
			(Some(handler), _) => PageElement::new("button")
				.attr("type", "button")
				.attr("class", class)
				.on(EventType::Click, handler),
			(None, Some(href)) => PageElement::new("a")
				.attr("href", href.clone())
				.attr("class", class),
			(None, None) => {
				if let Some(name) = &self.on_click {
					tracing::debug!(handler = %name, "button handler not registered");
				}
				PageElement::new("button")
					.attr("type", "button")
					.attr("class", class)
			}
		};
		element.child(self.text.clone())
	}
}

/// Renders up to two buttons into an actions row, or nothing.
pub(crate) fn actions(
	class: &'static str,
	primary: Option<&CtaButton>,
	secondary: Option<&CtaButton>,
	ctx: &RenderContext<'_>,
) -> Option<PageElement> {
	if primary.is_none() && secondary.is_none() {
		return None;
	}
	Some(
		PageElement::new("div")
			.attr("class", class)
			.child(primary.map(|b| b.render(ctx, "primary")))
			.child(secondary.map(|b| b.render(ctx, "secondary"))),
	)
}

/// `<header>` with a section heading and optional subtitle.
pub(crate) fn section_header(title: &str, subtitle: Option<&str>) -> PageElement {
	PageElement::new("header")
		.attr("class", "section-header")
		.child(
			PageElement::new("h2")
				.attr("class", "section-title")
				.child(title.to_string()),
		)
		.child(subtitle.map(|s| {
			PageElement::new("p")
				.attr("class", "section-subtitle")
				.child(s.to_string())
		}))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::resolver::IconResolver;
	use pagecraft_core::{EventPayload, HandlerRegistry, IntoPage};
	use rstest::rstest;
	use serde_json::json;
	use std::sync::Arc;
	use std::sync::atomic::{AtomicUsize, Ordering};

	#[rstest]
	fn test_from_descriptor() {
		let descriptor = SectionDescriptor::new(
			SectionType::Hero,
			json!({"title": "T", "subtitle": "S", "variant": "split"}),
		);

		let Section::Hero(hero) = Section::from_descriptor(&descriptor).unwrap() else {
			panic!("expected hero");
		};
		assert_eq!(hero.title, "T");
		assert_eq!(hero.variant, HeroVariant::Split);
	}

	#[rstest]
	fn test_from_descriptor_errors() {
		let missing_type = SectionDescriptor::default();
		assert!(matches!(
			Section::from_descriptor(&missing_type),
			Err(SectionError::MissingType)
		));

		let unknown = SectionDescriptor {
			section_type: Some("gallery".to_string()),
			data: Some(json!({})),
			..SectionDescriptor::default()
		};
		assert!(matches!(
			Section::from_descriptor(&unknown),
			Err(SectionError::UnknownType(t)) if t == "gallery"
		));

		let no_data = SectionDescriptor {
			section_type: Some("cta".to_string()),
			..SectionDescriptor::default()
		};
		assert!(matches!(
			Section::from_descriptor(&no_data),
			Err(SectionError::MissingData {
				section_type: SectionType::Cta
			})
		));

		let not_object = SectionDescriptor::new(SectionType::Pricing, json!("none"));
		assert!(matches!(
			Section::from_descriptor(&not_object),
			Err(SectionError::InvalidData {
				section_type: SectionType::Pricing,
				..
			})
		));
	}

	#[rstest]
	#[case(SectionType::Hero, json!({"title": "T", "subtitle": null, "variant": "fullscreen"}))]
	#[case(SectionType::Features, json!({"title": "F", "columns": 300, "features": [{"title": "A", "description": null}, "junk"]}))]
	#[case(SectionType::Testimonials, json!({"title": "T", "testimonials": [{"quote": "Q", "author": "A", "rating": 4.5}]}))]
	#[case(SectionType::Cta, json!({"title": "C", "description": null, "primaryCta": {"text": "Go"}}))]
	#[case(SectionType::Pricing, json!({"plans": "none"}))]
	#[case(SectionType::Contact, json!({"title": "C", "onSubmit": "send", "fields": {"name": "x"}, "email": 12}))]
	fn test_odd_field_values_still_decode(#[case] section_type: SectionType, #[case] data: Value) {
		let descriptor = SectionDescriptor::new(section_type, data);

		let section = Section::from_descriptor(&descriptor).unwrap();

		assert_eq!(section.section_type(), section_type);
	}

	#[rstest]
	fn test_partial_data_decodes_with_defaults() {
		let descriptor = SectionDescriptor::new(SectionType::Features, json!({"title": "Only"}));
		let section = Section::from_descriptor(&descriptor).unwrap();

		assert_eq!(section.section_type(), SectionType::Features);
		let Section::Features(features) = section else {
			panic!("expected features");
		};
		assert!(features.features.is_empty());
	}

	#[rstest]
	fn test_button_with_handler() {
		let clicks = Arc::new(AtomicUsize::new(0));
		let counter = clicks.clone();
		let handlers = HandlerRegistry::new().with("book", move |_: &EventPayload| {
			counter.fetch_add(1, Ordering::SeqCst);
		});
		let icons = IconResolver::default();
		let ctx = RenderContext::new(&handlers, &icons);
		let button = CtaButton {
			text: "Book".to_string(),
			on_click: Some("book".to_string()),
			href: Some("/book".to_string()),
			..CtaButton::default()
		};

		let element = button.render(&ctx, "primary");

		assert_eq!(element.tag_name(), "button");
		assert_eq!(element.get_attr("class"), Some("btn btn-primary"));
		assert_eq!(element.dispatch(&EventPayload::click()), 1);
		assert_eq!(clicks.load(Ordering::SeqCst), 1);
	}

	#[rstest]
	#[case(Some("/pricing"), "<a href=\"/pricing\" class=\"btn btn-outline\">Plans</a>")]
	#[case(None, "<button type=\"button\" class=\"btn btn-outline\">Plans</button>")]
	fn test_button_without_handler(#[case] href: Option<&str>, #[case] expected: &str) {
		let handlers = HandlerRegistry::new();
		let icons = IconResolver::default();
		let ctx = RenderContext::new(&handlers, &icons);
		let button = CtaButton {
			text: "Plans".to_string(),
			href: href.map(str::to_string),
			on_click: Some("missing".to_string()),
			variant: Some("outline".to_string()),
		};

		let element = button.render(&ctx, "primary");

		assert!(element.event_handlers().is_empty());
		assert_eq!(element.into_page().render_to_string(), expected);
	}

	#[rstest]
	fn test_actions_empty() {
		let handlers = HandlerRegistry::new();
		let icons = IconResolver::default();
		let ctx = RenderContext::new(&handlers, &icons);
		assert!(actions("hero-actions", None, None, &ctx).is_none());
	}
}
