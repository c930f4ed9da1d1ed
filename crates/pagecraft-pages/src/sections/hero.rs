//! Hero section.

use pagecraft_core::PageElement;
use serde::{Deserialize, Serialize};

use super::{CtaButton, actions, lenient};
use crate::dispatcher::RenderContext;

/// Hero layout.
///
/// Names outside the built-in three are kept as [`HeroVariant::Other`] and
/// still land in the `hero-<name>` class, so custom stylesheets can add
/// layouts without a code change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HeroVariant {
	/// Text centred over the optional image.
	#[default]
	Centered,
	/// Text and image side by side.
	Split,
	/// Text only; the image is ignored.
	Minimal,
	/// Custom layout; rendered like `Centered` apart from the class.
	Other(String),
}

impl HeroVariant {
	/// The variant name as it appears in configs and class names.
	pub fn as_str(&self) -> &str {
		match self {
			Self::Centered => "centered",
			Self::Split => "split",
			Self::Minimal => "minimal",
			Self::Other(name) => name,
		}
	}
}

impl From<String> for HeroVariant {
	fn from(name: String) -> Self {
		match name.trim().to_ascii_lowercase().as_str() {
			"" | "centered" => Self::Centered,
			"split" => Self::Split,
			"minimal" => Self::Minimal,
			_ => Self::Other(name),
		}
	}
}

impl From<HeroVariant> for String {
	fn from(variant: HeroVariant) -> Self {
		variant.as_str().to_string()
	}
}

/// Hero section data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroData {
	/// Main heading.
	#[serde(deserialize_with = "lenient::text")]
	pub title: String,
	/// Sub heading.
	#[serde(deserialize_with = "lenient::text")]
	pub subtitle: String,
	/// Optional longer copy under the subtitle.
	#[serde(deserialize_with = "lenient::opt_text")]
	pub description: Option<String>,
	/// Image URL.
	#[serde(deserialize_with = "lenient::opt_text")]
	pub image: Option<String>,
	/// Image alt text; defaults to the title.
	#[serde(deserialize_with = "lenient::opt_text")]
	pub image_alt: Option<String>,
	/// Layout.
	#[serde(deserialize_with = "lenient::or_default")]
	pub variant: HeroVariant,
	/// Draw the background gradient.
	#[serde(deserialize_with = "lenient::flag")]
	pub gradient: bool,
	/// Main button.
	#[serde(deserialize_with = "lenient::or_none")]
	pub primary_cta: Option<CtaButton>,
	/// Secondary button.
	#[serde(deserialize_with = "lenient::or_none")]
	pub secondary_cta: Option<CtaButton>,
}

pub(crate) fn render(data: &HeroData, ctx: &RenderContext<'_>) -> PageElement {
	let mut class = format!("hero hero-{}", data.variant.as_str());
	if data.gradient {
		class.push_str(" hero-gradient");
	}

	let content = PageElement::new("div")
		.attr("class", "hero-content")
		.child(
			PageElement::new("h1")
				.attr("class", "hero-title")
				.child(data.title.clone()),
		)
		.child(
			PageElement::new("p")
				.attr("class", "hero-subtitle")
				.child(data.subtitle.clone()),
		)
		.child(data.description.as_ref().map(|d| {
			PageElement::new("p")
				.attr("class", "hero-description")
				.child(d.clone())
		}))
		.child(actions(
			"hero-actions",
			data.primary_cta.as_ref(),
			data.secondary_cta.as_ref(),
			ctx,
		));

	let media = match (&data.image, &data.variant) {
		(Some(_), HeroVariant::Minimal) | (None, _) => None,
		(Some(src), _) => Some(
			PageElement::new("div").attr("class", "hero-media").child(
				PageElement::new("img")
					.attr("src", src.clone())
					.attr("alt", data.image_alt.clone().unwrap_or_else(|| data.title.clone())),
			),
		),
	};

	PageElement::new("div")
		.attr("class", class)
		.child(content)
		.child(media)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::resolver::IconResolver;
	use pagecraft_core::{EventType, HandlerRegistry, IntoPage};
	use rstest::rstest;
	use serde_json::json;

	fn hero(value: serde_json::Value) -> HeroData {
		serde_json::from_value(value).unwrap()
	}

	#[rstest]
	fn test_render_minimal_hides_image() {
		let handlers = HandlerRegistry::new();
		let icons = IconResolver::default();
		let ctx = RenderContext::new(&handlers, &icons);
		let data = hero(json!({
			"title": "Counsel", "subtitle": "Trusted", "image": "/a.jpg", "variant": "minimal"
		}));

		let page = render(&data, &ctx).into_page();

		assert!(page.find(&|el| el.tag_name() == "img").is_none());
		assert_eq!(page.text_content(), "CounselTrusted");
	}

	#[rstest]
	fn test_render_split_with_gradient_and_buttons() {
		let handlers = HandlerRegistry::new().with("consult", |_: &pagecraft_core::EventPayload| {});
		let icons = IconResolver::default();
		let ctx = RenderContext::new(&handlers, &icons);
		let data = hero(json!({
			"title": "T", "subtitle": "S", "image": "/office.jpg", "variant": "split",
			"gradient": true,
			"primaryCta": {"text": "Consult", "onClick": "consult"},
			"secondaryCta": {"text": "Call", "href": "tel:555"}
		}));

		let element = render(&data, &ctx);
		assert_eq!(element.get_attr("class"), Some("hero hero-split hero-gradient"));

		let page = element.into_page();
		let img = page.find(&|el| el.tag_name() == "img").unwrap();
		assert_eq!(img.get_attr("alt"), Some("T"));

		let button = page.find(&|el| el.tag_name() == "button").unwrap();
		assert!(button.has_handler(EventType::Click));
		let link = page.find(&|el| el.tag_name() == "a").unwrap();
		assert_eq!(link.get_attr("href"), Some("tel:555"));
		assert_eq!(link.get_attr("class"), Some("btn btn-secondary"));
	}

	#[rstest]
	#[case(json!("split"), HeroVariant::Split)]
	#[case(json!("Minimal"), HeroVariant::Minimal)]
	#[case(json!("fullscreen"), HeroVariant::Other("fullscreen".to_string()))]
	#[case(json!(null), HeroVariant::Centered)]
	#[case(json!(7), HeroVariant::Centered)]
	fn test_variant_decoding(#[case] variant: serde_json::Value, #[case] expected: HeroVariant) {
		assert_eq!(hero(json!({"title": "T", "variant": variant})).variant, expected);
	}

	#[rstest]
	fn test_render_custom_variant_keeps_class_and_image() {
		let handlers = HandlerRegistry::new();
		let icons = IconResolver::default();
		let ctx = RenderContext::new(&handlers, &icons);
		let data = hero(json!({
			"title": "T", "subtitle": null, "image": "/wide.jpg", "variant": "fullscreen",
			"primaryCta": "not a button"
		}));

		let element = render(&data, &ctx);

		assert_eq!(element.get_attr("class"), Some("hero hero-fullscreen"));
		assert!(data.primary_cta.is_none());
		let page = element.into_page();
		assert!(page.find(&|el| el.tag_name() == "img").is_some());
		assert_eq!(page.text_content(), "T");
	}
}
