//! Features section.

use pagecraft_core::PageElement;
use serde::{Deserialize, Serialize};

use super::{lenient, section_header};
use crate::dispatcher::RenderContext;

const DEFAULT_COLUMNS: u8 = 3;

/// One feature card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureItem {
	/// Icon name, resolved against the icon set.
	#[serde(deserialize_with = "lenient::opt_text")]
	pub icon: Option<String>,
	/// Card heading.
	#[serde(deserialize_with = "lenient::text")]
	pub title: String,
	/// Card copy.
	#[serde(deserialize_with = "lenient::text")]
	pub description: String,
}

/// Features section data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturesData {
	/// Section heading.
	#[serde(deserialize_with = "lenient::text")]
	pub title: String,
	/// Section sub heading.
	#[serde(deserialize_with = "lenient::opt_text")]
	pub subtitle: Option<String>,
	/// Feature cards, in display order.
	#[serde(deserialize_with = "lenient::list")]
	pub features: Vec<FeatureItem>,
	/// Grid columns, clamped to `1..=4`.
	#[serde(deserialize_with = "lenient::opt_count")]
	pub columns: Option<u8>,
}

pub(crate) fn render(data: &FeaturesData, ctx: &RenderContext<'_>) -> PageElement {
	let columns = data.columns.unwrap_or(DEFAULT_COLUMNS).clamp(1, 4);

	let cards = data.features.iter().map(|feature| {
		let icon = match feature.icon.as_deref().and_then(|name| ctx.icon(name)) {
			Some(icon) => icon.to_element(),
			None => icon_placeholder(),
		};
		PageElement::new("article")
			.attr("class", "feature-card")
			.child(PageElement::new("div").attr("class", "feature-icon").child(icon))
			.child(
				PageElement::new("h3")
					.attr("class", "feature-title")
					.child(feature.title.clone()),
			)
			.child(
				PageElement::new("p")
					.attr("class", "feature-description")
					.child(feature.description.clone()),
			)
	});

	PageElement::new("div")
		.attr("class", "features")
		.child(section_header(&data.title, data.subtitle.as_deref()))
		.child(
			PageElement::new("div")
				.attr("class", "features-grid")
				.attr("data-columns", columns.to_string())
				.children(cards),
		)
}

fn icon_placeholder() -> PageElement {
	PageElement::new("span")
		.attr("class", "icon-placeholder")
		.attr("aria-hidden", "true")
}
