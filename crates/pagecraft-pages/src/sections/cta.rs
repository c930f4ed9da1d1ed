//! Call-to-action section.

use pagecraft_core::PageElement;
use serde::{Deserialize, Serialize};

use super::{CtaButton, actions, lenient};
use crate::dispatcher::RenderContext;

/// Call-to-action section data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CtaData {
	/// Heading.
	#[serde(deserialize_with = "lenient::text")]
	pub title: String,
	/// Supporting copy.
	#[serde(deserialize_with = "lenient::text")]
	pub description: String,
	/// Main button.
	#[serde(deserialize_with = "lenient::or_none")]
	pub primary_cta: Option<CtaButton>,
	/// Optional second button.
	#[serde(deserialize_with = "lenient::or_none")]
	pub secondary_cta: Option<CtaButton>,
	/// Visual style, appended as `cta-<variant>`.
	#[serde(deserialize_with = "lenient::opt_text")]
	pub variant: Option<String>,
}

pub(crate) fn render(data: &CtaData, ctx: &RenderContext<'_>) -> PageElement {
	let class = match &data.variant {
		Some(variant) => format!("cta cta-{variant}"),
		None => "cta".to_string(),
	};

	PageElement::new("div")
		.attr("class", class)
		.child(
			PageElement::new("h2")
				.attr("class", "cta-title")
				.child(data.title.clone()),
		)
		.child(
			PageElement::new("p")
				.attr("class", "cta-description")
				.child(data.description.clone()),
		)
		.child(actions(
			"cta-actions",
			data.primary_cta.as_ref(),
			data.secondary_cta.as_ref(),
			ctx,
		))
}
