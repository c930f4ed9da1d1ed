//! Pricing section.

use std::fmt;

use pagecraft_core::PageElement;
use serde::{Deserialize, Serialize};

use super::{CtaButton, lenient, section_header};
use crate::dispatcher::RenderContext;

const DEFAULT_CTA_TEXT: &str = "Get started";
const DEFAULT_CURRENCY: &str = "$";

/// A plan price: a number rendered with the plan's currency, or free text
/// such as `"Custom"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
	/// Numeric amount.
	Amount(f64),
	/// Free-form label.
	Label(String),
}

impl fmt::Display for Price {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Amount(amount) => write!(f, "{amount}"),
			Self::Label(label) => f.write_str(label),
		}
	}
}

/// One pricing card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PricingPlan {
	/// Plan name.
	#[serde(deserialize_with = "lenient::text")]
	pub name: String,
	/// Price.
	#[serde(deserialize_with = "lenient::or_none")]
	pub price: Option<Price>,
	/// Currency symbol for numeric prices.
	#[serde(deserialize_with = "lenient::opt_text")]
	pub currency: Option<String>,
	/// Billing period, e.g. `month`.
	#[serde(deserialize_with = "lenient::opt_text")]
	pub period: Option<String>,
	/// Short pitch.
	#[serde(deserialize_with = "lenient::opt_text")]
	pub description: Option<String>,
	/// Included features.
	#[serde(deserialize_with = "lenient::text_list")]
	pub features: Vec<String>,
	/// Visually emphasise this plan.
	#[serde(deserialize_with = "lenient::flag")]
	pub highlighted: bool,
	/// Ribbon text, e.g. `Most popular`.
	#[serde(deserialize_with = "lenient::opt_text")]
	pub badge: Option<String>,
	/// Button label.
	#[serde(deserialize_with = "lenient::opt_text")]
	pub cta_text: Option<String>,
	/// Button link used when no handler resolves.
	#[serde(deserialize_with = "lenient::opt_text")]
	pub cta_href: Option<String>,
	/// Button handler name.
	#[serde(deserialize_with = "lenient::opt_text")]
	pub on_cta_click: Option<String>,
}

impl PricingPlan {
	fn price_text(&self) -> Option<String> {
		self.price.as_ref().map(|price| match price {
			Price::Amount(_) => format!(
				"{}{price}",
				self.currency.as_deref().unwrap_or(DEFAULT_CURRENCY)
			),
			Price::Label(_) => price.to_string(),
		})
	}

	fn button(&self) -> CtaButton {
		CtaButton {
			text: self
				.cta_text
				.clone()
				.unwrap_or_else(|| DEFAULT_CTA_TEXT.to_string()),
			href: self.cta_href.clone(),
			on_click: self.on_cta_click.clone(),
			variant: Some(if self.highlighted { "primary" } else { "outline" }.to_string()),
		}
	}
}

/// Pricing section data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingData {
	/// Section heading.
	#[serde(deserialize_with = "lenient::text")]
	pub title: String,
	/// Section sub heading.
	#[serde(deserialize_with = "lenient::opt_text")]
	pub subtitle: Option<String>,
	/// Plans, in display order.
	#[serde(deserialize_with = "lenient::list")]
	pub plans: Vec<PricingPlan>,
}

pub(crate) fn render(data: &PricingData, ctx: &RenderContext<'_>) -> PageElement {
	let cards = data.plans.iter().map(|plan| {
		let class = if plan.highlighted {
			"pricing-card pricing-card-highlighted"
		} else {
			"pricing-card"
		};
		let price = plan.price_text().map(|text| {
			PageElement::new("p")
				.attr("class", "pricing-price")
				.child(PageElement::new("span").attr("class", "pricing-amount").child(text))
				.child(plan.period.as_ref().map(|period| {
					PageElement::new("span")
						.attr("class", "pricing-period")
						.child(format!("/{period}"))
				}))
		});
		let features = (!plan.features.is_empty()).then(|| {
			PageElement::new("ul")
				.attr("class", "pricing-features")
				.children(
					plan.features
						.iter()
						.map(|f| PageElement::new("li").child(f.clone())),
				)
		});

		PageElement::new("article")
			.attr("class", class)
			.child(plan.badge.as_ref().map(|badge| {
				PageElement::new("span")
					.attr("class", "pricing-badge")
					.child(badge.clone())
			}))
			.child(
				PageElement::new("h3")
					.attr("class", "pricing-name")
					.child(plan.name.clone()),
			)
			.child(price)
			.child(plan.description.as_ref().map(|d| {
				PageElement::new("p")
					.attr("class", "pricing-description")
					.child(d.clone())
			}))
			.child(features)
			.child(plan.button().render(ctx, "outline"))
	});

	PageElement::new("div")
		.attr("class", "pricing")
		.child(section_header(&data.title, data.subtitle.as_deref()))
		.child(
			PageElement::new("div")
				.attr("class", "pricing-plans")
				.children(cards),
		)
}
