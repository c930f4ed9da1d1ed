//! Testimonials section.

use pagecraft_core::PageElement;
use serde::{Deserialize, Serialize};

use super::{lenient, section_header};

const MAX_RATING: u8 = 5;

/// A customer quote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Testimonial {
	/// The quote.
	#[serde(deserialize_with = "lenient::text")]
	pub quote: String,
	/// Who said it.
	#[serde(deserialize_with = "lenient::text")]
	pub author: String,
	/// Their role.
	#[serde(deserialize_with = "lenient::opt_text")]
	pub role: Option<String>,
	/// Their company.
	#[serde(deserialize_with = "lenient::opt_text")]
	pub company: Option<String>,
	/// Avatar image URL.
	#[serde(deserialize_with = "lenient::opt_text")]
	pub avatar: Option<String>,
	/// Star rating out of five.
	#[serde(deserialize_with = "lenient::opt_count")]
	pub rating: Option<u8>,
}

impl Testimonial {
	fn attribution(&self) -> Option<String> {
		match (&self.role, &self.company) {
			(Some(role), Some(company)) => Some(format!("{role}, {company}")),
			(Some(one), None) | (None, Some(one)) => Some(one.clone()),
			(None, None) => None,
		}
	}
}

/// Testimonials section data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestimonialsData {
	/// Section heading.
	#[serde(deserialize_with = "lenient::text")]
	pub title: String,
	/// Section sub heading.
	#[serde(deserialize_with = "lenient::opt_text")]
	pub subtitle: Option<String>,
	/// Quotes, in display order.
	#[serde(deserialize_with = "lenient::list")]
	pub testimonials: Vec<Testimonial>,
}

pub(crate) fn render(data: &TestimonialsData) -> PageElement {
	let quotes = data.testimonials.iter().map(|t| {
		let rating = t.rating.map(|r| {
			let r = r.min(MAX_RATING);
			PageElement::new("div")
				.attr("class", "testimonial-rating")
				.attr("aria-label", format!("{r} out of {MAX_RATING} stars"))
				.child("\u{2605}".repeat(r as usize))
		});
		let avatar = t.avatar.as_ref().map(|src| {
			PageElement::new("img")
				.attr("class", "testimonial-avatar")
				.attr("src", src.clone())
				.attr("alt", t.author.clone())
		});
		PageElement::new("figure")
			.attr("class", "testimonial")
			.child(rating)
			.child(PageElement::new("blockquote").child(t.quote.clone()))
			.child(
				PageElement::new("figcaption")
					.child(avatar)
					.child(
						PageElement::new("span")
							.attr("class", "testimonial-author")
							.child(t.author.clone()),
					)
					.child(t.attribution().map(|a| {
						PageElement::new("span")
							.attr("class", "testimonial-role")
							.child(a)
					})),
			)
	});

	PageElement::new("div")
		.attr("class", "testimonials")
		.child(section_header(&data.title, data.subtitle.as_deref()))
		.child(
			PageElement::new("div")
				.attr("class", "testimonials-list")
				.children(quotes),
		)
}
