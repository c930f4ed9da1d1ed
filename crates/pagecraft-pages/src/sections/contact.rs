//! Contact section.
//!
//! The form is only useful with a submit handler, so the section renders
//! nothing when `onSubmit` does not resolve.

use pagecraft_core::{EventType, PageElement};
use serde::{Deserialize, Serialize};

use super::{lenient, section_header};
use crate::dispatcher::RenderContext;

const DEFAULT_SUBMIT_TEXT: &str = "Send message";

/// One form field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactField {
	/// Form field name.
	#[serde(deserialize_with = "lenient::text")]
	pub name: String,
	/// Visible label; defaults to the name.
	#[serde(deserialize_with = "lenient::opt_text")]
	pub label: Option<String>,
	/// Input type (`text`, `email`, `tel`, ...) or `textarea`.
	#[serde(rename = "type")]
	#[serde(deserialize_with = "lenient::opt_text")]
	pub field_type: Option<String>,
	/// Mark the field as required.
	#[serde(deserialize_with = "lenient::flag")]
	pub required: bool,
	/// Placeholder text.
	#[serde(deserialize_with = "lenient::opt_text")]
	pub placeholder: Option<String>,
}

impl ContactField {
	fn new(name: &str, label: &str, field_type: &str) -> Self {
		Self {
			name: name.to_string(),
			label: Some(label.to_string()),
			field_type: Some(field_type.to_string()),
			required: true,
			placeholder: None,
		}
	}

	/// Name, email and message.
	pub fn defaults() -> Vec<Self> {
		vec![
			Self::new("name", "Name", "text"),
			Self::new("email", "Email", "email"),
			Self::new("message", "Message", "textarea"),
		]
	}

	fn render(&self) -> PageElement {
		let id = format!("contact-{}", self.name);
		let field_type = self.field_type.as_deref().unwrap_or("text");
		let input = if field_type == "textarea" {
			PageElement::new("textarea").attr("rows", "5")
		} else {
			PageElement::new("input").attr("type", field_type.to_string())
		}
		.attr("id", id.clone())
		.attr("name", self.name.clone())
		.attr_opt("placeholder", self.placeholder.clone())
		.bool_attr("required", self.required);

		PageElement::new("div")
			.attr("class", "form-field")
			.child(
				PageElement::new("label")
					.attr("for", id)
					.child(self.label.clone().unwrap_or_else(|| self.name.clone())),
			)
			.child(input)
	}
}

/// Contact section data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactData {
	/// Heading.
	#[serde(deserialize_with = "lenient::text")]
	pub title: String,
	/// Sub heading.
	#[serde(deserialize_with = "lenient::opt_text")]
	pub subtitle: Option<String>,
	/// Submit handler name.
	#[serde(deserialize_with = "lenient::opt_text")]
	pub on_submit: Option<String>,
	/// Form fields; [`ContactField::defaults`] when empty.
	#[serde(deserialize_with = "lenient::list")]
	pub fields: Vec<ContactField>,
	/// Submit button label.
	#[serde(deserialize_with = "lenient::opt_text")]
	pub submit_text: Option<String>,
	/// Public email address.
	#[serde(deserialize_with = "lenient::opt_text")]
	pub email: Option<String>,
	/// Public phone number.
	#[serde(deserialize_with = "lenient::opt_text")]
	pub phone: Option<String>,
	/// Postal address.
	#[serde(deserialize_with = "lenient::opt_text")]
	pub address: Option<String>,
}

impl ContactData {
	fn details(&self) -> Option<PageElement> {
		let email = self.email.as_ref().map(|email| {
			PageElement::new("li").attr("class", "contact-email").child(
				PageElement::new("a")
					.attr("href", format!("mailto:{email}"))
					.child(email.clone()),
			)
		});
		let phone = self.phone.as_ref().map(|phone| {
			let dial: String = phone
				.chars()
				.filter(|c| c.is_ascii_digit() || *c == '+')
				.collect();
			PageElement::new("li").attr("class", "contact-phone").child(
				PageElement::new("a")
					.attr("href", format!("tel:{dial}"))
					.child(phone.clone()),
			)
		});
		let address = self.address.as_ref().map(|address| {
			PageElement::new("li")
				.attr("class", "contact-address")
				.child(address.clone())
		});

		if email.is_none() && phone.is_none() && address.is_none() {
			return None;
		}
		Some(
			PageElement::new("ul")
				.attr("class", "contact-details")
				.child(email)
				.child(phone)
				.child(address),
		)
	}
}

pub(crate) fn render(data: &ContactData, ctx: &RenderContext<'_>) -> Option<PageElement> {
	let Some(handler) = ctx.handler(data.on_submit.as_deref()) else {
		tracing::error!(
			handler = data.on_submit.as_deref().unwrap_or_default(),
			"contact section has no registered submit handler; section omitted"
		);
		return None;
	};

	let defaults;
	let fields = if data.fields.is_empty() {
		defaults = ContactField::defaults();
		&defaults
	} else {
		&data.fields
	};

	let form = PageElement::new("form")
		.attr("class", "contact-form")
		.attr("method", "post")
		.on(EventType::Submit, handler)
		.children(fields.iter().map(ContactField::render))
		.child(
			PageElement::new("button")
				.attr("type", "submit")
				.attr("class", "btn btn-primary")
				.child(
					data.submit_text
						.clone()
						.unwrap_or_else(|| DEFAULT_SUBMIT_TEXT.to_string()),
				),
		);

	Some(
		PageElement::new("div")
			.attr("class", "contact")
			.child(section_header(&data.title, data.subtitle.as_deref()))
			.child(data.details())
			.child(form),
	)
}
