//! Theme token model.
//!
//! A [`ThemeTokens`] value holds six token groups plus metadata. Groups are
//! insertion-ordered trees whose leaves are strings or numbers; arrays,
//! booleans and nulls are rejected when deserializing.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ThemeError, ThemeResult};
use crate::flatten::flatten_checked;

/// A leaf token value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
	/// Numeric value, e.g. a font weight or line height.
	Number(f64),
	/// Any CSS value.
	Text(String),
}

impl fmt::Display for TokenValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Number(n) => write!(f, "{n}"),
			Self::Text(s) => f.write_str(s),
		}
	}
}

impl From<&str> for TokenValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<String> for TokenValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<f64> for TokenValue {
	fn from(value: f64) -> Self {
		Self::Number(value)
	}
}

/// A node of a token tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenNode {
	/// Leaf.
	Value(TokenValue),
	/// Nested group.
	Group(TokenGroup),
}

impl From<TokenValue> for TokenNode {
	fn from(value: TokenValue) -> Self {
		Self::Value(value)
	}
}

impl From<&str> for TokenNode {
	fn from(value: &str) -> Self {
		Self::Value(value.into())
	}
}

impl From<String> for TokenNode {
	fn from(value: String) -> Self {
		Self::Value(value.into())
	}
}

impl From<f64> for TokenNode {
	fn from(value: f64) -> Self {
		Self::Value(value.into())
	}
}

impl From<TokenGroup> for TokenNode {
	fn from(group: TokenGroup) -> Self {
		Self::Group(group)
	}
}

/// Insertion-ordered token tree.
pub type TokenGroup = IndexMap<String, TokenNode>;

/// Builds a group node from `(key, value)` pairs.
pub fn group<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> TokenNode
where
	K: Into<String>,
	V: Into<TokenNode>,
{
	TokenNode::Group(
		entries
			.into_iter()
			.map(|(k, v)| (k.into(), v.into()))
			.collect(),
	)
}

/// Descriptive theme metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeMetadata {
	/// Theme name, written to the `data-theme` attribute.
	pub name: String,
	/// Version string.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub version: Option<String>,
	/// Author.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub author: Option<String>,
	/// Description.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
}

/// A complete theme.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeTokens {
	/// Brand, semantic, neutral, surface, text and overlay colours.
	pub colors: TokenGroup,
	/// `fontFamily`, `fontSize`, `fontWeight`, `lineHeight`, `letterSpacing`.
	pub typography: TokenGroup,
	/// Spacing scale.
	pub spacing: TokenGroup,
	/// Corner radii.
	pub border_radius: TokenGroup,
	/// Box shadows.
	pub shadows: TokenGroup,
	/// `duration` and `easing`.
	pub animations: TokenGroup,
	/// Name and description.
	pub metadata: ThemeMetadata,
}

impl ThemeTokens {
	/// Parses a theme from JSON.
	pub fn from_json(json: &str) -> ThemeResult<Self> {
		Ok(serde_json::from_str(json)?)
	}

	/// Serializes the theme to JSON.
	pub fn to_json(&self) -> ThemeResult<String> {
		Ok(serde_json::to_string(self)?)
	}

	/// The theme name.
	pub fn name(&self) -> &str {
		&self.metadata.name
	}

	/// Checks that the theme has a name and flattens without empty keys,
	/// unknown groups or colliding property names.
	pub fn validate(&self) -> ThemeResult<()> {
		if self.metadata.name.trim().is_empty() {
			return Err(ThemeError::MissingName);
		}
		flatten_checked(self).map(|_| ())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(TokenValue::Number(600.0), "600")]
	#[case(TokenValue::Number(1.5), "1.5")]
	#[case(TokenValue::Number(-0.5), "-0.5")]
	#[case(TokenValue::from("#fff"), "#fff")]
	fn test_value_display(#[case] value: TokenValue, #[case] expected: &str) {
		assert_eq!(value.to_string(), expected);
	}

	#[rstest]
	fn test_deserialize_camel_case_groups() {
		let tokens = ThemeTokens::from_json(
			r##"{
				"colors": {"primary": {"500": "#3b82f6"}},
				"typography": {"fontWeight": {"bold": 700}},
				"borderRadius": {"md": "0.375rem"},
				"metadata": {"name": "ocean", "version": "1.0"}
			}"##,
		)
		.unwrap();

		assert_eq!(tokens.name(), "ocean");
		assert_eq!(
			tokens.border_radius.get("md"),
			Some(&TokenNode::from("0.375rem"))
		);
		assert!(tokens.spacing.is_empty());
	}

	#[rstest]
	#[case(r##"{"colors": {"primary": ["#000"]}}"##)]
	#[case(r#"{"colors": {"primary": true}}"#)]
	#[case(r#"{"spacing": {"sm": null}}"#)]
	fn test_non_leaf_values_rejected(#[case] json: &str) {
		assert!(matches!(ThemeTokens::from_json(json), Err(ThemeError::Json(_))));
	}

	#[rstest]
	fn test_key_order_preserved() {
		let tokens = ThemeTokens::from_json(r#"{"spacing": {"xl": "2rem", "xs": "0.25rem", "md": "1rem"}}"#)
			.unwrap();
		let keys: Vec<_> = tokens.spacing.keys().map(String::as_str).collect();
		assert_eq!(keys, vec!["xl", "xs", "md"]);
	}

	#[rstest]
	fn test_validate_requires_name() {
		assert!(matches!(
			ThemeTokens::default().validate(),
			Err(ThemeError::MissingName)
		));
	}

	#[rstest]
	fn test_json_round_trip() {
		let mut tokens = ThemeTokens::default();
		tokens.metadata.name = "plain".to_string();
		tokens.colors.insert("brand".to_string(), group([("500", "#123456")]));
		tokens.typography.insert("lineHeight".to_string(), group([("normal", 1.5)]));

		let parsed = ThemeTokens::from_json(&tokens.to_json().unwrap()).unwrap();
		assert_eq!(parsed, tokens);
	}
}
