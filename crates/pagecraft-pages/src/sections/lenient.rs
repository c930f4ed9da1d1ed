//! Forgiving field decoders for section data.
//!
//! Used through `#[serde(deserialize_with = "...")]`. A field whose value has
//! the wrong JSON shape decodes to its default, so one odd value in a
//! hand-written config never drops the whole section.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn scalar_text(value: Value) -> Option<String> {
	match value {
		Value::String(s) => Some(s),
		Value::Number(n) => Some(n.to_string()),
		Value::Bool(b) => Some(b.to_string()),
		_ => None,
	}
}

/// String field. Numbers and booleans are stringified; `null` and
/// containers become empty.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(opt_text(deserializer)?.unwrap_or_default())
}

/// Optional string field.
pub(crate) fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(scalar_text(Value::deserialize(deserializer)?))
}

/// Boolean field; anything but `true`/`false` is `false`.
pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(matches!(Value::deserialize(deserializer)?, Value::Bool(true)))
}

/// Small count such as a rating or column number.
///
/// Any number, or numeric string, is rounded and saturated into `u8`.
/// Callers clamp further to their own range.
pub(crate) fn opt_count<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
	D: Deserializer<'de>,
{
	let number = match Value::deserialize(deserializer)? {
		Value::Number(n) => n.as_f64(),
		Value::String(s) => s.trim().parse::<f64>().ok(),
		_ => None,
	};
	Ok(number
		.filter(|n| n.is_finite())
		.map(|n| n.round().clamp(0.0, f64::from(u8::MAX)) as u8))
}

/// List of records. A non-array is an empty list and items that do not
/// decode are skipped.
pub(crate) fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
	D: Deserializer<'de>,
	T: DeserializeOwned,
{
	let items = match Value::deserialize(deserializer)? {
		Value::Array(items) => items,
		Value::Null => return Ok(Vec::new()),
		other => {
			tracing::warn!(value = %other, "expected a list, using an empty one");
			return Ok(Vec::new());
		}
	};
	Ok(items
		.into_iter()
		.enumerate()
		.filter_map(|(index, item)| match serde_json::from_value(item) {
			Ok(value) => Some(value),
			Err(err) => {
				tracing::warn!(index, error = %err, "skipping list item");
				None
			}
		})
		.collect())
}

/// List of strings; non-scalar items are skipped.
pub(crate) fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(match Value::deserialize(deserializer)? {
		Value::Array(items) => items.into_iter().filter_map(scalar_text).collect(),
		_ => Vec::new(),
	})
}

/// Optional nested value; `None` when absent, `null` or not decodable.
pub(crate) fn or_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
	D: Deserializer<'de>,
	T: DeserializeOwned,
{
	Ok(match Value::deserialize(deserializer)? {
		Value::Null => None,
		value => serde_json::from_value(value)
			.inspect_err(|err| tracing::warn!(error = %err, "ignoring malformed value"))
			.ok(),
	})
}

/// Nested value that falls back to its default.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: DeserializeOwned + Default,
{
	Ok(or_none(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[derive(Debug, Default, Deserialize)]
	#[serde(default)]
	struct Sample {
		#[serde(deserialize_with = "text")]
		name: String,
		#[serde(deserialize_with = "opt_text")]
		label: Option<String>,
		#[serde(deserialize_with = "flag")]
		on: bool,
		#[serde(deserialize_with = "opt_count")]
		count: Option<u8>,
		#[serde(deserialize_with = "text_list")]
		tags: Vec<String>,
	}

	fn decode(value: serde_json::Value) -> Sample {
		serde_json::from_value(value).unwrap()
	}

	#[rstest]
	#[case(json!("Ada"), "Ada")]
	#[case(json!(42), "42")]
	#[case(json!(true), "true")]
	#[case(json!(null), "")]
	#[case(json!({"nested": 1}), "")]
	fn test_text(#[case] value: serde_json::Value, #[case] expected: &str) {
		assert_eq!(decode(json!({ "name": value })).name, expected);
	}

	#[rstest]
	#[case(json!(4.5), Some(5))]
	#[case(json!(3), Some(3))]
	#[case(json!(300), Some(255))]
	#[case(json!(-2), Some(0))]
	#[case(json!("2"), Some(2))]
	#[case(json!("many"), None)]
	#[case(json!(null), None)]
	fn test_opt_count(#[case] value: serde_json::Value, #[case] expected: Option<u8>) {
		assert_eq!(decode(json!({ "count": value })).count, expected);
	}

	#[rstest]
	fn test_scalars_and_lists() {
		let decoded = decode(json!({
			"label": null, "on": "yes", "tags": ["a", 1, null, {"x": 1}]
		}));

		assert_eq!(decoded.label, None);
		assert!(!decoded.on);
		assert_eq!(decoded.tags, vec!["a".to_string(), "1".to_string()]);
	}
}
