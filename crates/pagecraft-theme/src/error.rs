//! Theme errors.

use thiserror::Error;

/// Result type for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

/// Reasons a theme is rejected or cannot be stored.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ThemeError {
	/// `metadata.name` is empty; it is needed for the `data-theme` attribute.
	#[error("theme has no name")]
	MissingName,

	/// A token key is empty.
	#[error("empty token key under '{path}'")]
	EmptyKey {
		/// Dotted path of the group holding the empty key.
		path: String,
	},

	/// A typography or animations entry has no property prefix.
	#[error("unknown {group} token '{key}'")]
	UnknownGroup {
		/// Parent group (`typography` or `animations`).
		group: &'static str,
		/// Offending key.
		key: String,
	},

	/// Two token paths flatten to the same custom property.
	#[error("token '{path}' and token '{existing}' both flatten to {property}")]
	Collision {
		/// Custom property name.
		property: String,
		/// Dotted path of the later token.
		path: String,
		/// Dotted path of the earlier token.
		existing: String,
	},

	/// Token JSON could not be read or written.
	#[error("theme JSON error: {0}")]
	Json(#[from] serde_json::Error),
}
