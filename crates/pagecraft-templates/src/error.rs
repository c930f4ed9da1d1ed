//! Template registry errors.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for template registration and loading.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors raised while registering or loading templates.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TemplateError {
	/// A template with this id is already registered.
	#[error("template '{id}' is already registered")]
	AlreadyRegistered {
		/// Conflicting id.
		id: String,
	},

	/// The template id is empty or whitespace.
	#[error("template id must not be empty")]
	EmptyId,

	/// A template file could not be read.
	#[error("failed to read template file {path}: {source}")]
	Io {
		/// File that failed to load.
		path: PathBuf,
		/// Underlying IO error.
		#[source]
		source: std::io::Error,
	},

	/// The JSON is neither a template nor an array of templates.
	#[error("failed to parse template JSON: {0}")]
	Parse(#[from] serde_json::Error),
}
