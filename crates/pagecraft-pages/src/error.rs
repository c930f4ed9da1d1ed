//! Errors raised while turning a descriptor into a typed section.

use thiserror::Error;

use crate::config::SectionType;

/// Result type for section decoding.
pub type SectionResult<T> = Result<T, SectionError>;

/// Why a [`SectionDescriptor`](crate::SectionDescriptor) could not become a
/// [`Section`](crate::Section).
///
/// The dispatcher logs these and skips the section; they never abort a page.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SectionError {
	/// The descriptor has no `type`.
	#[error("section has no type")]
	MissingType,

	/// The `type` string is not a known section type.
	#[error("unknown section type '{0}'")]
	UnknownType(String),

	/// The descriptor has no `data`.
	#[error("{section_type} section has no data")]
	MissingData {
		/// Declared section type.
		section_type: SectionType,
	},

	/// `data` does not have the shape the section type expects.
	#[error("invalid {section_type} section data: {source}")]
	InvalidData {
		/// Declared section type.
		section_type: SectionType,
		/// Decoding failure.
		#[source]
		source: serde_json::Error,
	},
}
