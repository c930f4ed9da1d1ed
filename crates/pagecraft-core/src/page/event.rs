//! Event types that section renderers attach handlers to.

use std::fmt;
use std::str::FromStr;

/// DOM event kinds understood by the render tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
	/// Pointer click on a button or link.
	Click,
	/// Form submission.
	Submit,
	/// Value change on an input.
	Input,
}

impl EventType {
	/// Returns the DOM event name.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Click => "click",
			Self::Submit => "submit",
			Self::Input => "input",
		}
	}
}

impl fmt::Display for EventType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Error returned when parsing an unknown event name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown event type: {0}")]
pub struct UnknownEventType(pub String);

impl FromStr for EventType {
	type Err = UnknownEventType;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"click" => Ok(Self::Click),
			"submit" => Ok(Self::Submit),
			"input" => Ok(Self::Input),
			other => Err(UnknownEventType(other.to_string())),
		}
	}
}
