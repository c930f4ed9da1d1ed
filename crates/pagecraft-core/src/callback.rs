//! Handler callbacks and the name-keyed handler registry.
//!
//! Page configurations are JSON, so they cannot carry functions. Section data
//! references callbacks by name (`"onSubmit": "submitContact"`) and the caller
//! supplies a [`HandlerRegistry`] that maps those names to [`Handler`]s at
//! render time.
//!
//! ## Example
//!
//! ```rust
//! use pagecraft_core::{EventPayload, HandlerRegistry};
//!
//! let handlers = HandlerRegistry::new()
//!     .with("submitContact", |payload: &EventPayload| {
//!         println!("contact from {:?}", payload.field("email"));
//!     });
//!
//! assert!(handlers.contains("submitContact"));
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::page::EventType;

/// Data delivered to a handler when an event fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventPayload {
	/// The event that fired.
	pub event_type: EventType,
	/// Id of the section the event originated from, if it has one.
	pub section_id: Option<String>,
	/// Submitted form values, in field order. Empty for clicks.
	pub form_data: IndexMap<String, String>,
}

impl EventPayload {
	/// Creates a payload without form data.
	pub fn new(event_type: EventType) -> Self {
		Self {
			event_type,
			section_id: None,
			form_data: IndexMap::new(),
		}
	}

	/// Creates a click payload.
	pub fn click() -> Self {
		Self::new(EventType::Click)
	}

	/// Creates a submit payload from form field values.
	pub fn submit<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
	where
		K: Into<String>,
		V: Into<String>,
	{
		Self {
			event_type: EventType::Submit,
			section_id: None,
			form_data: fields
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		}
	}

	/// Sets the originating section id.
	pub fn section(mut self, id: impl Into<String>) -> Self {
		self.section_id = Some(id.into());
		self
	}

	/// Returns a submitted field value.
	pub fn field(&self, name: &str) -> Option<&str> {
		self.form_data.get(name).map(String::as_str)
	}
}

/// A cloneable, thread-safe event handler.
///
/// `Handler` wraps a function in an `Arc`, so cloning it into several render
/// nodes is cheap and every clone calls the same function.
#[derive(Clone)]
pub struct Handler {
	inner: Arc<dyn Fn(&EventPayload) + Send + Sync + 'static>,
}

impl Handler {
	/// Creates a handler from a function or closure.
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(&EventPayload) + Send + Sync + 'static,
	{
		Self { inner: Arc::new(f) }
	}

	/// Invokes the handler.
	///
	/// The call is fire-and-forget: any asynchronous work the handler starts is
	/// not tracked.
	pub fn call(&self, payload: &EventPayload) {
		(self.inner)(payload)
	}

	/// Returns `true` when both handles point at the same function.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.inner, &other.inner)
	}
}

impl fmt::Debug for Handler {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Handler")
			.field("inner", &"<function>")
			.finish()
	}
}

impl<F> From<F> for Handler
where
	F: Fn(&EventPayload) + Send + Sync + 'static,
{
	fn from(f: F) -> Self {
		Self::new(f)
	}
}

/// Caller-supplied map from symbolic names to handlers.
///
/// The pipeline only reads from the registry; it never adds or removes entries.
#[derive(Clone, Default)]
pub struct HandlerRegistry {
	handlers: HashMap<String, Handler>,
}

impl HandlerRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a handler (builder style).
	pub fn with(mut self, name: impl Into<String>, handler: impl Into<Handler>) -> Self {
		self.insert(name, handler);
		self
	}

	/// Adds or replaces a handler.
	pub fn insert(&mut self, name: impl Into<String>, handler: impl Into<Handler>) {
		self.handlers.insert(name.into(), handler.into());
	}

	/// Looks up a handler by name.
	pub fn get(&self, name: &str) -> Option<&Handler> {
		self.handlers.get(name)
	}

	/// Returns `true` if a handler is registered under `name`.
	pub fn contains(&self, name: &str) -> bool {
		self.handlers.contains_key(name)
	}

	/// Returns the registered names in sorted order.
	pub fn names(&self) -> Vec<&str> {
		let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
		names.sort_unstable();
		names
	}

	/// Number of registered handlers.
	pub fn len(&self) -> usize {
		self.handlers.len()
	}

	/// Returns `true` if no handler is registered.
	pub fn is_empty(&self) -> bool {
		self.handlers.is_empty()
	}
}

impl fmt::Debug for HandlerRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("HandlerRegistry")
			.field("names", &self.names())
			.finish()
	}
}

impl<K: Into<String>, H: Into<Handler>> FromIterator<(K, H)> for HandlerRegistry {
	fn from_iter<I: IntoIterator<Item = (K, H)>>(iter: I) -> Self {
		let mut registry = Self::new();
		for (name, handler) in iter {
			registry.insert(name, handler);
		}
		registry
	}
}
