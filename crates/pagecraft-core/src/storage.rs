//! Persisted key/value preferences.
//!
//! Browser hosts back [`PreferenceStore`] with `localStorage`; the in-memory
//! [`MemoryStore`] serves servers and tests.

use std::collections::HashMap;

use parking_lot::RwLock;

/// String key/value storage that survives across sessions.
pub trait PreferenceStore: Send + Sync {
	/// Reads a value.
	fn get(&self, key: &str) -> Option<String>;

	/// Writes a value, replacing any previous one.
	fn set(&self, key: &str, value: &str);

	/// Deletes a value.
	fn remove(&self, key: &str);
}

/// In-memory [`PreferenceStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
	values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a store pre-populated with `entries`.
	pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
	where
		K: Into<String>,
		V: Into<String>,
	{
		Self {
			values: RwLock::new(
				entries
					.into_iter()
					.map(|(k, v)| (k.into(), v.into()))
					.collect(),
			),
		}
	}

	/// Number of stored keys.
	pub fn len(&self) -> usize {
		self.values.read().len()
	}

	/// Returns `true` when nothing is stored.
	pub fn is_empty(&self) -> bool {
		self.values.read().is_empty()
	}
}

impl PreferenceStore for MemoryStore {
	fn get(&self, key: &str) -> Option<String> {
		self.values.read().get(key).cloned()
	}

	fn set(&self, key: &str, value: &str) {
		self.values
			.write()
			.insert(key.to_string(), value.to_string());
	}

	fn remove(&self, key: &str) {
		self.values.write().remove(key);
	}
}
