//! Document side-effect capability.
//!
//! The page builder and the theme engine never touch a real DOM. They write
//! through the narrow [`DocumentSink`] trait, which a browser host implements
//! on top of `document`, and which [`MemoryDocument`] implements for servers
//! and tests.

use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::page::{Head, MetaTag};

/// The node a style property or attribute is written to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeTarget {
	/// The document root element (`<html>`).
	Root,
	/// The root element of a subtree, identified by its element id.
	Element(String),
}

impl NodeTarget {
	/// Targets a subtree root by element id.
	pub fn element(id: impl Into<String>) -> Self {
		Self::Element(id.into())
	}

	/// Returns `true` for the document root.
	pub fn is_root(&self) -> bool {
		matches!(self, Self::Root)
	}
}

/// Write access to global document state.
///
/// All operations are last-write-wins and idempotent; implementations use
/// interior mutability so a sink can be shared behind an `Arc`.
pub trait DocumentSink: Send + Sync {
	/// Sets the document title.
	fn set_title(&self, title: &str);

	/// Creates `<meta name=..>` if absent, otherwise updates its content.
	fn upsert_meta(&self, name: &str, content: &str);

	/// Sets a style property (for example a `--color-primary` custom property).
	fn set_property(&self, target: &NodeTarget, name: &str, value: &str);

	/// Removes a style property. Removing an absent property is a no-op.
	fn remove_property(&self, target: &NodeTarget, name: &str);

	/// Lists the style property names currently set on `target`.
	fn property_names(&self, target: &NodeTarget) -> Vec<String>;

	/// Sets an attribute.
	fn set_attribute(&self, target: &NodeTarget, name: &str, value: &str);

	/// Removes an attribute.
	fn remove_attribute(&self, target: &NodeTarget, name: &str);
}

#[derive(Debug, Default, Clone)]
struct NodeState {
	properties: IndexMap<String, String>,
	attributes: IndexMap<String, String>,
}

#[derive(Debug, Default)]
struct DocumentState {
	title: Option<String>,
	meta: IndexMap<String, String>,
	nodes: IndexMap<NodeTarget, NodeState>,
}

/// In-memory [`DocumentSink`] for server-side rendering and tests.
#[derive(Debug, Default)]
pub struct MemoryDocument {
	state: RwLock<DocumentState>,
}

impl MemoryDocument {
	/// Creates an empty document.
	pub fn new() -> Self {
		Self::default()
	}

	/// Current title.
	pub fn title(&self) -> Option<String> {
		self.state.read().title.clone()
	}

	/// Content of a named meta tag.
	pub fn meta(&self, name: &str) -> Option<String> {
		self.state.read().meta.get(name).cloned()
	}

	/// Number of meta tags in the document.
	pub fn meta_count(&self) -> usize {
		self.state.read().meta.len()
	}

	/// Value of a style property on `target`.
	pub fn property(&self, target: &NodeTarget, name: &str) -> Option<String> {
		self.state
			.read()
			.nodes
			.get(target)
			.and_then(|node| node.properties.get(name).cloned())
	}

	/// All style properties on `target`, in the order they were first set.
	pub fn properties(&self, target: &NodeTarget) -> Vec<(String, String)> {
		self.state
			.read()
			.nodes
			.get(target)
			.map(|node| {
				node.properties
					.iter()
					.map(|(k, v)| (k.clone(), v.clone()))
					.collect()
			})
			.unwrap_or_default()
	}

	/// Value of an attribute on `target`.
	pub fn attribute(&self, target: &NodeTarget, name: &str) -> Option<String> {
		self.state
			.read()
			.nodes
			.get(target)
			.and_then(|node| node.attributes.get(name).cloned())
	}

	/// Snapshot of title and meta tags as a [`Head`].
	pub fn head(&self) -> Head {
		let state = self.state.read();
		let mut head = Head::new();
		if let Some(title) = &state.title {
			head = head.title(title.clone());
		}
		for (name, content) in &state.meta {
			head.upsert_meta(MetaTag::new(name.clone(), content.clone()));
		}
		head
	}

	/// Serializes the root's style properties as an inline `style` value.
	pub fn inline_style(&self, target: &NodeTarget) -> String {
		self.properties(target)
			.iter()
			.map(|(k, v)| format!("{}: {};", k, v))
			.collect::<Vec<_>>()
			.join(" ")
	}
}

impl DocumentSink for MemoryDocument {
	fn set_title(&self, title: &str) {
		self.state.write().title = Some(title.to_string());
	}

	fn upsert_meta(&self, name: &str, content: &str) {
		self.state
			.write()
			.meta
			.insert(name.to_string(), content.to_string());
	}

	fn set_property(&self, target: &NodeTarget, name: &str, value: &str) {
		self.state
			.write()
			.nodes
			.entry(target.clone())
			.or_default()
			.properties
			.insert(name.to_string(), value.to_string());
	}

	fn remove_property(&self, target: &NodeTarget, name: &str) {
		if let Some(node) = self.state.write().nodes.get_mut(target) {
			node.properties.shift_remove(name);
		}
	}

	fn property_names(&self, target: &NodeTarget) -> Vec<String> {
		self.state
			.read()
			.nodes
			.get(target)
			.map(|node| node.properties.keys().cloned().collect())
			.unwrap_or_default()
	}

	fn set_attribute(&self, target: &NodeTarget, name: &str, value: &str) {
		self.state
			.write()
			.nodes
			.entry(target.clone())
			.or_default()
			.attributes
			.insert(name.to_string(), value.to_string());
	}

	fn remove_attribute(&self, target: &NodeTarget, name: &str) {
		if let Some(node) = self.state.write().nodes.get_mut(target) {
			node.attributes.shift_remove(name);
		}
	}
}
