//! pagecraft core types
//!
//! Shared building blocks for the pagecraft crates:
//!
//! - [`page`]: the render tree ([`Page`], [`PageElement`]) and [`Head`] metadata
//! - [`callback`]: [`Handler`] callbacks and the name-keyed [`HandlerRegistry`]
//! - [`document`]: the [`DocumentSink`] capability for title, meta, style and
//!   attribute side effects, with the in-memory [`MemoryDocument`]
//! - [`storage`]: the [`PreferenceStore`] capability with [`MemoryStore`]
//!
//! Nothing here knows about sections or themes; those live in
//! `pagecraft-pages` and `pagecraft-theme`.

#![warn(missing_docs)]

pub mod callback;
pub mod document;
pub mod page;
pub mod storage;

pub use callback::{EventPayload, Handler, HandlerRegistry};
pub use document::{DocumentSink, MemoryDocument, NodeTarget};
pub use page::{EventType, Head, IntoPage, MetaTag, Page, PageElement, html_escape};
pub use storage::{MemoryStore, PreferenceStore};
