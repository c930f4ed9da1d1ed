//! # pagecraft pages
//!
//! Configuration-driven landing pages. A [`PageConfig`] lists sections by
//! type; the builder validates it, resolves icon and handler names, renders
//! each section into a [`Page`](pagecraft_core::Page) tree and writes page
//! metadata to a [`DocumentSink`](pagecraft_core::DocumentSink).
//!
//! ## Modules
//!
//! - [`config`]: the JSON configuration model
//! - [`validation`]: structural validation and handler discovery
//! - [`resolver`]: icon and handler lookup
//! - [`sections`]: typed section data and renderers
//! - [`dispatcher`]: descriptor to section rendering
//! - [`builder`]: page assembly and document side effects

#![warn(missing_docs)]

pub mod builder;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod resolver;
pub mod sections;
pub mod validation;

pub use builder::{PageBuilder, ValidationCallback};
pub use config::{PageConfig, PageMeta, PageTheme, SectionDescriptor, SectionType, ThemeColors};
pub use dispatcher::{RenderContext, render_section};
pub use error::{SectionError, SectionResult};
pub use resolver::{IconRef, IconResolver, IconSet, resolve_handler, resolve_icon};
pub use sections::{CtaButton, Section};
pub use validation::{
	ValidationCode, ValidationError, ValidationResult, get_required_handlers, missing_handlers,
	validate_page_config, validate_with_handlers,
};
