//! # pagecraft templates
//!
//! A read-mostly registry of landing page templates for professional
//! verticals. Each [`TemplateConfig`] carries content variables, section
//! toggles, SEO defaults and search metadata.
//!
//! ```
//! use pagecraft_templates::{TemplateConfig, TemplateRegistry};
//!
//! let mut registry = TemplateRegistry::new();
//! registry
//! 	.register(TemplateConfig::new("lawyer", "Law Firm", "professional").with_tags(["Attorney"]))
//! 	.unwrap();
//!
//! assert_eq!(registry.by_tag("attorney").len(), 1);
//! assert_eq!(registry.search("law")[0].id, "lawyer");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod registry;

pub use config::{SectionToggleConfig, SeoConfig, TemplateConfig};
pub use error::{TemplateError, TemplateResult};
pub use registry::TemplateRegistry;
