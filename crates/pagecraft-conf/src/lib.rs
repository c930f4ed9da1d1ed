//! # pagecraft settings
//!
//! Settings shared by the page builder, the theme engine and the template
//! registry, loaded from a TOML document. Every key is optional; missing keys
//! fall back to [`Settings::default`].
//!
//! ```toml
//! [pages]
//! strict_validation = true
//!
//! [theme]
//! storage_key = "pagecraft-theme"
//! dark_mode_key = "pagecraft-dark-mode"
//! apply_policy = "replace"
//! default_scheme = "system"
//!
//! [templates]
//! paths = ["templates/lawyer.json", "templates/dentist.json"]
//! ```

#![warn(missing_docs)]

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default storage key for the persisted theme tokens.
pub const DEFAULT_THEME_STORAGE_KEY: &str = "pagecraft-theme";

/// Default storage key for the persisted dark-mode flag.
pub const DEFAULT_DARK_MODE_STORAGE_KEY: &str = "pagecraft-dark-mode";

/// Result type for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Settings loading errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SettingsError {
	/// The settings file could not be read.
	#[error("failed to read settings file {path}: {source}")]
	Io {
		/// File that failed to load.
		path: PathBuf,
		/// Underlying IO error.
		#[source]
		source: std::io::Error,
	},

	/// The document is not valid TOML or has wrongly typed values.
	#[error("failed to parse settings: {0}")]
	Parse(#[from] toml::de::Error),

	/// The values parse but are inconsistent.
	#[error("invalid settings: {0}")]
	Invalid(String),
}

/// How a new theme is written over a previously applied one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplyPolicy {
	/// Write the new properties on top of the old ones; keys the new theme
	/// does not define keep their previous value.
	#[default]
	Merge,
	/// Remove every engine-owned property first, then write the new theme.
	Replace,
}

/// Colour scheme used when nothing was persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultScheme {
	/// Follow the platform's dark-mode preference.
	#[default]
	System,
	/// Always start light.
	Light,
	/// Always start dark.
	Dark,
}

/// Page builder settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSettings {
	/// Replace the whole page with an error listing when validation fails.
	pub strict_validation: bool,
}

/// Theme engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
	/// Key under which the active theme tokens are persisted.
	pub storage_key: String,
	/// Key under which the dark-mode flag is persisted.
	pub dark_mode_key: String,
	/// Policy used when a theme is applied over another.
	pub apply_policy: ApplyPolicy,
	/// Scheme used on first start.
	pub default_scheme: DefaultScheme,
}

impl Default for ThemeSettings {
	fn default() -> Self {
		Self {
			storage_key: DEFAULT_THEME_STORAGE_KEY.to_string(),
			dark_mode_key: DEFAULT_DARK_MODE_STORAGE_KEY.to_string(),
			apply_policy: ApplyPolicy::default(),
			default_scheme: DefaultScheme::default(),
		}
	}
}

/// Template registry settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateSettings {
	/// JSON files registered at start-up, relative to the settings file.
	pub paths: Vec<PathBuf>,
}

/// Top-level settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
	/// `[pages]` table.
	pub pages: PageSettings,
	/// `[theme]` table.
	pub theme: ThemeSettings,
	/// `[templates]` table.
	pub templates: TemplateSettings,
	/// Directory relative template paths are resolved against.
	#[serde(skip)]
	pub base_dir: Option<PathBuf>,
}

impl Settings {
	/// Parses settings from a TOML string and validates them.
	pub fn from_toml_str(source: &str) -> SettingsResult<Self> {
		let settings: Settings = toml::from_str(source)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Loads settings from a TOML file.
	///
	/// Relative template paths are resolved against the file's directory.
	pub fn from_file(path: impl AsRef<Path>) -> SettingsResult<Self> {
		let path = path.as_ref();
		let source = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		let mut settings = Self::from_toml_str(&source)?;
		settings.base_dir = path.parent().map(Path::to_path_buf);
		Ok(settings)
	}

	/// Checks cross-field constraints.
	pub fn validate(&self) -> SettingsResult<()> {
		if self.theme.storage_key.trim().is_empty() {
			return Err(SettingsError::Invalid(
				"theme.storage_key must not be empty".to_string(),
			));
		}
		if self.theme.dark_mode_key.trim().is_empty() {
			return Err(SettingsError::Invalid(
				"theme.dark_mode_key must not be empty".to_string(),
			));
		}
		if self.theme.storage_key == self.theme.dark_mode_key {
			return Err(SettingsError::Invalid(format!(
				"theme.storage_key and theme.dark_mode_key must differ (both are '{}')",
				self.theme.storage_key
			)));
		}
		Ok(())
	}

	/// Template paths resolved against [`Settings::base_dir`].
	pub fn template_paths(&self) -> Vec<PathBuf> {
		self.templates
			.paths
			.iter()
			.map(|p| match &self.base_dir {
				Some(base) if p.is_relative() => base.join(p),
				_ => p.clone(),
			})
			.collect()
	}
}
