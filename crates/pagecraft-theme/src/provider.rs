//! Theme provider: the active theme, its persistence and scoped sub-themes.
//!
//! ## Initialization order
//!
//! 1. an explicit theme passed to the builder, persisted like [`ThemeProvider::set_theme`]
//! 2. a theme persisted under the theme storage key
//! 3. a persisted dark-mode flag, selecting the light or dark preset
//! 4. the configured default scheme; `system` follows the platform signal
//!
//! Only 4 leaves the colour-scheme preference [`Unset`], which is the one
//! state in which platform scheme changes switch presets automatically.
//!
//! [`Unset`]: ColorSchemePreference::Unset

use std::fmt;
use std::sync::Arc;

use pagecraft_conf::{DefaultScheme, ThemeSettings};
use pagecraft_core::{DocumentSink, NodeTarget, PreferenceStore};
use parking_lot::RwLock;

use crate::engine::ThemeEngine;
use crate::error::ThemeResult;
use crate::flatten::StyleMap;
use crate::presets;
use crate::tokens::ThemeTokens;

/// The user's colour-scheme choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorSchemePreference {
	/// No explicit choice; the platform signal decides.
	#[default]
	Unset,
	/// Explicitly light.
	Light,
	/// Explicitly dark.
	Dark,
}

impl ColorSchemePreference {
	/// The preference for a dark flag.
	pub fn from_dark(dark: bool) -> Self {
		if dark { Self::Dark } else { Self::Light }
	}
}

#[derive(Debug)]
struct ProviderState {
	tokens: ThemeTokens,
	styles: StyleMap,
	preference: ColorSchemePreference,
	dark: bool,
}

struct Persistence {
	store: Arc<dyn PreferenceStore>,
	theme_key: String,
	dark_key: String,
}

impl Persistence {
	fn load_theme(&self) -> Option<ThemeTokens> {
		let json = self.store.get(&self.theme_key)?;
		match ThemeTokens::from_json(&json).and_then(|tokens| tokens.validate().map(|()| tokens)) {
			Ok(tokens) => Some(tokens),
			Err(err) => {
				tracing::warn!(key = %self.theme_key, error = %err, "ignoring unusable persisted theme");
				None
			}
		}
	}

	fn load_dark(&self) -> Option<bool> {
		match self.store.get(&self.dark_key)?.as_str() {
			"true" => Some(true),
			"false" => Some(false),
			other => {
				tracing::warn!(key = %self.dark_key, value = other, "ignoring unusable dark-mode flag");
				None
			}
		}
	}

	fn save(&self, tokens: &ThemeTokens, dark: bool) -> ThemeResult<()> {
		let json = tokens.to_json()?;
		self.store.set(&self.theme_key, &json);
		self.store
			.set(&self.dark_key, if dark { "true" } else { "false" });
		Ok(())
	}

	fn clear(&self) {
		self.store.remove(&self.theme_key);
		self.store.remove(&self.dark_key);
	}
}

/// Holds the active theme for a document root or a scoped subtree.
pub struct ThemeProvider {
	engine: ThemeEngine,
	target: NodeTarget,
	persistence: Option<Persistence>,
	parent: Option<Arc<ThemeProvider>>,
	state: RwLock<ProviderState>,
}

impl fmt::Debug for ThemeProvider {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let state = self.state.read();
		f.debug_struct("ThemeProvider")
			.field("target", &self.target)
			.field("theme", &state.tokens.name())
			.field("preference", &state.preference)
			.field("dark", &state.dark)
			.field("persistent", &self.persistence.is_some())
			.field("scoped", &self.parent.is_some())
			.finish()
	}
}

/// Configures and initializes a root [`ThemeProvider`].
pub struct ThemeProviderBuilder {
	sink: Arc<dyn DocumentSink>,
	store: Option<Arc<dyn PreferenceStore>>,
	settings: ThemeSettings,
	theme: Option<ThemeTokens>,
	system_prefers_dark: bool,
}

impl ThemeProviderBuilder {
	/// Persists theme changes to `store` and restores from it on build.
	pub fn store(mut self, store: Arc<dyn PreferenceStore>) -> Self {
		self.store = Some(store);
		self
	}

	/// Uses storage keys, apply policy and default scheme from settings.
	pub fn settings(mut self, settings: ThemeSettings) -> Self {
		self.settings = settings;
		self
	}

	/// Starts with this theme regardless of persisted state.
	pub fn theme(mut self, tokens: ThemeTokens) -> Self {
		self.theme = Some(tokens);
		self
	}

	/// The platform's current dark-mode preference.
	pub fn system_prefers_dark(mut self, dark: bool) -> Self {
		self.system_prefers_dark = dark;
		self
	}

	/// Resolves the initial theme and applies it to the document root.
	///
	/// Fails only if an explicit theme is invalid or cannot be persisted;
	/// unusable persisted values are logged and skipped.
	pub fn build(self) -> ThemeResult<Arc<ThemeProvider>> {
		let persistence = self.store.map(|store| Persistence {
			store,
			theme_key: self.settings.storage_key.clone(),
			dark_key: self.settings.dark_mode_key.clone(),
		});
		let persisted_dark = persistence.as_ref().and_then(Persistence::load_dark);

		let (tokens, preference) = if let Some(tokens) = self.theme {
			tokens.validate()?;
			let dark = presets::is_dark_preset(&tokens);
			if let Some(persistence) = &persistence {
				persistence.save(&tokens, dark)?;
			}
			(tokens, ColorSchemePreference::from_dark(dark))
		} else if let Some(tokens) = persistence.as_ref().and_then(Persistence::load_theme) {
			let dark = persisted_dark.unwrap_or_else(|| presets::is_dark_preset(&tokens));
			(tokens, ColorSchemePreference::from_dark(dark))
		} else if let Some(dark) = persisted_dark {
			(presets::for_scheme(dark), ColorSchemePreference::from_dark(dark))
		} else {
			let dark = match self.settings.default_scheme {
				DefaultScheme::System => self.system_prefers_dark,
				DefaultScheme::Light => false,
				DefaultScheme::Dark => true,
			};
			(presets::for_scheme(dark), ColorSchemePreference::Unset)
		};

		let dark = match preference {
			ColorSchemePreference::Dark => true,
			ColorSchemePreference::Light => false,
			ColorSchemePreference::Unset => presets::is_dark_preset(&tokens),
		};
		let engine = ThemeEngine::from_settings(&self.settings, self.sink);
		let target = NodeTarget::Root;
		let styles = engine.apply_tokens(&tokens, &target);
		tracing::debug!(theme = %tokens.name(), ?preference, "theme provider initialized");

		Ok(Arc::new(ThemeProvider {
			engine,
			target,
			persistence,
			parent: None,
			state: RwLock::new(ProviderState {
				tokens,
				styles,
				preference,
				dark,
			}),
		}))
	}
}

impl ThemeProvider {
	/// Starts configuring a root provider writing to `sink`.
	pub fn builder(sink: Arc<dyn DocumentSink>) -> ThemeProviderBuilder {
		ThemeProviderBuilder {
			sink,
			store: None,
			settings: ThemeSettings::default(),
			theme: None,
			system_prefers_dark: false,
		}
	}

	/// Creates a provider for the subtree `id`, applying `tokens` there.
	///
	/// Scoped providers never persist. Variables they do not define resolve
	/// through `self`.
	pub fn scoped(self: &Arc<Self>, id: impl Into<String>, tokens: ThemeTokens) -> ThemeResult<Arc<Self>> {
		tokens.validate()?;
		let target = NodeTarget::element(id);
		let styles = self.engine.apply_tokens(&tokens, &target);
		let dark = presets::is_dark_preset(&tokens);
		Ok(Arc::new(Self {
			engine: self.engine.clone(),
			target,
			persistence: None,
			parent: Some(Arc::clone(self)),
			state: RwLock::new(ProviderState {
				tokens,
				styles,
				preference: ColorSchemePreference::from_dark(dark),
				dark,
			}),
		}))
	}

	/// Node this provider writes to.
	pub fn target(&self) -> &NodeTarget {
		&self.target
	}

	/// A copy of the active tokens.
	pub fn tokens(&self) -> ThemeTokens {
		self.state.read().tokens.clone()
	}

	/// Name of the active theme.
	pub fn theme_name(&self) -> String {
		self.state.read().tokens.name().to_string()
	}

	/// A copy of the applied style map.
	pub fn styles(&self) -> StyleMap {
		self.state.read().styles.clone()
	}

	/// Current colour-scheme preference.
	pub fn preference(&self) -> ColorSchemePreference {
		self.state.read().preference
	}

	/// Whether the active theme is dark.
	pub fn is_dark(&self) -> bool {
		self.state.read().dark
	}

	/// Resolves a custom property (`--color-primary-500` or
	/// `color-primary-500`) here or in the nearest ancestor defining it.
	pub fn variable(&self, name: &str) -> Option<String> {
		let property = if name.starts_with("--") {
			name.to_string()
		} else {
			format!("--{name}")
		};
		let local = self.state.read().styles.get(&property).map(str::to_string);
		local.or_else(|| self.parent.as_ref().and_then(|p| p.variable(&property)))
	}

	/// Replaces the active theme with a validated custom theme and persists it.
	///
	/// The choice counts as explicit: later platform changes are ignored.
	pub fn set_theme(&self, tokens: ThemeTokens) -> ThemeResult<()> {
		tokens.validate()?;
		let dark = presets::is_dark_preset(&tokens);
		self.commit(tokens, ColorSchemePreference::from_dark(dark), dark)
	}

	/// Switches to the light or dark preset as an explicit choice.
	pub fn set_dark_mode(&self, dark: bool) -> ThemeResult<()> {
		self.commit(
			presets::for_scheme(dark),
			ColorSchemePreference::from_dark(dark),
			dark,
		)
	}

	/// Flips between the light and dark presets.
	pub fn toggle_dark_mode(&self) -> ThemeResult<()> {
		let dark = self.is_dark();
		self.set_dark_mode(!dark)
	}

	/// Reacts to a platform dark-mode change.
	///
	/// Switches presets only while the preference is unset. Returns `true`
	/// if the theme changed. Automatic switches are not persisted.
	pub fn system_scheme_changed(&self, prefers_dark: bool) -> bool {
		{
			let state = self.state.read();
			if state.preference != ColorSchemePreference::Unset || state.dark == prefers_dark {
				return false;
			}
		}
		self.apply_state(
			presets::for_scheme(prefers_dark),
			ColorSchemePreference::Unset,
			prefers_dark,
		);
		true
	}

	/// Forgets the explicit choice and returns to the platform scheme.
	pub fn clear_preference(&self, system_prefers_dark: bool) {
		if let Some(persistence) = &self.persistence {
			persistence.clear();
		}
		self.apply_state(
			presets::for_scheme(system_prefers_dark),
			ColorSchemePreference::Unset,
			system_prefers_dark,
		);
	}

	/// Removes the applied theme from the target node.
	pub fn unmount(&self) {
		self.engine.remove(&self.target);
	}

	/// Persists an explicit choice, then applies it. Nothing changes if the
	/// save fails.
	fn commit(
		&self,
		tokens: ThemeTokens,
		preference: ColorSchemePreference,
		dark: bool,
	) -> ThemeResult<()> {
		if let Some(persistence) = &self.persistence {
			persistence.save(&tokens, dark)?;
		}
		self.apply_state(tokens, preference, dark);
		Ok(())
	}

	fn apply_state(&self, tokens: ThemeTokens, preference: ColorSchemePreference, dark: bool) {
		let styles = self.engine.apply_tokens(&tokens, &self.target);
		tracing::debug!(theme = %tokens.name(), ?preference, "theme changed");

		let mut state = self.state.write();
		state.tokens = tokens;
		state.styles = styles;
		state.preference = preference;
		state.dark = dark;
	}
}
