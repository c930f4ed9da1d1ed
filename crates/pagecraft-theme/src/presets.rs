//! Built-in light and dark themes.
//!
//! Both presets share typography, spacing, radii and animation tokens and
//! define the same colour keys, so switching between them under the merge
//! policy leaves no stale colour properties behind.

use crate::tokens::{ThemeMetadata, ThemeTokens, TokenGroup, TokenNode, group};

/// Name of the light preset.
pub const LIGHT: &str = "light";

/// Name of the dark preset.
pub const DARK: &str = "dark";

/// The light preset.
pub fn light() -> ThemeTokens {
	preset(
		LIGHT,
		"Default light theme",
		colors(Palette {
			surface: [("background", "#ffffff"), ("card", "#ffffff"), ("muted", "#f1f5f9"), ("border", "#e2e8f0")],
			text: [("primary", "#0f172a"), ("secondary", "#475569"), ("muted", "#94a3b8"), ("inverse", "#ffffff")],
			overlay: "rgba(15, 23, 42, 0.5)",
		}),
		[
			("sm", "0 1px 2px 0 rgba(0, 0, 0, 0.05)"),
			("md", "0 4px 6px -1px rgba(0, 0, 0, 0.1)"),
			("lg", "0 10px 15px -3px rgba(0, 0, 0, 0.1)"),
		],
	)
}

/// The dark preset.
pub fn dark() -> ThemeTokens {
	preset(
		DARK,
		"Default dark theme",
		colors(Palette {
			surface: [("background", "#0f172a"), ("card", "#1e293b"), ("muted", "#334155"), ("border", "#334155")],
			text: [("primary", "#f8fafc"), ("secondary", "#cbd5e1"), ("muted", "#64748b"), ("inverse", "#0f172a")],
			overlay: "rgba(0, 0, 0, 0.7)",
		}),
		[
			("sm", "0 1px 2px 0 rgba(0, 0, 0, 0.4)"),
			("md", "0 4px 6px -1px rgba(0, 0, 0, 0.5)"),
			("lg", "0 10px 15px -3px rgba(0, 0, 0, 0.6)"),
		],
	)
}

/// The preset for a dark or light scheme.
pub fn for_scheme(dark_scheme: bool) -> ThemeTokens {
	if dark_scheme { dark() } else { light() }
}

/// Returns `true` if `tokens` is named like the dark preset.
pub fn is_dark_preset(tokens: &ThemeTokens) -> bool {
	tokens.name() == DARK
}

struct Palette {
	surface: [(&'static str, &'static str); 4],
	text: [(&'static str, &'static str); 4],
	overlay: &'static str,
}

fn colors(palette: Palette) -> TokenGroup {
	let mut colors = TokenGroup::new();
	colors.insert(
		"primary".to_string(),
		group([("50", "#eff6ff"), ("100", "#dbeafe"), ("500", "#3b82f6"), ("600", "#2563eb"), ("700", "#1d4ed8")]),
	);
	colors.insert(
		"secondary".to_string(),
		group([("50", "#f8fafc"), ("100", "#f1f5f9"), ("500", "#64748b"), ("600", "#475569"), ("700", "#334155")]),
	);
	colors.insert(
		"accent".to_string(),
		group([("50", "#fffbeb"), ("100", "#fef3c7"), ("500", "#f59e0b"), ("600", "#d97706"), ("700", "#b45309")]),
	);
	colors.insert(
		"semantic".to_string(),
		group([("success", "#16a34a"), ("warning", "#ca8a04"), ("error", "#dc2626"), ("info", "#0284c7")]),
	);
	colors.insert(
		"neutral".to_string(),
		group([
			("50", "#f8fafc"),
			("100", "#f1f5f9"),
			("200", "#e2e8f0"),
			("300", "#cbd5e1"),
			("400", "#94a3b8"),
			("500", "#64748b"),
			("600", "#475569"),
			("700", "#334155"),
			("800", "#1e293b"),
			("900", "#0f172a"),
		]),
	);
	colors.insert("surface".to_string(), group(palette.surface));
	colors.insert("text".to_string(), group(palette.text));
	colors.insert("overlay".to_string(), palette.overlay.into());
	colors
}

fn typography() -> TokenGroup {
	let mut typography = TokenGroup::new();
	typography.insert(
		"fontFamily".to_string(),
		group([
			("sans", "Inter, system-ui, -apple-system, sans-serif"),
			("serif", "Georgia, 'Times New Roman', serif"),
			("mono", "'JetBrains Mono', ui-monospace, monospace"),
		]),
	);
	typography.insert(
		"fontSize".to_string(),
		group([
			("xs", "0.75rem"),
			("sm", "0.875rem"),
			("base", "1rem"),
			("lg", "1.125rem"),
			("xl", "1.25rem"),
			("2xl", "1.5rem"),
			("3xl", "1.875rem"),
			("4xl", "2.25rem"),
		]),
	);
	typography.insert(
		"fontWeight".to_string(),
		group([("normal", 400.0), ("medium", 500.0), ("semibold", 600.0), ("bold", 700.0)]),
	);
	typography.insert(
		"lineHeight".to_string(),
		group([("tight", 1.25), ("normal", 1.5), ("relaxed", 1.75)]),
	);
	typography.insert(
		"letterSpacing".to_string(),
		group([("tight", "-0.025em"), ("normal", "0em"), ("wide", "0.025em")]),
	);
	typography
}

fn scale(entries: &[(&str, &str)]) -> TokenGroup {
	entries
		.iter()
		.map(|(k, v)| (k.to_string(), TokenNode::from(*v)))
		.collect()
}

fn preset(
	name: &str,
	description: &str,
	colors: TokenGroup,
	shadows: [(&str, &str); 3],
) -> ThemeTokens {
	let mut animations = TokenGroup::new();
	animations.insert(
		"duration".to_string(),
		group([("fast", "150ms"), ("normal", "250ms"), ("slow", "400ms")]),
	);
	animations.insert(
		"easing".to_string(),
		group([
			("default", "cubic-bezier(0.4, 0, 0.2, 1)"),
			("in", "cubic-bezier(0.4, 0, 1, 1)"),
			("out", "cubic-bezier(0, 0, 0.2, 1)"),
		]),
	);

	ThemeTokens {
		colors,
		typography: typography(),
		spacing: scale(&[
			("xs", "0.25rem"),
			("sm", "0.5rem"),
			("md", "1rem"),
			("lg", "1.5rem"),
			("xl", "2rem"),
			("2xl", "3rem"),
		]),
		border_radius: scale(&[
			("none", "0"),
			("sm", "0.125rem"),
			("md", "0.375rem"),
			("lg", "0.5rem"),
			("full", "9999px"),
		]),
		shadows: scale(&shadows),
		animations,
		metadata: ThemeMetadata {
			name: name.to_string(),
			version: Some("1.0.0".to_string()),
			author: None,
			description: Some(description.to_string()),
		},
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::flatten::flatten;
	use rstest::rstest;

	#[rstest]
	#[case(light())]
	#[case(dark())]
	fn test_presets_validate(#[case] tokens: ThemeTokens) {
		tokens.validate().unwrap();
	}

	#[rstest]
	fn test_presets_share_property_names() {
		let light: Vec<String> = flatten(&light()).names().map(str::to_string).collect();
		let dark: Vec<String> = flatten(&dark()).names().map(str::to_string).collect();
		assert_eq!(light, dark);
	}

	#[rstest]
	fn test_preset_values() {
		let styles = flatten(&dark());

		assert_eq!(styles.get("--color-surface-background"), Some("#0f172a"));
		assert_eq!(styles.get("--font-weight-semibold"), Some("600"));
		assert_eq!(styles.get("--line-height-normal"), Some("1.5"));
		assert_eq!(styles.get("--radius-full"), Some("9999px"));
		assert_eq!(styles.get("--easing-out"), Some("cubic-bezier(0, 0, 0.2, 1)"));
	}

	#[rstest]
	#[case(true, DARK)]
	#[case(false, LIGHT)]
	fn test_for_scheme(#[case] dark_scheme: bool, #[case] expected: &str) {
		let tokens = for_scheme(dark_scheme);
		assert_eq!(tokens.name(), expected);
		assert_eq!(is_dark_preset(&tokens), dark_scheme);
	}
}
