mod builtins;
mod types;

pub use builtins::DEFAULT_NAME;
pub use types::{Theme, ThemeDefinition};

/// Theme used when none is configured.
#[must_use]
pub fn default_theme() -> Theme {
	builtins::SLATE
}

/// Built-in theme definitions in presentation order.
#[must_use]
pub fn builtin_themes() -> &'static [ThemeDefinition] {
	builtins::DEFINITIONS
}

/// Canonical names of every built-in theme.
pub fn names() -> impl Iterator<Item = &'static str> {
	builtins::DEFINITIONS.iter().map(|definition| definition.name)
}

/// Look up a theme by name or alias.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	builtins::DEFINITIONS
		.iter()
		.find(|definition| definition.matches(name))
		.map(|definition| definition.theme)
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lookup_ignores_case_and_separators() {
		assert_eq!(by_name("Solarized_Dark"), Some(builtins::SOLARIZED));
		assert_eq!(by_name(" default "), Some(builtins::SLATE));
		assert_eq!(by_name("LIGHT"), Some(builtins::LIGHT));
		assert_eq!(by_name("neon"), None);
	}

	#[test]
	fn names_list_canonical_entries() {
		assert_eq!(names().collect::<Vec<_>>(), ["slate", "solarized", "light"]);
	}
}
