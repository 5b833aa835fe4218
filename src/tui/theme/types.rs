use ratatui::style::{Color, Modifier, Style};

/// Styles used to paint the search widget and its host page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	pub header: Style,
	pub trigger: Style,
	pub field: Style,
	pub hint: Style,
	pub border: Style,
	pub backdrop: Style,
	pub chip: Style,
	pub toggle_active: Style,
	pub section_title: Style,
	pub page: Style,
	pub selection: Style,
	pub empty: Style,
	pub tooltip: Style,
}

impl Theme {
	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	#[must_use]
	pub fn trigger_style(&self) -> Style {
		self.trigger
	}

	/// Trigger style while the pointer rests on it.
	#[must_use]
	pub fn trigger_hover_style(&self) -> Style {
		self.trigger.add_modifier(Modifier::BOLD | Modifier::REVERSED)
	}

	#[must_use]
	pub fn field_style(&self) -> Style {
		self.field
	}

	#[must_use]
	pub fn hint_style(&self) -> Style {
		self.hint
	}

	#[must_use]
	pub fn border_style(&self) -> Style {
		self.border
	}

	#[must_use]
	pub fn backdrop_style(&self) -> Style {
		self.backdrop
	}

	#[must_use]
	pub fn chip_style(&self) -> Style {
		self.chip
	}

	#[must_use]
	pub fn toggle_style(&self, active: bool) -> Style {
		if active { self.toggle_active } else { self.hint }
	}

	#[must_use]
	pub fn section_title_style(&self) -> Style {
		self.section_title
	}

	#[must_use]
	pub fn page_style(&self) -> Style {
		self.page
	}

	#[must_use]
	pub fn selection_style(&self) -> Style {
		self.selection
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn tooltip_style(&self) -> Style {
		self.tooltip
	}

	#[must_use]
	pub fn accent(&self) -> Color {
		self.toggle_active.fg.unwrap_or(Color::Reset)
	}
}

/// Definition for a built-in theme bundled with the application.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub theme: Theme,
	pub aliases: &'static [&'static str],
}

impl ThemeDefinition {
	pub const fn new(name: &'static str, theme: Theme) -> Self {
		Self {
			name,
			theme,
			aliases: &[],
		}
	}

	pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
		self.aliases = aliases;
		self
	}

	/// Whether `name` refers to this theme, ignoring case and separators.
	pub fn matches(&self, name: &str) -> bool {
		let wanted = normalize_name(name);
		normalize_name(self.name) == wanted
			|| self
				.aliases
				.iter()
				.any(|alias| normalize_name(alias) == wanted)
	}
}

pub(super) fn normalize_name(name: &str) -> String {
	name.trim()
		.chars()
		.map(|ch| match ch {
			'-' | ' ' => '_',
			other => other.to_ascii_lowercase(),
		})
		.collect()
}
