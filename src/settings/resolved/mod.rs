use omnibar::tui::theme;
use omnibar::{Theme, UiConfig, WidgetConfig};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub widget: WidgetConfig,
	pub ui: UiConfig,
	pub theme: Option<String>,
	pub start_elevated: bool,
	pub log_level: Option<String>,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Theme selected by name, or the default theme.
	pub fn resolved_theme(&self) -> Theme {
		self.theme
			.as_deref()
			.and_then(theme::by_name)
			.unwrap_or_else(theme::default_theme)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
