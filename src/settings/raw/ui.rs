use std::time::Duration;

use omnibar::UiConfig;
use omnibar::widget::{DEFAULT_FOCUS_DELAY, DEFAULT_PLACEHOLDER};
use serde::Deserialize;

use crate::cli::CliArgs;

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) title: Option<String>,
	pub(super) placeholder: Option<String>,
	pub(super) shortcut_hint: Option<String>,
	pub(super) focus_delay_ms: Option<u64>,
}

pub(super) struct UiResolution {
	pub(super) ui: UiConfig,
	pub(super) theme: Option<String>,
	pub(super) placeholder: String,
	pub(super) focus_delay: Duration,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
		if let Some(placeholder) = cli.placeholder.clone() {
			self.placeholder = Some(placeholder);
		}
	}

	pub(super) fn finalize(self) -> UiResolution {
		let mut ui = UiConfig::default();
		if let Some(title) = self.title {
			ui = ui.with_title(title);
		}
		if let Some(hint) = self.shortcut_hint.filter(|hint| !hint.trim().is_empty()) {
			ui = ui.with_shortcut_hint(hint);
		}

		UiResolution {
			ui,
			theme: self
				.theme
				.map(|name| name.trim().to_string())
				.filter(|name| !name.is_empty()),
			placeholder: self
				.placeholder
				.unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string()),
			focus_delay: self
				.focus_delay_ms
				.map(Duration::from_millis)
				.unwrap_or(DEFAULT_FOCUS_DELAY),
		}
	}
}
