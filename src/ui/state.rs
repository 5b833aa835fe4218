//! Host application state wrapping the search widget.

use serde::Serialize;

use super::config::UiConfig;
use crate::tui::hitmap::HitMap;
pub use crate::tui::theme::Theme;
use crate::widget::{NavigationHistory, SearchWidget, WidgetConfig};

/// Result reported once the host exits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HostOutcome {
	/// Pages opened through the widget, oldest first.
	pub visited: Vec<String>,
}

impl HostOutcome {
	#[must_use]
	pub fn last(&self) -> Option<&str> {
		self.visited.last().map(String::as_str)
	}
}

/// Demo host page with the search widget mounted in its header.
///
/// The host records navigation requests in a [`NavigationHistory`] and shows
/// the most recent page in its body.
pub struct App {
	pub widget: SearchWidget<NavigationHistory>,
	pub theme: Theme,
	pub(crate) ui: UiConfig,
	pub(crate) hits: HitMap,
}

impl App {
	#[must_use]
	pub fn new(config: WidgetConfig) -> Self {
		Self::with_ui(config, UiConfig::default())
	}

	#[must_use]
	pub fn with_ui(config: WidgetConfig, ui: UiConfig) -> Self {
		let mut app = Self {
			widget: SearchWidget::new(config, NavigationHistory::default()),
			theme: Theme::default(),
			ui,
			hits: HitMap::default(),
		};
		app.set_theme(Theme::default());
		app
	}

	/// Apply a new theme, restyling both search fields.
	pub fn set_theme(&mut self, theme: Theme) {
		self.widget.set_field_style(theme.field_style());
		self.theme = theme;
	}

	#[must_use]
	pub fn ui(&self) -> &UiConfig {
		&self.ui
	}

	/// Page most recently opened through the widget.
	#[must_use]
	pub fn current_page(&self) -> Option<&str> {
		self.widget.navigator().current()
	}

	/// Snapshot of the navigation history for reporting.
	#[must_use]
	pub fn outcome(&self) -> HostOutcome {
		HostOutcome {
			visited: self.widget.navigator().visited().to_vec(),
		}
	}
}
