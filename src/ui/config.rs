/// Text used by the host page and the search widget chrome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
	pub page_title: String,
	pub shortcut_hint: String,
	pub tooltip: String,
	pub popular_heading: String,
	pub no_results_label: String,
}

impl Default for UiConfig {
	fn default() -> Self {
		Self {
			page_title: "My Website".to_string(),
			shortcut_hint: "Ctrl+K".to_string(),
			tooltip: "Search (Ctrl + K)".to_string(),
			popular_heading: "Popular Searches".to_string(),
			no_results_label: "No results found for".to_string(),
		}
	}
}

impl UiConfig {
	/// Override the page title shown in the header bar.
	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.page_title = title.into();
		self
	}

	/// Override the shortcut hint and keep the tooltip in sync with it.
	#[must_use]
	pub fn with_shortcut_hint(mut self, hint: impl Into<String>) -> Self {
		self.shortcut_hint = hint.into();
		self.tooltip = format!("Search ({})", self.shortcut_hint);
		self
	}
}
