/// Capability invoked when the user activates a page in browse mode.
///
/// The widget closes itself right after calling [`Navigator::navigate`], so
/// implementations only need to react to the label.
pub trait Navigator {
	fn navigate(&mut self, page: &str);
}

impl<F> Navigator for F
where
	F: FnMut(&str),
{
	fn navigate(&mut self, page: &str) {
		self(page)
	}
}

/// Navigator that remembers every page it was asked to open.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NavigationHistory {
	visited: Vec<String>,
}

impl NavigationHistory {
	#[must_use]
	pub fn visited(&self) -> &[String] {
		&self.visited
	}

	#[must_use]
	pub fn current(&self) -> Option<&str> {
		self.visited.last().map(String::as_str)
	}
}

impl Navigator for NavigationHistory {
	fn navigate(&mut self, page: &str) {
		tracing::info!(page, "navigate");
		self.visited.push(page.to_string());
	}
}
