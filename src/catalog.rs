//! Static navigation data consumed by the search widget.
//!
//! Both the [`NavigationCatalog`] and the [`PopularQueries`] list are supplied
//! by the host. The `Default` implementations provide the built-in site map so
//! that the widget is usable without any configuration.

use serde::{Deserialize, Serialize};

/// Icon tag attached to a catalog section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionIcon {
	#[default]
	Home,
	Product,
	Resource,
	Trending,
	Browse,
}

impl SectionIcon {
	/// Terminal glyph drawn in front of the section title.
	#[must_use]
	pub const fn glyph(self) -> &'static str {
		match self {
			Self::Home => "⌂",
			Self::Product => "▣",
			Self::Resource => "✎",
			Self::Trending => "↗",
			Self::Browse => "▦",
		}
	}

	/// Stable identifier used in configuration files.
	#[must_use]
	pub const fn id(self) -> &'static str {
		match self {
			Self::Home => "home",
			Self::Product => "product",
			Self::Resource => "resource",
			Self::Trending => "trending",
			Self::Browse => "browse",
		}
	}
}

/// A titled group of navigable pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
	pub title: String,
	#[serde(default)]
	pub icon: SectionIcon,
	#[serde(default)]
	pub pages: Vec<String>,
}

impl Section {
	pub fn new<I, S>(title: impl Into<String>, icon: SectionIcon, pages: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			title: title.into(),
			icon,
			pages: pages.into_iter().map(Into::into).collect(),
		}
	}
}

/// Ordered collection of sections offered in browse mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationCatalog {
	sections: Vec<Section>,
}

impl NavigationCatalog {
	#[must_use]
	pub fn new(sections: Vec<Section>) -> Self {
		Self { sections }
	}

	/// A catalog without any sections.
	#[must_use]
	pub fn empty() -> Self {
		Self::new(Vec::new())
	}

	#[must_use]
	pub fn sections(&self) -> &[Section] {
		&self.sections
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.sections.is_empty()
	}

	/// Total number of pages across every section.
	#[must_use]
	pub fn page_count(&self) -> usize {
		self.sections.iter().map(|section| section.pages.len()).sum()
	}
}

impl Default for NavigationCatalog {
	fn default() -> Self {
		Self::new(vec![
			Section::new(
				"Main Pages",
				SectionIcon::Home,
				["Home", "About Us", "Services", "Contact"],
			),
			Section::new(
				"Products",
				SectionIcon::Product,
				["Web Development", "Mobile Apps", "UI/UX Design", "Consulting"],
			),
			Section::new(
				"Resources",
				SectionIcon::Resource,
				["Blog", "Documentation", "Tutorials", "FAQ"],
			),
			Section::new(
				"Support",
				SectionIcon::Trending,
				["Help Center", "Community", "Contact Support", "Live Chat"],
			),
		])
	}
}

impl From<Vec<Section>> for NavigationCatalog {
	fn from(sections: Vec<Section>) -> Self {
		Self::new(sections)
	}
}

/// Suggested searches shown when the modal is not in browse mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopularQueries(Vec<String>);

impl PopularQueries {
	pub fn new<I, S>(queries: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self(queries.into_iter().map(Into::into).collect())
	}

	#[must_use]
	pub fn as_slice(&self) -> &[String] {
		&self.0
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl Default for PopularQueries {
	fn default() -> Self {
		Self::new([
			"React Components",
			"Material UI Tutorial",
			"Next.js Best Practices",
			"JavaScript Tips",
			"CSS Animations",
		])
	}
}
