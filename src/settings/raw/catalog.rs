use omnibar::{NavigationCatalog, PopularQueries, Section, WidgetConfig};
use serde::Deserialize;

/// Catalog overrides as read from disk. Absent lists keep the built-in data.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct CatalogSection {
	pub(super) sections: Option<Vec<Section>>,
	pub(super) popular: Option<Vec<String>>,
}

impl CatalogSection {
	pub(super) fn apply(self, widget: &mut WidgetConfig) {
		if let Some(sections) = self.sections {
			widget.catalog = NavigationCatalog::new(sections);
		}
		if let Some(popular) = self.popular {
			widget.popular = PopularQueries::new(
				popular
					.into_iter()
					.map(|query| query.trim().to_string())
					.filter(|query| !query.is_empty()),
			);
		}
	}
}
