//! Case-insensitive substring filtering over the navigation catalog.
//!
//! Filtering is a pure function of the query and the catalog, so the browse
//! panel recomputes it on every frame instead of caching results.

use crate::catalog::{NavigationCatalog, Section};

/// Return the sections of `catalog` matching `query`.
///
/// A blank query yields the whole catalog. Otherwise a section whose title
/// contains the query is kept unchanged, and any other section is narrowed to
/// the pages containing the query or dropped when none do. Declaration order
/// is preserved throughout.
#[must_use]
pub fn filter_sections(catalog: &NavigationCatalog, query: &str) -> Vec<Section> {
	filter_slice(catalog.sections(), query)
}

fn filter_slice(sections: &[Section], query: &str) -> Vec<Section> {
	if query.trim().is_empty() {
		return sections.to_vec();
	}

	let needle = query.to_lowercase();
	let mut filtered = Vec::new();

	for section in sections {
		if contains_folded(&section.title, &needle) {
			filtered.push(section.clone());
			continue;
		}

		let pages: Vec<String> = section
			.pages
			.iter()
			.filter(|page| contains_folded(page, &needle))
			.cloned()
			.collect();

		if !pages.is_empty() {
			filtered.push(Section {
				pages,
				..section.clone()
			});
		}
	}

	filtered
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
	haystack.to_lowercase().contains(needle)
}

/// What the browse panel shows for a given query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseView {
	/// Set when a non-blank query matched nothing; holds the query verbatim.
	pub no_results_for: Option<String>,
	/// Sections to list. Falls back to the full catalog when nothing matched.
	pub sections: Vec<Section>,
}

impl BrowseView {
	/// Build the browse panel contents for `query`.
	#[must_use]
	pub fn build(catalog: &NavigationCatalog, query: &str) -> Self {
		let sections = filter_sections(catalog, query);
		if sections.is_empty() && !query.trim().is_empty() {
			return Self {
				no_results_for: Some(query.to_string()),
				sections: catalog.sections().to_vec(),
			};
		}

		Self {
			no_results_for: None,
			sections,
		}
	}

	#[must_use]
	pub fn is_fallback(&self) -> bool {
		self.no_results_for.is_some()
	}

	/// Page labels in display order.
	pub fn pages(&self) -> impl Iterator<Item = &str> {
		self.sections
			.iter()
			.flat_map(|section| section.pages.iter().map(String::as_str))
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;
	use crate::catalog::SectionIcon;

	fn products_only() -> NavigationCatalog {
		NavigationCatalog::new(vec![Section::new(
			"Products",
			SectionIcon::Product,
			["Web Development", "Mobile Apps"],
		)])
	}

	#[test]
	fn mixed_case_query_narrows_pages() {
		let filtered = filter_sections(&products_only(), "MoBiLe");
		assert_eq!(filtered.len(), 1);
		assert_eq!(filtered[0].title, "Products");
		assert_eq!(filtered[0].pages, ["Mobile Apps"]);
	}

	#[test]
	fn title_match_keeps_every_page() {
		let catalog = NavigationCatalog::default();
		let filtered = filter_sections(&catalog, "support");
		assert_eq!(filtered.len(), 1);
		assert_eq!(filtered[0].title, "Support");
		assert_eq!(
			filtered[0].pages,
			["Help Center", "Community", "Contact Support", "Live Chat"]
		);
	}

	#[test]
	fn page_matches_span_sections_in_order() {
		let filtered = filter_sections(&NavigationCatalog::default(), "contact");
		let titles: Vec<_> = filtered.iter().map(|s| s.title.as_str()).collect();
		assert_eq!(titles, ["Main Pages", "Support"]);
		assert_eq!(filtered[0].pages, ["Contact"]);
	}

	#[test]
	fn whitespace_query_returns_full_catalog() {
		let catalog = NavigationCatalog::default();
		assert_eq!(filter_sections(&catalog, "   "), catalog.sections());
		assert_eq!(filter_sections(&catalog, ""), catalog.sections());
	}

	#[test]
	fn surrounding_whitespace_is_part_of_the_needle() {
		let filtered = filter_sections(&NavigationCatalog::default(), "live ");
		assert!(filtered.is_empty());
	}

	#[test]
	fn empty_catalog_filters_to_nothing() {
		let catalog = NavigationCatalog::empty();
		assert!(filter_sections(&catalog, "home").is_empty());
		let view = BrowseView::build(&catalog, "home");
		assert!(view.is_fallback());
		assert!(view.sections.is_empty());
	}

	#[test]
	fn unmatched_query_falls_back_to_full_catalog() {
		let catalog = NavigationCatalog::default();
		let view = BrowseView::build(&catalog, "zzz-no-match");
		assert_eq!(view.no_results_for.as_deref(), Some("zzz-no-match"));
		assert_eq!(view.sections, catalog.sections());
	}

	#[test]
	fn matched_query_is_not_a_fallback() {
		let view = BrowseView::build(&NavigationCatalog::default(), "blog");
		assert!(!view.is_fallback());
		assert_eq!(view.pages().collect::<Vec<_>>(), ["Blog"]);
	}

	fn arb_catalog() -> impl Strategy<Value = NavigationCatalog> {
		let section = ("[A-Za-z ]{1,12}", prop::collection::vec("[A-Za-z /]{1,16}", 0..6))
			.prop_map(|(title, pages)| Section::new(title, SectionIcon::Browse, pages));
		prop::collection::vec(section, 0..6).prop_map(NavigationCatalog::new)
	}

	proptest! {
		#[test]
		fn blank_queries_preserve_catalog(catalog in arb_catalog(), query in "[ \t]{0,4}") {
			prop_assert_eq!(filter_sections(&catalog, &query), catalog.sections().to_vec());
		}

		#[test]
		fn every_result_matches_by_title_or_page(catalog in arb_catalog(), query in "[A-Za-z]{1,3}") {
			let needle = query.to_lowercase();
			for section in filter_sections(&catalog, &query) {
				if section.title.to_lowercase().contains(&needle) {
					prop_assert!(catalog.sections().contains(&section));
				} else {
					prop_assert!(!section.pages.is_empty());
					for page in &section.pages {
						prop_assert!(page.to_lowercase().contains(&needle));
					}
				}
			}
		}

		#[test]
		fn filtering_is_idempotent(catalog in arb_catalog(), query in "[A-Za-z ]{0,3}") {
			let once = filter_sections(&catalog, &query);
			let twice = filter_sections(&NavigationCatalog::new(once.clone()), &query);
			prop_assert_eq!(once, twice);
		}
	}
}
