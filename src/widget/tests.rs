use std::time::{Duration, Instant};

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::*;
use crate::catalog::{Section, SectionIcon};

fn widget() -> SearchWidget<NavigationHistory> {
	SearchWidget::new(WidgetConfig::default(), NavigationHistory::default())
}

fn key(ch: char) -> KeyEvent {
	KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE)
}

fn assert_idle<N: Navigator>(widget: &SearchWidget<N>) {
	assert_eq!(widget.mode(), DisplayMode::Idle);
	assert!(!widget.is_expanded());
	assert!(!widget.is_elevated());
	assert!(!widget.is_browsing());
	assert_eq!(widget.compact_query(), "");
	assert_eq!(widget.elevated_query(), "");
	assert_eq!(widget.focus(), None);
}

#[test]
fn starts_idle() {
	assert_idle(&widget());
}

#[test]
fn trigger_expands_then_elevates() {
	let mut widget = widget();
	assert_eq!(widget.handle(WidgetEvent::TriggerClicked), EventStatus::Consumed);
	assert_eq!(widget.mode(), DisplayMode::Compact);

	widget.handle(WidgetEvent::TriggerClicked);
	assert_eq!(widget.mode(), DisplayMode::Elevated);
	assert_eq!(widget.focus(), Some(Field::Elevated));
}

#[test]
fn compact_field_focuses_after_delay() {
	let mut widget = widget();
	let start = Instant::now();
	widget.handle_at(WidgetEvent::TriggerClicked, start);
	assert_eq!(widget.focus(), None);

	assert!(!widget.tick(start + Duration::from_millis(100)));
	assert!(widget.tick(start + DEFAULT_FOCUS_DELAY));
	assert_eq!(widget.focus(), Some(Field::Compact));
	assert!(widget.compact_input().is_focused());
}

#[test]
fn deferred_focus_after_close_is_a_no_op() {
	let mut widget = widget();
	let start = Instant::now();
	widget.handle_at(WidgetEvent::TriggerClicked, start);
	widget.handle_at(WidgetEvent::OutsideClicked, start);

	assert!(!widget.tick(start + DEFAULT_FOCUS_DELAY));
	assert_idle(&widget);
	assert!(!widget.tick(start + DEFAULT_FOCUS_DELAY * 2));
}

#[test]
fn deferred_focus_does_not_steal_from_modal() {
	let mut widget = widget();
	let start = Instant::now();
	widget.handle_at(WidgetEvent::TriggerClicked, start);
	widget.handle_at(WidgetEvent::FieldClicked, start);

	assert!(!widget.tick(start + DEFAULT_FOCUS_DELAY));
	assert_eq!(widget.focus(), Some(Field::Elevated));
}

#[test]
fn typing_in_compact_field_forces_elevation_without_copying() {
	let mut widget = widget();
	widget.handle(WidgetEvent::TriggerClicked);
	widget.handle(WidgetEvent::CompactKey(key('r')));

	assert_eq!(widget.mode(), DisplayMode::Elevated);
	assert_eq!(widget.compact_query(), "r");
	assert_eq!(widget.elevated_query(), "");
}

#[test]
fn compact_field_is_inert_while_elevated() {
	let mut widget = widget();
	widget.handle(WidgetEvent::TriggerClicked);
	widget.handle(WidgetEvent::CompactChanged("we".into()));
	widget.handle(WidgetEvent::BrowseToggled);
	assert!(widget.is_browsing());

	// The compact field is hidden while elevated.
	assert_eq!(
		widget.handle(WidgetEvent::CompactChanged("web".into())),
		EventStatus::Ignored
	);
	assert!(widget.is_browsing());
}

#[test]
fn compact_clear_button_only_clears_compact_buffer() {
	let mut widget = widget();
	widget.handle(WidgetEvent::TriggerClicked);
	widget.compact.set_text("draft");
	widget.handle(WidgetEvent::CompactCleared);
	assert_eq!(widget.compact_query(), "");
	assert_eq!(widget.mode(), DisplayMode::Compact);
}

#[test]
fn outside_click_collapses_compact_field() {
	let mut widget = widget();
	widget.handle(WidgetEvent::TriggerClicked);
	widget.compact.set_text("draft");

	assert_eq!(widget.handle(WidgetEvent::OutsideClicked), EventStatus::Consumed);
	assert_idle(&widget);
}

#[test]
fn outside_click_is_ignored_while_idle_or_elevated() {
	let mut widget = widget();
	assert_eq!(widget.handle(WidgetEvent::OutsideClicked), EventStatus::Ignored);

	widget.handle(WidgetEvent::Shortcut);
	assert_eq!(widget.handle(WidgetEvent::OutsideClicked), EventStatus::Ignored);
	assert!(widget.is_elevated());
}

#[test]
fn shortcut_elevates_from_any_state() {
	let mut widget = widget();
	widget.handle(WidgetEvent::Shortcut);
	assert_eq!(widget.mode(), DisplayMode::Elevated);
	assert!(widget.is_expanded());

	widget.handle(WidgetEvent::Shortcut);
	assert_eq!(widget.mode(), DisplayMode::Elevated);
}

#[test]
fn escape_is_ignored_unless_elevated() {
	let mut widget = widget();
	widget.handle(WidgetEvent::TriggerClicked);
	assert_eq!(widget.handle(WidgetEvent::Escape), EventStatus::Ignored);
	assert_eq!(widget.mode(), DisplayMode::Compact);
}

#[test]
fn close_paths_reset_every_buffer() {
	let closers = [
		WidgetEvent::Escape,
		WidgetEvent::BackdropClicked,
		WidgetEvent::CloseClicked,
	];
	for closer in closers {
		let mut widget = widget();
		widget.handle(WidgetEvent::TriggerClicked);
		widget.handle(WidgetEvent::CompactChanged("mob".into()));
		widget.handle(WidgetEvent::BrowseToggled);
		if closer != WidgetEvent::CloseClicked {
			widget.handle(WidgetEvent::ElevatedChanged("mobile".into()));
		}

		assert_eq!(widget.handle(closer.clone()), EventStatus::Consumed, "{closer:?}");
		assert_idle(&widget);
	}
}

#[test]
fn close_icon_clears_query_before_closing() {
	let mut widget = widget();
	widget.handle(WidgetEvent::Shortcut);
	widget.handle(WidgetEvent::ElevatedChanged("docs".into()));

	widget.handle(WidgetEvent::CloseClicked);
	assert_eq!(widget.mode(), DisplayMode::Elevated);
	assert_eq!(widget.elevated_query(), "");

	widget.handle(WidgetEvent::CloseClicked);
	assert_idle(&widget);
}

#[test]
fn browse_toggle_flips_and_keeps_query() {
	let mut widget = widget();
	widget.handle(WidgetEvent::Shortcut);
	widget.handle(WidgetEvent::ElevatedChanged("blog".into()));
	widget.handle(WidgetEvent::BrowseToggled);
	assert!(widget.is_browsing());
	assert_eq!(widget.elevated_query(), "blog");

	widget.handle(WidgetEvent::ElevatedKey(key('s')));
	assert!(widget.is_browsing());

	widget.handle(WidgetEvent::BrowseToggled);
	assert!(!widget.is_browsing());
}

#[test]
fn popular_chip_copies_query_and_leaves_browse_mode() {
	let mut widget = widget();
	widget.handle(WidgetEvent::Shortcut);
	widget.handle(WidgetEvent::BrowseToggled);

	widget.handle(WidgetEvent::PopularSelected("React Components".into()));
	assert!(!widget.is_browsing());
	assert_eq!(widget.elevated_query(), "React Components");
	assert_eq!(widget.mode(), DisplayMode::Elevated);
}

#[test]
fn page_click_navigates_then_closes() {
	let mut widget = widget();
	widget.handle(WidgetEvent::Shortcut);
	widget.handle(WidgetEvent::BrowseToggled);
	widget.handle(WidgetEvent::ElevatedChanged("mob".into()));

	widget.handle(WidgetEvent::PageSelected("Mobile Apps".into()));
	assert_eq!(widget.navigator().visited(), ["Mobile Apps"]);
	assert_idle(&widget);
}

#[test]
fn blank_page_label_closes_without_navigating() {
	let mut widget = widget();
	widget.handle(WidgetEvent::Shortcut);
	widget.handle(WidgetEvent::BrowseToggled);

	widget.handle(WidgetEvent::PageSelected("  ".into()));
	assert!(widget.navigator().visited().is_empty());
	assert_idle(&widget);
}

#[test]
fn page_selection_requires_open_modal() {
	let mut widget = widget();
	assert_eq!(
		widget.handle(WidgetEvent::PageSelected("Home".into())),
		EventStatus::Ignored
	);
	assert!(widget.navigator().visited().is_empty());
}

#[test]
fn closure_navigator_receives_exact_label() {
	let mut seen = Vec::new();
	{
		let mut widget = SearchWidget::new(WidgetConfig::default(), |page: &str| {
			seen.push(page.to_string())
		});
		widget.handle(WidgetEvent::Shortcut);
		widget.handle(WidgetEvent::BrowseToggled);
		widget.handle(WidgetEvent::PageSelected("UI/UX Design".into()));
		assert_eq!(widget.mode(), DisplayMode::Idle);
	}
	assert_eq!(seen, ["UI/UX Design"]);
}

#[test]
fn selection_walks_chips_and_activates() {
	let mut widget = widget();
	widget.handle(WidgetEvent::Shortcut);
	widget.handle(WidgetEvent::Select(SelectionMove::Next));
	widget.handle(WidgetEvent::Select(SelectionMove::Next));
	assert_eq!(
		widget.selected_item(),
		Some(PanelItem::Chip("Next.js Best Practices".into()))
	);

	widget.handle(WidgetEvent::ActivateSelection);
	assert_eq!(widget.elevated_query(), "Next.js Best Practices");
	assert_eq!(widget.selected_index(), 0);
}

#[test]
fn selection_clamps_at_both_ends() {
	let mut widget = widget();
	widget.handle(WidgetEvent::Shortcut);
	widget.handle(WidgetEvent::Select(SelectionMove::Previous));
	assert_eq!(widget.selected_index(), 0);

	for _ in 0..20 {
		widget.handle(WidgetEvent::Select(SelectionMove::Next));
	}
	assert_eq!(widget.selected_index(), widget.popular().len() - 1);
}

#[test]
fn activating_selected_page_navigates() {
	let mut widget = widget();
	widget.handle(WidgetEvent::Shortcut);
	widget.handle(WidgetEvent::BrowseToggled);
	widget.handle(WidgetEvent::ElevatedChanged("contact".into()));
	widget.handle(WidgetEvent::Select(SelectionMove::Next));

	assert_eq!(
		widget.selected_item(),
		Some(PanelItem::Page("Contact Support".into()))
	);
	widget.handle(WidgetEvent::ActivateSelection);
	assert_eq!(widget.navigator().visited(), ["Contact Support"]);
	assert_idle(&widget);
}

#[test]
fn unmatched_browse_query_offers_full_catalog() {
	let mut widget = widget();
	widget.handle(WidgetEvent::Shortcut);
	widget.handle(WidgetEvent::BrowseToggled);
	widget.handle(WidgetEvent::ElevatedChanged("zzz-no-match".into()));

	let view = widget.browse_view();
	assert_eq!(view.no_results_for.as_deref(), Some("zzz-no-match"));
	assert_eq!(view.sections, widget.catalog().sections());
	assert_eq!(widget.panel_items().len(), widget.catalog().page_count());
}

#[test]
fn empty_catalog_and_popular_list_are_safe() {
	let config = WidgetConfig {
		catalog: NavigationCatalog::empty(),
		popular: PopularQueries::new(Vec::<String>::new()),
		..WidgetConfig::default()
	};
	let mut widget = SearchWidget::new(config, NavigationHistory::default());
	widget.handle(WidgetEvent::Shortcut);
	widget.handle(WidgetEvent::Select(SelectionMove::Next));
	assert_eq!(widget.handle(WidgetEvent::ActivateSelection), EventStatus::Ignored);

	widget.handle(WidgetEvent::BrowseToggled);
	widget.handle(WidgetEvent::ElevatedChanged("anything".into()));
	assert!(widget.panel_items().is_empty());
	assert_eq!(widget.handle(WidgetEvent::ActivateSelection), EventStatus::Ignored);
}

#[test]
fn rapid_toggles_end_in_consistent_state() {
	let mut widget = widget();
	let events = [
		WidgetEvent::TriggerClicked,
		WidgetEvent::Shortcut,
		WidgetEvent::BrowseToggled,
		WidgetEvent::BrowseToggled,
		WidgetEvent::BrowseToggled,
		WidgetEvent::Escape,
		WidgetEvent::Escape,
		WidgetEvent::TriggerClicked,
		WidgetEvent::OutsideClicked,
	];
	for event in events {
		widget.handle(event);
	}
	assert_idle(&widget);
}

#[test]
fn custom_catalog_is_used_for_browsing() {
	let config = WidgetConfig {
		catalog: NavigationCatalog::new(vec![Section::new(
			"Docs",
			SectionIcon::Resource,
			["Install", "Usage"],
		)]),
		..WidgetConfig::default()
	};
	let mut widget = SearchWidget::new(config, NavigationHistory::default());
	widget.handle(WidgetEvent::Shortcut);
	widget.handle(WidgetEvent::BrowseToggled);
	assert_eq!(
		widget.panel_items(),
		[
			PanelItem::Page("Install".into()),
			PanelItem::Page("Usage".into())
		]
	);
}

#[test]
fn hover_controls_tooltip() {
	let mut widget = widget();
	widget.handle(WidgetEvent::TriggerHovered(true));
	assert!(widget.tooltip_visible());
	widget.handle(WidgetEvent::TriggerHovered(false));
	assert!(!widget.tooltip_visible());
}
