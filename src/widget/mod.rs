//! The search widget state machine.
//!
//! [`SearchWidget`] owns every piece of widget state: the compact and elevated
//! text buffers, the display flags, browse mode and the keyboard selection.
//! Input reaches it as [`WidgetEvent`]s; rendering reads it back through the
//! accessors. The widget performs no I/O of its own, the only outward effect
//! being the injected [`Navigator`].

mod focus;
mod navigator;

use std::time::{Duration, Instant};

use ratatui::crossterm::event::KeyEvent;
use ratatui::style::Style;

pub use focus::{DEFAULT_FOCUS_DELAY, Field};
pub use navigator::{NavigationHistory, Navigator};

use focus::PendingFocus;

use crate::catalog::{NavigationCatalog, PopularQueries};
use crate::filter::BrowseView;
use crate::tui::input::SearchInput;

/// Placeholder shown in both search fields.
pub const DEFAULT_PLACEHOLDER: &str = "What are you looking for?";

/// Host-supplied data and tuning for a [`SearchWidget`].
#[derive(Debug, Clone)]
pub struct WidgetConfig {
	pub catalog: NavigationCatalog,
	pub popular: PopularQueries,
	pub placeholder: String,
	pub focus_delay: Duration,
}

impl Default for WidgetConfig {
	fn default() -> Self {
		Self {
			catalog: NavigationCatalog::default(),
			popular: PopularQueries::default(),
			placeholder: DEFAULT_PLACEHOLDER.to_string(),
			focus_delay: DEFAULT_FOCUS_DELAY,
		}
	}
}

/// Visual mode derived from the `expanded` and `elevated` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
	/// Only the search icon is visible.
	Idle,
	/// The inline field is open.
	Compact,
	/// The modal overlay is open.
	Elevated,
}

/// Direction for moving the keyboard selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMove {
	Previous,
	Next,
}

/// Everything the widget reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
	TriggerClicked,
	TriggerHovered(bool),
	/// Click or focus on the compact field or its shortcut hint.
	FieldClicked,
	/// The clear button inside the compact field.
	CompactCleared,
	CompactKey(KeyEvent),
	CompactChanged(String),
	/// Ctrl+K or Cmd+K.
	Shortcut,
	Escape,
	/// Click anywhere outside the compact widget.
	OutsideClicked,
	/// Click on the modal backdrop.
	BackdropClicked,
	CloseClicked,
	BrowseToggled,
	ElevatedKey(KeyEvent),
	ElevatedChanged(String),
	PageSelected(String),
	PopularSelected(String),
	Select(SelectionMove),
	ActivateSelection,
}

/// Whether an event had any meaning in the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
	Consumed,
	Ignored,
}

/// An activatable entry of the elevated content panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelItem {
	Page(String),
	Chip(String),
}

/// Global search bar that expands from an icon into a field and a modal.
#[derive(Debug)]
pub struct SearchWidget<N> {
	config: WidgetConfig,
	navigator: N,
	expanded: bool,
	elevated: bool,
	browse_mode: bool,
	tooltip_visible: bool,
	compact: SearchInput<'static>,
	elevated_input: SearchInput<'static>,
	focus: Option<Field>,
	pending_focus: Option<PendingFocus>,
	selected: usize,
}

impl<N: Navigator> SearchWidget<N> {
	pub fn new(config: WidgetConfig, navigator: N) -> Self {
		let compact = SearchInput::with_placeholder("", config.placeholder.clone());
		let elevated_input = SearchInput::with_placeholder("", config.placeholder.clone());
		Self {
			config,
			navigator,
			expanded: false,
			elevated: false,
			browse_mode: false,
			tooltip_visible: false,
			compact,
			elevated_input,
			focus: None,
			pending_focus: None,
			selected: 0,
		}
	}

	#[must_use]
	pub fn mode(&self) -> DisplayMode {
		if self.elevated {
			DisplayMode::Elevated
		} else if self.expanded {
			DisplayMode::Compact
		} else {
			DisplayMode::Idle
		}
	}

	#[must_use]
	pub fn is_expanded(&self) -> bool {
		self.expanded
	}

	#[must_use]
	pub fn is_elevated(&self) -> bool {
		self.elevated
	}

	#[must_use]
	pub fn is_browsing(&self) -> bool {
		self.browse_mode
	}

	#[must_use]
	pub fn tooltip_visible(&self) -> bool {
		self.tooltip_visible
	}

	#[must_use]
	pub fn compact_query(&self) -> &str {
		self.compact.text()
	}

	#[must_use]
	pub fn elevated_query(&self) -> &str {
		self.elevated_input.text()
	}

	#[must_use]
	pub fn focus(&self) -> Option<Field> {
		self.focus
	}

	#[must_use]
	pub fn compact_input(&self) -> &SearchInput<'static> {
		&self.compact
	}

	#[must_use]
	pub fn elevated_input(&self) -> &SearchInput<'static> {
		&self.elevated_input
	}

	#[must_use]
	pub fn config(&self) -> &WidgetConfig {
		&self.config
	}

	#[must_use]
	pub fn catalog(&self) -> &NavigationCatalog {
		&self.config.catalog
	}

	#[must_use]
	pub fn popular(&self) -> &PopularQueries {
		&self.config.popular
	}

	pub fn navigator(&self) -> &N {
		&self.navigator
	}

	/// Base text style for both fields.
	pub fn set_field_style(&mut self, style: Style) {
		self.compact.set_style(style);
		self.elevated_input.set_style(style);
	}

	/// Browse panel contents for the current elevated query.
	#[must_use]
	pub fn browse_view(&self) -> BrowseView {
		BrowseView::build(&self.config.catalog, self.elevated_query())
	}

	/// Activatable entries of the panel currently shown, in display order.
	#[must_use]
	pub fn panel_items(&self) -> Vec<PanelItem> {
		if !self.elevated {
			return Vec::new();
		}
		if self.browse_mode {
			self.browse_view()
				.pages()
				.map(|page| PanelItem::Page(page.to_string()))
				.collect()
		} else {
			self.config
				.popular
				.as_slice()
				.iter()
				.map(|query| PanelItem::Chip(query.clone()))
				.collect()
		}
	}

	/// Index of the keyboard selection within [`Self::panel_items`].
	#[must_use]
	pub fn selected_index(&self) -> usize {
		self.selected
	}

	#[must_use]
	pub fn selected_item(&self) -> Option<PanelItem> {
		self.panel_items().into_iter().nth(self.selected)
	}

	/// Open the modal directly, as the global shortcut does.
	pub fn open_elevated(&mut self) {
		self.handle(WidgetEvent::Shortcut);
	}

	pub fn handle(&mut self, event: WidgetEvent) -> EventStatus {
		self.handle_at(event, Instant::now())
	}

	/// Apply `event` using `now` as the reference time for deferred focus.
	pub fn handle_at(&mut self, event: WidgetEvent, now: Instant) -> EventStatus {
		let before = self.mode();
		let status = self.apply(event, now);
		let after = self.mode();
		if before != after {
			tracing::debug!(from = ?before, to = ?after, "search widget transition");
		}
		status
	}

	/// Fire the deferred focus request once it is due.
	///
	/// Returns `true` when a field received focus.
	pub fn tick(&mut self, now: Instant) -> bool {
		let Some(pending) = self.pending_focus else {
			return false;
		};
		if !pending.is_due(now) {
			return false;
		}
		self.pending_focus = None;

		let target_open = match pending.field() {
			Field::Compact => self.mode() == DisplayMode::Compact,
			Field::Elevated => self.elevated,
		};
		if target_open {
			self.set_focus(Some(pending.field()));
		}
		target_open
	}

	/// Return to the idle state, discarding both query buffers.
	pub fn close(&mut self) {
		self.elevated = false;
		self.expanded = false;
		self.browse_mode = false;
		self.compact.clear();
		self.elevated_input.clear();
		self.set_focus(None);
		self.selected = 0;
	}

	fn apply(&mut self, event: WidgetEvent, now: Instant) -> EventStatus {
		use EventStatus::{Consumed, Ignored};

		match event {
			WidgetEvent::TriggerClicked => {
				if !self.expanded {
					self.expanded = true;
					self.pending_focus =
						Some(PendingFocus::after(Field::Compact, self.config.focus_delay, now));
					Consumed
				} else if !self.elevated {
					self.elevate();
					Consumed
				} else {
					Ignored
				}
			}
			WidgetEvent::TriggerHovered(hovered) => {
				self.tooltip_visible = hovered;
				Consumed
			}
			WidgetEvent::FieldClicked => {
				if self.mode() != DisplayMode::Compact {
					return Ignored;
				}
				self.elevate();
				Consumed
			}
			WidgetEvent::CompactCleared => {
				if self.mode() != DisplayMode::Compact {
					return Ignored;
				}
				self.compact.clear();
				Consumed
			}
			WidgetEvent::CompactKey(key) => {
				if self.mode() != DisplayMode::Compact {
					return Ignored;
				}
				if self.compact.input(key) {
					self.compact_changed();
				}
				Consumed
			}
			WidgetEvent::CompactChanged(text) => {
				if self.mode() != DisplayMode::Compact {
					return Ignored;
				}
				self.compact.set_text(&text);
				self.compact_changed();
				Consumed
			}
			WidgetEvent::Shortcut => {
				self.expanded = true;
				self.elevate();
				Consumed
			}
			WidgetEvent::Escape | WidgetEvent::BackdropClicked => {
				if !self.elevated {
					return Ignored;
				}
				self.close();
				Consumed
			}
			WidgetEvent::OutsideClicked => {
				if self.mode() != DisplayMode::Compact {
					return Ignored;
				}
				self.close();
				Consumed
			}
			WidgetEvent::CloseClicked => {
				if !self.elevated {
					return Ignored;
				}
				if self.elevated_query().is_empty() {
					self.close();
				} else {
					self.elevated_input.clear();
					self.selected = 0;
				}
				Consumed
			}
			WidgetEvent::BrowseToggled => {
				if !self.elevated {
					return Ignored;
				}
				self.browse_mode = !self.browse_mode;
				self.selected = 0;
				Consumed
			}
			WidgetEvent::ElevatedKey(key) => {
				if !self.elevated {
					return Ignored;
				}
				if self.elevated_input.input(key) {
					self.selected = 0;
				}
				Consumed
			}
			WidgetEvent::ElevatedChanged(text) => {
				if !self.elevated {
					return Ignored;
				}
				self.elevated_input.set_text(&text);
				self.selected = 0;
				Consumed
			}
			WidgetEvent::PageSelected(page) => {
				if !self.elevated {
					return Ignored;
				}
				self.activate_page(&page);
				Consumed
			}
			WidgetEvent::PopularSelected(query) => {
				if !self.elevated {
					return Ignored;
				}
				self.elevated_input.set_text(&query);
				self.browse_mode = false;
				self.selected = 0;
				Consumed
			}
			WidgetEvent::Select(direction) => {
				if !self.elevated {
					return Ignored;
				}
				self.move_selection(direction);
				Consumed
			}
			WidgetEvent::ActivateSelection => match self.selected_item() {
				Some(PanelItem::Page(page)) => self.apply(WidgetEvent::PageSelected(page), now),
				Some(PanelItem::Chip(query)) => {
					self.apply(WidgetEvent::PopularSelected(query), now)
				}
				None => Ignored,
			},
		}
	}

	fn elevate(&mut self) {
		self.elevated = true;
		self.expanded = true;
		self.selected = 0;
		self.set_focus(Some(Field::Elevated));
	}

	fn compact_changed(&mut self) {
		self.browse_mode = false;
		if !self.elevated {
			self.elevate();
		}
	}

	fn activate_page(&mut self, page: &str) {
		if page.trim().is_empty() {
			tracing::warn!("ignoring navigation to a blank page label");
		} else {
			self.navigator.navigate(page);
		}
		self.close();
	}

	fn move_selection(&mut self, direction: SelectionMove) {
		let len = self.panel_items().len();
		if len == 0 {
			self.selected = 0;
			return;
		}
		self.selected = match direction {
			SelectionMove::Previous => self.selected.saturating_sub(1),
			SelectionMove::Next => (self.selected + 1).min(len - 1),
		};
	}

	fn set_focus(&mut self, focus: Option<Field>) {
		self.focus = focus;
		self.compact.set_focused(focus == Some(Field::Compact));
		self.elevated_input.set_focused(focus == Some(Field::Elevated));
	}
}

#[cfg(test)]
mod tests;
