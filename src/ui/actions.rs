use ratatui::crossterm::event::{
	Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::{App, HostOutcome};
use crate::tui::hitmap::Target;
use crate::widget::{DisplayMode, SelectionMove, WidgetEvent};

/// Whether `key` is the global open shortcut (Ctrl+K or Cmd+K).
#[must_use]
pub fn is_open_shortcut(key: &KeyEvent) -> bool {
	matches!(key.code, KeyCode::Char('k') | KeyCode::Char('K'))
		&& key
			.modifiers
			.intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER | KeyModifiers::META)
}

impl App {
	/// Dispatch a terminal event. Returns an outcome once the host should exit.
	pub(crate) fn handle_event(&mut self, event: Event) -> Option<HostOutcome> {
		match event {
			Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
			Event::Mouse(mouse) => {
				self.handle_mouse(mouse);
				None
			}
			_ => None,
		}
	}

	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<HostOutcome> {
		if is_open_shortcut(&key) {
			self.widget.handle(WidgetEvent::Shortcut);
			return None;
		}
		if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
			return Some(self.outcome());
		}

		let event = match self.widget.mode() {
			DisplayMode::Idle => match key.code {
				KeyCode::Char('/') | KeyCode::Enter => WidgetEvent::TriggerClicked,
				KeyCode::Char('q') | KeyCode::Esc => return Some(self.outcome()),
				_ => return None,
			},
			DisplayMode::Compact => match key.code {
				KeyCode::Enter => WidgetEvent::FieldClicked,
				KeyCode::Esc => WidgetEvent::OutsideClicked,
				_ => WidgetEvent::CompactKey(key),
			},
			DisplayMode::Elevated => match key.code {
				KeyCode::Esc => WidgetEvent::Escape,
				KeyCode::Tab | KeyCode::BackTab => WidgetEvent::BrowseToggled,
				KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
					WidgetEvent::CloseClicked
				}
				KeyCode::Up => WidgetEvent::Select(SelectionMove::Previous),
				KeyCode::Down => WidgetEvent::Select(SelectionMove::Next),
				KeyCode::Enter => WidgetEvent::ActivateSelection,
				_ => WidgetEvent::ElevatedKey(key),
			},
		};
		self.widget.handle(event);
		None
	}

	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
		match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) => self.click(mouse.column, mouse.row),
			MouseEventKind::Moved => self.hover(mouse.column, mouse.row),
			_ => {}
		}
	}

	/// Resolve a click against the last rendered frame.
	pub(crate) fn click(&mut self, column: u16, row: u16) {
		let event = match self.hits.resolve(column, row).cloned() {
			Some(Target::Trigger) => WidgetEvent::TriggerClicked,
			Some(Target::CompactField | Target::ShortcutHint) => WidgetEvent::FieldClicked,
			Some(Target::CompactClear) => WidgetEvent::CompactCleared,
			Some(Target::Backdrop) => WidgetEvent::BackdropClicked,
			Some(Target::ModalPanel | Target::ModalField) => return,
			Some(Target::BrowseToggle) => WidgetEvent::BrowseToggled,
			Some(Target::Close) => WidgetEvent::CloseClicked,
			Some(Target::Chip(query)) => WidgetEvent::PopularSelected(query),
			Some(Target::Page(page)) => WidgetEvent::PageSelected(page),
			None => WidgetEvent::OutsideClicked,
		};
		self.widget.handle(event);
	}

	fn hover(&mut self, column: u16, row: u16) {
		let hovered = self.hits.resolve(column, row) == Some(&Target::Trigger);
		if hovered != self.widget.tooltip_visible() {
			self.widget.handle(WidgetEvent::TriggerHovered(hovered));
		}
	}
}
