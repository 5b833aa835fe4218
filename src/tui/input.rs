//! Single-line text field used by the compact and elevated search inputs.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

/// Thin wrapper over [`TextArea`] that behaves like a one-line input.
#[derive(Debug, Clone)]
pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
	placeholder: String,
	style: Style,
	focused: bool,
}

impl<'a> SearchInput<'a> {
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		Self::with_placeholder(initial, "")
	}

	#[must_use]
	pub fn with_placeholder(initial: impl Into<String>, placeholder: impl Into<String>) -> Self {
		let placeholder = placeholder.into();
		let textarea = configured(initial.into(), &placeholder, Style::default(), false);
		Self {
			textarea,
			placeholder,
			style: Style::default(),
			focused: false,
		}
	}

	/// Current contents of the field.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.text().is_empty()
	}

	/// Feed an editing key into the field and report whether the text changed.
	///
	/// Keys that would break the single-line invariant are rejected.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if breaks_line(&key) {
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(key);
		if self.textarea.lines().len() > 1 {
			let joined = self.textarea.lines().concat();
			self.set_text(&joined);
		}
		self.text() != before
	}

	/// Replace the contents and park the cursor at the end.
	pub fn set_text(&mut self, text: &str) {
		self.textarea = configured(text.to_string(), &self.placeholder, self.style, self.focused);
	}

	pub fn clear(&mut self) {
		self.set_text("");
	}

	#[must_use]
	pub fn is_focused(&self) -> bool {
		self.focused
	}

	/// Toggle whether the cursor is drawn.
	pub fn set_focused(&mut self, focused: bool) {
		if self.focused != focused {
			self.focused = focused;
			self.textarea.set_cursor_style(cursor_style(focused));
		}
	}

	/// Column of the cursor within the line, in characters.
	#[must_use]
	pub fn cursor_column(&self) -> usize {
		self.textarea.cursor().1
	}

	/// Borrow the underlying widget for rendering.
	#[must_use]
	pub fn widget(&self) -> &TextArea<'a> {
		&self.textarea
	}

	/// Apply the base text style used when rendering. Survives [`Self::set_text`].
	pub fn set_style(&mut self, style: Style) {
		self.style = style;
		self.textarea.set_style(style);
	}

	#[must_use]
	pub fn style(&self) -> Style {
		self.style
	}
}

/// Keys that submit, move between lines or insert a line break.
fn breaks_line(key: &KeyEvent) -> bool {
	match key.code {
		KeyCode::Enter
		| KeyCode::Tab
		| KeyCode::BackTab
		| KeyCode::Esc
		| KeyCode::Up
		| KeyCode::Down => true,
		KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
		_ => false,
	}
}

fn configured<'a>(text: String, placeholder: &str, style: Style, focused: bool) -> TextArea<'a> {
	let single_line = text.replace(['\n', '\r'], " ");
	let mut textarea = TextArea::new(vec![single_line]);
	textarea.set_style(style);
	textarea.set_cursor_line_style(Style::default());
	textarea.set_cursor_style(cursor_style(focused));
	textarea.set_placeholder_text(placeholder);
	textarea.set_placeholder_style(Style::new().add_modifier(Modifier::DIM));
	textarea.move_cursor(CursorMove::End);
	textarea
}

fn cursor_style(focused: bool) -> Style {
	if focused {
		Style::new().add_modifier(Modifier::REVERSED)
	} else {
		Style::default()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_reports_changes() {
		let mut input = SearchInput::new("");
		assert!(input.input(key(KeyCode::Char('a'))));
		assert!(input.input(key(KeyCode::Char('b'))));
		assert_eq!(input.text(), "ab");
		assert!(input.input(key(KeyCode::Backspace)));
		assert_eq!(input.text(), "a");
	}

	#[test]
	fn line_breaking_keys_are_rejected() {
		let mut input = SearchInput::new("query");
		assert!(!input.input(key(KeyCode::Enter)));
		assert!(!input.input(key(KeyCode::Tab)));
		assert_eq!(input.text(), "query");
	}

	#[test]
	fn control_line_breaks_keep_a_single_line() {
		let mut input = SearchInput::new("ab");
		assert!(!input.input(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL)));
		assert!(!input.input(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::CONTROL)));

		assert!(input.input(key(KeyCode::Char('c'))));
		assert_eq!(input.widget().lines().len(), 1);
		assert_eq!(input.text(), "abc");
	}

	#[test]
	fn style_survives_text_replacement() {
		let style = Style::new().add_modifier(Modifier::BOLD);
		let mut input = SearchInput::new("");
		input.set_style(style);
		input.set_text("pricing");
		assert_eq!(input.style(), style);
		assert_eq!(input.widget().style(), style);
	}

	#[test]
	fn cursor_movement_is_not_a_change() {
		let mut input = SearchInput::new("query");
		assert!(!input.input(key(KeyCode::Left)));
		assert_eq!(input.cursor_column(), 4);
	}

	#[test]
	fn set_text_places_cursor_at_end() {
		let mut input = SearchInput::with_placeholder("", "Find");
		input.set_text("React Components");
		assert_eq!(input.text(), "React Components");
		assert_eq!(input.cursor_column(), "React Components".chars().count());
		input.clear();
		assert!(input.is_empty());
	}
}
