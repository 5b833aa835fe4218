use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::Paragraph;

use super::cell_width;
use crate::tui::hitmap::{HitMap, Target};
use crate::tui::input::SearchInput;
use crate::tui::theme::Theme;

/// Preferred width of the inline field, including its decorations.
pub const COMPACT_WIDTH: u16 = 40;

const PREFIX: &str = "⌕ ";
const CLEAR: &str = " ✕";

/// Argument bundle for drawing the inline search field.
pub struct CompactContext<'a> {
	pub input: &'a SearchInput<'static>,
	pub shortcut_hint: &'a str,
	pub theme: &'a Theme,
}

/// Draw the inline field right-aligned within `area`.
pub fn render_compact(
	frame: &mut Frame,
	area: Rect,
	context: CompactContext<'_>,
	hits: &mut HitMap,
) {
	let CompactContext {
		input,
		shortcut_hint,
		theme,
	} = context;

	let width = COMPACT_WIDTH.min(area.width);
	let bar = Rect::new(area.right().saturating_sub(width), area.y, width, area.height.min(1));
	frame.render_widget(Paragraph::new("").style(theme.field_style()), bar);

	let hint = format!(" {shortcut_hint} ");
	let hint_width = cell_width(&hint);
	let clear_width = if input.is_empty() {
		0
	} else {
		cell_width(CLEAR)
	};

	let segments = Layout::default()
		.direction(Direction::Horizontal)
		.constraints([
			Constraint::Length(cell_width(PREFIX)),
			Constraint::Min(1),
			Constraint::Length(hint_width),
			Constraint::Length(clear_width),
		])
		.split(bar);

	frame.render_widget(
		Paragraph::new(PREFIX).style(theme.field_style().patch(theme.hint_style())),
		segments[0],
	);
	frame.render_widget(input.widget(), segments[1]);
	frame.render_widget(
		Paragraph::new(hint).style(theme.field_style().patch(theme.hint_style())),
		segments[2],
	);
	if clear_width > 0 {
		frame.render_widget(
			Paragraph::new(CLEAR).style(theme.field_style().patch(theme.hint_style())),
			segments[3],
		);
	}

	hits.push(segments[0].union(segments[1]), Target::CompactField);
	hits.push(segments[2], Target::ShortcutHint);
	hits.push(segments[3], Target::CompactClear);
}
