use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph};

use super::panel::{BrowsePanel, PopularPanel, render_browse, render_popular};
use crate::filter::BrowseView;
use crate::tui::hitmap::{HitMap, Target};
use crate::tui::input::SearchInput;
use crate::tui::theme::Theme;
use crate::ui::UiConfig;

const MAX_PANEL_WIDTH: u16 = 72;
const MIN_PANEL_WIDTH: u16 = 24;

const PREFIX: &str = "⌕ ";
const BROWSE_ICON: &str = " ▦ ";
const CLOSE_ICON: &str = " ✕ ";

/// Which body the modal shows below its header.
pub enum ModalBody<'a> {
	Popular { queries: &'a [String] },
	Browse { view: &'a BrowseView },
}

/// Argument bundle for drawing the elevated search modal.
pub struct ModalContext<'a> {
	pub input: &'a SearchInput<'static>,
	pub body: ModalBody<'a>,
	pub selected: usize,
	pub ui: &'a UiConfig,
	pub theme: &'a Theme,
}

/// Rectangle of the modal panel for a given screen area.
#[must_use]
pub fn panel_area(screen: Rect) -> Rect {
	let width = screen.width.saturating_sub(4).clamp(MIN_PANEL_WIDTH, MAX_PANEL_WIDTH);
	let width = width.min(screen.width);
	let height = (screen.height.saturating_mul(8) / 10).max(6).min(screen.height);
	let x = screen.x + (screen.width - width) / 2;
	let y = screen.y + (screen.height - height) / 2;
	Rect::new(x, y, width, height)
}

/// Paint the backdrop over `screen` and the modal panel on top of it.
pub fn render_modal(
	frame: &mut Frame,
	screen: Rect,
	context: ModalContext<'_>,
	hits: &mut HitMap,
) {
	let ModalContext {
		input,
		body,
		selected,
		ui,
		theme,
	} = context;

	frame.render_widget(Block::default().style(theme.backdrop_style()), screen);
	hits.push(screen, Target::Backdrop);

	let panel = panel_area(screen);
	frame.render_widget(Clear, panel);
	let block = Block::bordered()
		.border_type(BorderType::Rounded)
		.border_style(theme.border_style())
		.style(theme.field_style());
	let inner = block.inner(panel);
	frame.render_widget(block, panel);
	hits.push(panel, Target::ModalPanel);

	let rows = Layout::default()
		.direction(Direction::Vertical)
		.constraints([
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Min(0),
		])
		.split(inner);

	let browsing = matches!(body, ModalBody::Browse { .. });
	render_header(frame, rows[0], input, browsing, theme, hits);
	frame.render_widget(
		Paragraph::new("─".repeat(rows[1].width as usize)).style(theme.border_style()),
		rows[1],
	);

	match body {
		ModalBody::Popular { queries } => render_popular(
			frame,
			rows[2],
			PopularPanel {
				heading: &ui.popular_heading,
				queries,
				selected,
				theme,
			},
			hits,
		),
		ModalBody::Browse { view } => render_browse(
			frame,
			rows[2],
			BrowsePanel {
				view,
				no_results_label: &ui.no_results_label,
				selected,
				theme,
			},
			hits,
		),
	}
}

fn render_header(
	frame: &mut Frame,
	area: Rect,
	input: &SearchInput<'static>,
	browsing: bool,
	theme: &Theme,
	hits: &mut HitMap,
) {
	let segments = Layout::default()
		.direction(Direction::Horizontal)
		.constraints([
			Constraint::Length(2),
			Constraint::Min(1),
			Constraint::Length(3),
			Constraint::Length(3),
		])
		.split(area);

	frame.render_widget(Paragraph::new(PREFIX).style(theme.hint_style()), segments[0]);
	frame.render_widget(input.widget(), segments[1]);
	frame.render_widget(
		Paragraph::new(BROWSE_ICON).style(theme.toggle_style(browsing)),
		segments[2],
	);
	frame.render_widget(Paragraph::new(CLOSE_ICON).style(theme.hint_style()), segments[3]);

	hits.push(segments[0].union(segments[1]), Target::ModalField);
	hits.push(segments[2], Target::BrowseToggle);
	hits.push(segments[3], Target::Close);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn panel_is_centered_and_bounded() {
		let panel = panel_area(Rect::new(0, 0, 120, 40));
		assert_eq!(panel.width, MAX_PANEL_WIDTH);
		assert_eq!(panel.x, (120 - MAX_PANEL_WIDTH) / 2);
		assert_eq!(panel.height, 32);
	}

	#[test]
	fn panel_fits_tiny_screens() {
		let screen = Rect::new(0, 0, 10, 4);
		let panel = panel_area(screen);
		assert!(panel.width <= screen.width);
		assert!(panel.height <= screen.height);
	}
}
