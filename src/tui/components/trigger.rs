use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::widgets::{Clear, Paragraph};

use super::cell_width;
use crate::tui::hitmap::{HitMap, Target};
use crate::tui::theme::Theme;

/// Label drawn on the collapsed search button.
pub const TRIGGER_LABEL: &str = " ⌕ ";

/// Cells occupied by the trigger button.
pub const TRIGGER_WIDTH: u16 = 3;

/// Argument bundle for drawing the collapsed search button.
pub struct TriggerContext<'a> {
	pub hovered: bool,
	pub tooltip: Option<&'a str>,
	pub theme: &'a Theme,
}

/// Draw the search icon right-aligned in `area` and its tooltip below it.
///
/// Returns the rectangle of the button itself.
pub fn render_trigger(
	frame: &mut Frame,
	area: Rect,
	context: TriggerContext<'_>,
	hits: &mut HitMap,
) -> Rect {
	let TriggerContext {
		hovered,
		tooltip,
		theme,
	} = context;

	let width = TRIGGER_WIDTH.min(area.width);
	let button = Rect::new(area.right().saturating_sub(width), area.y, width, area.height.min(1));
	let style = if hovered {
		theme.trigger_hover_style()
	} else {
		theme.trigger_style()
	};
	frame.render_widget(Paragraph::new(TRIGGER_LABEL).style(style), button);
	hits.push(button, Target::Trigger);

	if let Some(text) = tooltip {
		render_tooltip(frame, button, text, theme);
	}

	button
}

fn render_tooltip(frame: &mut Frame, anchor: Rect, text: &str, theme: &Theme) {
	let screen = frame.area();
	let label = format!(" {text} ");
	let width = cell_width(&label).min(screen.width);
	let y = anchor.bottom();
	if y >= screen.bottom() || width == 0 {
		return;
	}
	let x = anchor.right().saturating_sub(width).max(screen.x);
	let area = Rect::new(x, y, width, 1);
	frame.render_widget(Clear, area);
	frame.render_widget(
		Paragraph::new(label)
			.alignment(Alignment::Center)
			.style(theme.tooltip_style()),
		area,
	);
}
