//! Content panels shown inside the elevated modal.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Stylize;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::cell_width;
use crate::catalog::{Section, SectionIcon};
use crate::filter::BrowseView;
use crate::tui::hitmap::{HitMap, Target};
use crate::tui::theme::Theme;

const CHIP_GAP: u16 = 1;
const COLUMN_GAP: u16 = 2;
const PAGE_INDENT: u16 = 3;
const TWO_COLUMN_MIN_WIDTH: u16 = 48;

/// Argument bundle for the popular-searches panel.
pub struct PopularPanel<'a> {
	pub heading: &'a str,
	pub queries: &'a [String],
	pub selected: usize,
	pub theme: &'a Theme,
}

/// Argument bundle for the browse panel.
pub struct BrowsePanel<'a> {
	pub view: &'a BrowseView,
	pub no_results_label: &'a str,
	pub selected: usize,
	pub theme: &'a Theme,
}

/// Draw the heading and the popular query chips, wrapping chips onto new rows.
pub fn render_popular(
	frame: &mut Frame,
	area: Rect,
	panel: PopularPanel<'_>,
	hits: &mut HitMap,
) {
	let PopularPanel {
		heading,
		queries,
		selected,
		theme,
	} = panel;
	if area.height == 0 || area.width == 0 {
		return;
	}

	let title = Line::from(vec![
		Span::raw(format!("{} ", SectionIcon::Trending.glyph())),
		Span::raw(heading.to_uppercase()).bold(),
	]);
	frame.render_widget(
		Paragraph::new(title).style(theme.hint_style()),
		Rect::new(area.x, area.y, area.width, 1),
	);

	for (index, (query, chip)) in chip_layout(area, queries).into_iter().enumerate() {
		let Some(chip) = chip else {
			continue;
		};
		let style = if index == selected {
			theme.selection_style()
		} else {
			theme.chip_style()
		};
		frame.render_widget(Paragraph::new(format!(" {query} ")).style(style), chip);
		hits.push(chip, Target::Chip(query.clone()));
	}
}

/// Position each chip, returning `None` for chips that fall below `area`.
fn chip_layout<'q>(area: Rect, queries: &'q [String]) -> Vec<(&'q String, Option<Rect>)> {
	let top = area.y.saturating_add(2);
	let mut x = area.x;
	let mut y = top;
	let mut placed = Vec::with_capacity(queries.len());

	for query in queries {
		let width = cell_width(query).saturating_add(2).min(area.width);
		if x > area.x && x.saturating_add(width) > area.right() {
			x = area.x;
			y = y.saturating_add(2);
		}
		let rect = (y < area.bottom()).then(|| Rect::new(x, y, width, 1));
		placed.push((query, rect));
		x = x.saturating_add(width).saturating_add(CHIP_GAP);
	}

	placed
}

/// Draw the (possibly filtered) catalog as a grid of sections.
pub fn render_browse(
	frame: &mut Frame,
	area: Rect,
	panel: BrowsePanel<'_>,
	hits: &mut HitMap,
) {
	let BrowsePanel {
		view,
		no_results_label,
		selected,
		theme,
	} = panel;
	if area.height == 0 || area.width == 0 {
		return;
	}

	let mut lines = Vec::new();
	if let Some(query) = &view.no_results_for {
		lines.push(GridLine::notice(format!("{no_results_label} \"{query}\"")));
		lines.push(GridLine::blank());
	}
	lines.extend(grid_lines(&view.sections, area.width));

	let selected_row = lines
		.iter()
		.position(|line| line.cells.iter().any(|cell| cell.page_index == Some(selected)));
	let offset = scroll_offset(selected_row, area.height as usize);

	for (row, line) in lines.iter().enumerate().skip(offset) {
		let y = area.y + (row - offset) as u16;
		if y >= area.bottom() {
			break;
		}
		if line.centered {
			let text = line.cells.first().map(|cell| cell.text.as_str()).unwrap_or("");
			frame.render_widget(
				Paragraph::new(text)
					.alignment(Alignment::Center)
					.style(theme.empty_style()),
				Rect::new(area.x, y, area.width, 1),
			);
			continue;
		}
		for cell in &line.cells {
			let x = area.x + cell.x;
			if x >= area.right() {
				continue;
			}
			let width = cell.width.min(area.right() - x);
			let rect = Rect::new(x, y, width, 1);
			match (&cell.kind, cell.page_index) {
				(CellKind::Title(icon), _) => {
					let title = Line::from(vec![
						Span::raw(format!("{} ", icon.glyph())),
						Span::raw(cell.text.as_str()),
					]);
					frame.render_widget(
						Paragraph::new(title).style(theme.section_title_style()),
						rect,
					);
				}
				(CellKind::Page, Some(index)) => {
					let style = if index == selected {
						theme.selection_style()
					} else {
						theme.page_style()
					};
					frame.render_widget(Paragraph::new(cell.text.as_str()).style(style), rect);
					hits.push(rect, Target::Page(cell.text.clone()));
				}
				(CellKind::Page, None) => {}
			}
		}
	}
}

fn scroll_offset(selected_row: Option<usize>, height: usize) -> usize {
	match selected_row {
		Some(row) if height > 0 && row >= height => row + 1 - height,
		_ => 0,
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum CellKind {
	Title(SectionIcon),
	Page,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct GridCell {
	x: u16,
	width: u16,
	text: String,
	kind: CellKind,
	page_index: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct GridLine {
	cells: Vec<GridCell>,
	centered: bool,
}

impl GridLine {
	fn blank() -> Self {
		Self::default()
	}

	fn notice(text: String) -> Self {
		Self {
			cells: vec![GridCell {
				x: 0,
				width: 0,
				text,
				kind: CellKind::Page,
				page_index: None,
			}],
			centered: true,
		}
	}
}

/// Lay sections out row-major across one or two columns.
///
/// Page indices follow section order, matching the widget's selection order.
fn grid_lines(sections: &[Section], width: u16) -> Vec<GridLine> {
	let columns: u16 = if width >= TWO_COLUMN_MIN_WIDTH { 2 } else { 1 };
	let column_width = (width.saturating_sub(COLUMN_GAP * (columns - 1))) / columns;
	let mut lines = Vec::new();
	let mut page_index = 0;

	for row in sections.chunks(columns as usize) {
		let height = row
			.iter()
			.map(|section| section.pages.len() + 1)
			.max()
			.unwrap_or(0);
		let start = lines.len();
		lines.resize(start + height, GridLine::blank());

		for (column, section) in row.iter().enumerate() {
			let x = column as u16 * (column_width + COLUMN_GAP);
			lines[start].cells.push(GridCell {
				x,
				width: column_width,
				text: section.title.clone(),
				kind: CellKind::Title(section.icon),
				page_index: None,
			});
			for (offset, page) in section.pages.iter().enumerate() {
				lines[start + 1 + offset].cells.push(GridCell {
					x: x + PAGE_INDENT,
					width: column_width.saturating_sub(PAGE_INDENT),
					text: page.clone(),
					kind: CellKind::Page,
					page_index: Some(page_index),
				});
				page_index += 1;
			}
		}
		lines.push(GridLine::blank());
	}

	lines
}
