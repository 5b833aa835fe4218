use ratatui::{
	Frame,
	layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
	text::Line,
	widgets::Paragraph,
};

use super::App;
use crate::tui::components::{
	CompactContext, ModalBody, ModalContext, TriggerContext, render_compact, render_modal,
	render_trigger,
};
use crate::widget::DisplayMode;

impl App {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		self.hits.clear();
		let area = frame.area();

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([Constraint::Length(1), Constraint::Min(0)])
			.split(area);

		// The tooltip hangs below the header, so the body goes down first.
		self.render_body(frame, layout[1]);
		self.render_header(frame, layout[0]);

		if self.widget.is_elevated() {
			self.render_elevated(frame, area);
		}
	}

	fn render_header(&mut self, frame: &mut Frame, area: Rect) {
		frame.render_widget(
			Paragraph::new(format!(" {}", self.ui.page_title)).style(self.theme.header_style()),
			area,
		);
		let slot = area.inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		// The icon stays visible behind the modal; only compact mode swaps it out.
		if self.widget.mode() == DisplayMode::Compact {
			render_compact(
				frame,
				slot,
				CompactContext {
					input: self.widget.compact_input(),
					shortcut_hint: &self.ui.shortcut_hint,
					theme: &self.theme,
				},
				&mut self.hits,
			);
		} else {
			let tooltip = (self.widget.mode() == DisplayMode::Idle
				&& self.widget.tooltip_visible())
			.then_some(self.ui.tooltip.as_str());
			render_trigger(
				frame,
				slot,
				TriggerContext {
					hovered: self.widget.tooltip_visible(),
					tooltip,
					theme: &self.theme,
				},
				&mut self.hits,
			);
		}
	}

	fn render_body(&self, frame: &mut Frame, area: Rect) {
		let current = self.current_page().unwrap_or("Home");
		let lines = vec![
			Line::raw(""),
			Line::raw("Welcome to Our Website").style(self.theme.section_title_style()),
			Line::raw(""),
			Line::raw("Try the global search bar in the top right corner!"),
			Line::raw(format!(
				"Press {} or click the search icon to open the search modal.",
				self.ui.shortcut_hint
			))
			.style(self.theme.hint_style()),
			Line::raw("Press Tab inside the modal to browse every available page.")
				.style(self.theme.hint_style()),
			Line::raw(""),
			Line::raw(format!("Current page: {current}")),
		];
		frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
	}

	fn render_elevated(&mut self, frame: &mut Frame, area: Rect) {
		let browse;
		let body = if self.widget.is_browsing() {
			browse = self.widget.browse_view();
			ModalBody::Browse { view: &browse }
		} else {
			ModalBody::Popular {
				queries: self.widget.popular().as_slice(),
			}
		};

		render_modal(
			frame,
			area,
			ModalContext {
				input: self.widget.elevated_input(),
				body,
				selected: self.widget.selected_index(),
				ui: &self.ui,
				theme: &self.theme,
			},
			&mut self.hits,
		);
	}
}
