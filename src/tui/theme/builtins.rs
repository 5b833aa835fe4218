use ratatui::style::{Color, Modifier, Style};

use super::types::{Theme, ThemeDefinition};

pub const SLATE: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(25, 118, 210)),
	trigger: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(21, 101, 192)),
	field: Style::new()
		.fg(Color::Rgb(30, 41, 59))
		.bg(Color::Rgb(241, 245, 249)),
	hint: Style::new().fg(Color::Rgb(100, 116, 139)),
	border: Style::new().fg(Color::Rgb(148, 163, 184)),
	backdrop: Style::new().bg(Color::Rgb(15, 23, 42)),
	chip: Style::new()
		.fg(Color::Rgb(51, 65, 85))
		.bg(Color::Rgb(226, 232, 240)),
	toggle_active: Style::new()
		.fg(Color::Rgb(25, 118, 210))
		.add_modifier(Modifier::BOLD),
	section_title: Style::new()
		.fg(Color::Rgb(25, 118, 210))
		.add_modifier(Modifier::BOLD),
	page: Style::new().fg(Color::Rgb(51, 65, 85)),
	selection: Style::new()
		.fg(Color::Rgb(255, 255, 255))
		.bg(Color::Rgb(25, 118, 210)),
	empty: Style::new()
		.fg(Color::Rgb(100, 116, 139))
		.add_modifier(Modifier::ITALIC),
	tooltip: Style::new()
		.fg(Color::Rgb(248, 250, 252))
		.bg(Color::Rgb(71, 85, 105)),
};

pub const SOLARIZED: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(253, 246, 227))
		.bg(Color::Rgb(7, 54, 66)),
	trigger: Style::new()
		.fg(Color::Rgb(38, 139, 210))
		.bg(Color::Rgb(0, 43, 54)),
	field: Style::new()
		.fg(Color::Rgb(147, 161, 161))
		.bg(Color::Rgb(0, 43, 54)),
	hint: Style::new().fg(Color::Rgb(88, 110, 117)),
	border: Style::new().fg(Color::Rgb(88, 110, 117)),
	backdrop: Style::new().bg(Color::Rgb(0, 30, 38)),
	chip: Style::new()
		.fg(Color::Rgb(147, 161, 161))
		.bg(Color::Rgb(7, 54, 66)),
	toggle_active: Style::new()
		.fg(Color::Rgb(181, 137, 0))
		.add_modifier(Modifier::BOLD),
	section_title: Style::new()
		.fg(Color::Rgb(38, 139, 210))
		.add_modifier(Modifier::BOLD),
	page: Style::new().fg(Color::Rgb(147, 161, 161)),
	selection: Style::new()
		.bg(Color::Rgb(7, 54, 66))
		.fg(Color::Rgb(181, 137, 0)),
	empty: Style::new().fg(Color::Rgb(88, 110, 117)),
	tooltip: Style::new()
		.fg(Color::Rgb(253, 246, 227))
		.bg(Color::Rgb(88, 110, 117)),
};

pub const LIGHT: Theme = Theme {
	header: Style::new().fg(Color::Black).bg(Color::Gray),
	trigger: Style::new().fg(Color::Blue).bg(Color::White),
	field: Style::new().fg(Color::Black).bg(Color::White),
	hint: Style::new().fg(Color::DarkGray),
	border: Style::new().fg(Color::Gray),
	backdrop: Style::new().bg(Color::Gray),
	chip: Style::new().fg(Color::Black).bg(Color::Gray),
	toggle_active: Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD),
	section_title: Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD),
	page: Style::new().fg(Color::Black),
	selection: Style::new().fg(Color::White).bg(Color::Blue),
	empty: Style::new().fg(Color::DarkGray),
	tooltip: Style::new().fg(Color::White).bg(Color::DarkGray),
};

pub const DEFAULT_NAME: &str = "slate";

pub const DEFINITIONS: &[ThemeDefinition] = &[
	ThemeDefinition::new(DEFAULT_NAME, SLATE).with_aliases(&["default", "material"]),
	ThemeDefinition::new("solarized", SOLARIZED).with_aliases(&["solarized-dark"]),
	ThemeDefinition::new("light", LIGHT),
];
