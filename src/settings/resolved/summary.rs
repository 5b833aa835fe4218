use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	for line in summary_lines(config) {
		println!("{line}");
	}
}

fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	let widget = &config.widget;
	let mut lines = vec![
		"Effective configuration:".to_string(),
		format!("  Page title: {}", config.ui.page_title),
		format!(
			"  UI theme: {}",
			config.theme.as_deref().unwrap_or("(use the library default)")
		),
		format!("  Placeholder: {}", widget.placeholder),
		format!("  Shortcut hint: {}", config.ui.shortcut_hint),
		format!("  Focus delay: {} ms", widget.focus_delay.as_millis()),
		format!("  Start elevated: {}", bool_to_word(config.start_elevated)),
		format!(
			"  Log level: {}",
			config.log_level.as_deref().unwrap_or("(default)")
		),
	];

	lines.push(format!(
		"  Catalog: {} sections, {} pages",
		widget.catalog.sections().len(),
		widget.catalog.page_count()
	));
	for section in widget.catalog.sections() {
		lines.push(format!(
			"    {} ({}): {}",
			section.title,
			section.icon.id(),
			section.pages.join(", ")
		));
	}

	if widget.popular.is_empty() {
		lines.push("  Popular searches: (none)".to_string());
	} else {
		lines.push(format!(
			"  Popular searches: {}",
			widget.popular.as_slice().join(", ")
		));
	}

	lines
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
