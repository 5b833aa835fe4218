use std::time::Duration;

use omnibar::tui::theme;

use super::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};

const MAX_FOCUS_DELAY: Duration = Duration::from_millis(5000);

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if let Some(name) = &config.theme
		&& theme::by_name(name).is_none()
	{
		return Err(ConfigError::UnknownTheme {
			name: name.clone(),
			origin: sources.source_for_theme(),
			available: theme::names().collect::<Vec<_>>().join(", "),
		});
	}

	let delay = config.widget.focus_delay;
	if delay > MAX_FOCUS_DELAY {
		return Err(ConfigError::invalid(
			"ui.focus_delay_ms",
			delay.as_millis().to_string(),
			sources.source_for_focus_delay(),
			format!("must be at most {}", MAX_FOCUS_DELAY.as_millis()),
		));
	}

	if let Some(position) = config
		.widget
		.catalog
		.sections()
		.iter()
		.position(|section| section.title.trim().is_empty())
	{
		return Err(ConfigError::invalid(
			"catalog.sections",
			format!("section #{}", position + 1),
			SettingSource::ConfigKey("catalog.sections"),
			"section titles must not be blank",
		));
	}

	Ok(())
}
