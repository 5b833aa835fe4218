use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use omnibar::WidgetConfig;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod catalog;
mod ui;

use catalog::CatalogSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	ui: UiSection,
	catalog: CatalogSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.ui.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			theme: detect_source(
				cli.theme.is_some().then_some("--theme"),
				self.ui.theme.is_some(),
				"OMNIBAR__UI__THEME",
				"ui.theme",
			),
			focus_delay: detect_source(
				None,
				self.ui.focus_delay_ms.is_some(),
				"OMNIBAR__UI__FOCUS_DELAY_MS",
				"ui.focus_delay_ms",
			),
		};

		let ui = self.ui.finalize();
		let mut widget = WidgetConfig {
			placeholder: ui.placeholder,
			focus_delay: ui.focus_delay,
			..WidgetConfig::default()
		};
		self.catalog.apply(&mut widget);

		let config = ResolvedConfig {
			widget,
			ui: ui.ui,
			theme: ui.theme,
			start_elevated: cli.elevated,
			log_level: cli.log_level.clone(),
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

/// Work out where a present value came from, in CLI, environment, file order.
fn detect_source(
	cli_flag: Option<&'static str>,
	value_present: bool,
	env_var: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if let Some(flag) = cli_flag {
		return Some(SettingSource::CliFlag(flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
