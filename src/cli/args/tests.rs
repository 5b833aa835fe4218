use clap::{CommandFactory, Parser};

use super::{CliArgs, OutputFormat};

#[test]
fn command_supports_custom_styles() {
	let command = CliArgs::command();
	assert!(command.get_about().is_some());
	command.debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let parsed = CliArgs::try_parse_from(["omnibar"]).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(!parsed.elevated);
	assert!(parsed.theme.is_none());
}

#[test]
fn flags_are_parsed() {
	let parsed = CliArgs::try_parse_from([
		"omnibar",
		"--config",
		"a.toml",
		"-c",
		"b.toml",
		"--theme",
		"light",
		"--elevated",
		"--output",
		"json",
		"--log-level",
		"debug",
	])
	.expect("parses");

	assert_eq!(parsed.config.len(), 2);
	assert_eq!(parsed.theme.as_deref(), Some("light"));
	assert!(parsed.elevated);
	assert_eq!(parsed.output, OutputFormat::Json);
	assert_eq!(parsed.log_level.as_deref(), Some("debug"));
}
