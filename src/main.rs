mod cli;
mod settings;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use omnibar::{App, HostOutcome, logging};
use settings::ResolvedConfig;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in omnibar::tui::theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	// Logging is optional; the UI runs the same without it.
	if let Err(err) = logging::initialize(resolved.log_level.as_deref()) {
		eprintln!("omnibar: logging disabled ({err:#})");
	}

	let outcome = run_host(resolved)?;
	match cli.output {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}

/// Mount the widget in the host page and run it until the user quits.
fn run_host(settings: ResolvedConfig) -> Result<HostOutcome> {
	let theme = settings.resolved_theme();
	let mut app = App::with_ui(settings.widget, settings.ui);
	app.set_theme(theme);
	if settings.start_elevated {
		app.widget.open_elevated();
	}

	tracing::info!(elevated = settings.start_elevated, "starting search host");
	omnibar::run(app)
}
