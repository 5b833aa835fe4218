//! File-backed tracing setup.
//!
//! The terminal belongs to the UI while the widget is mounted, so log events
//! go to `<cache_dir>/omnibar.log` instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::app_dirs;

/// Environment variable holding a full `EnvFilter` directive.
pub const LOG_ENV: &str = "OMNIBAR_LOG";

const DEFAULT_DIRECTIVE: &str = "warn,omnibar=info";
const LOG_FILE: &str = "omnibar.log";

/// Location of the log file inside the cache directory.
pub fn log_path() -> Result<PathBuf> {
	Ok(app_dirs::get_cache_dir()?.join(LOG_FILE))
}

/// Install the global subscriber, writing to the default log file.
///
/// `level` is used when [`LOG_ENV`] is unset. Returns the path being written.
pub fn initialize(level: Option<&str>) -> Result<PathBuf> {
	let path = log_path()?;
	initialize_at(&path, level)?;
	Ok(path)
}

/// Install the global subscriber, appending to `path`.
pub fn initialize_at(path: &Path, level: Option<&str>) -> Result<()> {
	if let Some(dir) = path.parent() {
		fs::create_dir_all(dir)
			.with_context(|| format!("failed to create log directory {}", dir.display()))?;
	}
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	tracing_subscriber::registry()
		.with(env_filter(level))
		.with(
			fmt::layer()
				.with_writer(Mutex::new(file))
				.with_ansi(false)
				.with_target(false),
		)
		.try_init()
		.context("a global tracing subscriber is already installed")?;
	Ok(())
}

fn env_filter(level: Option<&str>) -> EnvFilter {
	EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
		level
			.map(|level| EnvFilter::new(format!("warn,omnibar={level}")))
			.unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn writes_events_to_the_given_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("nested").join(LOG_FILE);

		initialize_at(&path, Some("debug")).expect("subscriber installs");
		tracing::info!("logging smoke test");

		let contents = fs::read_to_string(&path).unwrap();
		assert!(contents.contains("logging smoke test"));
		assert!(initialize_at(&path, None).is_err());
	}
}
