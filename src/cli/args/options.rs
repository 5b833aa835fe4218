use clap::ValueEnum;

/// How the navigation history is printed once the host exits.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
