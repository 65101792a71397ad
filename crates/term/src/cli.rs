//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version, about = "Single-page terminal portfolio for Vikash V.D.")]
pub struct Args {
	/// Ticker rotation period in milliseconds.
	#[arg(long, value_name = "MS", default_value_t = 3000)]
	pub tick_ms: u64,

	/// Disable mouse capture (keyboard only).
	#[arg(long)]
	pub no_mouse: bool,

	/// Built-in theme name.
	#[arg(long, value_name = "NAME", default_value = "midnight")]
	pub theme: String,

	/// Theme override file (defaults to folio.toml under the platform
	/// config directory).
	#[arg(long, value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Write logs to a file; without this, logs are dropped since the UI
	/// owns the terminal.
	#[arg(long, value_name = "PATH")]
	pub log_file: Option<PathBuf>,

	/// Verbose logging (trace-level view-state transitions).
	#[arg(short, long)]
	pub verbose: bool,
}
