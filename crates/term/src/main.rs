//! `folio` binary: a single-page terminal portfolio.

use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

mod app;
mod cli;
mod config;
mod input;
mod links;
mod logo;
mod render;
mod terminal;
mod theme;

fn main() -> Result<()> {
	let args = cli::Args::parse();
	init_logging(&args)?;

	let theme = config::load_theme(&args)?;
	info!(theme = theme.name, tick_ms = args.tick_ms, "folio.start");

	app::run(&args, theme)
}

/// The UI owns the terminal, so logs only go anywhere when a file sink is
/// requested.
fn init_logging(args: &cli::Args) -> Result<()> {
	let Some(path) = &args.log_file else { return Ok(()) };

	let file = File::create(path)
		.with_context(|| format!("create log file {}", path.display()))?;
	let filter = if args.verbose { "trace" } else { "info" };
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::new(filter))
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.init();
	Ok(())
}
