//! Optional theme overrides from a TOML file.
//!
//! A missing file is the default configuration, not an error; a present
//! but malformed file is a startup error, reported before the terminal is
//! taken over.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail};
use ratatui::style::Color;
use serde::Deserialize;

use crate::cli::Args;
use crate::theme::{self, Theme};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
	#[serde(default)]
	colors: ColorOverrides,
}

/// Palette slots a user may remap. Values are ratatui color names or
/// `#rrggbb` hex.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ColorOverrides {
	accent: Option<String>,
	secondary: Option<String>,
	fg: Option<String>,
	bg: Option<String>,
	muted: Option<String>,
}

/// Resolves the active theme: built-in base, then file overrides.
pub fn load_theme(args: &Args) -> Result<Theme> {
	let mut theme = theme::builtin(&args.theme)
		.ok_or_else(|| anyhow!("unknown theme {:?} (built-ins: midnight, paper)", args.theme))?;

	let Some(path) = config_path(args) else { return Ok(theme) };
	if !path.exists() {
		if args.config.is_some() {
			bail!("config file {} does not exist", path.display());
		}
		return Ok(theme);
	}

	let raw = std::fs::read_to_string(&path)
		.with_context(|| format!("read config {}", path.display()))?;
	let parsed: ConfigFile = toml::from_str(&raw)
		.with_context(|| format!("parse config {}", path.display()))?;

	apply(&mut theme, &parsed.colors)?;
	tracing::debug!(path = %path.display(), "config.loaded");
	Ok(theme)
}

fn config_path(args: &Args) -> Option<PathBuf> {
	if let Some(path) = &args.config {
		return Some(path.clone());
	}
	dirs::config_dir().map(|dir| dir.join("folio").join("folio.toml"))
}

fn apply(theme: &mut Theme, colors: &ColorOverrides) -> Result<()> {
	if let Some(c) = &colors.accent {
		theme.colors.ui.accent = parse_color(c)?;
	}
	if let Some(c) = &colors.secondary {
		theme.colors.ui.secondary = parse_color(c)?;
	}
	if let Some(c) = &colors.fg {
		theme.colors.ui.fg = parse_color(c)?;
	}
	if let Some(c) = &colors.bg {
		theme.colors.ui.bg = parse_color(c)?;
	}
	if let Some(c) = &colors.muted {
		theme.colors.ui.muted = parse_color(c)?;
	}
	Ok(())
}

fn parse_color(s: &str) -> Result<Color> {
	Color::from_str(s).map_err(|_| anyhow!("unrecognized color {s:?}"))
}

#[cfg(test)]
mod tests;
