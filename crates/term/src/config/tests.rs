use std::io::Write;

use clap::Parser;
use pretty_assertions::assert_eq;
use ratatui::style::Color;

use super::*;
use crate::cli::Args;

fn args(extra: &[&str]) -> Args {
	let mut argv = vec!["folio"];
	argv.extend_from_slice(extra);
	Args::parse_from(argv)
}

fn write_config(contents: &str) -> tempfile::NamedTempFile {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	file.write_all(contents.as_bytes()).unwrap();
	file.flush().unwrap();
	file
}

#[test]
fn unknown_builtin_theme_is_an_error() {
	let error = load_theme(&args(&["--theme", "neon"])).unwrap_err();
	assert!(error.to_string().contains("neon"));
}

#[test]
fn overrides_apply_on_top_of_the_builtin() {
	let file = write_config("[colors]\naccent = \"#ff0000\"\nmuted = \"gray\"\n");
	let path = file.path().to_str().unwrap().to_string();
	let theme = load_theme(&args(&["--config", &path])).unwrap();

	assert_eq!(theme.colors.ui.accent, Color::Rgb(255, 0, 0));
	assert_eq!(theme.colors.ui.muted, Color::Gray);
	// Untouched slots keep the builtin values.
	assert_eq!(theme.colors.ui.fg, crate::theme::MIDNIGHT.colors.ui.fg);
}

#[test]
fn malformed_config_is_a_startup_error() {
	let file = write_config("[colors]\naccent = 7\n");
	let path = file.path().to_str().unwrap().to_string();
	assert!(load_theme(&args(&["--config", &path])).is_err());
}

#[test]
fn unrecognized_color_is_reported() {
	let file = write_config("[colors]\naccent = \"chartreuse-ish\"\n");
	let path = file.path().to_str().unwrap().to_string();
	let error = load_theme(&args(&["--config", &path])).unwrap_err();
	assert!(error.to_string().contains("chartreuse-ish"));
}

#[test]
fn explicit_config_path_must_exist() {
	assert!(load_theme(&args(&["--config", "/nonexistent/folio.toml"])).is_err());
}

#[test]
fn unknown_keys_are_rejected() {
	let file = write_config("[colors]\nacent = \"#ff0000\"\n");
	let path = file.path().to_str().unwrap().to_string();
	assert!(load_theme(&args(&["--config", &path])).is_err());
}
