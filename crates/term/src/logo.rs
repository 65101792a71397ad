//! Institution logo loading.
//!
//! The logo is an ASCII-art text file resolved at startup. This is the
//! only fallible content operation in the program: on any failure the
//! education region renders [`FALLBACK_TEXT`] in place of the logo, a
//! local silent recovery with no retry and no alert.

use std::io;
use std::path::Path;

use thiserror::Error;
use unicode_width::UnicodeWidthStr;

/// Fallback text rendered when the logo cannot be loaded.
pub const FALLBACK_TEXT: &str = "Add cit_logo.png";

/// Clamps applied to oversized art.
const MAX_LINES: usize = 12;
const MAX_WIDTH: usize = 36;

#[derive(Debug, Error)]
pub enum LogoError {
	#[error("read logo: {0}")]
	Read(#[from] io::Error),
	#[error("logo file is empty")]
	Empty,
}

#[derive(Debug, Clone)]
pub struct Logo {
	pub lines: Vec<String>,
	pub width: u16,
}

/// Loads the logo art, clamped to a presentable box. Binary data fails
/// UTF-8 decoding and lands in [`LogoError::Read`].
pub fn load(path: impl AsRef<Path>) -> Result<Logo, LogoError> {
	let raw = std::fs::read_to_string(path)?;
	let lines: Vec<String> = raw
		.lines()
		.take(MAX_LINES)
		.map(|line| clamp_width(line.trim_end()))
		.collect();

	if lines.iter().all(|line| line.trim().is_empty()) {
		return Err(LogoError::Empty);
	}

	let width = lines.iter().map(|line| line.width()).max().unwrap_or(0) as u16;
	Ok(Logo { lines, width })
}

fn clamp_width(line: &str) -> String {
	let mut out = String::new();
	let mut used = 0;
	for c in line.chars() {
		let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
		if used + w > MAX_WIDTH {
			break;
		}
		used += w;
		out.push(c);
	}
	out
}
