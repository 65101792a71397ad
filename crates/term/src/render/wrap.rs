//! Display-width word wrapping for prose blocks.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wraps `text` to `width` display columns. Words longer than a full line
/// are hard-broken. Empty input yields no lines.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
	let width = width.max(1);
	let mut lines = Vec::new();
	let mut current = String::new();
	let mut used = 0;

	for word in text.split_whitespace() {
		for piece in break_word(word, width) {
			let w = piece.width();
			if used == 0 {
				current.push_str(&piece);
				used = w;
			} else if used + 1 + w <= width {
				current.push(' ');
				current.push_str(&piece);
				used += 1 + w;
			} else {
				lines.push(std::mem::take(&mut current));
				current.push_str(&piece);
				used = w;
			}
		}
	}

	if !current.is_empty() {
		lines.push(current);
	}
	lines
}

/// Splits a single word into width-bounded pieces.
fn break_word(word: &str, width: usize) -> Vec<String> {
	if word.width() <= width {
		return vec![word.to_string()];
	}

	let mut pieces = Vec::new();
	let mut piece = String::new();
	let mut used = 0;
	for c in word.chars() {
		let w = c.width().unwrap_or(0);
		if used + w > width && !piece.is_empty() {
			pieces.push(std::mem::take(&mut piece));
			used = 0;
		}
		piece.push(c);
		used += w;
	}
	if !piece.is_empty() {
		pieces.push(piece);
	}
	pieces
}
