//! Section markup builders.
//!
//! Each builder produces a [`SectionOut`]: styled lines plus any hit
//! rectangles in section-local coordinates (x in content columns, y in
//! rows from the section's first line). The page assembler pads, applies
//! the reveal treatment, and translates hits to page coordinates.

pub mod contact;
pub mod education;
pub mod experience;
pub mod extracurriculars;
pub mod hero;
pub mod projects;
pub mod skills;

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::theme::Theme;

/// One built section: lines plus section-local hit rects.
#[derive(Debug, Default)]
pub struct SectionOut {
	pub lines: Vec<Line<'static>>,
	pub links: Vec<(Rect, String)>,
	pub cards: Vec<(Rect, usize)>,
	pub card_links: Vec<(Rect, usize)>,
	pub resume: Option<Rect>,
}

impl SectionOut {
	/// Row the next pushed line will occupy.
	pub fn row(&self) -> u16 {
		self.lines.len() as u16
	}

	pub fn blank(&mut self) {
		self.lines.push(Line::default());
	}
}

/// Two-tone section heading, e.g. "Academic ~Background~".
pub fn heading(theme: &Theme, plain: &'static str, tinted: &'static str) -> Line<'static> {
	let ui = theme.colors.ui;
	Line::from(vec![
		Span::styled(plain, Style::new().fg(ui.fg).add_modifier(Modifier::BOLD)),
		Span::styled(tinted, Style::new().fg(ui.accent).add_modifier(Modifier::BOLD)),
	])
}

/// Small bracketed tag, e.g. the category chip on a card.
pub fn chip(theme: &Theme, text: impl Into<String>) -> Span<'static> {
	Span::styled(format!("⟨ {} ⟩", text.into()), Style::new().fg(theme.colors.ui.secondary))
}

pub fn muted(theme: &Theme, text: impl Into<String>) -> Span<'static> {
	Span::styled(text.into(), Style::new().fg(theme.colors.ui.muted))
}
