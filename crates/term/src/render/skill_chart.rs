//! Skill proficiency matrix.
//!
//! Purely presentational: consumes `(label, value, max)` triples and
//! renders one gauge row per skill. No state, no events.

use folio_content::Skill;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;

const FILLED: &str = "█";
const EMPTY: &str = "·";

pub fn rows(skills: &[Skill], width: u16, theme: &Theme) -> Vec<Line<'static>> {
	let ui = theme.colors.ui;
	let label_width = skills.iter().map(|s| s.label.width()).max().unwrap_or(0);
	// label + two spaces + bar + two spaces + "100".
	let bar_width = (width as usize).saturating_sub(label_width + 7).clamp(8, 40);

	skills
		.iter()
		.map(|skill| {
			let filled = if skill.max == 0 {
				0
			} else {
				((skill.value as usize * bar_width) / skill.max as usize).min(bar_width)
			};
			Line::from(vec![
				Span::styled(
					format!("{:<label_width$}", skill.label),
					Style::new().fg(ui.fg),
				),
				Span::raw("  "),
				Span::styled(FILLED.repeat(filled), Style::new().fg(ui.accent)),
				Span::styled(
					EMPTY.repeat(bar_width - filled),
					Style::new().fg(ui.border),
				),
				Span::raw("  "),
				Span::styled(format!("{:>3}", skill.value), Style::new().fg(ui.muted)),
			])
		})
		.collect()
}

#[cfg(test)]
mod tests;
