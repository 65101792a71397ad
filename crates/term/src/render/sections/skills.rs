//! Skills region: focus blurb, technology chips, and the proficiency
//! matrix.

use folio_content::{SKILL_CHIPS, SKILLS};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::{SectionOut, heading, muted};
use crate::render::page::BuildCtx;
use crate::render::{skill_chart, wrap};

const BLURB: &str = "I specialize in the intersection of backend engineering and machine \
                     learning. My focus is not just on training models, but on deploying them \
                     into production environments using robust DevOps practices.";

pub fn build(ctx: &BuildCtx) -> SectionOut {
	let ui = ctx.theme.colors.ui;
	let mut out = SectionOut::default();

	out.lines.push(heading(ctx.theme, "Technical ", "Arsenal"));
	out.blank();

	for text in wrap::wrap(BLURB, ctx.width as usize) {
		out.lines.push(Line::from(muted(ctx.theme, text)));
	}
	out.blank();

	// Chip grid, two columns.
	let column = SKILL_CHIPS.iter().map(|c| c.len()).max().unwrap_or(0) + 4;
	for pair in SKILL_CHIPS.chunks(2) {
		let mut spans = Vec::new();
		for tech in pair {
			spans.push(Span::styled(
				format!("{:<column$}", format!("▫ {tech}")),
				Style::new().fg(ui.fg),
			));
		}
		out.lines.push(Line::from(spans));
	}
	out.blank();

	out.lines.push(Line::from(Span::styled(
		"SKILL PROFICIENCY MATRIX",
		Style::new().fg(ui.muted).add_modifier(Modifier::DIM),
	)));
	out.blank();
	out.lines.extend(skill_chart::rows(SKILLS, ctx.width, ctx.theme));

	out
}
