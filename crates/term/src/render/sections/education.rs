//! Education region: institution card with logo or its fallback.

use folio_content::EDUCATION;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::{SectionOut, chip, heading, muted};
use crate::logo;
use crate::render::page::BuildCtx;

pub fn build(ctx: &BuildCtx) -> SectionOut {
	let ui = ctx.theme.colors.ui;
	let mut out = SectionOut::default();

	out.lines.push(heading(ctx.theme, "Academic ", "Background"));
	out.blank();

	match ctx.logo {
		Some(logo) => {
			for art in &logo.lines {
				out.lines.push(Line::from(Span::styled(
					art.clone(),
					Style::new().fg(ui.secondary),
				)));
			}
		}
		// Load failed: hide the art and show the fallback in its place.
		None => {
			out.lines.push(Line::from(Span::styled(
				logo::FALLBACK_TEXT,
				Style::new().fg(ui.muted).add_modifier(Modifier::DIM | Modifier::ITALIC),
			)));
		}
	}
	out.blank();

	out.lines.push(Line::from(vec![
		Span::styled(EDUCATION.school, Style::new().fg(ui.fg).add_modifier(Modifier::BOLD)),
		Span::raw("  "),
		chip(ctx.theme, EDUCATION.period),
	]));
	out.lines.push(Line::from(Span::styled(
		EDUCATION.degree,
		Style::new().fg(ui.secondary),
	)));
	out.blank();
	out.lines.push(Line::from(vec![
		muted(ctx.theme, format!("⌖ {}", EDUCATION.location)),
		Span::raw("   "),
		muted(ctx.theme, format!("CGPA: {}", EDUCATION.cgpa)),
	]));

	out
}
