//! Extracurriculars region.

use folio_content::EXTRACURRICULARS;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::{SectionOut, heading, muted};
use crate::render::page::BuildCtx;
use crate::render::wrap;

pub fn build(ctx: &BuildCtx) -> SectionOut {
	let ui = ctx.theme.colors.ui;
	let mut out = SectionOut::default();

	out.lines.push(heading(ctx.theme, "Beyond the ", "Code"));
	out.blank();

	for (i, item) in EXTRACURRICULARS.iter().enumerate() {
		// Organization-backed entries get the cap, awards the rosette.
		let icon = if item.organization.is_some() { "✦" } else { "❖" };
		out.lines.push(Line::from(vec![
			Span::styled(format!("{icon} "), Style::new().fg(ui.accent)),
			Span::styled(item.title, Style::new().fg(ui.fg).add_modifier(Modifier::BOLD)),
		]));

		if let Some(organization) = item.organization {
			let mut spans = vec![Span::styled(
				format!("  {organization}"),
				Style::new().fg(ui.secondary),
			)];
			if let Some(period) = item.period {
				spans.push(muted(ctx.theme, format!(" • {period}")));
			}
			out.lines.push(Line::from(spans));
		}

		for text in wrap::wrap(item.description, (ctx.width as usize).saturating_sub(2)) {
			out.lines.push(Line::from(muted(ctx.theme, format!("  {text}"))));
		}

		if i + 1 < EXTRACURRICULARS.len() {
			out.blank();
		}
	}

	out
}
