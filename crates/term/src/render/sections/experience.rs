//! Experience region: professional timeline.

use folio_content::EXPERIENCE;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::{SectionOut, heading, muted};
use crate::render::page::BuildCtx;
use crate::render::wrap;

pub fn build(ctx: &BuildCtx) -> SectionOut {
	let ui = ctx.theme.colors.ui;
	let mut out = SectionOut::default();

	out.lines.push(heading(ctx.theme, "Professional ", "Journey"));
	out.blank();

	let rail = Style::new().fg(ui.border);
	for (i, exp) in EXPERIENCE.iter().enumerate() {
		out.lines.push(Line::from(vec![
			Span::styled("●", Style::new().fg(ui.accent)),
			Span::raw(" "),
			Span::styled(exp.role, Style::new().fg(ui.fg).add_modifier(Modifier::BOLD)),
			Span::raw("  "),
			muted(ctx.theme, exp.period),
		]));
		out.lines.push(Line::from(vec![
			Span::styled("│", rail),
			Span::raw(" "),
			Span::styled(exp.company, Style::new().fg(ui.secondary)),
			Span::raw("  "),
			muted(ctx.theme, format!("⌖ {}", exp.location)),
		]));

		for point in exp.description {
			let wrapped = wrap::wrap(point, (ctx.width as usize).saturating_sub(4));
			for (j, text) in wrapped.into_iter().enumerate() {
				let bullet = if j == 0 { "│ ▪ " } else { "│   " };
				out.lines.push(Line::from(vec![
					Span::styled(bullet, rail),
					muted(ctx.theme, text),
				]));
			}
		}

		if i + 1 < EXPERIENCE.len() {
			out.lines.push(Line::from(Span::styled("│", rail)));
		}
	}

	out
}
