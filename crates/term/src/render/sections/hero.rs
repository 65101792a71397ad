//! Hero region: badge, name, intro, ticker, profile links.

use folio_content::CONTACT;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::{SectionOut, muted};
use crate::render::page::BuildCtx;
use crate::render::{ticker_line, wrap};

const INTRO: &str = "M.Sc. Student (2026). I build to understand, bridging Software Engineering \
                     with AI/ML through hands-on projects. From modular chatbots to backend APIs, \
                     I love turning concepts into code. Enthusiastic about data-driven roles where \
                     I can build, learn, and contribute.";

pub fn build(ctx: &BuildCtx) -> SectionOut {
	let ui = ctx.theme.colors.ui;
	let mut out = SectionOut::default();

	out.lines.push(Line::from(Span::styled(
		"● Graduating 2026",
		Style::new().fg(ui.accent),
	)));
	out.blank();

	out.lines.push(Line::from(vec![
		Span::styled("VIKASH ", Style::new().fg(ui.fg).add_modifier(Modifier::BOLD)),
		Span::styled("V.D", Style::new().fg(ui.muted).add_modifier(Modifier::BOLD)),
	]));
	out.lines.push(Line::from(Span::styled(
		"━".repeat(10),
		Style::new().fg(ui.accent),
	)));
	out.blank();

	for text in wrap::wrap(INTRO, ctx.width as usize) {
		out.lines.push(Line::from(muted(ctx.theme, text)));
	}
	out.blank();

	out.lines.push(ticker_line::line(ctx));
	out.blank();

	let row = out.row();
	let mut spans = Vec::new();
	let mut x = 0u16;

	let github = "[ » GitHub ]";
	let width = github.width() as u16;
	spans.push(Span::styled(
		github,
		Style::new().fg(ui.bg).bg(ui.fg).add_modifier(Modifier::BOLD),
	));
	out.links.push((Rect::new(x, row, width, 1), CONTACT.github.to_string()));
	x += width;

	spans.push(Span::raw("  "));
	x += 2;

	let linkedin = "[ in LinkedIn ]";
	let width = linkedin.width() as u16;
	spans.push(Span::styled(linkedin, Style::new().fg(ui.fg).bg(ui.card_bg)));
	out.links.push((Rect::new(x, row, width, 1), CONTACT.linkedin.to_string()));

	out.lines.push(Line::from(spans));
	out.blank();
	out.lines.push(Line::from(Span::styled(
		"type : for the console",
		Style::new().fg(ctx.theme.colors.navbar.hint_fg),
	)));

	out
}
