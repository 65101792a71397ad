//! Contact region: call to action, email, résumé, footer.

use folio_content::CONTACT;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::{SectionOut, heading, muted};
use crate::render::page::BuildCtx;
use crate::render::wrap;

const PITCH: &str = "I am currently seeking New Grad opportunities for 2026. Let's build \
                     intelligent solutions together.";

pub fn build(ctx: &BuildCtx) -> SectionOut {
	let ui = ctx.theme.colors.ui;
	let mut out = SectionOut::default();

	out.lines.push(heading(ctx.theme, "Ready to ", "Collaborate?"));
	out.blank();

	for text in wrap::wrap(PITCH, ctx.width as usize) {
		out.lines.push(Line::from(muted(ctx.theme, text)));
	}
	out.blank();

	let row = out.row();
	let mut spans = Vec::new();
	let mut x = 0u16;

	let email = "[ ✉ Send Email ]";
	let width = email.width() as u16;
	spans.push(Span::styled(
		email,
		Style::new().fg(ui.bg).bg(ui.accent).add_modifier(Modifier::BOLD),
	));
	out.links.push((Rect::new(x, row, width, 1), format!("mailto:{}", CONTACT.email)));
	x += width;

	spans.push(Span::raw("  "));
	x += 2;

	let resume = "[ ⇩ Download Resume ]";
	let width = resume.width() as u16;
	spans.push(Span::styled(
		resume,
		Style::new().fg(ui.fg).bg(ui.card_bg).add_modifier(Modifier::BOLD),
	));
	out.resume = Some(Rect::new(x, row, width, 1));

	out.lines.push(Line::from(spans));
	out.blank();

	out.lines.push(Line::from(vec![
		muted(ctx.theme, format!("⌖ {}", CONTACT.location)),
		Span::raw("   "),
		muted(ctx.theme, CONTACT.phone),
	]));
	out.blank();
	out.lines.push(Line::from(Span::styled(
		"© 2026 Vikash V.D. Built with Rust & Ratatui.",
		Style::new().fg(ctx.theme.colors.navbar.hint_fg).add_modifier(Modifier::DIM),
	)));

	out
}
