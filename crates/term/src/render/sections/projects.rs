//! Projects region: the gallery of cards.

use folio_content::{PROJECTS, Project};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::{SectionOut, chip, heading};
use crate::render::page::BuildCtx;
use crate::render::wrap;

/// Card description clamp, matching the gallery's three-line preview.
const DESC_LINES: usize = 3;

pub fn build(ctx: &BuildCtx) -> SectionOut {
	let mut out = SectionOut::default();

	out.lines.push(heading(ctx.theme, "Featured ", "Projects"));
	out.lines.push(Line::from(Span::styled(
		"enter opens details · o opens the repo",
		Style::new().fg(ctx.theme.colors.navbar.hint_fg),
	)));
	out.blank();

	let width = ctx.width.clamp(24, 72);
	let focused = ctx.page.gallery().focused();
	for (index, project) in PROJECTS.iter().enumerate() {
		card(ctx, &mut out, index, project, width, index == focused);
		out.blank();
	}
	// Trailing blank belongs to the region, not a card.
	if !PROJECTS.is_empty() {
		out.lines.pop();
	}

	out
}

fn card(
	ctx: &BuildCtx,
	out: &mut SectionOut,
	index: usize,
	project: &Project,
	width: u16,
	focused: bool,
) {
	let ui = ctx.theme.colors.ui;
	let border = if focused {
		Style::new().fg(ui.accent)
	} else {
		Style::new().fg(ui.border)
	};
	let inner = width.saturating_sub(4) as usize;
	let top = out.row();

	out.lines.push(Line::from(Span::styled(
		format!("┌{}┐", "─".repeat(width as usize - 2)),
		border,
	)));

	// Tag row: category chip left, link shortcut glyph right.
	let tag = chip(ctx.theme, project.category);
	let mut spans = vec![tag];
	if project.external_url().is_some() {
		let used: usize = spans.iter().map(|s| s.width()).sum();
		spans.push(Span::raw(" ".repeat(inner.saturating_sub(used + 1))));
		spans.push(Span::styled("↗", Style::new().fg(ui.muted)));
		out.card_links.push((Rect::new(width.saturating_sub(5), out.row(), 4, 1), index));
	}
	out.lines.push(boxed(spans, width, border));

	let title_style = if focused {
		Style::new().fg(ui.accent).add_modifier(Modifier::BOLD)
	} else {
		Style::new().fg(ui.fg).add_modifier(Modifier::BOLD)
	};
	out.lines.push(boxed(vec![Span::styled(project.title, title_style)], width, border));

	for text in wrap::wrap(project.description, inner).into_iter().take(DESC_LINES) {
		out.lines.push(boxed(
			vec![Span::styled(text, Style::new().fg(ui.muted))],
			width,
			border,
		));
	}

	let mut tags: Vec<String> =
		project.tech.iter().take(3).map(|t| format!("#{t}")).collect();
	if project.tech.len() > 3 {
		tags.push(format!("+{}", project.tech.len() - 3));
	}
	out.lines.push(boxed(
		vec![Span::styled(tags.join(" "), Style::new().fg(ui.muted).add_modifier(Modifier::DIM))],
		width,
		border,
	));

	out.lines.push(Line::from(Span::styled(
		format!("└{}┘", "─".repeat(width as usize - 2)),
		border,
	)));

	let height = out.row() - top;
	out.cards.push((Rect::new(0, top, width, height), index));
}

/// A card body row: `│ spans… │`, padded to the card width.
fn boxed(spans: Vec<Span<'static>>, width: u16, border: Style) -> Line<'static> {
	let inner = width.saturating_sub(4) as usize;
	let used: usize = spans.iter().map(|s| s.width()).sum();
	let mut all = vec![Span::styled("│ ", border)];
	all.extend(spans);
	all.push(Span::raw(" ".repeat(inner.saturating_sub(used))));
	all.push(Span::styled(" │", border));
	Line::from(all)
}
