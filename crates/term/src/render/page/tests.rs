use std::time::Duration;

use folio_content::PROJECTS;
use folio_core::{Page, UiEvent};
use pretty_assertions::assert_eq;

use super::*;
use crate::theme::MIDNIGHT;

fn build_page(page: &Page) -> PageOut {
	let ctx =
		BuildCtx { theme: &MIDNIGHT, width: 80, viewport: 30, logo: None, page, frame: 0 };
	build(&ctx)
}

fn settled_page() -> Page {
	let mut page = Page::new();
	// Age the mount animation past its end.
	page.handle(UiEvent::Tick(Duration::from_secs(2)));
	page
}

#[test]
fn extents_tile_the_page_in_registration_order() {
	let page = settled_page();
	let out = build_page(&page);

	let mut expected_top = 0u16;
	for region in RegionId::ALL {
		let extent = out.geometry.extent(region);
		assert_eq!(extent.top, expected_top, "{} is misplaced", region.as_str());
		assert!(extent.height >= 30, "{} shorter than the viewport", region.as_str());
		expected_top = extent.bottom();
	}
	assert_eq!(expected_top, out.geometry.page_height);
	assert_eq!(out.lines.len() as u16, out.geometry.page_height);
}

#[test]
fn every_card_is_registered_inside_the_projects_extent() {
	let page = settled_page();
	let out = build_page(&page);
	let projects = out.geometry.extent(RegionId::Projects);

	assert_eq!(out.cards.len(), PROJECTS.len());
	for (rect, index) in &out.cards {
		assert!(*index < PROJECTS.len());
		assert!(rect.y >= projects.top && rect.y + rect.height <= projects.bottom());
	}
}

#[test]
fn link_glyphs_exist_only_for_projects_with_external_urls() {
	let page = settled_page();
	let out = build_page(&page);
	let expected: Vec<usize> = PROJECTS
		.iter()
		.enumerate()
		.filter(|(_, p)| p.external_url().is_some())
		.map(|(i, _)| i)
		.collect();
	let registered: Vec<usize> = out.card_links.iter().map(|(_, i)| *i).collect();
	assert_eq!(registered, expected);
}

#[test]
fn hero_links_and_resume_control_are_registered() {
	let page = settled_page();
	let out = build_page(&page);

	assert_eq!(out.links.len(), 3, "github, linkedin, mailto");
	assert!(out.resume.is_some());

	let contact = out.geometry.extent(RegionId::Contact);
	let resume = out.resume.unwrap();
	assert!(contact.contains(resume.y));
}

#[test]
fn unsettled_regions_render_transparent() {
	// Fresh mount: only the hero has settled, and its animation has not
	// started aging yet.
	let page = Page::new();
	let out = build_page(&page);

	let education = out.geometry.extent(RegionId::Education);
	for row in education.top..education.bottom() {
		assert!(
			out.lines[row as usize].spans.iter().all(|s| s.content.trim().is_empty()),
			"row {row} should be blank before the region settles"
		);
	}
}

#[test]
fn settled_regions_render_their_content() {
	let page = settled_page();
	let out = build_page(&page);
	let hero = out.geometry.extent(RegionId::Hero);

	let text: String = out.lines[hero.top as usize..hero.bottom() as usize]
		.iter()
		.flat_map(|l| l.spans.iter())
		.map(|s| s.content.as_ref())
		.collect::<Vec<_>>()
		.join("");
	assert!(text.contains("VIKASH"));
	assert!(text.contains("Graduating 2026"));
}

#[test]
fn visible_window_slices_the_requested_rows() {
	let page = settled_page();
	let out = build_page(&page);

	let window = visible_window(&out, 0, 30);
	assert_eq!(window.len(), 30);

	let tail = visible_window(&out, out.geometry.page_height - 10, 30);
	assert_eq!(tail.len(), 10);
}

#[test]
fn geometry_round_trips_through_the_core_page() {
	let mut page = settled_page();
	let out = build_page(&page);
	page.handle(UiEvent::Relayout(out.geometry));

	assert_eq!(page.active_region(), RegionId::Hero);
	assert_eq!(page.geometry().page_height, out.geometry.page_height);
}
