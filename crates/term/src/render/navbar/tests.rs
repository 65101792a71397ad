use folio_content::NAV_LINKS;
use pretty_assertions::assert_eq;

use super::*;
use crate::theme::MIDNIGHT;

#[test]
fn one_control_per_region_in_registration_order() {
	let (spans, offsets) = layout_items(RegionId::Hero, &MIDNIGHT);
	assert_eq!(spans.len(), NAV_LINKS.len());
	assert_eq!(offsets.len(), NAV_LINKS.len());
	for ((_, _, region), entry) in offsets.iter().zip(NAV_LINKS) {
		assert_eq!(*region, entry.region);
	}
}

#[test]
fn exactly_one_control_is_active() {
	for active in RegionId::ALL {
		let (spans, offsets) = layout_items(active, &MIDNIGHT);
		let highlighted: Vec<_> = spans
			.iter()
			.zip(&offsets)
			.filter(|(span, _)| span.style.bg == Some(MIDNIGHT.colors.navbar.active_bg))
			.map(|(_, (_, _, region))| *region)
			.collect();
		assert_eq!(highlighted, vec![active]);
	}
}

#[test]
fn hit_offsets_tile_the_bar_without_gaps() {
	let (_, offsets) = layout_items(RegionId::Skills, &MIDNIGHT);
	let mut expected = 0u16;
	for (x, width, _) in offsets {
		assert_eq!(x, expected);
		expected += width;
	}
	assert!(expected > 0);
}

#[test]
fn labels_match_the_content_store() {
	let (spans, _) = layout_items(RegionId::Contact, &MIDNIGHT);
	for (span, entry) in spans.iter().zip(NAV_LINKS) {
		assert!(span.content.contains(entry.label));
	}
}
