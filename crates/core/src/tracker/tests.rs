use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;
use crate::layout::Extent;

/// Seven regions of 40 rows each, 40-row viewport.
fn geometry() -> PageGeometry {
	let mut extents = [Extent::default(); RegionId::ALL.len()];
	for (i, extent) in extents.iter_mut().enumerate() {
		*extent = Extent::new((i as u16) * 40, 40);
	}
	PageGeometry { extents, page_height: 280, viewport_height: 40 }
}

#[test]
fn defaults_to_first_region_before_any_scroll_event() {
	let tracker = ActiveTracker::new();
	assert_eq!(tracker.active(), RegionId::Hero);
}

#[test]
fn probe_sits_a_third_of_the_viewport_below_the_top() {
	let geometry = geometry();
	let mut tracker = ActiveTracker::new();

	// Offset 30 puts the probe at row 43, inside Education.
	tracker.recompute(&geometry, 30);
	assert_eq!(tracker.active(), RegionId::Education);

	// Offset 26 puts the probe at row 39, still inside Hero.
	tracker.recompute(&geometry, 26);
	assert_eq!(tracker.active(), RegionId::Hero);
}

#[test]
fn scrolling_into_projects_focuses_projects() {
	let geometry = geometry();
	let mut tracker = ActiveTracker::new();
	let projects_top = geometry.extent(RegionId::Projects).top;

	tracker.recompute(&geometry, projects_top);
	assert_eq!(tracker.active(), RegionId::Projects);
}

#[test]
fn no_match_retains_previous_value() {
	let geometry = geometry();
	let mut tracker = ActiveTracker::new();

	tracker.recompute(&geometry, 100);
	let before = tracker.active();

	// Probe past the end of the last region.
	tracker.recompute(&geometry, 400);
	assert_eq!(tracker.active(), before);
}

#[test]
fn empty_extents_never_match() {
	let mut geometry = geometry();
	geometry.extents[RegionId::Education.index()] = Extent::new(40, 0);
	let mut tracker = ActiveTracker::new();

	// Probe row 43 now falls in a gap; Hero stays focal.
	tracker.recompute(&geometry, 30);
	assert_eq!(tracker.active(), RegionId::Hero);
}

proptest! {
	/// For all offsets, the active region is a registered region.
	#[test]
	fn active_is_always_registered(offsets in proptest::collection::vec(0u16..500, 0..40)) {
		let geometry = geometry();
		let mut tracker = ActiveTracker::new();
		for offset in offsets {
			tracker.recompute(&geometry, offset);
			prop_assert!(RegionId::ALL.contains(&tracker.active()));
		}
	}

	/// A probe inside a region's extent always focuses that region.
	#[test]
	fn probe_inside_region_focuses_it(offset in 0u16..267) {
		let geometry = geometry();
		let mut tracker = ActiveTracker::new();
		tracker.recompute(&geometry, offset);
		let probe = offset + geometry.viewport_height / 3;
		let expected = RegionId::ALL
			.into_iter()
			.find(|r| geometry.extent(*r).contains(probe))
			.expect("probe inside the page");
		prop_assert_eq!(tracker.active(), expected);
	}
}
