use std::time::Duration;

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

const PERIOD: Duration = Duration::from_millis(3000);

#[test]
fn starts_at_zero_without_an_entry_transition() {
	let ticker = Ticker::new(4);
	assert_eq!(ticker.index(), 0);
	assert_eq!(ticker.slide_progress(), None);
}

#[test]
fn five_ticks_over_four_topics_yield_1_2_3_0_1() {
	let mut ticker = Ticker::new(4);
	let mut observed = Vec::new();
	for _ in 0..5 {
		assert!(ticker.tick(PERIOD));
		observed.push(ticker.index());
	}
	assert_eq!(observed, vec![1, 2, 3, 0, 1]);
}

#[test]
fn sub_period_deltas_accumulate_to_one_advance() {
	let mut ticker = Ticker::new(4);
	assert!(!ticker.tick(Duration::from_millis(1500)));
	assert_eq!(ticker.index(), 0);
	assert!(ticker.tick(Duration::from_millis(1500)));
	assert_eq!(ticker.index(), 1);
}

#[test]
fn oversized_delta_advances_once_per_elapsed_period() {
	let mut ticker = Ticker::new(4);
	assert!(ticker.tick(PERIOD * 3));
	assert_eq!(ticker.index(), 3);
}

#[test]
fn advance_opens_a_slide_window_that_settles() {
	let mut ticker = Ticker::new(4);
	ticker.tick(PERIOD);
	assert!(ticker.slide_progress().is_some());
	assert_eq!(ticker.previous_index(), 0);

	ticker.tick(SLIDE_DURATION);
	assert_eq!(ticker.slide_progress(), None);
}

#[test]
fn empty_topic_list_never_advances() {
	let mut ticker = Ticker::new(0);
	assert!(!ticker.tick(PERIOD * 10));
	assert_eq!(ticker.index(), 0);
}

#[test]
fn remount_restarts_from_zero() {
	let mut ticker = Ticker::new(4);
	ticker.tick(PERIOD * 2);
	assert_eq!(ticker.index(), 2);

	// Dropping and reconstructing is the remount.
	let ticker = Ticker::new(4);
	assert_eq!(ticker.index(), 0);
}

proptest! {
	/// The index stays in range for any tick pattern.
	#[test]
	fn index_stays_in_range(len in 1usize..12, deltas in proptest::collection::vec(0u64..10_000, 0..50)) {
		let mut ticker = Ticker::new(len);
		for ms in deltas {
			ticker.tick(Duration::from_millis(ms));
			prop_assert!(ticker.index() < len);
		}
	}

	/// Cyclic law: exactly `len` whole-period ticks return to the start.
	#[test]
	fn n_ticks_return_to_start(len in 1usize..12, lead in 0usize..12) {
		let mut ticker = Ticker::new(len);
		for _ in 0..lead {
			ticker.tick(PERIOD);
		}
		let start = ticker.index();
		for _ in 0..len {
			ticker.tick(PERIOD);
		}
		prop_assert_eq!(ticker.index(), start);
	}
}
