use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }

    fn gen_range_u32(&mut self, start: u32, end_exclusive: u32) -> u32 {
        self.gen_range_u64(start as u64, end_exclusive as u64) as u32
    }
}

fn calc(item_height: u32, container_height: u32, overscan: usize) -> RangeCalculator {
    RangeCalculator::new(Geometry::new(item_height, container_height).unwrap(), overscan).unwrap()
}

fn items(n: usize) -> Vec<usize> {
    (0..n).collect()
}

#[test]
fn reference_scenario_matches_formula() {
    let r = compute_range(1000, 50, 500, 5, 1000).unwrap().unwrap();
    assert_eq!(r.start_index, 15);
    assert_eq!(r.end_index, 35);
    assert_eq!(r.len(), 21);

    let data = items(1000);
    let out = extract(&data, Some(r), 50).unwrap();
    assert_eq!(out.visible_items.len(), 21);
    assert_eq!(out.visible_items.first(), Some(&15));
    assert_eq!(out.visible_items.last(), Some(&35));
    assert_eq!(out.total_height, 50_000);
    assert_eq!(out.offset_y, 750);
}

#[test]
fn empty_collection_yields_empty_outputs() {
    assert_eq!(compute_range(0, 50, 500, 5, 0).unwrap(), None);
    assert_eq!(compute_range(12_345, 7, 0, 0, 0).unwrap(), None);

    let data: Vec<u8> = Vec::new();
    let out = extract(&data, None, 50).unwrap();
    assert!(out.visible_items.is_empty());
    assert_eq!(out.start_index(), None);
    assert_eq!(out.end_index(), None);
    assert_eq!(out.total_height, 0);
    assert_eq!(out.offset_y, 0);
    assert_eq!(out.bottom_padding(), 0);
}

#[test]
fn zero_item_height_fails_fast() {
    assert_eq!(Geometry::new(0, 500), Err(WindowError::ZeroItemHeight));
    assert_eq!(
        compute_range(0, 0, 500, 5, 10),
        Err(WindowError::ZeroItemHeight)
    );
    // Even an empty collection does not hide a bad configuration.
    assert_eq!(
        compute_range(0, 0, 500, 5, 0),
        Err(WindowError::ZeroItemHeight)
    );
    assert_eq!(total_height(10, 0), Err(WindowError::ZeroItemHeight));

    let data = items(10);
    assert_eq!(
        extract(&data, None, 0).unwrap_err(),
        WindowError::ZeroItemHeight
    );
}

#[test]
fn window_rejects_invalid_geometry_and_keeps_state() {
    assert!(ViewportWindow::new(WindowOptions::new(0, 100)).is_err());

    let mut w = ViewportWindow::new(WindowOptions::new(10, 100)).unwrap();
    w.on_scroll(40);
    assert_eq!(w.set_item_height(0), Err(WindowError::ZeroItemHeight));
    assert_eq!(w.geometry(), Geometry::new(10, 100).unwrap());
    assert_eq!(w.scroll_offset(), 40);
}

#[test]
fn over_scroll_clamps_to_tail_window() {
    let c = calc(50, 500, 5);
    let r = c.range(1_000_000, 1000).unwrap().unwrap();
    assert_eq!(r.end_index, 999);
    assert!(r.start_index <= r.end_index);
    // Same window as the maximum meaningful offset.
    let max = c.max_scroll_offset(1000).unwrap();
    assert_eq!(max, 49_500);
    assert_eq!(c.range(max, 1000).unwrap(), Some(r));
    assert_eq!(r.start_index, 985);

    let data = items(1000);
    let out = extract(&data, Some(r), 50).unwrap();
    assert_eq!(out.visible_items.len(), 15);
    assert_eq!(out.offset_y, 985 * 50);
    assert_eq!(out.bottom_padding(), 0);
}

#[test]
fn over_scroll_with_u64_max_offset_is_well_formed() {
    let c = calc(3, 10, 2);
    let r = c.range(u64::MAX, 50).unwrap().unwrap();
    assert_eq!(r.end_index, 49);
    assert!(r.start_index <= r.end_index);
}

#[test]
fn zero_overscan_is_strict_viewport() {
    let c = calc(50, 500, 0);
    let r = c.range(1000, 1000).unwrap().unwrap();
    assert_eq!(r.start_index, 20);
    assert_eq!(r.end_index, 30);

    let padded = calc(50, 500, 5);
    assert_eq!(padded.viewport_range(1000, 1000).unwrap(), Some(r));
}

#[test]
fn overscan_is_clamped_at_the_head() {
    let r = compute_range(0, 10, 100, 5, 1000).unwrap().unwrap();
    assert_eq!(r.start_index, 0);
    assert_eq!(r.end_index, 15);
}

#[test]
fn short_list_is_fully_visible() {
    let r = compute_range(0, 10, 100, 5, 3).unwrap().unwrap();
    assert_eq!(r, VisibleRange { start_index: 0, end_index: 2 });
    assert_eq!(calc(10, 100, 5).max_scroll_offset(3).unwrap(), 0);
}

#[test]
fn zero_container_height_still_yields_a_range() {
    let c = calc(10, 0, 0);
    let r = c.range(25, 10).unwrap().unwrap();
    assert_eq!(r.start_index, 2);
    assert_eq!(r.end_index, 3);

    // Scrolled to the very end with no viewport: still start <= end.
    let r = c.range(100, 10).unwrap().unwrap();
    assert!(r.start_index <= r.end_index);
    assert_eq!(r.end_index, 9);
}

#[test]
fn total_height_overflow_is_reported() {
    let err = total_height(usize::MAX, u32::MAX);
    if usize::BITS >= 64 {
        assert_eq!(
            err,
            Err(WindowError::ExtentOverflow {
                item_count: usize::MAX,
                item_height: u32::MAX,
            })
        );
    } else {
        assert!(err.is_ok());
    }
}

#[test]
fn range_does_not_need_a_representable_total_height() {
    let c = calc(u32::MAX, 100, 2);
    let count = usize::MAX;
    let r = c.range(0, count).unwrap().unwrap();
    assert_eq!(r, VisibleRange { start_index: 0, end_index: 3 });

    let r = c.range(u64::MAX, count).unwrap().unwrap();
    assert!(r.start_index <= r.end_index);
    assert!(r.end_index < count);

    if usize::BITS >= 64 {
        assert!(matches!(
            c.total_height(count),
            Err(WindowError::ExtentOverflow { .. })
        ));
    }
}

#[test]
fn extract_rejects_stale_range() {
    let data = items(10);
    let stale = VisibleRange {
        start_index: 5,
        end_index: 12,
    };
    assert_eq!(
        extract(&data, Some(stale), 10).unwrap_err(),
        WindowError::RangeOutOfBounds {
            start_index: 5,
            end_index: 12,
            item_count: 10,
        }
    );

    let inverted = VisibleRange {
        start_index: 4,
        end_index: 3,
    };
    assert!(extract(&data, Some(inverted), 10).is_err());
}

#[test]
fn positioned_items_carry_absolute_offsets() {
    let data = items(100);
    let out = extract(
        &data,
        Some(VisibleRange {
            start_index: 10,
            end_index: 12,
        }),
        8,
    )
    .unwrap();
    let placed: Vec<(usize, u64, usize)> =
        out.positioned().map(|p| (p.index, p.top, *p.item)).collect();
    assert_eq!(placed, vec![(10, 80, 10), (11, 88, 11), (12, 96, 12)]);
    assert_eq!(out.bottom_padding(), 800 - 80 - 24);
}

#[test]
fn index_at_offset_and_item_top() {
    let c = calc(20, 100, 0);
    assert_eq!(c.index_at_offset(0, 0), None);
    assert_eq!(c.index_at_offset(0, 5), Some(0));
    assert_eq!(c.index_at_offset(39, 5), Some(1));
    assert_eq!(c.index_at_offset(40, 5), Some(2));
    assert_eq!(c.index_at_offset(10_000, 5), Some(4));
    assert_eq!(c.item_top(3).unwrap(), 60);
}

#[test]
fn scroll_to_index_alignments() {
    let c = calc(10, 50, 0);
    let n = 100;
    assert_eq!(c.scroll_to_index_offset(20, Align::Start, 0, n).unwrap(), 200);
    assert_eq!(c.scroll_to_index_offset(20, Align::End, 0, n).unwrap(), 160);
    assert_eq!(c.scroll_to_index_offset(20, Align::Center, 0, n).unwrap(), 180);
    // Clamped to max_scroll_offset.
    assert_eq!(c.scroll_to_index_offset(99, Align::Start, 0, n).unwrap(), 950);
    assert_eq!(c.scroll_to_index_offset(500, Align::Start, 0, n).unwrap(), 950);
    assert_eq!(c.scroll_to_index_offset(3, Align::Start, 0, 0).unwrap(), 0);
}

#[test]
fn align_auto_keeps_offset_when_fully_visible() {
    let c = calc(10, 50, 0);
    // Viewport covers [100, 150).
    assert_eq!(c.scroll_to_index_offset(12, Align::Auto, 100, 100).unwrap(), 100);
    // Above the viewport: behaves like Start.
    assert_eq!(c.scroll_to_index_offset(5, Align::Auto, 100, 100).unwrap(), 50);
    // Below the viewport: behaves like End.
    assert_eq!(
        c.scroll_to_index_offset(30, Align::Auto, 100, 100).unwrap(),
        c.scroll_to_index_offset(30, Align::End, 100, 100).unwrap()
    );
}

#[test]
fn tracker_is_last_write_wins() {
    let mut t = ScrollPositionTracker::default();
    assert_eq!(t.offset(), 0);
    assert_eq!(t.direction(), None);

    assert!(t.set_offset(300));
    assert!(t.set_offset(120));
    assert!(t.set_offset(700));
    assert_eq!(t.offset(), 700);
    assert_eq!(t.direction(), Some(ScrollDirection::Forward));

    assert!(t.set_offset(10));
    assert_eq!(t.direction(), Some(ScrollDirection::Backward));
    assert!(!t.set_offset(10));
}

#[test]
fn tracker_is_scrolling_decays_after_delay() {
    let mut t = ScrollPositionTracker::new(0).with_reset_delay_ms(100);
    assert!(t.record_scroll(40, 1_000));
    assert!(t.is_scrolling());

    assert!(!t.update_scrolling(1_050));
    assert!(t.is_scrolling());

    // A new event pushes the deadline out.
    t.record_scroll(80, 1_080);
    assert!(!t.update_scrolling(1_150));
    assert!(t.update_scrolling(1_180));
    assert!(!t.is_scrolling());
    assert_eq!(t.direction(), None);
    assert_eq!(t.offset(), 80);
}

#[test]
fn tracker_state_roundtrips_through_restore() {
    let mut t = ScrollPositionTracker::new(0);
    t.record_scroll(500, 10);
    let snap = t.state();
    assert_eq!(
        snap,
        ScrollState {
            offset: 500,
            is_scrolling: true
        }
    );

    let mut other = ScrollPositionTracker::new(0);
    other.restore(snap, 20);
    assert_eq!(other.state(), snap);

    other.restore(
        ScrollState {
            offset: 7,
            is_scrolling: false,
        },
        30,
    );
    assert_eq!(other.offset(), 7);
    assert!(!other.is_scrolling());
}

#[test]
fn window_render_tracks_scroll_and_collection_changes() {
    let mut w = ViewportWindow::new(WindowOptions::new(50, 500)).unwrap();
    let data = items(1000);

    let out = w.render(&data).unwrap();
    assert_eq!(out.start_index(), Some(0));
    assert_eq!(out.end_index(), Some(15));

    w.on_scroll(1000);
    let out = w.render(&data).unwrap();
    assert_eq!(out.start_index(), Some(15));
    assert_eq!(out.end_index(), Some(35));

    // The collection shrinks under the same offset; the window follows.
    let shorter = items(20);
    let out = w.render(&shorter).unwrap();
    assert_eq!(out.end_index(), Some(19));
    assert_eq!(out.total_height, 1000);
    assert!(out.start_index().unwrap() <= 19);

    let empty: Vec<usize> = Vec::new();
    let out = w.render(&empty).unwrap();
    assert!(out.is_empty());
    assert_eq!(out.total_height, 0);
}

#[test]
fn window_geometry_updates_recompute() {
    let mut w = ViewportWindow::new(WindowOptions::new(50, 500).with_overscan(0)).unwrap();
    w.on_scroll(1000);
    assert_eq!(
        w.range(1000).unwrap(),
        Some(VisibleRange {
            start_index: 20,
            end_index: 30
        })
    );

    w.set_container_height(1000).unwrap();
    assert_eq!(w.range(1000).unwrap().unwrap().end_index, 40);

    w.set_item_height(100).unwrap();
    assert_eq!(
        w.range(1000).unwrap(),
        Some(VisibleRange {
            start_index: 10,
            end_index: 20
        })
    );

    w.set_overscan(2).unwrap();
    assert_eq!(
        w.range(1000).unwrap(),
        Some(VisibleRange {
            start_index: 8,
            end_index: 22
        })
    );
}

#[test]
fn window_initial_offset_applies_at_construction() {
    let w = ViewportWindow::new(WindowOptions::new(10, 100).with_initial_offset(250)).unwrap();
    assert_eq!(w.scroll_offset(), 250);
    assert_eq!(w.viewport_range(1000).unwrap().unwrap().start_index, 25);
}

#[test]
fn window_scroll_to_index_applies_offset() {
    let mut w = ViewportWindow::new(WindowOptions::new(10, 50)).unwrap();
    assert_eq!(w.scroll_to_index(40, Align::Start, 100).unwrap(), 400);
    assert_eq!(w.scroll_offset(), 400);
    assert!(!w.is_scrolling());
    assert_eq!(w.index_at_offset(w.scroll_offset(), 100), Some(40));
}

#[test]
fn on_change_fires_per_update_and_once_per_batch() {
    let calls = Arc::new(AtomicUsize::new(0));
    let calls2 = Arc::clone(&calls);
    let mut w = ViewportWindow::new(WindowOptions::new(10, 100).with_on_change(Some(
        move |_: &ViewportWindow, _: bool| {
            calls2.fetch_add(1, Ordering::Relaxed);
        },
    )))
    .unwrap();
    assert_eq!(calls.load(Ordering::Relaxed), 0);

    w.on_scroll(10);
    w.on_scroll(20);
    // Unchanged offset does not notify.
    w.on_scroll(20);
    assert_eq!(calls.load(Ordering::Relaxed), 2);

    w.batch_update(|w| {
        w.on_scroll(30);
        w.set_container_height(200).unwrap();
        w.set_overscan(1).unwrap();
    });
    assert_eq!(calls.load(Ordering::Relaxed), 3);
}

#[test]
fn on_change_observes_is_scrolling() {
    let seen = Arc::new(AtomicUsize::new(0));
    let seen2 = Arc::clone(&seen);
    let mut w = ViewportWindow::new(
        WindowOptions::new(10, 100)
            .with_is_scrolling_reset_delay_ms(50)
            .with_on_change(Some(move |w: &ViewportWindow, is_scrolling: bool| {
                assert_eq!(w.is_scrolling(), is_scrolling);
                if is_scrolling {
                    seen2.fetch_add(1, Ordering::Relaxed);
                }
            })),
    )
    .unwrap();

    w.on_scroll_at(100, 0);
    assert!(w.is_scrolling());
    w.update_scrolling(49);
    assert!(w.is_scrolling());
    w.update_scrolling(50);
    assert!(!w.is_scrolling());
    assert_eq!(seen.load(Ordering::Relaxed), 1);
}

#[test]
fn randomized_range_invariants() {
    let mut rng = Lcg::new(0x5eed_1234);
    for _ in 0..2_000 {
        let item_height = rng.gen_range_u32(1, 200);
        let container_height = rng.gen_range_u32(0, 2_000);
        let overscan = rng.gen_range_usize(0, 12);
        let count = rng.gen_range_usize(0, 5_000);
        let c = calc(item_height, container_height, overscan);
        let total = c.total_height(count).unwrap();
        let offset = rng.gen_range_u64(0, total.saturating_mul(2).saturating_add(1_000));

        let r = c.range(offset, count).unwrap();
        // Idempotence.
        assert_eq!(r, c.range(offset, count).unwrap());

        let data = items(count);
        let out = extract(&data, r, item_height).unwrap();
        assert_eq!(out.total_height, count as u64 * item_height as u64);

        let Some(r) = r else {
            assert_eq!(count, 0);
            assert!(out.visible_items.is_empty());
            assert_eq!(out.offset_y, 0);
            continue;
        };
        assert!(count > 0);
        assert!(r.start_index <= r.end_index);
        assert!(r.end_index < count);
        assert_eq!(out.visible_items.len(), r.end_index - r.start_index + 1);
        assert_eq!(out.offset_y, r.start_index as u64 * item_height as u64);
        assert_eq!(out.visible_items[0], r.start_index);

        // Every item intersecting the (clamped) viewport is covered.
        let clamped = c.clamp_scroll_offset(offset, count).unwrap();
        let first = c.index_at_offset(clamped, count).unwrap();
        assert!(r.contains(first));
    }
}

#[test]
fn randomized_monotonic_in_scroll_offset() {
    let mut rng = Lcg::new(42);
    for _ in 0..300 {
        let item_height = rng.gen_range_u32(1, 80);
        let container_height = rng.gen_range_u32(0, 800);
        let overscan = rng.gen_range_usize(0, 8);
        let count = rng.gen_range_usize(1, 2_000);
        let c = calc(item_height, container_height, overscan);
        let limit = c.total_height(count).unwrap() + 2_000;

        let mut offsets: Vec<u64> = (0..40).map(|_| rng.gen_range_u64(0, limit)).collect();
        offsets.sort_unstable();

        let mut prev: Option<VisibleRange> = None;
        for off in offsets {
            let r = c.range(off, count).unwrap().unwrap();
            if let Some(p) = prev {
                assert!(p.start_index <= r.start_index, "start moved back at {off}");
                assert!(p.end_index <= r.end_index, "end moved back at {off}");
            }
            prev = Some(r);
        }
    }
}

#[test]
fn error_messages_are_descriptive() {
    use alloc::string::ToString;

    assert_eq!(
        WindowError::ZeroItemHeight.to_string(),
        "item height must be positive"
    );
    assert_eq!(
        WindowError::RangeOutOfBounds {
            start_index: 1,
            end_index: 9,
            item_count: 5,
        }
        .to_string(),
        "range 1..=9 is out of bounds for 5 items"
    );
}
