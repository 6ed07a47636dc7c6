use alloc::sync::Arc;
use core::cell::Cell;

use crate::error::Result;
use crate::range::RangeCalculator;
use crate::slice::{RenderResult, extract};
use crate::tracker::ScrollPositionTracker;
use crate::{Align, Geometry, ScrollDirection, ScrollState, VisibleRange, WindowOptions};

/// A headless viewport window over a list of fixed-height items.
///
/// This type wires the scroll tracker to the range and slice computations:
/// - It does not hold any UI objects, nor the collection itself.
/// - Your adapter feeds it scroll offsets (`on_scroll`) and geometry changes.
/// - Each call to [`Self::render`] recomputes the window from scratch for the collection you
///   pass in, so the collection may change length between calls.
///
/// For shared scroll handlers and anchoring, see the `viewport-window-adapter` crate.
#[derive(Clone, Debug)]
pub struct ViewportWindow {
    options: WindowOptions,
    calc: RangeCalculator,
    tracker: ScrollPositionTracker,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl ViewportWindow {
    /// Creates a window from options, failing fast on invalid geometry.
    pub fn new(options: WindowOptions) -> Result<Self> {
        let calc = RangeCalculator::new(options.geometry(), options.overscan)?;
        let tracker = ScrollPositionTracker::new(options.initial_offset)
            .with_reset_delay_ms(options.is_scrolling_reset_delay_ms);
        vdebug!(
            item_height = options.item_height,
            container_height = options.container_height,
            overscan = options.overscan,
            "ViewportWindow::new"
        );
        Ok(Self {
            options,
            calc,
            tracker,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        })
    }

    pub fn options(&self) -> &WindowOptions {
        &self.options
    }

    pub fn calculator(&self) -> &RangeCalculator {
        &self.calc
    }

    pub fn tracker(&self) -> &ScrollPositionTracker {
        &self.tracker
    }

    pub fn geometry(&self) -> Geometry {
        self.calc.geometry()
    }

    pub fn overscan(&self) -> usize {
        self.calc.overscan()
    }

    /// Replaces the options.
    ///
    /// Invalid geometry is rejected before anything is applied, leaving the window unchanged.
    /// The scroll offset is kept; `initial_offset` only applies at construction.
    pub fn set_options(&mut self, options: WindowOptions) -> Result<()> {
        let calc = RangeCalculator::new(options.geometry(), options.overscan)?;
        self.calc = calc;
        self.tracker.set_reset_delay_ms(options.is_scrolling_reset_delay_ms);
        self.options = options;
        vtrace!(
            item_height = self.options.item_height,
            container_height = self.options.container_height,
            overscan = self.options.overscan,
            "ViewportWindow::set_options"
        );
        self.notify();
        Ok(())
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut WindowOptions)) -> Result<()> {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next)
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&ViewportWindow, bool) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    pub fn set_geometry(&mut self, geometry: Geometry) -> Result<()> {
        if geometry == self.geometry() {
            return Ok(());
        }
        self.update_options(|o| {
            o.item_height = geometry.item_height;
            o.container_height = geometry.container_height;
        })
    }

    pub fn set_item_height(&mut self, item_height: u32) -> Result<()> {
        self.set_geometry(Geometry {
            item_height,
            ..self.geometry()
        })
    }

    pub fn set_container_height(&mut self, container_height: u32) -> Result<()> {
        self.set_geometry(Geometry {
            container_height,
            ..self.geometry()
        })
    }

    pub fn set_overscan(&mut self, overscan: usize) -> Result<()> {
        if overscan == self.overscan() {
            return Ok(());
        }
        self.update_options(|o| o.overscan = overscan)
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self, self.tracker.is_scrolling());
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// Useful when a frame changes geometry and scroll offset together and the callback drives
    /// rendering.
    pub fn batch_update<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        let out = f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
        out
    }

    pub fn scroll_offset(&self) -> u64 {
        self.tracker.offset()
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.tracker.direction()
    }

    pub fn is_scrolling(&self) -> bool {
        self.tracker.is_scrolling()
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.tracker.state()
    }

    /// The scroll-event entry point: replaces the current offset (last write wins).
    pub fn on_scroll(&mut self, offset: u64) {
        if self.tracker.set_offset(offset) {
            self.notify();
        }
    }

    /// Like [`Self::on_scroll`], and also marks the window as scrolling as of `now_ms`.
    pub fn on_scroll_at(&mut self, offset: u64, now_ms: u64) {
        vtrace!(offset, now_ms, "ViewportWindow::on_scroll_at");
        if self.tracker.record_scroll(offset, now_ms) {
            self.notify();
        }
    }

    /// Clears `is_scrolling` after the configured inactivity delay.
    pub fn update_scrolling(&mut self, now_ms: u64) {
        if self.tracker.update_scrolling(now_ms) {
            self.notify();
        }
    }

    pub fn stop_scrolling(&mut self) {
        if self.tracker.stop_scrolling() {
            self.notify();
        }
    }

    pub fn restore_scroll_state(&mut self, state: ScrollState, now_ms: u64) {
        self.tracker.restore(state, now_ms);
        self.notify();
    }

    pub fn total_height(&self, item_count: usize) -> Result<u64> {
        self.calc.total_height(item_count)
    }

    pub fn max_scroll_offset(&self, item_count: usize) -> Result<u64> {
        self.calc.max_scroll_offset(item_count)
    }

    pub fn clamp_scroll_offset(&self, offset: u64, item_count: usize) -> Result<u64> {
        self.calc.clamp_scroll_offset(offset, item_count)
    }

    /// The overscanned window at the current offset.
    pub fn range(&self, item_count: usize) -> Result<Option<VisibleRange>> {
        self.calc.range(self.scroll_offset(), item_count)
    }

    /// The strict window (no overscan) at the current offset.
    pub fn viewport_range(&self, item_count: usize) -> Result<Option<VisibleRange>> {
        self.calc.viewport_range(self.scroll_offset(), item_count)
    }

    /// Recomputes the window for `items` and slices it.
    pub fn render<'a, T>(&self, items: &'a [T]) -> Result<RenderResult<'a, T>> {
        let range = self.range(items.len())?;
        extract(items, range, self.geometry().item_height)
    }

    pub fn index_at_offset(&self, offset: u64, item_count: usize) -> Option<usize> {
        self.calc.index_at_offset(offset, item_count)
    }

    pub fn scroll_to_index_offset(
        &self,
        index: usize,
        align: Align,
        item_count: usize,
    ) -> Result<u64> {
        self.calc
            .scroll_to_index_offset(index, align, self.scroll_offset(), item_count)
    }

    /// Programmatically scrolls to an index (no animation).
    ///
    /// Does not mark the window as scrolling. Returns the applied (clamped) offset.
    pub fn scroll_to_index(
        &mut self,
        index: usize,
        align: Align,
        item_count: usize,
    ) -> Result<u64> {
        let offset = self.scroll_to_index_offset(index, align, item_count)?;
        self.on_scroll(offset);
        Ok(offset)
    }
}
