use viewport_window::{Align, RenderResult, Result, ViewportWindow, WindowOptions};

use crate::{ScrollAnchor, apply_anchor, capture_first_visible_anchor};

/// A framework-neutral controller that wraps a [`ViewportWindow`] and bundles the calls a typical
/// frame loop makes.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_viewport_size` / `on_scroll` when UI events occur
/// - `tick(now_ms)` each frame/timer tick (for `is_scrolling` decay)
/// - `render(items)` whenever they draw
///
/// Programmatic scrolls return the applied offset, which the adapter writes back to the real
/// scroll container.
#[derive(Clone, Debug)]
pub struct Controller {
    w: ViewportWindow,
}

impl Controller {
    pub fn new(options: WindowOptions) -> Result<Self> {
        Ok(Self {
            w: ViewportWindow::new(options)?,
        })
    }

    pub fn from_window(w: ViewportWindow) -> Self {
        Self { w }
    }

    pub fn window(&self) -> &ViewportWindow {
        &self.w
    }

    pub fn window_mut(&mut self) -> &mut ViewportWindow {
        &mut self.w
    }

    pub fn into_window(self) -> ViewportWindow {
        self.w
    }

    pub fn on_viewport_size(&mut self, container_height: u32) -> Result<()> {
        self.w.set_container_height(container_height)
    }

    /// Call this when the UI reports a scroll offset change (e.g. user wheel/drag).
    pub fn on_scroll(&mut self, scroll_offset: u64, now_ms: u64) {
        self.w.on_scroll_at(scroll_offset, now_ms);
    }

    /// Advances `is_scrolling` decay. Returns whether the window is still scrolling.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.w.update_scrolling(now_ms);
        self.w.is_scrolling()
    }

    pub fn render<'a, T>(&self, items: &'a [T]) -> Result<RenderResult<'a, T>> {
        self.w.render(items)
    }

    /// Computes and applies a scroll-to-index immediately, as a scroll event at `now_ms`.
    ///
    /// Returns the applied (clamped) offset.
    pub fn scroll_to_index(
        &mut self,
        index: usize,
        align: Align,
        item_count: usize,
        now_ms: u64,
    ) -> Result<u64> {
        let off = self.w.scroll_to_index_offset(index, align, item_count)?;
        self.w.on_scroll_at(off, now_ms);
        Ok(off)
    }

    /// Applies a scroll-to-offset immediately, as a scroll event at `now_ms`.
    ///
    /// Returns the applied (clamped) offset.
    pub fn scroll_to_offset(
        &mut self,
        offset: u64,
        item_count: usize,
        now_ms: u64,
    ) -> Result<u64> {
        let off = self.w.clamp_scroll_offset(offset, item_count)?;
        self.w.on_scroll_at(off, now_ms);
        Ok(off)
    }

    pub fn capture_first_visible_anchor(
        &self,
        item_count: usize,
    ) -> Result<Option<ScrollAnchor>> {
        capture_first_visible_anchor(&self.w, item_count)
    }

    /// Captures an anchor for the item at a given offset in the viewport.
    ///
    /// For example, `offset_in_viewport = 0` anchors the item at the top of the viewport.
    pub fn capture_anchor_at_offset_in_viewport(
        &self,
        offset_in_viewport: u64,
        item_count: usize,
    ) -> Result<Option<ScrollAnchor>> {
        let offset = self.w.clamp_scroll_offset(self.w.scroll_offset(), item_count)?;
        let abs = offset.saturating_add(offset_in_viewport);
        let Some(index) = self.w.index_at_offset(abs, item_count) else {
            return Ok(None);
        };
        let top = self.w.calculator().item_top(index)?;
        Ok(Some(ScrollAnchor::new(index, top, offset)))
    }

    pub fn apply_anchor(
        &mut self,
        anchor: &ScrollAnchor,
        item_count: usize,
        remap: impl FnOnce(usize) -> Option<usize>,
    ) -> Result<bool> {
        apply_anchor(&mut self.w, anchor, item_count, remap)
    }
}
