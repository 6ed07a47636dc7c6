use alloc::rc::Rc;
use core::cell::{Ref, RefCell, RefMut};

use viewport_window::{RenderResult, Result, ViewportWindow};

/// A cloneable, single-threaded handle to a [`ViewportWindow`].
///
/// UI toolkits usually want a `'static` callback for scroll notifications while the render code
/// elsewhere reads the same window. [`Self::handler`] returns such a callback; every clone of the
/// handle observes the offsets it feeds in.
///
/// The window stays mutably borrowed while its `on_change` callback runs. Inside the callback,
/// read the `&ViewportWindow` it receives rather than going through the handle. Scroll events
/// delivered re-entrantly are dropped, and [`Self::scroll_offset`] returns `None`.
#[derive(Clone, Debug)]
pub struct ScrollHandle {
    inner: Rc<RefCell<ViewportWindow>>,
}

impl ScrollHandle {
    pub fn new(w: ViewportWindow) -> Self {
        Self {
            inner: Rc::new(RefCell::new(w)),
        }
    }

    pub fn borrow(&self) -> Ref<'_, ViewportWindow> {
        self.inner.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, ViewportWindow> {
        self.inner.borrow_mut()
    }

    /// Feeds a scroll offset into the window. Returns `false` if the event was dropped.
    pub fn on_scroll(&self, offset: u64) -> bool {
        let Ok(mut w) = self.inner.try_borrow_mut() else {
            vwarn!(offset, "ScrollHandle: re-entrant scroll event dropped");
            return false;
        };
        w.on_scroll(offset);
        true
    }

    /// Like [`Self::on_scroll`], and also marks the window as scrolling as of `now_ms`.
    pub fn on_scroll_at(&self, offset: u64, now_ms: u64) -> bool {
        let Ok(mut w) = self.inner.try_borrow_mut() else {
            vwarn!(offset, now_ms, "ScrollHandle: re-entrant scroll event dropped");
            return false;
        };
        w.on_scroll_at(offset, now_ms);
        true
    }

    /// Returns a callback to attach to a scroll-event source.
    pub fn handler(&self) -> impl FnMut(u64) + use<> {
        let handle = self.clone();
        move |offset| {
            handle.on_scroll(offset);
        }
    }

    /// Returns a callback taking `(offset, now_ms)`, for sources that timestamp their events.
    pub fn timed_handler(&self) -> impl FnMut(u64, u64) + use<> {
        let handle = self.clone();
        move |offset, now_ms| {
            handle.on_scroll_at(offset, now_ms);
        }
    }

    /// Returns the current offset, or `None` while the window is mutably borrowed.
    pub fn scroll_offset(&self) -> Option<u64> {
        self.inner.try_borrow().ok().map(|w| w.scroll_offset())
    }

    /// Recomputes the window at the latest offset and slices `items`.
    ///
    /// # Panics
    ///
    /// Panics if called while the window is mutably borrowed, e.g. from its `on_change` callback.
    pub fn render<'a, T>(&self, items: &'a [T]) -> Result<RenderResult<'a, T>> {
        self.inner.borrow().render(items)
    }
}
