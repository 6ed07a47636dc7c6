use core::cmp;

use crate::{ScrollDirection, ScrollState};

/// Default inactivity window after which [`ScrollPositionTracker::update_scrolling`] clears the
/// scrolling flag.
pub const DEFAULT_IS_SCROLLING_RESET_DELAY_MS: u64 = 150;

/// Owns the current scroll offset of one viewport.
///
/// The offset is replaced wholesale on every update (last write wins). Nothing is queued,
/// coalesced or debounced: a window computed right after `set_offset` always sees the newest
/// offset.
///
/// The tracker also keeps a little derived state adapters commonly want: the direction of the
/// last movement and an `is_scrolling` flag that decays after a period without scroll events.
#[derive(Clone, Debug)]
pub struct ScrollPositionTracker {
    offset: u64,
    direction: Option<ScrollDirection>,
    is_scrolling: bool,
    last_scroll_event_ms: Option<u64>,
    reset_delay_ms: u64,
}

impl Default for ScrollPositionTracker {
    fn default() -> Self {
        Self::new(0)
    }
}

impl ScrollPositionTracker {
    pub fn new(initial_offset: u64) -> Self {
        Self {
            offset: initial_offset,
            direction: None,
            is_scrolling: false,
            last_scroll_event_ms: None,
            reset_delay_ms: DEFAULT_IS_SCROLLING_RESET_DELAY_MS,
        }
    }

    pub fn with_reset_delay_ms(mut self, delay_ms: u64) -> Self {
        self.reset_delay_ms = delay_ms;
        self
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn direction(&self) -> Option<ScrollDirection> {
        self.direction
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    pub fn reset_delay_ms(&self) -> u64 {
        self.reset_delay_ms
    }

    pub fn set_reset_delay_ms(&mut self, delay_ms: u64) {
        self.reset_delay_ms = delay_ms;
    }

    /// Replaces the current offset.
    ///
    /// Returns `true` if the offset changed.
    pub fn set_offset(&mut self, offset: u64) -> bool {
        if self.offset == offset {
            return false;
        }
        let prev = self.offset;
        self.offset = offset;
        self.direction = match offset.cmp(&prev) {
            cmp::Ordering::Greater => Some(ScrollDirection::Forward),
            cmp::Ordering::Less => Some(ScrollDirection::Backward),
            cmp::Ordering::Equal => self.direction,
        };
        vtrace!(prev, offset, "ScrollPositionTracker::set_offset");
        true
    }

    /// Records a scroll event from the UI: replaces the offset and marks the tracker as
    /// scrolling as of `now_ms`.
    ///
    /// Returns `true` if any observable state changed.
    pub fn record_scroll(&mut self, offset: u64, now_ms: u64) -> bool {
        let moved = self.set_offset(offset);
        self.last_scroll_event_ms = Some(now_ms);
        let started = !self.is_scrolling;
        self.is_scrolling = true;
        moved || started
    }

    /// Clears `is_scrolling` once `reset_delay_ms` has elapsed since the last scroll event.
    ///
    /// Returns `true` if the flag was cleared.
    pub fn update_scrolling(&mut self, now_ms: u64) -> bool {
        if !self.is_scrolling {
            return false;
        }
        let Some(last) = self.last_scroll_event_ms else {
            return false;
        };
        if now_ms.saturating_sub(last) < self.reset_delay_ms {
            return false;
        }
        self.stop_scrolling()
    }

    /// Clears the scrolling flag immediately (e.g. on a native scroll-end event).
    ///
    /// Returns `true` if the flag was set.
    pub fn stop_scrolling(&mut self) -> bool {
        if !self.is_scrolling {
            return false;
        }
        self.is_scrolling = false;
        self.direction = None;
        self.last_scroll_event_ms = None;
        true
    }

    /// Returns a lightweight snapshot of the current scroll state.
    pub fn state(&self) -> ScrollState {
        ScrollState {
            offset: self.offset,
            is_scrolling: self.is_scrolling,
        }
    }

    /// Restores a previously captured snapshot.
    ///
    /// When `state.is_scrolling` is `true`, this behaves as if a scroll event happened at
    /// `now_ms`.
    pub fn restore(&mut self, state: ScrollState, now_ms: u64) {
        if state.is_scrolling {
            self.record_scroll(state.offset, now_ms);
            return;
        }
        self.set_offset(state.offset);
        self.stop_scrolling();
    }
}
