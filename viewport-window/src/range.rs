use crate::error::{Result, WindowError};
use crate::{Align, Geometry, VisibleRange};

/// Overscan used when the caller does not configure one.
pub const DEFAULT_OVERSCAN: usize = 5;

/// Computes index windows for a list of fixed-height items.
///
/// The calculator is a validated bundle of geometry + overscan. It holds no scroll state and no
/// history: every method is a pure function of its arguments, so identical inputs always produce
/// identical outputs.
///
/// Over-scroll (an offset past `max_scroll_offset`) is not rejected. The window start is taken
/// from the clamped offset while the end clamps to the last item, which yields the tail window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeCalculator {
    geometry: Geometry,
    overscan: usize,
}

impl RangeCalculator {
    pub fn new(geometry: Geometry, overscan: usize) -> Result<Self> {
        geometry.validate()?;
        Ok(Self { geometry, overscan })
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn overscan(&self) -> usize {
        self.overscan
    }

    fn item_height(&self) -> u64 {
        self.geometry.item_height as u64
    }

    /// `item_count * item_height`, failing instead of wrapping.
    pub fn total_height(&self, item_count: usize) -> Result<u64> {
        total_height(item_count, self.geometry.item_height)
    }

    /// The largest offset at which the viewport still ends inside the list.
    pub fn max_scroll_offset(&self, item_count: usize) -> Result<u64> {
        let total = self.total_height(item_count)?;
        Ok(total.saturating_sub(self.geometry.container_height as u64))
    }

    pub fn clamp_scroll_offset(&self, offset: u64, item_count: usize) -> Result<u64> {
        Ok(offset.min(self.max_scroll_offset(item_count)?))
    }

    /// Returns the overscanned window for `scroll_offset`, or `None` for an empty collection.
    pub fn range(&self, scroll_offset: u64, item_count: usize) -> Result<Option<VisibleRange>> {
        self.range_with_overscan(scroll_offset, item_count, self.overscan)
    }

    /// Returns the strict window (no overscan) for `scroll_offset`.
    pub fn viewport_range(
        &self,
        scroll_offset: u64,
        item_count: usize,
    ) -> Result<Option<VisibleRange>> {
        self.range_with_overscan(scroll_offset, item_count, 0)
    }

    fn range_with_overscan(
        &self,
        scroll_offset: u64,
        item_count: usize,
        overscan: usize,
    ) -> Result<Option<VisibleRange>> {
        if item_count == 0 {
            return Ok(None);
        }

        let h = self.item_height();
        let last = item_count - 1;
        let view = self.geometry.container_height as u64;
        // Offsets are u64, so a total past u64::MAX never limits the start.
        let max_offset = (item_count as u64).saturating_mul(h).saturating_sub(view);

        // floor(offset / h) - overscan, with the offset capped so that over-scroll keeps a full
        // tail window instead of collapsing to the last item.
        let first = to_index(scroll_offset.min(max_offset) / h);
        let start = first.saturating_sub(overscan);

        // ceil((offset + view) / h) + overscan, clamped to the last item.
        let end = to_index(scroll_offset.saturating_add(view).div_ceil(h))
            .saturating_add(overscan)
            .min(last);

        // Only reachable with a zero-height container scrolled to the very end.
        let start = start.min(end);

        vtrace!(
            scroll_offset,
            item_count,
            overscan,
            start,
            end,
            "RangeCalculator::range"
        );
        Ok(Some(VisibleRange {
            start_index: start,
            end_index: end,
        }))
    }

    /// Returns the index of the item under `offset`, clamped to the last item.
    pub fn index_at_offset(&self, offset: u64, item_count: usize) -> Option<usize> {
        if item_count == 0 {
            return None;
        }
        Some(to_index(offset / self.item_height()).min(item_count - 1))
    }

    /// Returns the top of item `index` in the scroll area.
    pub fn item_top(&self, index: usize) -> Result<u64> {
        (index as u64)
            .checked_mul(self.item_height())
            .ok_or(WindowError::ExtentOverflow {
                item_count: index,
                item_height: self.geometry.item_height,
            })
    }

    /// Computes the scroll offset that brings `index` into view with the given alignment.
    ///
    /// `index` is clamped to the last item and the result is clamped to `max_scroll_offset`.
    /// `current_offset` is only consulted by [`Align::Auto`].
    pub fn scroll_to_index_offset(
        &self,
        index: usize,
        align: Align,
        current_offset: u64,
        item_count: usize,
    ) -> Result<u64> {
        let max_offset = self.max_scroll_offset(item_count)?;
        if item_count == 0 {
            return Ok(0);
        }
        let index = index.min(item_count - 1);
        let h = self.item_height();
        let view = self.geometry.container_height as u64;
        let top = self.item_top(index)?;
        let bottom = top.saturating_add(h);

        let target = match align {
            Align::Start => top,
            Align::End => bottom.saturating_sub(view),
            Align::Center => top.saturating_add(h / 2).saturating_sub(view / 2),
            Align::Auto => {
                let cur_end = current_offset.saturating_add(view);
                if top >= current_offset && bottom <= cur_end {
                    current_offset
                } else if top < current_offset {
                    top
                } else {
                    bottom.saturating_sub(view)
                }
            }
        };

        Ok(target.min(max_offset))
    }
}

/// `item_count * item_height`.
///
/// Fails with [`WindowError::ZeroItemHeight`] for a zero height and with
/// [`WindowError::ExtentOverflow`] when the product does not fit in `u64`.
pub fn total_height(item_count: usize, item_height: u32) -> Result<u64> {
    if item_height == 0 {
        vwarn!(item_count, "total_height: item_height is zero");
        return Err(WindowError::ZeroItemHeight);
    }
    (item_count as u64)
        .checked_mul(item_height as u64)
        .ok_or(WindowError::ExtentOverflow {
            item_count,
            item_height,
        })
}

/// One-shot range computation.
///
/// Equivalent to `RangeCalculator::new(Geometry { .. }, overscan)?.range(scroll_offset, item_count)`.
pub fn compute_range(
    scroll_offset: u64,
    item_height: u32,
    container_height: u32,
    overscan: usize,
    item_count: usize,
) -> Result<Option<VisibleRange>> {
    let geometry = Geometry {
        item_height,
        container_height,
    };
    RangeCalculator::new(geometry, overscan)?.range(scroll_offset, item_count)
}

fn to_index(v: u64) -> usize {
    usize::try_from(v).unwrap_or(usize::MAX)
}
