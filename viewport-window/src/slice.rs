use crate::error::{Result, WindowError};
use crate::range::total_height;
use crate::{PositionedItem, VisibleRange};

/// The slice a renderer needs to draw, plus the offsets that keep it aligned inside the full-size
/// scroll area.
///
/// Derived fresh from the collection on every call to [`extract`]; never cached.
#[derive(Debug, PartialEq, Eq)]
pub struct RenderResult<'a, T> {
    pub visible_items: &'a [T],
    /// `item_count * item_height`: the height the scroll container should report.
    pub total_height: u64,
    /// `start_index * item_height`: where the slice must be translated to.
    pub offset_y: u64,
    pub range: Option<VisibleRange>,
    item_height: u32,
}

impl<T> Clone for RenderResult<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RenderResult<'_, T> {}

impl<'a, T> RenderResult<'a, T> {
    pub fn start_index(&self) -> Option<usize> {
        self.range.map(|r| r.start_index)
    }

    pub fn end_index(&self) -> Option<usize> {
        self.range.map(|r| r.end_index)
    }

    pub fn item_height(&self) -> u32 {
        self.item_height
    }

    pub fn is_empty(&self) -> bool {
        self.visible_items.is_empty()
    }

    /// Space left below the rendered slice, for layouts that pad instead of translating.
    pub fn bottom_padding(&self) -> u64 {
        let slice = self.visible_items.len() as u64 * self.item_height as u64;
        self.total_height
            .saturating_sub(self.offset_y)
            .saturating_sub(slice)
    }

    /// Iterates the visible items with their absolute index and top offset.
    pub fn positioned(&self) -> impl Iterator<Item = PositionedItem<'a, T>> + use<'a, T> {
        let start = self.start_index().unwrap_or(0);
        let h = self.item_height as u64;
        let offset_y = self.offset_y;
        self.visible_items
            .iter()
            .enumerate()
            .map(move |(i, item)| PositionedItem {
                index: start + i,
                top: offset_y + i as u64 * h,
                item,
            })
    }
}

/// Slices `items` to `range` and derives the scroll-area geometry.
///
/// `range` must come from a computation over the same collection length; a stale range that no
/// longer fits fails with [`WindowError::RangeOutOfBounds`].
pub fn extract<T>(
    items: &[T],
    range: Option<VisibleRange>,
    item_height: u32,
) -> Result<RenderResult<'_, T>> {
    let total_height = total_height(items.len(), item_height)?;

    let Some(r) = range else {
        return Ok(RenderResult {
            visible_items: &[],
            total_height,
            offset_y: 0,
            range: None,
            item_height,
        });
    };

    if r.start_index > r.end_index || r.end_index >= items.len() {
        vwarn!(
            start = r.start_index,
            end = r.end_index,
            count = items.len(),
            "extract: range does not fit the collection"
        );
        return Err(WindowError::RangeOutOfBounds {
            start_index: r.start_index,
            end_index: r.end_index,
            item_count: items.len(),
        });
    }

    // start_index < len, so this cannot overflow once total_height fits.
    let offset_y = r.start_index as u64 * item_height as u64;
    Ok(RenderResult {
        visible_items: &items[r.start_index..=r.end_index],
        total_height,
        offset_y,
        range: Some(r),
        item_height,
    })
}
