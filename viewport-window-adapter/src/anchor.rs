use viewport_window::{Result, ViewportWindow};

/// A scroll anchor that can be used to preserve visual position across data changes.
///
/// Typical use cases:
/// - chat/timeline "prepend" (load older messages above) without content jumping
/// - removing items above the viewport
///
/// Items are opaque to the window, so the anchor records an index; the adapter maps it to the
/// item's index in the new collection when applying.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollAnchor {
    pub index: usize,
    /// `scroll_offset - item_top`: positive when the item starts above the viewport top.
    pub scroll_delta: i64,
}

impl ScrollAnchor {
    pub(crate) fn new(index: usize, item_top: u64, scroll_offset: u64) -> Self {
        let scroll_delta = if scroll_offset >= item_top {
            i64::try_from(scroll_offset - item_top).unwrap_or(i64::MAX)
        } else {
            i64::try_from(item_top - scroll_offset).map_or(i64::MIN, |d| -d)
        };
        Self {
            index,
            scroll_delta,
        }
    }
}

/// Captures an anchor for the first item in the viewport (ignoring overscan).
///
/// Returns `Ok(None)` for an empty collection.
pub fn capture_first_visible_anchor(
    w: &ViewportWindow,
    item_count: usize,
) -> Result<Option<ScrollAnchor>> {
    let Some(visible) = w.viewport_range(item_count)? else {
        return Ok(None);
    };
    let index = visible.start_index;
    let top = w.calculator().item_top(index)?;
    let offset = w.clamp_scroll_offset(w.scroll_offset(), item_count)?;
    Ok(Some(ScrollAnchor::new(index, top, offset)))
}

/// Applies a previously captured anchor by adjusting the scroll offset.
///
/// `remap` maps the anchor's old index to its index in the *current* collection of
/// `item_count` items. The resulting offset is clamped to the current maximum.
///
/// Returns `Ok(true)` when the anchor was applied, `Ok(false)` when the anchored item is gone.
pub fn apply_anchor(
    w: &mut ViewportWindow,
    anchor: &ScrollAnchor,
    item_count: usize,
    remap: impl FnOnce(usize) -> Option<usize>,
) -> Result<bool> {
    let Some(index) = remap(anchor.index).filter(|&i| i < item_count) else {
        vwarn!(
            index = anchor.index,
            item_count,
            "apply_anchor: item no longer present"
        );
        return Ok(false);
    };
    let top = w.calculator().item_top(index)?;
    let target = top.saturating_add_signed(anchor.scroll_delta);
    let target = w.clamp_scroll_offset(target, item_count)?;
    vtrace!(from = anchor.index, to = index, target, "apply_anchor");
    w.on_scroll(target);
    Ok(true)
}
