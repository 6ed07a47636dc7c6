use alloc::sync::Arc;

use crate::range::DEFAULT_OVERSCAN;
use crate::tracker::DEFAULT_IS_SCROLLING_RESET_DELAY_MS;
use crate::window::ViewportWindow;
use crate::Geometry;

/// A callback fired when the window's state changes.
///
/// The second argument is `is_scrolling`.
pub type OnChangeCallback = Arc<dyn Fn(&ViewportWindow, bool) + Send + Sync>;

/// Configuration for [`crate::ViewportWindow`].
///
/// With `feature = "serde"`, the plain-data fields (everything except `on_change`) implement
/// `Serialize`/`Deserialize`, so a collaborator can load window settings from its own config.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowOptions {
    /// Uniform height of every item, in pixels. Must be positive.
    pub item_height: u32,
    /// Visible height of the scroll container, in pixels.
    pub container_height: u32,
    /// Extra items realized on each side of the viewport.
    #[cfg_attr(feature = "serde", serde(default = "default_overscan"))]
    pub overscan: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    pub initial_offset: u64,
    /// Inactivity window after which `is_scrolling` is cleared by `update_scrolling`.
    #[cfg_attr(feature = "serde", serde(default = "default_reset_delay_ms"))]
    pub is_scrolling_reset_delay_ms: u64,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub on_change: Option<OnChangeCallback>,
}

#[cfg(feature = "serde")]
fn default_overscan() -> usize {
    DEFAULT_OVERSCAN
}

#[cfg(feature = "serde")]
fn default_reset_delay_ms() -> u64 {
    DEFAULT_IS_SCROLLING_RESET_DELAY_MS
}

impl WindowOptions {
    /// Creates options with the default overscan (5) and no change callback.
    ///
    /// Geometry is validated when the options are handed to a [`ViewportWindow`].
    pub fn new(item_height: u32, container_height: u32) -> Self {
        Self {
            item_height,
            container_height,
            overscan: DEFAULT_OVERSCAN,
            initial_offset: 0,
            is_scrolling_reset_delay_ms: DEFAULT_IS_SCROLLING_RESET_DELAY_MS,
            on_change: None,
        }
    }

    pub fn geometry(&self) -> Geometry {
        Geometry {
            item_height: self.item_height,
            container_height: self.container_height,
        }
    }

    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.item_height = geometry.item_height;
        self.container_height = geometry.container_height;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_initial_offset(mut self, initial_offset: u64) -> Self {
        self.initial_offset = initial_offset;
        self
    }

    pub fn with_is_scrolling_reset_delay_ms(mut self, delay_ms: u64) -> Self {
        self.is_scrolling_reset_delay_ms = delay_ms;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&ViewportWindow, bool) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for WindowOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WindowOptions")
            .field("item_height", &self.item_height)
            .field("container_height", &self.container_height)
            .field("overscan", &self.overscan)
            .field("initial_offset", &self.initial_offset)
            .field(
                "is_scrolling_reset_delay_ms",
                &self.is_scrolling_reset_delay_ms,
            )
            .field("on_change", &self.on_change.as_ref().map(|_| ".."))
            .finish()
    }
}
