//! A headless windowing engine for large lists of fixed-height items.
//!
//! Instead of materializing every element, a renderer asks this crate which contiguous slice of
//! the collection intersects the viewport (plus some overscan) and where that slice has to be
//! placed inside the full-height scroll area.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - item height and container height
//! - scroll offsets, as the scroll container reports them
//! - the collection itself, on every render
//!
//! ```
//! use viewport_window::{ViewportWindow, WindowOptions};
//!
//! let items: Vec<u32> = (0..1000).collect();
//! let mut window = ViewportWindow::new(WindowOptions::new(50, 500)).unwrap();
//! window.on_scroll(1000);
//!
//! let out = window.render(&items).unwrap();
//! assert_eq!(out.start_index(), Some(15));
//! assert_eq!(out.end_index(), Some(35));
//! assert_eq!(out.visible_items.len(), 21);
//! assert_eq!(out.total_height, 50_000);
//! assert_eq!(out.offset_y, 750);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod options;
mod range;
mod slice;
mod tracker;
mod types;
mod window;

#[cfg(test)]
mod tests;

pub use error::{Result, WindowError};
pub use options::{OnChangeCallback, WindowOptions};
pub use range::{DEFAULT_OVERSCAN, RangeCalculator, compute_range, total_height};
pub use slice::{RenderResult, extract};
pub use tracker::{DEFAULT_IS_SCROLLING_RESET_DELAY_MS, ScrollPositionTracker};
pub use types::{Align, Geometry, PositionedItem, ScrollDirection, ScrollState, VisibleRange};
pub use window::ViewportWindow;
