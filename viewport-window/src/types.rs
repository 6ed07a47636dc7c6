use core::ops::RangeInclusive;

use crate::error::{Result, WindowError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
    Auto,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

/// Viewport geometry in pixels.
///
/// `item_height` is the uniform height of every item; `container_height` is the visible height
/// of the scroll container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    pub item_height: u32,
    pub container_height: u32,
}

impl Geometry {
    /// Creates validated geometry. Fails with [`WindowError::ZeroItemHeight`] when
    /// `item_height == 0`.
    pub fn new(item_height: u32, container_height: u32) -> Result<Self> {
        let geometry = Self {
            item_height,
            container_height,
        };
        geometry.validate()?;
        Ok(geometry)
    }

    pub fn validate(&self) -> Result<()> {
        if self.item_height == 0 {
            vwarn!(
                container_height = self.container_height,
                "Geometry: item_height is zero"
            );
            return Err(WindowError::ZeroItemHeight);
        }
        Ok(())
    }
}

/// An inclusive window of item indexes.
///
/// Always satisfies `start_index <= end_index`. An empty window is represented as
/// `Option::<VisibleRange>::None` by every API in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start_index: usize,
    pub end_index: usize, // inclusive
}

impl VisibleRange {
    pub fn len(&self) -> usize {
        if self.start_index > self.end_index {
            return 0;
        }
        self.end_index - self.start_index + 1
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start_index <= index && index <= self.end_index
    }

    pub fn indexes(&self) -> RangeInclusive<usize> {
        self.start_index..=self.end_index
    }
}

/// An item of the rendered slice together with its absolute position in the scroll area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PositionedItem<'a, T> {
    pub index: usize,
    /// Distance from the top of the scroll area to the top of this item.
    pub top: u64,
    pub item: &'a T,
}

/// A lightweight, serializable snapshot of the current scroll state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub offset: u64,
    pub is_scrolling: bool,
}
