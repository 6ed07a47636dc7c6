use thiserror::Error;

pub type Result<T> = core::result::Result<T, WindowError>;

/// Errors surfaced by range computation and slice extraction.
///
/// All of these are caller contract violations. The computation is deterministic, so calling
/// again with the same inputs reproduces the same error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum WindowError {
    #[error("item height must be positive")]
    ZeroItemHeight,

    #[error("total height overflows u64 (item_count={item_count}, item_height={item_height})")]
    ExtentOverflow { item_count: usize, item_height: u32 },

    #[error("range {start_index}..={end_index} is out of bounds for {item_count} items")]
    RangeOutOfBounds {
        start_index: usize,
        end_index: usize,
        item_count: usize,
    },
}
