//! Offset/limit window applied to an ordered sequence.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejections raised when converting signed request values into a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WindowError {
    /// The offset was below zero.
    #[error("offset must not be negative, got {offset}")]
    NegativeOffset {
        /// Offending offset.
        offset: i64,
    },
    /// The limit was below zero.
    #[error("limit must not be negative, got {limit}")]
    NegativeLimit {
        /// Offending limit.
        limit: i64,
    },
}

/// Number of leading items to skip and maximum number of items to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Window {
    /// Items skipped from the start of the sequence.
    pub offset: usize,
    /// Upper bound on the number of items kept.
    pub limit: usize,
}

impl Window {
    /// Build a window from already non-negative values.
    #[must_use]
    pub const fn new(offset: usize, limit: usize) -> Self {
        Self { offset, limit }
    }

    /// Build a window from signed request values.
    ///
    /// The limit is checked first, so a request with both values negative
    /// reports [`WindowError::NegativeLimit`].
    ///
    /// # Errors
    ///
    /// Returns [`WindowError`] when either value is negative.
    ///
    /// # Examples
    /// ```
    /// use pagination::{Window, WindowError};
    ///
    /// assert_eq!(Window::try_from_signed(2, 5), Ok(Window::new(2, 5)));
    /// assert_eq!(
    ///     Window::try_from_signed(0, -1),
    ///     Err(WindowError::NegativeLimit { limit: -1 })
    /// );
    /// ```
    pub fn try_from_signed(offset: i64, limit: i64) -> Result<Self, WindowError> {
        let limit = usize::try_from(limit).map_err(|_| WindowError::NegativeLimit { limit })?;
        let offset = usize::try_from(offset).map_err(|_| WindowError::NegativeOffset { offset })?;
        Ok(Self { offset, limit })
    }

    /// Apply the window to an ordered sequence.
    ///
    /// An offset at or past the end yields an empty result; a zero limit
    /// yields an empty result. Relative order is preserved.
    #[must_use]
    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        if self.offset >= items.len() || self.limit == 0 {
            return Vec::new();
        }
        items
            .into_iter()
            .skip(self.offset)
            .take(self.limit)
            .collect()
    }
}
