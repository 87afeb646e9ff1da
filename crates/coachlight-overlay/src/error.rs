#![forbid(unsafe_code)]

//! Errors for step construction and tour navigation.

use std::fmt;

use coachlight_core::geometry::Rect;

/// Why a [`CoachMark`](crate::step::CoachMark) could not be constructed.
#[derive(Debug, Clone, PartialEq)]
pub enum StepError {
    /// The caption was empty or whitespace-only.
    EmptyCaption,
    /// The target rectangle was non-finite or had a negative extent.
    InvalidTarget { target: Rect },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCaption => write!(f, "step caption must not be empty"),
            Self::InvalidTarget { target } => {
                write!(
                    f,
                    "step target must be finite with non-negative extents, got {target:?}"
                )
            }
        }
    }
}

impl std::error::Error for StepError {}

/// Why a navigation request was rejected.
///
/// Navigation is only accepted while the tour is fully presented; requests
/// made before the entrance fade completes or after teardown has begun are
/// rejected rather than queued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayError {
    /// The tour has not been started, or the entrance fade is still running.
    NotActive,
    /// Teardown has already begun; the tour accepts no further navigation.
    Finished,
    /// The requested index is past the sanctioned end-of-tour index.
    ///
    /// `len` itself is a valid request (it means "finish the tour"); anything
    /// beyond it is a caller bug and is reported rather than clamped.
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for OverlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotActive => write!(f, "overlay is not active"),
            Self::Finished => write!(f, "overlay is finished and cannot navigate"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "step index {index} out of range for {len} steps")
            }
        }
    }
}

impl std::error::Error for OverlayError {}
