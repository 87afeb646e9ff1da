#![forbid(unsafe_code)]

//! Placement rules for the caption and the bottom affordance bar.
//!
//! All rules work in the overlay's local coordinate space: origin at the
//! top-left, `y` growing downward, `bounds` anchored at zero.

use coachlight_core::geometry::{Point, Rect, Size};

use crate::config::OverlayConfig;

/// Height of the bottom affordance bar, in points.
pub const AFFORDANCE_BAR_HEIGHT: f32 = 30.0;

/// Top-left corner for a caption of the given size.
///
/// The caption sits `spacing` below the target. If that would leave less
/// than `spacing` of clearance to the bottom edge, it flips above the target
/// instead. Horizontally it is centered in `bounds` with the x coordinate
/// floored to land on a whole point.
///
/// A tall caption near the bottom edge can still flip to a negative `y`;
/// placement mirrors the target, it does not clamp.
pub fn place_caption(target: Rect, caption: Size, bounds: Rect, spacing: f32) -> Point {
    let mut y = target.max_y() + spacing;
    if y + caption.height + spacing > bounds.height {
        y = target.y - spacing - caption.height;
    }
    let x = ((bounds.width - caption.width) / 2.0).floor();
    Point::new(x, y)
}

/// Rectangles for the bottom-bar affordances. Absent affordances are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AffordanceBar {
    /// The "tap to continue" bar. Present only on the first step.
    pub continue_rect: Option<Rect>,
    /// The skip button. Present on every step while enabled.
    pub skip_rect: Option<Rect>,
}

/// Compute the affordance bar for a step.
///
/// The continue bar spans the full width unless the skip button is enabled,
/// in which case it keeps `continue_width_fraction` of the width and the
/// skip button takes the remainder. The skip button keeps that position even
/// on steps where the continue bar is gone.
pub fn affordance_bar(bounds: Rect, config: &OverlayConfig, step_index: usize) -> AffordanceBar {
    let y = bounds.height - AFFORDANCE_BAR_HEIGHT;
    let continue_width = if config.enable_skip_button {
        bounds.width * config.continue_width_fraction.clamp(0.0, 1.0)
    } else {
        bounds.width
    };

    let continue_rect = (config.enable_continue_label && step_index == 0)
        .then(|| Rect::new(0.0, y, continue_width, AFFORDANCE_BAR_HEIGHT));
    let skip_rect = config.enable_skip_button.then(|| {
        Rect::new(
            continue_width,
            y,
            bounds.width - continue_width,
            AFFORDANCE_BAR_HEIGHT,
        )
    });

    AffordanceBar {
        continue_rect,
        skip_rect,
    }
}
