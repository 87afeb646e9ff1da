#![forbid(unsafe_code)]

//! Step definitions: a caption, a target rectangle, and an optional cutout
//! shape.
//!
//! Steps are validated at construction so the tour never has to re-check
//! them mid-walkthrough. A target may be zero-sized (the spotlight collapses
//! to a point) but never non-finite or negative.

use coachlight_core::geometry::Rect;

use crate::error::StepError;

/// Shape of the spotlight cutout punched through the mask.
///
/// Every shape resolves to a rounded rectangle with per-axis corner radii,
/// so transitions between any two shapes interpolate cleanly.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CutoutShape {
    /// An ellipse inscribed in the target rectangle.
    Circle,
    /// A sharp-cornered rectangle.
    Square,
    /// A rectangle with the given corner radius.
    ///
    /// The radius is clamped to the target's half-extents when resolved.
    RoundedRect(f32),
}

/// One validated walkthrough step.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CoachMark {
    caption: String,
    target: Rect,
    shape: Option<CutoutShape>,
}

impl CoachMark {
    /// Create a step with a caption and a spotlight target.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::EmptyCaption`] if the caption is empty or
    /// whitespace-only, and [`StepError::InvalidTarget`] if the target is
    /// non-finite or has a negative width or height.
    pub fn new(caption: impl Into<String>, target: Rect) -> Result<Self, StepError> {
        let caption = caption.into();
        if caption.trim().is_empty() {
            return Err(StepError::EmptyCaption);
        }
        if !target.is_finite() || target.width < 0.0 || target.height < 0.0 {
            return Err(StepError::InvalidTarget { target });
        }
        Ok(Self {
            caption,
            target,
            shape: None,
        })
    }

    /// Set an explicit cutout shape for this step.
    ///
    /// Steps without an explicit shape fall back to a rounded rectangle with
    /// the configured default corner radius.
    pub fn with_shape(mut self, shape: CutoutShape) -> Self {
        self.shape = Some(shape);
        self
    }

    /// The caption text shown for this step.
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// The rectangle the spotlight highlights.
    pub fn target(&self) -> Rect {
        self.target
    }

    /// The explicit cutout shape, if one was set.
    pub fn shape(&self) -> Option<CutoutShape> {
        self.shape
    }
}

// Deserialization funnels through `CoachMark::new` so loaded steps obey the
// same validation as hand-built ones.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CoachMark {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            caption: String,
            target: Rect,
            #[serde(default)]
            shape: Option<CutoutShape>,
        }

        let raw = Raw::deserialize(deserializer)?;
        let mark = CoachMark::new(raw.caption, raw.target).map_err(serde::de::Error::custom)?;
        Ok(match raw.shape {
            Some(shape) => mark.with_shape(shape),
            None => mark,
        })
    }
}
