#![forbid(unsafe_code)]

//! Overlay configuration: timing, sizing, and affordance knobs.
//!
//! Config is read when the tour starts and at each navigation; it is a plain
//! bag of values with no interior validation. Out-of-range values are clamped
//! at the point of use.

use std::time::Duration;

use coachlight_scene::color::Color;
use coachlight_scene::text::FontMetrics;

/// Tunable parameters for a [`CoachMarks`](crate::overlay::CoachMarks) tour.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverlayConfig {
    /// Duration of the cutout transition between steps, and of the overlay
    /// entrance and exit fades.
    pub animation_duration: Duration,
    /// Default corner radius for steps without an explicit shape.
    pub cutout_radius: f32,
    /// Maximum caption width before text wraps.
    pub max_caption_width: f32,
    /// Vertical gap between the spotlight target and the caption.
    pub caption_spacing: f32,
    /// Show a "tap to continue" bar on the first step.
    pub enable_continue_label: bool,
    /// Show a skip button in the bottom corner on every step.
    pub enable_skip_button: bool,
    /// Color of the dimmed mask around the cutout.
    pub mask_color: Color,
    /// Caption text color.
    pub caption_color: Color,
    /// Glyph metrics used to measure and wrap captions.
    pub caption_font: FontMetrics,
    /// Duration of the caption fade when a step is shown.
    pub caption_fade: Duration,
    /// Text of the continue bar.
    pub continue_text: String,
    /// Text of the skip button.
    pub skip_text: String,
    /// Fraction of the frame width the continue bar occupies when the skip
    /// button is also enabled. The skip button takes the remainder.
    pub continue_width_fraction: f32,
    /// Pause before the skip button starts fading in after a navigation.
    pub affordance_delay: Duration,
    /// Duration of the skip button's fade-in.
    pub affordance_fade: Duration,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            animation_duration: Duration::from_millis(300),
            cutout_radius: 2.0,
            max_caption_width: 230.0,
            caption_spacing: 35.0,
            enable_continue_label: false,
            enable_skip_button: false,
            mask_color: Color::new(0.0, 0.0, 0.0, 0.9),
            caption_color: Color::WHITE,
            caption_font: FontMetrics::default(),
            caption_fade: Duration::from_millis(300),
            continue_text: String::from("Tap to continue"),
            skip_text: String::from("Skip"),
            continue_width_fraction: 0.7,
            affordance_delay: Duration::from_secs(1),
            affordance_fade: Duration::from_millis(300),
        }
    }
}

impl OverlayConfig {
    /// Create a default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration with every animation reduced to zero duration.
    ///
    /// Fades complete on the first tick, which makes tours deterministic in
    /// tests and instant for reduced-motion hosts.
    pub fn instant() -> Self {
        Self {
            animation_duration: Duration::ZERO,
            caption_fade: Duration::ZERO,
            affordance_delay: Duration::ZERO,
            affordance_fade: Duration::ZERO,
            ..Self::default()
        }
    }

    /// Set the cutout transition and overlay fade duration.
    pub fn animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration = duration;
        self
    }

    /// Set the default cutout corner radius.
    pub fn cutout_radius(mut self, radius: f32) -> Self {
        self.cutout_radius = radius.max(0.0);
        self
    }

    /// Set the maximum caption width before wrapping.
    pub fn max_caption_width(mut self, width: f32) -> Self {
        self.max_caption_width = width.max(0.0);
        self
    }

    /// Set the gap between the spotlight target and the caption.
    pub fn caption_spacing(mut self, spacing: f32) -> Self {
        self.caption_spacing = spacing;
        self
    }

    /// Show or hide the first-step continue bar.
    pub fn enable_continue_label(mut self, enable: bool) -> Self {
        self.enable_continue_label = enable;
        self
    }

    /// Show or hide the skip button.
    pub fn enable_skip_button(mut self, enable: bool) -> Self {
        self.enable_skip_button = enable;
        self
    }

    /// Set the mask color (alpha included).
    pub fn mask_color(mut self, color: Color) -> Self {
        self.mask_color = color;
        self
    }

    /// Set the caption text color.
    pub fn caption_color(mut self, color: Color) -> Self {
        self.caption_color = color;
        self
    }

    /// Set the glyph metrics used for caption measurement.
    pub fn caption_font(mut self, font: FontMetrics) -> Self {
        self.caption_font = font;
        self
    }

    /// Set the caption fade duration.
    pub fn caption_fade(mut self, duration: Duration) -> Self {
        self.caption_fade = duration;
        self
    }

    /// Set the continue bar text.
    pub fn continue_text(mut self, text: impl Into<String>) -> Self {
        self.continue_text = text.into();
        self
    }

    /// Set the skip button text.
    pub fn skip_text(mut self, text: impl Into<String>) -> Self {
        self.skip_text = text.into();
        self
    }

    /// Set the continue bar's share of the frame width.
    pub fn continue_width_fraction(mut self, fraction: f32) -> Self {
        self.continue_width_fraction = fraction.clamp(0.0, 1.0);
        self
    }

    /// Set the pause before the skip button fades in.
    pub fn affordance_delay(mut self, delay: Duration) -> Self {
        self.affordance_delay = delay;
        self
    }

    /// Set the skip button fade-in duration.
    pub fn affordance_fade(mut self, duration: Duration) -> Self {
        self.affordance_fade = duration;
        self
    }
}
