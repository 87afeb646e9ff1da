#![forbid(unsafe_code)]

//! The walkthrough state machine.
//!
//! A [`CoachMarks`] tour owns the steps, the lifecycle, every animation, and
//! the observer callbacks. Hosts drive it with three calls: `handle_tap` for
//! input, `tick` for time, and `scene` for the draw plan.
//!
//! Lifecycle: Idle → FadingIn → Active → FadingOut → Finished.
//! Navigation and taps are only accepted while `Active`.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use coachlight_core::geometry::{Point, Rect};
//! use coachlight_overlay::{CoachMark, CoachMarks, OverlayConfig};
//!
//! let steps = vec![
//!     CoachMark::new("Step one", Rect::new(10.0, 10.0, 40.0, 20.0)).unwrap(),
//! ];
//! let mut tour = CoachMarks::new(Rect::new(0.0, 0.0, 320.0, 568.0), steps)
//!     .with_config(OverlayConfig::instant())
//!     .on_did_cleanup(|| println!("tour over"));
//!
//! tour.start();
//! tour.tick(Duration::ZERO); // entrance fade lands, step 0 shows
//! tour.handle_tap(Point::new(100.0, 300.0)); // past the last step: teardown
//! tour.tick(Duration::ZERO); // exit fade lands, "tour over" prints
//! assert!(tour.is_finished());
//! ```
//!
//! # Invariants
//!
//! - `will_navigate(i)` fires before step `i`'s caption or cutout move;
//!   `did_navigate(i)` fires only if step `i`'s transition runs to
//!   completion un-superseded.
//! - The cutout a new transition starts from is the last committed one,
//!   never a mid-flight interpolation.
//! - After `will_cleanup`, no navigation callback fires again.
//!
//! # Failure Modes
//!
//! - Navigation requests outside the `Active` phase return errors instead
//!   of queueing.
//! - Callbacks are plain closures; a panic inside one propagates to the
//!   caller of `tick`/`handle_tap`.

use std::fmt;
use std::time::Duration;

use coachlight_core::animation::{Animation, Delayed, Fade, delay, ease_in_out, ease_out};
use coachlight_core::geometry::{Point, Rect, Size};
use coachlight_scene::color::Color;
use coachlight_scene::list::{DisplayItem, DisplayList};
use coachlight_scene::path::FillRule;
use coachlight_scene::text::{TextAlign, measure_wrapped, wrap_text};

use crate::config::OverlayConfig;
use crate::cutout::ResolvedCutout;
use crate::error::OverlayError;
use crate::layout::{self, AffordanceBar};
use crate::step::CoachMark;

// ============================================================================
// Phase
// ============================================================================

/// Lifecycle phase of a [`CoachMarks`] tour.
///
/// State machine: Idle → FadingIn → Active → FadingOut → Finished.
///
/// The fading phases reject navigation so callback ordering stays
/// deterministic under rapid input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayPhase {
    /// Not started; nothing is drawn.
    #[default]
    Idle,
    /// Entrance fade running; first navigation fires when it lands.
    FadingIn,
    /// Fully presented; taps and navigation are accepted.
    Active,
    /// Teardown fade running; no further navigation.
    FadingOut,
    /// Torn down; the tour stays inert.
    Finished,
}

impl OverlayPhase {
    /// Check if the overlay should be rendered.
    #[inline]
    pub fn is_visible(self) -> bool {
        !matches!(self, Self::Idle | Self::Finished)
    }

    /// Check if an entrance or exit fade is running.
    #[inline]
    pub fn is_animating(self) -> bool {
        matches!(self, Self::FadingIn | Self::FadingOut)
    }
}

// ============================================================================
// Internal state
// ============================================================================

/// In-flight cutout morph.
///
/// `index` is captured at submission so a completion that survives to the
/// end reports the step that actually started it, not whichever step is
/// current by then.
#[derive(Debug, Clone)]
struct CutoutTransition {
    index: usize,
    from: ResolvedCutout,
    to: ResolvedCutout,
    fade: Fade,
}

impl CutoutTransition {
    fn current(&self) -> ResolvedCutout {
        self.from.lerp(self.to, self.fade.value())
    }
}

/// Placed caption for the current step, pre-wrapped to the width budget.
#[derive(Debug, Clone)]
struct CaptionLayout {
    rect: Rect,
    text: String,
}

type StepCallback = Box<dyn FnMut(usize)>;
type LifecycleCallback = Box<dyn FnMut()>;

#[derive(Default)]
struct Callbacks {
    will_navigate: Option<StepCallback>,
    did_navigate: Option<StepCallback>,
    will_cleanup: Option<LifecycleCallback>,
    did_cleanup: Option<LifecycleCallback>,
}

/// Column budget for caption wrapping, mirroring `measure_wrapped`.
fn caption_columns(config: &OverlayConfig) -> usize {
    if config.caption_font.advance > 0.0 {
        ((config.max_caption_width / config.caption_font.advance).floor() as usize).max(1)
    } else {
        0
    }
}

// ============================================================================
// CoachMarks
// ============================================================================

/// A coach-mark walkthrough overlay.
///
/// Invariants:
/// - Steps are validated before they get here ([`CoachMark::new`]) and are
///   never re-checked mid-tour.
/// - `scene()` is read-only; all state changes happen in `start`, the
///   navigation calls, and `tick`.
///
/// Failure modes:
/// - An empty step list is legal: `start` presents the overlay and tears it
///   straight back down, firing only the cleanup callbacks.
pub struct CoachMarks {
    frame: Rect,
    bounds: Rect,
    steps: Vec<CoachMark>,
    config: OverlayConfig,
    phase: OverlayPhase,
    index: Option<usize>,
    /// Where the spotlight rests once any in-flight transition lands.
    committed: Option<ResolvedCutout>,
    transition: Option<CutoutTransition>,
    /// Entrance fade while `FadingIn`, exit fade while `FadingOut`.
    presentation: Fade,
    caption_fade: Fade,
    continue_fade: Fade,
    skip_fade: Delayed<Fade>,
    caption: Option<CaptionLayout>,
    bar: AffordanceBar,
    callbacks: Callbacks,
}

impl fmt::Debug for CoachMarks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoachMarks")
            .field("phase", &self.phase)
            .field("index", &self.index)
            .field("steps", &self.steps.len())
            .field("frame", &self.frame)
            .finish_non_exhaustive()
    }
}

impl CoachMarks {
    /// Create a tour over `steps` covering `frame`.
    ///
    /// Taps and layout work in the frame's local space (origin at the
    /// frame's top-left corner).
    pub fn new(frame: Rect, steps: Vec<CoachMark>) -> Self {
        Self {
            frame,
            bounds: Rect::from_size(Size::new(frame.width, frame.height)),
            steps,
            config: OverlayConfig::default(),
            phase: OverlayPhase::Idle,
            index: None,
            committed: None,
            transition: None,
            presentation: Fade::completed(Duration::ZERO),
            caption_fade: Fade::completed(Duration::ZERO),
            continue_fade: Fade::completed(Duration::ZERO),
            skip_fade: delay(Duration::ZERO, Fade::completed(Duration::ZERO)),
            caption: None,
            bar: AffordanceBar::default(),
            callbacks: Callbacks::default(),
        }
    }

    /// Replace the configuration.
    ///
    /// Meant to be set before `start`; mid-tour replacement only applies
    /// from the next navigation.
    pub fn with_config(mut self, config: OverlayConfig) -> Self {
        self.config = config;
        self
    }

    /// Observe navigation just before a step's caption and cutout move.
    pub fn on_will_navigate(mut self, f: impl FnMut(usize) + 'static) -> Self {
        self.callbacks.will_navigate = Some(Box::new(f));
        self
    }

    /// Observe navigation after a step's cutout transition lands.
    ///
    /// Superseded transitions never report; see [`CoachMarks::go_to`].
    pub fn on_did_navigate(mut self, f: impl FnMut(usize) + 'static) -> Self {
        self.callbacks.did_navigate = Some(Box::new(f));
        self
    }

    /// Observe teardown just before the exit fade starts.
    pub fn on_will_cleanup(mut self, f: impl FnMut() + 'static) -> Self {
        self.callbacks.will_cleanup = Some(Box::new(f));
        self
    }

    /// Observe teardown after the exit fade lands.
    pub fn on_did_cleanup(mut self, f: impl FnMut() + 'static) -> Self {
        self.callbacks.did_cleanup = Some(Box::new(f));
        self
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Begin the tour: fade the overlay in, then navigate to the first step.
    ///
    /// If the tour has already started (any phase but `Idle`), this is a
    /// no-op.
    pub fn start(&mut self) {
        if self.phase != OverlayPhase::Idle {
            return;
        }
        #[cfg(feature = "tracing")]
        Self::log_start(self.steps.len());
        self.phase = OverlayPhase::FadingIn;
        self.presentation = Fade::new(self.config.animation_duration).easing(ease_in_out);
    }

    /// End the tour early. Equivalent to `go_to(step_count())`.
    ///
    /// # Errors
    ///
    /// Same acceptance window as [`CoachMarks::go_to`].
    pub fn skip(&mut self) -> Result<(), OverlayError> {
        self.go_to(self.steps.len())
    }

    /// Navigate to `index`, or finish the tour when `index == step_count()`.
    ///
    /// A request that lands while a previous cutout transition is still in
    /// flight supersedes it: the old transition's `did_navigate` is dropped
    /// and the new transition starts from the last committed cutout.
    ///
    /// # Errors
    ///
    /// - [`OverlayError::NotActive`] before the entrance fade completes.
    /// - [`OverlayError::Finished`] once teardown has begun.
    /// - [`OverlayError::IndexOutOfRange`] when `index > step_count()`.
    pub fn go_to(&mut self, index: usize) -> Result<(), OverlayError> {
        match self.phase {
            OverlayPhase::Idle | OverlayPhase::FadingIn => return Err(OverlayError::NotActive),
            OverlayPhase::FadingOut | OverlayPhase::Finished => {
                return Err(OverlayError::Finished);
            }
            OverlayPhase::Active => {}
        }
        if index > self.steps.len() {
            return Err(OverlayError::IndexOutOfRange {
                index,
                len: self.steps.len(),
            });
        }
        self.navigate(index);
        Ok(())
    }

    /// Tear the overlay down: `will_cleanup`, exit fade, `did_cleanup`.
    ///
    /// Idempotent; calling during or after teardown does nothing.
    pub fn cleanup(&mut self) {
        self.begin_cleanup();
    }

    /// Route a tap in local coordinates.
    ///
    /// A tap on the skip button finishes the tour; any other tap advances
    /// to the next step. Returns whether the tap was consumed. Taps outside
    /// the `Active` phase are ignored.
    ///
    /// The skip button is not hit-testable while its delayed entrance still
    /// holds it at zero alpha; a tap there advances like any other.
    pub fn handle_tap(&mut self, at: Point) -> bool {
        if self.phase != OverlayPhase::Active {
            return false;
        }
        if let Some(skip_rect) = self.bar.skip_rect
            && self.skip_fade.value() > 0.0
            && skip_rect.contains(at)
        {
            self.navigate(self.steps.len());
            return true;
        }
        let next = self.index.map_or(0, |i| i + 1);
        self.navigate(next);
        true
    }

    /// Advance all animations by `dt` and fire any callbacks that land.
    ///
    /// Returns `true` if the overlay changed and needs to be redrawn.
    /// Completions are observed here, one tick after their time is used up
    /// at the earliest; zero-duration fades land on the first tick.
    pub fn tick(&mut self, dt: Duration) -> bool {
        match self.phase {
            OverlayPhase::Idle | OverlayPhase::Finished => false,
            OverlayPhase::FadingIn => {
                self.presentation.tick(dt);
                if self.presentation.is_complete() {
                    self.phase = OverlayPhase::Active;
                    self.navigate(0);
                }
                true
            }
            OverlayPhase::Active => self.tick_active(dt),
            OverlayPhase::FadingOut => {
                self.presentation.tick(dt);
                if self.presentation.is_complete() {
                    self.phase = OverlayPhase::Finished;
                    #[cfg(feature = "tracing")]
                    Self::log_finished();
                    if let Some(cb) = self.callbacks.did_cleanup.as_mut() {
                        cb();
                    }
                }
                true
            }
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Current lifecycle phase.
    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    /// Check if navigation and taps are currently accepted.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.phase == OverlayPhase::Active
    }

    /// Check if the tour has fully torn down.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.phase == OverlayPhase::Finished
    }

    /// Index of the current step, once the tour has navigated.
    pub fn current_step(&self) -> Option<usize> {
        self.index
    }

    /// Number of steps in the tour.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// The steps, in order.
    pub fn steps(&self) -> &[CoachMark] {
        &self.steps
    }

    /// Host-space frame the overlay covers.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Local coordinate space: the frame anchored at the origin.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Active configuration.
    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// The last committed cutout: where the spotlight rests once any
    /// in-flight transition lands.
    pub fn committed_cutout(&self) -> Option<ResolvedCutout> {
        self.committed
    }

    /// The cutout as drawn this frame, mid-transition values included.
    pub fn current_cutout(&self) -> Option<ResolvedCutout> {
        match &self.transition {
            Some(transition) => Some(transition.current()),
            None => self.committed,
        }
    }

    /// Caption rectangle for the current step.
    pub fn caption_rect(&self) -> Option<Rect> {
        self.caption.as_ref().map(|caption| caption.rect)
    }

    /// Continue bar rectangle, while visible.
    pub fn continue_rect(&self) -> Option<Rect> {
        self.bar.continue_rect
    }

    /// Skip button rectangle, while visible.
    pub fn skip_rect(&self) -> Option<Rect> {
        self.bar.skip_rect
    }

    /// Overall overlay opacity for this frame.
    pub fn opacity(&self) -> f32 {
        match self.phase {
            OverlayPhase::Idle | OverlayPhase::Finished => 0.0,
            OverlayPhase::FadingIn => self.presentation.value(),
            OverlayPhase::Active => 1.0,
            OverlayPhase::FadingOut => 1.0 - self.presentation.value(),
        }
    }

    // ------------------------------------------------------------------
    // Scene assembly
    // ------------------------------------------------------------------

    /// Assemble this frame's draw plan in paint order: mask, caption,
    /// continue bar, skip button.
    ///
    /// Idle and finished tours produce an empty list.
    pub fn scene(&self) -> DisplayList {
        let mut list = DisplayList::new();
        if !self.phase.is_visible() {
            return list;
        }
        let opacity = self.opacity();

        if let Some(cutout) = self.current_cutout() {
            list.push(DisplayItem::Fill {
                path: cutout.mask_path(self.bounds),
                rule: FillRule::EvenOdd,
                color: self.config.mask_color.scale_alpha(opacity),
            });
        }

        if let Some(caption) = &self.caption {
            list.push(DisplayItem::Text {
                rect: caption.rect,
                content: caption.text.clone(),
                metrics: self.config.caption_font,
                color: self
                    .config
                    .caption_color
                    .scale_alpha(self.caption_fade.value() * opacity),
                align: TextAlign::Center,
                background: None,
            });
        }

        if let Some(rect) = self.bar.continue_rect {
            let alpha = self.continue_fade.value() * opacity;
            list.push(DisplayItem::Text {
                rect,
                content: self.config.continue_text.clone(),
                metrics: self.config.caption_font,
                color: Color::BLACK.scale_alpha(alpha),
                align: TextAlign::Center,
                background: Some(Color::WHITE.scale_alpha(alpha)),
            });
        }

        if let Some(rect) = self.bar.skip_rect {
            let alpha = self.skip_fade.value() * opacity;
            list.push(DisplayItem::Text {
                rect,
                content: self.config.skip_text.clone(),
                metrics: self.config.caption_font,
                color: Color::WHITE.scale_alpha(alpha),
                align: TextAlign::Center,
                background: None,
            });
        }

        list
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    /// Commit a navigation. `index == steps.len()` begins teardown.
    fn navigate(&mut self, index: usize) {
        if index >= self.steps.len() {
            self.begin_cleanup();
            return;
        }

        #[cfg(feature = "tracing")]
        {
            Self::log_navigate(self.index, index);
            if let Some(transition) = &self.transition {
                Self::log_supersede(transition.index, index);
            }
        }

        self.index = Some(index);
        if let Some(cb) = self.callbacks.will_navigate.as_mut() {
            cb(index);
        }

        let step = &self.steps[index];
        let target = step.target();
        let shape = step.shape();
        let wrapped = wrap_text(step.caption(), caption_columns(&self.config)).join("\n");
        let size = measure_wrapped(
            step.caption(),
            self.config.caption_font,
            self.config.max_caption_width,
        );

        // Caption: place below or above the target, restart its fade.
        let origin = layout::place_caption(target, size, self.bounds, self.config.caption_spacing);
        self.caption = Some(CaptionLayout {
            rect: Rect::new(origin.x, origin.y, size.width, size.height),
            text: wrapped,
        });
        self.caption_fade = Fade::new(self.config.caption_fade).easing(ease_in_out);

        // Cutout: the first step grows out of the target's center; later
        // steps morph from the last committed cutout, never from a
        // mid-flight interpolation.
        if index == 0 {
            self.committed = Some(ResolvedCutout::zero_at(target.center()));
        }
        let to = ResolvedCutout::resolve(target, shape, self.config.cutout_radius);
        let from = self
            .committed
            .unwrap_or_else(|| ResolvedCutout::zero_at(target.center()));
        self.transition = Some(CutoutTransition {
            index,
            from,
            to,
            fade: Fade::new(self.config.animation_duration).easing(ease_out),
        });
        self.committed = Some(to);

        // Affordances: the continue bar only exists on the first step; the
        // skip button re-runs its delayed entrance on every step.
        self.bar = layout::affordance_bar(self.bounds, &self.config, index);
        if self.bar.continue_rect.is_some() {
            self.continue_fade = Fade::new(self.config.caption_fade).easing(ease_in_out);
        }
        if self.bar.skip_rect.is_some() {
            self.skip_fade = delay(
                self.config.affordance_delay,
                Fade::new(self.config.affordance_fade).easing(ease_in_out),
            );
        }
    }

    fn tick_active(&mut self, dt: Duration) -> bool {
        let mut changed = false;

        if let Some(transition) = self.transition.as_mut() {
            transition.fade.tick(dt);
            changed = true;
            if transition.fade.is_complete() {
                let landed = transition.index;
                self.transition = None;
                if let Some(cb) = self.callbacks.did_navigate.as_mut() {
                    cb(landed);
                }
            }
        }
        if !self.caption_fade.is_complete() {
            self.caption_fade.tick(dt);
            changed = true;
        }
        if self.bar.continue_rect.is_some() && !self.continue_fade.is_complete() {
            self.continue_fade.tick(dt);
            changed = true;
        }
        if self.bar.skip_rect.is_some() && !self.skip_fade.is_complete() {
            self.skip_fade.tick(dt);
            changed = true;
        }
        changed
    }

    fn begin_cleanup(&mut self) {
        if matches!(self.phase, OverlayPhase::FadingOut | OverlayPhase::Finished) {
            return;
        }
        #[cfg(feature = "tracing")]
        Self::log_cleanup(self.index);
        if let Some(cb) = self.callbacks.will_cleanup.as_mut() {
            cb();
        }
        // Nothing navigates once teardown has begun; an in-flight morph is
        // dropped rather than completed.
        self.transition = None;
        self.phase = OverlayPhase::FadingOut;
        self.presentation = Fade::new(self.config.animation_duration).easing(ease_in_out);
    }

    #[cfg(feature = "tracing")]
    fn log_start(steps: usize) {
        tracing::debug!(message = "coachmarks.start", steps);
    }

    #[cfg(feature = "tracing")]
    fn log_navigate(from: Option<usize>, to: usize) {
        tracing::debug!(message = "coachmarks.navigate", from = ?from, to);
    }

    #[cfg(feature = "tracing")]
    fn log_supersede(dropped: usize, by: usize) {
        tracing::debug!(message = "coachmarks.supersede", dropped, by);
    }

    #[cfg(feature = "tracing")]
    fn log_cleanup(index: Option<usize>) {
        tracing::debug!(message = "coachmarks.cleanup", index = ?index);
    }

    #[cfg(feature = "tracing")]
    fn log_finished() {
        tracing::debug!(message = "coachmarks.finished");
    }
}

// ============================================================================
// Tests
// ============================================================================
