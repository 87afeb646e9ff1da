#![forbid(unsafe_code)]

//! Coach-mark walkthrough overlay: a dimmed mask with a spotlight cutout,
//! a caption per step, and tap-to-advance navigation.
//!
//! # Role in coachlight
//! `coachlight-overlay` owns the tour itself: the ordered steps, the
//! lifecycle state machine, cutout transitions between steps, and the
//! observer callbacks hosts hang UI logic on. It produces a
//! [`DisplayList`](coachlight_scene::list::DisplayList) every frame; hosts
//! paint that with whatever backend they have.
//!
//! # This crate provides
//! - [`CoachMarks`] for the overlay state machine (start, navigate, cleanup).
//! - [`CoachMark`] and [`CutoutShape`] for validated step definitions.
//! - [`OverlayConfig`] for timing, sizing, and affordance knobs.
//! - [`layout`] for the caption and affordance-bar placement rules.
//!
//! # How it fits in the system
//! `coachlight-core` supplies geometry and tick-driven fades,
//! `coachlight-scene` supplies paths, colors, and text measurement. This
//! crate composes both into per-frame scenes and never talks to a renderer
//! directly.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use coachlight_core::geometry::{Point, Rect};
//! use coachlight_overlay::{CoachMark, CoachMarks, OverlayConfig};
//!
//! let steps = vec![
//!     CoachMark::new("Search from anywhere", Rect::new(12.0, 40.0, 160.0, 44.0)).unwrap(),
//!     CoachMark::new("Saved items live here", Rect::new(12.0, 96.0, 160.0, 44.0)).unwrap(),
//! ];
//! let mut tour = CoachMarks::new(Rect::new(0.0, 0.0, 320.0, 568.0), steps)
//!     .with_config(OverlayConfig::instant());
//!
//! tour.start();
//! tour.tick(Duration::ZERO);
//! assert_eq!(tour.current_step(), Some(0));
//!
//! // A tap anywhere outside the skip button advances the tour.
//! tour.handle_tap(Point::new(160.0, 300.0));
//! assert_eq!(tour.current_step(), Some(1));
//! assert!(!tour.scene().is_empty());
//! ```

/// Timing, sizing, and affordance configuration.
pub mod config;
/// Resolved cutout geometry and interpolation.
pub mod cutout;
/// Step validation and navigation errors.
pub mod error;
/// Caption and affordance-bar placement rules.
pub mod layout;
/// The overlay state machine.
pub mod overlay;
/// Step definitions and cutout shapes.
pub mod step;

pub use config::OverlayConfig;
pub use cutout::ResolvedCutout;
pub use error::{OverlayError, StepError};
pub use overlay::{CoachMarks, OverlayPhase};
pub use step::{CoachMark, CutoutShape};
