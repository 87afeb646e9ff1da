#![forbid(unsafe_code)]

//! Scene: what a coachlight overlay hands the host to draw.
//!
//! # Role in coachlight
//! `coachlight-scene` is the presentation seam. The overlay never touches a
//! renderer; it assembles a [`list::DisplayList`] of fills and text runs,
//! and the host replays that list against whatever compositor it owns.
//!
//! # Primary responsibilities
//! - **Color**: straight-alpha f32 RGBA with the alpha folding the overlay
//!   fade needs.
//! - **Path**: move/line/cubic verbs with even-odd fill; rounded-rect and
//!   ellipse construction for mask cutouts.
//! - **Text**: Unicode-aware word wrap and measurement against monospace
//!   metrics, the caption auto-sizing facility.
//! - **DisplayList**: the inert, inspectable draw plan.

pub mod color;
pub mod list;
pub mod path;
pub mod text;
