#![forbid(unsafe_code)]

//! Core: geometry and animation clocking for coachlight overlays.
//!
//! # Role in coachlight
//! `coachlight-core` is the foundation layer. It owns the continuous-coordinate
//! geometry the overlay lays itself out in and the tick-driven animation
//! primitives every fade and cutout transition is built from.
//!
//! # Primary responsibilities
//! - **Geometry**: `Point`, `Size`, `Rect` in f32 overlay coordinates, with
//!   the interpolation the cutout morph relies on.
//! - **Animation**: a small `Animation` trait plus `Fade` and `Delayed`,
//!   advanced exclusively by host-supplied deltas.
//!
//! # How it fits in the system
//! `coachlight-scene` builds paths and display lists out of this geometry;
//! `coachlight-overlay` drives the animations from its `tick` and never reads
//! a wall clock, so a tour behaves identically under a real frame loop and
//! under a test that feeds synthetic deltas.

pub mod animation;
pub mod geometry;
