//! Adapter utilities for the `card-slider` crate.
//!
//! The `card-slider` crate is UI-agnostic and holds the slider state machine. This crate adds the
//! time-driven pieces a host component needs, all on an adapter-provided clock (`now_ms`):
//!
//! - attach/detach lifecycle with a cancellable autoplay interval
//! - the delayed recount fallback for late-rendering children
//! - tween-based smooth scrolling toward issued scroll commands
//! - an event dispatcher for pointer, slot and scroll events
//!
//! This crate is intentionally framework-agnostic (no DOM or GUI bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod autoplay;
mod controller;
mod event;
mod schedule;
mod tween;

#[cfg(test)]
mod tests;

pub use autoplay::Autoplay;
pub use controller::{
    Controller, ControllerOptions, DEFAULT_RECOUNT_DELAY_MS, DEFAULT_SMOOTH_SCROLL_MS, Tick,
};
pub use event::SliderEvent;
pub use schedule::{Interval, Timeout};
pub use tween::{Easing, SmoothScroll};
