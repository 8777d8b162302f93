//! A headless horizontal card slider engine.
//!
//! For adapter-level utilities (autoplay scheduling, smooth scrolling, lifecycle), see the
//! `card-slider-adapter` crate.
//!
//! This crate holds the state machine behind a scrollable card track: step-sized scroll commands
//! clamped to the content bounds, optional wrap-around, an unclamped page index, item counting and
//! a state-driven pagination model.
//!
//! It is UI-agnostic. A DOM/TUI/GUI layer is expected to provide:
//! - track geometry (scroll offset, content width, visible width)
//! - the number of slotted children and the width of the first one
//! - pointer hover changes
//!
//! and to apply the returned [`ScrollCommand`]s to its real scroll container.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod options;
mod slider;
mod state;
mod types;
mod view;


pub use options::{OnChangeCallback, SliderOptions};
pub use slider::Slider;
pub use state::{SliderSnapshot, SliderState};
pub use types::{Direction, ScrollBehavior, ScrollCommand, TrackMetrics};
pub use view::{ArrowButton, Dot, ICON_STYLESHEET_HREF, SliderView};
