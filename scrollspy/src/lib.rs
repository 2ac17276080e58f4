//! A headless scroll-spy engine.
//!
//! This crate decides which page section is "active" for navigation highlighting:
//! intersection-based selection (largest visible fraction wins), a reference-line fallback
//! for when no intersection data is available, scroll-to-top visibility, and scroll targets
//! for section jumps.
//!
//! It is UI-agnostic. A DOM/TUI/GUI layer is expected to provide:
//! - viewport size
//! - scroll offset
//! - section rectangles in viewport coordinates
//! - a monotonic clock (`now_ms`) for throttling
//!
//! For event wiring, announcements and teardown, see the `scrollspy-adapter` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod geometry;
mod options;
mod state;
mod throttle;
mod tracker;
mod types;

#[cfg(test)]
mod tests;

pub use geometry::{intersection_ratio, select_by_position, select_most_visible, visibility_fraction};
pub use options::TrackerOptions;
pub use state::TrackerState;
pub use throttle::{Throttle, Timer};
pub use tracker::SectionTracker;
pub use types::{
    ActiveChange, NavLink, RootMargin, ScrollBehavior, ScrollRequest, Section, SectionRect,
    SectionTarget, Viewport,
};
