//! Adapter utilities for the `scrollspy` crate.
//!
//! The `scrollspy` crate is UI-agnostic and focuses on the selection math and state. This crate
//! wires it to a host page through small capability traits:
//!
//! - [`Controller`]: event subscriptions, throttled scroll/resize reactions, highlighting,
//!   announcements, keyboard handling and verifiable teardown
//! - [`LazyImages`]: deferred image loading on first intersection
//! - [`PageLoad`]: the page-load transition and its transient announcement
//!
//! This crate is intentionally framework-agnostic (no DOM bindings). A wasm/DOM, TUI or GUI
//! layer implements [`NavigationView`], [`Announcer`], [`EventHost`] and [`Layout`].
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod host;
mod keyboard;
mod lazy;
mod page;


pub use controller::{Controller, FOCUS_OUTLINE_MS};
pub use host::{Announcer, EventHost, EventKind, Layout, ListenerId, NavigationView, Subscription};
pub use keyboard::{Key, KeyEvent, KeyTarget};
pub use lazy::{LazyImages, LoadRequest};
pub use page::{LoadPhase, PageEvent, PageLoad, PageLoadOptions};
