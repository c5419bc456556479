// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_focus_session --heading-base-level=0

//! Understory Focus Session: arrow key and D-pad focus over spatial layouts.
//!
//! A [`FocusSession`] owns a set of registered focus targets and the id of the
//! one that currently has focus. Directional input moves focus along the
//! neighbor graph computed by [`understory_spatial_nav`], rebuilt from live
//! geometry on every move.
//!
//! - Targets implement [`FocusTarget`]; [`FocusItem`] is a plain implementation
//!   for hosts that mirror their layout into the session.
//! - A [`FocusHost`] receives [`FocusChange`] notifications and forwarded
//!   [`Activation`] signals. `()` discards them; `Vec<FocusEvent<K>>` records them.
//! - A [`GraphOverlay`] draws the neighbor graph while debug mode is on.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_focus_session::{
//!     Direction, FocusChange, FocusEvent, FocusItem, FocusSession, NavInput,
//! };
//!
//! let mut session: FocusSession<&str, FocusItem<&str>, Vec<FocusEvent<&str>>> =
//!     FocusSession::new(Vec::new(), ());
//! session.register(FocusItem::from_origin_size("a", 0.0, 0.0, 100.0, 100.0));
//! session.register(FocusItem::from_origin_size("b", 150.0, 0.0, 100.0, 100.0));
//! session.register(FocusItem::from_origin_size("c", 150.0, 200.0, 100.0, 100.0));
//!
//! // Nothing is focused yet, so moves are ignored.
//! assert!(!session.handle(NavInput::Move(Direction::Right)));
//!
//! session.set_focus("a");
//! assert!(session.handle(NavInput::Move(Direction::Right)));
//! assert!(session.handle(NavInput::Move(Direction::Down)));
//! assert_eq!(session.focused(), Some("c"));
//!
//! let last = session.host().last().copied();
//! assert_eq!(
//!     last,
//!     Some(FocusEvent::Changed(FocusChange { previous: Some("b"), current: "c" }))
//! );
//! ```
//!
//! ## Debug overlay
//!
//! [`FocusSession::set_debug`] toggles a visualization of the graph. While it is
//! on, each rebuild clears the overlay once and draws the fresh graph; turning it
//! off clears the overlay, so toggling twice leaves nothing behind.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//! - `tracing`: emits `tracing` events for registration, focus changes, moves,
//!   and graph rebuilds.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod host;
mod session;

pub use host::{Activation, FocusChange, FocusEvent, FocusHost, GraphOverlay};
pub use session::{FocusSession, NavInput, SessionConfig};

pub use understory_spatial_nav::{
    Direction, FocusItem, FocusTarget, GraphConfig, LateralWeights, NavGraph,
};
