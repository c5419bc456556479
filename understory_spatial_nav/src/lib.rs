// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_spatial_nav --heading-base-level=0

//! Understory Spatial Nav: directional neighbor graphs for focus navigation.
//!
//! Given a set of rectangular focus targets laid out in a shared 2D coordinate
//! space, this crate decides, for every target and each of the four cardinal
//! [`Direction`]s, which other target should receive focus next.
//!
//! - [`FocusTarget`] is the only capability a target needs: a stable id, live
//!   bounds, and an eligibility flag. [`FocusItem`] is a plain implementation.
//! - [`GraphBuilder`] scores every ordered pair of eligible targets and keeps the
//!   best candidate per direction in a [`NavGraph`].
//! - [`candidate_distance`] is the scoring primitive, exposed so hosts can
//!   inspect or test rankings directly.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_spatial_nav::{Direction, FocusItem, GraphBuilder};
//!
//! let items = vec![
//!     FocusItem::from_origin_size("a", 0.0, 0.0, 100.0, 100.0),
//!     FocusItem::from_origin_size("b", 150.0, 0.0, 100.0, 100.0),
//!     FocusItem::from_origin_size("c", 150.0, 200.0, 100.0, 100.0),
//! ];
//!
//! let graph = GraphBuilder::default().build(&items);
//!
//! assert_eq!(graph.neighbor("a", Direction::Right), Some("b"));
//! // "c" is below-right of "a", outside the downward cone.
//! assert_eq!(graph.neighbor("a", Direction::Down), None);
//! assert_eq!(graph.neighbor("b", Direction::Down), Some("c"));
//! ```
//!
//! ## Selection rules
//!
//! A target is considered for a direction only if it lies entirely past the
//! source's leading edge and passes an angle gate that rejects targets starting
//! beyond the source's center line. Remaining candidates are ranked by an integer
//! distance that weighs the lateral offset per [`LateralWeights`]; ties go to the
//! target supplied first. See the [`metric`] module for the exact formulas.
//!
//! Directions are computed independently per source: if `b` is right of `a`,
//! `a` is not necessarily left of `b`.
//!
//! Graphs are rebuilt from scratch on demand. There is no incremental update:
//! geometry is always read from the targets at build time.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod graph;
pub mod metric;
mod types;

pub use graph::{GraphBuilder, GraphConfig, GraphEntry, NavGraph};
pub use metric::{LateralWeights, candidate_distance};
pub use types::{Direction, FocusItem, FocusTarget, Neighbors};
