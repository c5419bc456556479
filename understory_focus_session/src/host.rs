// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborator traits: where focus notifications and debug overlays go.
//!
//! A [`FocusSession`](crate::FocusSession) never renders anything itself.
//! It reports successful focus changes and forwarded activations to a
//! [`FocusHost`], and, in debug mode, hands every rebuilt graph to a
//! [`GraphOverlay`] for drawing.
//!
//! ## Recording host
//!
//! `Vec<FocusEvent<K>>` implements [`FocusHost`] by appending events, which is
//! convenient for tests and for hosts that drain notifications once per frame:
//!
//! ```
//! use understory_focus_session::{FocusChange, FocusEvent, FocusHost};
//!
//! let mut events: Vec<FocusEvent<u32>> = Vec::new();
//! events.focus_changed(FocusChange { previous: None, current: 4 });
//! assert_eq!(events, [FocusEvent::Changed(FocusChange { previous: None, current: 4 })]);
//! ```

use alloc::vec::Vec;

use understory_spatial_nav::NavGraph;

/// A confirm-style signal forwarded to the focused item.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Activation {
    /// Confirm was pressed (for example Enter or the D-pad center went down).
    Pressed,
    /// Confirm was released.
    Released,
}

/// A successful focus change.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FocusChange<K> {
    /// The item focused before the change, if any.
    ///
    /// Equal to `Some(current)` when focus is set again on the focused item.
    pub previous: Option<K>,
    /// The item that now has focus.
    pub current: K,
}

/// A notification delivered to a [`FocusHost`], in recorded form.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FocusEvent<K> {
    /// Focus moved to an item.
    Changed(FocusChange<K>),
    /// Focus was explicitly dropped from an item.
    Lost(K),
    /// An activation signal was forwarded to the focused item.
    Activation(K, Activation),
}

/// Receiver of focus notifications.
///
/// Hosts typically move platform input focus, draw a focus ring, or scroll the
/// focused item into view.
pub trait FocusHost<K> {
    /// Called every time focus is successfully set.
    fn focus_changed(&mut self, change: FocusChange<K>);

    /// Called when focus is explicitly dropped with
    /// [`FocusSession::blur`](crate::FocusSession::blur).
    fn focus_lost(&mut self, id: K) {
        let _ = id;
    }

    /// Called with activation signals while an item is focused.
    fn activation(&mut self, id: K, activation: Activation) {
        let _ = (id, activation);
    }
}

impl<K> FocusHost<K> for () {
    fn focus_changed(&mut self, _change: FocusChange<K>) {}
}

impl<K> FocusHost<K> for Vec<FocusEvent<K>> {
    fn focus_changed(&mut self, change: FocusChange<K>) {
        self.push(FocusEvent::Changed(change));
    }

    fn focus_lost(&mut self, id: K) {
        self.push(FocusEvent::Lost(id));
    }

    fn activation(&mut self, id: K, activation: Activation) {
        self.push(FocusEvent::Activation(id, activation));
    }
}

impl<K, H: FocusHost<K> + ?Sized> FocusHost<K> for &mut H {
    fn focus_changed(&mut self, change: FocusChange<K>) {
        (**self).focus_changed(change);
    }

    fn focus_lost(&mut self, id: K) {
        (**self).focus_lost(id);
    }

    fn activation(&mut self, id: K, activation: Activation) {
        (**self).activation(id, activation);
    }
}

/// Debug visualization of the navigation graph.
///
/// While debug mode is on, each rebuild calls [`clear`](Self::clear) once and
/// then [`draw`](Self::draw) once with the fresh graph. Turning debug mode off
/// calls [`clear`](Self::clear) once. How edges are drawn (lines, arrows,
/// colors per direction) is entirely up to the implementation;
/// [`NavGraph::edges`] and [`NavGraph::entry`] give it the endpoints.
pub trait GraphOverlay<K> {
    /// Remove every indicator drawn so far.
    fn clear(&mut self);

    /// Draw indicators for `graph`.
    fn draw(&mut self, graph: &NavGraph<K>);
}

impl<K> GraphOverlay<K> for () {
    fn clear(&mut self) {}

    fn draw(&mut self, _graph: &NavGraph<K>) {}
}

impl<K, O: GraphOverlay<K> + ?Sized> GraphOverlay<K> for &mut O {
    fn clear(&mut self) {
        (**self).clear();
    }

    fn draw(&mut self, graph: &NavGraph<K>) {
        (**self).draw(graph);
    }
}
