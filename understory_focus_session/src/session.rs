// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The focus session: registered items, current focus, and input handling.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::HashSet;
use understory_spatial_nav::{Direction, FocusTarget, GraphBuilder, GraphConfig, NavGraph};

use crate::host::{Activation, FocusChange, FocusHost, GraphOverlay};

/// Construction-time settings for a [`FocusSession`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SessionConfig {
    /// Scoring configuration handed to the graph builder.
    pub graph: GraphConfig,
    /// Start with the debug overlay enabled.
    pub debug: bool,
}

/// A discrete input event delivered by the host's input source.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NavInput {
    /// Move focus in a direction (arrow key, D-pad).
    Move(Direction),
    /// Confirm pressed or released on the focused item.
    Activate(Activation),
}

/// Spatial focus state over a set of registered items.
///
/// ## Usage
///
/// - Construct with [`FocusSession::new`] (default configuration) or
///   [`FocusSession::with_config`], passing a [`FocusHost`] that receives
///   notifications and a [`GraphOverlay`] for debug drawing (`()` for either
///   discards them).
/// - [`register`](Self::register) items as they appear and
///   [`unregister`](Self::unregister) them as they go away.
/// - Put focus somewhere with [`set_focus`](Self::set_focus) or
///   [`set_focus_index`](Self::set_focus_index); until then directional moves
///   are ignored.
/// - Feed input with [`handle`](Self::handle), or call
///   [`move_focus`](Self::move_focus) / [`activate`](Self::activate) directly.
///
/// Every directional move rebuilds the neighbor graph from the items' current
/// bounds, so layout changes, newly hidden items, and removals are always taken
/// into account without explicit invalidation.
///
/// Invalid requests (unknown ids, out-of-range indices, moves with nothing
/// focused or nowhere to go) leave the session unchanged and emit nothing.
pub struct FocusSession<K, T, H = (), O = ()> {
    items: Vec<T>,
    members: HashSet<K>,
    focused: Option<K>,
    builder: GraphBuilder,
    graph: NavGraph<K>,
    debug: bool,
    host: H,
    overlay: O,
}

impl<K: Copy + Eq + Hash + Debug, T, H, O> Debug for FocusSession<K, T, H, O> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FocusSession")
            .field("len", &self.items.len())
            .field("focused", &self.focused)
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

impl<K, T, H, O> FocusSession<K, T, H, O>
where
    K: Copy + Eq + Hash + Debug,
    T: FocusTarget<K>,
    H: FocusHost<K>,
    O: GraphOverlay<K>,
{
    /// Create an empty, unfocused session with the default configuration.
    pub fn new(host: H, overlay: O) -> Self {
        Self::with_config(SessionConfig::default(), host, overlay)
    }

    /// Create an empty, unfocused session.
    ///
    /// If `config.debug` is set, the overlay is drawn immediately (empty).
    pub fn with_config(config: SessionConfig, host: H, overlay: O) -> Self {
        let mut session = Self {
            items: Vec::new(),
            members: HashSet::new(),
            focused: None,
            builder: GraphBuilder::new(config.graph),
            graph: NavGraph::new(),
            debug: config.debug,
            host,
            overlay,
        };
        if session.debug {
            session.rebuild();
        }
        session
    }

    // --- Registration ---

    /// Add `item` unless an item with the same id is already registered.
    ///
    /// Returns `true` if the item was added.
    pub fn register(&mut self, item: T) -> bool {
        let id = item.id();
        if !self.members.insert(id) {
            return false;
        }
        self.items.push(item);
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "focus.register", id = ?id, count = self.items.len());
        if self.debug {
            self.rebuild();
        }
        true
    }

    /// Remove the item with `id`, returning it, or `None` if it was not registered.
    ///
    /// Removing the focused item leaves the session unfocused. In debug mode
    /// the overlay is redrawn without the item.
    pub fn unregister(&mut self, id: K) -> Option<T> {
        let index = self.position(id)?;
        self.members.remove(&id);
        let item = self.items.remove(index);
        if self.focused == Some(id) {
            self.focused = None;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "focus.unregister", id = ?id, count = self.items.len());
        if self.debug {
            self.rebuild();
        }
        Some(item)
    }

    /// Remove every item and drop focus.
    pub fn clear(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "focus.clear", removed = self.items.len());
        self.items.clear();
        self.members.clear();
        self.focused = None;
        self.graph.clear();
        if self.debug {
            self.overlay.clear();
        }
    }

    /// Number of registered items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no items are registered.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether an item with `id` is registered.
    pub fn contains(&self, id: K) -> bool {
        self.members.contains(&id)
    }

    /// The item at `index` in registration order.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// The registered item with `id`.
    pub fn get_by_id(&self, id: K) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Run `f` on the registered item with `id`, for example to update geometry
    /// held by the item itself, and return its result.
    ///
    /// If `f` changes the item's id, the session follows the rename (focus
    /// included). Renaming onto an id that is already registered removes the
    /// edited item, as if by [`unregister`](Self::unregister), so ids stay
    /// unique. Returns `None` if `id` is not registered.
    pub fn update<R>(&mut self, id: K, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let index = self.position(id)?;
        let result = f(&mut self.items[index]);
        let renamed = self.items[index].id();
        if renamed != id {
            self.members.remove(&id);
            if self.members.insert(renamed) {
                if self.focused == Some(id) {
                    self.focused = Some(renamed);
                }
            } else {
                self.items.remove(index);
                if self.focused == Some(id) {
                    self.focused = None;
                }
            }
            #[cfg(feature = "tracing")]
            tracing::debug!(message = "focus.rename", from = ?id, to = ?renamed);
            if self.debug {
                self.rebuild();
            }
        }
        Some(result)
    }

    /// Registration-order index of `id`.
    pub fn position(&self, id: K) -> Option<usize> {
        if !self.members.contains(&id) {
            return None;
        }
        self.items.iter().position(|item| item.id() == id)
    }

    /// Registered items in registration order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Iterate registered items in registration order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    // --- Focus ---

    /// The focused item's id, if any.
    pub fn focused(&self) -> Option<K> {
        self.focused
    }

    /// The focused item, if any.
    pub fn focused_item(&self) -> Option<&T> {
        self.get_by_id(self.focused?)
    }

    /// Focus the registered item with `id` and notify the host.
    ///
    /// Returns `false`, changing nothing, if `id` is not registered.
    pub fn set_focus(&mut self, id: K) -> bool {
        if !self.members.contains(&id) {
            return false;
        }
        let previous = self.focused.replace(id);
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "focus.set", from = ?previous, to = ?id);
        self.host.focus_changed(FocusChange {
            previous,
            current: id,
        });
        true
    }

    /// Focus the item at `index` in registration order.
    ///
    /// Returns `false`, changing nothing, if `index` is out of range.
    pub fn set_focus_index(&mut self, index: usize) -> bool {
        match self.items.get(index) {
            Some(item) => {
                let id = item.id();
                self.set_focus(id)
            }
            None => false,
        }
    }

    /// Drop focus without focusing anything else.
    ///
    /// Notifies the host via [`FocusHost::focus_lost`] and returns the id that
    /// had focus.
    pub fn blur(&mut self) -> Option<K> {
        let id = self.focused.take()?;
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "focus.blur", id = ?id);
        self.host.focus_lost(id);
        Some(id)
    }

    /// Move focus to the neighbor of the focused item in `direction`.
    ///
    /// Rebuilds the neighbor graph first. Returns the newly focused id, or
    /// `None` if nothing is focused or there is no neighbor that way; in both
    /// cases focus is unchanged.
    pub fn move_focus(&mut self, direction: Direction) -> Option<K> {
        let Some(current) = self.focused else {
            #[cfg(feature = "tracing")]
            tracing::trace!(message = "focus.move", direction = ?direction, outcome = "unfocused");
            return None;
        };
        self.rebuild();
        let Some(next) = self.graph.neighbor(current, direction) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                message = "focus.move",
                direction = ?direction,
                from = ?current,
                outcome = "no_neighbor"
            );
            return None;
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "focus.move",
            direction = ?direction,
            from = ?current,
            to = ?next,
            outcome = "moved"
        );
        self.set_focus(next).then_some(next)
    }

    /// Forward an activation signal to the focused item.
    ///
    /// Returns `false` if nothing is focused.
    pub fn activate(&mut self, activation: Activation) -> bool {
        let Some(id) = self.focused else {
            return false;
        };
        self.host.activation(id, activation);
        true
    }

    /// Process one input event.
    ///
    /// Returns `true` if focus moved (for [`NavInput::Move`]) or the signal
    /// was delivered (for [`NavInput::Activate`]).
    pub fn handle(&mut self, input: NavInput) -> bool {
        match input {
            NavInput::Move(direction) => self.move_focus(direction).is_some(),
            NavInput::Activate(activation) => self.activate(activation),
        }
    }

    // --- Graph & debug overlay ---

    /// Rebuild the neighbor graph from the items' current geometry.
    ///
    /// In debug mode the overlay is cleared and redrawn.
    pub fn rebuild(&mut self) -> &NavGraph<K> {
        self.builder.build_into(&self.items, &mut self.graph);
        #[cfg(feature = "tracing")]
        tracing::trace!(
            message = "graph.rebuild",
            items = self.items.len(),
            eligible = self.graph.len()
        );
        if self.debug {
            self.overlay.clear();
            self.overlay.draw(&self.graph);
        }
        &self.graph
    }

    /// The graph from the most recent rebuild.
    pub fn graph(&self) -> &NavGraph<K> {
        &self.graph
    }

    /// Whether the debug overlay is enabled.
    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Enable or disable the debug overlay.
    ///
    /// Enabling rebuilds the graph and draws it; disabling clears the overlay.
    /// Setting the current value again does nothing.
    pub fn set_debug(&mut self, enabled: bool) {
        if enabled == self.debug {
            return;
        }
        self.debug = enabled;
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "focus.debug", enabled);
        if enabled {
            self.rebuild();
        } else {
            self.overlay.clear();
        }
    }

    /// Flip the debug overlay and return the new state.
    pub fn toggle_debug(&mut self) -> bool {
        self.set_debug(!self.debug);
        self.debug
    }

    // --- Collaborators ---

    /// The notification sink.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the notification sink (for example to drain events).
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The debug overlay.
    pub fn overlay(&self) -> &O {
        &self.overlay
    }

    /// Mutable access to the debug overlay.
    pub fn overlay_mut(&mut self) -> &mut O {
        &mut self.overlay
    }
}
