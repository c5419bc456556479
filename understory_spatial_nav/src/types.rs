// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types: directions, focus targets, and per-item neighbor slots.

use kurbo::Rect;

/// A cardinal direction of focus movement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards smaller `y`.
    Up,
    /// Towards larger `y`.
    Down,
    /// Towards smaller `x`.
    Left,
    /// Towards larger `x`.
    Right,
}

impl Direction {
    /// All four directions, in the order neighbor slots are reported.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// The direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Whether movement in this direction runs along the `x` axis.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Something that can take part in spatial focus navigation.
///
/// Implementations expose a stable identity, their current bounds, and whether
/// they currently participate in navigation. Graph builders query `bounds` and
/// `is_eligible` every time they run, so implementations should answer from live
/// layout rather than a snapshot taken at registration time.
///
/// All bounds handed to one build must share a coordinate space (for example the
/// world space of a box tree or the local space of a scrolling container).
pub trait FocusTarget<K> {
    /// Stable identifier of this target.
    fn id(&self) -> K;

    /// Current axis-aligned bounds.
    fn bounds(&self) -> Rect;

    /// Whether this target is currently visible and focusable.
    ///
    /// Ineligible targets never receive neighbors and are never chosen as one.
    fn is_eligible(&self) -> bool;
}

impl<K, T: FocusTarget<K> + ?Sized> FocusTarget<K> for &T {
    fn id(&self) -> K {
        (**self).id()
    }

    fn bounds(&self) -> Rect {
        (**self).bounds()
    }

    fn is_eligible(&self) -> bool {
        (**self).is_eligible()
    }
}

/// A plain focusable item that owns its geometry.
///
/// Eligibility follows the usual "visible and in the tab order" rule: the item
/// must be `visible` and have a non-negative `focus_order`.
#[derive(Clone, Debug, PartialEq)]
pub struct FocusItem<K> {
    /// Identifier for this item.
    pub id: K,
    /// Bounds in the shared coordinate space.
    pub rect: Rect,
    /// Whether the item is currently shown.
    pub visible: bool,
    /// Position in the focus order; negative values opt out of navigation.
    pub focus_order: i32,
}

impl<K> FocusItem<K> {
    /// Create a visible item with focus order `0`.
    pub fn new(id: K, rect: Rect) -> Self {
        Self {
            id,
            rect,
            visible: true,
            focus_order: 0,
        }
    }

    /// Create a visible item from `left`, `top`, `width`, and `height`.
    pub fn from_origin_size(id: K, left: f64, top: f64, width: f64, height: f64) -> Self {
        Self::new(id, Rect::new(left, top, left + width, top + height))
    }
}

impl<K: Copy> FocusTarget<K> for FocusItem<K> {
    fn id(&self) -> K {
        self.id
    }

    fn bounds(&self) -> Rect {
        self.rect
    }

    fn is_eligible(&self) -> bool {
        self.visible && self.focus_order >= 0
    }
}

/// The chosen neighbor of one item in each direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Neighbors<K> {
    /// Neighbor above, if any.
    pub up: Option<K>,
    /// Neighbor below, if any.
    pub down: Option<K>,
    /// Neighbor to the left, if any.
    pub left: Option<K>,
    /// Neighbor to the right, if any.
    pub right: Option<K>,
}

impl<K> Default for Neighbors<K> {
    fn default() -> Self {
        Self {
            up: None,
            down: None,
            left: None,
            right: None,
        }
    }
}

impl<K: Copy> Neighbors<K> {
    /// Neighbor in `direction`, if any.
    #[must_use]
    pub fn get(&self, direction: Direction) -> Option<K> {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// Replace the neighbor in `direction`.
    pub fn set(&mut self, direction: Direction, neighbor: Option<K>) {
        let slot = match direction {
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        };
        *slot = neighbor;
    }

    /// Iterate `(direction, neighbor)` pairs for the slots that are filled.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, K)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(|d| self.get(d).map(|k| (d, k)))
    }

    /// Whether no direction has a neighbor.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.up.is_none() && self.down.is_none() && self.left.is_none() && self.right.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn opposite_round_trips() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d, "opposite of {d:?}");
            assert_ne!(d.opposite(), d, "{d:?} is its own opposite");
        }
        assert!(Direction::Left.is_horizontal());
        assert!(!Direction::Down.is_horizontal());
    }

    #[test]
    fn eligibility_requires_visible_and_non_negative_order() {
        let mut item = FocusItem::from_origin_size(1_u32, 0.0, 0.0, 10.0, 10.0);
        assert!(item.is_eligible());
        assert_eq!(item.bounds(), Rect::new(0.0, 0.0, 10.0, 10.0));

        item.focus_order = -1;
        assert!(!item.is_eligible());

        item.focus_order = 3;
        item.visible = false;
        assert!(!item.is_eligible());
    }

    #[test]
    fn neighbor_slots_by_direction() {
        let mut n: Neighbors<u32> = Neighbors::default();
        assert!(n.is_empty());

        n.set(Direction::Right, Some(7));
        n.set(Direction::Up, Some(3));
        assert_eq!(n.get(Direction::Right), Some(7));
        assert_eq!(n.get(Direction::Left), None);

        let filled: Vec<_> = n.iter().collect();
        assert_eq!(filled, [(Direction::Up, 3), (Direction::Right, 7)]);

        n.set(Direction::Up, None);
        assert_eq!(n.right, Some(7));
        assert_eq!(n.up, None);
    }
}
