// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Directional candidate scoring.
//!
//! A target is a candidate for a source in a given direction when it passes two
//! tests, after which it is ranked by an integer distance:
//!
//! 1. **Edge ordering**: the target lies entirely past the source's leading edge
//!    (for [`Direction::Right`], `target.x0 >= source.x1`). Targets that overlap
//!    the source along the direction of travel are never candidates.
//! 2. **Angle gate**: with `origin` the source's center coordinate across the
//!    direction of travel, the target's near edge (top for left/right, left for
//!    up/down) must not lie past `origin`. This is phrased as
//!    `atan(forward / (origin - near)) >= 0°` and
//!    `atan(forward / (origin - far)) <= 180°`, in degrees.
//! 3. **Distance**: `floor(sqrt(forward² + lateral²))`, where `lateral` is the
//!    smallest offset from `origin` to the target's near edge, center, or far
//!    edge, multiplied by the direction's [`LateralWeights`] entry.
//!
//! The forward offset is measured from the source's right edge for
//! [`Direction::Right`] and from the source's center for the other three
//! directions. Together with the default `2×` lateral weight on
//! [`Direction::Right`] this reproduces established navigation behavior and is
//! kept as is.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Rect;

use crate::types::Direction;

/// Per-direction multipliers applied to the lateral offset of a candidate.
///
/// Larger values penalize candidates that sit off the axis of travel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LateralWeights {
    /// Weight for [`Direction::Up`].
    pub up: f64,
    /// Weight for [`Direction::Down`].
    pub down: f64,
    /// Weight for [`Direction::Left`].
    pub left: f64,
    /// Weight for [`Direction::Right`].
    pub right: f64,
}

impl LateralWeights {
    /// The same weight in every direction.
    #[must_use]
    pub const fn uniform(weight: f64) -> Self {
        Self {
            up: weight,
            down: weight,
            left: weight,
            right: weight,
        }
    }

    /// Weight for `direction`.
    #[must_use]
    pub const fn get(&self, direction: Direction) -> f64 {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }
}

impl Default for LateralWeights {
    /// `1` everywhere except `2` for [`Direction::Right`].
    fn default() -> Self {
        Self {
            up: 1.0,
            down: 1.0,
            left: 1.0,
            right: 2.0,
        }
    }
}

/// Score `target` as a candidate for moving from `source` in `direction`.
///
/// Returns `None` when `target` fails the edge-ordering test or the angle gate,
/// otherwise the integer distance used to rank candidates (lower is better).
/// Both rectangles are expected to be normalized (`x0 <= x1`, `y0 <= y1`).
///
/// ```
/// use kurbo::Rect;
/// use understory_spatial_nav::{Direction, LateralWeights, candidate_distance};
///
/// let a = Rect::new(0.0, 0.0, 100.0, 100.0);
/// let b = Rect::new(150.0, 0.0, 250.0, 100.0);
/// let w = LateralWeights::default();
///
/// // B's center is 100 past A's right edge and level with A's center.
/// assert_eq!(candidate_distance(&w, Direction::Right, a, b), Some(100));
/// // B is not to the left of A at all.
/// assert_eq!(candidate_distance(&w, Direction::Left, a, b), None);
/// ```
#[must_use]
pub fn candidate_distance(
    weights: &LateralWeights,
    direction: Direction,
    source: Rect,
    target: Rect,
) -> Option<u64> {
    let sc = source.center();
    let tc = target.center();
    let weight = weights.get(direction);
    match direction {
        Direction::Right => {
            if target.x0 < source.x1 {
                return None;
            }
            score(tc.x - source.x1, sc.y, [target.y0, tc.y, target.y1], weight)
        }
        Direction::Left => {
            if target.x1 > source.x0 {
                return None;
            }
            score(sc.x - tc.x, sc.y, [target.y0, tc.y, target.y1], weight)
        }
        Direction::Down => {
            if target.y0 < source.y1 {
                return None;
            }
            score(tc.y - sc.y, sc.x, [target.x0, tc.x, target.x1], weight)
        }
        Direction::Up => {
            if target.y1 > source.y0 {
                return None;
            }
            score(sc.y - tc.y, sc.x, [target.x0, tc.x, target.x1], weight)
        }
    }
}

/// Gate and rank a candidate given its forward offset and the cross-axis
/// coordinates of its near edge, center, and far edge.
fn score(forward: f64, origin: f64, [near, center, far]: [f64; 3], weight: f64) -> Option<u64> {
    let lead = gate_angle(forward, origin - near);
    let trail = gate_angle(forward, origin - far);
    if !(lead >= 0.0 && trail <= 180.0) {
        return None;
    }

    let lateral = weight
        * (origin - near)
            .abs()
            .min((origin - center).abs())
            .min((origin - far).abs());
    let distance = (forward * forward + lateral * lateral).sqrt().floor();
    if !distance.is_finite() {
        return None;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "distance is finite and non-negative; saturating is fine for ranking"
    )]
    Some(distance as u64)
}

/// Angle in degrees between the axis of travel and the line to a target edge.
///
/// A zero forward offset is 0° whatever the lateral offset, so a target level
/// with the source's leading edge always passes. A zero lateral offset with a
/// positive forward offset is 90°. NaN inputs produce NaN, which fails the gate.
fn gate_angle(forward: f64, lateral: f64) -> f64 {
    if forward == 0.0 {
        return 0.0;
    }
    (forward / lateral).atan().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(left: f64, top: f64, width: f64, height: f64) -> Rect {
        Rect::new(left, top, left + width, top + height)
    }

    #[test]
    fn right_uses_leading_edge_and_double_lateral_weight() {
        let w = LateralWeights::default();
        let a = rect(0.0, 0.0, 100.0, 100.0);
        // Top edge level with A's center; lateral min is 0 via the top edge.
        let b = rect(150.0, 50.0, 100.0, 100.0);
        assert_eq!(candidate_distance(&w, Direction::Right, a, b), Some(100));

        // Top edge 40 above A's center, center 10 below: lateral min is 10, doubled.
        let c = rect(150.0, 10.0, 100.0, 100.0);
        // sqrt(100² + 20²) = 101.98…
        assert_eq!(candidate_distance(&w, Direction::Right, a, c), Some(101));
    }

    #[test]
    fn left_uses_center_offset_and_unit_weight() {
        let w = LateralWeights::default();
        let a = rect(200.0, 0.0, 100.0, 100.0);
        let b = rect(0.0, 10.0, 100.0, 100.0);
        // forward = 250 - 50 = 200, lateral = 10 → sqrt(40100) = 200.24…
        assert_eq!(candidate_distance(&w, Direction::Left, a, b), Some(200));
    }

    #[test]
    fn vertical_directions_mirror_each_other() {
        let w = LateralWeights::default();
        let a = rect(0.0, 0.0, 100.0, 100.0);
        let below = rect(30.0, 150.0, 100.0, 100.0);
        // forward = 200 - 50 = 150, lateral = |50 - 30| = 20 → 151.32…
        assert_eq!(candidate_distance(&w, Direction::Down, a, below), Some(151));
        assert_eq!(candidate_distance(&w, Direction::Up, below, a), Some(151));
        assert_eq!(candidate_distance(&w, Direction::Up, a, below), None);
    }

    #[test]
    fn overlap_on_forward_axis_is_rejected() {
        let w = LateralWeights::default();
        let a = rect(0.0, 0.0, 100.0, 100.0);
        let overlapping = rect(99.0, 0.0, 100.0, 100.0);
        assert_eq!(candidate_distance(&w, Direction::Right, a, overlapping), None);
        let touching = rect(100.0, 0.0, 100.0, 100.0);
        assert!(candidate_distance(&w, Direction::Right, a, touching).is_some());
    }

    #[test]
    fn angle_gate_rejects_targets_starting_past_the_center_line() {
        let w = LateralWeights::default();
        let a = rect(0.0, 0.0, 100.0, 100.0);
        // Right and below: its top edge is under A's center.
        let low = rect(150.0, 200.0, 100.0, 100.0);
        assert_eq!(candidate_distance(&w, Direction::Right, a, low), None);
        // Below and right: its left edge is right of A's center.
        assert_eq!(candidate_distance(&w, Direction::Down, a, low), None);
        // Right and above passes the gate and is ranked by distance instead.
        let high = rect(150.0, -300.0, 100.0, 100.0);
        assert!(candidate_distance(&w, Direction::Right, a, high).is_some());
    }

    #[test]
    fn zero_forward_offset_passes_gate() {
        assert_eq!(gate_angle(0.0, 0.0), 0.0);
        assert_eq!(gate_angle(0.0, -25.0), 0.0);
        assert!((gate_angle(10.0, 0.0) - 90.0).abs() < 1e-9);
        assert!(gate_angle(10.0, -5.0) < 0.0);

        // A zero-width target sitting exactly on A's right edge.
        let w = LateralWeights::default();
        let a = rect(0.0, 0.0, 100.0, 100.0);
        let sliver = rect(100.0, 60.0, 0.0, 10.0);
        assert_eq!(candidate_distance(&w, Direction::Right, a, sliver), Some(20));
    }

    #[test]
    fn uniform_weights_change_right_ranking() {
        let a = rect(0.0, 0.0, 100.0, 100.0);
        let c = rect(150.0, 10.0, 100.0, 100.0);
        let w = LateralWeights::uniform(1.0);
        // sqrt(100² + 10²) = 100.49…
        assert_eq!(candidate_distance(&w, Direction::Right, a, c), Some(100));
        assert_eq!(w.get(Direction::Right), 1.0);
    }

    #[test]
    fn non_finite_geometry_is_rejected() {
        let w = LateralWeights::default();
        let a = rect(0.0, 0.0, 100.0, 100.0);
        let nan = Rect::new(f64::NAN, 0.0, f64::NAN, 10.0);
        assert_eq!(candidate_distance(&w, Direction::Right, a, nan), None);
    }
}
