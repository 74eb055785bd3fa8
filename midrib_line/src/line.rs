// Copyright 2026 the Midrib Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement of a run of fixed-size items along a 1D axis.

use alloc::vec::Vec;
use smallvec::SmallVec;

/// Inline storage sized for typical index bars (A–Z plus a few extras).
type Scalars = SmallVec<[f64; 32]>;

/// A run of fixed-size items laid out along a one-dimensional axis.
///
/// A `Line` is given an axis `length`, a preferred inter-item `margin`, a list
/// of item sizes, and a uniform shift (*delta*) added to all positions. From
/// these it derives each item's midpoint and the global values of the run:
/// where it starts and ends, the extent between those, and the run midpoint.
///
/// Derived values are recomputed in full on every mutation, so a `Line` is
/// stateless modulo its latest inputs. All values are in the caller's 1D
/// coordinate space (typically logical pixels).
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    length: f64,
    margin: f64,
    item_sizes: Scalars,
    delta: f64,

    // Derived on every mutation.
    midpoints: Scalars,
    start_pos: f64,
    end_pos: f64,
    extent: f64,
    midpoint: f64,
    item_gap: f64,
}

impl Line {
    /// Creates an empty line of the given axis `length` and preferred `margin`
    /// between items.
    #[must_use]
    pub fn new(length: f64, margin: f64) -> Self {
        let mut line = Self {
            length,
            margin,
            item_sizes: Scalars::new(),
            delta: 0.0,
            midpoints: Scalars::new(),
            start_pos: 0.0,
            end_pos: 0.0,
            extent: 0.0,
            midpoint: 0.0,
            item_gap: margin,
        };
        line.recalculate();
        line
    }

    /// Returns the axis length.
    #[must_use]
    pub const fn length(&self) -> f64 {
        self.length
    }

    /// Sets the axis length, recomputing the layout.
    pub fn set_length(&mut self, length: f64) {
        self.length = length;
        self.recalculate();
    }

    /// Returns the preferred inter-item gap.
    #[must_use]
    pub const fn margin(&self) -> f64 {
        self.margin
    }

    /// Returns the uniform shift applied to all positions.
    #[must_use]
    pub const fn delta(&self) -> f64 {
        self.delta
    }

    /// Sets the uniform shift applied to all positions, recomputing the layout.
    pub fn set_delta(&mut self, delta: f64) {
        self.delta = delta;
        self.recalculate();
    }

    /// Replaces the item sizes, recomputing the layout.
    pub fn set_sizes(&mut self, sizes: &[f64]) {
        // Sizes are expected to be finite. Catch NaNs (and infinities) in
        // debug builds so misuse does not go unnoticed.
        debug_assert!(
            sizes.iter().all(|s| s.is_finite()),
            "Line item sizes must be finite; got {sizes:?}"
        );
        self.item_sizes.clear();
        self.item_sizes.extend_from_slice(sizes);
        self.recalculate();
    }

    /// Returns the item sizes.
    #[must_use]
    pub fn item_sizes(&self) -> &[f64] {
        &self.item_sizes
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.item_sizes.len()
    }

    /// Returns `true` if the line holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.item_sizes.is_empty()
    }

    /// Returns the item midpoints, one per item, monotonically non-decreasing.
    #[must_use]
    pub fn midpoints(&self) -> &[f64] {
        &self.midpoints
    }

    /// Returns the position at which the first item starts.
    #[must_use]
    pub const fn start_pos(&self) -> f64 {
        self.start_pos
    }

    /// Returns the position at which the last item ends.
    #[must_use]
    pub const fn end_pos(&self) -> f64 {
        self.end_pos
    }

    /// Returns the extent taken up between [`start_pos`](Self::start_pos) and
    /// [`end_pos`](Self::end_pos).
    #[must_use]
    pub const fn extent(&self) -> f64 {
        self.extent
    }

    /// Returns the point equidistant between the run's start and end.
    #[must_use]
    pub const fn midpoint(&self) -> f64 {
        self.midpoint
    }

    /// Returns the gap between items; equal to `margin` unless shrunk to fit.
    #[must_use]
    pub const fn item_gap(&self) -> f64 {
        self.item_gap
    }

    /// Chooses and applies the delta that places the item run as close to
    /// being centred around `zoom_origin` as possible without the outermost
    /// items leaving `[0, length]`.
    ///
    /// This is a one-sided clamp, not a full centring: only the edge the
    /// origin pulls towards is constrained, and a run that already fits is
    /// shifted by the raw displacement. Call after [`set_sizes`](Self::set_sizes)
    /// so the current item gap is part of the run size.
    pub fn calculate_delta(&mut self, zoom_origin: f64) {
        let centre = self.length * 0.5;
        let raw = zoom_origin - centre;
        let n = self.item_sizes.len();
        let half_run = if n == 0 {
            0.0
        } else {
            (self.item_sizes.iter().sum::<f64>() + (n - 1) as f64 * self.item_gap) * 0.5
        };
        let delta = if raw < 0.0 {
            let top = centre - half_run;
            (top + raw).max(0.0) - top
        } else {
            let bottom = centre + half_run;
            (bottom + raw).min(self.length) - bottom
        };
        self.set_delta(delta);
    }

    /// Returns the midpoints under the affine map
    /// `p ↦ (p − origin) · factor + origin`.
    ///
    /// Used to spread the outer item run apart around the zoom origin while
    /// an inner set emerges.
    #[must_use]
    pub fn midpoints_scaled(&self, factor: f64, origin: f64) -> Vec<f64> {
        self.midpoints
            .iter()
            .map(|&p| (p - origin) * factor + origin)
            .collect()
    }

    /// Returns the boundary point in the gap between item `after` and the
    /// next item: the average of the first item's trailing edge and the next
    /// item's leading edge.
    ///
    /// For the last item (or any index past it) the boundary sits just inside
    /// the end of the axis, at `length − 1`. For an empty line the axis
    /// midpoint is returned.
    #[must_use]
    pub fn trailing_boundary(&self, after: usize) -> f64 {
        if self.midpoints.is_empty() {
            return self.length * 0.5;
        }
        if after + 1 < self.midpoints.len() {
            let this_end = self.midpoints[after] + self.item_sizes[after] * 0.5;
            let next_start = self.midpoints[after + 1] - self.item_sizes[after + 1] * 0.5;
            (this_end + next_start) * 0.5
        } else {
            self.length - 1.0
        }
    }

    /// Returns the distance from item `after`'s midpoint to the next item's
    /// midpoint, or to the end of the axis for the last item.
    ///
    /// Out-of-range indices yield `0.0`.
    #[must_use]
    pub fn midpoint_gap(&self, after: usize) -> f64 {
        let Some(&pos0) = self.midpoints.get(after) else {
            return 0.0;
        };
        let pos1 = if after + 1 < self.midpoints.len() {
            self.midpoints[after + 1]
        } else {
            self.length
        };
        pos1 - pos0
    }

    /// Returns the index of the item whose span contains `pos`, or `None` if
    /// the position lies outside `[start_pos, end_pos]`.
    ///
    /// The tie-break at item boundaries is: take the first index whose
    /// leading edge is at or past `pos`, subtract one, and clamp into
    /// `[0, len − 1]`. A position exactly on an interior boundary therefore
    /// resolves to the item on its left, and a position on the run's leading
    /// edge resolves to item 0.
    #[must_use]
    pub fn find_item(&self, pos: f64) -> Option<usize> {
        if self.midpoints.is_empty() || pos < self.start_pos || pos > self.end_pos {
            return None;
        }
        let hit = self
            .midpoints
            .iter()
            .zip(&self.item_sizes)
            .position(|(mid, size)| mid - size * 0.5 >= pos);
        Some(match hit {
            Some(i) => i.saturating_sub(1),
            None => self.midpoints.len() - 1,
        })
    }

    /// Recomputes all derived values from `(length, margin, item_sizes, delta)`.
    fn recalculate(&mut self) {
        let n = self.item_sizes.len();
        let centre = self.length * 0.5;
        if n < 2 {
            // Zero or one item: collapse to a single centred point.
            self.midpoints.clear();
            for _ in 0..n {
                self.midpoints.push(centre + self.delta);
            }
            self.item_gap = self.margin;
            let first = self.item_sizes.first().copied();
            self.start_pos = first.map_or(0.0, |s| (self.length - s) * 0.5) + self.delta;
            self.end_pos = first.map_or(0.0, |s| (self.length + s) * 0.5) + self.delta;
            self.extent = first.unwrap_or(0.0);
            self.midpoint = centre + self.delta;
            return;
        }

        let total: f64 = self.item_sizes.iter().sum();
        // Gaps shrink below the margin only if items would otherwise
        // overflow the axis; they never grow beyond it.
        self.item_gap = self.margin.min((self.length - total) / (n - 1) as f64);
        self.start_pos =
            (self.length - (total + (n - 1) as f64 * self.item_gap)) * 0.5 + self.delta;

        self.midpoints.clear();
        let mut run = self.start_pos;
        let mut last_end = self.start_pos;
        for &size in &self.item_sizes {
            self.midpoints.push(run + size * 0.5);
            last_end = run + size;
            run += size + self.item_gap;
        }
        self.end_pos = last_end;
        self.extent = self.end_pos - self.start_pos;
        self.midpoint = (self.end_pos + self.start_pos) * 0.5;
    }
}
