// Copyright 2026 the Midrib Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-level line model: outer markers, inner markers, and the zoom between
//! them.

use alloc::vec::Vec;

use crate::Line;

/// The affine parameters of an open zoom.
///
/// Derived by [`LineModel::set_inner_item_sizes`]; never set directly. All
/// three values are fixed for the duration of one zoom gesture and the zoom
/// extent scales their effect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomGeometry {
    /// The point on the axis around which the outer items are pushed apart
    /// and from which the inner items emerge.
    pub origin: f64,
    /// The factor by which outer distances are expanded at full zoom, sized
    /// so the inner run fits in the opened gap.
    pub scale: f64,
    /// The translation applied to outer positions at full zoom so the opened
    /// gap is centred on the inner run.
    pub offset: f64,
}

/// A pair of [`Line`]s — the always-populated *outer* markers and the
/// gesture-scoped *inner* markers — plus the zoom geometry interpolating
/// between them.
///
/// The inner line's values are only meaningful while a zoom is open; the
/// stored [`ZoomGeometry`] is discarded whenever the outer set or the axis
/// length changes, and recomputed by the next
/// [`set_inner_item_sizes`](Self::set_inner_item_sizes).
#[derive(Clone, Debug, PartialEq)]
pub struct LineModel {
    outer: Line,
    inner: Line,
    zoom: Option<ZoomGeometry>,
}

impl LineModel {
    /// Creates a model with empty outer and inner lines of the given axis
    /// `length` and preferred inter-item `margin`.
    #[must_use]
    pub fn new(length: f64, margin: f64) -> Self {
        Self {
            outer: Line::new(length, margin),
            inner: Line::new(length, margin),
            zoom: None,
        }
    }

    /// Returns the outer (top-level) line.
    #[must_use]
    pub const fn outer(&self) -> &Line {
        &self.outer
    }

    /// Returns the inner (zoomed-in) line.
    ///
    /// Only meaningful while a zoom is open.
    #[must_use]
    pub const fn inner(&self) -> &Line {
        &self.inner
    }

    /// Returns the shared axis length.
    #[must_use]
    pub const fn length(&self) -> f64 {
        self.outer.length()
    }

    /// Sets the axis length for both lines and discards any open zoom.
    pub fn set_length(&mut self, length: f64) {
        self.outer.set_length(length);
        self.inner.set_length(length);
        self.zoom = None;
    }

    /// Returns the currently stored zoom geometry, if a zoom is open.
    #[must_use]
    pub const fn zoom_geometry(&self) -> Option<ZoomGeometry> {
        self.zoom
    }

    /// Discards any open zoom, returning outer positions to their resting
    /// layout.
    pub fn clear_zoom(&mut self) {
        self.zoom = None;
    }

    /// Replaces the outer item sizes and discards any open zoom; the geometry
    /// is derived from the outer layout and must be recomputed by the next
    /// zoom-open.
    pub fn set_outer_item_sizes(&mut self, sizes: &[f64]) {
        self.outer.set_sizes(sizes);
        self.zoom = None;
    }

    /// Opens an inner item run beneath outer item `open_below` and derives
    /// the zoom geometry.
    ///
    /// The inner run is centred as closely as possible on the boundary after
    /// the opened outer item (clamped to stay on the axis), and the stored
    /// [`ZoomGeometry`] is sized so that at full zoom the outer run has
    /// spread just far enough for the inner run to fit in the opened gap.
    ///
    /// Inner sets of fewer than two items produce degenerate geometry;
    /// callers should refuse to open a zoom for them rather than rely on it.
    pub fn set_inner_item_sizes(&mut self, sizes: &[f64], open_below: usize) {
        let origin = self.zoom_origin(open_below);
        self.inner.set_sizes(sizes);
        self.inner.calculate_delta(origin);
        let gap = self.outer.midpoint_gap(open_below);
        // A collapsed outer gap still opens over one pseudo-unit.
        let gap = if gap > 0.0 { gap } else { 1.0 };
        self.zoom = Some(ZoomGeometry {
            origin,
            scale: (self.inner.extent() + gap) / gap,
            offset: self.inner.midpoint() - origin,
        });
    }

    /// Returns the outer item positions at the given zoom extent.
    ///
    /// With no zoom open this is the outer midpoints unchanged; with a zoom
    /// open, the midpoints under the affine expansion
    /// `ratio = 1 + (scale − 1) · extent` around the origin, translated by
    /// `offset · extent`. At extent 0 the map is the identity.
    #[must_use]
    pub fn calculate_outer_positions(&self, zoom_extent: f64) -> Vec<f64> {
        let Some(ZoomGeometry {
            origin,
            scale,
            offset,
        }) = self.zoom
        else {
            return self.outer.midpoints().to_vec();
        };
        let ratio = 1.0 + (scale - 1.0) * zoom_extent;
        let translate = offset * zoom_extent;
        let mut positions = self.outer.midpoints_scaled(ratio, origin);
        for p in &mut positions {
            *p += translate;
        }
        positions
    }

    /// Returns the inner item positions at the given zoom extent, or an empty
    /// vector when no zoom is open.
    ///
    /// Each inner item interpolates linearly from the shared zoom origin
    /// (extent 0, all items collapsed at the opening point) out to its own
    /// midpoint (extent 1).
    #[must_use]
    pub fn calculate_inner_positions(&self, zoom_extent: f64) -> Vec<f64> {
        let Some(ZoomGeometry { origin, .. }) = self.zoom else {
            return Vec::new();
        };
        self.inner
            .midpoints()
            .iter()
            .map(|&mid| origin * (1.0 - zoom_extent) + mid * zoom_extent)
            .collect()
    }

    /// Returns the axis point a zoom opened beneath outer item `index` would
    /// emerge from: the boundary after that item.
    #[must_use]
    pub fn zoom_origin(&self, index: usize) -> f64 {
        self.outer.trailing_boundary(index)
    }
}
