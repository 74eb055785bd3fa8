// Copyright 2026 the Midrib Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Markers and the pull interface that supplies them.

use alloc::string::String;
use alloc::vec::Vec;

/// A labelled stop point on the index bar.
///
/// The `offset` is an index into the externally-owned list the bar navigates;
/// selecting this marker publishes it as the control's output value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Marker {
    /// The text shown on the bar, typically one or two characters.
    pub label: String,
    /// The offset into the backing list that this marker jumps to.
    pub offset: usize,
}

impl Marker {
    /// Creates a marker with the given label and backing-list offset.
    #[must_use]
    pub fn new(label: impl Into<String>, offset: usize) -> Self {
        Self {
            label: label.into(),
            offset,
        }
    }
}

/// A marker together with its measured extent along the selection axis.
///
/// The extent is opaque to the engine; the rendering collaborator measures
/// the label and the engine only lays the scalar out.
#[derive(Clone, Debug, PartialEq)]
pub struct SizedMarker {
    /// The marker itself.
    pub marker: Marker,
    /// The measured extent along the selection axis.
    pub extent: f64,
}

/// The source of marker data, pulled by the interaction engine.
///
/// [`top_level_markers`](Self::top_level_markers) is consulted on reload.
/// [`markers_between`](Self::markers_between) is consulted lazily, at most
/// once per distinct top-level index within one gesture, when the user first
/// drags into zoom territory under that index.
///
/// Methods take `&mut self` so implementations are free to maintain caches
/// or query a backing store without interior mutability at the call site.
pub trait IndexBarDataSource {
    /// Returns the markers shown in the zoomed-out state.
    fn top_level_markers(&mut self) -> Vec<Marker>;

    /// Returns the second-level markers whose offsets lie in `start..end`.
    ///
    /// `end` is the next top-level marker's offset, or `None` as the
    /// open-ended upper bound under the last top-level marker.
    fn markers_between(&mut self, start: usize, end: Option<usize>) -> Vec<Marker>;

    /// Returns the given marker's extent along the selection axis.
    ///
    /// This is the rendering collaborator's measurement of the drawn label;
    /// the engine treats it as an opaque non-negative scalar.
    fn marker_extent(&mut self, marker: &Marker) -> f64;
}
