// Copyright 2026 the Midrib Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interaction state as a single sum type.

use alloc::vec::Vec;

use crate::SizedMarker;

/// The state of one index-bar gesture.
///
/// Exactly one variant is active at a time; per-variant payloads make illegal
/// combinations (such as an inner marker list without an opened top index)
/// unrepresentable. A gesture runs `Ready` → … → `Ready`, and the inner
/// marker list fetched for a top index is immutable for the rest of that
/// gesture.
///
/// The two transient variants, [`UserDraggedToZoom`](Self::UserDraggedToZoom)
/// and [`StartAnimatingShut`](Self::StartAnimatingShut), are resolved
/// synchronously inside the pointer event that creates them and are never
/// observable between calls.
///
/// Every `extent` carried here lies in `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub enum InteractionState {
    /// Not currently being touched or animating.
    Ready,
    /// The pointer is down, selecting among the top-level markers.
    DraggingTop,
    /// Transient: the user has dragged perpendicular to the bar to request a
    /// zoom under a top-level marker. Resolves to `Zooming` when at least two
    /// inner markers exist, or falls back to `DraggingTop`.
    UserDraggedToZoom {
        /// The top-level index the zoom was requested under.
        top_index: usize,
    },
    /// Dragged partway between the top level and a fully opened zoom.
    Zooming {
        /// The top-level index the zoom opened under.
        top_index: usize,
        /// The inner markers revealed by this zoom.
        inner: Vec<SizedMarker>,
        /// How far open the zoom is, in `[0, 1]`.
        extent: f64,
    },
    /// Fully open; selecting among the inner markers. The extent is pinned at
    /// 1 until release, regardless of small retreats.
    DraggingInner {
        /// The top-level index the zoom opened under.
        top_index: usize,
        /// The inner markers being selected from.
        inner: Vec<SizedMarker>,
    },
    /// Transient: sets up the closing animation. Resolves to `AnimatingShut`,
    /// or straight to `Ready` when there is nothing to animate.
    StartAnimatingShut {
        /// The extent the close starts from.
        from: f64,
        /// The top-level index the zoom opened under.
        top_index: usize,
        /// The inner markers still on screen while closing.
        inner: Vec<SizedMarker>,
    },
    /// Released mid-zoom; the extent is decaying to zero under the frame
    /// clock.
    AnimatingShut {
        /// The top-level index the zoom opened under.
        top_index: usize,
        /// The inner markers still on screen while closing.
        inner: Vec<SizedMarker>,
        /// The current extent, decaying towards 0.
        extent: f64,
        /// The timestamp of the last processed frame, in milliseconds.
        last_frame_time: u64,
    },
}

impl InteractionState {
    /// Returns the zoom extent implied by this state, in `[0, 1]`.
    #[must_use]
    pub fn zoom_extent(&self) -> f64 {
        match self {
            Self::Ready | Self::DraggingTop | Self::UserDraggedToZoom { .. } => 0.0,
            Self::Zooming { extent, .. } | Self::AnimatingShut { extent, .. } => *extent,
            Self::DraggingInner { .. } => 1.0,
            Self::StartAnimatingShut { from, .. } => *from,
        }
    }

    /// Returns the inner markers, in the states that carry them.
    #[must_use]
    pub fn inner_markers(&self) -> Option<&[SizedMarker]> {
        match self {
            Self::Zooming { inner, .. }
            | Self::DraggingInner { inner, .. }
            | Self::StartAnimatingShut { inner, .. }
            | Self::AnimatingShut { inner, .. } => Some(inner),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::InteractionState;
    use crate::{Marker, SizedMarker};

    fn inner() -> vec::Vec<SizedMarker> {
        vec![
            SizedMarker {
                marker: Marker::new("a", 1),
                extent: 2.0,
            },
            SizedMarker {
                marker: Marker::new("b", 2),
                extent: 2.0,
            },
        ]
    }

    #[test]
    fn zoom_extent_per_state() {
        assert_eq!(InteractionState::Ready.zoom_extent(), 0.0);
        assert_eq!(InteractionState::DraggingTop.zoom_extent(), 0.0);
        let zooming = InteractionState::Zooming {
            top_index: 0,
            inner: inner(),
            extent: 0.25,
        };
        assert_eq!(zooming.zoom_extent(), 0.25);
        let dragging = InteractionState::DraggingInner {
            top_index: 0,
            inner: inner(),
        };
        assert_eq!(dragging.zoom_extent(), 1.0);
        let shutting = InteractionState::AnimatingShut {
            top_index: 0,
            inner: inner(),
            extent: 0.5,
            last_frame_time: 0,
        };
        assert_eq!(shutting.zoom_extent(), 0.5);
    }

    #[test]
    fn inner_markers_only_in_zoomed_states() {
        assert!(InteractionState::Ready.inner_markers().is_none());
        assert!(InteractionState::DraggingTop.inner_markers().is_none());
        assert!(
            InteractionState::UserDraggedToZoom { top_index: 1 }
                .inner_markers()
                .is_none()
        );
        let zooming = InteractionState::Zooming {
            top_index: 0,
            inner: inner(),
            extent: 0.25,
        };
        assert_eq!(zooming.inner_markers().map(<[SizedMarker]>::len), Some(2));
    }
}
