// Copyright 2026 the Midrib Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The index-bar interaction engine.

use alloc::vec::Vec;
use core::mem;

use kurbo::Point;
use midrib_line::LineModel;

use crate::{FrameScheduler, IndexBarDataSource, InteractionState, SizedMarker};

/// Which way the bar runs on screen.
///
/// The selection coordinate runs along the bar; the zooming coordinate runs
/// perpendicular to it, with negative values meaning the pointer is pulling
/// away from the bar (up from a horizontal bar, left from a vertical bar at
/// the trailing edge).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// The bar runs along the x axis; zooming is along y.
    Horizontal,
    /// The bar runs along the y axis; zooming is along x.
    Vertical,
}

impl Orientation {
    /// Returns the component of `point` along the bar.
    #[must_use]
    pub const fn selection_coord(self, point: Point) -> f64 {
        match self {
            Self::Horizontal => point.x,
            Self::Vertical => point.y,
        }
    }

    /// Returns the component of `point` perpendicular to the bar.
    #[must_use]
    pub const fn zooming_coord(self, point: Point) -> f64 {
        match self {
            Self::Horizontal => point.y,
            Self::Vertical => point.x,
        }
    }
}

/// Tunables for the interaction engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndexBarConfig {
    /// The perpendicular pull, in axis units, at which the zoom reaches full
    /// extent.
    pub zoom_distance: f64,
    /// The closing animation speed, in zoom-extent units per second.
    pub close_speed: f64,
    /// The preferred gap between markers along the bar.
    pub margin: f64,
}

impl Default for IndexBarConfig {
    fn default() -> Self {
        Self {
            zoom_distance: 25.0,
            close_speed: 3.5,
            margin: 10.0,
        }
    }
}

/// The interaction engine of a zoomable index bar.
///
/// This type owns the [`LineModel`] geometry, the [`InteractionState`], the
/// sized top-level markers, and the control's output value
/// ([`current_offset`](Self::current_offset)). It is renderer-agnostic: a
/// host view feeds it pointer events and frame ticks, and reads back marker
/// positions and the zoom extent to draw with.
///
/// All event handling is synchronous and runs to completion within the
/// triggering call; the only time-driven activity is the close animation,
/// whose per-frame callback is abstracted behind the injected
/// [`FrameScheduler`].
///
/// Timestamps are in milliseconds, monotonic, caller-chosen epoch.
#[derive(Debug)]
pub struct IndexBar<K: FrameScheduler> {
    config: IndexBarConfig,
    orientation: Orientation,
    line_model: LineModel,
    state: InteractionState,
    top_markers: Vec<SizedMarker>,
    /// Inner marker lists fetched so far this gesture, by top index.
    fetched: Vec<(usize, Vec<SizedMarker>)>,
    current_offset: usize,
    scheduler: K,
    ticking: bool,
}

impl<K: FrameScheduler> IndexBar<K> {
    /// Creates an engine for a bar of the given axis `length`.
    #[must_use]
    pub fn new(length: f64, orientation: Orientation, config: IndexBarConfig, scheduler: K) -> Self {
        Self {
            config,
            orientation,
            line_model: LineModel::new(length, config.margin),
            state: InteractionState::Ready,
            top_markers: Vec::new(),
            fetched: Vec::new(),
            current_offset: 0,
            scheduler,
            ticking: false,
        }
    }

    /// Returns the engine's tunables.
    #[must_use]
    pub const fn config(&self) -> IndexBarConfig {
        self.config
    }

    /// Returns the bar's orientation.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the underlying two-level line model.
    #[must_use]
    pub const fn line_model(&self) -> &LineModel {
        &self.line_model
    }

    /// Returns the current interaction state.
    #[must_use]
    pub const fn interaction_state(&self) -> &InteractionState {
        &self.state
    }

    /// Returns the injected frame scheduler.
    #[must_use]
    pub const fn scheduler(&self) -> &K {
        &self.scheduler
    }

    /// Returns the offset in the backing list of the last selected marker.
    #[must_use]
    pub const fn current_offset(&self) -> usize {
        self.current_offset
    }

    /// Returns the current zoom extent, in `[0, 1]`.
    #[must_use]
    pub fn zoom_extent(&self) -> f64 {
        self.state.zoom_extent()
    }

    /// Returns the sized top-level markers.
    #[must_use]
    pub fn top_markers(&self) -> &[SizedMarker] {
        &self.top_markers
    }

    /// Returns the inner markers while a zoom is live, `None` otherwise.
    #[must_use]
    pub fn inner_markers(&self) -> Option<&[SizedMarker]> {
        self.state.inner_markers()
    }

    /// Refetches the top-level markers from `source` and resets the gesture.
    ///
    /// Releases any pending frame callback.
    pub fn reload<D: IndexBarDataSource + ?Sized>(&mut self, source: &mut D) {
        let sized = Self::measure(source.top_level_markers(), source);
        let sizes: Vec<f64> = sized.iter().map(|m| m.extent).collect();
        self.line_model.set_outer_item_sizes(&sizes);
        self.top_markers = sized;
        self.go_ready();
    }

    /// Relayouts the bar for a new axis length, resetting the gesture.
    pub fn set_length(&mut self, length: f64) {
        if length != self.line_model.length() {
            self.line_model.set_length(length);
            self.go_ready();
        }
    }

    /// Returns the top-level marker index whose span contains `pos` on the
    /// selection axis, if any.
    #[must_use]
    pub fn top_index_at(&self, pos: f64) -> Option<usize> {
        self.line_model.outer().find_item(pos)
    }

    /// Returns the inner marker index whose fully-open span contains `pos`
    /// on the selection axis. `None` outside the run or when no zoom is open.
    #[must_use]
    pub fn inner_index_at(&self, pos: f64) -> Option<usize> {
        if self.line_model.zoom_geometry().is_none() {
            return None;
        }
        self.line_model.inner().find_item(pos)
    }

    /// Returns the top-level marker positions at the current zoom extent.
    #[must_use]
    pub fn outer_positions(&self) -> Vec<f64> {
        self.line_model.calculate_outer_positions(self.zoom_extent())
    }

    /// Returns the inner marker positions at the current zoom extent; empty
    /// when no zoom is live.
    #[must_use]
    pub fn inner_positions(&self) -> Vec<f64> {
        match self.state.inner_markers() {
            Some(_) => self.line_model.calculate_inner_positions(self.zoom_extent()),
            None => Vec::new(),
        }
    }

    /// Begins a gesture.
    ///
    /// Resolves the outer hit at the down position and moves to
    /// `DraggingTop`. A close animation still in flight is cut short and its
    /// frame callback released.
    ///
    /// Returns `true` if [`current_offset`](Self::current_offset) changed.
    pub fn pointer_down(&mut self, point: Point) -> bool {
        self.go_ready();
        let sc = self.orientation.selection_coord(point);
        let mut changed = false;
        if let Some(index) = self.top_index_at(sc)
            && let Some(marker) = self.top_markers.get(index)
        {
            let offset = marker.marker.offset;
            changed = self.update_offset(offset);
        }
        self.state = InteractionState::DraggingTop;
        changed
    }

    /// Tracks a pointer movement within a gesture.
    ///
    /// While dragging at the top level, a perpendicular pull away from the
    /// bar requests a zoom under the currently hit marker; `source` supplies
    /// the inner markers for it, at most once per top index per gesture. With
    /// fewer than two inner markers the zoom is refused and the drag stays at
    /// the top level.
    ///
    /// Returns `true` if [`current_offset`](Self::current_offset) changed.
    pub fn pointer_move<D: IndexBarDataSource + ?Sized>(
        &mut self,
        point: Point,
        source: &mut D,
    ) -> bool {
        let sc = self.orientation.selection_coord(point);
        let zc = self.orientation.zooming_coord(point);
        let pulled = (-zc / self.config.zoom_distance).clamp(0.0, 1.0);

        let mut changed = false;
        let state = mem::replace(&mut self.state, InteractionState::Ready);
        self.state = match state {
            InteractionState::DraggingTop => {
                if let Some(top_index) = self.top_index_at(sc) {
                    if zc < 0.0 {
                        InteractionState::UserDraggedToZoom { top_index }
                    } else {
                        if let Some(marker) = self.top_markers.get(top_index) {
                            let offset = marker.marker.offset;
                            changed = self.update_offset(offset);
                        }
                        InteractionState::DraggingTop
                    }
                } else {
                    InteractionState::DraggingTop
                }
            }
            InteractionState::Zooming {
                top_index, inner, ..
            } => {
                if pulled >= 1.0 {
                    // Snapped: pinned fully open until release.
                    InteractionState::DraggingInner { top_index, inner }
                } else if pulled <= 0.0 {
                    InteractionState::DraggingTop
                } else {
                    InteractionState::Zooming {
                        top_index,
                        inner,
                        extent: pulled,
                    }
                }
            }
            InteractionState::DraggingInner { top_index, inner } => {
                if let Some(index) = self.line_model.inner().find_item(sc)
                    && let Some(marker) = inner.get(index)
                {
                    changed = self.update_offset(marker.marker.offset);
                }
                InteractionState::DraggingInner { top_index, inner }
            }
            other => other,
        };

        if matches!(self.state, InteractionState::UserDraggedToZoom { .. }) {
            self.resolve_zoom_request(source);
        }
        changed
    }

    /// Ends a gesture.
    ///
    /// A live zoom animates shut from its current extent; anything else
    /// returns to `Ready` immediately. `now_ms` seeds the animation clock.
    pub fn pointer_up(&mut self, now_ms: u64) {
        let state = mem::replace(&mut self.state, InteractionState::Ready);
        match state {
            InteractionState::Zooming {
                top_index,
                inner,
                extent,
            } => {
                self.state = InteractionState::StartAnimatingShut {
                    from: extent,
                    top_index,
                    inner,
                };
                self.resolve_close_start(now_ms);
            }
            InteractionState::DraggingInner { top_index, inner } => {
                self.state = InteractionState::StartAnimatingShut {
                    from: 1.0,
                    top_index,
                    inner,
                };
                self.resolve_close_start(now_ms);
            }
            _ => self.go_ready(),
        }
    }

    /// Abandons the gesture, returning to `Ready` with no animation and
    /// releasing any pending frame callback.
    pub fn pointer_cancel(&mut self) {
        self.go_ready();
    }

    /// Programmatic equivalent of [`pointer_cancel`](Self::pointer_cancel):
    /// synchronously force the bar shut from any state.
    pub fn force_close(&mut self) {
        self.go_ready();
    }

    /// Advances the close animation to the frame at `now_ms`.
    ///
    /// The extent decays at the configured close speed; delayed or missed
    /// ticks stretch the animation but cannot corrupt it. On reaching zero
    /// the engine returns to `Ready` and stops the scheduler.
    ///
    /// Returns `true` while the animation continues.
    pub fn frame_tick(&mut self, now_ms: u64) -> bool {
        let InteractionState::AnimatingShut {
            extent,
            last_frame_time,
            ..
        } = &mut self.state
        else {
            return false;
        };
        let elapsed = now_ms.saturating_sub(*last_frame_time) as f64 / 1000.0;
        let new_extent = (*extent - self.config.close_speed * elapsed).max(0.0);
        if new_extent <= 0.0 {
            self.go_ready();
            false
        } else {
            *extent = new_extent;
            *last_frame_time = now_ms;
            true
        }
    }

    /// Resolves the transient `UserDraggedToZoom` state into `Zooming`, or
    /// refuses and falls back to `DraggingTop`.
    fn resolve_zoom_request<D: IndexBarDataSource + ?Sized>(&mut self, source: &mut D) {
        let InteractionState::UserDraggedToZoom { top_index } = self.state else {
            return;
        };
        let inner = self.inner_markers_for(top_index, source);
        if inner.len() < 2 {
            // Nothing meaningful to zoom into.
            self.state = InteractionState::DraggingTop;
            return;
        }
        let sizes: Vec<f64> = inner.iter().map(|m| m.extent).collect();
        self.line_model.set_inner_item_sizes(&sizes, top_index);
        self.state = InteractionState::Zooming {
            top_index,
            inner,
            extent: 0.0,
        };
    }

    /// Resolves the transient `StartAnimatingShut` state into
    /// `AnimatingShut`, or straight to `Ready` when there is nothing to
    /// animate.
    fn resolve_close_start(&mut self, now_ms: u64) {
        let InteractionState::StartAnimatingShut {
            from,
            top_index,
            inner,
        } = mem::replace(&mut self.state, InteractionState::Ready)
        else {
            return;
        };
        if from <= 0.0 {
            self.go_ready();
            return;
        }
        self.start_ticks();
        self.state = InteractionState::AnimatingShut {
            top_index,
            inner,
            extent: from,
            last_frame_time: now_ms,
        };
    }

    /// Fetches (or reuses) the inner markers under `top_index` for this
    /// gesture.
    fn inner_markers_for<D: IndexBarDataSource + ?Sized>(
        &mut self,
        top_index: usize,
        source: &mut D,
    ) -> Vec<SizedMarker> {
        if let Some((_, cached)) = self.fetched.iter().find(|(i, _)| *i == top_index) {
            return cached.clone();
        }
        let Some(top) = self.top_markers.get(top_index) else {
            return Vec::new();
        };
        let start = top.marker.offset;
        let end = self
            .top_markers
            .get(top_index + 1)
            .map(|next| next.marker.offset);
        let sized = Self::measure(source.markers_between(start, end), source);
        self.fetched.push((top_index, sized.clone()));
        sized
    }

    /// Attaches measured extents to a batch of markers.
    fn measure<D: IndexBarDataSource + ?Sized>(
        markers: Vec<crate::Marker>,
        source: &mut D,
    ) -> Vec<SizedMarker> {
        markers
            .into_iter()
            .map(|marker| {
                let extent = source.marker_extent(&marker);
                SizedMarker { marker, extent }
            })
            .collect()
    }

    /// Publishes a newly resolved offset; edge-triggered.
    fn update_offset(&mut self, offset: usize) -> bool {
        if offset != self.current_offset {
            self.current_offset = offset;
            true
        } else {
            false
        }
    }

    /// Returns to `Ready`, releasing the frame callback and all
    /// gesture-scoped data.
    fn go_ready(&mut self) {
        self.stop_ticks();
        self.line_model.clear_zoom();
        self.fetched.clear();
        self.state = InteractionState::Ready;
    }

    fn start_ticks(&mut self) {
        // One registration at a time; re-entry reuses the running one.
        if !self.ticking {
            self.scheduler.start();
            self.ticking = true;
        }
    }

    fn stop_ticks(&mut self) {
        if self.ticking {
            self.scheduler.stop();
            self.ticking = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use kurbo::Point;

    use super::{IndexBar, IndexBarConfig, Orientation};
    use crate::{FrameScheduler, IndexBarDataSource, InteractionState, Marker};

    /// A backing list with top-level markers A (offset 0), M (50), S (80)
    /// and a handful of second-level markers between them.
    struct TestSource {
        all: Vec<Marker>,
        top: Vec<Marker>,
        fetches: Vec<(usize, Option<usize>)>,
    }

    impl TestSource {
        fn alphabetish() -> Self {
            let all = vec![
                Marker::new("A", 0),
                Marker::new("C", 5),
                Marker::new("H", 20),
                Marker::new("M", 50),
                Marker::new("N", 55),
                Marker::new("O", 60),
                Marker::new("R", 70),
                Marker::new("S", 80),
                Marker::new("T", 85),
            ];
            let top = vec![Marker::new("A", 0), Marker::new("M", 50), Marker::new("S", 80)];
            Self {
                all,
                top,
                fetches: Vec::new(),
            }
        }

        /// A source whose top markers have nothing else between them.
        fn sparse() -> Self {
            let top = vec![Marker::new("A", 0), Marker::new("M", 50), Marker::new("S", 80)];
            Self {
                all: top.clone(),
                top,
                fetches: Vec::new(),
            }
        }
    }

    impl IndexBarDataSource for TestSource {
        fn top_level_markers(&mut self) -> Vec<Marker> {
            self.top.clone()
        }

        fn markers_between(&mut self, start: usize, end: Option<usize>) -> Vec<Marker> {
            self.fetches.push((start, end));
            self.all
                .iter()
                .filter(|m| m.offset >= start && end.is_none_or(|e| m.offset < e))
                .cloned()
                .collect()
        }

        fn marker_extent(&mut self, _marker: &Marker) -> f64 {
            8.0
        }
    }

    #[derive(Default)]
    struct CountingScheduler {
        starts: usize,
        stops: usize,
    }

    impl FrameScheduler for CountingScheduler {
        fn start(&mut self) {
            self.starts += 1;
        }

        fn stop(&mut self) {
            self.stops += 1;
        }
    }

    /// A 100-unit horizontal bar over the alphabetish source. The three top
    /// markers (extent 8, margin 10) sit at midpoints [32, 50, 68].
    fn bar_and_source() -> (IndexBar<CountingScheduler>, TestSource) {
        let mut source = TestSource::alphabetish();
        let mut bar = IndexBar::new(
            100.0,
            Orientation::Horizontal,
            IndexBarConfig::default(),
            CountingScheduler::default(),
        );
        bar.reload(&mut source);
        (bar, source)
    }

    #[test]
    fn reload_measures_and_lays_out_top_markers() {
        let (bar, _) = bar_and_source();
        assert_eq!(bar.top_markers().len(), 3);
        assert_eq!(bar.outer_positions(), [32.0, 50.0, 68.0]);
        assert_eq!(bar.interaction_state(), &InteractionState::Ready);
    }

    #[test]
    fn pointer_down_resolves_the_outer_hit() {
        let (mut bar, _) = bar_and_source();
        let changed = bar.pointer_down(Point::new(50.0, 5.0));
        assert!(changed);
        assert_eq!(bar.current_offset(), 50);
        assert_eq!(bar.interaction_state(), &InteractionState::DraggingTop);
    }

    #[test]
    fn pointer_down_outside_the_run_leaves_the_offset_alone() {
        let (mut bar, _) = bar_and_source();
        // The run covers [28, 72]; 5.0 is outside it.
        let changed = bar.pointer_down(Point::new(5.0, 5.0));
        assert!(!changed);
        assert_eq!(bar.current_offset(), 0);
        assert_eq!(bar.interaction_state(), &InteractionState::DraggingTop);
    }

    #[test]
    fn offset_publication_is_edge_triggered() {
        let (mut bar, mut source) = bar_and_source();
        assert!(bar.pointer_down(Point::new(50.0, 5.0)));
        // Two more hits on the same marker publish nothing.
        assert!(!bar.pointer_move(Point::new(50.0, 4.0), &mut source));
        assert!(!bar.pointer_move(Point::new(51.0, 3.0), &mut source));
        // Sliding onto the next marker publishes exactly once.
        assert!(bar.pointer_move(Point::new(68.0, 3.0), &mut source));
        assert_eq!(bar.current_offset(), 80);
    }

    #[test]
    fn pulling_away_opens_a_zoom_under_the_hit_marker() {
        let (mut bar, mut source) = bar_and_source();
        bar.pointer_down(Point::new(50.0, 5.0));
        bar.pointer_move(Point::new(50.0, -1.0), &mut source);
        match bar.interaction_state() {
            InteractionState::Zooming {
                top_index,
                inner,
                extent,
            } => {
                assert_eq!(*top_index, 1);
                // M, N, O, R — everything in 50..80.
                assert_eq!(inner.len(), 4);
                assert_eq!(*extent, 0.0);
            }
            other => panic!("expected Zooming, got {other:?}"),
        }
        assert_eq!(source.fetches, [(50, Some(80))]);
        assert!(bar.line_model().zoom_geometry().is_some());
    }

    #[test]
    fn zoom_under_the_last_marker_is_open_ended() {
        let (mut bar, mut source) = bar_and_source();
        bar.pointer_down(Point::new(68.0, 5.0));
        bar.pointer_move(Point::new(68.0, -1.0), &mut source);
        assert!(matches!(
            bar.interaction_state(),
            InteractionState::Zooming { top_index: 2, .. }
        ));
        assert_eq!(source.fetches, [(80, None)]);
    }

    #[test]
    fn zoom_extent_tracks_the_perpendicular_pull() {
        let (mut bar, mut source) = bar_and_source();
        bar.pointer_down(Point::new(50.0, 5.0));
        bar.pointer_move(Point::new(50.0, -1.0), &mut source);
        bar.pointer_move(Point::new(50.0, -12.5), &mut source);
        assert_eq!(bar.zoom_extent(), 0.5);
        // All inner items emerge from the opened boundary...
        let emerging = bar.inner_positions();
        assert_eq!(emerging.len(), 4);
        // ...and the pull is clamped to full extent.
        bar.pointer_move(Point::new(50.0, -80.0), &mut source);
        assert_eq!(bar.zoom_extent(), 1.0);
        assert!(matches!(
            bar.interaction_state(),
            InteractionState::DraggingInner { .. }
        ));
    }

    #[test]
    fn snapped_zoom_stays_open_on_small_retreats() {
        let (mut bar, mut source) = bar_and_source();
        bar.pointer_down(Point::new(50.0, 5.0));
        bar.pointer_move(Point::new(50.0, -30.0), &mut source);
        assert!(matches!(
            bar.interaction_state(),
            InteractionState::DraggingInner { .. }
        ));
        // Retreating to half the zoom distance no longer shrinks the zoom.
        bar.pointer_move(Point::new(50.0, -12.5), &mut source);
        assert_eq!(bar.zoom_extent(), 1.0);
        assert!(matches!(
            bar.interaction_state(),
            InteractionState::DraggingInner { .. }
        ));
    }

    #[test]
    fn dragging_inner_selects_inner_offsets() {
        let (mut bar, mut source) = bar_and_source();
        bar.pointer_down(Point::new(50.0, 5.0));
        bar.pointer_move(Point::new(50.0, -30.0), &mut source);
        // Fully open inner run [M, N, O, R] has midpoints [32, 50, 68, 86].
        assert_eq!(bar.inner_positions(), [32.0, 50.0, 68.0, 86.0]);
        let changed = bar.pointer_move(Point::new(68.0, -30.0), &mut source);
        assert!(changed);
        assert_eq!(bar.current_offset(), 60);
        // Hitting the same inner marker again publishes nothing.
        assert!(!bar.pointer_move(Point::new(67.0, -30.0), &mut source));
    }

    #[test]
    fn returning_to_the_bar_falls_back_to_the_top_level() {
        let (mut bar, mut source) = bar_and_source();
        bar.pointer_down(Point::new(50.0, 5.0));
        bar.pointer_move(Point::new(50.0, -12.5), &mut source);
        assert!(matches!(
            bar.interaction_state(),
            InteractionState::Zooming { .. }
        ));
        bar.pointer_move(Point::new(50.0, 0.0), &mut source);
        assert_eq!(bar.interaction_state(), &InteractionState::DraggingTop);
    }

    #[test]
    fn inner_markers_are_fetched_once_per_top_index_per_gesture() {
        let (mut bar, mut source) = bar_and_source();
        bar.pointer_down(Point::new(50.0, 5.0));
        bar.pointer_move(Point::new(50.0, -5.0), &mut source);
        bar.pointer_move(Point::new(50.0, 0.0), &mut source);
        bar.pointer_move(Point::new(50.0, -5.0), &mut source);
        assert_eq!(source.fetches.len(), 1, "second open reuses the fetch");

        // A fresh gesture fetches anew.
        bar.pointer_up(0);
        bar.pointer_down(Point::new(50.0, 5.0));
        bar.pointer_move(Point::new(50.0, -5.0), &mut source);
        assert_eq!(source.fetches.len(), 2);
    }

    #[test]
    fn a_zoom_with_too_few_inner_markers_is_refused() {
        let mut source = TestSource::sparse();
        let mut bar = IndexBar::new(
            100.0,
            Orientation::Horizontal,
            IndexBarConfig::default(),
            CountingScheduler::default(),
        );
        bar.reload(&mut source);
        bar.pointer_down(Point::new(50.0, 5.0));
        bar.pointer_move(Point::new(50.0, -12.5), &mut source);
        // Only M itself lies in 50..80: refused, still dragging the top.
        assert_eq!(source.fetches.len(), 1);
        assert_eq!(bar.interaction_state(), &InteractionState::DraggingTop);
        assert_eq!(bar.zoom_extent(), 0.0);
        assert!(bar.inner_markers().is_none());
    }

    #[test]
    fn release_mid_zoom_animates_shut() {
        let (mut bar, mut source) = bar_and_source();
        bar.pointer_down(Point::new(50.0, 5.0));
        bar.pointer_move(Point::new(50.0, -17.5), &mut source);
        assert_eq!(bar.zoom_extent(), 0.7);

        bar.pointer_up(1_000);
        assert!(matches!(
            bar.interaction_state(),
            InteractionState::AnimatingShut { .. }
        ));
        assert_eq!(bar.scheduler().starts, 1);

        // 100ms at 3.5 extent/s closes by 0.35.
        assert!(bar.frame_tick(1_100));
        assert!((bar.zoom_extent() - 0.35).abs() < 1e-12);

        // The next tick would overshoot; the extent floors at zero and the
        // callback is released.
        assert!(!bar.frame_tick(1_400));
        assert_eq!(bar.interaction_state(), &InteractionState::Ready);
        assert_eq!(bar.scheduler().stops, 1);
        assert!(bar.line_model().zoom_geometry().is_none());
    }

    #[test]
    fn release_when_fully_open_animates_from_one() {
        let (mut bar, mut source) = bar_and_source();
        bar.pointer_down(Point::new(50.0, 5.0));
        bar.pointer_move(Point::new(50.0, -30.0), &mut source);
        bar.pointer_up(0);
        match bar.interaction_state() {
            InteractionState::AnimatingShut { extent, .. } => assert_eq!(*extent, 1.0),
            other => panic!("expected AnimatingShut, got {other:?}"),
        }
    }

    #[test]
    fn release_at_extent_zero_needs_no_animation() {
        let (mut bar, mut source) = bar_and_source();
        bar.pointer_down(Point::new(50.0, 5.0));
        bar.pointer_move(Point::new(50.0, -1.0), &mut source);
        // Still in Zooming, but the extent never left zero.
        bar.pointer_up(0);
        assert_eq!(bar.interaction_state(), &InteractionState::Ready);
        assert_eq!(bar.scheduler().starts, 0);
    }

    #[test]
    fn plain_release_returns_to_ready() {
        let (mut bar, mut source) = bar_and_source();
        bar.pointer_down(Point::new(50.0, 5.0));
        bar.pointer_move(Point::new(51.0, 2.0), &mut source);
        bar.pointer_up(0);
        assert_eq!(bar.interaction_state(), &InteractionState::Ready);
        assert_eq!(bar.scheduler().starts, 0);
    }

    #[test]
    fn cancel_resets_synchronously_from_any_state() {
        let (mut bar, mut source) = bar_and_source();
        bar.pointer_down(Point::new(50.0, 5.0));
        bar.pointer_move(Point::new(50.0, -30.0), &mut source);
        bar.pointer_up(1_000);
        assert_eq!(bar.scheduler().starts, 1);

        bar.pointer_cancel();
        assert_eq!(bar.interaction_state(), &InteractionState::Ready);
        assert_eq!(bar.scheduler().stops, 1, "the callback is released once");
        assert!(!bar.frame_tick(2_000), "no animation survives a cancel");
    }

    #[test]
    fn a_new_touch_cuts_a_running_close_short() {
        let (mut bar, mut source) = bar_and_source();
        bar.pointer_down(Point::new(50.0, 5.0));
        bar.pointer_move(Point::new(50.0, -30.0), &mut source);
        bar.pointer_up(1_000);
        assert!(bar.frame_tick(1_050));

        bar.pointer_down(Point::new(32.0, 5.0));
        assert_eq!(bar.interaction_state(), &InteractionState::DraggingTop);
        assert_eq!(bar.scheduler().stops, 1);
        assert_eq!(bar.zoom_extent(), 0.0);
    }

    #[test]
    fn delayed_ticks_only_stretch_the_animation() {
        let (mut bar, mut source) = bar_and_source();
        bar.pointer_down(Point::new(50.0, 5.0));
        bar.pointer_move(Point::new(50.0, -30.0), &mut source);
        bar.pointer_up(0);

        // A tick with no elapsed time changes nothing.
        assert!(bar.frame_tick(0));
        assert_eq!(bar.zoom_extent(), 1.0);
        // A long stall closes at most to the floor.
        assert!(!bar.frame_tick(10_000));
        assert_eq!(bar.interaction_state(), &InteractionState::Ready);
    }

    #[test]
    fn hit_test_entry_points_match_the_layout() {
        let (mut bar, mut source) = bar_and_source();
        assert_eq!(bar.top_index_at(32.0), Some(0));
        assert_eq!(bar.top_index_at(68.0), Some(2));
        assert_eq!(bar.top_index_at(5.0), None);
        // Inner hits only resolve while a zoom is open.
        assert_eq!(bar.inner_index_at(50.0), None);
        bar.pointer_down(Point::new(50.0, 5.0));
        bar.pointer_move(Point::new(50.0, -30.0), &mut source);
        assert_eq!(bar.inner_index_at(50.0), Some(1));
    }

    #[test]
    fn relayout_resets_the_gesture() {
        let (mut bar, mut source) = bar_and_source();
        bar.pointer_down(Point::new(50.0, 5.0));
        bar.pointer_move(Point::new(50.0, -12.5), &mut source);
        bar.set_length(120.0);
        assert_eq!(bar.interaction_state(), &InteractionState::Ready);
        assert_eq!(bar.line_model().length(), 120.0);
        // An unchanged length is a no-op.
        bar.pointer_down(Point::new(60.0, 5.0));
        bar.set_length(120.0);
        assert_eq!(bar.interaction_state(), &InteractionState::DraggingTop);
    }

    #[test]
    fn vertical_bars_decompose_the_axes_the_other_way() {
        let mut source = TestSource::alphabetish();
        let mut bar = IndexBar::new(
            100.0,
            Orientation::Vertical,
            IndexBarConfig::default(),
            CountingScheduler::default(),
        );
        bar.reload(&mut source);
        assert!(bar.pointer_down(Point::new(0.0, 50.0)));
        assert_eq!(bar.current_offset(), 50);
        // Pulling left of a vertical bar zooms.
        bar.pointer_move(Point::new(-12.5, 50.0), &mut source);
        assert!(matches!(
            bar.interaction_state(),
            InteractionState::Zooming { .. }
        ));
        bar.pointer_move(Point::new(-12.5, 50.0), &mut source);
        assert_eq!(bar.zoom_extent(), 0.5);
    }
}
