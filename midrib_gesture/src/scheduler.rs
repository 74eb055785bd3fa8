// Copyright 2026 the Midrib Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The injectable per-frame callback service driving the close animation.

/// A host-provided per-frame callback registration (a display-link or
/// requestAnimationFrame style timer).
///
/// The interaction engine owns at most one registration at a time: it calls
/// [`start`](Self::start) on entering the closing animation and
/// [`stop`](Self::stop) exactly once on leaving it, by whichever path.
/// While started, the host is expected to call
/// [`IndexBar::frame_tick`](crate::IndexBar::frame_tick) once per display
/// frame with the current timestamp.
///
/// Abstracting the display clock this way keeps the engine testable: tests
/// drive [`frame_tick`](crate::IndexBar::frame_tick) with synthetic
/// timestamps and no real timer ever runs.
pub trait FrameScheduler {
    /// Begin delivering per-frame ticks to the engine.
    fn start(&mut self);
    /// Stop delivering per-frame ticks.
    fn stop(&mut self);
}

/// A [`FrameScheduler`] that merely records whether ticks are wanted.
///
/// Suitable for hosts with their own frame loop (they poll
/// [`is_running`](Self::is_running) each frame) and for tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ManualFrameScheduler {
    running: bool,
}

impl ManualFrameScheduler {
    /// Returns `true` while the engine wants per-frame ticks.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }
}

impl FrameScheduler for ManualFrameScheduler {
    fn start(&mut self) {
        self.running = true;
    }

    fn stop(&mut self) {
        self.running = false;
    }
}
