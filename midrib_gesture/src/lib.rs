// Copyright 2026 the Midrib Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=midrib_gesture --heading-base-level=0

//! Midrib Gesture: a renderer-agnostic interaction engine for zoomable index
//! bars.
//!
//! An index bar is the strip of section markers along the edge of a long
//! list; dragging along it jumps through the list, and pulling the pointer
//! away from the bar zooms in on the second-level markers under the touched
//! one. This crate owns the gesture state machine, the marker data pull
//! interface, and the close animation; [`midrib_line`] supplies the
//! geometry. Rendering, hosting, and event delivery belong to the embedding
//! toolkit.
//!
//! ```rust
//! use kurbo::Point;
//! use midrib_gesture::{
//!     IndexBar, IndexBarConfig, IndexBarDataSource, ManualFrameScheduler, Marker, Orientation,
//! };
//!
//! struct Contacts;
//!
//! impl IndexBarDataSource for Contacts {
//!     fn top_level_markers(&mut self) -> Vec<Marker> {
//!         vec![Marker::new("A", 0), Marker::new("M", 40), Marker::new("S", 90)]
//!     }
//!     fn markers_between(&mut self, start: usize, _end: Option<usize>) -> Vec<Marker> {
//!         vec![Marker::new("M", 40), Marker::new("N", 55)]
//!     }
//!     fn marker_extent(&mut self, _marker: &Marker) -> f64 {
//!         12.0
//!     }
//! }
//!
//! let mut bar = IndexBar::new(
//!     240.0,
//!     Orientation::Vertical,
//!     IndexBarConfig::default(),
//!     ManualFrameScheduler::default(),
//! );
//! bar.reload(&mut Contacts);
//! // The three markers sit at [98, 120, 142] along the 240-unit axis.
//! let changed = bar.pointer_down(Point::new(0.0, 120.0));
//! assert!(changed);
//! assert_eq!(bar.current_offset(), 40);
//! ```
//!
//! Timestamps fed to [`IndexBar::pointer_up`] and [`IndexBar::frame_tick`]
//! are milliseconds on a monotonic, caller-chosen clock.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod bar;
mod marker;
mod scheduler;
mod state;

pub use bar::{IndexBar, IndexBarConfig, Orientation};
pub use marker::{IndexBarDataSource, Marker, SizedMarker};
pub use scheduler::{FrameScheduler, ManualFrameScheduler};
pub use state::InteractionState;
