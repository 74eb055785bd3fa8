// Copyright 2026 the Midrib Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=midrib_line --heading-base-level=0

//! Midrib Line: 1D marker layout and zoom interpolation.
//!
//! This crate is the geometry core of an index bar: a narrow strip of short
//! labels (for example alphabet letters) that lets a user jump within a long
//! list. It positions a run of fixed-size items along a one-dimensional axis
//! and interpolates between a coarse, always-visible *outer* set of items and
//! a denser *inner* set revealed while the user zooms in under one outer item.
//!
//! The core concepts are:
//!
//! - [`Line`]: positions a sequence of item sizes along an axis of a given
//!   length, with margin-bounded gaps and a uniform shift (*delta*). All of
//!   its derived values (item midpoints, run start/end, extent) are a pure
//!   function of its inputs and are recomputed in full on every mutation.
//! - [`LineModel`]: owns two [`Line`]s — outer and inner — plus the affine
//!   [`ZoomGeometry`] (origin, scale, offset) that spreads the outer items
//!   apart and makes the inner items emerge as a single scalar *zoom extent*
//!   varies from 0 to 1.
//!
//! This crate deliberately does **not** know about widgets, text measurement,
//! or any particular UI framework. Host frameworks are responsible for:
//!
//! - Measuring label extents along the selection axis and feeding them in via
//!   [`LineModel::set_outer_item_sizes`] / [`LineModel::set_inner_item_sizes`].
//! - Driving the zoom extent from pointer input (see the `midrib_gesture`
//!   crate) and asking the model for interpolated positions each frame.
//! - Drawing labels at the returned positions.
//!
//! ## Minimal example
//!
//! ```rust
//! use midrib_line::LineModel;
//!
//! // A 100-unit bar with three outer labels of measured extents 8, 6, and 8.
//! let mut model = LineModel::new(100.0, 10.0);
//! model.set_outer_item_sizes(&[8.0, 6.0, 8.0]);
//!
//! // With no zoom open, positions are just the outer midpoints.
//! let at_rest = model.calculate_outer_positions(0.0);
//! assert_eq!(at_rest.len(), 3);
//!
//! // Open five inner labels underneath outer item 1 and interpolate.
//! model.set_inner_item_sizes(&[6.0, 6.0, 6.0, 6.0, 6.0], 1);
//! let halfway = model.calculate_inner_positions(0.5);
//! assert_eq!(halfway.len(), 5);
//! ```
//!
//! All extents and positions live in a caller-chosen 1D coordinate space
//! (typically logical pixels) and are expected to be finite.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod line;
mod line_model;

pub use line::Line;
pub use line_model::{LineModel, ZoomGeometry};
