// Copyright 2026 the Midrib Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Driving an index bar over a sorted word list with a synthetic gesture.
//!
//! This example shows how to combine:
//! - `midrib_gesture` for the pointer state machine and data pull interface,
//! - `midrib_line` for the marker layout read back at each step,
//! - a `ManualFrameScheduler` polled from the host's own frame loop.
//!
//! Run:
//! - `cargo run -p midrib_demos --example alphabet_jump`

use kurbo::Point;
use midrib_gesture::{
    IndexBar, IndexBarConfig, IndexBarDataSource, ManualFrameScheduler, Marker, Orientation,
};

/// A sorted list of names, indexed by an alphabet bar.
///
/// Top-level markers are the distinct first letters; the second-level markers
/// under a letter are its distinct two-letter prefixes.
struct Names {
    words: Vec<&'static str>,
}

impl Names {
    fn new() -> Self {
        Self {
            words: vec![
                "Alder", "Aspen", "Beech", "Birch", "Cedar", "Cherry", "Chestnut", "Elm",
                "Fir", "Hawthorn", "Hazel", "Holly", "Hornbeam", "Juniper", "Larch", "Linden",
                "Maple", "Oak", "Pine", "Poplar", "Rowan", "Spruce", "Sycamore", "Walnut",
                "Willow", "Yew",
            ],
        }
    }

    /// First offset of each distinct prefix of the given length within `range`.
    fn prefix_markers(&self, len: usize, range: std::ops::Range<usize>) -> Vec<Marker> {
        let mut markers: Vec<Marker> = Vec::new();
        for (offset, word) in self.words[range.clone()].iter().enumerate() {
            let prefix = &word[..len.min(word.len())];
            if markers.last().is_none_or(|m| m.label != prefix) {
                markers.push(Marker::new(prefix, range.start + offset));
            }
        }
        markers
    }
}

impl IndexBarDataSource for Names {
    fn top_level_markers(&mut self) -> Vec<Marker> {
        self.prefix_markers(1, 0..self.words.len())
    }

    fn markers_between(&mut self, start: usize, end: Option<usize>) -> Vec<Marker> {
        self.prefix_markers(2, start..end.unwrap_or(self.words.len()))
    }

    fn marker_extent(&mut self, marker: &Marker) -> f64 {
        // A stand-in for real text measurement.
        7.0 * marker.label.len() as f64
    }
}

fn main() {
    let mut names = Names::new();
    let mut bar = IndexBar::new(
        300.0,
        Orientation::Vertical,
        IndexBarConfig::default(),
        ManualFrameScheduler::default(),
    );
    bar.reload(&mut names);

    println!("== Top-level layout ==");
    for (marker, pos) in bar.top_markers().iter().zip(bar.outer_positions()) {
        println!("  {:>2} at {:6.2} -> offset {}", marker.marker.label, pos, marker.marker.offset);
    }

    // Touch down on the bar next to "H" and slide a little.
    let h_pos = bar.outer_positions()[bar
        .top_markers()
        .iter()
        .position(|m| m.marker.label == "H")
        .expect("H is a top-level marker")];
    println!("\n== Touch down at y={h_pos:.2} ==");
    if bar.pointer_down(Point::new(0.0, h_pos)) {
        println!("  jumped to offset {}", bar.current_offset());
    }

    // Pull left, away from the bar, to open the zoom in a few steps.
    println!("\n== Pulling away to zoom ==");
    for x in [-5.0, -12.5, -25.0] {
        bar.pointer_move(Point::new(x, h_pos), &mut names);
        println!("  x={x:6.1}  extent={:.2}", bar.zoom_extent());
    }
    if let Some(inner) = bar.inner_markers() {
        println!("  fully open:");
        for (marker, pos) in inner.iter().zip(bar.inner_positions()) {
            println!("    {:>2} at {:6.2} -> offset {}", marker.marker.label, pos, marker.marker.offset);
        }
    }

    // Slide along the fully open bar to pick a two-letter prefix.
    println!("\n== Selecting among the inner markers ==");
    let targets = bar.inner_positions();
    for &pos in &targets {
        if bar.pointer_move(Point::new(-25.0, pos), &mut names) {
            println!("  y={pos:6.2}  jumped to offset {}", bar.current_offset());
        }
    }

    // Release and let the bar animate shut on a synthetic 60fps clock.
    println!("\n== Release ==");
    let mut now_ms = 0_u64;
    bar.pointer_up(now_ms);
    while bar.scheduler().is_running() {
        now_ms += 16;
        bar.frame_tick(now_ms);
        println!("  t={now_ms:3}ms  extent={:.3}", bar.zoom_extent());
    }
    println!("\nSettled at offset {} ({}).", bar.current_offset(), names.words[bar.current_offset()]);
}
