// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Plot collaborators for attachment-point scatters
//!
//! Geometry never renders on its own; frames and platforms hand their
//! projected points to a [`Plotter`] supplied by the caller.

mod ascii;
mod png;

pub use ascii::AsciiPlotter;
pub use png::PngPlotter;

use anyhow::Result;
use nalgebra::Point2;

/// Receives 2D scatters of attachment points
pub trait Plotter {
    fn scatter(&mut self, title: &str, points: &[Point2<f64>]) -> Result<()>;
}

/// Plotter that keeps every scatter in memory
#[derive(Debug, Default, Clone)]
pub struct RecordingPlotter {
    pub scatters: Vec<(String, Vec<Point2<f64>>)>,
}

impl Plotter for RecordingPlotter {
    fn scatter(&mut self, title: &str, points: &[Point2<f64>]) -> Result<()> {
        self.scatters.push((title.to_string(), points.to_vec()));
        Ok(())
    }
}

/// Half-width of a square view centred on the origin that holds every point
pub(crate) fn symmetric_extent(points: &[Point2<f64>]) -> f64 {
    let extent = points
        .iter()
        .map(|p| p.x.abs().max(p.y.abs()))
        .fold(0.0_f64, f64::max);
    // Keep a degenerate ring (all points at the origin) drawable
    if extent > 1e-9 {
        extent * 1.1
    } else {
        1.0
    }
}
