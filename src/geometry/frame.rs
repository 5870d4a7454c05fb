// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Attachment-point rings for the base and moving frames
//!
//! A frame places its six actuator attachment points on a circle in the local
//! XY plane. Point `i` sits at `phase_offset + 120 * i` degrees, so the ring
//! wraps twice and points `i` and `i + 3` coincide. A regular hexagon would
//! step by 60 degrees; the 120 degree step is kept as-is because leg pairing
//! downstream depends on this exact ordering.

use crate::error::{PlatformError, PlatformResult};
use crate::plot::Plotter;
use crate::utils::{point_on_circle, polar_angle_degrees};
use anyhow::Result;
use nalgebra::{Point2, Point3};
use serde::Serialize;

/// Number of attachment points (and legs) on every frame
pub const ATTACHMENT_COUNT: usize = 6;

/// Angular step between consecutive attachment points, in degrees
pub const ATTACHMENT_STEP_DEG: f64 = 120.0;

/// Anything that exposes an ordered ring of attachment points.
///
/// Index order is meaningful: point `i` is where leg `i` attaches.
pub trait FrameLike {
    fn attachment_points(&self) -> &[Point3<f64>];

    /// Points projected onto the local XY plane (z dropped)
    fn projected_points(&self) -> Vec<Point2<f64>> {
        self.attachment_points()
            .iter()
            .map(|p| Point2::new(p.x, p.y))
            .collect()
    }

    /// Hand the projected points to a plotter under the given title
    fn plot_as(&self, title: &str, plotter: &mut dyn Plotter) -> Result<()> {
        plotter.scatter(title, &self.projected_points())
    }
}

/// Frame geometry: six attachment points on a ring of fixed radius
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    radius: f64,
    phase_offset: f64,
    attachment_points: [Point3<f64>; ATTACHMENT_COUNT],
}

impl Frame {
    /// Build a frame from a radius and a starting angle in degrees.
    ///
    /// A zero radius is accepted and collapses every point onto the origin.
    pub fn new(radius: f64, phase_offset: f64) -> Self {
        let attachment_points = std::array::from_fn(|i| {
            point_on_circle(radius, phase_offset + ATTACHMENT_STEP_DEG * i as f64)
        });

        Self {
            radius,
            phase_offset,
            attachment_points,
        }
    }

    /// Build a frame from untrusted input, rejecting non-finite values and
    /// negative radii.
    pub fn try_new(radius: f64, phase_offset: f64) -> PlatformResult<Self> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(PlatformError::invalid_argument(
                "radius",
                format!("expected a finite, non-negative radius, got {radius}"),
            ));
        }
        if !phase_offset.is_finite() {
            return Err(PlatformError::invalid_argument(
                "phase_offset",
                format!("expected a finite angle, got {phase_offset}"),
            ));
        }
        Ok(Self::new(radius, phase_offset))
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Starting angle of point 0, in degrees
    pub fn phase_offset(&self) -> f64 {
        self.phase_offset
    }

    pub fn attachment_points(&self) -> &[Point3<f64>; ATTACHMENT_COUNT] {
        &self.attachment_points
    }

    /// Polar angle of every attachment point, in degrees within [0, 360)
    pub fn attachment_angles(&self) -> [f64; ATTACHMENT_COUNT] {
        std::array::from_fn(|i| polar_angle_degrees(&self.attachment_points[i]))
    }

    /// Short human-readable label used as a plot title
    pub fn label(&self) -> String {
        format!("frame r={} phase={}", self.radius, self.phase_offset)
    }

    /// Scatter the projected attachment points. Does not modify the frame.
    pub fn plot(&self, plotter: &mut dyn Plotter) -> Result<()> {
        self.plot_as(&self.label(), plotter)
    }
}

impl FrameLike for Frame {
    fn attachment_points(&self) -> &[Point3<f64>] {
        &self.attachment_points
    }
}

impl FrameLike for Vec<Point3<f64>> {
    fn attachment_points(&self) -> &[Point3<f64>] {
        self
    }
}

impl FrameLike for [Point3<f64>] {
    fn attachment_points(&self) -> &[Point3<f64>] {
        self
    }
}

impl<T: FrameLike + ?Sized> FrameLike for &T {
    fn attachment_points(&self) -> &[Point3<f64>] {
        (**self).attachment_points()
    }
}
