// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Stewart platform assembly
//!
//! Pairs base and moving attachment points by index and builds one leg per
//! pair. The moving frame is placed in the world frame by a pure translation;
//! the orientation angles are carried but not applied.

use super::bbox::BoundingBox;
use super::frame::{Frame, FrameLike, ATTACHMENT_COUNT};
use super::leg::Leg;
use crate::error::{PlatformError, PlatformResult};
use crate::plot::Plotter;
use anyhow::Result;
use nalgebra::{Point3, Vector3};
use serde::Serialize;
use tracing::{debug, info};

/// Offset of the moving-frame centroid from the base centroid (East-North-Up)
pub fn default_centroid_offset() -> Vector3<f64> {
    Vector3::new(0.0, 0.0, 1.0)
}

/// Orientation of the moving frame relative to the base, in degrees.
///
/// Reserved: always zero and not used by any geometry yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Orientation {
    pub pitch_angle: f64,
    pub bank_angle: f64,
    pub yaw_angle: f64,
}

/// Fixed base, moving frame and the six legs between them
#[derive(Debug, Clone, Serialize)]
pub struct Platform<F = Frame> {
    base_frame: F,
    moving_frame: F,
    centroid_offset: Vector3<f64>,
    orientation: Orientation,
    legs: [Leg; ATTACHMENT_COUNT],
}

impl<F: FrameLike> Platform<F> {
    /// Assemble a platform with the default centroid offset of (0, 0, 1).
    ///
    /// Fails with [`PlatformError::InvalidArgument`] when either frame does
    /// not expose exactly six finite attachment points.
    pub fn new(base_frame: F, moving_frame: F) -> PlatformResult<Self> {
        Self::with_centroid_offset(base_frame, moving_frame, default_centroid_offset())
    }

    /// Assemble a platform with an arbitrary translation of the moving frame
    pub fn with_centroid_offset(
        base_frame: F,
        moving_frame: F,
        centroid_offset: Vector3<f64>,
    ) -> PlatformResult<Self> {
        info!("creating stewart platform");

        let base_points = checked_points(&base_frame, "base_frame")?;
        let moving_points = checked_points(&moving_frame, "moving_frame")?;
        if !centroid_offset.iter().all(|c| c.is_finite()) {
            return Err(PlatformError::invalid_argument(
                "centroid_offset",
                "offset components must be finite",
            ));
        }

        let legs = std::array::from_fn(|i| {
            let leg = Leg::new(base_points[i], moving_points[i] + centroid_offset);
            debug!(leg = i, length = leg.length, "leg assembled");
            leg
        });

        Ok(Self {
            base_frame,
            moving_frame,
            centroid_offset,
            orientation: Orientation::default(),
            legs,
        })
    }

    pub fn base_frame(&self) -> &F {
        &self.base_frame
    }

    pub fn moving_frame(&self) -> &F {
        &self.moving_frame
    }

    pub fn centroid_offset(&self) -> Vector3<f64> {
        self.centroid_offset
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn legs(&self) -> &[Leg; ATTACHMENT_COUNT] {
        &self.legs
    }

    pub fn leg_lengths(&self) -> [f64; ATTACHMENT_COUNT] {
        self.legs.map(|leg| leg.length)
    }

    /// Base attachment points in the world frame
    pub fn base_positions(&self) -> [Point3<f64>; ATTACHMENT_COUNT] {
        self.legs.map(|leg| leg.base_position)
    }

    /// Moving attachment points in the world frame
    pub fn top_positions(&self) -> [Point3<f64>; ATTACHMENT_COUNT] {
        self.legs.map(|leg| leg.top_position)
    }

    /// Envelope of every leg endpoint in the world frame
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(
            self.legs
                .iter()
                .flat_map(|leg| [&leg.base_position, &leg.top_position]),
        )
    }

    /// Plot the base frame, then the moving frame. Legs are not drawn.
    ///
    /// The scatters are titled `base_frame` and `moving_frame` rather than
    /// each frame's own label, so the two can be told apart when both frames
    /// share a radius and phase.
    pub fn plot(&self, plotter: &mut dyn Plotter) -> Result<()> {
        self.base_frame.plot_as("base_frame", plotter)?;
        self.moving_frame.plot_as("moving_frame", plotter)
    }
}

fn checked_points<F: FrameLike>(
    frame: &F,
    parameter: &'static str,
) -> PlatformResult<[Point3<f64>; ATTACHMENT_COUNT]> {
    let points = frame.attachment_points();
    let points: [Point3<f64>; ATTACHMENT_COUNT] = points.try_into().map_err(|_| {
        PlatformError::invalid_argument(
            parameter,
            format!(
                "expected {} attachment points, got {}",
                ATTACHMENT_COUNT,
                points.len()
            ),
        )
    })?;

    if let Some(index) = points
        .iter()
        .position(|p| !p.coords.iter().all(|c| c.is_finite()))
    {
        return Err(PlatformError::invalid_argument(
            parameter,
            format!("attachment point {index} is not finite"),
        ));
    }

    Ok(points)
}
