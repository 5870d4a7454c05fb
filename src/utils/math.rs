// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Math utilities

use nalgebra::Point3;

/// Normalize an angle in degrees to [0, 360)
pub fn normalize_degrees(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Polar angle of a point around the local Z axis, in degrees within [0, 360)
pub fn polar_angle_degrees(point: &Point3<f64>) -> f64 {
    normalize_degrees(point.y.atan2(point.x).to_degrees())
}

/// Point on a circle of `radius` in the XY plane at `angle_deg`
pub fn point_on_circle(radius: f64, angle_deg: f64) -> Point3<f64> {
    let theta = angle_deg.to_radians();
    Point3::new(radius * theta.cos(), radius * theta.sin(), 0.0)
}
