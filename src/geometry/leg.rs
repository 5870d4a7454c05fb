// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Struts connecting base and moving attachment points

use nalgebra::{Point3, Vector3};
use serde::Serialize;

/// A leg between a base attachment point and a top attachment point.
///
/// `length` is computed once in [`Leg::new`]. Editing the positions afterwards
/// does not update it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Leg {
    pub base_position: Point3<f64>,
    pub top_position: Point3<f64>,
    pub length: f64,
}

impl Leg {
    pub fn new(base_position: Point3<f64>, top_position: Point3<f64>) -> Self {
        let length = (top_position - base_position).norm();
        Self {
            base_position,
            top_position,
            length,
        }
    }

    /// Vector from the base attachment to the top attachment
    pub fn vector(&self) -> Vector3<f64> {
        self.top_position - self.base_position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_leg_length() {
        let leg = Leg::new(Point3::new(0.0, 0.0, 0.0), Point3::new(3.0, 4.0, 12.0));
        assert_relative_eq!(leg.length, 13.0);
        assert_eq!(leg.vector(), Vector3::new(3.0, 4.0, 12.0));
    }

    #[test]
    fn test_leg_symmetry() {
        let a = Point3::new(1.0, -2.0, 0.5);
        let b = Point3::new(-0.25, 4.0, 1.5);
        assert_eq!(Leg::new(a, b).length, Leg::new(b, a).length);
    }

    #[test]
    fn test_zero_length_leg() {
        let p = Point3::new(7.0, 7.0, 7.0);
        assert_eq!(Leg::new(p, p).length, 0.0);
    }

    #[test]
    fn test_length_is_snapshot() {
        let mut leg = Leg::new(Point3::origin(), Point3::new(0.0, 0.0, 1.0));
        leg.top_position = Point3::new(0.0, 0.0, 5.0);
        assert_eq!(leg.length, 1.0);
    }
}
