// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometric properties of frames, legs and platform assembly

use approx::assert_relative_eq;
use nalgebra::{Point3, Vector3};
use rand::{rngs::StdRng, Rng, SeedableRng};
use stewart::geometry::ATTACHMENT_COUNT;
use stewart::utils::normalize_degrees;
use stewart::{Frame, Leg, Platform, PlatformError};

fn angular_gap(a: f64, b: f64) -> f64 {
    normalize_degrees(b - a)
}

#[test]
fn test_random_frames_lie_on_their_ring() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..200 {
        let radius = rng.gen_range(0.01..50.0);
        let phase = rng.gen_range(-720.0..720.0);
        let frame = Frame::new(radius, phase);

        assert_eq!(frame.attachment_points().len(), ATTACHMENT_COUNT);
        for (i, p) in frame.attachment_points().iter().enumerate() {
            assert_relative_eq!(p.coords.norm(), radius, max_relative = 1e-12);
            assert_eq!(p.z, 0.0);

            let theta = (phase + 120.0 * i as f64).to_radians();
            assert_relative_eq!(p.x, radius * theta.cos(), epsilon = 1e-9);
            assert_relative_eq!(p.y, radius * theta.sin(), epsilon = 1e-9);
        }
    }
}

#[test]
fn test_consecutive_points_are_120_degrees_apart() {
    let frame = Frame::new(3.0, 12.5);
    let angles = frame.attachment_angles();

    for i in 0..ATTACHMENT_COUNT {
        let next = (i + 1) % ATTACHMENT_COUNT;
        let gap = angular_gap(angles[i], angles[next]);
        assert_relative_eq!(gap, 120.0, epsilon = 1e-9);
    }
}

#[test]
fn test_reference_frame_points() {
    let frame = Frame::new(1.5, 90.0);
    let pts = frame.attachment_points();

    assert_relative_eq!(pts[0], Point3::new(0.0, 1.5, 0.0), epsilon = 1e-12);
    assert_relative_eq!(pts[1].x, -1.299, epsilon = 1e-3);
    assert_relative_eq!(pts[1].y, -0.75, epsilon = 1e-12);
}

#[test]
fn test_reference_platform_leg_zero() {
    let base = Frame::new(1.5, 90.0);
    let moving = Frame::new(1.5, 30.0);
    let platform = Platform::new(base, moving).expect("frames are valid");

    let leg = platform.legs()[0];
    assert_relative_eq!(leg.base_position, Point3::new(0.0, 1.5, 0.0), epsilon = 1e-12);
    assert_relative_eq!(leg.top_position.x, 1.299, epsilon = 1e-3);
    assert_relative_eq!(leg.top_position.y, 0.75, epsilon = 1e-12);
    assert_relative_eq!(leg.top_position.z, 1.0);
    assert_relative_eq!(leg.length, 1.803, epsilon = 1e-3);
    assert_relative_eq!(leg.length, 3.25_f64.sqrt(), epsilon = 1e-12);
}

#[test]
fn test_legs_pair_by_index() {
    let base = Frame::new(2.0, 0.0);
    let moving = Frame::new(1.0, 60.0);
    let offset = Vector3::new(0.5, -0.25, 2.0);
    let platform = Platform::with_centroid_offset(base.clone(), moving.clone(), offset).unwrap();

    for (i, leg) in platform.legs().iter().enumerate() {
        let expected = Leg::new(
            base.attachment_points()[i],
            moving.attachment_points()[i] + offset,
        );
        assert_eq!(*leg, expected);
    }
}

#[test]
fn test_random_leg_symmetry() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut point = || {
        Point3::new(
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
        )
    };

    for _ in 0..200 {
        let a = point();
        let b = point();
        assert_eq!(Leg::new(a, b).length, Leg::new(b, a).length);
        assert_eq!(Leg::new(a, a).length, 0.0);
    }
}

#[test]
fn test_non_frame_arguments_are_rejected() {
    let good: Vec<Point3<f64>> = Frame::new(1.0, 0.0).attachment_points().to_vec();

    let err = Platform::new(Vec::new(), good.clone()).unwrap_err();
    assert!(matches!(
        err,
        PlatformError::InvalidArgument { parameter: "base_frame", .. }
    ));

    let mut seven = good.clone();
    seven.push(Point3::origin());
    let err = Platform::new(good, seven).unwrap_err();
    assert!(matches!(
        err,
        PlatformError::InvalidArgument { parameter: "moving_frame", .. }
    ));
}

#[test]
fn test_explicit_point_lists_are_frame_like() {
    let base: Vec<Point3<f64>> = (0..6).map(|i| Point3::new(i as f64, 0.0, 0.0)).collect();
    let moving = base.clone();
    let platform = Platform::new(base, moving).unwrap();

    for length in platform.leg_lengths() {
        assert_relative_eq!(length, 1.0);
    }
}
