// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry module - frames, legs and platform assembly

mod bbox;
mod frame;
mod leg;
mod platform;

pub use bbox::BoundingBox;
pub use frame::{Frame, FrameLike, ATTACHMENT_COUNT, ATTACHMENT_STEP_DEG};
pub use leg::Leg;
pub use platform::{default_centroid_offset, Orientation, Platform};
