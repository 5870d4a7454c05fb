// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Stewart platform geometry
//!
//! Builds the six attachment points of a fixed base and a moving frame,
//! pairs them by index and measures the legs between them.

pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod plot;
pub mod utils;

pub use config::PlatformConfig;
pub use error::{PlatformError, PlatformResult};
pub use geometry::{Frame, FrameLike, Leg, Orientation, Platform};
pub use plot::{AsciiPlotter, PngPlotter, Plotter};

/// Assemble the reference platform: both frames of radius 1.5, the base
/// starting at 90 degrees and the moving frame at 30 degrees.
pub fn reference_platform() -> PlatformResult<Platform> {
    PlatformConfig::default().build_platform()
}
