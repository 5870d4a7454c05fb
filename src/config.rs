// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Platform configuration system

use crate::error::PlatformResult;
use crate::geometry::{default_centroid_offset, Frame, Platform};
use anyhow::{Context, Result};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file looked up by [`PlatformConfig::load`]
pub const CONFIG_FILE: &str = "stewart.toml";

/// Radius and starting angle of one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameConfig {
    pub radius: f64,
    /// Angle of attachment point 0, in degrees
    pub phase_offset: f64,
}

impl FrameConfig {
    pub fn build(&self) -> PlatformResult<Frame> {
        Frame::try_new(self.radius, self.phase_offset)
    }
}

/// Plot output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Directory for PNG scatters
    pub output_dir: PathBuf,
    /// Edge length of each PNG in pixels
    pub image_size: u32,
    /// Edge length of the terminal grid in characters
    pub ascii_cells: usize,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("plots"),
            image_size: 512,
            ascii_cells: 21,
        }
    }
}

/// Full description of a platform to assemble
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    /// Translation of the moving-frame centroid, East-North-Up
    pub centroid_offset: [f64; 3],
    pub base: FrameConfig,
    pub moving: FrameConfig,
    pub plot: PlotConfig,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        let offset = default_centroid_offset();
        Self {
            centroid_offset: [offset.x, offset.y, offset.z],
            base: FrameConfig {
                radius: 1.5,
                phase_offset: 90.0,
            },
            moving: FrameConfig {
                radius: 1.5,
                phase_offset: 30.0,
            },
            plot: PlotConfig::default(),
        }
    }
}

impl PlatformConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: PlatformConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Load `stewart.toml` if present, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = if PathBuf::from(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)?
        } else {
            Self::default()
        };
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply `STEWART_*` overrides read through `lookup`
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        let overrides: [(&str, &mut f64); 4] = [
            ("STEWART_BASE_RADIUS", &mut self.base.radius),
            ("STEWART_BASE_PHASE", &mut self.base.phase_offset),
            ("STEWART_MOVING_RADIUS", &mut self.moving.radius),
            ("STEWART_MOVING_PHASE", &mut self.moving.phase_offset),
        ];
        for (key, slot) in overrides {
            if let Some(value) = lookup(key) {
                *slot = value
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid number in {key}: {value:?}"))?;
            }
        }

        if let Some(dir) = lookup("STEWART_PLOT_DIR") {
            self.plot.output_dir = PathBuf::from(dir);
        }
        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    pub fn centroid_offset(&self) -> Vector3<f64> {
        Vector3::from(self.centroid_offset)
    }

    /// Build both frames and assemble the platform they describe
    pub fn build_platform(&self) -> PlatformResult<Platform> {
        let base = self.base.build()?;
        let moving = self.moving.build()?;
        Platform::with_centroid_offset(base, moving, self.centroid_offset())
    }
}
