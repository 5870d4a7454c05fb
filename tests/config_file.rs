// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Configuration file loading

use anyhow::Result;
use approx::assert_relative_eq;
use stewart::config::FrameConfig;
use stewart::PlatformConfig;
use tempfile::TempDir;

#[test]
fn test_saved_config_reloads() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("stewart.toml");

    let mut config = PlatformConfig::default();
    config.moving = FrameConfig {
        radius: 0.8,
        phase_offset: -45.0,
    };
    config.centroid_offset = [0.0, 0.1, 1.25];
    config.save(&path)?;

    let loaded = PlatformConfig::from_file(&path)?;
    assert_eq!(loaded, config);
    Ok(())
}

#[test]
fn test_config_drives_platform() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("platform.toml");
    std::fs::write(
        &path,
        r#"
centroid_offset = [0.0, 0.0, 2.0]

[base]
radius = 1.0
phase_offset = 0.0

[moving]
radius = 1.0
phase_offset = 0.0
"#,
    )?;

    let platform = PlatformConfig::from_file(&path)?.build_platform()?;
    for length in platform.leg_lengths() {
        assert_relative_eq!(length, 2.0, epsilon = 1e-12);
    }
    Ok(())
}

#[test]
fn test_missing_file_reports_path() {
    let err = PlatformConfig::from_file("does/not/exist.toml").unwrap_err();
    assert!(format!("{err:#}").contains("does/not/exist.toml"));
}
