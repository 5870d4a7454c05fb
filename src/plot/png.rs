// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! PNG scatter rendering
//!
//! Writes one image per scatter into an output directory, numbered in the
//! order the scatters arrive.

use super::{symmetric_extent, Plotter};
use anyhow::{Context, Result};
use image::{Rgb, RgbImage};
use nalgebra::Point2;
use std::path::{Path, PathBuf};
use tracing::info;

const BACKGROUND: Rgb<u8> = Rgb([15, 18, 26]);
const AXIS: Rgb<u8> = Rgb([70, 76, 90]);
const MARKER: Rgb<u8> = Rgb([80, 200, 255]);

/// Renders scatters to `<output_dir>/<NN>_<title>.png`
pub struct PngPlotter {
    output_dir: PathBuf,
    size: u32,
    marker_radius: i64,
    written: Vec<PathBuf>,
}

impl PngPlotter {
    pub fn new(output_dir: impl Into<PathBuf>, size: u32) -> Self {
        let size = size.max(16);
        Self {
            output_dir: output_dir.into(),
            size,
            marker_radius: (size / 80).max(2) as i64,
            written: Vec::new(),
        }
    }

    /// Files written so far, in call order
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn render(&self, points: &[Point2<f64>]) -> RgbImage {
        let mut image = RgbImage::from_pixel(self.size, self.size, BACKGROUND);
        let mid = self.size / 2;
        for i in 0..self.size {
            image.put_pixel(i, mid, AXIS);
            image.put_pixel(mid, i, AXIS);
        }

        let extent = symmetric_extent(points);
        let half = self.size as f64 / 2.0;
        let scale = (half - 1.0) / extent;

        for p in points {
            let cx = (half + p.x * scale).round() as i64;
            // Image rows grow downward
            let cy = (half - p.y * scale).round() as i64;
            self.draw_marker(&mut image, cx, cy);
        }
        image
    }

    fn draw_marker(&self, image: &mut RgbImage, cx: i64, cy: i64) {
        let r = self.marker_radius;
        let size = self.size as i64;
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy > r * r {
                    continue;
                }
                let (x, y) = (cx + dx, cy + dy);
                if (0..size).contains(&x) && (0..size).contains(&y) {
                    image.put_pixel(x as u32, y as u32, MARKER);
                }
            }
        }
    }
}

impl Plotter for PngPlotter {
    fn scatter(&mut self, title: &str, points: &[Point2<f64>]) -> Result<()> {
        std::fs::create_dir_all(&self.output_dir).with_context(|| {
            format!("Failed to create plot directory: {}", self.output_dir.display())
        })?;

        let path = self
            .output_dir
            .join(format!("{:02}_{}.png", self.written.len(), file_stem(title)));
        save(&self.render(points), &path)?;

        info!(path = %path.display(), points = points.len(), "wrote scatter plot");
        self.written.push(path);
        Ok(())
    }
}

fn save(image: &RgbImage, path: &Path) -> Result<()> {
    image
        .save(path)
        .with_context(|| format!("Failed to save PNG to {}", path.display()))
}

fn file_stem(title: &str) -> String {
    let stem: String = title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if stem.is_empty() {
        "scatter".to_string()
    } else {
        stem
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("frame r=1.5 phase=90"), "frame_r_1_5_phase_90");
        assert_eq!(file_stem(""), "scatter");
    }

    #[test]
    fn test_marker_lands_on_pixel() {
        let plotter = PngPlotter::new("unused", 101);
        let image = plotter.render(&[Point2::new(1.0, 0.0)]);
        // extent 1.1, so x = 1.0 maps right of centre on the horizontal axis
        let x = (50.5_f64 + 49.5 / 1.1).round() as u32;
        assert_eq!(*image.get_pixel(x, 50), MARKER);
        assert_eq!(*image.get_pixel(2, 2), BACKGROUND);
    }
}
