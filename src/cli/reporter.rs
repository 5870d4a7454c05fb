// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting

use crate::geometry::{BoundingBox, Frame, Platform};
use colored::*;
use nalgebra::Point3;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Print a frame's attachment points with their polar angles
    pub fn report_frame(name: &str, frame: &Frame) {
        println!("\n{}", "━".repeat(64).bright_black());
        println!(
            "{} {}  {} {}  {} {}°",
            "Frame:".bold(),
            name.cyan(),
            "radius".bright_black(),
            frame.radius(),
            "phase".bright_black(),
            frame.phase_offset()
        );
        println!("{}", "━".repeat(64).bright_black());

        let angles = frame.attachment_angles();
        for (i, point) in frame.attachment_points().iter().enumerate() {
            println!(
                "  {} {}  {}",
                format!("[{}]", i).bright_black(),
                Self::format_point(point),
                format!("{:>7.2}°", angles[i]).yellow()
            );
        }
    }

    /// Print the leg table and the envelope of a platform
    pub fn report_platform(platform: &Platform) {
        println!("\n{}", "━".repeat(64).bright_black());
        println!("{}", "Stewart platform".bold());
        println!("{}", "━".repeat(64).bright_black());

        let offset = platform.centroid_offset();
        println!(
            "  {} ({:.3}, {:.3}, {:.3})",
            "Centroid offset:".bright_black(),
            offset.x,
            offset.y,
            offset.z
        );

        println!("\n{}", "Legs:".bold());
        for (i, leg) in platform.legs().iter().enumerate() {
            println!(
                "  {} {} → {}  {}",
                format!("[{}]", i).bright_black(),
                Self::format_point(&leg.base_position),
                Self::format_point(&leg.top_position),
                format!("{:.6}", leg.length).cyan()
            );
        }

        println!(
            "\n  {} {}",
            "Envelope:".bright_black(),
            Self::format_envelope(&platform.bounding_box())
        );
        println!("{}", "━".repeat(64).bright_black());
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), message);
    }

    /// Report info
    pub fn report_info(message: &str) {
        println!("{} {}", "ℹ️".bright_blue(), message);
    }

    /// Print success message
    pub fn success(message: &str) {
        println!("{} {}", "✅".green(), message.green());
    }

    /// Size of the envelope and the point it is centred on
    fn format_envelope(bbox: &BoundingBox) -> String {
        let size = bbox.size();
        let center = bbox.center();
        format!(
            "{:.3} × {:.3} × {:.3} centred at ({:.3}, {:.3}, {:.3})",
            size.x, size.y, size.z, center.x, center.y, center.z
        )
    }

    fn format_point(point: &Point3<f64>) -> String {
        format!("({:>8.4}, {:>8.4}, {:>8.4})", point.x, point.y, point.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_point() {
        assert_eq!(
            Reporter::format_point(&Point3::new(0.0, 1.5, -0.25)),
            "(  0.0000,   1.5000,  -0.2500)"
        );
    }

    #[test]
    fn test_format_envelope() {
        let points = [Point3::new(-1.0, -2.0, 0.0), Point3::new(1.0, 2.0, 1.0)];
        let bbox = BoundingBox::from_points(&points);
        assert_eq!(
            Reporter::format_envelope(&bbox),
            "2.000 × 4.000 × 1.000 centred at (0.000, 0.000, 0.500)"
        );
    }
}
