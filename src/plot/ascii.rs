// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Character-grid scatter rendering for terminals

use super::{symmetric_extent, Plotter};
use anyhow::Result;
use nalgebra::Point2;
use std::io::Write;

/// Renders scatters as a square character grid, each point drawn as the last
/// digit of its index.
///
/// Coinciding points share a cell and the highest index wins.
pub struct AsciiPlotter<W: Write> {
    out: W,
    cells: usize,
}

impl<W: Write> AsciiPlotter<W> {
    pub fn new(out: W, cells: usize) -> Self {
        Self {
            out,
            cells: cells.max(5) | 1,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn grid(&self, points: &[Point2<f64>]) -> Vec<Vec<char>> {
        let n = self.cells;
        let mid = n / 2;
        let mut grid = vec![vec![' '; n]; n];
        for (row, line) in grid.iter_mut().enumerate() {
            for (col, cell) in line.iter_mut().enumerate() {
                *cell = match (row == mid, col == mid) {
                    (true, true) => '+',
                    (true, false) => '-',
                    (false, true) => '|',
                    _ => ' ',
                };
            }
        }

        let extent = symmetric_extent(points);
        let scale = mid as f64 / extent;
        for (index, p) in points.iter().enumerate() {
            let col = (mid as f64 + p.x * scale).round() as usize;
            let row = (mid as f64 - p.y * scale).round() as usize;
            if row < n && col < n {
                grid[row][col] = char::from_digit(index as u32 % 10, 10).unwrap_or('*');
            }
        }
        grid
    }
}

impl<W: Write> Plotter for AsciiPlotter<W> {
    fn scatter(&mut self, title: &str, points: &[Point2<f64>]) -> Result<()> {
        let grid = self.grid(points);
        writeln!(self.out, "{title}")?;
        for line in grid {
            let line: String = line.into_iter().collect();
            writeln!(self.out, "{}", line.trim_end())?;
        }
        writeln!(self.out)?;
        Ok(())
    }
}
