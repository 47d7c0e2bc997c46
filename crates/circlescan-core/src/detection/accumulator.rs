//! Center voting for the Hough-gradient circle transform.
//!
//! Every edge pixel votes along its gradient direction, both towards and
//! away from the brighter side, at every distance in the radius range.
//! Circle boundaries produce peaks at their centers because their gradient
//! normals all pass through it.

use image::{GrayImage, ImageBuffer, Luma};
use ndarray::{s, Array2};

use crate::consts::VOTE_SMOOTHING_RADIUS;

/// Signed Sobel response, as produced by `imageproc::gradients`.
pub type GradientImage = ImageBuffer<Luma<i16>, Vec<i16>>;

/// An edge pixel together with its gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgePoint {
    pub x: u32,
    pub y: u32,
    pub gx: f32,
    pub gy: f32,
}

/// A local maximum of the accumulator, in source pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CenterCandidate {
    pub x: f64,
    pub y: f64,
    pub votes: u32,
}

/// Collect set pixels of a binary edge map that have a non-zero gradient.
///
/// Points come out in row-major order.
pub fn collect_edge_points(edges: &GrayImage, gx: &GradientImage, gy: &GradientImage) -> Vec<EdgePoint> {
    let mut points = Vec::new();

    for (x, y, pixel) in edges.enumerate_pixels() {
        if pixel.0[0] == 0 {
            continue;
        }
        let dx = gx.get_pixel(x, y).0[0] as f32;
        let dy = gy.get_pixel(x, y).0[0] as f32;
        if dx == 0.0 && dy == 0.0 {
            continue;
        }
        points.push(EdgePoint { x, y, gx: dx, gy: dy });
    }

    points
}

/// Vote grid at `1/dp` of the source resolution.
#[derive(Clone, Debug)]
pub struct Accumulator {
    votes: Array2<u32>,
    dp: f64,
    width: u32,
    height: u32,
}

impl Accumulator {
    /// Empty accumulator covering a `width` x `height` source image.
    pub fn new(width: u32, height: u32, dp: f64) -> Self {
        let cols = cell_index(width.saturating_sub(1) as f64, dp) + 1;
        let rows = cell_index(height.saturating_sub(1) as f64, dp) + 1;
        Self {
            votes: Array2::zeros((rows, cols)),
            dp,
            width,
            height,
        }
    }

    pub fn votes(&self) -> &Array2<u32> {
        &self.votes
    }

    /// Cast the votes of every edge point for radii `min_radius..=max_radius`.
    ///
    /// A ray stops at the image border. Consecutive steps that land in the
    /// same cell vote only once, so one pixel cannot inflate a single cell.
    pub fn cast_votes(&mut self, points: &[EdgePoint], min_radius: u32, max_radius: u32) {
        let x_limit = self.width.saturating_sub(1) as f64;
        let y_limit = self.height.saturating_sub(1) as f64;

        for p in points {
            let mag = (p.gx * p.gx + p.gy * p.gy).sqrt() as f64;
            let ux = p.gx as f64 / mag;
            let uy = p.gy as f64 / mag;

            for sign in [1.0_f64, -1.0] {
                // Radius 0 is the pixel itself; count it on the first ray only.
                let start = if sign < 0.0 && min_radius == 0 { 1 } else { min_radius };
                let mut last_cell: Option<(usize, usize)> = None;

                for r in start..=max_radius {
                    let vx = p.x as f64 + sign * ux * r as f64;
                    let vy = p.y as f64 + sign * uy * r as f64;
                    if vx < 0.0 || vy < 0.0 || vx > x_limit || vy > y_limit {
                        break;
                    }

                    let cell = (cell_index(vy, self.dp), cell_index(vx, self.dp));
                    if last_cell == Some(cell) {
                        continue;
                    }
                    last_cell = Some(cell);
                    self.votes[[cell.0, cell.1]] += 1;
                }
            }
        }
    }

    /// Votes summed over the square neighbourhood of every cell.
    ///
    /// Rays from a real boundary scatter over a few neighbouring cells;
    /// summing them restores a single peak. Cells outside the grid count
    /// as zero.
    pub fn smoothed(&self) -> Array2<u32> {
        let (rows, cols) = self.votes.dim();
        let k = VOTE_SMOOTHING_RADIUS;
        Array2::from_shape_fn((rows, cols), |(row, col)| {
            let r0 = row.saturating_sub(k);
            let c0 = col.saturating_sub(k);
            let r1 = (row + k + 1).min(rows);
            let c1 = (col + k + 1).min(cols);
            self.votes.slice(s![r0..r1, c0..c1]).sum()
        })
    }

    /// Local maxima of the smoothed votes that exceed `threshold`,
    /// strongest first.
    ///
    /// A cell is a maximum when it beats its left and upper neighbours and is
    /// not beaten by its right and lower ones. Equal counts keep row-major
    /// scan order (the sort is stable), which is what decides between two
    /// equally supported centers closer than the minimum distance.
    pub fn find_centers(&self, threshold: f64) -> Vec<CenterCandidate> {
        let grid = self.smoothed();
        let (rows, cols) = grid.dim();
        let at = |row: isize, col: isize| -> u32 {
            if row < 0 || col < 0 || row >= rows as isize || col >= cols as isize {
                0
            } else {
                grid[[row as usize, col as usize]]
            }
        };

        let mut candidates = Vec::new();
        for row in 0..rows {
            for col in 0..cols {
                let v = grid[[row, col]];
                if (v as f64) <= threshold {
                    continue;
                }
                let (r, c) = (row as isize, col as isize);
                if v > at(r, c - 1) && v >= at(r, c + 1) && v > at(r - 1, c) && v >= at(r + 1, c) {
                    candidates.push(CenterCandidate {
                        x: col as f64 * self.dp,
                        y: row as f64 * self.dp,
                        votes: v,
                    });
                }
            }
        }

        candidates.sort_by(|a, b| b.votes.cmp(&a.votes));
        candidates
    }
}

#[inline]
fn cell_index(coord: f64, dp: f64) -> usize {
    (coord / dp).round() as usize
}
