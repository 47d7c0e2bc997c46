//! Center refinement by radius support.
//!
//! Accumulator peaks only say roughly where rays converge. Starting from a
//! peak, the center is moved over whole pixels to the position whose edge
//! distances agree best on a single radius.

use crate::consts::{REFINE_MAX_STEPS, REFINE_STEP};

use super::accumulator::EdgePoint;
use super::radius::{estimate_radius, RadiusEstimate};

/// A refined center with the radius estimated around it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleFit {
    pub x: f64,
    pub y: f64,
    pub estimate: RadiusEstimate,
}

impl CircleFit {
    /// Support discounted by how far the supporting distances scatter.
    pub fn quality(&self) -> f64 {
        self.estimate.support as f64 / (1.0 + self.estimate.spread)
    }
}

/// Hill-climb from `(start_x, start_y)` to the best supported center.
///
/// Each step evaluates every position within [`REFINE_STEP`] pixels and
/// moves to the best one if it strictly improves [`CircleFit::quality`].
/// Positions stay inside the `width` x `height` image. Neighbours are
/// visited in row-major order, so the walk is deterministic.
///
/// Returns `None` when no visited position has an edge point in range.
pub fn refine_center(
    points: &[EdgePoint],
    start_x: f64,
    start_y: f64,
    width: u32,
    height: u32,
    min_radius: u32,
    max_radius: u32,
) -> Option<CircleFit> {
    let max_x = width.saturating_sub(1) as i64;
    let max_y = height.saturating_sub(1) as i64;
    let mut x = (start_x.round() as i64).clamp(0, max_x);
    let mut y = (start_y.round() as i64).clamp(0, max_y);

    // Only points that can reach any visited position matter.
    let reach = max_radius as i64 + 1 + REFINE_STEP * REFINE_MAX_STEPS as i64;
    let local: Vec<EdgePoint> = points
        .iter()
        .filter(|p| (p.x as i64 - x).abs() <= reach && (p.y as i64 - y).abs() <= reach)
        .copied()
        .collect();

    let fit_at = |x: i64, y: i64| -> Option<CircleFit> {
        let (fx, fy) = (x as f64, y as f64);
        estimate_radius(&local, fx, fy, min_radius, max_radius).map(|estimate| CircleFit {
            x: fx,
            y: fy,
            estimate,
        })
    };

    let mut best = fit_at(x, y);
    for _ in 0..REFINE_MAX_STEPS {
        let mut next: Option<(i64, i64, CircleFit)> = None;
        for dy in -REFINE_STEP..=REFINE_STEP {
            for dx in -REFINE_STEP..=REFINE_STEP {
                let (nx, ny) = (x + dx, y + dy);
                if (dx == 0 && dy == 0) || nx < 0 || ny < 0 || nx > max_x || ny > max_y {
                    continue;
                }
                let Some(fit) = fit_at(nx, ny) else {
                    continue;
                };
                let to_beat = next.map(|(_, _, f)| f).or(best);
                if to_beat.map_or(true, |b| fit.quality() > b.quality()) {
                    next = Some((nx, ny, fit));
                }
            }
        }
        match next {
            Some((nx, ny, fit)) => {
                x = nx;
                y = ny;
                best = Some(fit);
            }
            None => break,
        }
    }

    best
}
