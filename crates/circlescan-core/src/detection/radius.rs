use crate::consts::RADIUS_WINDOW_BINS;

use super::accumulator::EdgePoint;

/// Best-supported radius around a fixed center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadiusEstimate {
    /// Mean distance of the supporting edge points.
    pub radius: f64,
    /// Number of edge points supporting this radius.
    pub support: usize,
    /// Variance of the supporting distances around `radius`.
    pub spread: f64,
}

/// Estimate the radius of a circle centered at `(cx, cy)`.
///
/// Edge point distances inside `[min_radius, max_radius]` are binned per
/// pixel. A window of [`RADIUS_WINDOW_BINS`] bins slides over the histogram
/// and the window with the highest support per unit radius wins, so a full
/// small circle is not outvoted by a sparse arc of a larger one.
///
/// Returns `None` when no edge point falls inside the radius range.
pub fn estimate_radius(
    points: &[EdgePoint],
    cx: f64,
    cy: f64,
    min_radius: u32,
    max_radius: u32,
) -> Option<RadiusEstimate> {
    let lo = min_radius as f64 - 0.5;
    let hi = max_radius as f64 + 0.5;
    let bins = max_radius as usize + 1;
    let mut counts = vec![0usize; bins];
    let mut sums = vec![0.0f64; bins];
    let mut sums_sq = vec![0.0f64; bins];

    for p in points {
        let dx = p.x as f64 - cx;
        let dy = p.y as f64 - cy;
        let d = (dx * dx + dy * dy).sqrt();
        if d < lo || d >= hi {
            continue;
        }
        let bin = (d.round() as usize).min(max_radius as usize);
        counts[bin] += 1;
        sums[bin] += d;
        sums_sq[bin] += d * d;
    }

    let half = RADIUS_WINDOW_BINS / 2;
    let mut best: Option<(f64, RadiusEstimate)> = None;

    for center_bin in min_radius as usize..=max_radius as usize {
        let first = center_bin.saturating_sub(half).max(min_radius as usize);
        let last = (center_bin + half).min(max_radius as usize);

        let support: usize = counts[first..=last].iter().sum();
        if support == 0 {
            continue;
        }
        let score = support as f64 / (center_bin.max(1)) as f64;
        if best.map_or(false, |(s, _)| score <= s) {
            continue;
        }

        let n = support as f64;
        let mean = sums[first..=last].iter().sum::<f64>() / n;
        let mean_sq = sums_sq[first..=last].iter().sum::<f64>() / n;
        best = Some((
            score,
            RadiusEstimate {
                radius: mean,
                support,
                spread: (mean_sq - mean * mean).max(0.0),
            },
        ));
    }

    best.map(|(_, estimate)| estimate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(cx: f64, cy: f64, r: f64, n: usize) -> Vec<EdgePoint> {
        (0..n)
            .map(|i| {
                let t = i as f64 / n as f64 * std::f64::consts::TAU;
                EdgePoint {
                    x: (cx + r * t.cos()).round() as u32,
                    y: (cy + r * t.sin()).round() as u32,
                    gx: 1.0,
                    gy: 0.0,
                }
            })
            .collect()
    }

    #[test]
    fn test_ring_radius_recovered() {
        let points = ring(60.0, 60.0, 25.0, 120);
        let est = estimate_radius(&points, 60.0, 60.0, 5, 50).unwrap();
        assert!((est.radius - 25.0).abs() < 1.0, "radius {}", est.radius);
        assert!(est.support >= 100);
        assert!(est.spread < 0.5, "spread {}", est.spread);
    }

    #[test]
    fn test_points_outside_range_ignored() {
        let points = ring(60.0, 60.0, 25.0, 60);
        assert!(estimate_radius(&points, 60.0, 60.0, 30, 50).is_none());
    }
}
