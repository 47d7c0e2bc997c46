use image::{GrayImage, RgbImage};
use imageproc::edges::canny;
use imageproc::filter::gaussian_blur_f32;
use imageproc::gradients::{horizontal_sobel, vertical_sobel};
use tracing::{debug, info};

use crate::consts::{CANNY_LOW_RATIO, GRADIENT_SIGMA, MIN_DP};
use crate::error::{CircleError, Result};
use crate::types::{Circle, DetectionResult};

use super::accumulator::{collect_edge_points, Accumulator};
use super::config::DetectionParameters;
use super::preprocess::prepare;
use super::refine::{refine_center, CircleFit};

/// Detect circles in a color image.
///
/// Pipeline: validate parameters -> grayscale + median blur -> Canny edges
/// -> Sobel gradients -> center voting -> peak refinement -> greedy center
/// acceptance.
///
/// Candidates are visited strongest first and a candidate closer than
/// `min_dist` to an accepted circle is dropped. When two candidates tie on
/// votes, the one met first in row-major scan order wins; this is a property
/// of the transform and callers should not rely on any result ordering
/// beyond it.
///
/// An image without circles yields an empty result, not an error.
pub fn detect(image: &RgbImage, params: &DetectionParameters) -> Result<DetectionResult> {
    params.validate()?;
    let gray = prepare(image)?;
    detect_prepared(&gray, params)
}

/// Run the circle search on an already prepared grayscale image.
///
/// The search is bounded by the image: accumulator cells are never smaller
/// than one pixel and radii beyond the image diagonal are not searched.
pub fn detect_prepared(gray: &GrayImage, params: &DetectionParameters) -> Result<DetectionResult> {
    params.validate()?;

    let (w, h) = gray.dimensions();
    if w == 0 || h == 0 {
        return Err(CircleError::InvalidImage(format!(
            "image has zero size ({w}x{h})"
        )));
    }
    // Sobel needs a 3x3 neighbourhood.
    if w < 3 || h < 3 {
        return Ok(DetectionResult::empty());
    }

    let dp = params.dp.max(MIN_DP);
    let min_radius = params.min_radius;
    let max_radius = params.max_radius.min(diagonal(w, h));
    if min_radius > max_radius {
        debug!(min_radius, max_radius, "Radius range lies beyond the image diagonal");
        return Ok(DetectionResult::empty());
    }

    let high = params.param1 as f32;
    let low = (params.param1 * CANNY_LOW_RATIO) as f32;
    let edges = canny(gray, low, high);
    let smooth = gaussian_blur_f32(gray, GRADIENT_SIGMA);
    let gx = horizontal_sobel(&smooth);
    let gy = vertical_sobel(&smooth);

    let points = collect_edge_points(&edges, &gx, &gy);
    debug!(edge_points = points.len(), width = w, height = h, "Edge detection complete");
    if points.is_empty() {
        info!(circles = 0, "No edges found");
        return Ok(DetectionResult::empty());
    }

    let mut accumulator = Accumulator::new(w, h, dp);
    accumulator.cast_votes(&points, min_radius, max_radius);
    let candidates = accumulator.find_centers(params.param2);
    debug!(candidates = candidates.len(), dp, "Center voting complete");

    let min_dist_sq = (params.min_dist as f64).powi(2);
    let too_close = |accepted: &[(f64, f64)], x: f64, y: f64| {
        accepted.iter().any(|&(ax, ay)| {
            let dx = ax - x;
            let dy = ay - y;
            dx * dx + dy * dy < min_dist_sq
        })
    };

    let mut accepted: Vec<(f64, f64)> = Vec::new();
    let mut circles = Vec::new();

    for candidate in &candidates {
        if too_close(&accepted, candidate.x, candidate.y) {
            continue;
        }

        let Some(fit) = refine_center(
            &points,
            candidate.x,
            candidate.y,
            w,
            h,
            min_radius,
            max_radius,
        ) else {
            continue;
        };
        if fit.estimate.support as f64 <= params.param2 || too_close(&accepted, fit.x, fit.y) {
            continue;
        }

        debug!(
            x = fit.x,
            y = fit.y,
            votes = candidate.votes,
            radius = fit.estimate.radius,
            support = fit.estimate.support,
            "Accepted circle"
        );
        accepted.push((fit.x, fit.y));
        circles.push(to_circle(&fit, w, h, min_radius, max_radius));
    }

    info!(circles = circles.len(), "Circle detection complete");
    Ok(DetectionResult::new(circles))
}

/// Length of the image diagonal, rounded up.
fn diagonal(width: u32, height: u32) -> u32 {
    (width as f64).hypot(height as f64).ceil() as u32
}

/// Round to integer pixels, keeping the center inside the image and the
/// radius inside the searched range.
fn to_circle(fit: &CircleFit, width: u32, height: u32, min_radius: u32, max_radius: u32) -> Circle {
    let x = fit.x.round().clamp(0.0, (width - 1) as f64) as u32;
    let y = fit.y.round().clamp(0.0, (height - 1) as f64) as u32;
    let radius = (fit.estimate.radius.round() as u32).clamp(min_radius, max_radius);
    Circle::new(x, y, radius)
}
