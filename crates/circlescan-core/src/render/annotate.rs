use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_circle_mut};
use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_CENTER_COLOR, DEFAULT_CENTER_RADIUS, DEFAULT_LABEL_COLOR, DEFAULT_LABEL_SCALE,
    DEFAULT_OUTLINE_COLOR, DEFAULT_STROKE_WIDTH, LABEL_OFFSET_X, LABEL_OFFSET_Y,
};
use crate::types::{Circle, DetectionResult};

use super::font::{draw_text, GLYPH_HEIGHT};

/// Colors and sizes used when drawing detections.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnnotationStyle {
    #[serde(default = "default_outline_color")]
    pub outline_color: [u8; 3],
    /// Outline thickness in pixels.
    #[serde(default = "default_stroke_width")]
    pub stroke_width: u32,
    #[serde(default = "default_center_color")]
    pub center_color: [u8; 3],
    /// Radius of the filled center marker.
    #[serde(default = "default_center_radius")]
    pub center_radius: u32,
    #[serde(default = "default_label_color")]
    pub label_color: [u8; 3],
    /// Integer magnification of the 5x7 label font.
    #[serde(default = "default_label_scale")]
    pub label_scale: u32,
}

fn default_outline_color() -> [u8; 3] {
    DEFAULT_OUTLINE_COLOR
}
fn default_stroke_width() -> u32 {
    DEFAULT_STROKE_WIDTH
}
fn default_center_color() -> [u8; 3] {
    DEFAULT_CENTER_COLOR
}
fn default_center_radius() -> u32 {
    DEFAULT_CENTER_RADIUS
}
fn default_label_color() -> [u8; 3] {
    DEFAULT_LABEL_COLOR
}
fn default_label_scale() -> u32 {
    DEFAULT_LABEL_SCALE
}

impl Default for AnnotationStyle {
    fn default() -> Self {
        Self {
            outline_color: DEFAULT_OUTLINE_COLOR,
            stroke_width: DEFAULT_STROKE_WIDTH,
            center_color: DEFAULT_CENTER_COLOR,
            center_radius: DEFAULT_CENTER_RADIUS,
            label_color: DEFAULT_LABEL_COLOR,
            label_scale: DEFAULT_LABEL_SCALE,
        }
    }
}

/// Draw every circle onto a copy of `original` using the default style.
pub fn annotate(original: &RgbImage, circles: &DetectionResult) -> RgbImage {
    annotate_with_style(original, circles, &AnnotationStyle::default())
}

/// Draw every circle onto a copy of `original`.
///
/// For each circle, in result order: the outline, a filled center marker,
/// and an `r=<radius>` label above the circle. Later circles may paint over
/// earlier ones. With no circles the copy is returned untouched.
pub fn annotate_with_style(
    original: &RgbImage,
    circles: &DetectionResult,
    style: &AnnotationStyle,
) -> RgbImage {
    let mut output = original.clone();
    for circle in circles {
        draw_circle(&mut output, circle, style);
    }
    output
}

fn draw_circle(canvas: &mut RgbImage, circle: &Circle, style: &AnnotationStyle) {
    // Circles whose center does not fit the drawing API's i32 coordinates
    // cannot touch the canvas; only the label may still show.
    let center = match (i32::try_from(circle.x), i32::try_from(circle.y)) {
        (Ok(x), Ok(y)) => Some((x, y)),
        _ => None,
    };

    if let Some(center) = center {
        let (nearest, farthest) = canvas_reach(canvas, center);
        let r = circle.radius as i64;

        // Stroke is centered on the radius: width 2 covers r-1 and r.
        let stroke = style.stroke_width.max(1) as i64;
        let inner = r - (stroke - 1) / 2 - (stroke - 1) % 2;
        for radius in inner.max(0)..inner + stroke {
            // Outlines that miss the canvas entirely are skipped.
            if (radius as f64) + 1.0 < nearest || (radius as f64) > farthest + 1.0 {
                continue;
            }
            if let Ok(radius) = i32::try_from(radius) {
                draw_hollow_circle_mut(canvas, center, radius, Rgb(style.outline_color));
            }
        }

        // A marker larger than the canvas paints the same pixels as one that just covers it.
        let marker = (style.center_radius as f64).min(farthest.ceil() + 1.0) as i32;
        draw_filled_circle_mut(canvas, center, marker, Rgb(style.center_color));
    }

    // The anchor is the label's lower-left corner.
    let label = format!("r={}", circle.radius);
    let anchor_x = circle.x as i64 - LABEL_OFFSET_X;
    let baseline = circle.y as i64 - circle.radius as i64 - LABEL_OFFSET_Y;
    let top = baseline - GLYPH_HEIGHT as i64 * style.label_scale.max(1) as i64;
    draw_text(
        canvas,
        &label,
        anchor_x,
        top,
        style.label_scale,
        Rgb(style.label_color),
    );
}

/// Distances from `center` to the nearest and farthest canvas pixel.
fn canvas_reach(canvas: &RgbImage, center: (i32, i32)) -> (f64, f64) {
    let (w, h) = canvas.dimensions();
    let (cx, cy) = (center.0 as f64, center.1 as f64);
    let (max_x, max_y) = (w.saturating_sub(1) as f64, h.saturating_sub(1) as f64);

    let near_dx = (0.0 - cx).max(cx - max_x).max(0.0);
    let near_dy = (0.0 - cy).max(cy - max_y).max(0.0);
    let far_dx = cx.abs().max((cx - max_x).abs());
    let far_dy = cy.abs().max((cy - max_y).abs());
    (near_dx.hypot(near_dy), far_dx.hypot(far_dy))
}
