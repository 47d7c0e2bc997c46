use crate::types::Circle;

/// A rectangle in image coordinates for cropping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    /// Bounding box `[x-r, x+r] x [y-r, y+r]` of a circle, clamped to a
    /// `src_w` x `src_h` image.
    ///
    /// No padding and no wraparound: a circle near the border gets a
    /// smaller, asymmetric box. A circle whose center lies outside the
    /// image yields an empty rect.
    pub fn around_circle(circle: &Circle, src_w: u32, src_h: u32) -> CropRect {
        let (x0, x1) = clamp_span(circle.x, circle.radius, src_w);
        let (y0, y1) = clamp_span(circle.y, circle.radius, src_h);
        CropRect {
            x: x0,
            y: y0,
            width: x1 - x0,
            height: y1 - y0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Half-open span `[start, end)` of `center +- radius` inside `0..len`.
fn clamp_span(center: u32, radius: u32, len: u32) -> (u32, u32) {
    let start = center.saturating_sub(radius).min(len);
    let end = center.saturating_add(radius).saturating_add(1).min(len);
    (start, end.max(start))
}
