//! Per-circle masked crops.

pub mod crop;
pub mod mask;

use image::{ImageBuffer, Pixel};

use crate::types::{Circle, DetectionResult};

pub use crop::CropRect;
pub use mask::disc_mask;

/// Cut every circle out of `original` as its own image.
///
/// Each output is the circle's bounding box clamped to the image, with
/// every pixel outside the disc set to zero (black, or transparent for
/// images with alpha). Outputs follow the order of `circles`; no circles
/// gives an empty vector. The source image is never modified.
pub fn extract<P>(
    original: &ImageBuffer<P, Vec<P::Subpixel>>,
    circles: &DetectionResult,
) -> Vec<ImageBuffer<P, Vec<P::Subpixel>>>
where
    P: Pixel,
{
    circles
        .iter()
        .map(|circle| extract_one(original, circle))
        .collect()
}

/// Masked crop of a single circle.
pub fn extract_one<P>(
    original: &ImageBuffer<P, Vec<P::Subpixel>>,
    circle: &Circle,
) -> ImageBuffer<P, Vec<P::Subpixel>>
where
    P: Pixel,
{
    let (src_w, src_h) = original.dimensions();
    let rect = CropRect::around_circle(circle, src_w, src_h);
    let mut out = ImageBuffer::<P, Vec<P::Subpixel>>::new(rect.width, rect.height);
    if rect.is_empty() {
        return out;
    }

    // The mask covers the unclamped box; offset maps image coords into it.
    let mask = disc_mask(circle.radius);
    let mask_x0 = circle.x as i64 - circle.radius as i64;
    let mask_y0 = circle.y as i64 - circle.radius as i64;

    for row in 0..rect.height {
        for col in 0..rect.width {
            let src_x = rect.x + col;
            let src_y = rect.y + row;
            let mr = (src_y as i64 - mask_y0) as usize;
            let mc = (src_x as i64 - mask_x0) as usize;
            if mask[[mr, mc]] {
                out.put_pixel(col, row, *original.get_pixel(src_x, src_y));
            }
        }
    }

    out
}
