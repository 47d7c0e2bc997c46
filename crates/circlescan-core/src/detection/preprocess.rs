use image::{GrayImage, Luma, RgbImage};
use imageproc::filter::median_filter;

use crate::consts::{LUMINANCE_B, LUMINANCE_G, LUMINANCE_R, MEDIAN_KERNEL_SIZE};
use crate::error::{CircleError, Result};

/// Convert to grayscale and median-blur, ready for edge detection.
///
/// Fails with `InvalidImage` when either dimension is zero.
pub fn prepare(image: &RgbImage) -> Result<GrayImage> {
    let (w, h) = image.dimensions();
    if w == 0 || h == 0 {
        return Err(CircleError::InvalidImage(format!(
            "image has zero size ({w}x{h})"
        )));
    }

    let gray = to_grayscale(image);
    let radius = MEDIAN_KERNEL_SIZE / 2;
    Ok(median_filter(&gray, radius, radius))
}

/// BT.601 weighted luminance, rounded to the nearest level.
pub fn to_grayscale(image: &RgbImage) -> GrayImage {
    let (w, h) = image.dimensions();
    let mut gray = GrayImage::new(w, h);

    for (x, y, pixel) in image.enumerate_pixels() {
        let [r, g, b] = pixel.0;
        let lum = LUMINANCE_R * r as f32 + LUMINANCE_G * g as f32 + LUMINANCE_B * b as f32;
        gray.put_pixel(x, y, Luma([lum.round().clamp(0.0, 255.0) as u8]));
    }

    gray
}
