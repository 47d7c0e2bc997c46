use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{DynamicImage, EncodableLayout, ImageBuffer, ImageFormat, Pixel, PixelWithColorType, RgbImage};
use tracing::debug;

use crate::consts::EXTRACTED_FILE_PREFIX;
use crate::error::{CircleError, Result};

/// Decode an in-memory raster (PNG, JPEG, GIF, BMP, ...) into RGB.
///
/// Undecodable data and zero-sized images are `InvalidImage`.
pub fn decode_image(bytes: &[u8]) -> Result<RgbImage> {
    if bytes.is_empty() {
        return Err(CircleError::InvalidImage("empty buffer".into()));
    }
    let img = image::load_from_memory(bytes)
        .map_err(|e| CircleError::InvalidImage(format!("cannot decode image: {e}")))?;
    into_rgb(img)
}

/// Load an image file into RGB.
pub fn load_image(path: &Path) -> Result<RgbImage> {
    let bytes = std::fs::read(path)?;
    decode_image(&bytes).map_err(|e| match e {
        CircleError::InvalidImage(msg) => {
            CircleError::InvalidImage(format!("{}: {msg}", path.display()))
        }
        other => other,
    })
}

fn into_rgb(img: DynamicImage) -> Result<RgbImage> {
    let rgb = img.to_rgb8();
    let (w, h) = rgb.dimensions();
    if w == 0 || h == 0 {
        return Err(CircleError::InvalidImage(format!(
            "image has zero size ({w}x{h})"
        )));
    }
    Ok(rgb)
}

/// Encode an image buffer as PNG bytes.
pub fn encode_png<P>(img: &ImageBuffer<P, Vec<P::Subpixel>>) -> Result<Vec<u8>>
where
    P: Pixel + PixelWithColorType,
    [P::Subpixel]: EncodableLayout,
{
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

/// Save an image buffer as PNG.
pub fn save_png<P>(img: &ImageBuffer<P, Vec<P::Subpixel>>, path: &Path) -> Result<()>
where
    P: Pixel + PixelWithColorType,
    [P::Subpixel]: EncodableLayout,
{
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Write extracted circles as `circle_1.png`, `circle_2.png`, ... in `dir`.
///
/// Creates `dir` if needed. Returns the written paths in input order.
/// `on_written` is called with the number of files written so far.
pub fn save_extracted<P>(
    crops: &[ImageBuffer<P, Vec<P::Subpixel>>],
    dir: &Path,
    mut on_written: impl FnMut(usize),
) -> Result<Vec<PathBuf>>
where
    P: Pixel + PixelWithColorType,
    [P::Subpixel]: EncodableLayout,
{
    std::fs::create_dir_all(dir)?;

    let mut paths = Vec::with_capacity(crops.len());
    for (i, crop) in crops.iter().enumerate() {
        let path = dir.join(extracted_file_name(i));
        save_png(crop, &path)?;
        debug!(path = %path.display(), "Wrote extracted circle");
        paths.push(path);
        on_written(i + 1);
    }
    Ok(paths)
}

/// File name of the `index`-th (zero-based) extracted circle.
pub fn extracted_file_name(index: usize) -> String {
    format!("{EXTRACTED_FILE_PREFIX}{}.png", index + 1)
}
