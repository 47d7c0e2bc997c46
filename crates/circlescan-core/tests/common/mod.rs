use image::{Rgb, RgbImage};

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Solid black image.
pub fn blank_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_pixel(width, height, BLACK)
}

/// Black image with filled white discs given as `(x, y, radius)`.
pub fn disc_image(width: u32, height: u32, discs: &[(u32, u32, u32)]) -> RgbImage {
    let mut img = blank_image(width, height);
    for &(cx, cy, r) in discs {
        paint_disc(&mut img, cx, cy, r, WHITE);
    }
    img
}

/// Fill every pixel within `r` of `(cx, cy)`.
pub fn paint_disc(img: &mut RgbImage, cx: u32, cy: u32, r: u32, color: Rgb<u8>) {
    let (w, h) = img.dimensions();
    let r2 = (r as i64) * (r as i64);
    for y in 0..h {
        for x in 0..w {
            let dx = x as i64 - cx as i64;
            let dy = y as i64 - cy as i64;
            if dx * dx + dy * dy <= r2 {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Image whose every pixel encodes its own position, so crops can be
/// checked against the source by coordinate.
pub fn coordinate_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 251 + 1) as u8])
    })
}

/// White image with filled black discs given as `(x, y, radius)`.
pub fn dark_disc_image(width: u32, height: u32, discs: &[(u32, u32, u32)]) -> RgbImage {
    let mut img = RgbImage::from_pixel(width, height, WHITE);
    for &(cx, cy, r) in discs {
        paint_disc(&mut img, cx, cy, r, BLACK);
    }
    img
}

/// Black image with a white annulus `inner < d <= outer` around `(cx, cy)`.
pub fn ring_image(width: u32, height: u32, cx: u32, cy: u32, inner: u32, outer: u32) -> RgbImage {
    let mut img = blank_image(width, height);
    paint_disc(&mut img, cx, cy, outer, WHITE);
    paint_disc(&mut img, cx, cy, inner, BLACK);
    img
}
