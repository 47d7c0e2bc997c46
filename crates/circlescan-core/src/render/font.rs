//! Minimal 5x7 bitmap font for radius labels.
//!
//! Only the characters that appear in labels are defined. Each row is the
//! low five bits of a byte, most significant bit on the left.

use image::{Rgb, RgbImage};

/// Glyph width in font pixels.
pub const GLYPH_WIDTH: u32 = 5;

/// Glyph height in font pixels.
pub const GLYPH_HEIGHT: u32 = 7;

/// Horizontal advance per character in font pixels (one column of spacing).
pub const GLYPH_ADVANCE: u32 = 6;

fn glyph(c: char) -> Option<[u8; 7]> {
    let rows = match c {
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        'r' => [0b00000, 0b00000, 0b10110, 0b11001, 0b10000, 0b10000, 0b10000],
        '=' => [0b00000, 0b00000, 0b11111, 0b00000, 0b11111, 0b00000, 0b00000],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        _ => return None,
    };
    Some(rows)
}

/// Draw `text` with its top-left corner at `(x, y)`.
///
/// Coordinates may lie outside the canvas; pixels that fall off the image
/// are skipped. Unknown characters advance the cursor without drawing.
pub fn draw_text(canvas: &mut RgbImage, text: &str, x: i64, y: i64, scale: u32, color: Rgb<u8>) {
    let (w, h) = canvas.dimensions();
    let scale = scale.max(1) as i64;
    let mut cursor_x = x;

    for c in text.chars() {
        if let Some(rows) = glyph(c) {
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if bits & (0b10000 >> col) == 0 {
                        continue;
                    }
                    let px0 = cursor_x + col as i64 * scale;
                    let py0 = y + row as i64 * scale;
                    for sy in 0..scale {
                        for sx in 0..scale {
                            let px = px0 + sx;
                            let py = py0 + sy;
                            if px >= 0 && py >= 0 && px < w as i64 && py < h as i64 {
                                canvas.put_pixel(px as u32, py as u32, color);
                            }
                        }
                    }
                }
            }
        }
        cursor_x += GLYPH_ADVANCE as i64 * scale;
    }
}
