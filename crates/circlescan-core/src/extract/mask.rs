use ndarray::Array2;

/// Filled disc of radius `r` centered in a `(2r+1) x (2r+1)` grid.
///
/// A cell is set when its center lies within `r` of the grid center.
pub fn disc_mask(radius: u32) -> Array2<bool> {
    let size = 2 * radius as usize + 1;
    let r = radius as i64;
    let r_sq = r * r;

    Array2::from_shape_fn((size, size), |(row, col)| {
        let dy = row as i64 - r;
        let dx = col as i64 - r;
        dx * dx + dy * dy <= r_sq
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disc_mask_shape_and_corners() {
        let mask = disc_mask(4);
        assert_eq!(mask.dim(), (9, 9));
        assert!(mask[[4, 4]]);
        assert!(mask[[0, 4]]);
        assert!(mask[[4, 8]]);
        assert!(!mask[[0, 0]]);
        assert!(!mask[[8, 8]]);
    }

    #[test]
    fn test_zero_radius_is_single_pixel() {
        let mask = disc_mask(0);
        assert_eq!(mask.dim(), (1, 1));
        assert!(mask[[0, 0]]);
    }
}
