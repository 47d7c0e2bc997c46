#[allow(dead_code)]
mod common;

use image::RgbImage;

use circlescan_core::detection::{detect, detect_prepared, prepare, DetectionParameters};
use circlescan_core::error::ErrorKind;
use circlescan_core::types::{Circle, DetectionResult};

/// Exactly one circle, within `tol` pixels of the expected center and radius.
fn assert_single_circle(result: &DetectionResult, x: u32, y: u32, r: u32, tol: i64) -> Circle {
    assert_eq!(result.len(), 1, "expected one circle, got {:?}", result);
    let c = result.circles()[0];
    assert!((c.x as i64 - x as i64).abs() <= tol, "x = {} in {:?}", c.x, c);
    assert!((c.y as i64 - y as i64).abs() <= tol, "y = {} in {:?}", c.y, c);
    assert!((c.radius as i64 - r as i64).abs() <= tol + 1, "radius = {} in {:?}", c.radius, c);
    c
}

#[test]
fn test_single_disc_is_found() {
    let img = common::disc_image(200, 200, &[(100, 100, 50)]);
    let result = detect(&img, &DetectionParameters::default()).unwrap();
    assert_single_circle(&result, 100, 100, 50, 2);
}

#[test]
fn test_single_disc_at_several_resolutions() {
    let img = common::disc_image(200, 200, &[(100, 100, 50)]);
    for dp in [1.0, 1.2, 2.0] {
        let params = DetectionParameters {
            dp,
            ..Default::default()
        };
        let result = detect(&img, &params).unwrap();
        assert_eq!(result.len(), 1, "dp = {dp}: {:?}", result);
        assert_single_circle(&result, 100, 100, 50, 2);
    }
}

#[test]
fn test_sub_pixel_dp_is_raised_to_one() {
    let img = common::disc_image(200, 200, &[(100, 100, 50)]);
    for dp in [0.5, 0.001] {
        let params = DetectionParameters {
            dp,
            ..Default::default()
        };
        let result = detect(&img, &params).unwrap();
        assert_single_circle(&result, 100, 100, 50, 2);
    }
}

#[test]
fn test_dark_disc_on_light_background() {
    let img = common::dark_disc_image(200, 200, &[(100, 100, 50)]);
    let result = detect(&img, &DetectionParameters::default()).unwrap();
    assert_single_circle(&result, 100, 100, 50, 2);
}

#[test]
fn test_hollow_ring() {
    let img = common::ring_image(200, 200, 100, 100, 45, 50);
    let result = detect(&img, &DetectionParameters::default()).unwrap();
    // Either boundary of the annulus is an acceptable radius.
    assert_single_circle(&result, 100, 100, 48, 2);
}

#[test]
fn test_small_disc() {
    let img = common::disc_image(100, 100, &[(50, 50, 15)]);
    let params = DetectionParameters::default()
        .with_radius_range(10, 200)
        .unwrap();
    let result = detect(&img, &params).unwrap();
    assert_single_circle(&result, 50, 50, 15, 2);
}

#[test]
fn test_off_center_disc() {
    let img = common::disc_image(240, 180, &[(150, 70, 35)]);
    let result = detect(&img, &DetectionParameters::default()).unwrap();
    assert_single_circle(&result, 150, 70, 35, 2);
}

#[test]
fn test_huge_max_radius_is_bounded_by_image() {
    let img = common::disc_image(200, 200, &[(100, 100, 50)]);
    let params = DetectionParameters::default()
        .with_radius_range(10, u32::MAX as i64)
        .unwrap();
    let result = detect(&img, &params).unwrap();
    assert_single_circle(&result, 100, 100, 50, 2);
}

#[test]
fn test_radius_range_beyond_image_is_empty() {
    let img = common::disc_image(200, 200, &[(100, 100, 50)]);
    let params = DetectionParameters::default()
        .with_radius_range(1_000, 4_000_000_000)
        .unwrap();
    assert!(detect(&img, &params).unwrap().is_empty());
}

#[test]
fn test_blank_image_yields_empty_result() {
    let img = common::blank_image(200, 200);
    let result = detect(&img, &DetectionParameters::default()).unwrap();
    assert!(result.is_empty());
}

#[test]
fn test_tiny_image_yields_empty_result() {
    let img = common::disc_image(2, 2, &[(1, 1, 1)]);
    let result = detect(&img, &DetectionParameters::default()).unwrap();
    assert!(result.is_empty());
}

#[test]
fn test_detection_is_deterministic() {
    let img = common::disc_image(240, 200, &[(90, 100, 40)]);
    let params = DetectionParameters::default();
    let first = detect(&img, &params).unwrap();
    let second = detect(&img, &params).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_two_separated_discs() {
    let img = common::disc_image(320, 200, &[(80, 100, 30), (240, 100, 30)]);
    let result = detect(&img, &DetectionParameters::default()).unwrap();

    assert_eq!(result.len(), 2, "got {:?}", result);
    let mut xs: Vec<u32> = result.iter().map(|c| c.x).collect();
    xs.sort_unstable();
    assert!((xs[0] as i64 - 80).abs() <= 2);
    assert!((xs[1] as i64 - 240).abs() <= 2);
    for c in &result {
        assert!((c.radius as i64 - 30).abs() <= 3, "radius = {}", c.radius);
    }
}

#[test]
fn test_results_respect_min_dist() {
    let img = common::disc_image(320, 200, &[(80, 100, 30), (240, 100, 30)]);
    let params = DetectionParameters {
        min_dist: 200,
        ..Default::default()
    };
    let result = detect(&img, &params).unwrap();
    assert_eq!(result.len(), 1);
}

#[test]
fn test_results_stay_inside_radius_range() {
    let img = common::disc_image(200, 200, &[(100, 100, 50)]);
    let params = DetectionParameters::default()
        .with_radius_range(10, 40)
        .unwrap();
    let result = detect(&img, &params).unwrap();
    for c in &result {
        assert!(c.radius >= 10 && c.radius <= 40, "radius = {}", c.radius);
    }
}

#[test]
fn test_results_stay_inside_image() {
    // Disc partly outside the frame.
    let img = common::disc_image(160, 160, &[(140, 80, 40)]);
    let result = detect(&img, &DetectionParameters::default()).unwrap();
    for c in &result {
        assert!(c.x < 160 && c.y < 160);
    }
}

#[test]
fn test_inverted_radius_range_is_rejected() {
    let img = common::disc_image(200, 200, &[(100, 100, 50)]);
    let params = DetectionParameters {
        min_radius: 50,
        max_radius: 10,
        ..Default::default()
    };
    let err = detect(&img, &params).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidParameters);
    assert!(err.kind().is_client_error());
}

#[test]
fn test_negative_radius_override_is_rejected() {
    let err = DetectionParameters::default()
        .with_radius_range(-5, 10)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidParameters);
}

#[test]
fn test_radius_override_keeps_other_parameters() {
    let base = DetectionParameters {
        param2: 12.0,
        ..Default::default()
    };
    let params = base.with_radius_range(5, 60).unwrap();
    assert_eq!(params.min_radius, 5);
    assert_eq!(params.max_radius, 60);
    assert_eq!(params.param2, 12.0);
}

#[test]
fn test_zero_size_image_is_rejected() {
    let img = RgbImage::new(0, 0);
    let err = detect(&img, &DetectionParameters::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidImage);
}

#[test]
fn test_parameters_checked_before_image() {
    let img = RgbImage::new(0, 0);
    let params = DetectionParameters {
        dp: 0.0,
        ..Default::default()
    };
    let err = detect(&img, &params).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidParameters);
}

#[test]
fn test_prepared_image_gives_same_result() {
    let img = common::disc_image(200, 200, &[(100, 100, 50)]);
    let params = DetectionParameters::default();
    let gray = prepare(&img).unwrap();
    assert_eq!(gray.dimensions(), (200, 200));
    assert_eq!(
        detect_prepared(&gray, &params).unwrap(),
        detect(&img, &params).unwrap()
    );
}

#[test]
fn test_source_image_is_not_modified() {
    let img = common::disc_image(200, 200, &[(100, 100, 50)]);
    let before = img.clone();
    detect(&img, &DetectionParameters::default()).unwrap();
    assert_eq!(img, before);
}
