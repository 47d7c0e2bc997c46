#[allow(dead_code)]
mod common;

use circlescan_core::error::ErrorKind;
use circlescan_core::io::image_io::{
    decode_image, encode_png, extracted_file_name, load_image, save_extracted, save_png,
};

#[test]
fn test_decode_png_bytes() {
    let img = common::coordinate_image(16, 9);
    let bytes = encode_png(&img).unwrap();
    let decoded = decode_image(&bytes).unwrap();
    assert_eq!(decoded, img);
}

#[test]
fn test_garbage_bytes_are_invalid_image() {
    let err = decode_image(b"definitely not an image").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidImage);
}

#[test]
fn test_empty_buffer_is_invalid_image() {
    let err = decode_image(&[]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidImage);
}

#[test]
fn test_save_png() {
    let img = common::disc_image(32, 32, &[(16, 16, 8)]);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.png");

    save_png(&img, &path).unwrap();
    assert!(path.exists());
    assert_eq!(load_image(&path).unwrap(), img);
}

#[test]
fn test_load_missing_file_is_internal() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_image(&dir.path().join("missing.png")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Internal);
    assert!(!err.kind().is_client_error());
}

#[test]
fn test_extracted_file_names_are_one_based() {
    assert_eq!(extracted_file_name(0), "circle_1.png");
    assert_eq!(extracted_file_name(9), "circle_10.png");
}

#[test]
fn test_save_extracted_creates_dir_and_files() {
    let crops = vec![common::blank_image(5, 5), common::blank_image(7, 7)];
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("nested").join("circles");

    let mut progress = Vec::new();
    let paths = save_extracted(&crops, &out_dir, |n| progress.push(n)).unwrap();

    assert_eq!(paths.len(), 2);
    assert_eq!(paths[0], out_dir.join("circle_1.png"));
    assert_eq!(paths[1], out_dir.join("circle_2.png"));
    assert!(paths.iter().all(|p| p.exists()));
    assert_eq!(progress, vec![1, 2]);
    assert_eq!(load_image(&paths[1]).unwrap().dimensions(), (7, 7));
}
