use std::fs;
use std::path::Path;

use bottomcrop_core::{crop_bottom, CropError, CropRect, DecodeError, EncodeError};
use image::{
    ColorType, DynamicImage, GenericImageView, ImageBuffer, ImageFormat, Luma, Rgb, RgbImage, Rgba,
    RgbaImage,
};

/// Write a PNG whose pixels encode their own coordinates.
fn write_gradient(path: &Path, width: u32, height: u32) -> RgbImage {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x ^ y) % 256) as u8])
    });
    img.save(path).unwrap();
    img
}

#[test]
fn test_reference_scan_dimensions_and_pixels() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("scan.png");
    let output = dir.path().join("scan_cropped.png");
    let source = write_gradient(&input, 888, 710);

    let summary = crop_bottom(&input, &output).unwrap();
    assert_eq!(summary.rect, CropRect::new(0, 0, 888, 624));
    assert_eq!(summary.format, ImageFormat::Png);

    let result = image::open(&output).unwrap().into_rgb8();
    assert_eq!(result.dimensions(), (888, 624));

    let row_bytes = 888 * 3;
    assert_eq!(result.as_raw()[..], source.as_raw()[..row_bytes * 624]);
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");
    write_gradient(&input, 120, 97);

    crop_bottom(&input, &output).unwrap();
    let first = fs::read(&output).unwrap();
    crop_bottom(&input, &output).unwrap();
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_missing_input_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.png");

    let err = crop_bottom(dir.path().join("missing.png"), &output).unwrap_err();

    assert!(matches!(err, CropError::Decode(DecodeError::NotFound(_))));
    assert!(!output.exists());
}

#[test]
fn test_non_image_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("notes.txt");
    fs::write(&input, "plain text pretending to be a picture").unwrap();

    let err = crop_bottom(&input, dir.path().join("out.png")).unwrap_err();
    assert!(matches!(err, CropError::Decode(DecodeError::UnsupportedFormat)));
}

#[test]
fn test_unsupported_output_extension() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.xyz");
    write_gradient(&input, 10, 10);

    let err = crop_bottom(&input, &output).unwrap_err();

    assert!(matches!(err, CropError::Encode(EncodeError::UnknownExtension(_))));
    assert!(!output.exists());
}

#[test]
fn test_unwritable_output_location() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    write_gradient(&input, 10, 10);

    let err = crop_bottom(&input, dir.path().join("absent").join("out.png")).unwrap_err();
    assert!(matches!(err, CropError::Encode(EncodeError::Io { .. })));
}

#[test]
fn test_alpha_channel_survives() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("logo.png");
    let output = dir.path().join("logo_cropped.png");
    RgbaImage::from_pixel(25, 25, Rgba([10, 20, 30, 40]))
        .save(&input)
        .unwrap();

    crop_bottom(&input, &output).unwrap();

    let result = image::open(&output).unwrap();
    assert_eq!(result.color(), ColorType::Rgba8);
    assert_eq!(result.dimensions(), (25, 22));
    assert_eq!(result.get_pixel(0, 0), Rgba([10, 20, 30, 40]));
}

#[test]
fn test_png_to_jpeg_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.jpg");
    write_gradient(&input, 64, 50);

    let summary = crop_bottom(&input, &output).unwrap();
    assert_eq!(summary.format, ImageFormat::Jpeg);

    let bytes = fs::read(&output).unwrap();
    assert_eq!(&bytes[0..2], &[0xFF, 0xD8]);
    assert_eq!(image::load_from_memory(&bytes).unwrap().dimensions(), (64, 44));
}

#[test]
fn test_alpha_input_to_jpeg_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("logo.png");
    let output = dir.path().join("logo.jpg");
    RgbaImage::from_pixel(8, 8, Rgba([10, 20, 30, 40]))
        .save(&input)
        .unwrap();

    let err = crop_bottom(&input, &output).unwrap_err();

    assert!(matches!(
        err,
        CropError::Encode(EncodeError::UnsupportedColor {
            format: ImageFormat::Jpeg,
            color: ColorType::Rgba8,
            ..
        })
    ));
    assert!(!output.exists());
}

#[test]
fn test_16_bit_gray_input_to_jpeg_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("depth.png");
    let output = dir.path().join("depth.jpg");
    ImageBuffer::from_pixel(6, 6, Luma([50_000u16]))
        .save(&input)
        .unwrap();

    let err = crop_bottom(&input, &output).unwrap_err();

    assert!(matches!(
        err,
        CropError::Encode(EncodeError::UnsupportedColor {
            color: ColorType::L16,
            ..
        })
    ));
    assert!(!output.exists());
}

#[test]
fn test_bmp_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.bmp");
    let output = dir.path().join("out.bmp");
    DynamicImage::ImageRgb8(RgbImage::from_pixel(7, 9, Rgb([5, 6, 7])))
        .save(&input)
        .unwrap();

    crop_bottom(&input, &output).unwrap();

    let result = image::open(&output).unwrap();
    assert_eq!(result.dimensions(), (7, 7));
}
