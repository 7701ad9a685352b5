use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};

use super::*;

fn identity_mapping() -> DisplayMapping {
    DisplayMapping::compute((800, 400), (800, 400)).expect("mapping")
}

#[test]
fn even_width_splits_equally() {
    let crops = compute_output_crops(&Rect::new(80.0, 110.0, 640.0, 180.0), &identity_mapping());
    assert_eq!(crops.left, PixelRegion::new(80, 110, 320, 180));
    assert_eq!(crops.right, PixelRegion::new(400, 110, 320, 180));
}

#[test]
fn odd_width_remainder_goes_right() {
    let crops = compute_output_crops(&Rect::new(80.0, 110.0, 641.0, 180.0), &identity_mapping());
    assert_eq!(crops.left.width, 320);
    assert_eq!(crops.right.width, 321);
    assert_eq!(crops.left.x + crops.left.width, crops.right.x);
}

#[test]
fn scales_into_full_resolution() {
    // 4000x2000 shown at 800x400: five image pixels per display pixel.
    let mapping = DisplayMapping::compute((800, 400), (4000, 2000)).expect("mapping");
    let crops = compute_output_crops(&Rect::new(80.0, 110.0, 640.0, 180.0), &mapping);
    assert_eq!(crops.left, PixelRegion::new(400, 550, 1600, 900));
    assert_eq!(crops.right, PixelRegion::new(2000, 550, 1600, 900));
}

#[test]
fn offset_mapping_is_subtracted() {
    let mapping = DisplayMapping::compute((800, 400), (1000, 1000)).expect("mapping");
    // Image occupies x in [200, 600) at scale 2.5 image px per display px.
    let crops = compute_output_crops(&Rect::new(200.0, 0.0, 400.0, 112.5), &mapping);
    assert_eq!(crops.left.x, 0);
    assert_eq!(crops.right.x + crops.right.width, 1000);
    assert_eq!(crops.left.height, 281);
}

#[test]
fn edges_clamp_to_image() {
    let crops = compute_output_crops(&Rect::new(-10.0, -10.0, 900.0, 500.0), &identity_mapping());
    assert_eq!(crops.left.x, 0);
    assert_eq!(crops.left.y, 0);
    assert_eq!(crops.right.x + crops.right.width, 800);
    assert_eq!(crops.right.y + crops.right.height, 400);
}

#[test]
fn seam_neither_loses_nor_duplicates_columns() {
    for width in 200..260 {
        let crops = compute_output_crops(
            &Rect::new(13.0, 0.0, f64::from(width), 100.0),
            &identity_mapping(),
        );
        assert_eq!(crops.left.width + crops.right.width, width);
        assert_eq!(crops.left.x + crops.left.width, crops.right.x);
        assert!(crops.right.width - crops.left.width <= 1);
    }
}

#[test]
fn split_image_cuts_matching_pixels() {
    let mut buf = RgbaImage::new(8, 2);
    for (x, _, px) in buf.enumerate_pixels_mut() {
        *px = Rgba([u8::try_from(x).unwrap_or(0), 0, 0, 255]);
    }
    let image = DynamicImage::ImageRgba8(buf);
    let crops = OutputCrops {
        left: PixelRegion::from_bounds(1, 0, 4, 2),
        right: PixelRegion::from_bounds(4, 0, 7, 2),
    };
    let (left, right) = crops.split_image(&image);
    assert_eq!(left.dimensions(), (3, 2));
    assert_eq!(right.dimensions(), (3, 2));
    assert_eq!(left.get_pixel(0, 0), Rgba([1, 0, 0, 255]));
    assert_eq!(right.get_pixel(0, 0), Rgba([4, 0, 0, 255]));
}

#[test]
fn region_validity() {
    assert!(PixelRegion::new(0, 0, 1, 1).is_valid());
    assert!(!PixelRegion::from_bounds(5, 0, 5, 10).is_valid());
    assert!(!PixelRegion::from_bounds(6, 0, 5, 10).is_valid());
}
