use image::Rgba;

use super::*;

fn gradient(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, _| {
        Rgba([u8::try_from(x % 256).unwrap_or(0), 0, 0, 255])
    })
}

fn size() -> PreviewSize {
    PreviewSize::for_layout(&MonitorLayout::default(), 320)
}

#[test]
fn preview_box_matches_single_monitor() {
    assert_eq!(size(), PreviewSize { width: 320, height: 180 });
}

#[test]
fn thumbnails_fit_preview_box() {
    let cached = gradient(800, 400);
    let pair = compute_preview_thumbnails(
        &Rect::new(80.0, 110.0, 640.0, 180.0),
        &Rect::new(0.0, 0.0, 800.0, 400.0),
        &cached,
        size(),
    )
    .expect("preview");
    assert_eq!(pair.left.dimensions(), (320, 180));
    assert_eq!(pair.right.dimensions(), (320, 180));
}

#[test]
fn odd_width_uses_equal_halves() {
    // A 641-wide crop previews 2 x 320 columns; the saved right half has 321.
    let cached = gradient(800, 400);
    let pair = compute_preview_thumbnails(
        &Rect::new(0.0, 0.0, 641.0, 180.0),
        &Rect::new(0.0, 0.0, 800.0, 400.0),
        &cached,
        PreviewSize { width: 320, height: 180 },
    )
    .expect("preview");
    assert_eq!(pair.left.dimensions(), pair.right.dimensions());
}

#[test]
fn halves_start_at_relative_offset() {
    let cached = gradient(400, 200);
    let pair = compute_preview_thumbnails(
        &Rect::new(110.0, 10.0, 200.0, 50.0),
        &Rect::new(100.0, 0.0, 400.0, 200.0),
        &cached,
        PreviewSize { width: 100, height: 50 },
    )
    .expect("preview");
    // 1:1 scale: left starts at column 10, right at column 110.
    assert_eq!(pair.left.get_pixel(0, 0)[0], 10);
    assert_eq!(pair.right.get_pixel(0, 0)[0], 110);
}

#[test]
fn overflowing_halves_are_skipped() {
    let cached = gradient(800, 400);
    let crop = Rect::new(500.0, 0.0, 640.0, 180.0);
    let mapped = Rect::new(0.0, 0.0, 800.0, 400.0);
    assert!(compute_preview_thumbnails(&crop, &mapped, &cached, size()).is_none());
}

#[test]
fn crop_left_of_image_is_skipped() {
    let cached = gradient(800, 400);
    let crop = Rect::new(-5.0, 0.0, 300.0, 100.0);
    let mapped = Rect::new(0.0, 0.0, 800.0, 400.0);
    assert!(compute_preview_thumbnails(&crop, &mapped, &cached, size()).is_none());
}

#[test]
fn scaled_cache_rebuilds_on_generation_change() {
    let source = DynamicImage::ImageRgba8(gradient(1600, 800));
    let small = DisplayMapping::compute((800, 400), (1600, 800)).expect("mapping");
    let large = DisplayMapping::compute((1200, 600), (1600, 800)).expect("mapping");
    let mut cache = ScaledImageCache::default();

    assert_eq!(cache.get_or_rebuild(&source, &small, 1).dimensions(), (800, 400));
    // Same generation: stale mapping is ignored, cached image reused.
    assert_eq!(cache.get_or_rebuild(&source, &large, 1).dimensions(), (800, 400));
    assert_eq!(cache.get_or_rebuild(&source, &large, 2).dimensions(), (1200, 600));

    // Cleared: rebuilt even though the generation is unchanged.
    cache.clear();
    assert_eq!(cache.get_or_rebuild(&source, &small, 2).dimensions(), (800, 400));
}
