#![allow(clippy::float_cmp)]

use super::*;

/// Records draw calls instead of rasterizing them.
#[derive(Default)]
struct Recorder {
    calls: Vec<Call>,
}

#[derive(Debug, PartialEq)]
enum Call {
    Image(Point, (u32, u32)),
    Rect(Rect, Rgba<u8>),
    Dashed(Point, Point),
    Handle(Point),
}

impl RenderSurface for Recorder {
    fn draw_image(&mut self, image: &RgbaImage, at: Point) {
        self.calls.push(Call::Image(at, image.dimensions()));
    }

    fn draw_filled_rect(&mut self, rect: Rect, fill: Rgba<u8>, _stroke: Rgba<u8>, _w: f64) {
        self.calls.push(Call::Rect(rect, fill));
    }

    fn draw_dashed_line(&mut self, from: Point, to: Point) {
        self.calls.push(Call::Dashed(from, to));
    }

    fn draw_handle(&mut self, center: Point, _size: f64) {
        self.calls.push(Call::Handle(center));
    }
}

fn mapping() -> DisplayMapping {
    DisplayMapping::compute((800, 400), (1000, 1000)).expect("mapping")
}

#[test]
fn paints_in_order() {
    let mut rec = Recorder::default();
    let scaled = RgbaImage::new(400, 400);
    let crop = Rect::new(210.0, 100.0, 301.0, 84.0);
    paint_crop_view(&mut rec, &mapping(), &scaled, Some(crop), &OverlayStyle::default());

    assert_eq!(rec.calls.len(), 8);
    assert_eq!(
        rec.calls[0],
        Call::Rect(Rect::new(0.0, 0.0, 800.0, 400.0), BACKGROUND_COLOR)
    );
    assert_eq!(rec.calls[1], Call::Image(Point::new(200.0, 0.0), (400, 400)));
    assert_eq!(rec.calls[2], Call::Rect(crop, SELECTION_FILL));
    assert_eq!(
        rec.calls[3],
        Call::Dashed(Point::new(360.0, 100.0), Point::new(360.0, 184.0))
    );
    assert_eq!(rec.calls[4], Call::Handle(Point::new(210.0, 100.0)));
    assert_eq!(rec.calls[6], Call::Handle(Point::new(511.0, 184.0)));
}

#[test]
fn no_crop_paints_only_image() {
    let mut rec = Recorder::default();
    let scaled = RgbaImage::new(400, 400);
    paint_crop_view(&mut rec, &mapping(), &scaled, None, &OverlayStyle::default());
    assert_eq!(rec.calls.len(), 2);
}
