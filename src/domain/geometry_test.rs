#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn point_difference_is_vector() {
    let d = Point::new(10.0, 4.0) - Point::new(3.0, 6.0);
    assert_eq!(d, Vector::new(7.0, -2.0));
}

#[test]
fn lerp_endpoints_and_midpoint() {
    let a = Point::new(0.0, 10.0);
    let b = Point::new(20.0, 30.0);
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
    assert_eq!(a.lerp(b, 0.5), Point::new(10.0, 20.0));
}

#[test]
fn edges_round_trip() {
    let r = Rect::from_edges(10.0, 20.0, 110.0, 70.0);
    assert_eq!(r, Rect::new(10.0, 20.0, 100.0, 50.0));
    assert_eq!(r.right(), 110.0);
    assert_eq!(r.bottom(), 70.0);
    assert_eq!(r.center(), Point::new(60.0, 45.0));
}

#[test]
fn contains_is_half_open() {
    let r = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(r.contains(Point::new(0.0, 0.0)));
    assert!(r.contains(Point::new(9.99, 9.99)));
    assert!(!r.contains(Point::new(10.0, 5.0)));
    assert!(!r.contains(Point::new(5.0, 10.0)));
    assert!(!r.contains(Point::new(-0.01, 5.0)));
}

#[test]
fn contains_rect_allows_touching_edges() {
    let outer = Rect::new(0.0, 0.0, 100.0, 50.0);
    assert!(outer.contains_rect(&Rect::new(0.0, 0.0, 100.0, 50.0)));
    assert!(outer.contains_rect(&Rect::new(10.0, 10.0, 20.0, 20.0)));
    assert!(!outer.contains_rect(&Rect::new(90.0, 10.0, 20.0, 20.0)));
    assert!(!outer.contains_rect(&Rect::new(-1.0, 10.0, 20.0, 20.0)));
}

#[test]
fn expanded_grows_every_side() {
    let r = Rect::new(10.0, 10.0, 20.0, 20.0).expanded(5.0);
    assert_eq!(r, Rect::new(5.0, 5.0, 30.0, 30.0));
}

#[test]
fn aspect_ratio_of_degenerate_rect_is_none() {
    assert_eq!(Rect::new(0.0, 0.0, 0.0, 10.0).aspect_ratio(), None);
    assert_eq!(Rect::new(0.0, 0.0, 40.0, 10.0).aspect_ratio(), Some(4.0));
}

#[test]
fn floor_px_absorbs_float_noise() {
    assert_eq!(floor_px(179.999_999_999_9), 180.0);
    assert_eq!(floor_px(179.5), 179.0);
    assert_eq!(floor_px(0.0), 0.0);
}
