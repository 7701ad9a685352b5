use proptest::prelude::*;

use super::*;

const HIT: f64 = 15.0;

fn rect() -> Rect {
    Rect::new(80.0, 110.0, 640.0, 180.0)
}

#[test]
fn corners_hit_on_their_anchor() {
    let r = rect();
    assert_eq!(hit_test_handle(&r, Point::new(80.0, 110.0), HIT), Some(Handle::TopLeft));
    assert_eq!(hit_test_handle(&r, Point::new(720.0, 110.0), HIT), Some(Handle::TopRight));
    assert_eq!(hit_test_handle(&r, Point::new(720.0, 290.0), HIT), Some(Handle::BottomRight));
    assert_eq!(hit_test_handle(&r, Point::new(80.0, 290.0), HIT), Some(Handle::BottomLeft));
}

#[test]
fn edges_hit_at_midpoints() {
    let r = rect();
    assert_eq!(hit_test_handle(&r, Point::new(400.0, 110.0), HIT), Some(Handle::Top));
    assert_eq!(hit_test_handle(&r, Point::new(400.0, 290.0), HIT), Some(Handle::Bottom));
    assert_eq!(hit_test_handle(&r, Point::new(80.0, 200.0), HIT), Some(Handle::Left));
    assert_eq!(hit_test_handle(&r, Point::new(720.0, 200.0), HIT), Some(Handle::Right));
}

#[test]
fn corner_region_extends_outside_the_rect() {
    let r = rect();
    assert_eq!(hit_test_handle(&r, Point::new(66.0, 96.0), HIT), Some(Handle::TopLeft));
    assert_eq!(hit_test_handle(&r, Point::new(64.0, 96.0), HIT), None);
}

#[test]
fn interior_and_far_points_miss() {
    let r = rect();
    assert_eq!(hit_test_handle(&r, Point::new(400.0, 200.0), HIT), None);
    assert_eq!(hit_test_handle(&r, Point::new(5.0, 5.0), HIT), None);
}

#[test]
fn edge_regions_never_overlap_corner_regions() {
    let r = rect();
    for edge in [Handle::Top, Handle::Right, Handle::Bottom, Handle::Left] {
        let e = edge.hit_region(&r, HIT);
        for corner in [
            Handle::TopLeft,
            Handle::TopRight,
            Handle::BottomRight,
            Handle::BottomLeft,
        ] {
            let c = corner.hit_region(&r, HIT);
            let overlap_w = e.right().min(c.right()) - e.left().max(c.left());
            let overlap_h = e.bottom().min(c.bottom()) - e.top().max(c.top());
            assert!(
                overlap_w <= 0.0 || overlap_h <= 0.0,
                "{edge:?} overlaps {corner:?}"
            );
        }
    }
}

#[test]
fn handle_axes() {
    assert!(Handle::TopLeft.moves_left() && Handle::TopLeft.moves_top());
    assert!(Handle::Right.moves_right() && !Handle::Right.moves_top());
    assert!(Handle::Bottom.moves_bottom() && !Handle::Bottom.moves_left());
}

proptest! {
    #[test]
    fn at_most_one_region_contains_any_point(px in 0.0f64..800.0, py in 0.0f64..400.0) {
        let r = rect();
        let p = Point::new(px, py);
        let hits = Handle::PRIORITY
            .iter()
            .filter(|h| h.hit_region(&r, HIT).contains(p))
            .count();
        prop_assert!(hits <= 1);
        let first = hit_test_handle(&r, p, HIT);
        prop_assert_eq!(first, hit_test_handle(&r, p, HIT));
        prop_assert_eq!(first.is_some(), hits == 1);
    }
}
