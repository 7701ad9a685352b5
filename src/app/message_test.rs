use super::*;

#[test]
fn drag_gesture_parses() {
    let g: DragGesture = "400,200:450.5,180".parse().expect("valid gesture");
    assert_eq!(g.from, Point::new(400.0, 200.0));
    assert_eq!(g.to, Point::new(450.5, 180.0));
}

#[test]
fn drag_gesture_rejects_garbage() {
    assert!("400,200".parse::<DragGesture>().is_err());
    assert!("a,b:c,d".parse::<DragGesture>().is_err());
    assert!("1,2:3".parse::<DragGesture>().is_err());
}

#[test]
fn drag_gesture_events_bracket_moves() {
    let g: DragGesture = "0,0:80,40".parse().expect("valid gesture");
    let events = g.events(4);
    assert_eq!(events.len(), 6);
    assert_eq!(events[0], PointerEvent::down(0.0, 0.0));
    assert_eq!(events[1], PointerEvent::moved(20.0, 10.0));
    assert_eq!(events[4], PointerEvent::moved(80.0, 40.0));
    assert_eq!(events[5], PointerEvent::up(80.0, 40.0));
}

#[test]
fn key_events_parse_with_shift() {
    assert_eq!("left".parse::<KeyEvent>(), Ok(KeyEvent::new(Key::ArrowLeft)));
    assert_eq!(
        "Shift+Down".parse::<KeyEvent>(),
        Ok(KeyEvent::with_shift(Key::ArrowDown))
    );
    assert!("enter".parse::<KeyEvent>().is_err());
}
