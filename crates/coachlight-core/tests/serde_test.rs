//! Round-trip tests for the `serde` feature on geometry types. Tour
//! definitions store their target rects through these.

#![cfg(feature = "serde")]

use coachlight_core::geometry::{Point, Rect, Size};

#[test]
fn rect_round_trips() {
    let rect = Rect::new(10.0, 20.0, 120.0, 44.0);
    let json = serde_json::to_string(&rect).unwrap();
    let back: Rect = serde_json::from_str(&json).unwrap();
    assert_eq!(back, rect);
}

#[test]
fn rect_deserializes_from_plain_fields() {
    let json = r#"{ "x": 4.0, "y": 8.0, "width": 40.0, "height": 20.0 }"#;
    let rect: Rect = serde_json::from_str(json).unwrap();
    assert_eq!(rect, Rect::new(4.0, 8.0, 40.0, 20.0));
}

#[test]
fn rect_rejects_missing_fields() {
    let json = r#"{ "x": 4.0, "y": 8.0, "width": 40.0 }"#;
    assert!(serde_json::from_str::<Rect>(json).is_err());
}

#[test]
fn point_and_size_round_trip() {
    let point = Point::new(3.5, -2.0);
    let back: Point = serde_json::from_str(&serde_json::to_string(&point).unwrap()).unwrap();
    assert_eq!(back, point);

    let size = Size::new(230.0, 18.0);
    let back: Size = serde_json::from_str(&serde_json::to_string(&size).unwrap()).unwrap();
    assert_eq!(back, size);
}
