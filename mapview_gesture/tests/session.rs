// Copyright 2025 the Mapview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end touch sessions: raw events through the recognizer into the
//! transform, with markers read back the way a host renderer would.

use kurbo::{Point, Size, Vec2};
use mapview_gesture::{Gesture, GestureRecognizer, TouchEvent};
use mapview_transform::{MapTransform, MarkerList};

fn placed_map() -> MapTransform {
    let mut map = MapTransform::new();
    map.set_auto_best_fit(false);
    map.set_screen_size(Size::new(800.0, 600.0));
    map.set_image(Size::new(400.0, 300.0));
    map
}

#[test]
fn drag_session_pans_the_map_and_reports_each_delta() {
    let mut map = placed_map();
    let mut rec = GestureRecognizer::new();

    rec.on_event(&TouchEvent::down(Point::new(400.0, 300.0)), &mut map);
    let mut total = Vec2::ZERO;
    for p in [
        Point::new(405.0, 302.0),
        Point::new(412.0, 310.0),
        Point::new(420.0, 305.0),
    ] {
        match rec.on_event(&TouchEvent::moved(&[p]), &mut map) {
            Some(Gesture::Drag { delta }) => total += delta,
            other => panic!("expected a drag, got {other:?}"),
        }
    }
    rec.on_event(&TouchEvent::up(Point::new(420.0, 305.0)), &mut map);

    assert_eq!(total, Vec2::new(20.0, 5.0));
    assert_eq!(map.center(), Point::new(420.0, 305.0));

    // The sequence ended; a stray move must not pan further.
    let stray = rec.on_event(&TouchEvent::moved(&[Point::new(0.0, 0.0)]), &mut map);
    assert_eq!(stray, None);
    assert_eq!(map.center(), Point::new(420.0, 305.0));
}

#[test]
fn pinch_session_zooms_in_fixed_steps() {
    let mut map = placed_map();
    let mut rec = GestureRecognizer::new();

    let a = Point::new(350.0, 300.0);
    let b = Point::new(450.0, 300.0);
    rec.on_event(&TouchEvent::down(a), &mut map);
    rec.on_event(&TouchEvent::pointer_down(&[a, b]), &mut map);

    // Three spreading moves, each well past the rotation slop.
    for spread in [50.0, 100.0, 150.0] {
        let a2 = Point::new(350.0 - spread, 300.0);
        let b2 = Point::new(450.0 + spread, 300.0);
        let gesture = rec.on_event(&TouchEvent::moved(&[a2, b2]), &mut map);
        assert!(matches!(gesture, Some(Gesture::Scale { ratio }) if ratio > 1.0));
    }
    rec.on_event(&TouchEvent::pointer_up(&[a]), &mut map);
    rec.on_event(&TouchEvent::up(a), &mut map);

    // Each step multiplies by 1.03 (default sensitivity 30), regardless of
    // how far the fingers moved.
    let expected = 1.03_f64 * 1.03 * 1.03;
    assert!((map.scale() - expected).abs() < 1e-12);
    // Zooming is anchored at the map center.
    assert_eq!(map.center(), Point::new(400.0, 300.0));
}

#[test]
fn twist_session_rotates_and_markers_follow_the_map() {
    let mut map = placed_map();
    let mut rec = GestureRecognizer::new();
    let mut markers = MarkerList::new();

    // Drop a marker at the map point under the screen center.
    assert!(markers.add_current(&map));

    // Twist two fingers 45 degrees clockwise in small steps.
    let mid = Point::new(400.0, 300.0);
    let finger = |deg: f64| {
        let half = Vec2::new(
            120.0 * deg.to_radians().cos(),
            120.0 * deg.to_radians().sin(),
        );
        [mid + half, mid - half]
    };
    let start = finger(0.0);
    rec.on_event(&TouchEvent::down(start[0]), &mut map);
    rec.on_event(&TouchEvent::pointer_down(&start), &mut map);
    for deg in [15.0, 30.0, 45.0] {
        let gesture = rec.on_event(&TouchEvent::moved(&finger(deg)), &mut map);
        assert!(matches!(gesture, Some(Gesture::Rotate { .. })));
    }
    rec.on_event(&TouchEvent::pointer_up(&[start[0]]), &mut map);
    rec.on_event(&TouchEvent::up(start[0]), &mut map);

    assert!((map.rotation() - 45.0).abs() < 1e-9);

    // The stored marker still projects onto the screen center: rotation is
    // about the map center and the map has not been panned.
    let marker = markers.last().expect("marker was added");
    let on_screen = map.drawing_to_screen(marker);
    assert!((on_screen.x - 400.0).abs() < 1e-9);
    assert!((on_screen.y - 300.0).abs() < 1e-9);
}

#[test]
fn mixed_session_matches_the_transform_state() {
    let mut map = placed_map();
    let mut rec = GestureRecognizer::new();
    let mut markers = MarkerList::new();

    // Drag right by 30.
    rec.on_event(&TouchEvent::down(Point::new(400.0, 300.0)), &mut map);
    rec.on_event(&TouchEvent::moved(&[Point::new(430.0, 300.0)]), &mut map);
    rec.on_event(&TouchEvent::up(Point::new(430.0, 300.0)), &mut map);
    assert_eq!(map.center(), Point::new(430.0, 300.0));

    // The screen center is still over the map; record it, then undo.
    assert!(markers.add_current(&map));
    assert_eq!(markers.last(), Some(Point::new(-30.0, 0.0)));
    markers.undo();
    assert!(markers.is_empty());

    // Pan the map completely off the screen center and try again.
    rec.on_event(&TouchEvent::down(Point::new(430.0, 300.0)), &mut map);
    rec.on_event(&TouchEvent::moved(&[Point::new(800.0, 300.0)]), &mut map);
    rec.on_event(&TouchEvent::up(Point::new(800.0, 300.0)), &mut map);
    assert!(!map.center_contained());
    assert!(!markers.add_current(&map));
    assert!(markers.is_empty());

    // Recenter restores the add path.
    map.move_to_center();
    assert!(markers.add_current(&map));
    assert_eq!(markers.len(), 1);
}
