// Copyright 2025 the Mapview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapview Gesture: multi-touch gesture interpretation for the map view.
//!
//! This crate consumes a stream of raw touch events ([`TouchEvent`]),
//! classifies them into one-finger drags and two-finger scale/rotate
//! gestures, applies the resulting deltas to a
//! [`mapview_transform::MapTransform`], and reports what happened to the
//! host as a [`Gesture`] notification.
//!
//! The recognizer is a small state machine keyed on the touch lifecycle:
//! a first finger down starts a drag candidate (only if it lands on the
//! map), a second finger forces scale-or-rotate mode, and each move event in
//! that mode is classified as exactly one of rotation or scaling, never
//! both. See [`GestureRecognizer`] for the classification rule.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use mapview_gesture::{Gesture, GestureRecognizer, TouchEvent};
//! use mapview_transform::MapTransform;
//!
//! let mut map = MapTransform::new();
//! map.set_auto_best_fit(false);
//! map.set_screen_size(Size::new(800.0, 600.0));
//! map.set_image(Size::new(400.0, 300.0));
//!
//! let mut recognizer = GestureRecognizer::new();
//!
//! // Press on the map and drag 10 pixels to the right.
//! recognizer.on_event(&TouchEvent::down(Point::new(400.0, 300.0)), &mut map);
//! let gesture = recognizer.on_event(
//!     &TouchEvent::moved(&[Point::new(410.0, 300.0)]),
//!     &mut map,
//! );
//! assert!(matches!(gesture, Some(Gesture::Drag { .. })));
//! assert_eq!(map.center(), Point::new(410.0, 300.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod event;
mod recognizer;

pub use event::{TouchEvent, TouchPhase};
pub use recognizer::{Gesture, GestureRecognizer, ROTATE_DISTANCE_SLOP};
