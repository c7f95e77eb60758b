// Copyright 2025 the Mapview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapview Geom: geometry primitives for the map-view core.
//!
//! This crate provides the two geometric building blocks the rest of the
//! Mapview stack is written against:
//!
//! - [`rotate_about`]: rotate a point about an arbitrary center, with angles
//!   in degrees and clockwise-positive orientation in y-down screen
//!   coordinates.
//! - [`RotatedRect`]: an axis-aligned rectangle annotated with a rotation
//!   angle, supporting rotation-aware point and rectangle containment as
//!   well as corner extraction for reference drawing.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use mapview_geom::{rotate_about, RotatedRect};
//!
//! // A quarter turn clockwise about the origin sends +x to +y (y grows down).
//! let p = rotate_about(Point::new(10.0, 0.0), Point::ZERO, 90.0);
//! assert!((p.x - 0.0).abs() < 1e-9);
//! assert!((p.y - 10.0).abs() < 1e-9);
//!
//! // Hit testing accounts for the stored rotation.
//! let mut rect = RotatedRect::new(Rect::new(0.0, 0.0, 100.0, 50.0), 0.0);
//! rect.set_angle(90.0);
//! assert!(rect.contains(Point::new(50.0, -20.0)));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod rotate;
mod rotated_rect;

pub use rotate::rotate_about;
pub use rotated_rect::RotatedRect;
