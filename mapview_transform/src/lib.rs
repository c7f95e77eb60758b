// Copyright 2025 the Mapview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapview Transform: the placement model behind an interactive map view.
//!
//! This crate is the single source of truth for how a map bitmap is panned,
//! scaled, and rotated on a host surface. It is headless: it owns no bitmap
//! and draws nothing. Callers are expected to:
//!
//! - Feed it the surface extent ([`MapTransform::set_screen_size`]) and the
//!   bitmap extent ([`MapTransform::set_image`]).
//! - Mutate it through [`MapTransform::translate`], [`MapTransform::zoom`],
//!   and [`MapTransform::rotate`] (typically driven by a gesture
//!   recognizer).
//! - Read back the placement ([`MapTransform::bounds`], the coordinate
//!   conversions) when rendering or hit testing.
//!
//! Alongside the transform it provides [`MarkerList`], an ordered collection
//! of user-added points stored in map-relative coordinates so they survive
//! any amount of panning, zooming, and rotating.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use mapview_transform::{MapTransform, MarkerList};
//!
//! let mut map = MapTransform::new();
//! map.set_auto_best_fit(false);
//! map.set_screen_size(Size::new(800.0, 600.0));
//! map.set_image(Size::new(400.0, 300.0));
//!
//! // The map starts centered on the screen.
//! assert_eq!(map.center(), Point::new(400.0, 300.0));
//!
//! // Pan, then drop a marker under the screen center.
//! map.translate(Vec2::new(25.0, -10.0));
//! let mut markers = MarkerList::new();
//! assert!(markers.add_current(&map));
//! ```
//!
//! ## Failure semantics
//!
//! There is no error channel. Zoom requests that would leave the configured
//! scale range are silently ignored, conversions for points outside the map
//! report `None`, and removing from an empty marker list is a no-op. Callers
//! who need to detect a rejected zoom compare [`MapTransform::scale`] before
//! and after.
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

mod map;
mod markers;
mod modes;

pub use map::{MapTransform, MapTransformDebugInfo};
pub use markers::MarkerList;
pub use modes::{CenterIconAnchor, MapOrigin};
