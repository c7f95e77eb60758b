// Copyright 2025 the Mapview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::Point;

use crate::map::MapTransform;

/// Ordered collection of user-added points.
///
/// Markers are stored in map-relative coordinates, so they keep their place
/// on the map under any amount of panning, zooming, and rotating. Hosts
/// convert them back to screen space with
/// [`MapTransform::drawing_to_screen`] when rendering.
///
/// Insertion order is preserved and significant.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MarkerList {
    points: Vec<Point>,
}

impl MarkerList {
    /// Creates an empty marker list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the map-relative point currently under the screen center.
    ///
    /// Returns `false`, leaving the collection unchanged, when the screen
    /// center is outside the map's bounding box.
    pub fn add_current(&mut self, map: &MapTransform) -> bool {
        match map.current_point() {
            Some(p) => {
                self.points.push(p);
                true
            }
            None => false,
        }
    }

    /// Removes the most recently added marker. No-op when empty.
    pub fn undo(&mut self) {
        self.points.pop();
    }

    /// Removes all markers.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Returns the most recently added marker, if any.
    #[must_use]
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Returns the markers in insertion order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the number of stored markers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
