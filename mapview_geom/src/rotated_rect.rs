// Copyright 2025 the Mapview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

use crate::rotate_about;

/// Angles within this many degrees of a full-turn multiple are treated as
/// unrotated; containment then skips the trig path entirely.
const ZERO_ANGLE_EPSILON: f64 = 0.000005;

/// An axis-aligned rectangle annotated with a rotation angle.
///
/// The rectangle stores its pre-rotation extent; `angle` (in degrees,
/// clockwise-positive) describes how the owning transform has rotated it
/// about its center. The angle is a derived view of that transform's
/// accumulated rotation, not an independent source of truth; callers are
/// responsible for keeping it synchronized via [`RotatedRect::set_angle`].
///
/// Corner extraction rotates the axis-aligned corners forward by `angle` and
/// is intended for drawing and reference only. Hit testing instead rotates
/// the query point backward by `-angle` about the center, which is
/// equivalent to rotating all four edges forward and cheaper.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RotatedRect {
    rect: Rect,
    angle: f64,
}

impl RotatedRect {
    /// Creates a rotated rectangle from an axis-aligned extent and an angle
    /// in degrees.
    #[must_use]
    pub fn new(rect: Rect, angle: f64) -> Self {
        Self { rect, angle }
    }

    /// Returns the axis-aligned extent before rotation is applied.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Replaces the axis-aligned extent, keeping the stored angle.
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    /// Returns the stored rotation angle in degrees.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Replaces the stored rotation angle in degrees.
    pub fn set_angle(&mut self, degrees: f64) {
        self.angle = degrees;
    }

    /// Returns the width of the axis-aligned extent, independent of corner
    /// ordering.
    #[must_use]
    pub fn width(&self) -> f64 {
        (self.rect.x1 - self.rect.x0).abs()
    }

    /// Returns the height of the axis-aligned extent, independent of corner
    /// ordering.
    #[must_use]
    pub fn height(&self) -> f64 {
        (self.rect.y1 - self.rect.y0).abs()
    }

    /// Returns the midpoint of the axis-aligned extent.
    ///
    /// The center is the rotation pivot, so it is unaffected by the stored
    /// angle.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            self.rect.x0 + self.width() / 2.0,
            self.rect.y0 + self.height() / 2.0,
        )
    }

    /// Returns the four corners after rotation, in top-left, top-right,
    /// bottom-right, bottom-left order of the underlying axis-aligned
    /// extent.
    ///
    /// These are reference points for drawing the rotated outline; they are
    /// not used by the containment tests.
    #[must_use]
    pub fn corners(&self) -> [Point; 4] {
        let c = self.center();
        [
            rotate_about(Point::new(self.rect.x0, self.rect.y0), c, self.angle),
            rotate_about(Point::new(self.rect.x1, self.rect.y0), c, self.angle),
            rotate_about(Point::new(self.rect.x1, self.rect.y1), c, self.angle),
            rotate_about(Point::new(self.rect.x0, self.rect.y1), c, self.angle),
        ]
    }

    fn reduced_angle(&self) -> f64 {
        self.angle % 360.0
    }

    /// Hit-tests a point against the rotated rectangle.
    ///
    /// When the stored angle is within a small epsilon of zero modulo a
    /// full turn, this is a plain axis-aligned check. Otherwise the query
    /// point is rotated backward about the center before the axis-aligned
    /// check, undoing the rectangle's rotation.
    ///
    /// Containment follows half-open rectangle semantics: points on the left
    /// and top edges are inside, points on the right and bottom edges are
    /// not.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        let angle = self.reduced_angle();
        if angle.abs() < ZERO_ANGLE_EPSILON {
            return self.rect.contains(p);
        }
        self.rect.contains(rotate_about(p, self.center(), -angle))
    }

    /// Hit-tests an axis-aligned rectangle against the rotated rectangle.
    ///
    /// The two defining corners of `r` are rotated backward about this
    /// rectangle's center (the same technique as [`RotatedRect::contains`])
    /// and then checked against the axis-aligned extent.
    #[must_use]
    pub fn contains_rect(&self, r: Rect) -> bool {
        let angle = self.reduced_angle();
        if angle.abs() < ZERO_ANGLE_EPSILON {
            return self.contains_span(Point::new(r.x0, r.y0), Point::new(r.x1, r.y1));
        }
        let c = self.center();
        let p0 = rotate_about(Point::new(r.x0, r.y0), c, -angle);
        let p1 = rotate_about(Point::new(r.x1, r.y1), c, -angle);
        self.contains_span(p0, p1)
    }

    fn contains_span(&self, p0: Point, p1: Point) -> bool {
        self.rect.x0 < self.rect.x1
            && self.rect.y0 < self.rect.y1
            && self.rect.x0 <= p0.x
            && self.rect.y0 <= p0.y
            && self.rect.x1 >= p1.x
            && self.rect.y1 >= p1.y
    }
}
