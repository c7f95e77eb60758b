// Copyright 2025 the Mapview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point};

/// Rotates `p` about `center` by `degrees`.
///
/// Angles are in degrees; positive angles rotate clockwise in screen
/// coordinates, where y increases downward. The rotation is applied via the
/// standard rotation matrix, so composing two rotations about the same
/// center is equivalent to a single rotation by the summed angle.
#[must_use]
pub fn rotate_about(p: Point, center: Point, degrees: f64) -> Point {
    Affine::rotate_about(degrees.to_radians(), center) * p
}
