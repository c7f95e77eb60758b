// Copyright 2025 the Mapview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Coordinate origin convention of the source map image.
///
/// This is consulted by the conversions between map-relative and drawing
/// coordinates ([`crate::MapTransform::relative_to_drawing`],
/// [`crate::MapTransform::to_drawing_origin`]). It is applied at conversion
/// time; stored markers are origin-agnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MapOrigin {
    /// The map's own (0, 0) is its top-left corner; y grows downward, the
    /// same direction as screen space.
    #[default]
    TopLeft,
    /// The map's own (0, 0) is its bottom-left corner; y grows upward and is
    /// flipped relative to screen space.
    BottomLeft,
}

/// How the host should anchor the fixed center icon on the screen midpoint.
///
/// This affects only [`crate::MapTransform::center_icon_origin`]; the
/// transform math is independent of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CenterIconAnchor {
    /// The icon's own center sits on the screen midpoint.
    #[default]
    Center,
    /// The icon's bottom edge sits on the screen midpoint, so the icon hangs
    /// above it like a pin.
    Bottom,
}
