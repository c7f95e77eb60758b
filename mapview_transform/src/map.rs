// Copyright 2025 the Mapview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};
use mapview_geom::{RotatedRect, rotate_about};

use crate::modes::{CenterIconAnchor, MapOrigin};

/// Placement state of a map bitmap on a host surface.
///
/// `MapTransform` tracks the pan offset, uniform scale factor, and
/// accumulated rotation of a single map image, together with the
/// [`RotatedRect`] bounding box derived from them. Every mutation updates
/// scale, rotation, extent, and bounding box together before returning, so a
/// reader never observes a half-applied transform.
///
/// The transform owns the surface extent as explicit state rather than
/// reading it from any ambient source; hosts report it through
/// [`MapTransform::set_screen_size`] whenever their surface is created or
/// resized. Until both a surface extent and an image are known, placement is
/// deferred; the first time both are available the map is centered (and
/// best-fitted when [`MapTransform::set_auto_best_fit`] is enabled), exactly
/// once.
#[derive(Clone, Debug)]
pub struct MapTransform {
    src_size: Size,
    size: Size,
    center: Point,
    scale: f64,
    rotation: f64,
    min_scale: f64,
    max_scale: f64,
    bounds: RotatedRect,
    screen: Size,
    origin: MapOrigin,
    auto_best_fit: bool,
    initialized: bool,
}

impl Default for MapTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl MapTransform {
    /// Creates an empty transform with no image and no surface extent.
    ///
    /// - Initial scale is `1.0`, clamped to `[0.5, 6.0]` by default.
    /// - Initial rotation is zero.
    /// - The coordinate origin defaults to [`MapOrigin::TopLeft`].
    /// - Automatic best fit on first placement is enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            src_size: Size::ZERO,
            size: Size::ZERO,
            center: Point::ZERO,
            scale: 1.0,
            rotation: 0.0,
            min_scale: 0.5,
            max_scale: 6.0,
            bounds: RotatedRect::default(),
            screen: Size::ZERO,
            origin: MapOrigin::default(),
            auto_best_fit: true,
            initialized: false,
        }
    }

    /// Assigns a new map image by its untransformed extent.
    ///
    /// Scale resets to `1.0`, rotation to zero, and the bounding box to the
    /// image extent at the origin. If the surface extent is already known
    /// and first-time placement has not happened yet, the map is centered
    /// (and best-fitted when enabled) immediately; otherwise placement is
    /// deferred until [`MapTransform::set_screen_size`] provides one.
    pub fn set_image(&mut self, size: Size) {
        self.src_size = size;
        self.size = size;
        self.scale = 1.0;
        self.rotation = 0.0;
        self.bounds = RotatedRect::new(Rect::new(0.0, 0.0, size.width, size.height), 0.0);
        self.init_placement();
    }

    /// Records the host surface extent.
    ///
    /// Hosts call this from their surface-created/resized path. The first
    /// call that finds both a valid extent and an image performs the
    /// deferred initial placement; later calls only update the stored
    /// extent.
    pub fn set_screen_size(&mut self, size: Size) {
        self.screen = size;
        if self.src_size.width > 0.0 && self.src_size.height > 0.0 {
            self.init_placement();
        }
    }

    fn init_placement(&mut self) {
        if self.screen.width <= 0.0 || self.screen.height <= 0.0 || self.initialized {
            return;
        }
        self.initialized = true;
        self.center = self.screen_center();
        self.sync_bounds();
        if self.auto_best_fit {
            self.best_fit();
        }
    }

    /// Shifts the map center by `delta` in screen space.
    ///
    /// No clamping is applied; panning the map fully off-screen is
    /// permitted.
    pub fn translate(&mut self, delta: Vec2) {
        self.center += delta;
        self.sync_bounds();
    }

    /// Multiplies the current scale by `factor`, anchored at the map center.
    ///
    /// If the resulting scale would leave the configured range the call is
    /// silently ignored; compare [`MapTransform::scale`] before and after to
    /// detect rejection. Anchoring at the map center (rather than at a touch
    /// point) means pinch-zoom recenters instead of zooming under the
    /// fingers.
    pub fn zoom(&mut self, factor: f64) {
        let scaled = self.scale * factor;
        if scaled < self.min_scale || scaled > self.max_scale {
            return;
        }
        self.scale = scaled;
        self.size = self.src_size * self.scale;
        self.sync_bounds();
    }

    /// Adds `degrees` to the accumulated rotation about the map center.
    ///
    /// The accumulated angle is unbounded; consumers reduce it modulo a full
    /// turn where needed. The bounding box angle is updated in the same
    /// call.
    pub fn rotate(&mut self, degrees: f64) {
        self.rotation += degrees;
        self.bounds.set_angle(self.rotation);
    }

    /// Scales the map so its constrained dimension exactly fills the
    /// surface, then recenters it with rotation reset to zero.
    ///
    /// The fit factor is applied through [`MapTransform::zoom`], so a fit
    /// that would leave the scale range is rejected like any other zoom.
    pub fn best_fit(&mut self) {
        if self.size.width <= 0.0 || self.size.height <= 0.0 {
            return;
        }
        let sx = self.screen.width / self.size.width;
        let sy = self.screen.height / self.size.height;
        self.zoom(sx.min(sy));
        self.move_to_center();
    }

    /// Translates the map so its center aligns with the screen center,
    /// keeping the current rotation.
    pub fn move_to_center_keep_rotation(&mut self) {
        let left = (self.screen.width - self.size.width) / 2.0;
        let top = (self.screen.height - self.size.height) / 2.0;
        let rect = self.bounds.rect();
        self.translate(Vec2::new(left - rect.x0, top - rect.y0));
    }

    /// Translates the map to the screen center and rotates it back to the
    /// unrotated orientation.
    pub fn move_to_center(&mut self) {
        self.move_to_center_keep_rotation();
        self.rotate(-self.rotation);
    }

    fn sync_bounds(&mut self) {
        let half = self.size * 0.5;
        self.bounds.set_rect(Rect::new(
            self.center.x - half.width,
            self.center.y - half.height,
            self.center.x + half.width,
            self.center.y + half.height,
        ));
    }

    /// Sets the minimum and maximum scale factors.
    ///
    /// The provided range is normalized so that `min <= max`. The current
    /// scale is left untouched even if it falls outside the new range; only
    /// future [`MapTransform::zoom`] calls are constrained.
    pub fn set_scale_limits(&mut self, min: f64, max: f64) {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        self.min_scale = min;
        self.max_scale = max;
    }

    /// Sets the coordinate origin convention of the map image.
    pub fn set_origin(&mut self, origin: MapOrigin) {
        self.origin = origin;
    }

    /// Returns the configured coordinate origin convention.
    #[must_use]
    pub fn origin(&self) -> MapOrigin {
        self.origin
    }

    /// Enables or disables the automatic best fit applied on first
    /// placement.
    pub fn set_auto_best_fit(&mut self, enabled: bool) {
        self.auto_best_fit = enabled;
    }

    /// Returns the current uniform scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the accumulated rotation in degrees, clockwise-positive.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Returns the map center in screen coordinates.
    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Returns the current bounding box (scaled extent plus rotation angle).
    #[must_use]
    pub fn bounds(&self) -> RotatedRect {
        self.bounds
    }

    /// Returns the untransformed image extent.
    #[must_use]
    pub fn src_size(&self) -> Size {
        self.src_size
    }

    /// Returns the scaled image extent (`src_size * scale`).
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the host surface extent last reported by the host.
    #[must_use]
    pub fn screen_size(&self) -> Size {
        self.screen
    }

    /// Returns the midpoint of the host surface in screen coordinates.
    #[must_use]
    pub fn screen_center(&self) -> Point {
        Point::new(self.screen.width / 2.0, self.screen.height / 2.0)
    }

    /// Hit-tests a screen-space point against the map's rotated bounding
    /// box.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Returns whether the screen center currently lies over the map.
    #[must_use]
    pub fn center_contained(&self) -> bool {
        self.contains(self.screen_center())
    }

    // Coordinate conversions.
    //
    // Three spaces are involved:
    // - "map-relative": centered on the map, unrotated, in source-pixel
    //   units (independent of scale/rotation/pan);
    // - "drawing": centered, scale-normalized intermediate coordinates
    //   honoring the configured origin;
    // - "screen": final device coordinates after scale, pan, and rotation.

    /// Converts a map-relative point into scale-normalized drawing
    /// coordinates.
    ///
    /// The point is combined with the half extent of the scaled map; a
    /// bottom-left origin inverts the y axis first.
    #[must_use]
    pub fn relative_to_drawing(&self, p: Point) -> Point {
        let half = self.size * 0.5;
        let x = (half.width + p.x * self.scale) / self.scale;
        let y = match self.origin {
            MapOrigin::TopLeft => (half.height + p.y * self.scale) / self.scale,
            MapOrigin::BottomLeft => (half.height - p.y * self.scale) / self.scale,
        };
        Point::new(x, y)
    }

    /// Converts a centered drawing-space point into final screen
    /// coordinates.
    ///
    /// Scale is applied, the point is translated by the map center, and the
    /// result is rotated about that center by the accumulated rotation.
    #[must_use]
    pub fn drawing_to_screen(&self, p: Point) -> Point {
        let placed = Point::new(
            self.center.x + p.x * self.scale,
            self.center.y + p.y * self.scale,
        );
        rotate_about(placed, self.center, self.rotation)
    }

    /// Converts a raw source-bitmap point into centered drawing coordinates,
    /// honoring the configured origin.
    ///
    /// A bottom-left origin flips the y axis using the source height.
    #[must_use]
    pub fn to_drawing_origin(&self, p: Point) -> Point {
        let half = self.src_size * 0.5;
        match self.origin {
            MapOrigin::TopLeft => Point::new(p.x - half.width, p.y - half.height),
            MapOrigin::BottomLeft => {
                Point::new(p.x - half.width, self.src_size.height - p.y - half.height)
            }
        }
    }

    /// Converts a screen-space point into map-relative coordinates.
    ///
    /// Returns `None` when the point lies outside the map's bounding box.
    /// Otherwise the point is rotated backward about the map center (undoing
    /// the accumulated rotation) and divided by the scale, yielding the
    /// inverse of [`MapTransform::drawing_to_screen`] up to floating-point
    /// tolerance.
    #[must_use]
    pub fn map_relative_at(&self, p: Point) -> Option<Point> {
        if !self.bounds.contains(p) {
            return None;
        }
        let unrotated = rotate_about(p, self.center, -self.rotation);
        Some(Point::new(
            (unrotated.x - self.center.x) / self.scale,
            (unrotated.y - self.center.y) / self.scale,
        ))
    }

    /// Returns the map-relative point currently under the screen center, or
    /// `None` when the screen center is off the map.
    ///
    /// This is the reference point used when adding a marker.
    #[must_use]
    pub fn current_point(&self) -> Option<Point> {
        self.map_relative_at(self.screen_center())
    }

    /// Returns the top-left corner at which the host should place the fixed
    /// center icon of the given extent.
    #[must_use]
    pub fn center_icon_origin(&self, icon: Size, anchor: CenterIconAnchor) -> Point {
        let x = (self.screen.width - icon.width) / 2.0;
        let y = match anchor {
            CenterIconAnchor::Center => (self.screen.height - icon.height) / 2.0,
            CenterIconAnchor::Bottom => self.screen.height / 2.0 - icon.height,
        };
        Point::new(x, y)
    }

    /// Snapshot of the current transform state for debugging and
    /// inspection.
    #[must_use]
    pub fn debug_info(&self) -> MapTransformDebugInfo {
        MapTransformDebugInfo {
            src_size: self.src_size,
            size: self.size,
            center: self.center,
            scale: self.scale,
            rotation: self.rotation,
            min_scale: self.min_scale,
            max_scale: self.max_scale,
            bounds: self.bounds,
            screen: self.screen,
            origin: self.origin,
            initialized: self.initialized,
        }
    }
}

/// Debug snapshot of a [`MapTransform`] state.
#[derive(Clone, Copy, Debug)]
pub struct MapTransformDebugInfo {
    /// Untransformed image extent.
    pub src_size: Size,
    /// Scaled image extent.
    pub size: Size,
    /// Map center in screen coordinates.
    pub center: Point,
    /// Current uniform scale factor.
    pub scale: f64,
    /// Accumulated rotation in degrees.
    pub rotation: f64,
    /// Minimum scale factor.
    pub min_scale: f64,
    /// Maximum scale factor.
    pub max_scale: f64,
    /// Derived bounding box.
    pub bounds: RotatedRect,
    /// Host surface extent.
    pub screen: Size,
    /// Coordinate origin convention.
    pub origin: MapOrigin,
    /// Whether first-time placement has happened.
    pub initialized: bool,
}
