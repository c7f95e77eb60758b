// Copyright 2025 the Mapview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};
use mapview_transform::MapTransform;

use crate::event::{TouchEvent, TouchPhase};

/// Two-finger distance change (per move event, in screen units) below which
/// the gesture reads as rotation rather than scaling.
///
/// This is the disambiguation heuristic for two-finger input: spreading or
/// squeezing dominates the distance signal, while twisting keeps the finger
/// spacing nearly constant. The two interpretations are mutually exclusive
/// per event.
pub const ROTATE_DISTANCE_SLOP: f64 = 10.0;

/// A gesture notification emitted to the host, one per qualifying move
/// event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    /// One-finger drag; `delta` is the pan applied to the map.
    Drag {
        /// Screen-space movement since the previous event.
        delta: Vec2,
    },
    /// Two-finger pinch; `ratio` is the measured finger-distance ratio
    /// relative to the gesture baseline (greater than one when spreading).
    ///
    /// Note that the zoom step applied to the map is a fixed increment
    /// derived from the configured sensitivity; the measured ratio only
    /// picks the direction. See [`GestureRecognizer::set_sensitivity`].
    Scale {
        /// Measured two-finger distance ratio.
        ratio: f64,
    },
    /// Two-finger twist; `degrees` is the rotation applied to the map,
    /// clockwise-positive.
    Rotate {
        /// Rotation delta since the previous event, in degrees.
        degrees: f64,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Drag,
    ScaleOrRotate,
}

/// State machine classifying raw touch input into map gestures.
///
/// Feed every host touch event into [`GestureRecognizer::on_event`] together
/// with the transform to drive. The recognizer applies drag, scale, and
/// rotate deltas to the transform and returns the matching [`Gesture`]
/// notification; events that do not change the map (finger down/up
/// bookkeeping, drags that started off the map) return `None`.
///
/// State is scoped to a single touch-down/touch-up sequence and resets on
/// the next first-finger down; nothing persists between gestures.
#[derive(Clone, Debug)]
pub struct GestureRecognizer {
    mode: Mode,
    can_drag: bool,
    pointer_count: u32,
    click: Point,
    baseline_angle: f64,
    baseline_dist: f64,
    last_dist: f64,
    sensitivity: u32,
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureRecognizer {
    /// Creates a recognizer with the default scale sensitivity of 30.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: Mode::Drag,
            can_drag: false,
            pointer_count: 0,
            click: Point::ZERO,
            baseline_angle: 0.0,
            baseline_dist: 0.0,
            last_dist: 0.0,
            sensitivity: 30,
        }
    }

    /// Sets the pinch-zoom sensitivity, clamped to `0..=100`.
    ///
    /// Each qualifying pinch move applies a fixed zoom step of
    /// `1 ± sensitivity / 1000` regardless of how far the fingers actually
    /// moved; the measured pinch ratio only selects grow versus shrink.
    pub fn set_sensitivity(&mut self, sensitivity: u32) {
        self.sensitivity = sensitivity.min(100);
    }

    /// Returns the configured pinch-zoom sensitivity.
    #[must_use]
    pub fn sensitivity(&self) -> u32 {
        self.sensitivity
    }

    /// Returns the number of fingers currently tracked.
    #[must_use]
    pub fn pointer_count(&self) -> u32 {
        self.pointer_count
    }

    /// Processes one touch event, mutating `map` as the gesture dictates.
    ///
    /// Returns the gesture notification for qualifying move events, `None`
    /// otherwise. Malformed events (for example a two-finger move carrying a
    /// single position) are ignored.
    pub fn on_event(&mut self, event: &TouchEvent, map: &mut MapTransform) -> Option<Gesture> {
        match event.phase {
            TouchPhase::Down => {
                let p = *event.touches.first()?;
                self.click = p;
                self.can_drag = map.contains(p);
                self.pointer_count = 1;
                self.mode = Mode::Drag;
                None
            }
            TouchPhase::Up => {
                self.can_drag = false;
                self.pointer_count = 0;
                self.mode = Mode::Drag;
                None
            }
            TouchPhase::PointerUp => {
                self.pointer_count = self.pointer_count.saturating_sub(1);
                self.mode = if self.pointer_count > 1 {
                    Mode::ScaleOrRotate
                } else {
                    Mode::Drag
                };
                None
            }
            TouchPhase::PointerDown => {
                self.pointer_count += 1;
                self.mode = Mode::ScaleOrRotate;
                let (angle, dist) = two_finger(event)?;
                self.baseline_angle = angle;
                self.baseline_dist = dist;
                self.last_dist = dist;
                None
            }
            TouchPhase::Move => self.on_move(event, map),
        }
    }

    fn on_move(&mut self, event: &TouchEvent, map: &mut MapTransform) -> Option<Gesture> {
        match self.mode {
            Mode::Drag => {
                if !self.can_drag {
                    return None;
                }
                let p = *event.touches.first()?;
                let delta = p - self.click;
                self.click = p;
                map.translate(delta);
                Some(Gesture::Drag { delta })
            }
            Mode::ScaleOrRotate => {
                // A second finger was involved: this sequence can no longer
                // fall back to dragging.
                self.can_drag = false;
                let (angle, dist) = two_finger(event)?;
                let change = (dist - self.last_dist).abs();
                self.last_dist = dist;
                if change < ROTATE_DISTANCE_SLOP {
                    let degrees = angle - self.baseline_angle;
                    self.baseline_angle = angle;
                    map.rotate(degrees);
                    Some(Gesture::Rotate { degrees })
                } else {
                    let ratio = dist / self.baseline_dist;
                    let step = f64::from(self.sensitivity) / 1000.0;
                    map.zoom(if ratio < 1.0 { 1.0 - step } else { 1.0 + step });
                    Some(Gesture::Scale { ratio })
                }
            }
        }
    }
}

/// Angle (degrees) and distance of the first two pointer positions.
fn two_finger(event: &TouchEvent) -> Option<(f64, f64)> {
    let a = *event.touches.first()?;
    let b = *event.touches.get(1)?;
    let delta = a - b;
    Some((delta.atan2().to_degrees(), delta.hypot()))
}
