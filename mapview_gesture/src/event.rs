// Copyright 2025 the Mapview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use smallvec::SmallVec;

/// Lifecycle phase of a touch event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    /// The first finger went down.
    Down,
    /// An additional finger went down while at least one was already held.
    PointerDown,
    /// One or more held fingers moved.
    Move,
    /// A finger lifted while at least one other finger remains down.
    PointerUp,
    /// The last finger lifted.
    Up,
}

/// A single multi-touch input event in screen coordinates.
///
/// Events carry the positions of all active pointers; the recognizer only
/// ever reads the first two, in the order the host reports them. Two
/// positions are stored inline, so the common one- and two-finger cases
/// never allocate.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchEvent {
    /// Lifecycle phase of this event.
    pub phase: TouchPhase,
    /// Per-pointer positions in screen space.
    pub touches: SmallVec<[Point; 2]>,
}

impl TouchEvent {
    /// Creates an event from a phase and pointer positions.
    #[must_use]
    pub fn new(phase: TouchPhase, touches: &[Point]) -> Self {
        Self {
            phase,
            touches: SmallVec::from_slice(touches),
        }
    }

    /// A first-finger-down event at `p`.
    #[must_use]
    pub fn down(p: Point) -> Self {
        Self::new(TouchPhase::Down, &[p])
    }

    /// An additional-finger-down event with the given pointer positions.
    #[must_use]
    pub fn pointer_down(touches: &[Point]) -> Self {
        Self::new(TouchPhase::PointerDown, touches)
    }

    /// A move event with the given pointer positions.
    #[must_use]
    pub fn moved(touches: &[Point]) -> Self {
        Self::new(TouchPhase::Move, touches)
    }

    /// A non-last-finger-up event with the remaining pointer positions.
    #[must_use]
    pub fn pointer_up(touches: &[Point]) -> Self {
        Self::new(TouchPhase::PointerUp, touches)
    }

    /// A last-finger-up event at `p`.
    #[must_use]
    pub fn up(p: Point) -> Self {
        Self::new(TouchPhase::Up, &[p])
    }
}
