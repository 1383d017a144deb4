// Copyright 2026 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer event model shared by the capture cache and the gesture engine.

use kurbo::Point;

/// Identity of the primary pointer.
///
/// Hosts that track multiple simultaneous touches number them; the first
/// finger down is pointer `0`. Drag tracking only follows the primary
/// pointer so that secondary touches cannot make the widget jump.
pub const PRIMARY_POINTER: u64 = 0;

/// Action carried by a [`PointerEvent`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerAction {
    /// A pointer went down; opens a gesture.
    Down,
    /// The pointer moved while down.
    Move,
    /// The pointer lifted; closes the gesture.
    Up,
    /// The host aborted the gesture (focus loss, palm rejection, ...).
    Cancel,
    /// Any action the engine does not model (hover, outside taps, ...).
    ///
    /// Unknown actions are never fatal: the gesture engine keeps them
    /// captured, pending classification, and leaves its state untouched.
    Other,
}

impl PointerAction {
    /// Returns `true` for [`Up`](Self::Up) and [`Cancel`](Self::Cancel),
    /// the two actions that close a gesture.
    #[must_use]
    pub fn ends_gesture(self) -> bool {
        matches!(self, Self::Up | Self::Cancel)
    }
}

/// A single pointer event as delivered by the host framework.
///
/// Events are immutable values. `position` is in raw (screen) coordinates,
/// the same space the host reports the widget's own position in, so that
/// movement deltas are unaffected by the widget moving under the pointer
/// mid-drag.
///
/// `time_ms` is the capture timestamp in milliseconds on a host-supplied
/// monotonic scale. The engine never reads a clock of its own; all timing
/// (long-press probes, replay delays) derives from these host timestamps,
/// which keeps behavior deterministic under test.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// What happened.
    pub action: PointerAction,
    /// Raw pointer position.
    pub position: Point,
    /// Host pointer identity; [`PRIMARY_POINTER`] is the first finger down.
    pub pointer_id: u64,
    /// Capture time in milliseconds on the host's monotonic clock.
    pub time_ms: u64,
}

impl PointerEvent {
    /// Creates an event for the primary pointer.
    #[must_use]
    pub fn new(action: PointerAction, position: Point, time_ms: u64) -> Self {
        Self {
            action,
            position,
            pointer_id: PRIMARY_POINTER,
            time_ms,
        }
    }

    /// Sets the pointer identity.
    #[must_use]
    pub fn with_pointer_id(mut self, pointer_id: u64) -> Self {
        self.pointer_id = pointer_id;
        self
    }

    /// Returns `true` if this event comes from the primary pointer.
    #[must_use]
    pub fn is_primary(&self) -> bool {
        self.pointer_id == PRIMARY_POINTER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_event_is_primary() {
        let ev = PointerEvent::new(PointerAction::Down, Point::new(1.0, 2.0), 10);
        assert!(ev.is_primary());
        assert_eq!(ev.pointer_id, PRIMARY_POINTER);
    }

    #[test]
    fn with_pointer_id_marks_secondary_touches() {
        let ev = PointerEvent::new(PointerAction::Move, Point::ZERO, 0).with_pointer_id(3);
        assert!(!ev.is_primary());
    }

    #[test]
    fn only_up_and_cancel_end_a_gesture() {
        assert!(PointerAction::Up.ends_gesture());
        assert!(PointerAction::Cancel.ends_gesture());
        assert!(!PointerAction::Down.ends_gesture());
        assert!(!PointerAction::Move.ends_gesture());
        assert!(!PointerAction::Other.ends_gesture());
    }
}
