// Copyright 2026 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host capability trait: geometry access, onward delivery, drag callbacks.

use dragline_pointer::event::PointerEvent;
use kurbo::{Point, Size};

use crate::limits::ParentFrame;

/// Capabilities the gesture engine needs from the hosting widget.
///
/// Instead of subclassing a container type, the engine is composed with any
/// host that can report its placement, move it, and hand events on to
/// descendant widgets. All methods are called synchronously from event
/// processing on the UI thread.
pub trait DragHost {
    /// Current top-left corner, in the parent's coordinate space.
    fn origin(&self) -> Point;

    /// Current widget size.
    fn size(&self) -> Size;

    /// Parent content geometry, or `None` while detached.
    ///
    /// Returning `None` degrades confinement to unconstrained; the engine
    /// never treats a missing parent as an error. Hosts that care can log a
    /// warning on their side.
    fn parent_frame(&self) -> Option<ParentFrame>;

    /// Moves the widget to an absolute position.
    fn set_origin(&mut self, origin: Point);

    /// Hands an event to descendant widgets.
    ///
    /// Used both for live forwarding and for deferred replay. The event
    /// must go to descendants only; routing it back into the gesture
    /// engine would re-capture the engine's own deliveries.
    fn deliver_to_descendants(&mut self, event: &PointerEvent);

    /// Called exactly once when a gesture is recognized as a drag.
    fn on_drag_start(&mut self) {}

    /// Called exactly once when a recognized drag ends.
    fn on_drag_end(&mut self) {}
}
