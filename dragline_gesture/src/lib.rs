// Copyright 2026 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dragline Gesture: drag-vs-forward disambiguation for a draggable container.
//!
//! A draggable container competes with its own descendants for pointer
//! input: a press might be the start of a drag, or it might be a tap or
//! long-press meant for a child widget. This crate owns that decision and
//! everything downstream of it:
//!
//! - [`DragGesture`]: the per-widget engine. It intercepts ambiguous
//!   events, promotes a gesture to a drag once the pointer crosses the
//!   touch slop, moves the widget while dragging, and, when the gesture
//!   was *not* a drag, replays the buffered events to descendants with
//!   their relative timing preserved.
//! - [`DragConstraint`]: bitmask of movement constraints (axis locks,
//!   parent confinement), validated by [`set_constraint`](DragGesture::set_constraint).
//! - [`limits`]: the pure clamping helpers behind parent confinement.
//! - [`DragHost`]: the capability trait the engine is composed with to
//!   query/mutate geometry, deliver events onward, and observe drag
//!   start/end.
//!
//! The engine never reads a clock and never owns a timer thread. Hosts
//! inject a [`Scheduler`](dragline_timing::Scheduler) (or reuse
//! [`TimerQueue`](dragline_timing::TimerQueue)) and route fired
//! [`ReplayTask`]s back into [`DragGesture::on_timer`]; all timing derives
//! from host-supplied event timestamps, which keeps slop detection,
//! long-press seeding, and replay bursts deterministic under test.
//!
//! ## Minimal example
//!
//! ```
//! use dragline_gesture::{DragGesture, DragHost, ParentFrame};
//! use dragline_pointer::event::{PointerAction, PointerEvent};
//! use dragline_timing::TimerQueue;
//! use kurbo::{Insets, Point, Size};
//!
//! struct Widget {
//!     origin: Point,
//!     delivered: Vec<PointerEvent>,
//! }
//!
//! impl DragHost for Widget {
//!     fn origin(&self) -> Point {
//!         self.origin
//!     }
//!     fn size(&self) -> Size {
//!         Size::new(40.0, 40.0)
//!     }
//!     fn parent_frame(&self) -> Option<ParentFrame> {
//!         Some(ParentFrame::new(Size::new(400.0, 400.0), Insets::ZERO))
//!     }
//!     fn set_origin(&mut self, origin: Point) {
//!         self.origin = origin;
//!     }
//!     fn deliver_to_descendants(&mut self, event: &PointerEvent) {
//!         self.delivered.push(*event);
//!     }
//! }
//!
//! let mut widget = Widget {
//!     origin: Point::new(100.0, 100.0),
//!     delivered: Vec::new(),
//! };
//! let mut timers = TimerQueue::new();
//! let mut gesture = DragGesture::new();
//!
//! // Press, then move well past the touch slop: the gesture becomes a
//! // drag and the widget tracks the pointer.
//! let down = PointerEvent::new(PointerAction::Down, Point::new(120.0, 120.0), 0);
//! let drag = PointerEvent::new(PointerAction::Move, Point::new(150.0, 120.0), 16);
//! let up = PointerEvent::new(PointerAction::Up, Point::new(150.0, 120.0), 32);
//! gesture.dispatch(&down, &mut widget, &mut timers);
//! gesture.dispatch(&drag, &mut widget, &mut timers);
//! gesture.dispatch(&up, &mut widget, &mut timers);
//!
//! assert_eq!(widget.origin, Point::new(130.0, 100.0));
//! // The drag consumed the gesture: descendants saw none of it.
//! assert!(widget.delivered.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod constraint;
pub mod gesture;
pub mod host;
pub mod limits;

pub use config::GestureConfig;
pub use constraint::{ConstraintError, DragConstraint};
pub use gesture::{Decision, DragGesture, DragPhase, ReplayTask};
pub use host::DragHost;
pub use limits::ParentFrame;
