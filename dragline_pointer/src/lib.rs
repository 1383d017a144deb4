// Copyright 2026 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dragline Pointer: pointer event model, capture cache, and replay planning.
//!
//! A draggable container cannot know, at the moment a pointer goes down,
//! whether the gesture will become a drag or belongs to a descendant widget.
//! Until that is decided it must hold on to every event it saw, and, if the
//! gesture turns out *not* to be a drag, hand the whole sequence to its
//! descendants with timing close enough to the original that their own
//! long-press recognition still works.
//!
//! This crate provides the pieces of that "transparent interception" story
//! that are independent of the gesture decision itself:
//!
//! - [`event`]: the immutable [`PointerEvent`](event::PointerEvent) value
//!   type, with host-supplied capture timestamps.
//! - [`cache`]: an ordered buffer of captured events keyed by a
//!   monotonically increasing [`CaptureSeq`](cache::CaptureSeq), so deferred
//!   replay tasks can remove entries without relying on reference identity.
//! - [`replay`]: the [`CaptureMode`](replay::CaptureMode) live/replaying
//!   tag and the pure delay computation for a full cache replay.
//!
//! The gesture decision itself (drag-vs-forward classification, slop,
//! constraints) lives in `dragline_gesture`; deferred-task scheduling lives
//! in `dragline_timing`.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use dragline_pointer::cache::EventCache;
//! use dragline_pointer::event::{PointerAction, PointerEvent};
//! use dragline_pointer::replay::full_replay_delays;
//!
//! let mut cache = EventCache::new();
//! cache.append(PointerEvent::new(PointerAction::Down, Point::new(5.0, 5.0), 1_000));
//! cache.append(PointerEvent::new(PointerAction::Up, Point::new(6.0, 5.0), 1_080));
//!
//! // Plan a full replay: delays are relative to the first captured event.
//! let plan: Vec<u64> = full_replay_delays(&cache, 500).map(|(_, d)| d).collect();
//! assert_eq!(plan, vec![0, 80]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod cache;
pub mod event;
pub mod replay;
