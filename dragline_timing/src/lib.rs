// Copyright 2026 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dragline Timing: host-agnostic deferred-task queue primitives.
//!
//! UI hosts usually own an ambient "run this later" facility. The gesture
//! engine instead depends on an explicit [`Scheduler`] so timing-sensitive
//! behavior (long-press probes, replay bursts) stays deterministic under
//! test and portable across hosts:
//!
//! - Hosts with their own delayed-task facility implement [`Scheduler`]
//!   over it, mapping [`TaskId`] to their native cancellation handle.
//! - Hosts without one (and unit tests) use [`TimerQueue`], a
//!   single-threaded queue ordered by fire time. The owner advances its
//!   clock explicitly and dispatches whatever came due.
//!
//! Everything here runs on one logical (UI) thread; there is no locking and
//! no wall clock. "Now" is whatever millisecond value the owner last passed
//! to [`TimerQueue::advance_to`].
//!
//! ## Minimal example
//!
//! ```
//! use dragline_timing::{Scheduler, TimerQueue};
//!
//! let mut queue = TimerQueue::new();
//! let a = queue.schedule_after(100, "probe");
//! let b = queue.schedule_after(30, "deliver");
//!
//! // Nothing is due yet.
//! assert!(queue.advance_to(10).is_empty());
//!
//! // Cancellation removes a task before it fires.
//! assert!(queue.cancel(a));
//!
//! // Draining returns due tasks in deadline order.
//! assert_eq!(queue.advance_to(200), vec!["deliver"]);
//! let _ = b;
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

/// Opaque handle for a scheduled task, used for cancellation.
///
/// Ids are unique per [`Scheduler`] instance and never reused.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

/// Deferred single-shot task scheduling.
///
/// `schedule_after` must never run the task synchronously, even for a zero
/// delay: callers rely on scheduling being a pure enqueue so that event
/// processing and deferred delivery cannot interleave within one call.
pub trait Scheduler<T> {
    /// Enqueues `task` to fire once, `delay_ms` milliseconds from now.
    fn schedule_after(&mut self, delay_ms: u64, task: T) -> TaskId;

    /// Cancels a pending task. Returns `true` if it had not yet fired.
    fn cancel(&mut self, id: TaskId) -> bool;
}

#[derive(Clone, Debug)]
struct Entry<T> {
    fire_at_ms: u64,
    id: TaskId,
    task: T,
}

/// Single-threaded timer queue ordered by fire time.
///
/// Tasks with equal deadlines fire in the order they were scheduled, so a
/// replay plan scheduled in capture order can never invert delivery even
/// when delay capping produces equal deadlines.
///
/// The queue has no thread, no wall clock, and never fires on its own: the
/// owner calls [`advance_to`](Self::advance_to) from its event loop (or its
/// test) and dispatches the returned tasks.
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    now_ms: u64,
    next_id: u64,
    pending: Vec<Entry<T>>,
}

impl<T> TimerQueue<T> {
    /// Creates an empty queue with its clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::with_now(0)
    }

    /// Creates an empty queue with its clock at `now_ms`.
    #[must_use]
    pub fn with_now(now_ms: u64) -> Self {
        Self {
            now_ms,
            next_id: 0,
            pending: Vec::new(),
        }
    }

    /// The queue's current notion of "now", in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of tasks waiting to fire.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if no tasks are waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// The earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.iter().map(|e| e.fire_at_ms).min()
    }

    /// Moves the clock forward to `now_ms` and returns every task that came
    /// due, ordered by deadline with FIFO tie-breaking.
    ///
    /// The clock never moves backwards; an earlier `now_ms` drains nothing.
    pub fn advance_to(&mut self, now_ms: u64) -> Vec<T> {
        if now_ms > self.now_ms {
            self.now_ms = now_ms;
        }
        let now_ms = self.now_ms;

        let mut due: Vec<Entry<T>> = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].fire_at_ms <= now_ms {
                due.push(self.pending.remove(i));
            } else {
                i += 1;
            }
        }
        // TaskIds are monotonic, so sorting on (deadline, id) is FIFO among
        // equal deadlines.
        due.sort_by_key(|e| (e.fire_at_ms, e.id));
        due.into_iter().map(|e| e.task).collect()
    }

    /// Drops every pending task without firing it.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> for TimerQueue<T> {
    fn schedule_after(&mut self, delay_ms: u64, task: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.pending.push(Entry {
            fire_at_ms: self.now_ms.saturating_add(delay_ms),
            id,
            task,
        });
        id
    }

    fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|e| e.id != id);
        self.pending.len() != before
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn fires_in_deadline_order() {
        let mut queue = TimerQueue::new();
        queue.schedule_after(300, "c");
        queue.schedule_after(100, "a");
        queue.schedule_after(200, "b");

        assert_eq!(queue.advance_to(1_000), vec!["a", "b", "c"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn equal_deadlines_fire_in_schedule_order() {
        let mut queue = TimerQueue::new();
        queue.schedule_after(500, 1);
        queue.schedule_after(500, 2);
        queue.schedule_after(500, 3);

        assert_eq!(queue.advance_to(500), vec![1, 2, 3]);
    }

    #[test]
    fn partial_advance_leaves_later_tasks_pending() {
        let mut queue = TimerQueue::new();
        queue.schedule_after(100, "early");
        queue.schedule_after(900, "late");

        assert_eq!(queue.advance_to(100), vec!["early"]);
        assert_eq!(queue.pending(), 1);
        assert_eq!(queue.next_deadline(), Some(900));
        assert_eq!(queue.advance_to(900), vec!["late"]);
    }

    #[test]
    fn delays_are_relative_to_the_current_clock() {
        let mut queue = TimerQueue::with_now(1_000);
        queue.schedule_after(50, "x");
        assert!(queue.advance_to(1_049).is_empty());
        assert_eq!(queue.advance_to(1_050), vec!["x"]);
    }

    #[test]
    fn cancel_removes_a_task_before_it_fires() {
        let mut queue = TimerQueue::new();
        let id = queue.schedule_after(100, "x");

        assert!(queue.cancel(id));
        assert!(!queue.cancel(id), "second cancel must report nothing left");
        assert!(queue.advance_to(1_000).is_empty());
    }

    #[test]
    fn clock_never_moves_backwards() {
        let mut queue: TimerQueue<&str> = TimerQueue::new();
        queue.advance_to(500);
        queue.advance_to(100);
        assert_eq!(queue.now_ms(), 500);
    }

    #[test]
    fn clear_drops_all_pending_tasks() {
        let mut queue = TimerQueue::new();
        queue.schedule_after(10, "a");
        queue.schedule_after(20, "b");
        queue.clear();
        assert!(queue.advance_to(100).is_empty());
    }
}
