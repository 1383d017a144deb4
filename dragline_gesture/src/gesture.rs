// Copyright 2026 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-vs-forward disambiguation and drag tracking.
//!
//! [`DragGesture`] sits between the host's event dispatch and the widget's
//! descendants. Every pointer event first passes through
//! [`on_intercept`](DragGesture::on_intercept); while a gesture is still
//! ambiguous the engine keeps events captured and buffered, and only once
//! the pointer travels past the touch slop does the gesture become a drag.
//! A gesture that ends without becoming a drag is handed to descendants via
//! deferred replay, with relative timing preserved so their own long-press
//! recognition still works.

use alloc::vec::Vec;

use dragline_pointer::cache::{CaptureSeq, EventCache};
use dragline_pointer::event::{PointerAction, PointerEvent};
use dragline_pointer::replay::{CaptureMode, full_replay_delays};
use dragline_timing::{Scheduler, TaskId};
use kurbo::{Point, Vec2};

use crate::config::GestureConfig;
use crate::constraint::{ConstraintError, DragConstraint};
use crate::host::DragHost;
use crate::limits;

/// Gesture classification state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    /// No drag recognized for the current gesture.
    #[default]
    Idle,
    /// The slop threshold was crossed; the widget tracks the pointer.
    Dragging,
}

/// Per-event interception decision returned by
/// [`DragGesture::on_intercept`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// The widget claims the event; the host should run the touch pass
    /// ([`DragGesture::on_touch`]).
    Intercept,
    /// The event belongs to descendants.
    Forward,
}

/// Deferred work scheduled by the gesture engine.
///
/// Hosts wire their delayed-task facility so that a fired task is passed
/// back into [`DragGesture::on_timer`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReplayTask {
    /// Fired one long-press timeout after a Down. If the gesture is still
    /// ambiguous, the buffered Down is replayed to descendants to seed
    /// their own long-press timer at approximately the right time.
    LongPressProbe,
    /// Delivers one cached event of a full replay.
    Deliver(CaptureSeq),
}

/// The drag gesture engine.
///
/// One instance per draggable widget. The engine owns the gesture state
/// (classification phase, event cache, capture mode, pointer anchors); the
/// hosting widget and the timer facility are passed into each call rather
/// than owned, so the engine composes with any host.
///
/// ## Event flow
///
/// For every incoming pointer event the host calls
/// [`dispatch`](Self::dispatch) (or, on frameworks with a native
/// intercept/handle split, [`on_intercept`](Self::on_intercept) followed by
/// [`on_touch`](Self::on_touch) when the decision was
/// [`Intercept`](Decision::Intercept)). Fired timer tasks go to
/// [`on_timer`](Self::on_timer). All calls happen on the UI thread; no
/// call re-enters another.
#[derive(Debug)]
pub struct DragGesture {
    config: GestureConfig,
    constraint: DragConstraint,
    enabled: bool,
    phase: DragPhase,
    mode: CaptureMode,
    cache: EventCache,
    /// Position of the opening Down; slop displacement is measured from here.
    down: Point,
    /// Position of the last processed event; move deltas are measured from here.
    last: Point,
    long_press_probe: Option<TaskId>,
    /// Pending full-replay deliveries, by cache sequence.
    scheduled: Vec<(CaptureSeq, TaskId)>,
    /// Set when a forwarded event was queued for replay instead of being
    /// handed over live; consumed by [`Self::dispatch`].
    queued_forward: bool,
}

impl DragGesture {
    /// Creates an engine with default [`GestureConfig`], drag enabled, and
    /// the default parent-confined constraint.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GestureConfig::default())
    }

    /// Creates an engine with explicit tuning values.
    #[must_use]
    pub fn with_config(config: GestureConfig) -> Self {
        Self {
            config,
            constraint: DragConstraint::default(),
            enabled: true,
            phase: DragPhase::default(),
            mode: CaptureMode::default(),
            cache: EventCache::new(),
            down: Point::ZERO,
            last: Point::ZERO,
            long_press_probe: None,
            scheduled: Vec::new(),
            queued_forward: false,
        }
    }

    /// The active tuning values.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Whether drag recognition is enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The active constraint mask.
    #[must_use]
    pub fn constraint(&self) -> DragConstraint {
        self.constraint
    }

    /// The current classification phase.
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Returns `true` while a deferred replay is draining the cache.
    #[must_use]
    pub fn is_replaying(&self) -> bool {
        self.mode.is_replaying()
    }

    /// Returns `true` if the most recent [`Forward`](Decision::Forward)
    /// decision queued its event for deferred replay.
    ///
    /// Such an event must not also be delivered to descendants live:
    /// the replay queue owns it. [`dispatch`](Self::dispatch) consults
    /// this automatically; hosts with a native intercept/handle split
    /// check it after [`on_intercept`](Self::on_intercept).
    #[must_use]
    pub fn last_forward_was_queued(&self) -> bool {
        self.queued_forward
    }

    /// Enables or disables drag recognition.
    ///
    /// Disabling empties the event cache and cancels every pending deferred
    /// task, so nothing is delivered to a widget whose gesture handling was
    /// just switched off. It does not force-terminate a drag that was
    /// already confirmed: no [`DragHost::on_drag_end`] fires, and the next
    /// Down starts a fresh gesture.
    pub fn set_enabled<S: Scheduler<ReplayTask>>(&mut self, enabled: bool, scheduler: &mut S) {
        self.enabled = enabled;
        if !enabled {
            self.clear_gesture_state(scheduler);
        }
    }

    /// Replaces the active constraint mask.
    ///
    /// Fails for the contradictory confined-and-unconstrained combination;
    /// on failure the previous constraint stays active. A change made
    /// mid-drag takes effect on the next Move; the current position is not
    /// re-clamped retroactively.
    pub fn set_constraint(&mut self, mask: DragConstraint) -> Result<(), ConstraintError> {
        self.constraint = mask.validate()?;
        Ok(())
    }

    /// Decides whether to intercept `event` or let it flow to descendants.
    ///
    /// Events arriving while disabled, or while a replay is draining,
    /// bypass gesture logic entirely and must be delivered to descendants
    /// live. An Up/Cancel that ends a still-ambiguous gesture also returns
    /// [`Forward`](Decision::Forward), but the event has already been queued
    /// for deferred replay along with its cached siblings, and delivering it
    /// again would duplicate it. [`dispatch`](Self::dispatch) handles both
    /// cases; hosts driving this method directly must do the same.
    #[must_use]
    pub fn on_intercept<S: Scheduler<ReplayTask>>(
        &mut self,
        event: &PointerEvent,
        scheduler: &mut S,
    ) -> Decision {
        self.queued_forward = false;
        if !self.enabled || self.mode.is_replaying() {
            return Decision::Forward;
        }

        match event.action {
            PointerAction::Down => {
                // A gesture starts: drop anything left over from the
                // previous one, including its deferred tasks.
                self.clear_gesture_state(scheduler);
                self.phase = DragPhase::Idle;
                self.cache.append(*event);
                self.down = event.position;
                self.last = event.position;
                self.long_press_probe = Some(
                    scheduler.schedule_after(
                        self.config.long_press_timeout_ms,
                        ReplayTask::LongPressProbe,
                    ),
                );
                Decision::Intercept
            }
            PointerAction::Up | PointerAction::Cancel => {
                if self.phase == DragPhase::Idle {
                    // The gesture never became a drag: the descendants get
                    // the whole buffered sequence, this closing event
                    // included.
                    self.cache.append(*event);
                    self.last = event.position;
                    self.schedule_full_replay(scheduler);
                    self.queued_forward = true;
                    Decision::Forward
                } else {
                    // The drag consumed the gesture.
                    self.last = event.position;
                    self.clear_gesture_state(scheduler);
                    Decision::Intercept
                }
            }
            PointerAction::Move => {
                // Still ambiguous: keep the event captured and buffered.
                self.cache.append(*event);
                Decision::Intercept
            }
            PointerAction::Other => {
                // Unmodeled actions stay captured but are never buffered,
                // so a replay hands descendants only events it understands.
                Decision::Intercept
            }
        }
    }

    /// Processes an intercepted event: slop detection, drag promotion, and
    /// position updates.
    ///
    /// Returns `true` if the event was handled. Moves from secondary
    /// pointers are swallowed without any state change so that a second
    /// finger cannot make the widget jump.
    pub fn on_touch<H: DragHost, S: Scheduler<ReplayTask>>(
        &mut self,
        event: &PointerEvent,
        host: &mut H,
        scheduler: &mut S,
    ) -> bool {
        if !self.enabled || self.mode.is_replaying() {
            return false;
        }

        match event.action {
            PointerAction::Move => {
                if !event.is_primary() {
                    return true;
                }
                let delta = event.position - self.last;
                self.last = event.position;

                if self.phase == DragPhase::Idle {
                    let travel = self.last - self.down;
                    if travel.x.abs() > self.config.touch_slop
                        || travel.y.abs() > self.config.touch_slop
                    {
                        self.phase = DragPhase::Dragging;
                        self.clear_gesture_state(scheduler);
                        host.on_drag_start();
                    }
                }
                if self.phase == DragPhase::Dragging {
                    self.apply_drag(host, delta);
                }
                true
            }
            PointerAction::Up | PointerAction::Cancel => {
                self.last = event.position;
                if self.phase == DragPhase::Dragging {
                    self.phase = DragPhase::Idle;
                    host.on_drag_end();
                }
                true
            }
            PointerAction::Down | PointerAction::Other => true,
        }
    }

    /// Runs a deferred task previously handed to the scheduler.
    pub fn on_timer<H: DragHost>(&mut self, task: ReplayTask, host: &mut H) {
        match task {
            ReplayTask::LongPressProbe => {
                self.long_press_probe = None;
                if self.phase != DragPhase::Idle || self.mode.is_replaying() {
                    return;
                }
                // Replay just the buffered Down so the descendant's own
                // long-press timer starts ticking; the rest of the gesture
                // stays captured. The momentary replay guard keeps a
                // synchronous echo of this delivery out of the cache.
                if let Some((_, down)) = self.cache.take_first() {
                    self.mode.begin(1);
                    host.deliver_to_descendants(&down);
                    self.mode.finish_one();
                }
            }
            ReplayTask::Deliver(seq) => {
                self.scheduled.retain(|(s, _)| *s != seq);
                if let Some(event) = self.cache.remove(seq) {
                    host.deliver_to_descendants(&event);
                    self.mode.finish_one();
                }
            }
        }
    }

    /// Routes one event through interception and handling, mirroring a
    /// host dispatch loop.
    ///
    /// Returns `true` if the widget claimed the event. Forwarded events are
    /// delivered to descendants exactly once: live when they bypassed
    /// gesture logic, or via the replay queue when they closed an ambiguous
    /// gesture.
    pub fn dispatch<H: DragHost, S: Scheduler<ReplayTask>>(
        &mut self,
        event: &PointerEvent,
        host: &mut H,
        scheduler: &mut S,
    ) -> bool {
        match self.on_intercept(event, scheduler) {
            Decision::Intercept => {
                self.on_touch(event, host, scheduler);
                true
            }
            Decision::Forward => {
                if !core::mem::take(&mut self.queued_forward) {
                    host.deliver_to_descendants(event);
                }
                false
            }
        }
    }

    /// Applies a drag delta through axis gates and confinement clamps.
    fn apply_drag<H: DragHost>(&mut self, host: &mut H, delta: Vec2) {
        let origin = host.origin();
        let size = host.size();
        let frame = if self.constraint.confined_to_parent() {
            host.parent_frame()
        } else {
            None
        };

        let mut target = origin;
        if self.constraint.horizontal_allowed() {
            target.x = limits::clamp_x(origin.x + delta.x, size.width, frame.as_ref());
        }
        if self.constraint.vertical_allowed() {
            target.y = limits::clamp_y(origin.y + delta.y, size.height, frame.as_ref());
        }
        if target != origin {
            host.set_origin(target);
        }
    }

    /// Schedules deferred delivery of the whole cache, in capture order.
    fn schedule_full_replay<S: Scheduler<ReplayTask>>(&mut self, scheduler: &mut S) {
        // The long-press probe and a full replay are mutually exclusive for
        // one gesture.
        if let Some(id) = self.long_press_probe.take() {
            scheduler.cancel(id);
        }
        let plan: Vec<(CaptureSeq, u64)> =
            full_replay_delays(&self.cache, self.config.long_press_timeout_ms).collect();
        self.mode.begin(plan.len());
        for (seq, delay_ms) in plan {
            let id = scheduler.schedule_after(delay_ms, ReplayTask::Deliver(seq));
            self.scheduled.push((seq, id));
        }
    }

    /// Empties the cache and cancels every deferred task that references it.
    fn clear_gesture_state<S: Scheduler<ReplayTask>>(&mut self, scheduler: &mut S) {
        if let Some(id) = self.long_press_probe.take() {
            scheduler.cancel(id);
        }
        for seq in self.cache.clear() {
            if let Some(pos) = self.scheduled.iter().position(|(s, _)| *s == seq) {
                let (_, id) = self.scheduled.remove(pos);
                scheduler.cancel(id);
            }
        }
        debug_assert!(
            self.scheduled.is_empty(),
            "every scheduled delivery must reference a cached entry"
        );
        self.scheduled.clear();
        self.mode.reset();
    }
}

impl Default for DragGesture {
    fn default() -> Self {
        Self::new()
    }
}
