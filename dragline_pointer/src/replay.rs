// Copyright 2026 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replay planning: the live/replaying capture tag and delay computation for
//! deferred delivery of a cached gesture.

use crate::cache::{CaptureSeq, EventCache};

/// Lower bound on the replay delay cap, in milliseconds.
///
/// A full replay preserves each event's offset from the first captured
/// event, but caps it at `max(long_press_timeout, DELAY_CAP_FLOOR_MS)` so a
/// long-held gesture cannot produce an excessively delayed replay burst.
/// The floor keeps the cap above the long-press window even on hosts
/// configured with a very short timeout.
pub const DELAY_CAP_FLOOR_MS: u64 = 500;

/// Whether pointer events are being captured live or replayed to descendants.
///
/// While a replay is in flight, fresh input must flow straight to
/// descendants rather than re-entering capture; otherwise the engine would
/// re-buffer its own deferred deliveries. Representing this as a tagged
/// state with the outstanding delivery count (instead of a bare flag next
/// to the cache) makes an inconsistent flag/cache pair unrepresentable.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum CaptureMode {
    /// Events flow through the gesture engine normally.
    #[default]
    Live,
    /// A cache drain is in flight.
    Replaying {
        /// Scheduled deliveries not yet dispatched.
        pending: usize,
    },
}

impl CaptureMode {
    /// Returns `true` while a replay is in flight.
    #[must_use]
    pub fn is_replaying(self) -> bool {
        matches!(self, Self::Replaying { .. })
    }

    /// Enters replay mode with `pending` outstanding deliveries.
    ///
    /// Beginning with zero pending deliveries stays [`Live`](Self::Live):
    /// there is nothing to guard against.
    pub fn begin(&mut self, pending: usize) {
        *self = if pending == 0 {
            Self::Live
        } else {
            Self::Replaying { pending }
        };
    }

    /// Records one completed delivery, returning to [`Live`](Self::Live)
    /// once the replay has drained.
    pub fn finish_one(&mut self) {
        debug_assert!(
            self.is_replaying(),
            "finish_one outside of an active replay"
        );
        if let Self::Replaying { pending } = *self {
            *self = if pending <= 1 {
                Self::Live
            } else {
                Self::Replaying {
                    pending: pending - 1,
                }
            };
        }
    }

    /// Abandons any in-flight replay and returns to [`Live`](Self::Live).
    pub fn reset(&mut self) {
        *self = Self::Live;
    }
}

/// Plans the deferred-delivery schedule for a full cache replay.
///
/// Yields `(seq, delay_ms)` pairs in capture order. Each entry's delay is
/// its offset from the first cached event's capture time, capped at
/// `max(long_press_timeout_ms, DELAY_CAP_FLOOR_MS)`. Capping can give a
/// later event the same delay as an earlier one; callers must schedule the
/// plan in the yielded order so equal deadlines cannot invert delivery.
pub fn full_replay_delays(
    cache: &EventCache,
    long_press_timeout_ms: u64,
) -> impl Iterator<Item = (CaptureSeq, u64)> {
    let cap = long_press_timeout_ms.max(DELAY_CAP_FLOOR_MS);
    let head_time = cache.first().map_or(0, |(_, ev)| ev.time_ms);
    cache
        .iter()
        .map(move |(seq, ev)| (seq, ev.time_ms.saturating_sub(head_time).min(cap)))
}
