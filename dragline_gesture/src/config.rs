// Copyright 2026 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture tuning values.

/// Tuning values normally derived from the platform's view configuration.
///
/// The defaults match common platform conventions (Android's
/// `ViewConfiguration`: an 8dp touch slop and a 500ms long-press timeout)
/// and work well on typical desktop/mobile displays. Hosts with
/// platform-derived values inject their own.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GestureConfig {
    /// Minimum displacement from the down position, on either axis and in
    /// raw coordinate units, that turns an ambiguous gesture into a drag.
    pub touch_slop: f64,
    /// Hold duration after which a press counts as a long press, in
    /// milliseconds. Also bounds replay delays; see
    /// [`full_replay_delays`](dragline_pointer::replay::full_replay_delays).
    pub long_press_timeout_ms: u64,
}

impl GestureConfig {
    /// Creates a configuration from explicit platform values.
    #[must_use]
    pub fn new(touch_slop: f64, long_press_timeout_ms: u64) -> Self {
        Self {
            touch_slop,
            long_press_timeout_ms,
        }
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            touch_slop: 8.0,
            long_press_timeout_ms: 500,
        }
    }
}
