// Copyright 2026 the Dragline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure clamping of candidate positions against the parent's content box.

use kurbo::{Insets, Size};

/// Parent geometry needed for confinement: outer size plus padding.
///
/// `padding` follows kurbo's [`Insets`] convention: `x0`/`y0` are the
/// left/top insets, `x1`/`y1` the right/bottom ones.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ParentFrame {
    /// Outer size of the parent.
    pub size: Size,
    /// Padding carving the content box out of the outer size.
    pub padding: Insets,
}

impl ParentFrame {
    /// Creates a frame from outer size and padding.
    #[must_use]
    pub fn new(size: Size, padding: Insets) -> Self {
        Self { size, padding }
    }
}

/// Clamps a candidate X so a widget of `own_width` stays inside the frame's
/// padded content box.
///
/// With no frame (detached parent) the candidate passes through unchanged:
/// confinement degrades to unconstrained rather than failing. If the
/// content box is narrower than the widget, the left padding edge wins.
#[must_use]
pub fn clamp_x(candidate: f64, own_width: f64, frame: Option<&ParentFrame>) -> f64 {
    let Some(frame) = frame else {
        return candidate;
    };
    let min = frame.padding.x0;
    let max = frame.size.width - frame.padding.x1 - own_width;
    candidate.min(max).max(min)
}

/// Clamps a candidate Y so a widget of `own_height` stays inside the frame's
/// padded content box.
///
/// Symmetric to [`clamp_x`]; the top padding edge wins when the content box
/// is shorter than the widget.
#[must_use]
pub fn clamp_y(candidate: f64, own_height: f64, frame: Option<&ParentFrame>) -> f64 {
    let Some(frame) = frame else {
        return candidate;
    };
    let min = frame.padding.y0;
    let max = frame.size.height - frame.padding.y1 - own_height;
    candidate.min(max).max(min)
}
